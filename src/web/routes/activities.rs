use std::collections::BTreeMap;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde_json::{json, Value};
use tracing::info;

use crate::{
    model::Activity,
    web::{
        types::{EmailQuery, ParticipantEmail},
        Error, WebResult,
    },
    AppState,
};

/// The full registry, activity name mapped to its record.
pub async fn activities_list(
    State(app_state): State<AppState>,
) -> Json<BTreeMap<String, Activity>> {
    Json(app_state.model_mgr.activities().await)
}

#[tracing::instrument(name = "Signing up a student", skip(app_state, query))]
pub async fn signup(
    State(app_state): State<AppState>,
    Path(activity_name): Path<String>,
    Query(query): Query<EmailQuery>,
) -> WebResult<Json<Value>> {
    let email = ParticipantEmail::parse(query.email.ok_or(Error::QueryMissingEmail)?)?;

    app_state
        .model_mgr
        .signup(&activity_name, email.as_ref())
        .await?;
    info!("SUCCESS");

    Ok(Json(json!({
        "message": format!("Signed up {email} for {activity_name}"),
    })))
}

#[tracing::instrument(name = "Unregistering a student", skip(app_state, query))]
pub async fn unregister(
    State(app_state): State<AppState>,
    Path(activity_name): Path<String>,
    Query(query): Query<EmailQuery>,
) -> WebResult<Json<Value>> {
    let email = ParticipantEmail::parse(query.email.ok_or(Error::QueryMissingEmail)?)?;

    app_state
        .model_mgr
        .unregister(&activity_name, email.as_ref())
        .await?;
    info!("SUCCESS");

    Ok(Json(json!({
        "message": format!("Unregistered {email} from {activity_name}"),
    })))
}
