//! Contains all the routes that this application can handle.

mod activities;

use axum::{
    http::StatusCode,
    response::Redirect,
    routing::{get, post},
    Router,
};

use crate::AppState;

async fn health_check() -> StatusCode {
    StatusCode::OK
}

/// The front-end lives on the static file server; the root only points at it.
async fn root() -> Redirect {
    Redirect::temporary("/static/index.html")
}

/// All the routes of the server
pub fn routes(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .merge(activity_routes(app_state))
        .route("/health-check", get(health_check))
}

/// ACTIVITIES - the registry listing and the per-activity signup routes
fn activity_routes(app_state: AppState) -> Router {
    Router::new()
        .route("/activities", get(activities::activities_list))
        .route(
            "/activities/{activity_name}/signup",
            post(activities::signup).delete(activities::unregister),
        )
        .with_state(app_state)
}
