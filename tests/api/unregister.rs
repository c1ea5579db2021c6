use anyhow::Result;
use reqwest::StatusCode;

use crate::helpers::TestApp;

#[tokio::test]
async fn unregister_removes_the_participant() -> Result<()> {
    let app = TestApp::spawn().await?;
    let email = "john@mergington.edu";

    let res = app.delete_signup("Gym%20Class", Some(email)).await?;

    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await?;
    assert_eq!(
        body["message"],
        format!("Unregistered {email} from Gym Class")
    );

    let activities = app.activities_json().await?;
    assert!(!activities["Gym Class"]["participants"]
        .as_array()
        .unwrap()
        .contains(&serde_json::json!(email)));

    Ok(())
}

#[tokio::test]
async fn unregister_unknown_activity_404() -> Result<()> {
    let app = TestApp::spawn().await?;

    let res = app
        .delete_signup("Unknown%20Activity", Some("student@mergington.edu"))
        .await?;

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = res.json().await?;
    assert_eq!(body["detail"], "Activity not found");

    Ok(())
}

#[tokio::test]
async fn unregister_missing_participant_404() -> Result<()> {
    let app = TestApp::spawn().await?;

    let res = app
        .delete_signup("Chess%20Club", Some("not-signed-up@mergington.edu"))
        .await?;

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = res.json().await?;
    assert_eq!(body["detail"], "Student not signed up for this activity");

    Ok(())
}

#[tokio::test]
async fn unregister_missing_email_422() -> Result<()> {
    let app = TestApp::spawn().await?;

    let res = app.delete_signup("Chess%20Club", None).await?;

    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);

    Ok(())
}
