//! The root path only points visitors at the static front-end.

use anyhow::Result;
use reqwest::StatusCode;

use crate::helpers::TestApp;

#[tokio::test]
async fn root_redirects_to_static_index() -> Result<()> {
    let TestApp {
        addr, http_client, ..
    } = TestApp::spawn().await?;

    let res = http_client.get(format!("http://{addr}/")).send().await?;

    assert_eq!(res.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(
        res.headers()
            .get("location")
            .and_then(|loc| loc.to_str().ok()),
        Some("/static/index.html")
    );

    Ok(())
}
