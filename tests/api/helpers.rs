//!*
use std::{
    net::{IpAddr, Ipv4Addr, SocketAddr},
    sync::OnceLock,
};

use anyhow::Result;
use mergington::{init_dbg_tracing, model::ModelManager, App, AppState};
use reqwest::redirect::Policy;
use tokio::net::TcpListener;
use tracing::info;

/// Trying to bind *port 0* will trigger an OS scan for an available port
/// which will then be bound to the application.
const TEST_SOCK_ADDR: SocketAddr = SocketAddr::new(IpAddr::V4(Ipv4Addr::new(127, 0, 0, 1)), 0);

pub struct TestApp {
    pub addr: SocketAddr,
    pub mm: ModelManager,
    pub http_client: reqwest::Client,
}

fn _init_test_subscriber() {
    static SUBSCRIBER: OnceLock<()> = OnceLock::new();
    SUBSCRIBER.get_or_init(|| {
        init_dbg_tracing();
    });
}

impl TestApp {
    /// Spawns the app on a free local port.
    ///
    /// The returned client does not follow redirects, so the root redirect
    /// contract stays observable. Every spawned app gets its own freshly
    /// seeded registry.
    pub async fn spawn() -> Result<Self> {
        // _init_test_subscriber();

        let mm = ModelManager::init();
        let app_state = AppState::new(mm.clone());

        let listener = TcpListener::bind(&TEST_SOCK_ADDR).await?;
        let addr = listener.local_addr()?;
        info!("Listening on {addr}");

        tokio::spawn(mergington::serve(App::new(app_state, listener)));

        let http_client = reqwest::Client::builder()
            .redirect(Policy::none())
            .build()?;

        Ok(TestApp {
            addr,
            mm,
            http_client,
        })
    }

    pub async fn get_activities(&self) -> Result<reqwest::Response> {
        let res = self
            .http_client
            .get(format!("http://{}/activities", self.addr))
            .send()
            .await?;
        Ok(res)
    }

    /// The current registry as the wire-format JSON map.
    pub async fn activities_json(&self) -> Result<serde_json::Value> {
        Ok(self.get_activities().await?.json().await?)
    }

    /// `activity_path` is the (possibly percent-encoded) path segment.
    pub async fn post_signup(
        &self,
        activity_path: &str,
        email: Option<&str>,
    ) -> Result<reqwest::Response> {
        let mut req = self.http_client.post(format!(
            "http://{}/activities/{activity_path}/signup",
            self.addr
        ));
        if let Some(email) = email {
            req = req.query(&[("email", email)]);
        }

        Ok(req.send().await?)
    }

    pub async fn delete_signup(
        &self,
        activity_path: &str,
        email: Option<&str>,
    ) -> Result<reqwest::Response> {
        let mut req = self.http_client.delete(format!(
            "http://{}/activities/{activity_path}/signup",
            self.addr
        ));
        if let Some(email) = email {
            req = req.query(&[("email", email)]);
        }

        Ok(req.send().await?)
    }
}
