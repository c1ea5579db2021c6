pub mod app;
pub mod config;
mod error;
pub mod model;
pub mod utils;
pub mod web;

// re-export
pub use app::{App, AppState};
pub use error::{Error, Result};
pub use web::serve::serve;

use tracing_subscriber::{fmt::format::FmtSpan, EnvFilter};

/// Compact console subscriber for local development.
pub fn init_dbg_tracing() {
    tracing_subscriber::fmt()
        .without_time()
        .with_span_events(FmtSpan::CLOSE)
        .with_target(false)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .compact()
        .init();
}

pub fn init_production_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}
