use std::sync::Arc;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use strum_macros::AsRefStr;

use crate::{model, utils::error_chain_fmt};

pub type WebResult<T> = core::result::Result<T, Error>;

#[derive(AsRefStr, thiserror::Error)]
pub enum Error {
    #[error("required query parameter 'email' was not provided")]
    QueryMissingEmail,

    #[error("data parsing error: {0}")]
    DataParsing(#[from] super::types::DataParsingError),
    #[error("model error: {0}")]
    Model(#[from] model::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl Error {
    /// Splits an error into the status code and the message the client is
    /// allowed to see. Anything unlisted is an opaque 500.
    pub fn status_code_and_client_error(&self) -> (StatusCode, ClientError) {
        use ClientError::*;

        match self {
            Error::Model(model::Error::ActivityNotFound) => {
                (StatusCode::NOT_FOUND, ActivityNotFound)
            }
            Error::Model(model::Error::NotSignedUp) => (StatusCode::NOT_FOUND, StudentNotSignedUp),
            Error::Model(model::Error::AlreadySignedUp) => {
                (StatusCode::BAD_REQUEST, StudentAlreadySignedUp)
            }
            Error::QueryMissingEmail | Error::DataParsing(_) => {
                (StatusCode::UNPROCESSABLE_ENTITY, MissingEmail)
            }
            _ => (StatusCode::INTERNAL_SERVER_ERROR, ServiceError),
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        tracing::debug!("{:<12} - into_response(Error: {self:?})", "INTO_RESP");

        // Construct a response
        let mut res = StatusCode::INTERNAL_SERVER_ERROR.into_response();

        // Insert the Error into response so that it can be retrieved later.
        res.extensions_mut().insert(Arc::new(self));

        res
    }
}

/// The client-facing half of an error. The `Display` output is the exact
/// `detail` string sent on the wire.
#[derive(Debug, AsRefStr, derive_more::Display)]
pub enum ClientError {
    #[display("Activity not found")]
    ActivityNotFound,
    #[display("Student not signed up for this activity")]
    StudentNotSignedUp,
    #[display("Student already signed up for this activity")]
    StudentAlreadySignedUp,
    #[display("Query parameter 'email' is required")]
    MissingEmail,
    #[display("Service Error!")]
    ServiceError,
}
