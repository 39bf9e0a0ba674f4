use std::fmt;

use http::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Payload for errors in the client's input. Each message describes one
/// problem with the request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Error)]
#[error("{}", error_messages.join("; "))]
pub struct ValidationError {
    pub error_messages: Vec<String>,
}

impl ValidationError {
    pub fn new<S: Into<String>>(message: S) -> Self {
        Self { error_messages: vec![message.into()] }
    }

    pub fn is_empty(&self) -> bool {
        self.error_messages.is_empty()
    }
}

/// Error type for routes that have no domain specific failures
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Nothing {}

impl fmt::Display for Nothing {
    fn fmt(&self, _f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {}
    }
}

impl std::error::Error for Nothing {}

#[derive(Debug, Clone, Serialize, Deserialize, Error)]
pub enum ServerError<T> {
    /// A typed failure declared with `response_error!`
    #[error("{inner}")]
    Inner {
        #[serde(with = "http_serde::status_code")]
        code: StatusCode,
        inner: T,
    },
    #[error("{inner}")]
    Validation { inner: ValidationError },
    #[error("{message}")]
    Unauthorized { message: String },
    #[error("{message}")]
    NotFound { message: String },
    #[error("Something went wrong: {message}")]
    Other { message: String },
}

impl<T> ServerError<T> {
    pub fn code(&self) -> StatusCode {
        match self {
            ServerError::Inner { code, .. } => *code,
            ServerError::Validation { .. } => StatusCode::BAD_REQUEST,
            ServerError::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            ServerError::NotFound { .. } => StatusCode::NOT_FOUND,
            ServerError::Other { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn other<S: Into<String>>(message: S) -> Self {
        ServerError::Other { message: message.into() }
    }

    /// Re-types an error whose domain payload is [`Nothing`]
    pub fn from_nothing(err: ServerError<Nothing>) -> Self {
        match err {
            ServerError::Inner { inner, .. } => match inner {},
            ServerError::Validation { inner } => ServerError::Validation { inner },
            ServerError::Unauthorized { message } => ServerError::Unauthorized { message },
            ServerError::NotFound { message } => ServerError::NotFound { message },
            ServerError::Other { message } => ServerError::Other { message },
        }
    }
}

impl<T> From<ValidationError> for ServerError<T> {
    fn from(inner: ValidationError) -> Self {
        ServerError::Validation { inner }
    }
}

/// Body of every error response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

#[cfg(feature = "backend")]
mod backend {
    use axum::{
        response::{IntoResponse, Response},
        Json,
    };
    use tracing::{debug, error};

    use super::{ErrorBody, ServerError};

    impl<T> From<rusqlite::Error> for ServerError<T> {
        fn from(err: rusqlite::Error) -> Self {
            ServerError::other(format!("rusqlite: {err:?}"))
        }
    }

    impl<T> From<deadpool_sqlite::InteractError> for ServerError<T> {
        fn from(err: deadpool_sqlite::InteractError) -> Self {
            ServerError::other(format!("deadpool interact: {err:?}"))
        }
    }

    impl<T> From<deadpool_sqlite::PoolError> for ServerError<T> {
        fn from(err: deadpool_sqlite::PoolError) -> Self {
            ServerError::other(format!("deadpool pool: {err:?}"))
        }
    }

    impl<T: std::fmt::Display> IntoResponse for ServerError<T> {
        fn into_response(self) -> Response {
            let code = self.code();
            let message = self.to_string();

            if code.is_server_error() {
                error!(%code, %message, "request failed");
            } else {
                debug!(%code, %message, "request rejected");
            }

            (code, Json(ErrorBody { error: message })).into_response()
        }
    }
}
