use std::sync::Arc;

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use shared::{
    api::error::{Nothing, ServerError},
    model::UserId,
};
use tracing::debug;

use crate::cli::Cli;

const NOT_AUTHENTICATED: &str = "Authentication credentials were not provided.";

/// The caller, as vouched for by the identity provider in front of the
/// service. Every query a handler runs is scoped by `id`.
#[derive(Debug, Clone, Copy)]
pub struct UserState {
    pub id: UserId,
}

#[async_trait]
impl<S> FromRequestParts<S> for UserState
where
    S: Send + Sync,
    Arc<Cli>: FromRef<S>,
{
    type Rejection = ServerError<Nothing>;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let args = <Arc<Cli>>::from_ref(state);
        let unauthorized = || ServerError::Unauthorized {
            message: NOT_AUTHENTICATED.to_owned(),
        };

        let value = parts
            .headers
            .get(args.identity_header.as_str())
            .ok_or_else(unauthorized)?;

        let id = value
            .to_str()
            .ok()
            .and_then(|v| v.parse::<UserId>().ok())
            .ok_or_else(|| {
                debug!(header = %args.identity_header, ?value, "malformed identity header");
                unauthorized()
            })?;

        Ok(Self { id })
    }
}
