use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use shared::{
    api::error::{Nothing, ServerError, ValidationError},
    model::ValidateModel,
};

/// JSON body that has also passed [`ValidateModel::validate`]. Bodies that
/// fail to parse are reported as validation errors rather than axum's plain
/// text rejections.
#[derive(Debug, Clone)]
pub struct ValidJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + ValidateModel,
{
    type Rejection = ServerError<Nothing>;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e: JsonRejection| ValidationError::new(e.body_text()))?;

        value.validate()?;
        Ok(Self(value))
    }
}
