use axum::async_trait;
use axum::extract::{FromRequest, Request};
use axum::Json;
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::utils::error::AppError;

/// JSON extractor that runs the payload's declarative validation rules
/// before the handler sees it. Deserialization failures map to
/// `MALFORMED_BODY`, rule failures to `VALIDATION_ERROR` with a per-field
/// breakdown.
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(payload) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::MalformedBody(rejection.body_text()))?;

        payload.validate()?;

        Ok(Self(payload))
    }
}
