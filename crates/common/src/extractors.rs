//! Custom axum extractors for PulseFit

use axum::{
    extract::{rejection::JsonRejection, FromRequest, Request},
    response::{IntoResponse, Response},
    Json,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::Error;

/// JSON body extractor that runs `validator` rules after deserializing.
///
/// Deserialization and validation failures both surface as 400.
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

#[derive(Debug)]
pub enum ValidatedJsonRejection {
    Json(JsonRejection),
    Validation(Error),
}

impl IntoResponse for ValidatedJsonRejection {
    fn into_response(self) -> Response {
        match self {
            ValidatedJsonRejection::Json(e) => Error::Validation(e.body_text()).into_response(),
            ValidatedJsonRejection::Validation(e) => e.into_response(),
        }
    }
}

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ValidatedJsonRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(ValidatedJsonRejection::Json)?;
        if let Err(e) = value.validate() {
            tracing::debug!(error = %e, "Request body failed validation");
            return Err(ValidatedJsonRejection::Validation(Error::Validation(
                format!("Validation failed: {}", e),
            )));
        }
        Ok(ValidatedJson(value))
    }
}
