use axum::async_trait;
use axum::extract::{FromRequest, Request};
use axum::http::header::CONTENT_TYPE;
use axum::{Form, Json};
use serde::de::DeserializeOwned;

use crate::errors::JsonApiError;

/// Body accepted either as JSON or as an urlencoded HTML form.
///
/// Any rejection (bad syntax, missing fields, wrong content type) becomes a
/// 400 with the extractor's message.
pub struct JsonOrForm<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonOrForm<T>
where
    S: Send + Sync,
    T: DeserializeOwned + 'static,
{
    type Rejection = JsonApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_form = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|ct| ct.starts_with("application/x-www-form-urlencoded"))
            .unwrap_or(false);
        if is_form {
            let Form(value) = Form::<T>::from_request(req, state)
                .await
                .map_err(|e| JsonApiError::bad_request(e.body_text()))?;
            Ok(Self(value))
        } else {
            let Json(value) = Json::<T>::from_request(req, state)
                .await
                .map_err(|e| JsonApiError::bad_request(e.body_text()))?;
            Ok(Self(value))
        }
    }
}
