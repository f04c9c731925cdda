//! Client for the remote review service.
//!
//! Every call is one best-effort round trip: no retry, no timeout, no cache.
//! Callers decide what to do with an [`ApiError`].
use crate::models::review::{HealthStatus, Review, ReviewUpdate};
use gloo_net::http::{Request, Response};
use leptos::logging::{error, log};
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    /// The service answered with a non-2xx status.
    #[error("{message}")]
    Remote {
        message: String,
        status: u16,
        status_text: String,
    },

    /// The request never produced a response.
    #[error("network error: {message}")]
    Network { message: String },

    /// The request body could not be encoded.
    #[error("could not build request: {message}")]
    Request { message: String },

    /// A successful response carried JSON of the wrong shape.
    #[error("unexpected response body: {message}")]
    Decode { message: String },
}

impl ApiError {
    /// Text to show the user. Remote errors carry the server's wording;
    /// anything else is replaced by `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Remote { message, .. } => message.clone(),
            _ => fallback.to_string(),
        }
    }
}

fn canonical_status_text(status: u16, status_text: &str) -> String {
    if !status_text.is_empty() {
        return status_text.to_string();
    }
    http::StatusCode::from_u16(status)
        .ok()
        .and_then(|code| code.canonical_reason())
        .unwrap_or_default()
        .to_string()
}

fn server_message(body: &str) -> Option<String> {
    let Value::Object(fields) = serde_json::from_str::<Value>(body).ok()? else {
        return None;
    };
    ["detail", "message"].iter().find_map(|key| match fields.get(*key) {
        Some(Value::String(text)) if !text.is_empty() => Some(text.clone()),
        Some(Value::Null) | Some(Value::String(_)) | None => None,
        Some(other) => Some(other.to_string()),
    })
}

/// Classifies a non-2xx response.
pub fn error_from_response(status: u16, status_text: &str, body: &str) -> ApiError {
    let status_text = canonical_status_text(status, status_text);
    let message =
        server_message(body).unwrap_or_else(|| format!("Error {status}: {status_text}"));
    ApiError::Remote {
        message,
        status,
        status_text,
    }
}

/// Decodes a 2xx body. Empty or non-JSON bodies yield `T::default()`.
pub fn decode_success<T>(content_type: Option<&str>, body: &str) -> Result<T, ApiError>
where
    T: DeserializeOwned + Default,
{
    let is_json = content_type.is_some_and(|value| value.contains("application/json"));
    if !is_json || body.trim().is_empty() {
        return Ok(T::default());
    }
    serde_json::from_str(body).map_err(|err| ApiError::Decode {
        message: err.to_string(),
    })
}

/// Decodes a 2xx body that may have failed to arrive. A broken read is a
/// network failure, never an empty result.
pub fn read_success<T>(
    content_type: Option<&str>,
    body: Result<String, gloo_net::Error>,
) -> Result<T, ApiError>
where
    T: DeserializeOwned + Default,
{
    let body = body.map_err(network_error)?;
    decode_success(content_type, &body)
}

fn network_error(err: gloo_net::Error) -> ApiError {
    ApiError::Network {
        message: err.to_string(),
    }
}

/// The operations the UI needs from the review service.
#[allow(async_fn_in_trait)]
pub trait ReviewStore {
    async fn health_check(&self) -> Result<HealthStatus, ApiError>;
    async fn list(&self) -> Result<Vec<Review>, ApiError>;
    async fn get(&self, id: i64) -> Result<Review, ApiError>;
    async fn update(&self, id: i64, draft: &ReviewUpdate) -> Result<Review, ApiError>;
    async fn delete(&self, id: i64) -> Result<(), ApiError>;
}

/// [`ReviewStore`] backed by the browser's `fetch`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpReviewStore {
    base_url: String,
}

impl HttpReviewStore {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    fn root_url(&self) -> String {
        format!("{}/", self.base_url)
    }

    fn reviews_url(&self) -> String {
        format!("{}/reviews/", self.base_url)
    }

    fn review_url(&self, id: i64) -> String {
        format!("{}/reviews/{id}", self.base_url)
    }

    async fn check_status(response: &Response) -> Result<(), ApiError> {
        if response.ok() {
            return Ok(());
        }
        // An unreadable error body still leaves the status line to report.
        let body = response.text().await.unwrap_or_default();
        let err = error_from_response(response.status(), &response.status_text(), &body);
        error!("[API] {} {} failed: {}", response.status(), response.url(), err);
        Err(err)
    }

    async fn finish<T>(response: Response) -> Result<T, ApiError>
    where
        T: DeserializeOwned + Default,
    {
        Self::check_status(&response).await?;
        let content_type = response.headers().get("content-type");
        let body = response.text().await;
        read_success(content_type.as_deref(), body)
    }
}

impl ReviewStore for HttpReviewStore {
    async fn health_check(&self) -> Result<HealthStatus, ApiError> {
        let response = Request::get(&self.root_url())
            .send()
            .await
            .map_err(network_error)?;
        Self::finish(response).await
    }

    async fn list(&self) -> Result<Vec<Review>, ApiError> {
        let response = Request::get(&self.reviews_url())
            .send()
            .await
            .map_err(network_error)?;
        let reviews: Vec<Review> = Self::finish(response).await?;
        log!("[API] Fetched {} reviews", reviews.len());
        Ok(reviews)
    }

    async fn get(&self, id: i64) -> Result<Review, ApiError> {
        let response = Request::get(&self.review_url(id))
            .send()
            .await
            .map_err(network_error)?;
        Self::finish(response).await
    }

    async fn update(&self, id: i64, draft: &ReviewUpdate) -> Result<Review, ApiError> {
        let request = Request::put(&self.review_url(id))
            .json(draft)
            .map_err(|err| ApiError::Request {
                message: err.to_string(),
            })?;
        let response = request.send().await.map_err(network_error)?;
        let review = Self::finish(response).await?;
        log!("[API] Updated review {}", id);
        Ok(review)
    }

    async fn delete(&self, id: i64) -> Result<(), ApiError> {
        let response = Request::delete(&self.review_url(id))
            .send()
            .await
            .map_err(network_error)?;
        Self::check_status(&response).await?;
        log!("[API] Deleted review {}", id);
        Ok(())
    }
}
