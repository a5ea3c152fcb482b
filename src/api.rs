//! HTTP client for the question answering backend

use crate::constants::CANCELLED_MESSAGE;
use crate::types::*;
use std::future::Future;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::debug;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("backend returned HTTP {status}")]
    Status { status: u16, detail: Option<String> },

    #[error("request failed: {0}")]
    Transport(reqwest::Error),

    #[error("request timed out")]
    Timeout,

    #[error("unexpected response: {0}")]
    Decode(String),

    #[error("could not read file: {0}")]
    Io(#[from] std::io::Error),

    #[error("request cancelled")]
    Cancelled,
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            ApiError::Timeout
        } else if e.is_decode() {
            ApiError::Decode(e.to_string())
        } else {
            ApiError::Transport(e)
        }
    }
}

impl ApiError {
    /// The backend's `detail` message, if the error body carried one
    pub fn detail(&self) -> Option<&str> {
        match self {
            ApiError::Status { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }

    /// Text shown to the user: backend detail first, then the caller's fallback.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Cancelled => CANCELLED_MESSAGE.to_string(),
            _ => self.detail().unwrap_or(fallback).to_string(),
        }
    }
}

/// Pull a string `detail` out of a JSON error body
fn extract_detail(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("detail")?
        .as_str()
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    debug!(status = %status, body = %body, "Backend error response");
    Err(ApiError::Status {
        status: status.as_u16(),
        detail: extract_detail(&body),
    })
}

/// Race a request against a cancellation token.
pub async fn cancellable<T>(
    token: &CancellationToken,
    request: impl Future<Output = Result<T, ApiError>>,
) -> Result<T, ApiError> {
    tokio::select! {
        _ = token.cancelled() => Err(ApiError::Cancelled),
        result = request => result,
    }
}

pub struct ApiClient {
    base_url: String,
    client: reqwest::Client,
    request_timeout: Duration,
    load_model_timeout: Duration,
}

impl ApiClient {
    pub fn new(
        base_url: &str,
        request_timeout: Duration,
        load_model_timeout: Duration,
    ) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder().build()?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
            request_timeout,
            load_model_timeout,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// POST /load-model
    pub async fn load_model(&self, domain: &str) -> Result<LoadModelReply, ApiError> {
        let response = self
            .client
            .post(self.url("/load-model"))
            .timeout(self.load_model_timeout)
            .json(&LoadModelRequest { domain })
            .send()
            .await?;
        let response = check_status(response).await?;
        // Any success body is accepted
        let body = response.text().await?;
        Ok(serde_json::from_str(&body).unwrap_or_default())
    }

    /// POST /upload as multipart `file` + `domain`
    pub async fn upload(&self, file: FilePayload, domain: &str) -> Result<UploadReceipt, ApiError> {
        let part = reqwest::multipart::Part::bytes(file.bytes).file_name(file.name);
        let form = reqwest::multipart::Form::new()
            .part("file", part)
            .text("domain", domain.to_string());

        let response = self
            .client
            .post(self.url("/upload"))
            .timeout(self.request_timeout)
            .multipart(form)
            .send()
            .await?;
        let response = check_status(response).await?;
        Ok(response.json::<UploadReceipt>().await?)
    }

    /// POST /query
    pub async fn query(&self, request: &QueryRequest) -> Result<QueryAnswer, ApiError> {
        let response = self
            .client
            .post(self.url("/query"))
            .timeout(self.request_timeout)
            .json(request)
            .send()
            .await?;
        let response = check_status(response).await?;
        // Plain-text replies are the answer itself
        let body = response.text().await?;
        let value = serde_json::from_str(&body).unwrap_or(serde_json::Value::String(body));
        Ok(QueryAnswer::from_value(value))
    }
}
