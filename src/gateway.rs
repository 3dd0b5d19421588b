//! Submission gateway: one POST per submission to the backend API.

use serde::Deserialize;
use std::future::Future;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

use crate::core::config::ApiSettings;

/// Header carrying the shared API key.
pub const API_KEY_HEADER: &str = "api-key";

/// Errors raised by a gateway call.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("invalid API base URL `{url}`: {reason}")]
    BaseUrl { url: String, reason: String },
    #[error("backend unreachable: {0}")]
    Network(#[from] reqwest::Error),
    #[error("backend returned HTTP {status}: {body}")]
    Status { status: u16, body: String },
    #[error("unexpected backend reply: {0}")]
    Decode(String),
    #[error("no backend configured")]
    Unconfigured,
}

/// Immutable snapshot of one validated submission.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionRequest {
    pub path: &'static str,
    pub body: serde_json::Value,
}

/// Something that can deliver a submission to the backend.
pub trait Gateway {
    /// Posts `body` to `path` and returns the reply's `content`.
    fn post(
        &self,
        path: &str,
        body: &serde_json::Value,
    ) -> impl Future<Output = Result<String, GatewayError>> + Send;
}

/// `None` stands for a missing backend: every post fails with
/// [`GatewayError::Unconfigured`].
impl<G: Gateway + Sync> Gateway for Option<G> {
    async fn post(&self, path: &str, body: &serde_json::Value) -> Result<String, GatewayError> {
        match self {
            Some(gateway) => gateway.post(path, body).await,
            None => Err(GatewayError::Unconfigured),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ContentReply {
    content: String,
}

/// Extracts `content` from a backend reply body.
pub fn decode_reply(text: &str) -> Result<String, GatewayError> {
    serde_json::from_str::<ContentReply>(text)
        .map(|reply| reply.content)
        .map_err(|e| GatewayError::Decode(e.to_string()))
}

/// HTTP gateway backed by `reqwest`.
#[derive(Debug, Clone)]
pub struct HttpGateway {
    http_client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl HttpGateway {
    /// Creates a gateway for the configured backend.
    ///
    /// # Errors
    /// Returns an error if the base URL does not parse or the HTTP client
    /// cannot be built.
    pub fn new(settings: &ApiSettings) -> Result<Self, GatewayError> {
        reqwest::Url::parse(&settings.base_url).map_err(|e| GatewayError::BaseUrl {
            url: settings.base_url.clone(),
            reason: e.to_string(),
        })?;

        // 0 disables the timeout
        let mut builder = reqwest::Client::builder();
        if settings.timeout_secs > 0 {
            builder = builder.timeout(Duration::from_secs(settings.timeout_secs));
        }
        let http_client = builder.build()?;

        Ok(Self {
            http_client,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            api_key: settings.api_key.clone(),
        })
    }

    /// Full URL for an endpoint path.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

impl Gateway for HttpGateway {
    async fn post(&self, path: &str, body: &serde_json::Value) -> Result<String, GatewayError> {
        let url = self.endpoint(path);
        debug!(%url, "posting submission");

        let response = self
            .http_client
            .post(&url)
            .header(API_KEY_HEADER, &self.api_key)
            .json(body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;
        debug!(%url, status = status.as_u16(), bytes = text.len(), "backend replied");

        if !status.is_success() {
            return Err(GatewayError::Status {
                status: status.as_u16(),
                body: text,
            });
        }

        decode_reply(&text)
    }
}
