//! Presentation-side client for the conversion endpoint.
//!
//! Runs the shared validator before any network call, so obviously bad
//! input never leaves the process. The server still re-validates.

use crate::adapters::http::error::ErrorBody;
use crate::core::validator;
use crate::domain::model::{ConversionInput, Rejection, RomanNumeral};
use crate::utils::error::{AppError, Result};
use crate::utils::validation::parse_http_url;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use thiserror::Error;
use url::Url;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(5000);

#[derive(Error, Debug)]
pub enum ClientError {
    /// 前端驗證未通過，沒有送出請求
    #[error("Input Invalid. {0}")]
    InvalidInput(#[from] Rejection),

    #[error("{message}")]
    Rejected { message: String },

    #[error("Server error ({status}): {message}")]
    Server { status: u16, message: String },

    #[error("Invalid response from server.")]
    InvalidResponse,

    #[error("Request timed out. Please try again.")]
    Timeout,

    #[error("Something went wrong. Unable to reach the server: {0}")]
    Unreachable(String),
}

impl ClientError {
    /// 使用者輸入問題 (前端或後端拒絕)，其餘視為系統錯誤
    pub fn is_input_error(&self) -> bool {
        matches!(self, ClientError::InvalidInput(_) | ClientError::Rejected { .. })
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ClientError::Timeout
        } else {
            ClientError::Unreachable(err.to_string())
        }
    }
}

#[derive(Debug, Clone)]
pub struct RomanClient {
    http: Client,
    endpoint: Url,
}

impl RomanClient {
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self> {
        let endpoint = parse_http_url("server", base_url)?
            .join("/romannumeral")
            .map_err(|e| AppError::InvalidConfigValueError {
                field: "server".to_string(),
                value: base_url.to_string(),
                reason: e.to_string(),
            })?;

        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::ConfigError {
                message: format!("HTTP client setup failed: {}", e),
            })?;

        Ok(Self { http, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    pub async fn convert(&self, raw: &str) -> std::result::Result<RomanNumeral, ClientError> {
        let number = validator::validate(&ConversionInput::from(raw))?;

        tracing::debug!("Requesting conversion of {} from {}", number, self.endpoint);
        let response = self
            .http
            .get(self.endpoint.clone())
            .query(&[("query", number.to_string())])
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("API response status: {}", status);

        if status.is_success() {
            let body: serde_json::Value = response
                .json()
                .await
                .map_err(|_| ClientError::InvalidResponse)?;
            let output = body
                .get("output")
                .and_then(serde_json::Value::as_str)
                .ok_or(ClientError::InvalidResponse)?;

            return RomanNumeral::try_from(output.to_string())
                .map_err(|_| ClientError::InvalidResponse);
        }

        let message = response
            .json::<ErrorBody>()
            .await
            .ok()
            .map(|body| body.error_message);

        Err(match status {
            StatusCode::BAD_REQUEST => ClientError::Rejected {
                message: message.unwrap_or_else(|| "Bad Request".to_string()),
            },
            other => ClientError::Server {
                status: other.as_u16(),
                message: message.unwrap_or_else(|| {
                    other
                        .canonical_reason()
                        .unwrap_or("Unexpected error")
                        .to_string()
                }),
            },
        })
    }
}
