use reqwest::Client;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("upstream returned status {status} for {context}")]
    Http { status: u16, context: String },

    #[error("transport error for {context}: {source}")]
    Transport {
        context: String,
        #[source]
        source: reqwest::Error,
    },
}

impl UpstreamError {
    /// Status code to report for this failure; transport-level
    /// failures are classified as 500.
    pub fn status_code(&self) -> u16 {
        match self {
            UpstreamError::Http { status, .. } => *status,
            UpstreamError::Transport { .. } => 500,
        }
    }
}

/// Single GET against a fully-formed URL, parsed as JSON. One attempt,
/// no retries; `context` names the call for logging and errors.
pub async fn fetch_json(client: &Client, url: &str, context: &str) -> Result<Value, UpstreamError> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|source| UpstreamError::Transport {
            context: context.to_string(),
            source,
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(UpstreamError::Http {
            status: status.as_u16(),
            context: context.to_string(),
        });
    }

    response
        .json::<Value>()
        .await
        .map_err(|source| UpstreamError::Transport {
            context: context.to_string(),
            source,
        })
}
