use std::time::Duration;

use contactform_shared::{Error, bail};
use reqwest::header::CONTENT_TYPE;
use url::Url;

use crate::FormValues;

#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("endpoint answered with status {0}")]
    Status(u16),

    #[error("failed to encode submission: {0}")]
    Encode(#[from] serde_json::Error),

    /// The sink panicked before answering.
    #[error("submission aborted: {0}")]
    Aborted(String),
}

/// Destination of validated contact form submissions.
#[async_trait::async_trait]
pub trait SubmitSink: Send + Sync + 'static {
    async fn submit(&self, payload: &FormValues) -> Result<(), SubmitError>;
}

/// Posts submissions as JSON to a fixed endpoint. Any 2xx answer is a success.
#[derive(Clone, Debug)]
pub struct HttpSubmitSink {
    client: reqwest::Client,
    endpoint: Url,
}

impl HttpSubmitSink {
    pub fn new(endpoint: &str, timeout: Duration) -> contactform_shared::Result<Self> {
        let endpoint = Url::parse(endpoint)?;
        if !matches!(endpoint.scheme(), "http" | "https") {
            bail!("unsupported endpoint scheme `{}`", endpoint.scheme());
        }

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| Error::Unknown(err.into()))?;

        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait::async_trait]
impl SubmitSink for HttpSubmitSink {
    async fn submit(&self, payload: &FormValues) -> Result<(), SubmitError> {
        let body = serde_json::to_vec(payload)?;
        let response = self
            .client
            .post(self.endpoint.clone())
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SubmitError::Status(status.as_u16()));
        }

        tracing::debug!(endpoint = %self.endpoint, status = status.as_u16(), "submission accepted");

        Ok(())
    }
}
