use async_trait::async_trait;
use reqwest::{Client, header::CONTENT_TYPE};
use tracing::debug;
use webforms_core::{SubmissionError, Submitter};

/// Posts payloads as JSON and ignores whatever comes back.
///
/// The endpoints this talks to only accept opaque cross-origin posts from
/// the page, so the status and body carry no usable signal. Only transport
/// failures are reported.
#[derive(Debug, Clone, Default)]
pub struct HttpSubmitter {
    client: Client,
}

impl HttpSubmitter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Submitter for HttpSubmitter {
    async fn submit(
        &self,
        endpoint: &str,
        payload: &serde_json::Value,
    ) -> Result<(), SubmissionError> {
        let response = self
            .client
            .post(endpoint)
            .header(CONTENT_TYPE, "application/json")
            .json(payload)
            .send()
            .await
            .map_err(|e| SubmissionError::Network(e.to_string()))?;

        debug!(endpoint, status = %response.status(), "submission response ignored");
        Ok(())
    }
}
