use async_trait::async_trait;
use tracing::info;
use webforms_core::{SubmissionError, Submitter};

/// Logs the payload instead of sending it.
#[derive(Debug, Clone, Copy, Default)]
pub struct DryRunSubmitter;

#[async_trait]
impl Submitter for DryRunSubmitter {
    async fn submit(
        &self,
        endpoint: &str,
        payload: &serde_json::Value,
    ) -> Result<(), SubmissionError> {
        let body = serde_json::to_string_pretty(payload)?;
        info!(endpoint, "dry run, not sending:\n{body}");
        Ok(())
    }
}
