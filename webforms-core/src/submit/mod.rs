//! The submission seam.
//!
//! A [`Submitter`] delivers a JSON payload to a form's endpoint. Delivery is
//! response-blind: implementations report success whenever the request went
//! out without a transport failure and never look at the reply, so a
//! rejection by the remote service is indistinguishable from acceptance.

use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SubmissionError {
    #[error("network error: {0}")]
    Network(String),

    #[error("cannot encode payload: {0}")]
    Encode(#[from] serde_json::Error),
}

#[async_trait]
pub trait Submitter: Send + Sync {
    /// Sends `payload` as a JSON POST body to `endpoint`.
    async fn submit(
        &self,
        endpoint: &str,
        payload: &serde_json::Value,
    ) -> Result<(), SubmissionError>;
}

/// Source of submission timestamps.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;

    /// ISO-8601 UTC with millisecond precision, e.g. `2025-01-02T03:04:05.678Z`.
    fn timestamp(&self) -> String {
        self.now().to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    use super::*;

    struct FixedClock(DateTime<Utc>);

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            self.0
        }
    }

    #[test]
    fn timestamp_is_iso_8601_with_millis_and_z() {
        let instant = Utc.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap()
            + chrono::Duration::milliseconds(678);

        assert_eq!(FixedClock(instant).timestamp(), "2025-01-02T03:04:05.678Z");
    }

    #[test]
    fn whole_seconds_still_carry_millis() {
        let instant = Utc.with_ymd_and_hms(2025, 6, 30, 23, 59, 59).unwrap();

        assert_eq!(FixedClock(instant).timestamp(), "2025-06-30T23:59:59.000Z");
    }

    #[test]
    fn system_clock_timestamp_parses_back() {
        let stamp = SystemClock.timestamp();

        assert!(DateTime::parse_from_rfc3339(&stamp).is_ok());
        assert!(stamp.ends_with('Z'));
    }
}
