use std::time::Duration;

use httpmock::prelude::*;
use webforms_core::{SubmissionError, Submitter};
use webforms_http::HttpSubmitter;

fn contact_payload() -> serde_json::Value {
    serde_json::json!({
        "name": "Asha Rao",
        "email": "asha@example.com",
        "phone": "+91 98765 43210",
        "businessType": "Retail",
        "companyName": "Not provided",
        "timeline": "Not specified",
        "message": "Need a new storefront site",
        "newsletter": "No",
        "timestamp": "2025-03-14T09:26:53.000Z"
    })
}

#[tokio::test]
async fn posts_payload_as_json_body() {
    let server = MockServer::start();
    let payload = contact_payload();

    let endpoint_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/exec")
            .header("content-type", "application/json")
            .json_body(payload.clone());
        then.status(200);
    });

    let result = HttpSubmitter::new()
        .submit(&server.url("/exec"), &payload)
        .await;

    assert!(result.is_ok());
    endpoint_mock.assert_hits(1);
}

#[tokio::test]
async fn server_error_status_still_counts_as_sent() {
    let server = MockServer::start();

    let endpoint_mock = server.mock(|when, then| {
        when.method(POST).path("/exec");
        then.status(500).body("Script function not found");
    });

    let result = HttpSubmitter::new()
        .submit(&server.url("/exec"), &contact_payload())
        .await;

    assert!(result.is_ok());
    endpoint_mock.assert();
}

#[tokio::test]
async fn unreachable_endpoint_is_a_network_error() {
    // Nothing listens on the discard port locally.
    let result = HttpSubmitter::new()
        .submit("http://127.0.0.1:9/exec", &contact_payload())
        .await;

    assert!(matches!(result, Err(SubmissionError::Network(_))));
}

#[tokio::test]
async fn client_timeout_is_a_network_error() {
    let server = MockServer::start();

    let _slow_endpoint = server.mock(|when, then| {
        when.method(POST).path("/exec");
        then.status(200).delay(Duration::from_secs(2));
    });

    let client = reqwest::Client::builder()
        .timeout(Duration::from_millis(100))
        .build()
        .unwrap();
    let result = HttpSubmitter::with_client(client)
        .submit(&server.url("/exec"), &contact_payload())
        .await;

    assert!(matches!(result, Err(SubmissionError::Network(_))));
}
