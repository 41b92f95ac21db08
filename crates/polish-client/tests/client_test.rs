//! Retry, failure, and batch semantics of the relay client, exercised
//! through a scripted transport.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use polish_client::protocol::{BackendResponse, RewriteRequest, WireRewrite};
use polish_client::transport::RewriteTransport;
use polish_client::RewriteClient;
use polish_core::config::BackendConfig;
use polish_core::errors::{ClientError, PolishError};
use polish_core::models::GenerationOptions;
use polish_core::tone::Tone;

/// Transport that replays a scripted sequence of outcomes and records
/// every request it sees.
struct ScriptedTransport {
    script: Mutex<VecDeque<Result<BackendResponse, ClientError>>>,
    requests: Mutex<Vec<RewriteRequest>>,
}

impl ScriptedTransport {
    fn new(script: Vec<Result<BackendResponse, ClientError>>) -> Arc<Self> {
        Arc::new(Self {
            script: Mutex::new(script.into()),
            requests: Mutex::new(Vec::new()),
        })
    }

    fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

impl RewriteTransport for ScriptedTransport {
    fn send(
        &self,
        _endpoint: &str,
        request: &RewriteRequest,
    ) -> Result<BackendResponse, ClientError> {
        self.requests.lock().unwrap().push(request.clone());
        self.script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ClientError::Transport { reason: "script exhausted".into() }))
    }
}

fn response(texts: &[&str]) -> BackendResponse {
    BackendResponse {
        rewrites: texts
            .iter()
            .map(|text| WireRewrite { text: text.to_string() })
            .collect(),
    }
}

fn transport_err() -> ClientError {
    ClientError::Transport { reason: "connection reset".into() }
}

fn test_config() -> BackendConfig {
    BackendConfig {
        endpoint: "https://relay.example/rewrite".into(),
        backoff_unit_ms: 0,
        ..BackendConfig::default()
    }
}

#[test]
fn missing_endpoint_fails_before_any_wire_traffic() {
    let transport = ScriptedTransport::new(vec![Ok(response(&["• Unused"]))]);
    let client = RewriteClient::with_transport(BackendConfig::default(), transport.clone());

    let err = client
        .request_rewrites("text", Tone::Executive, &GenerationOptions::exploratory())
        .unwrap_err();

    assert!(matches!(
        err,
        PolishError::Client(ClientError::EndpointNotConfigured)
    ));
    assert_eq!(transport.request_count(), 0);
}

#[test]
fn transport_failures_are_retried_until_a_success() {
    let transport = ScriptedTransport::new(vec![
        Err(transport_err()),
        Err(transport_err()),
        Ok(response(&["• Conversion rose 35%."])),
    ]);
    let client = RewriteClient::with_transport(test_config(), transport.clone());

    let candidates = client
        .request_rewrites("text", Tone::Executive, &GenerationOptions::exploratory())
        .unwrap();

    assert_eq!(candidates.len(), 1);
    assert_eq!(candidates[0].text, "• Conversion rose 35%.");
    assert_eq!(transport.request_count(), 3);
}

#[test]
fn each_attempt_sends_a_fresh_nonce() {
    let transport = ScriptedTransport::new(vec![
        Err(transport_err()),
        Err(transport_err()),
        Ok(response(&["• Done"])),
    ]);
    let client = RewriteClient::with_transport(test_config(), transport.clone());

    client
        .request_rewrites("text", Tone::Clarity, &GenerationOptions::exploratory())
        .unwrap();

    let requests = transport.requests.lock().unwrap();
    assert_eq!(requests.len(), 3);
    assert_ne!(requests[0].unique_id, requests[1].unique_id);
    assert_ne!(requests[1].unique_id, requests[2].unique_id);
}

#[test]
fn exhausted_attempts_surface_the_last_transport_error() {
    let transport = ScriptedTransport::new(vec![
        Err(transport_err()),
        Err(transport_err()),
        Err(transport_err()),
    ]);
    let client = RewriteClient::with_transport(test_config(), transport.clone());

    let err = client
        .request_rewrites("text", Tone::Executive, &GenerationOptions::exploratory())
        .unwrap_err();

    match err {
        PolishError::Client(ClientError::Transport { reason }) => {
            assert!(reason.contains("all 3 attempts failed"), "{reason}");
            assert!(reason.contains("connection reset"), "{reason}");
        }
        other => panic!("expected transport error, got {other:?}"),
    }
    assert_eq!(transport.request_count(), 3);
}

#[test]
fn malformed_response_is_not_retried() {
    let transport = ScriptedTransport::new(vec![
        Err(ClientError::MalformedResponse { reason: "missing rewrites".into() }),
        Ok(response(&["• Never reached"])),
    ]);
    let client = RewriteClient::with_transport(test_config(), transport.clone());

    let err = client
        .request_rewrites("text", Tone::Executive, &GenerationOptions::exploratory())
        .unwrap_err();

    assert!(matches!(
        err,
        PolishError::Client(ClientError::MalformedResponse { .. })
    ));
    assert_eq!(transport.request_count(), 1);
}

#[test]
fn batch_collects_the_first_rewrite_of_each_success() {
    let transport = ScriptedTransport::new(vec![
        Ok(response(&["• Alpha", "• Alpha tail"])),
        Ok(response(&["• Beta"])),
        Ok(response(&["• Gamma", "• Gamma tail"])),
    ]);
    let client = RewriteClient::with_transport(test_config(), transport.clone());

    let candidates = client
        .request_rewrite_batch("text", Tone::Growth, &GenerationOptions::exploratory(), 3)
        .unwrap();

    assert_eq!(candidates.len(), 3);
    for candidate in &candidates {
        assert!(!candidate.text.contains("tail"));
    }
    assert_eq!(transport.request_count(), 3);
}

#[test]
fn batch_tolerates_individual_member_failures() {
    // One member exhausts its three attempts, the rest succeed. Outcome
    // ordering across threads is nondeterministic, so assert on counts.
    let transport = ScriptedTransport::new(vec![
        Err(transport_err()),
        Err(transport_err()),
        Err(transport_err()),
        Ok(response(&["• Survivor one"])),
        Ok(response(&["• Survivor two"])),
    ]);
    let client = RewriteClient::with_transport(test_config(), transport);

    let candidates = client
        .request_rewrite_batch("text", Tone::Executive, &GenerationOptions::exploratory(), 3)
        .unwrap();

    assert_eq!(candidates.len(), 2);
}

#[test]
fn batch_with_every_member_failing_returns_empty() {
    let transport = ScriptedTransport::new(Vec::new());
    let client = RewriteClient::with_transport(test_config(), transport);

    let candidates = client
        .request_rewrite_batch("text", Tone::Executive, &GenerationOptions::exploratory(), 2)
        .unwrap();

    assert!(candidates.is_empty());
}

#[test]
fn zero_batch_size_is_clamped_to_one() {
    let transport = ScriptedTransport::new(vec![Ok(response(&["• Only"]))]);
    let client = RewriteClient::with_transport(test_config(), transport.clone());

    let candidates = client
        .request_rewrite_batch("text", Tone::Executive, &GenerationOptions::exploratory(), 0)
        .unwrap();

    assert_eq!(candidates.len(), 1);
    assert_eq!(transport.request_count(), 1);
}
