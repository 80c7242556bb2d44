//! Integration tests for the cart update client
//!
//! These tests run the client against an HTTP mock and verify:
//! - The outbound request (method, headers, JSON body)
//! - Which notifications are raised for success, rejection and failures
//! - That each activation issues exactly one request
//! - The log trail left by successful and rejected updates

use cart_update::client::{CartUpdateClient, Notifier, Severity, UpdateError};
use cart_update::csrf::AntiForgeryToken;
use httpmock::prelude::*;
use serde_json::json;
use std::sync::{Arc, Mutex};
use tracing_test::traced_test;

/// Notifier that keeps every notification for later inspection
#[derive(Default)]
struct RecordingNotifier {
    events: Mutex<Vec<(Severity, String)>>,
}

impl RecordingNotifier {
    fn events(&self) -> Vec<(Severity, String)> {
        self.events.lock().unwrap().clone()
    }

    fn count(&self, severity: Severity) -> usize {
        self.events().iter().filter(|(s, _)| *s == severity).count()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, severity: Severity, message: &str) {
        self.events.lock().unwrap().push((severity, message.to_string()));
    }
}

/// Helper function to build a client reading its token from a cookie string
fn create_test_client(cookies: &str) -> (CartUpdateClient, Arc<RecordingNotifier>) {
    let notifier = Arc::new(RecordingNotifier::default());
    let token = AntiForgeryToken::from_cookies(cookies).unwrap();
    let client = CartUpdateClient::new(token, notifier.clone());
    (client, notifier)
}

#[tokio::test]
async fn test_success_notifies_user_and_returns_body() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/update_item/")
            .header("content-type", "application/json")
            .header("x-csrftoken", "abc=def")
            .json_body(json!({ "productId": "42", "action": "add" }));
        then.status(200).json_body(json!({ "ok": true }));
    });

    let (client, notifier) = create_test_client("sessionid=1; csrftoken=abc%3Ddef");
    let url = format!("{}/update_item/", server.base_url());

    let data = client.activate("42", "add", url).await.unwrap();

    assert_eq!(data, json!({ "ok": true }));
    assert_eq!(mock.calls(), 1);
    assert_eq!(
        notifier.events(),
        vec![(Severity::User, "Added to cart successfully!".to_string())]
    );
}

#[tokio::test]
async fn test_server_rejection_notifies_status_without_parsing() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST).path("/update_item/");
        then.status(500).body("<html>boom</html>");
    });

    let (client, notifier) = create_test_client("csrftoken=tok");
    let url = format!("{}/update_item/", server.base_url());

    let err = client.activate("42", "add", url).await.unwrap_err();

    assert!(matches!(err, UpdateError::Rejected { status: 500 }));
    assert_eq!(mock.calls(), 1);

    // A parse attempt on the HTML body would have produced a diagnostic
    let events = notifier.events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].0, Severity::User);
    assert!(events[0].1.contains("500"));
}

#[tokio::test]
async fn test_transport_failure_is_diagnostic_only() {
    // Reserve a port and release it so nothing is listening there
    let addr = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap();

    let (client, notifier) = create_test_client("csrftoken=tok");
    let url = format!("http://{}/update_item/", addr);

    let err = client.activate("42", "add", url).await.unwrap_err();

    assert!(matches!(err, UpdateError::Transport(_)));
    assert_eq!(notifier.count(Severity::User), 0);
    assert_eq!(notifier.count(Severity::Diagnostic), 1);
}

#[tokio::test]
async fn test_invalid_json_after_success_is_diagnostic() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/update_item/");
        then.status(200).body("not json");
    });

    let (client, notifier) = create_test_client("csrftoken=tok");
    let url = format!("{}/update_item/", server.base_url());

    let err = client.activate("42", "add", url).await.unwrap_err();

    assert!(matches!(err, UpdateError::Decode(_)));
    // The success acknowledgment precedes body parsing
    let events = notifier.events();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].0, Severity::User);
    assert_eq!(events[1].0, Severity::Diagnostic);
}

#[tokio::test]
async fn test_action_is_forwarded_verbatim() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/cart/custom")
            .json_body(json!({ "productId": "sku-9", "action": "wishlist" }));
        then.status(201).json_body(json!({ "status": "success" }));
    });

    let (client, notifier) = create_test_client("csrftoken=tok");
    let url = format!("{}/cart/custom", server.base_url());

    client.activate("sku-9", "wishlist", url).await.unwrap();

    assert_eq!(mock.calls(), 1);
    assert_eq!(notifier.count(Severity::User), 1);
}

#[tokio::test]
async fn test_overlapping_activations_are_not_deduplicated() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST).path("/update_item/");
        then.status(200).json_body(json!({ "status": "success", "cart_total": 1 }));
    });

    let (client, notifier) = create_test_client("csrftoken=tok");
    let url = format!("{}/update_item/", server.base_url());

    let (first, second) = futures_util::future::join(
        client.activate("42", "add", url.clone()),
        client.activate("42", "add", url),
    )
    .await;

    assert!(first.is_ok());
    assert!(second.is_ok());
    assert_eq!(mock.calls(), 2);
    assert_eq!(notifier.count(Severity::User), 2);
}

#[tokio::test]
#[traced_test]
async fn test_success_logs_parsed_body() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/update_item/");
        then.status(200).json_body(json!({ "ok": true }));
    });

    let (client, _notifier) = create_test_client("csrftoken=tok");
    let url = format!("{}/update_item/", server.base_url());

    client.activate("42", "add", url).await.unwrap();

    assert!(logs_contain("cart updated"));
    assert!(logs_contain(r#"data={"ok":true}"#));
}

#[tokio::test]
#[traced_test]
async fn test_rejection_leaves_warning_without_extra_notification() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/update_item/");
        then.status(500).body("boom");
    });

    let (client, notifier) = create_test_client("csrftoken=tok");
    let url = format!("{}/update_item/", server.base_url());

    client.activate("42", "add", url).await.unwrap_err();

    assert!(logs_contain("cart update rejected"));
    assert!(logs_contain("status=500"));
    assert!(!logs_contain("cart updated"));
    assert_eq!(notifier.events().len(), 1);
    assert_eq!(notifier.count(Severity::Diagnostic), 0);
}
