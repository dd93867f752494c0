use super::*;
use crate::events::{AppEvent, EventBus};
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

fn filled_form() -> ContactForm {
    ContactForm {
        name: "Ada".to_string(),
        email: "ada@example.com".to_string(),
        subject: "Hello".to_string(),
        message: "Nice portfolio".to_string(),
    }
}

/// Serve exactly one HTTP request with a canned response; returns the base URL
/// and a handle resolving to the raw request that was received.
async fn serve_once(status_line: &'static str, body: &'static str) -> (String, tokio::task::JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut raw = Vec::new();
        let mut buf = [0u8; 1024];
        loop {
            let n = socket.read(&mut buf).await.unwrap();
            if n == 0 {
                break;
            }
            raw.extend_from_slice(&buf[..n]);
            let text = String::from_utf8_lossy(&raw).to_string();
            if let Some(end) = text.find("\r\n\r\n") {
                let content_length = text[..end]
                    .lines()
                    .find_map(|l| {
                        let (k, v) = l.split_once(':')?;
                        k.eq_ignore_ascii_case("content-length").then(|| v.trim().parse::<usize>().ok())?
                    })
                    .unwrap_or(0);
                if raw.len() >= end + 4 + content_length {
                    break;
                }
            }
        }
        let response = format!(
            "{}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status_line,
            body.len(),
            body
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.ok();
        String::from_utf8_lossy(&raw).to_string()
    });
    (format!("http://{}/submit", addr), handle)
}

#[test]
fn test_missing_field_reports_first_blank() {
    let mut form = filled_form();
    assert!(form.is_complete());

    form.subject = "   ".to_string();
    form.message.clear();
    assert_eq!(form.missing_field(), Some(FormField::Subject));
    assert!(!form.is_complete());

    form.clear();
    assert_eq!(form, ContactForm::default());
}

#[test]
fn test_status_from_result() {
    let ok = Ok(RelayResponse { success: true, message: None });
    let rejected = Ok(RelayResponse { success: false, message: Some("bad key".to_string()) });
    let failed: Result<RelayResponse, ContactError> = Err(ContactError::Network("down".to_string()));

    assert_eq!(SubmitStatus::from_result(&ok), SubmitStatus::Success);
    assert_eq!(SubmitStatus::from_result(&rejected), SubmitStatus::Error);
    assert_eq!(SubmitStatus::from_result(&failed), SubmitStatus::Error);
    assert!(SubmitStatus::Idle.banner().is_none());
    assert!(SubmitStatus::Error.banner().unwrap().contains("Failed"));
}

#[test]
fn test_payload_carries_all_fields() {
    let relay = Web3FormsRelay::new("http://localhost/submit", "key-123");
    let payload = relay.payload(&filled_form());
    assert_eq!(payload["access_key"], "key-123");
    assert_eq!(payload["name"], "Ada");
    assert_eq!(payload["from_name"], "Ada");
    assert_eq!(payload["email"], "ada@example.com");
    assert_eq!(payload["reply_to"], "ada@example.com");
    assert_eq!(payload["subject"], "Hello");
    assert_eq!(payload["message"], "Nice portfolio");
}

#[tokio::test]
async fn test_focus_cycles_through_fields() {
    let bus = EventBus::new();
    let mut desk = ContactDesk::new(Arc::new(MockRelay::succeeding()), bus.sender());
    assert_eq!(desk.focused, FormField::Name);
    desk.focus_prev();
    assert_eq!(desk.focused, FormField::Message);
    desk.focus_next();
    desk.focus_next();
    assert_eq!(desk.focused, FormField::Email);

    desk.insert_char('a');
    desk.insert_char('b');
    desk.delete_char();
    assert_eq!(desk.form.email, "a");
}

#[tokio::test]
async fn test_incomplete_form_is_not_sent() {
    let bus = EventBus::new();
    let relay = Arc::new(MockRelay::succeeding());
    let mut desk = ContactDesk::new(relay.clone(), bus.sender());
    desk.form.name = "Ada".to_string();
    desk.focused = FormField::Message;

    assert!(!desk.submit());
    assert!(!desk.is_submitting());
    assert_eq!(desk.focused, FormField::Email);
    tokio::task::yield_now().await;
    assert!(relay.received().is_empty());
}

#[tokio::test]
async fn test_successful_submission_clears_form() {
    let bus = EventBus::new();
    let sender = bus.sender();
    let mut receiver = bus.into_receiver();
    let relay = Arc::new(MockRelay::succeeding());
    let mut desk = ContactDesk::new(relay.clone(), sender);
    desk.form = filled_form();

    assert!(desk.submit());
    assert!(desk.is_submitting());
    // a second submit while in flight is refused
    assert!(!desk.submit());
    desk.insert_char('x');
    assert_eq!(desk.form, filled_form());

    let event = tokio::time::timeout(Duration::from_secs(5), receiver.recv())
        .await
        .unwrap()
        .unwrap();
    let AppEvent::ContactFinished(status) = event else {
        panic!("Expected ContactFinished event");
    };
    assert_eq!(status, SubmitStatus::Success);

    desk.finish(status);
    assert!(!desk.is_submitting());
    assert_eq!(desk.status(), SubmitStatus::Success);
    assert_eq!(desk.form, ContactForm::default());
    assert_eq!(relay.received(), vec![filled_form()]);
}

#[tokio::test]
async fn test_failed_submission_keeps_form() {
    let bus = EventBus::new();
    let sender = bus.sender();
    let mut receiver = bus.into_receiver();
    let mut desk = ContactDesk::new(Arc::new(MockRelay::unconfigured()), sender);
    desk.form = filled_form();

    assert!(desk.submit());
    let event = receiver.recv().await.unwrap();
    let AppEvent::ContactFinished(status) = event else {
        panic!("Expected ContactFinished event");
    };
    desk.finish(status);
    assert_eq!(desk.status(), SubmitStatus::Error);
    assert_eq!(desk.form, filled_form());
}

#[tokio::test]
async fn test_web3forms_success() {
    let (url, server) = serve_once("HTTP/1.1 200 OK", r#"{"success":true,"message":"Email sent successfully!"}"#).await;
    let relay = Web3FormsRelay::new(url, "key-123");

    let resp = relay.submit(&filled_form()).await;
    tokio_test::assert_ok!(&resp);
    assert!(resp.unwrap().success);

    let request = server.await.unwrap();
    assert!(request.starts_with("POST /submit"));
    assert!(request.contains("\"access_key\":\"key-123\""));
    assert!(request.to_ascii_lowercase().contains("content-type: application/json"));
}

#[tokio::test]
async fn test_web3forms_rejection_is_error_status() {
    let (url, server) = serve_once("HTTP/1.1 400 Bad Request", r#"{"success":false,"message":"Invalid access key"}"#).await;
    let relay = Web3FormsRelay::new(url, "wrong");

    let result = relay.submit(&filled_form()).await;
    assert_eq!(SubmitStatus::from_result(&result), SubmitStatus::Error);
    let resp = result.unwrap();
    assert_eq!(resp.message.as_deref(), Some("Invalid access key"));
    server.await.unwrap();
}

#[tokio::test]
async fn test_web3forms_garbage_body_is_decode_error() {
    let (url, server) = serve_once("HTTP/1.1 502 Bad Gateway", "<html>oops</html>").await;
    let relay = Web3FormsRelay::new(url, "key");

    let err = relay.submit(&filled_form()).await.unwrap_err();
    assert!(matches!(err, ContactError::Decode(_)));
    server.await.unwrap();
}

#[tokio::test]
async fn test_web3forms_unreachable_is_network_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let relay = Web3FormsRelay::new(format!("http://{}/submit", addr), "key");
    let err = relay.submit(&filled_form()).await.unwrap_err();
    assert!(matches!(err, ContactError::Network(_)));
}
