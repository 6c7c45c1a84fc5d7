mod common;

use std::time::Duration;

use common::mock_endpoint::{MockEndpoint, MockResponse};
use knock_rsvp::config::EndpointConfig;
use knock_rsvp::submission::{
    HttpTransport, RsvpPayload, RsvpTransport, SubmissionReport, SubmissionWorker,
    SubmitCommand, TransportError,
};
use knock_rsvp::themes::ThemeId;
use knock_rsvp::ui::form::RsvpChoice;
use tokio::runtime::Handle;
use tokio::sync::mpsc;
use uuid::Uuid;

fn payload(theme: Option<ThemeId>) -> RsvpPayload {
    RsvpPayload {
        name: "Chandler".to_string(),
        guests: 2,
        status: RsvpChoice::Yes,
        theme,
    }
}

fn transport_for(url: String) -> HttpTransport {
    HttpTransport::new(&EndpointConfig {
        url,
        connect_timeout_seconds: Some(2),
    })
    .expect("client builds")
}

#[tokio::test]
async fn posts_json_body() {
    let endpoint = MockEndpoint::start().await;
    let transport = transport_for(endpoint.url());

    transport.send(&payload(None)).await.expect("send succeeds");

    let requests = endpoint.captured_requests().await;
    assert_eq!(requests.len(), 1);
    let request = &requests[0];
    assert_eq!(request.method, "POST");
    assert_eq!(request.path, "/macros/s/test/exec");
    assert_eq!(request.header("content-type"), Some("application/json"));
    assert_eq!(
        request.json(),
        serde_json::json!({"name": "Chandler", "guests": 2, "status": "Yes"})
    );
}

#[tokio::test]
async fn includes_theme_when_present() {
    let endpoint = MockEndpoint::start().await;
    let transport = transport_for(endpoint.url());

    transport
        .send(&payload(Some(ThemeId::Midnight)))
        .await
        .unwrap();

    let requests = endpoint.captured_requests().await;
    assert_eq!(requests[0].json()["theme"], "midnight");
}

#[tokio::test]
async fn server_error_status_still_counts_as_sent() {
    let endpoint = MockEndpoint::start().await;
    endpoint.enqueue_response(MockResponse::status(500)).await;
    let transport = transport_for(endpoint.url());

    assert!(transport.send(&payload(None)).await.is_ok());
    assert_eq!(endpoint.captured_requests().await.len(), 1);
}

#[tokio::test]
async fn refused_connection_is_transport_error() {
    let port = common::free_port();
    let transport = transport_for(format!("http://127.0.0.1:{}/exec", port));

    let err = transport.send(&payload(None)).await.unwrap_err();
    assert!(matches!(err, TransportError::Connection { .. }));
    assert_eq!(err.user_message(), "Connection error. Try again.");
}

#[tokio::test]
async fn worker_reports_every_command() {
    let endpoint = MockEndpoint::start().await;
    endpoint
        .enqueue_response(MockResponse::default().with_delay(50))
        .await;
    let (report_tx, mut report_rx) = mpsc::unbounded_channel::<SubmissionReport>();
    let sender = SubmissionWorker::spawn(
        &Handle::current(),
        transport_for(endpoint.url()),
        move |report| {
            let _ = report_tx.send(report);
        },
    );

    let attempts = [Uuid::new_v4(), Uuid::new_v4()];
    for attempt in attempts {
        sender
            .send(SubmitCommand {
                attempt,
                payload: payload(None),
            })
            .await
            .unwrap();
    }

    let mut seen = Vec::new();
    for _ in 0..attempts.len() {
        let report = tokio::time::timeout(Duration::from_secs(5), report_rx.recv())
            .await
            .expect("report in time")
            .expect("channel open");
        assert!(report.result.is_ok());
        seen.push(report.attempt);
    }
    seen.sort();
    let mut expected = attempts.to_vec();
    expected.sort();
    assert_eq!(seen, expected);
}

#[tokio::test]
async fn worker_reports_refused_connection() {
    let port = common::free_port();
    let (report_tx, mut report_rx) = mpsc::unbounded_channel::<SubmissionReport>();
    let sender = SubmissionWorker::spawn(
        &Handle::current(),
        transport_for(format!("http://127.0.0.1:{}/exec", port)),
        move |report| {
            let _ = report_tx.send(report);
        },
    );

    let attempt = Uuid::new_v4();
    sender
        .send(SubmitCommand {
            attempt,
            payload: payload(None),
        })
        .await
        .unwrap();

    let report = tokio::time::timeout(Duration::from_secs(5), report_rx.recv())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(report.attempt, attempt);
    assert!(matches!(report.result, Err(TransportError::Connection { .. })));
}

struct PanickingTransport;

impl RsvpTransport for PanickingTransport {
    async fn send(&self, _payload: &RsvpPayload) -> Result<(), TransportError> {
        panic!("transport blew up");
    }
}

#[tokio::test]
async fn worker_reports_even_when_task_panics() {
    let (report_tx, mut report_rx) = mpsc::unbounded_channel::<SubmissionReport>();
    let sender = SubmissionWorker::spawn(&Handle::current(), PanickingTransport, move |report| {
        let _ = report_tx.send(report);
    });

    let attempt = Uuid::new_v4();
    sender
        .send(SubmitCommand {
            attempt,
            payload: payload(None),
        })
        .await
        .unwrap();

    let report = tokio::time::timeout(Duration::from_secs(5), report_rx.recv())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(report.attempt, attempt);
    assert!(matches!(report.result, Err(TransportError::Abandoned)));
}
