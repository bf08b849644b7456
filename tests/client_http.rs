//! End-to-end tests against a mock HTTP server.
//!
//! The in-crate unit tests exercise the dispatcher through a fake transport;
//! these go through the real reqwest stack instead.

use postmark_client::{
    BounceFilter, EmailMessage, MessageId, PostmarkClient, PostmarkError, ServerToken,
};
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn make_client(server: &MockServer) -> PostmarkClient {
    PostmarkClient::builder(ServerToken::new("test-token").unwrap())
        .base_url(server.uri())
        .build()
        .unwrap()
}

#[tokio::test]
async fn send_email_round_trip() {
    let server = MockServer::start().await;

    let expected_body = serde_json::json!({
        "From": "a@x.com",
        "To": "b@x.com",
        "Subject": "hi"
    });
    Mock::given(method("POST"))
        .and(path("/email"))
        .and(header("X-Postmark-Server-Token", "test-token"))
        .and(header("Content-Type", "application/json"))
        .and(body_json(&expected_body))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "To": "b@x.com",
            "SubmittedAt": "2026-01-05T12:00:00Z",
            "MessageID": "0a129aee-e1cd-480d-b08d-4f48548ff48d",
            "ErrorCode": 0,
            "Message": "OK"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = make_client(&server).await;
    let message = EmailMessage {
        from: "a@x.com".to_owned(),
        to: "b@x.com".to_owned(),
        subject: Some("hi".to_owned()),
        ..Default::default()
    };

    let ack = client.send_email(&message).await.unwrap();
    assert_eq!(ack.error_code, 0);
    assert_eq!(
        ack.message_id.as_deref(),
        Some("0a129aee-e1cd-480d-b08d-4f48548ff48d")
    );
}

#[tokio::test]
async fn get_bounces_sends_default_paging_and_token() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/bounces"))
        .and(query_param("count", "100"))
        .and(query_param("offset", "0"))
        .and(header("X-Postmark-Server-Token", "test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "TotalCount": 1,
            "Bounces": [{
                "ID": 692560173,
                "Type": "HardBounce",
                "Name": "Hard bounce",
                "Email": "invalid@example.com",
                "DumpAvailable": true
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = make_client(&server).await;
    let bounces = client.get_bounces(&BounceFilter::default()).await.unwrap();
    assert_eq!(bounces.total_count, 1);
    assert_eq!(bounces.bounces[0].id, 692560173);
    assert!(bounces.bounces[0].dump_available);
}

#[tokio::test]
async fn remote_error_body_surfaces_as_api_error() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/messages/inbound/mid-1/bypass"))
        .respond_with(ResponseTemplate::new(422).set_body_json(serde_json::json!({
            "ErrorCode": 701,
            "Message": "This message was not found or cannot be bypassed."
        })))
        .mount(&server)
        .await;

    let client = make_client(&server).await;
    let id = MessageId::new("mid-1").unwrap();
    let err = client.bypass_blocked_inbound_message(&id).await.unwrap_err();
    match err {
        PostmarkError::Api {
            status,
            error_code,
            message,
        } => {
            assert_eq!(status, 422);
            assert_eq!(error_code, 701);
            assert_eq!(message, "This message was not found or cannot be bypassed.");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn unmatched_path_is_a_plain_http_status_error() {
    let server = MockServer::start().await;
    // No mounted mock: wiremock answers 404 with an empty body.

    let client = make_client(&server).await;
    let err = client.get_server().await.unwrap_err();
    assert!(matches!(
        err,
        PostmarkError::HttpStatus { status: 404, .. }
    ));
}
