//! Domain layer: request/response payload shapes and validated values (no I/O).

mod request;
mod response;
mod validation;
mod value;

pub use request::{
    Attachment, BounceFilter, DEFAULT_PAGE_COUNT, DEFAULT_PAGE_OFFSET, EmailMessage,
    InboundMessageFilter, MailHeader, OutboundMessageFilter, ServerOptions,
};
pub use response::{
    ActivateBounceResponse, Bounce, BounceDump, BounceTypeStat, BouncesResponse,
    DeliveryStatsResponse, InboundAttachment, InboundHeader, InboundMessage,
    InboundMessageDetail, InboundMessagesResponse, MessageDump, MessageEvent, OutboundMessage,
    OutboundMessageDetail, OutboundMessagesResponse, SendEmailResponse, Server, SuccessResponse,
};
pub use validation::ValidationError;
pub use value::{BounceId, MessageId, ServerToken};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_token_rejects_empty() {
        assert!(matches!(
            ServerToken::new("   "),
            Err(ValidationError::Empty {
                field: "server token"
            })
        ));
    }

    #[test]
    fn server_token_trims_whitespace() {
        let token = ServerToken::new(" abc-123 ").unwrap();
        assert_eq!(token.as_str(), "abc-123");
    }

    #[test]
    fn server_token_debug_does_not_leak_value() {
        let token = ServerToken::new("super-secret").unwrap();
        let printed = format!("{token:?}");
        assert!(!printed.contains("super-secret"));
    }

    #[test]
    fn message_id_rejects_empty() {
        assert!(matches!(
            MessageId::new(""),
            Err(ValidationError::Empty {
                field: "message id"
            })
        ));
    }

    #[test]
    fn bounce_id_displays_as_plain_number() {
        assert_eq!(BounceId::new(12345).to_string(), "12345");
    }

    #[test]
    fn email_message_serializes_wire_field_names() {
        let message = EmailMessage {
            from: "a@x.com".to_owned(),
            to: "b@x.com".to_owned(),
            subject: Some("hi".to_owned()),
            html_body: Some("<b>hi</b>".to_owned()),
            track_opens: Some(true),
            ..Default::default()
        };
        let json: serde_json::Value = serde_json::to_value(&message).unwrap();
        assert_eq!(json["From"], "a@x.com");
        assert_eq!(json["To"], "b@x.com");
        assert_eq!(json["Subject"], "hi");
        assert_eq!(json["HtmlBody"], "<b>hi</b>");
        assert_eq!(json["TrackOpens"], true);
        // Unset optionals must be omitted, not sent as null.
        assert!(json.get("Cc").is_none());
        assert!(json.get("TextBody").is_none());
    }

    #[test]
    fn server_options_only_sends_set_fields() {
        let options = ServerOptions {
            name: Some("staging".to_owned()),
            track_opens: Some(false),
            ..Default::default()
        };
        let json: serde_json::Value = serde_json::to_value(&options).unwrap();
        assert_eq!(json["Name"], "staging");
        assert_eq!(json["TrackOpens"], false);
        assert!(json.get("Color").is_none());
        assert!(json.get("SmtpApiActivated").is_none());
    }

    #[test]
    fn send_email_response_reads_message_id_key() {
        let json = r#"
        {
          "To": "b@x.com",
          "SubmittedAt": "2026-01-05T12:00:00Z",
          "MessageID": "0a129aee-e1cd-480d-b08d-4f48548ff48d",
          "ErrorCode": 0,
          "Message": "OK"
        }
        "#;
        let parsed: SendEmailResponse = serde_json::from_str(json).unwrap();
        assert_eq!(
            parsed.message_id.as_deref(),
            Some("0a129aee-e1cd-480d-b08d-4f48548ff48d")
        );
        assert_eq!(parsed.error_code, 0);
    }

    #[test]
    fn bounce_tolerates_missing_optional_fields() {
        let json = r#"
        {
          "ID": 692560173,
          "Type": "HardBounce",
          "Name": "Hard bounce",
          "Email": "invalid@example.com"
        }
        "#;
        let parsed: Bounce = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.id, 692560173);
        assert_eq!(parsed.bounce_type, "HardBounce");
        assert!(parsed.tag.is_none());
        assert!(!parsed.dump_available);
    }
}
