use serde::Serialize;

/// Page size applied to list requests when the caller leaves `count` unset.
pub const DEFAULT_PAGE_COUNT: u32 = 100;
/// Offset applied to list requests when the caller leaves `offset` unset.
pub const DEFAULT_PAGE_OFFSET: u32 = 0;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
/// A single email to submit through `/email`, or one entry of a batch.
///
/// Field contents are not validated locally; the remote service rejects
/// malformed messages with its own structured error.
pub struct EmailMessage {
    pub from: String,
    pub to: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cc: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bcc: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html_body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headers: Option<Vec<MailHeader>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub track_opens: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachments: Option<Vec<Attachment>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
/// Custom SMTP header attached to an outgoing message.
pub struct MailHeader {
    pub name: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
/// File attachment; `content` is the base64-encoded payload.
pub struct Attachment {
    pub name: String,
    pub content: String,
    pub content_type: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
/// Mutable server settings for `PUT /server`.
///
/// Only fields set to `Some` are sent; the remote service leaves the rest
/// untouched.
pub struct ServerOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub smtp_api_activated: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_email_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inbound_hook_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bounce_hook_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open_hook_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post_first_open_only: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub track_opens: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inbound_domain: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inbound_spam_threshold: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// Filter for `GET /bounces`.
///
/// `count`/`offset` left as `None` fall back to
/// [`DEFAULT_PAGE_COUNT`]/[`DEFAULT_PAGE_OFFSET`] on the wire.
pub struct BounceFilter {
    pub count: Option<u32>,
    pub offset: Option<u32>,
    /// Bounce classification, e.g. `HardBounce` or `Transient`.
    pub bounce_type: Option<String>,
    pub inactive: Option<bool>,
    /// Substring match against the bounced address.
    pub email_filter: Option<String>,
    pub tag: Option<String>,
    pub message_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// Filter for `GET /messages/outbound`.
pub struct OutboundMessageFilter {
    pub count: Option<u32>,
    pub offset: Option<u32>,
    pub recipient: Option<String>,
    pub from_email: Option<String>,
    pub tag: Option<String>,
    pub subject: Option<String>,
    /// Delivery status, e.g. `queued` or `sent`.
    pub status: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// Filter for `GET /messages/inbound`.
pub struct InboundMessageFilter {
    pub count: Option<u32>,
    pub offset: Option<u32>,
    pub recipient: Option<String>,
    pub from_email: Option<String>,
    pub subject: Option<String>,
    pub mailbox_hash: Option<String>,
    /// Processing status, e.g. `blocked` or `processed`.
    pub status: Option<String>,
}
