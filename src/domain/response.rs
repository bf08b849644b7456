use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
/// Acknowledgement returned for a single submitted message.
///
/// Batch submissions return one record per message, in submission order;
/// entries the service rejected carry a non-zero `error_code` instead of a
/// `message_id`.
pub struct SendEmailResponse {
    #[serde(default)]
    pub to: Option<String>,
    #[serde(default)]
    pub submitted_at: Option<String>,
    #[serde(default, rename = "MessageID")]
    pub message_id: Option<String>,
    pub error_code: i64,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeliveryStatsResponse {
    pub inactive_mails: u64,
    #[serde(default)]
    pub bounces: Vec<BounceTypeStat>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
/// Per-classification bounce count inside [`DeliveryStatsResponse`].
pub struct BounceTypeStat {
    /// Absent for the aggregate `All` row.
    #[serde(default, rename = "Type")]
    pub bounce_type: Option<String>,
    pub name: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BouncesResponse {
    pub total_count: u64,
    #[serde(default)]
    pub bounces: Vec<Bounce>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
/// A delivery-failure event recorded by the remote service.
pub struct Bounce {
    #[serde(rename = "ID")]
    pub id: u64,
    #[serde(rename = "Type")]
    pub bounce_type: String,
    #[serde(default)]
    pub type_code: i64,
    pub name: String,
    #[serde(default)]
    pub tag: Option<String>,
    #[serde(default, rename = "MessageID")]
    pub message_id: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub details: Option<String>,
    pub email: String,
    #[serde(default)]
    pub bounced_at: Option<String>,
    #[serde(default)]
    pub dump_available: bool,
    #[serde(default)]
    pub inactive: bool,
    #[serde(default)]
    pub can_activate: bool,
    #[serde(default)]
    pub subject: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
/// Raw SMTP dump of a bounced delivery.
pub struct BounceDump {
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ActivateBounceResponse {
    pub message: String,
    pub bounce: Bounce,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
/// Server configuration as reported by `GET /server` and echoed back by
/// `PUT /server`.
pub struct Server {
    #[serde(rename = "ID")]
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub api_tokens: Vec<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub smtp_api_activated: bool,
    #[serde(default)]
    pub raw_email_enabled: bool,
    #[serde(default)]
    pub inbound_address: Option<String>,
    #[serde(default)]
    pub inbound_hook_url: Option<String>,
    #[serde(default)]
    pub bounce_hook_url: Option<String>,
    #[serde(default)]
    pub open_hook_url: Option<String>,
    #[serde(default)]
    pub post_first_open_only: bool,
    #[serde(default)]
    pub track_opens: bool,
    #[serde(default)]
    pub inbound_domain: Option<String>,
    #[serde(default)]
    pub inbound_hash: Option<String>,
    #[serde(default)]
    pub inbound_spam_threshold: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OutboundMessagesResponse {
    pub total_count: u64,
    #[serde(default)]
    pub messages: Vec<OutboundMessage>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
/// Summary record of a sent message, as listed by `/messages/outbound`.
pub struct OutboundMessage {
    #[serde(rename = "MessageID")]
    pub message_id: String,
    pub from: String,
    #[serde(default)]
    pub recipients: Vec<String>,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub tag: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub received_at: Option<String>,
    #[serde(default)]
    pub attachments: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
/// Full record of a sent message, including bodies and per-recipient events.
pub struct OutboundMessageDetail {
    #[serde(rename = "MessageID")]
    pub message_id: String,
    pub from: String,
    #[serde(default)]
    pub recipients: Vec<String>,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub tag: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub received_at: Option<String>,
    #[serde(default)]
    pub text_body: Option<String>,
    #[serde(default)]
    pub html_body: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub message_events: Vec<MessageEvent>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
/// One delivery event (delivered, bounced, opened, ...) for a recipient.
pub struct MessageEvent {
    #[serde(default)]
    pub recipient: Option<String>,
    #[serde(rename = "Type")]
    pub event_type: String,
    #[serde(default)]
    pub received_at: Option<String>,
    #[serde(default)]
    pub details: std::collections::BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
/// Raw source of an outbound message.
pub struct MessageDump {
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct InboundMessagesResponse {
    pub total_count: u64,
    #[serde(default)]
    pub inbound_messages: Vec<InboundMessage>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
/// Summary record of a received message, as listed by `/messages/inbound`.
pub struct InboundMessage {
    #[serde(rename = "MessageID")]
    pub message_id: String,
    pub from: String,
    pub to: String,
    #[serde(default)]
    pub cc: Option<String>,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub mailbox_hash: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
/// Full record of a received message, including bodies and attachments.
pub struct InboundMessageDetail {
    #[serde(rename = "MessageID")]
    pub message_id: String,
    pub from: String,
    pub to: String,
    #[serde(default)]
    pub cc: Option<String>,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub mailbox_hash: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub text_body: Option<String>,
    #[serde(default)]
    pub html_body: Option<String>,
    #[serde(default)]
    pub headers: Vec<InboundHeader>,
    #[serde(default)]
    pub attachments: Vec<InboundAttachment>,
    #[serde(default)]
    pub blocked_reason: Option<String>,
    #[serde(default)]
    pub stripped_text_reply: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct InboundHeader {
    pub name: String,
    #[serde(default)]
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct InboundAttachment {
    pub name: String,
    #[serde(default)]
    pub content_type: Option<String>,
    #[serde(default)]
    pub content_length: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
/// Generic `{ErrorCode, Message}` acknowledgement (bypass / retry-hook).
pub struct SuccessResponse {
    pub error_code: i64,
    pub message: String,
}
