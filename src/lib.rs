//! Typed Rust client for the Postmark transactional email HTTP API.
//!
//! The design follows three layers: a domain layer of request/response
//! payload shapes, a transport layer for wire-format details (paths, query
//! strings, the remote error body), and a small client layer that dispatches
//! HTTP requests with the server token attached.
//!
//! ```rust,no_run
//! use postmark_client::{EmailMessage, PostmarkClient, ServerToken};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), postmark_client::PostmarkError> {
//!     let client = PostmarkClient::new(ServerToken::new("...")?);
//!     let message = EmailMessage {
//!         from: "sender@example.com".to_owned(),
//!         to: "receiver@example.com".to_owned(),
//!         subject: Some("Hello".to_owned()),
//!         text_body: Some("Hello from Rust.".to_owned()),
//!         ..Default::default()
//!     };
//!     let ack = client.send_email(&message).await?;
//!     println!("queued as {:?}", ack.message_id);
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{PostmarkClient, PostmarkClientBuilder, PostmarkError};
pub use domain::{
    ActivateBounceResponse, Attachment, Bounce, BounceDump, BounceFilter, BounceId,
    BounceTypeStat, BouncesResponse, DeliveryStatsResponse, EmailMessage, InboundAttachment,
    InboundHeader, InboundMessage, InboundMessageDetail, InboundMessageFilter,
    InboundMessagesResponse, MailHeader, MessageDump, MessageEvent, MessageId, OutboundMessage,
    OutboundMessageDetail, OutboundMessageFilter, OutboundMessagesResponse, SendEmailResponse,
    Server, ServerOptions, ServerToken, SuccessResponse, ValidationError,
};
