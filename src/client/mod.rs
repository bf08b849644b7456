//! Client layer: the shared request dispatcher and the per-endpoint facade.

use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;

use crate::domain::{
    ActivateBounceResponse, Bounce, BounceDump, BounceFilter, BounceId, BouncesResponse,
    DeliveryStatsResponse, EmailMessage, InboundMessageDetail, InboundMessageFilter,
    InboundMessagesResponse, MessageDump, MessageId, OutboundMessageDetail,
    OutboundMessageFilter, OutboundMessagesResponse, SendEmailResponse, Server, ServerOptions,
    ServerToken, SuccessResponse, ValidationError,
};

const DEFAULT_BASE_URL: &str = "https://api.postmarkapp.com";

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Verb {
    Get,
    Post,
    Put,
}

#[derive(Debug, Clone)]
struct WireRequest {
    verb: Verb,
    url: Url,
    token: String,
    body: Option<String>,
}

#[derive(Debug, Clone)]
struct HttpResponse {
    status: u16,
    body: String,
}

trait HttpTransport: Send + Sync {
    fn send<'a>(
        &'a self,
        request: WireRequest,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
}

impl HttpTransport for ReqwestTransport {
    fn send<'a>(
        &'a self,
        request: WireRequest,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let method = match request.verb {
                Verb::Get => reqwest::Method::GET,
                Verb::Post => reqwest::Method::POST,
                Verb::Put => reqwest::Method::PUT,
            };
            let mut builder = self
                .client
                .request(method, request.url)
                .header(ServerToken::HEADER, request.token)
                .header(ACCEPT, "application/json");
            if let Some(body) = request.body {
                builder = builder.header(CONTENT_TYPE, "application/json").body(body);
            }
            let response = builder.send().await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok(HttpResponse { status, body })
        })
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`PostmarkClient`].
///
/// This error preserves:
/// - HTTP-level failures (non-2xx status or transport failures),
/// - API-level failures (the remote `{ErrorCode, Message}` body),
/// - encode/parse/validation failures.
pub enum PostmarkError {
    /// HTTP client / transport failure (DNS, TLS, timeouts, etc).
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    /// Non-2xx HTTP response whose body was not a structured API error.
    #[error("unexpected HTTP status: {status}")]
    HttpStatus { status: u16, body: Option<String> },

    /// The service answered non-2xx with a structured error body.
    #[error("API error {error_code} (HTTP {status}): {message}")]
    Api {
        status: u16,
        error_code: i64,
        message: String,
    },

    /// Request body could not be serialized as JSON.
    #[error("request encode error: {0}")]
    Encode(#[source] serde_json::Error),

    /// Response body could not be parsed as the expected shape.
    #[error("parse error: {0}")]
    Parse(#[source] serde_json::Error),

    /// One of the domain constructors rejected an invalid value.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

#[derive(Debug, Clone)]
/// Builder for [`PostmarkClient`].
///
/// Use this when you need to customize the base URL, timeout, or user-agent.
pub struct PostmarkClientBuilder {
    token: ServerToken,
    base_url: String,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl PostmarkClientBuilder {
    /// Create a builder with the default base URL and no timeout/user-agent override.
    pub fn new(token: ServerToken) -> Self {
        Self {
            token,
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout: None,
            user_agent: None,
        }
    }

    /// Override the API base URL. All operation paths are joined onto it.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set an HTTP client timeout applied to the entire request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build a [`PostmarkClient`].
    pub fn build(self) -> Result<PostmarkClient, PostmarkError> {
        let base_url =
            Url::parse(&self.base_url).map_err(|_| ValidationError::InvalidBaseUrl {
                input: self.base_url.clone(),
            })?;
        if base_url.cannot_be_a_base() {
            return Err(ValidationError::InvalidBaseUrl {
                input: self.base_url,
            }
            .into());
        }

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }

        let client = builder
            .build()
            .map_err(|err| PostmarkError::Transport(Box::new(err)))?;

        Ok(PostmarkClient {
            token: self.token,
            base_url,
            http: Arc::new(ReqwestTransport { client }),
        })
    }
}

#[derive(Clone)]
/// Client for the Postmark server API.
///
/// Every method issues exactly one HTTP exchange: the path and verb are
/// fixed per operation, the server token is attached as
/// `X-Postmark-Server-Token`, and the JSON response is deserialized into the
/// operation's typed record. The client holds no mutable state, so a single
/// instance (or clones of it) can run any number of calls concurrently.
///
/// Failures surface as [`PostmarkError`]; no retries are attempted.
pub struct PostmarkClient {
    token: ServerToken,
    base_url: Url,
    http: Arc<dyn HttpTransport>,
}

impl std::fmt::Debug for PostmarkClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PostmarkClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl PostmarkClient {
    /// Create a client for the default API endpoint.
    ///
    /// For more customization, use [`PostmarkClient::builder`].
    pub fn new(token: ServerToken) -> Self {
        Self {
            token,
            // Statically known to parse.
            base_url: Url::parse(DEFAULT_BASE_URL).unwrap(),
            http: Arc::new(ReqwestTransport {
                client: reqwest::Client::new(),
            }),
        }
    }

    /// Start building a client with custom settings.
    pub fn builder(token: ServerToken) -> PostmarkClientBuilder {
        PostmarkClientBuilder::new(token)
    }

    async fn request_without_body<T: DeserializeOwned>(
        &self,
        verb: Verb,
        segments: &[&str],
        query: Vec<(String, String)>,
    ) -> Result<T, PostmarkError> {
        let url = crate::transport::endpoint_url(&self.base_url, segments, &query)?;
        self.dispatch(verb, url, None).await
    }

    async fn request_with_body<B, T>(
        &self,
        verb: Verb,
        segments: &[&str],
        body: &B,
    ) -> Result<T, PostmarkError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = crate::transport::endpoint_url(&self.base_url, segments, &[])?;
        let body = serde_json::to_string(body).map_err(PostmarkError::Encode)?;
        self.dispatch(verb, url, Some(body)).await
    }

    async fn dispatch<T: DeserializeOwned>(
        &self,
        verb: Verb,
        url: Url,
        body: Option<String>,
    ) -> Result<T, PostmarkError> {
        let request = WireRequest {
            verb,
            url,
            token: self.token.as_str().to_owned(),
            body,
        };

        let response = self
            .http
            .send(request)
            .await
            .map_err(PostmarkError::Transport)?;

        if !(200..=299).contains(&response.status) {
            if let Some(remote) = crate::transport::decode_error_body(&response.body) {
                return Err(PostmarkError::Api {
                    status: response.status,
                    error_code: remote.error_code,
                    message: remote.message,
                });
            }
            let body = if response.body.trim().is_empty() {
                None
            } else {
                Some(response.body)
            };
            return Err(PostmarkError::HttpStatus {
                status: response.status,
                body,
            });
        }

        serde_json::from_str(&response.body).map_err(PostmarkError::Parse)
    }

    /// Submit a single email (`POST /email`).
    ///
    /// Message contents are not validated locally; a malformed message comes
    /// back as [`PostmarkError::Api`] with the remote error code.
    pub async fn send_email(
        &self,
        message: &EmailMessage,
    ) -> Result<SendEmailResponse, PostmarkError> {
        self.request_with_body(Verb::Post, &["email"], message).await
    }

    /// Submit up to 500 emails in one call (`POST /email/batch`).
    ///
    /// The response carries one acknowledgement per message, in submission
    /// order; per-message failures are reported there with a non-zero
    /// `error_code` rather than failing the whole call.
    pub async fn send_email_batch(
        &self,
        messages: &[EmailMessage],
    ) -> Result<Vec<SendEmailResponse>, PostmarkError> {
        self.request_with_body(Verb::Post, &["email", "batch"], messages)
            .await
    }

    /// Summarize delivery failures by bounce type (`GET /deliverystats`).
    pub async fn get_delivery_statistics(&self) -> Result<DeliveryStatsResponse, PostmarkError> {
        self.request_without_body(Verb::Get, &["deliverystats"], Vec::new())
            .await
    }

    /// List bounce records (`GET /bounces`).
    ///
    /// Paging defaults to `count=100, offset=0`; values set on the filter
    /// win.
    pub async fn get_bounces(
        &self,
        filter: &BounceFilter,
    ) -> Result<BouncesResponse, PostmarkError> {
        let query = crate::transport::encode_bounce_filter(filter);
        self.request_without_body(Verb::Get, &["bounces"], query)
            .await
    }

    /// Fetch a single bounce record (`GET /bounces/{id}`).
    pub async fn get_bounce(&self, id: BounceId) -> Result<Bounce, PostmarkError> {
        let id = id.to_string();
        self.request_without_body(Verb::Get, &["bounces", &id], Vec::new())
            .await
    }

    /// Fetch the raw SMTP dump of a bounce (`GET /bounces/{id}/dump`).
    pub async fn get_bounce_dump(&self, id: BounceId) -> Result<BounceDump, PostmarkError> {
        let id = id.to_string();
        self.request_without_body(Verb::Get, &["bounces", &id, "dump"], Vec::new())
            .await
    }

    /// Reactivate a bounced address (`PUT /bounces/{id}/activate`).
    pub async fn activate_bounce(
        &self,
        id: BounceId,
    ) -> Result<ActivateBounceResponse, PostmarkError> {
        let id = id.to_string();
        self.request_without_body(Verb::Put, &["bounces", &id, "activate"], Vec::new())
            .await
    }

    /// List the tags that appear on bounce records (`GET /bounces/tags`).
    pub async fn get_bounce_tags(&self) -> Result<Vec<String>, PostmarkError> {
        self.request_without_body(Verb::Get, &["bounces", "tags"], Vec::new())
            .await
    }

    /// Read the server configuration (`GET /server`).
    pub async fn get_server(&self) -> Result<Server, PostmarkError> {
        self.request_without_body(Verb::Get, &["server"], Vec::new())
            .await
    }

    /// Update server settings (`PUT /server`).
    ///
    /// Only fields set on `options` are sent; the response is the full
    /// configuration after the edit.
    pub async fn edit_server(&self, options: &ServerOptions) -> Result<Server, PostmarkError> {
        self.request_with_body(Verb::Put, &["server"], options).await
    }

    /// List sent messages (`GET /messages/outbound`).
    pub async fn get_outbound_messages(
        &self,
        filter: &OutboundMessageFilter,
    ) -> Result<OutboundMessagesResponse, PostmarkError> {
        let query = crate::transport::encode_outbound_filter(filter);
        self.request_without_body(Verb::Get, &["messages", "outbound"], query)
            .await
    }

    /// Fetch a sent message with bodies and events
    /// (`GET /messages/outbound/{id}`).
    pub async fn get_outbound_message_details(
        &self,
        id: &MessageId,
    ) -> Result<OutboundMessageDetail, PostmarkError> {
        self.request_without_body(
            Verb::Get,
            &["messages", "outbound", id.as_str()],
            Vec::new(),
        )
        .await
    }

    /// Fetch the raw source of a sent message
    /// (`GET /messages/outbound/{id}/dump`).
    pub async fn get_outbound_message_dump(
        &self,
        id: &MessageId,
    ) -> Result<MessageDump, PostmarkError> {
        self.request_without_body(
            Verb::Get,
            &["messages", "outbound", id.as_str(), "dump"],
            Vec::new(),
        )
        .await
    }

    /// List received messages (`GET /messages/inbound`).
    pub async fn get_inbound_messages(
        &self,
        filter: &InboundMessageFilter,
    ) -> Result<InboundMessagesResponse, PostmarkError> {
        let query = crate::transport::encode_inbound_filter(filter);
        self.request_without_body(Verb::Get, &["messages", "inbound"], query)
            .await
    }

    /// Fetch a received message with bodies, headers, and attachments
    /// (`GET /messages/inbound/{id}/details`).
    pub async fn get_inbound_message_details(
        &self,
        id: &MessageId,
    ) -> Result<InboundMessageDetail, PostmarkError> {
        self.request_without_body(
            Verb::Get,
            &["messages", "inbound", id.as_str(), "details"],
            Vec::new(),
        )
        .await
    }

    /// Release an inbound message held by a filtering rule
    /// (`PUT /messages/inbound/{id}/bypass`).
    pub async fn bypass_blocked_inbound_message(
        &self,
        id: &MessageId,
    ) -> Result<SuccessResponse, PostmarkError> {
        self.request_without_body(
            Verb::Put,
            &["messages", "inbound", id.as_str(), "bypass"],
            Vec::new(),
        )
        .await
    }

    /// Re-run the inbound webhook for a message
    /// (`PUT /messages/inbound/{id}/retry`).
    pub async fn retry_inbound_hook(
        &self,
        id: &MessageId,
    ) -> Result<SuccessResponse, PostmarkError> {
        self.request_without_body(
            Verb::Put,
            &["messages", "inbound", id.as_str(), "retry"],
            Vec::new(),
        )
        .await
    }
}
