use std::fmt;

use crate::domain::validation::ValidationError;

#[derive(Clone, PartialEq, Eq, Hash)]
/// Postmark server API token.
///
/// Invariant: non-empty after trimming. The token is attached to every
/// outgoing request as the `X-Postmark-Server-Token` header and never
/// changes for the lifetime of a client.
pub struct ServerToken(String);

impl ServerToken {
    /// Header name the token is sent under.
    pub const HEADER: &'static str = "X-Postmark-Server-Token";

    /// Create a validated [`ServerToken`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty {
                field: "server token",
            });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated token.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Keeps the token out of logs and panic messages.
impl fmt::Debug for ServerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ServerToken(***)")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
/// Numeric identifier of a bounce record.
pub struct BounceId(u64);

impl BounceId {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for BounceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for BounceId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Opaque identifier of an outbound or inbound message.
///
/// Invariant: non-empty after trimming. The identifier is embedded verbatim
/// in request paths (percent-escaped only); the remote service decides
/// whether it is well-formed.
pub struct MessageId(String);

impl MessageId {
    /// Create a validated [`MessageId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty {
                field: "message id",
            });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
