//! Transport layer: URL construction and wire-format details.

mod error;
mod path;
mod query;

pub use error::{RemoteError, decode_error_body};
pub use path::endpoint_url;
pub use query::{encode_bounce_filter, encode_inbound_filter, encode_outbound_filter};
