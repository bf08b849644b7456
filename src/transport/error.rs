use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
/// Structured error body the remote service attaches to non-2xx responses.
pub struct RemoteError {
    pub error_code: i64,
    pub message: String,
}

/// Decode the remote error body, if it has the expected shape.
///
/// Proxies and load balancers in front of the service can answer with
/// plain-text or HTML bodies; those decode to `None` and surface as a raw
/// HTTP-status error instead.
pub fn decode_error_body(body: &str) -> Option<RemoteError> {
    serde_json::from_str(body).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_structured_error() {
        let body = r#"{"ErrorCode": 300, "Message": "Zero recipients specified"}"#;
        assert_eq!(
            decode_error_body(body),
            Some(RemoteError {
                error_code: 300,
                message: "Zero recipients specified".to_owned(),
            })
        );
    }

    #[test]
    fn non_json_body_decodes_to_none() {
        assert_eq!(decode_error_body("<html>502 Bad Gateway</html>"), None);
        assert_eq!(decode_error_body(""), None);
    }

    #[test]
    fn json_with_wrong_shape_decodes_to_none() {
        assert_eq!(decode_error_body(r#"{"error": "nope"}"#), None);
    }
}
