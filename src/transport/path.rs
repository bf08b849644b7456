use url::Url;

use crate::domain::ValidationError;

/// Join path segments and query pairs onto a base URL.
///
/// Segments are pushed one at a time, so identifiers containing reserved
/// characters come out percent-escaped rather than splitting the path.
/// The identifier itself is otherwise embedded verbatim; the remote service
/// decides whether it is well-formed.
pub fn endpoint_url(
    base: &Url,
    segments: &[&str],
    query: &[(String, String)],
) -> Result<Url, ValidationError> {
    let mut url = base.clone();
    {
        let mut path = url
            .path_segments_mut()
            .map_err(|()| ValidationError::InvalidBaseUrl {
                input: base.to_string(),
            })?;
        path.pop_if_empty().extend(segments);
    }
    if !query.is_empty() {
        url.query_pairs_mut()
            .extend_pairs(query.iter().map(|(k, v)| (k.as_str(), v.as_str())));
    }
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("https://api.postmarkapp.com").unwrap()
    }

    #[test]
    fn joins_plain_segments() {
        let url = endpoint_url(&base(), &["bounces", "12345"], &[]).unwrap();
        assert_eq!(url.as_str(), "https://api.postmarkapp.com/bounces/12345");
    }

    #[test]
    fn appends_query_pairs() {
        let url = endpoint_url(
            &base(),
            &["bounces"],
            &[
                ("count".to_owned(), "5".to_owned()),
                ("offset".to_owned(), "0".to_owned()),
                ("tag".to_owned(), "welcome".to_owned()),
            ],
        )
        .unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.postmarkapp.com/bounces?count=5&offset=0&tag=welcome"
        );
    }

    #[test]
    fn escapes_reserved_characters_in_identifiers() {
        let url = endpoint_url(&base(), &["messages", "outbound", "a b/c?d", "dump"], &[])
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.postmarkapp.com/messages/outbound/a%20b%2Fc%3Fd/dump"
        );
    }

    #[test]
    fn tolerates_base_with_trailing_slash() {
        let base = Url::parse("https://api.postmarkapp.com/").unwrap();
        let url = endpoint_url(&base, &["server"], &[]).unwrap();
        assert_eq!(url.as_str(), "https://api.postmarkapp.com/server");
    }

    #[test]
    fn rejects_cannot_be_a_base_urls() {
        let base = Url::parse("mailto:postmaster@example.com").unwrap();
        let err = endpoint_url(&base, &["server"], &[]).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidBaseUrl { .. }));
    }
}
