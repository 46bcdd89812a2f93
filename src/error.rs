use crate::http::TransportError;
use thiserror::Error;

/// Longest body excerpt kept on a decode failure.
const BODY_EXCERPT_LEN: usize = 512;

/// Errors raised by [`ChatClient`](crate::ChatClient).
///
/// Failures reported by the API itself (bad request, invalid key, rate limit)
/// are not errors at this level. They arrive inside a successfully decoded
/// [`ChatResponse`](crate::ChatResponse) and must be checked with
/// [`ChatResponse::api_error`](crate::ChatResponse::api_error).
#[derive(Debug, Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to encode request: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("HTTP transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("Failed to decode response: {source}\nBody: {body}")]
    Decode {
        #[source]
        source: serde_json::Error,
        body: String,
    },
}

impl Error {
    pub(crate) fn decode(source: serde_json::Error, body: &[u8]) -> Self {
        let text = String::from_utf8_lossy(body);
        let body = match text.char_indices().nth(BODY_EXCERPT_LEN) {
            Some((cut, _)) => format!("{}...", &text[..cut]),
            None => text.into_owned(),
        };
        Self::Decode { source, body }
    }

    #[must_use]
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }

    #[must_use]
    pub fn is_encode(&self) -> bool {
        matches!(self, Self::Encode(_))
    }

    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    #[must_use]
    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Decode { .. })
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    fn json_error() -> serde_json::Error {
        serde_json::from_str::<serde_json::Value>("not json").unwrap_err()
    }

    #[test]
    fn test_decode_keeps_short_body() {
        let err = Error::decode(json_error(), b"not json");
        match err {
            Error::Decode { body, .. } => assert_eq!(body, "not json"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_decode_truncates_long_body() {
        let body = "x".repeat(BODY_EXCERPT_LEN * 2);
        let err = Error::decode(json_error(), body.as_bytes());
        match err {
            Error::Decode { body, .. } => {
                assert_eq!(body.len(), BODY_EXCERPT_LEN + 3);
                assert!(body.ends_with("..."));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_decode_truncates_on_char_boundary() {
        let body = "é".repeat(BODY_EXCERPT_LEN + 10);
        let err = Error::decode(json_error(), body.as_bytes());
        match err {
            Error::Decode { body, .. } => {
                assert_eq!(body.chars().count(), BODY_EXCERPT_LEN + 3);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_kind_predicates() {
        assert!(Error::Config("bad".into()).is_config());
        assert!(Error::Encode(json_error()).is_encode());
        assert!(Error::decode(json_error(), b"").is_decode());
        assert!(!Error::Config("bad".into()).is_transport());
    }

    #[test]
    fn test_source_chain() {
        use std::error::Error as _;
        let err = Error::decode(json_error(), b"not json");
        assert!(err.source().is_some());
    }
}
