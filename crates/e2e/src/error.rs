//! Error types for the EmojiHub harness

use thiserror::Error;

#[derive(Error, Debug)]
pub enum E2eError {
    #[error("Cannot reach {url}: {reason}")]
    Connectivity { url: String, reason: String },

    #[error("Server not ready after {0} attempts")]
    ServerNotReady(usize),

    #[error("Expected status {expected} from {url}, got {actual}")]
    UnexpectedStatus {
        url: String,
        expected: u16,
        actual: u16,
        body: String,
    },

    #[error("Failed to decode body from {url}: {source} (body: {})", excerpt(.body))]
    Decode {
        url: String,
        /// The raw body as received
        body: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Assertion failed: {0}")]
    AssertionFailed(String),

    #[error("Test case parse error: {0}")]
    SpecParse(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

impl E2eError {
    /// Whether this error means the case could not be executed at all,
    /// as opposed to the server answering wrongly.
    pub fn is_connectivity(&self) -> bool {
        matches!(self, E2eError::Connectivity { .. } | E2eError::ServerNotReady(_))
    }
}

pub type E2eResult<T> = Result<T, E2eError>;

/// Longest body excerpt shown in error messages
const BODY_EXCERPT_LEN: usize = 512;

fn excerpt(body: &str) -> String {
    match body.char_indices().nth(BODY_EXCERPT_LEN) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode_error(body: &str) -> E2eError {
        let source = serde_json::from_str::<serde_json::Value>(body).unwrap_err();
        E2eError::Decode {
            url: "http://localhost:4000/api/all".to_string(),
            body: body.to_string(),
            source,
        }
    }

    #[test]
    fn test_decode_message_truncates_long_body() {
        let body = format!("<html>{}</html>", "x".repeat(BODY_EXCERPT_LEN * 2));
        let err = decode_error(&body);

        let message = err.to_string();
        assert!(message.ends_with("...)"));
        assert!(message.len() < body.len());

        match err {
            E2eError::Decode { body: raw, .. } => assert_eq!(raw, body),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_excerpt_short_body_unchanged() {
        assert_eq!(excerpt("short"), "short");
        let long = "x".repeat(BODY_EXCERPT_LEN + 10);
        assert_eq!(excerpt(&long).len(), BODY_EXCERPT_LEN + 3);
    }
}
