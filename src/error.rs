use thiserror::Error;

/// Main error type for Ghost Admin API operations
#[derive(Debug, Error)]
pub enum GhostError {
    /// Admin key does not split into `<id>:<secret>`
    #[error("invalid admin key format: expected <id>:<hex secret>")]
    InvalidKeyFormat,

    /// Admin key secret is not valid hexadecimal
    #[error("admin key secret decode error: {0}")]
    KeyDecode(#[from] hex::FromHexError),

    /// Token signature could not be computed
    #[error("failed to sign token: {0}")]
    Signing(String),

    /// Token could not be decoded or failed verification
    #[error("invalid token: {0}")]
    InvalidToken(String),

    /// Token `exp` claim is in the past
    #[error("token has expired")]
    TokenExpired,

    /// Request building error
    #[error("failed to build request: {0}")]
    RequestBuild(String),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// HTTP client error
    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// URL parsing error
    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Base64 decoding error
    #[error("Base64 decode error: {0}")]
    Base64Decode(#[from] base64::DecodeError),
}

impl GhostError {
    /// Check if this error comes from parsing the admin key
    pub fn is_key_error(&self) -> bool {
        matches!(self, GhostError::InvalidKeyFormat | GhostError::KeyDecode(_))
    }

    /// Check if this error was raised by the HTTP transport
    pub fn is_transport_error(&self) -> bool {
        matches!(self, GhostError::Reqwest(_))
    }
}

/// Result type for Ghost Admin API operations
pub type Result<T> = std::result::Result<T, GhostError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_key_errors() {
        assert!(GhostError::InvalidKeyFormat.is_key_error());

        let decode = hex::decode("zz").unwrap_err();
        assert!(GhostError::from(decode).is_key_error());

        assert!(!GhostError::TokenExpired.is_key_error());
        assert!(!GhostError::Signing("boom".to_string()).is_key_error());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            GhostError::InvalidKeyFormat.to_string(),
            "invalid admin key format: expected <id>:<hex secret>"
        );
        assert_eq!(
            GhostError::RequestBuild("Invalid HTTP method: GE T".to_string()).to_string(),
            "failed to build request: Invalid HTTP method: GE T"
        );
        assert!(!GhostError::TokenExpired.is_transport_error());
    }
}
