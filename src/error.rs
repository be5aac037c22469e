//! Error types.

use thiserror::Error;

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, TokenError>;

/// Errors raised while configuring, signing or verifying tokens.
#[derive(Error, Debug)]
pub enum TokenError {
    /// Algorithm or key rejected, or header/payload could not be serialized.
    #[error("Token signing failed: {0}")]
    Signing(String),

    /// Token is malformed or failed signature or claim checks.
    #[error("Token verification failed: {0}")]
    Verification(String),

    /// Missing or invalid configuration value.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl TokenError {
    /// Build a signing error.
    pub fn signing(msg: impl Into<String>) -> Self {
        TokenError::Signing(msg.into())
    }

    /// Build a verification error.
    pub fn verification(msg: impl Into<String>) -> Self {
        TokenError::Verification(msg.into())
    }

    /// Build a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        TokenError::Config(msg.into())
    }
}

impl From<jsonwebtoken::errors::Error> for TokenError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        TokenError::Signing(err.to_string())
    }
}

impl From<serde_json::Error> for TokenError {
    fn from(err: serde_json::Error) -> Self {
        TokenError::Signing(format!("serialization failed: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            TokenError::signing("empty key").to_string(),
            "Token signing failed: empty key"
        );
        assert_eq!(
            TokenError::config("TOKEN_SECRET is required").to_string(),
            "Configuration error: TOKEN_SECRET is required"
        );
    }

    #[test]
    fn test_serde_error_maps_to_signing() {
        let err: TokenError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert!(matches!(err, TokenError::Signing(_)));
    }
}
