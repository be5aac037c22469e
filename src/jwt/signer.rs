//! JWT signing traits and implementations.

use crate::config::JwtAlgorithm;
use crate::error::TokenError;
use crate::jwt::key::SecretKey;
use jsonwebtoken::{DecodingKey, EncodingKey};

/// Produces JWS signatures over a signing input.
pub trait JwtSigner: Send + Sync {
    /// Sign `header.payload` and return the base64url signature segment.
    fn sign(&self, signing_input: &[u8]) -> Result<String, TokenError>;

    /// Algorithm written to the `alg` header.
    fn algorithm(&self) -> JwtAlgorithm;

    /// Key ID for the `kid` header, if any.
    fn key_id(&self) -> Option<&str>;
}

/// HMAC signer backed by the jsonwebtoken crypto primitives.
#[derive(Debug, Clone)]
pub struct HmacSigner {
    secret: SecretKey,
    algorithm: JwtAlgorithm,
    key_id: Option<String>,
}

impl HmacSigner {
    /// Create a signer for the given key and algorithm.
    ///
    /// # Errors
    ///
    /// Returns a signing error if the key is empty.
    pub fn new(secret: SecretKey, algorithm: JwtAlgorithm) -> Result<Self, TokenError> {
        if secret.is_empty() {
            return Err(TokenError::signing("HMAC key must not be empty"));
        }
        Ok(Self {
            secret,
            algorithm,
            key_id: None,
        })
    }

    /// Set the key ID advertised in the header.
    #[must_use]
    pub fn with_key_id(mut self, key_id: impl Into<String>) -> Self {
        self.key_id = Some(key_id.into());
        self
    }

    /// Key for verifying tokens produced by this signer.
    #[must_use]
    pub fn decoding_key(&self) -> DecodingKey {
        DecodingKey::from_secret(self.secret.as_bytes())
    }

    /// Key bytes this signer uses.
    #[must_use]
    pub fn secret(&self) -> &SecretKey {
        &self.secret
    }
}

impl JwtSigner for HmacSigner {
    fn sign(&self, signing_input: &[u8]) -> Result<String, TokenError> {
        let key = EncodingKey::from_secret(self.secret.as_bytes());
        Ok(jsonwebtoken::crypto::sign(
            signing_input,
            &key,
            self.algorithm.into(),
        )?)
    }

    fn algorithm(&self) -> JwtAlgorithm {
        self.algorithm
    }

    fn key_id(&self) -> Option<&str> {
        self.key_id.as_deref()
    }
}
