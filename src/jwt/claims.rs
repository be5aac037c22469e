use crate::error::TokenError;
use serde::{Deserialize, Serialize};

/// Default lifetime of a token: one day.
pub const DEFAULT_TTL_SECONDS: u32 = 86_400;

/// Payload claim set. Field order is the serialized order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Issuer
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iss: Option<String>,
    /// Subject
    pub sub: String,
    /// Not valid before, epoch seconds
    pub nbf: i64,
    /// Issued at, epoch seconds
    pub iat: i64,
    /// Expiry, epoch seconds
    pub exp: i64,
    /// Token ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jti: Option<String>,
    /// Audience
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aud: Option<String>,
}

impl Claims {
    /// Claims issued at `now`, valid from `now` for `ttl_seconds`.
    ///
    /// # Errors
    ///
    /// Returns a signing error if `now + ttl_seconds` overflows.
    pub fn issued_at(subject: String, now: i64, ttl_seconds: u32) -> Result<Self, TokenError> {
        let exp = now.checked_add(i64::from(ttl_seconds)).ok_or_else(|| {
            TokenError::signing(format!("exp overflows: {} + {}", now, ttl_seconds))
        })?;

        Ok(Claims {
            iss: None,
            sub: subject,
            nbf: now,
            iat: now,
            exp,
            jti: None,
            aud: None,
        })
    }

    /// Set `iss`.
    pub fn with_issuer(mut self, issuer: String) -> Self {
        self.iss = Some(issuer);
        self
    }

    /// Set `aud`.
    pub fn with_audience(mut self, audience: String) -> Self {
        self.aud = Some(audience);
        self
    }

    /// Set `jti`.
    pub fn with_jwt_id(mut self, jti: String) -> Self {
        self.jti = Some(jti);
        self
    }
}
