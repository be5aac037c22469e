use crate::error::TokenError;
use crate::jwt::claims::{Claims, DEFAULT_TTL_SECONDS};

/// How the `jti` claim is filled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JwtId {
    /// Same value in every token.
    Fixed(String),
    /// Fresh UUID v4 per token.
    Random,
}

/// Template for the claim set of every minted token.
#[derive(Debug, Clone)]
pub struct JwtBuilder {
    subject: String,
    ttl_seconds: u32,
    issuer: Option<String>,
    audience: Option<String>,
    jwt_id: Option<JwtId>,
}

impl JwtBuilder {
    /// Template for `subject` with the default one day lifetime.
    pub fn new(subject: impl Into<String>) -> Self {
        JwtBuilder {
            subject: subject.into(),
            ttl_seconds: DEFAULT_TTL_SECONDS,
            issuer: None,
            audience: None,
            jwt_id: None,
        }
    }

    /// Seconds from `iat` to `exp`.
    pub fn ttl_seconds(mut self, ttl: u32) -> Self {
        self.ttl_seconds = ttl;
        self
    }

    /// Add an `iss` claim.
    pub fn issuer(mut self, issuer: impl Into<String>) -> Self {
        self.issuer = Some(issuer.into());
        self
    }

    /// Add an `aud` claim.
    pub fn audience(mut self, audience: impl Into<String>) -> Self {
        self.audience = Some(audience.into());
        self
    }

    /// Add a `jti` claim.
    pub fn jwt_id(mut self, jwt_id: JwtId) -> Self {
        self.jwt_id = Some(jwt_id);
        self
    }

    /// Claims for a token issued at `now`.
    ///
    /// # Errors
    ///
    /// Returns a signing error if the expiry does not fit in an `i64`.
    pub fn build_at(&self, now: i64) -> Result<Claims, TokenError> {
        let mut claims = Claims::issued_at(self.subject.clone(), now, self.ttl_seconds)?;

        if let Some(issuer) = &self.issuer {
            claims = claims.with_issuer(issuer.clone());
        }

        match &self.jwt_id {
            Some(JwtId::Fixed(id)) => claims = claims.with_jwt_id(id.clone()),
            Some(JwtId::Random) => claims = claims.with_jwt_id(uuid::Uuid::new_v4().to_string()),
            None => {}
        }

        if let Some(audience) = &self.audience {
            claims = claims.with_audience(audience.clone());
        }

        Ok(claims)
    }
}
