//! Configuration for the token generator.
//!
//! Everything is read from environment variables (after loading an optional
//! `.env` file) and validated before any token is minted.

use crate::error::TokenError;
use crate::jwt::{JwtId, KeyEncoding, SecretKey, DEFAULT_TTL_SECONDS};
use crate::telemetry::TracingConfig;
use std::env;
use std::str::FromStr;

/// JWT signing algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JwtAlgorithm {
    /// HMAC with SHA-256
    #[default]
    HS256,
    /// HMAC with SHA-384
    HS384,
    /// HMAC with SHA-512
    HS512,
}

impl JwtAlgorithm {
    /// Get algorithm name for JWT header.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::HS256 => "HS256",
            Self::HS384 => "HS384",
            Self::HS512 => "HS512",
        }
    }
}

impl FromStr for JwtAlgorithm {
    type Err = TokenError;

    /// Only HMAC algorithms can sign with a shared secret; anything else is
    /// a signing error.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "HS256" => Ok(Self::HS256),
            "HS384" => Ok(Self::HS384),
            "HS512" => Ok(Self::HS512),
            _ => Err(TokenError::signing(format!("Unsupported JWT algorithm: {}", s))),
        }
    }
}

impl From<JwtAlgorithm> for jsonwebtoken::Algorithm {
    fn from(alg: JwtAlgorithm) -> Self {
        match alg {
            JwtAlgorithm::HS256 => Self::HS256,
            JwtAlgorithm::HS384 => Self::HS384,
            JwtAlgorithm::HS512 => Self::HS512,
        }
    }
}

/// Token generator configuration.
#[derive(Debug, Clone)]
pub struct Config {
    // Key settings
    /// HMAC key
    pub secret: SecretKey,
    /// JWT signing algorithm
    pub algorithm: JwtAlgorithm,
    /// Header `kid`
    pub key_id: Option<String>,

    // Claim settings
    /// `sub` claim
    pub subject: String,
    /// Seconds from `iat` to `exp`
    pub ttl_seconds: u32,
    /// `iss` claim
    pub issuer: Option<String>,
    /// `aud` claim
    pub audience: Option<String>,
    /// `jti` claim
    pub jwt_id: Option<JwtId>,

    // Observability
    /// Log output settings
    pub tracing: TracingConfig,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if required variables are missing or invalid.
    pub fn from_env() -> Result<Self, TokenError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns an error if required variables are missing or invalid.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, TokenError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let material = lookup("TOKEN_SECRET")
            .ok_or_else(|| TokenError::config("TOKEN_SECRET is required"))?;
        let encoding = parse_var(&lookup, "TOKEN_SECRET_ENCODING", KeyEncoding::Auto)?;
        let secret = SecretKey::decode(&material, encoding)?;

        let algorithm = match lookup("TOKEN_ALGORITHM") {
            Some(name) => name.parse()?,
            None => JwtAlgorithm::default(),
        };
        let key_id = non_empty(&lookup, "TOKEN_KEY_ID");

        let subject = non_empty(&lookup, "TOKEN_SUBJECT")
            .ok_or_else(|| TokenError::config("TOKEN_SUBJECT is required"))?;
        let ttl_seconds = parse_var(&lookup, "TOKEN_TTL", DEFAULT_TTL_SECONDS)?;
        let issuer = non_empty(&lookup, "TOKEN_ISSUER");
        let audience = non_empty(&lookup, "TOKEN_AUDIENCE");
        let jwt_id = non_empty(&lookup, "TOKEN_JWT_ID").map(|id| {
            if id.eq_ignore_ascii_case("uuid") {
                JwtId::Random
            } else {
                JwtId::Fixed(id)
            }
        });

        let mut tracing = TracingConfig::default()
            .with_log_level(lookup("LOG_LEVEL").unwrap_or_else(|| "warn".to_string()));
        if parse_var(&lookup, "LOG_JSON", false)? {
            tracing = tracing.with_json_output();
        }

        Ok(Self {
            secret,
            algorithm,
            key_id,
            subject,
            ttl_seconds,
            issuer,
            audience,
            jwt_id,
            tracing,
        })
    }
}

/// Parse a variable with a default value.
fn parse_var<F, T>(lookup: &F, name: &str, default: T) -> Result<T, TokenError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(name) {
        Some(val) => val
            .parse()
            .map_err(|e| TokenError::config(format!("Invalid {}: {}", name, e))),
        None => Ok(default),
    }
}

fn non_empty<F>(lookup: &F, name: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name).filter(|v| !v.trim().is_empty())
}
