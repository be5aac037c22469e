//! Token minting.

use crate::config::Config;
use crate::error::TokenError;
use crate::jwt::{Claims, Clock, HmacSigner, JwtBuilder, JwtSerializer, JwtSigner, SystemClock};
use tracing::{debug, instrument};

/// Mints signed tokens from a claim template, a signer and a clock.
#[derive(Debug, Clone)]
pub struct TokenGenerator<S = HmacSigner, C = SystemClock> {
    builder: JwtBuilder,
    signer: S,
    serializer: JwtSerializer,
    clock: C,
}

impl<S: JwtSigner> TokenGenerator<S, SystemClock> {
    /// Generator on the wall clock, verifying with the signer's algorithm.
    pub fn new(signer: S, builder: JwtBuilder) -> Self {
        TokenGenerator {
            serializer: JwtSerializer::new(signer.algorithm()),
            builder,
            signer,
            clock: SystemClock,
        }
    }
}

impl TokenGenerator<HmacSigner, SystemClock> {
    /// Build an HMAC generator from loaded configuration.
    ///
    /// # Errors
    ///
    /// Returns a signing error if the configured key is empty.
    pub fn from_config(config: &Config) -> Result<Self, TokenError> {
        let mut signer = HmacSigner::new(config.secret.clone(), config.algorithm)?;
        if let Some(kid) = &config.key_id {
            signer = signer.with_key_id(kid.clone());
        }

        let mut builder = JwtBuilder::new(config.subject.clone()).ttl_seconds(config.ttl_seconds);
        if let Some(issuer) = &config.issuer {
            builder = builder.issuer(issuer.clone());
        }
        if let Some(audience) = &config.audience {
            builder = builder.audience(audience.clone());
        }
        if let Some(jwt_id) = &config.jwt_id {
            builder = builder.jwt_id(jwt_id.clone());
        }

        Ok(Self::new(signer, builder))
    }
}

impl<S: JwtSigner, C: Clock> TokenGenerator<S, C> {
    /// Replace the time source.
    pub fn with_clock<C2: Clock>(self, clock: C2) -> TokenGenerator<S, C2> {
        TokenGenerator {
            builder: self.builder,
            signer: self.signer,
            serializer: self.serializer,
            clock,
        }
    }

    /// Claims a token minted now would carry.
    ///
    /// # Errors
    ///
    /// Returns a signing error if the clock reading plus TTL overflows.
    pub fn generate_claims(&self) -> Result<Claims, TokenError> {
        self.builder.build_at(self.clock.now())
    }

    /// Mint a compact JWS for the current clock reading.
    ///
    /// # Errors
    ///
    /// Returns a signing error if the claims cannot be built or signed.
    #[instrument(skip(self), fields(alg = self.signer.algorithm().as_str()))]
    pub fn generate_token(&self) -> Result<String, TokenError> {
        let claims = self.generate_claims()?;
        debug!(
            sub = %claims.sub,
            iat = claims.iat,
            exp = claims.exp,
            kid = ?self.signer.key_id(),
            "Signing token"
        );

        let token = self.serializer.serialize(&claims, &self.signer)?;
        debug!(len = token.len(), "Token signed");
        Ok(token)
    }

    /// Serializer for verifying minted tokens.
    pub fn serializer(&self) -> &JwtSerializer {
        &self.serializer
    }

    /// Underlying signer.
    pub fn signer(&self) -> &S {
        &self.signer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::JwtAlgorithm;
    use crate::jwt::{FixedClock, SecretKey};

    const SUBJECT: &str = "jeanclaude.twagiramungu70078@onetrust.com";

    fn generator() -> TokenGenerator<HmacSigner, FixedClock> {
        let signer = HmacSigner::new(
            SecretKey::from_bytes(b"Q29va2llIEJhbm5lciB1c2luZyBPbmVUcnVzdA==".to_vec()),
            JwtAlgorithm::HS256,
        )
        .unwrap();
        TokenGenerator::new(signer, JwtBuilder::new(SUBJECT)).with_clock(FixedClock(1_700_000_000))
    }

    #[test]
    fn test_generate_token_fixed_clock_payload() {
        let token = generator().generate_token().unwrap();
        let parts: Vec<&str> = token.split('.').collect();
        assert_eq!(parts.len(), 3);

        assert_eq!(parts[0], "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9");

        let payload = base64::Engine::decode(
            &base64::engine::general_purpose::URL_SAFE_NO_PAD,
            parts[1],
        )
        .unwrap();
        assert_eq!(
            String::from_utf8(payload).unwrap(),
            r#"{"sub":"jeanclaude.twagiramungu70078@onetrust.com","nbf":1700000000,"iat":1700000000,"exp":1700086400}"#
        );
    }

    #[test]
    fn test_generate_token_is_deterministic_for_fixed_clock() {
        let generator = generator();
        assert_eq!(generator.generate_token().unwrap(), generator.generate_token().unwrap());
    }

    #[test]
    fn test_generated_token_verifies() {
        let generator = generator();
        let token = generator.generate_token().unwrap();

        let claims = generator
            .serializer()
            .verify_signature(&token, &generator.signer().decoding_key())
            .unwrap();
        assert_eq!(claims, generator.generate_claims().unwrap());
    }

    #[test]
    fn test_clock_overflow_returns_signing_error() {
        let generator = generator().with_clock(FixedClock(i64::MAX - 10));

        assert!(matches!(generator.generate_token(), Err(TokenError::Signing(_))));
        assert!(matches!(generator.generate_claims(), Err(TokenError::Signing(_))));
    }

    #[test]
    fn test_from_config_applies_options() {
        let config = Config::from_lookup(|name| match name {
            "TOKEN_SECRET" => Some("616161".to_string()),
            "TOKEN_SUBJECT" => Some("user-123".to_string()),
            "TOKEN_ISSUER" => Some("http://foo.com".to_string()),
            "TOKEN_KEY_ID" => Some("key-1".to_string()),
            "TOKEN_TTL" => Some("120".to_string()),
            _ => None,
        })
        .unwrap();

        let generator = TokenGenerator::from_config(&config)
            .unwrap()
            .with_clock(FixedClock(1_000));
        let claims = generator.generate_claims().unwrap();

        assert_eq!(claims.iss.as_deref(), Some("http://foo.com"));
        assert_eq!(claims.exp, 1_120);
        assert_eq!(generator.signer().secret().as_bytes(), b"aaa");

        let token = generator.generate_token().unwrap();
        let header = generator.serializer().decode_header(&token).unwrap();
        assert_eq!(header.kid.as_deref(), Some("key-1"));
    }

    #[test]
    fn test_from_config_empty_secret_is_signing_error() {
        let config = Config::from_lookup(|name| match name {
            "TOKEN_SECRET" => Some(String::new()),
            "TOKEN_SUBJECT" => Some("user-123".to_string()),
            _ => None,
        })
        .unwrap();

        assert!(matches!(
            TokenGenerator::from_config(&config),
            Err(TokenError::Signing(_))
        ));
    }
}
