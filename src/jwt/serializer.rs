use crate::config::JwtAlgorithm;
use crate::error::TokenError;
use crate::jwt::claims::Claims;
use crate::jwt::header::JwsHeader;
use crate::jwt::signer::JwtSigner;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use jsonwebtoken::{decode, DecodingKey, Validation};
use serde::de::DeserializeOwned;
use std::collections::HashSet;

/// JWS compact serialization and verification for one algorithm.
#[derive(Debug, Clone)]
pub struct JwtSerializer {
    algorithm: JwtAlgorithm,
    issuer: Option<String>,
    audience: Option<String>,
}

impl JwtSerializer {
    /// Serializer that signs and accepts only `algorithm`.
    pub fn new(algorithm: JwtAlgorithm) -> Self {
        JwtSerializer {
            algorithm,
            issuer: None,
            audience: None,
        }
    }

    /// Require this `iss` on verification.
    pub fn with_issuer(mut self, issuer: impl Into<String>) -> Self {
        self.issuer = Some(issuer.into());
        self
    }

    /// Require this `aud` on verification.
    pub fn with_audience(mut self, audience: impl Into<String>) -> Self {
        self.audience = Some(audience.into());
        self
    }

    /// Encode header and claims, sign them, and join the three segments.
    pub fn serialize<S: JwtSigner + ?Sized>(&self, claims: &Claims, signer: &S) -> Result<String, TokenError> {
        if signer.algorithm() != self.algorithm {
            return Err(TokenError::signing(format!(
                "signer algorithm {} does not match {}",
                signer.algorithm().as_str(),
                self.algorithm.as_str()
            )));
        }

        let header = JwsHeader::new(self.algorithm).with_key_id(signer.key_id().map(str::to_string));
        let header_json = serde_json::to_vec(&header)?;
        let payload_json = serde_json::to_vec(claims)?;

        let signing_input = format!(
            "{}.{}",
            URL_SAFE_NO_PAD.encode(header_json),
            URL_SAFE_NO_PAD.encode(payload_json)
        );
        let signature = signer.sign(signing_input.as_bytes())?;

        Ok(format!("{}.{}", signing_input, signature))
    }

    /// Verify signature, `exp`, `nbf` and any expected `iss`/`aud`.
    ///
    /// `aud` is only checked when an expected audience is set.
    pub fn deserialize(&self, token: &str, key: &DecodingKey) -> Result<Claims, TokenError> {
        let mut validation = self.base_validation();
        validation.leeway = 0;
        validation.validate_exp = true;
        validation.validate_nbf = true;
        let mut required = vec!["exp", "nbf", "sub"];

        if let Some(issuer) = &self.issuer {
            validation.set_issuer(&[issuer]);
            required.push("iss");
        }
        if let Some(audience) = &self.audience {
            validation.validate_aud = true;
            validation.set_audience(&[audience]);
            required.push("aud");
        }
        validation.set_required_spec_claims(&required);

        self.decode_with(token, key, &validation)
    }

    /// Verify signature and algorithm only, ignoring the validity window.
    pub fn verify_signature(&self, token: &str, key: &DecodingKey) -> Result<Claims, TokenError> {
        let mut validation = self.base_validation();
        validation.validate_exp = false;
        validation.validate_nbf = false;
        validation.required_spec_claims = HashSet::new();

        self.decode_with(token, key, &validation)
    }

    /// Decode the payload without checking the signature.
    pub fn deserialize_unverified(&self, token: &str) -> Result<Claims, TokenError> {
        decode_segment(token, 1)
    }

    /// Decode the header without checking the signature.
    pub fn decode_header(&self, token: &str) -> Result<JwsHeader, TokenError> {
        decode_segment(token, 0)
    }

    fn base_validation(&self) -> Validation {
        let mut validation = Validation::new(self.algorithm.into());
        validation.validate_aud = false;
        validation
    }

    fn decode_with(&self, token: &str, key: &DecodingKey, validation: &Validation) -> Result<Claims, TokenError> {
        let token_data = decode::<Claims>(token, key, validation)
            .map_err(|e| TokenError::verification(e.to_string()))?;

        Ok(token_data.claims)
    }
}

fn decode_segment<T: DeserializeOwned>(token: &str, index: usize) -> Result<T, TokenError> {
    let parts: Vec<&str> = token.split('.').collect();
    if parts.len() != 3 {
        return Err(TokenError::verification("Invalid token format"));
    }

    let bytes = URL_SAFE_NO_PAD
        .decode(parts[index])
        .map_err(|e| TokenError::verification(e.to_string()))?;

    serde_json::from_slice(&bytes).map_err(|e| TokenError::verification(e.to_string()))
}
