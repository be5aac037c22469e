use crate::config::JwtAlgorithm;
use serde::{Deserialize, Serialize};

/// JOSE header. Serializes as `{"alg":..,"typ":"JWT"}`, with `kid` last when set.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JwsHeader {
    /// Signature algorithm
    pub alg: String,
    /// Always `JWT`
    pub typ: String,
    /// Key ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kid: Option<String>,
}

impl JwsHeader {
    /// Header for `algorithm` with no key ID.
    pub fn new(algorithm: JwtAlgorithm) -> Self {
        JwsHeader {
            alg: algorithm.as_str().to_string(),
            typ: "JWT".to_string(),
            kid: None,
        }
    }

    /// Set or clear `kid`.
    pub fn with_key_id(mut self, kid: Option<String>) -> Self {
        self.kid = kid;
        self
    }
}
