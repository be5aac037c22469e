//! Token Generator library.
//!
//! Builds a JWT claim set, signs it with an HMAC key loaded from the
//! environment, and returns the JWS compact serialization.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod generator;
pub mod jwt;
pub mod telemetry;

// Re-exports for convenience
pub use config::{Config, JwtAlgorithm};
pub use error::{Result, TokenError};
pub use generator::TokenGenerator;
