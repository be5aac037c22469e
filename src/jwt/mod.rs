//! JWT construction, signing and verification.

/// Claim set templates.
pub mod builder;
/// Payload claims.
pub mod claims;
/// Time sources.
pub mod clock;
/// JOSE header.
pub mod header;
/// HMAC key material.
pub mod key;
/// Compact serialization.
pub mod serializer;
/// Signers.
pub mod signer;

pub use builder::{JwtBuilder, JwtId};
pub use claims::{Claims, DEFAULT_TTL_SECONDS};
pub use clock::{Clock, FixedClock, SystemClock};
pub use header::JwsHeader;
pub use key::{KeyEncoding, SecretKey};
pub use serializer::JwtSerializer;
pub use signer::{HmacSigner, JwtSigner};
