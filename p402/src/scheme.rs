//! Payment scheme markers and the client error taxonomy.
//!
//! Only one scheme exists today: `"exact"`, an exact-amount transfer
//! authorization. The marker type [`ExactScheme`] pins that string at the
//! type level so mismatched schemes fail during deserialization rather than
//! deep inside the signing pipeline.

use std::fmt;

/// A unit struct representing the string literal `"exact"`.
///
/// This is the canonical scheme name for exact-amount payment schemes.
/// Serializes as the bare string `"exact"` and rejects any other scheme
/// name on deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ExactScheme;

impl ExactScheme {
    /// The string literal value: `"exact"`.
    pub const VALUE: &'static str = "exact";
}

impl fmt::Display for ExactScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(Self::VALUE)
    }
}

impl AsRef<str> for ExactScheme {
    fn as_ref(&self) -> &str {
        Self::VALUE
    }
}

impl std::str::FromStr for ExactScheme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == Self::VALUE {
            Ok(Self)
        } else {
            Err(format!("expected '{}', got '{s}'", Self::VALUE))
        }
    }
}

impl serde::Serialize for ExactScheme {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(Self::VALUE)
    }
}

impl<'de> serde::Deserialize<'de> for ExactScheme {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Errors produced by the payer-side payment pipeline.
///
/// Verification mismatch is deliberately *not* represented here: a signature
/// that fails to recover the expected signer is an `Ok(false)` outcome, not
/// an error.
#[derive(Debug, thiserror::Error)]
pub enum X402Error {
    /// The network name is not in the known-network registry.
    #[error("unsupported network: {0}")]
    UnsupportedNetwork(String),

    /// The payment scheme is not supported by this client.
    #[error("unsupported payment scheme: {0}")]
    UnsupportedScheme(String),

    /// The payment requirements are structurally invalid (malformed address,
    /// non-decimal amount, zero timeout, ...).
    #[error("invalid payment requirements: {0}")]
    InvalidRequirements(String),

    /// A signature or similar input has the wrong shape (e.g., byte length).
    #[error("malformed input: {0}")]
    MalformedInput(String),

    /// The underlying ECDSA primitive failed to sign.
    #[error("signing failed: {0}")]
    SigningError(String),

    /// JSON serialization or deserialization failed.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
