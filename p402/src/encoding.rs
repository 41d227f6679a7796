//! Base64 encoding and decoding utilities.
//!
//! The x402 protocol carries JSON payloads inside HTTP headers, so every
//! wire envelope is base64-encoded. [`Base64Bytes`] wraps the encoded form
//! and keeps the encode/decode pair in one place.

use base64::Engine;
use base64::engine::general_purpose::STANDARD as b64;
use std::fmt::Display;

/// A wrapper holding base64-encoded bytes.
///
/// The inner buffer always contains the *encoded* text, not the raw binary
/// data. Use [`Base64Bytes::encode`] to produce it from raw bytes and
/// [`Base64Bytes::decode`] to get the raw bytes back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Base64Bytes(pub Vec<u8>);

impl Base64Bytes {
    /// Encodes raw binary data into base64 text bytes.
    pub fn encode<T: AsRef<[u8]>>(input: T) -> Self {
        Self(b64.encode(input.as_ref()).into_bytes())
    }

    /// Decodes the base64 text back to raw binary data.
    ///
    /// # Errors
    ///
    /// Returns an error if the wrapped bytes are not valid base64.
    pub fn decode(&self) -> Result<Vec<u8>, base64::DecodeError> {
        b64.decode(&self.0)
    }
}

impl AsRef<[u8]> for Base64Bytes {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<&[u8]> for Base64Bytes {
    fn from(slice: &[u8]) -> Self {
        Self(slice.to_vec())
    }
}

impl From<&str> for Base64Bytes {
    fn from(s: &str) -> Self {
        Self(s.as_bytes().to_vec())
    }
}

impl Display for Base64Bytes {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(&self.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_decode_roundtrip() {
        let encoded = Base64Bytes::encode(b"{\"x402Version\":1}");
        let decoded = encoded.decode().unwrap();
        assert_eq!(decoded, b"{\"x402Version\":1}");
    }

    #[test]
    fn test_encode_renders_standard_alphabet() {
        let encoded = Base64Bytes::encode(b"hello x402");
        assert_eq!(encoded.to_string(), "aGVsbG8geDQwMg==");
    }

    #[test]
    fn test_decode_invalid_base64_fails() {
        let bad = Base64Bytes::from("not-base64!!!");
        assert!(bad.decode().is_err());
    }
}
