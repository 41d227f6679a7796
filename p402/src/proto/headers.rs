//! Header codecs for the x402 wire envelopes.
//!
//! Both payment directions travel as base64-encoded JSON inside HTTP-style
//! headers: the client sends its signed payload in [`X_PAYMENT_HEADER`] and
//! reads the settlement outcome from [`X_PAYMENT_RESPONSE_HEADER`].
//!
//! An absent, empty, or whitespace-only header decodes to `Ok(None)` — "no
//! value" is a normal outcome, not a transport error.

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::encoding::Base64Bytes;
use crate::proto::SettleResponse;
use crate::proto::v1::PaymentRequired;

/// Header carrying the buyer's signed payment payload.
pub const X_PAYMENT_HEADER: &str = "X-PAYMENT";

/// Header carrying the seller's settlement response.
pub const X_PAYMENT_RESPONSE_HEADER: &str = "X-PAYMENT-RESPONSE";

/// Errors from decoding a payment header.
#[derive(Debug, thiserror::Error)]
pub enum HeaderError {
    /// The header was valid base64 but not valid JSON for the target type.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// The header was not valid base64.
    #[error(transparent)]
    Base64(#[from] base64::DecodeError),
}

/// Encodes a wire value as base64 of its canonical JSON form, ready to be
/// placed in a header.
///
/// # Errors
///
/// Returns [`HeaderError::Json`] if the value cannot be serialized.
#[cfg_attr(feature = "telemetry", tracing::instrument(skip_all, err))]
pub fn encode_payment_header<T: Serialize>(value: &T) -> Result<String, HeaderError> {
    let json = serde_json::to_vec(value)?;
    Ok(Base64Bytes::encode(&json).to_string())
}

fn decode_base64_json<T: DeserializeOwned>(header: Option<&str>) -> Result<Option<T>, HeaderError> {
    let Some(raw) = header else { return Ok(None) };
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    let bytes = Base64Bytes::from(raw).decode()?;
    Ok(Some(serde_json::from_slice(&bytes)?))
}

/// Decodes a 402 challenge from a payment-required header value.
///
/// # Errors
///
/// Returns [`HeaderError`] if a non-empty header is not base64 of valid
/// [`PaymentRequired`] JSON.
#[cfg_attr(feature = "telemetry", tracing::instrument(skip_all, err))]
pub fn decode_payment_required(header: Option<&str>) -> Result<Option<PaymentRequired>, HeaderError> {
    decode_base64_json(header)
}

/// Decodes a settlement outcome from an `X-PAYMENT-RESPONSE` header value.
///
/// # Errors
///
/// Returns [`HeaderError`] if a non-empty header is not base64 of valid
/// [`SettleResponse`] JSON.
#[cfg_attr(feature = "telemetry", tracing::instrument(skip_all, err))]
pub fn decode_settle_response(header: Option<&str>) -> Result<Option<SettleResponse>, HeaderError> {
    decode_base64_json(header)
}
