//! Protocol version 1 (V1) types for x402.
//!
//! V1 identifies chains by human-readable network names (e.g.,
//! `"base-sepolia"`). The payload and requirements types are generic over
//! their scheme, amount, and address representations: servers and tests work
//! with plain strings, while chain crates pin concrete typed aliases and
//! convert through [`PaymentRequirements::as_concrete`].

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_with::{VecSkipError, serde_as};
use std::str::FromStr;

/// Version marker for x402 protocol version 1.
///
/// Serializes as the integer `1` and rejects other values on
/// deserialization.
pub type X402Version1 = super::Version<1>;

/// Convenience constant for constructing V1 protocol messages.
pub const V1: X402Version1 = super::Version;

/// A payment authorization from the buyer.
///
/// This carries the scheme-specific signed payload along with metadata about
/// the payment scheme and network. Before signing, the inner payload's
/// signature field is `null`; attaching a signature always produces a new
/// value rather than mutating this one.
///
/// # Type Parameters
///
/// - `TScheme` - The scheme identifier type (default: `String`)
/// - `TPayload` - The scheme-specific payload type (default: raw JSON)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentPayload<TScheme = String, TPayload = Box<serde_json::value::RawValue>> {
    /// Protocol version (always 1).
    pub x402_version: X402Version1,
    /// The payment scheme (e.g., "exact").
    pub scheme: TScheme,
    /// The network name (e.g., "base-sepolia").
    pub network: String,
    /// The scheme-specific payload.
    pub payload: TPayload,
}

/// Payment requirements set by the seller.
///
/// Defines the terms under which a payment will be accepted: the amount,
/// recipient, asset, and timing constraints. Immutable on the client.
///
/// # Type Parameters
///
/// - `TScheme` - The scheme identifier type (default: `String`)
/// - `TAmount` - The amount type (default: `String`)
/// - `TAddress` - The address type (default: `String`)
/// - `TExtra` - Scheme-specific extra data type (default: `serde_json::Value`)
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequirements<
    TScheme = String,
    TAmount = String,
    TAddress = String,
    TExtra = serde_json::Value,
> {
    /// The payment scheme (e.g., "exact").
    pub scheme: TScheme,
    /// The network name (e.g., "base-sepolia").
    pub network: String,
    /// The maximum amount required for payment, in the token's smallest unit.
    pub max_amount_required: TAmount,
    /// The resource URL being paid for.
    #[serde(default)]
    pub resource: String,
    /// Human-readable description of the resource.
    #[serde(default)]
    pub description: String,
    /// MIME type of the resource.
    #[serde(default)]
    pub mime_type: String,
    /// The recipient address for payment.
    pub pay_to: TAddress,
    /// Maximum time in seconds for payment validity.
    pub max_timeout_seconds: u64,
    /// The token asset address (EIP-712 verifying contract).
    pub asset: TAddress,
    /// Scheme-specific extra data; for the "exact" scheme this carries the
    /// EIP-712 domain name and version.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra: Option<TExtra>,
}

impl PaymentRequirements {
    /// Converts string-typed payment requirements into a concrete typed form.
    ///
    /// Returns `None` if any of the type conversions fail (e.g., parsing the
    /// scheme, amount, or address strings into their typed equivalents).
    /// A malformed or absent `extra` converts to `None` rather than failing.
    #[must_use]
    pub fn as_concrete<
        TScheme: FromStr,
        TAmount: FromStr,
        TAddress: FromStr,
        TExtra: DeserializeOwned,
    >(
        &self,
    ) -> Option<PaymentRequirements<TScheme, TAmount, TAddress, TExtra>> {
        let scheme = self.scheme.parse::<TScheme>().ok()?;
        let max_amount_required = self.max_amount_required.parse::<TAmount>().ok()?;
        let pay_to = self.pay_to.parse::<TAddress>().ok()?;
        let asset = self.asset.parse::<TAddress>().ok()?;
        let extra = self
            .extra
            .as_ref()
            .and_then(|v| serde_json::from_value(v.clone()).ok());
        Some(PaymentRequirements {
            scheme,
            network: self.network.clone(),
            max_amount_required,
            resource: self.resource.clone(),
            description: self.description.clone(),
            mime_type: self.mime_type.clone(),
            pay_to,
            max_timeout_seconds: self.max_timeout_seconds,
            asset,
            extra,
        })
    }
}

/// HTTP 402 Payment Required response body.
///
/// Issued by the seller when a resource requires payment; read-only on the
/// client. Entries in `accepts` that fail to deserialize are skipped rather
/// than failing the whole challenge.
#[serde_as]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequired {
    /// Protocol version (always 1).
    pub x402_version: X402Version1,
    /// Ordered list of acceptable payment methods.
    #[serde_as(as = "VecSkipError<_>")]
    #[serde(default)]
    pub accepts: Vec<PaymentRequirements>,
    /// Human-readable error message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn requirements_json() -> serde_json::Value {
        serde_json::json!({
            "scheme": "exact",
            "network": "base-sepolia",
            "maxAmountRequired": "1000",
            "resource": "http://localhost/weather",
            "description": "",
            "mimeType": "",
            "payTo": "0x7553F6FA4Fb62986b64f79aEFa1fB93ea64A22b1",
            "maxTimeoutSeconds": 60,
            "asset": "0x036CbD53842c5426634e7929541eC2318f3dCF7e",
            "extra": {"name": "USDC", "version": "2"}
        })
    }

    #[test]
    fn test_requirements_roundtrip() {
        let requirements: PaymentRequirements =
            serde_json::from_value(requirements_json()).unwrap();
        assert_eq!(requirements.scheme, "exact");
        assert_eq!(requirements.max_amount_required, "1000");
        assert_eq!(requirements.max_timeout_seconds, 60);
        let back = serde_json::to_value(&requirements).unwrap();
        assert_eq!(back, requirements_json());
    }

    #[test]
    fn test_requirements_tolerate_missing_optional_fields() {
        let json = serde_json::json!({
            "scheme": "exact",
            "network": "base-sepolia",
            "maxAmountRequired": "1000",
            "payTo": "0x7553F6FA4Fb62986b64f79aEFa1fB93ea64A22b1",
            "maxTimeoutSeconds": 60,
            "asset": "0x036CbD53842c5426634e7929541eC2318f3dCF7e"
        });
        let requirements: PaymentRequirements = serde_json::from_value(json).unwrap();
        assert!(requirements.resource.is_empty());
        assert!(requirements.extra.is_none());
    }

    #[test]
    fn test_payment_required_skips_malformed_entries() {
        let json = serde_json::json!({
            "x402Version": 1,
            "accepts": [requirements_json(), {"scheme": "exact"}],
            "error": "Payment required"
        });
        let required: PaymentRequired = serde_json::from_value(json).unwrap();
        assert_eq!(required.accepts.len(), 1);
        assert_eq!(required.error.as_deref(), Some("Payment required"));
    }

    #[test]
    fn test_payment_required_rejects_wrong_version() {
        let json = serde_json::json!({"x402Version": 2, "accepts": []});
        let result: Result<PaymentRequired, _> = serde_json::from_value(json);
        assert!(result.is_err());
    }
}
