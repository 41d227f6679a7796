//! Protocol types for x402 payment messages.
//!
//! This module defines the wire format types exchanged between buyers and
//! sellers, plus the header codecs that move them across HTTP-style headers.
//!
//! # Key Types
//!
//! - [`v1::PaymentRequired`] - The 402 challenge issued by the seller
//! - [`v1::PaymentPayload`] - The signed payment authorization from the buyer
//! - [`SettleResponse`] - The settlement outcome returned by the seller
//! - [`Version`] - Const-generic protocol version marker
//!
//! # Wire Format
//!
//! All types serialize to JSON using camelCase field names. The protocol
//! version is indicated by the `x402Version` field.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

pub mod headers;
pub mod v1;
mod version;

pub use version::Version;

/// Outcome of a payment settlement, parsed from the `X-PAYMENT-RESPONSE`
/// header.
///
/// Indicates whether the payment was settled on-chain, including the
/// transaction hash and payer address on success. Read-only on the client.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SettleResponse {
    /// Settlement succeeded.
    Success {
        /// The address that paid.
        payer: String,
        /// The on-chain transaction hash.
        transaction: String,
        /// The network where settlement occurred.
        network: String,
    },
    /// Settlement failed.
    Error {
        /// Machine-readable reason for failure.
        reason: String,
        /// The network where settlement was attempted.
        network: String,
        /// The payer address, if identifiable.
        payer: Option<String>,
    },
}

impl SettleResponse {
    /// Returns `true` if the settlement succeeded.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Returns the network the settlement relates to.
    #[must_use]
    pub fn network(&self) -> &str {
        match self {
            Self::Success { network, .. } | Self::Error { network, .. } => network,
        }
    }
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SettleResponseWire {
    success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    error_reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    payer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    transaction: Option<String>,
    network: String,
}

impl Serialize for SettleResponse {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let wire = match self {
            Self::Success {
                payer,
                transaction,
                network,
            } => SettleResponseWire {
                success: true,
                error_reason: None,
                payer: Some(payer.clone()),
                transaction: Some(transaction.clone()),
                network: network.clone(),
            },
            Self::Error {
                reason,
                network,
                payer,
            } => SettleResponseWire {
                success: false,
                error_reason: Some(reason.clone()),
                payer: payer.clone(),
                transaction: None,
                network: network.clone(),
            },
        };
        wire.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for SettleResponse {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let wire = SettleResponseWire::deserialize(deserializer)?;
        if wire.success {
            let payer = wire
                .payer
                .ok_or_else(|| serde::de::Error::missing_field("payer"))?;
            let transaction = wire
                .transaction
                .ok_or_else(|| serde::de::Error::missing_field("transaction"))?;
            Ok(Self::Success {
                payer,
                transaction,
                network: wire.network,
            })
        } else {
            let reason = wire
                .error_reason
                .ok_or_else(|| serde::de::Error::missing_field("errorReason"))?;
            Ok(Self::Error {
                reason,
                network: wire.network,
                payer: wire.payer,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settle_response_success_roundtrip() {
        let response = SettleResponse::Success {
            payer: "0x2980bc24bBFB34DE1BBC91479Cb712ffbCE02F73".to_owned(),
            transaction: "0xabc123".to_owned(),
            network: "base-sepolia".to_owned(),
        };
        let json = serde_json::to_string(&response).unwrap();
        let parsed: SettleResponse = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, response);
        assert!(parsed.is_success());
    }

    #[test]
    fn test_settle_response_error_roundtrip() {
        let response = SettleResponse::Error {
            reason: "insufficient_funds".to_owned(),
            network: "base-sepolia".to_owned(),
            payer: None,
        };
        let json = serde_json::to_string(&response).unwrap();
        let parsed: SettleResponse = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, response);
        assert!(!parsed.is_success());
    }

    #[test]
    fn test_settle_response_wire_shape() {
        let json = r#"{"success":true,"network":"base-sepolia","transaction":"0x1","payer":"0x2"}"#;
        let parsed: SettleResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.network(), "base-sepolia");
    }

    #[test]
    fn test_settle_response_success_requires_transaction() {
        let json = r#"{"success":true,"network":"base-sepolia","payer":"0x2"}"#;
        let result: Result<SettleResponse, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_settle_response_error_requires_reason() {
        let json = r#"{"success":false,"network":"base-sepolia"}"#;
        let result: Result<SettleResponse, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }
}
