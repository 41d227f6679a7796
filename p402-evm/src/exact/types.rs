//! Type definitions for the EIP-155 "exact" payment scheme.
//!
//! Defines the scheme-specific wire payload (an ERC-3009 authorization plus
//! its signature) and the typed aliases that pin the generic protocol types
//! to their EVM representations.

use alloy_primitives::{Address, B256, Bytes};
use alloy_sol_types::sol;
pub use p402::scheme::ExactScheme;
use p402::timestamp::UnixTimestamp;
use serde::{Deserialize, Serialize};

use crate::chain::TokenAmount;

/// Scheme payload for exact payments; a tagged variant per transfer
/// mechanism.
///
/// Only ERC-3009 exists today. Deserialization uses `#[serde(untagged)]` so
/// the wire shape stays flat; adding a mechanism becomes a new variant, and
/// mechanism-specific fields are read through exhaustive matches.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ExactPayload {
    /// ERC-3009 `transferWithAuthorization` payment.
    Eip3009(Eip3009Payload),
}

impl ExactPayload {
    /// Returns the sender (`from`) address for this payment.
    #[must_use]
    pub const fn from_address(&self) -> Address {
        match self {
            Self::Eip3009(p) => p.authorization.from,
        }
    }

    /// Returns the signature bytes, if the payload has been signed.
    #[must_use]
    pub const fn signature(&self) -> Option<&Bytes> {
        match self {
            Self::Eip3009(p) => p.signature.as_ref(),
        }
    }
}

/// ERC-3009 `transferWithAuthorization` payment payload.
///
/// Pairs the structured authorization data with its EIP-712 signature. The
/// signature is `null` on the wire until signing; attaching one goes through
/// [`Eip3009Payload::with_signature`], which returns a new value and never
/// mutates in place.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Eip3009Payload {
    /// The 65-byte `r ‖ s ‖ v` signature, absent before signing.
    #[serde(default)]
    pub signature: Option<Bytes>,

    /// The structured authorization data that is signed.
    pub authorization: Eip3009Authorization,
}

impl Eip3009Payload {
    /// Returns a copy of this payload carrying the given signature.
    #[must_use]
    pub fn with_signature(&self, signature: Bytes) -> Self {
        Self {
            signature: Some(signature),
            authorization: self.authorization,
        }
    }
}

/// The parameters of an ERC-3009 `transferWithAuthorization` call: who may
/// transfer, to whom, how much, and during what time window.
///
/// Created once per payment attempt and never mutated afterwards.
#[derive(Debug, Copy, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Eip3009Authorization {
    /// The address authorizing the transfer (token owner).
    pub from: Address,

    /// The recipient address for the transfer.
    pub to: Address,

    /// The amount of tokens to transfer (in the token's smallest unit).
    pub value: TokenAmount,

    /// The authorization is not valid before this timestamp (inclusive).
    pub valid_after: UnixTimestamp,

    /// The authorization expires at this timestamp (exclusive).
    pub valid_before: UnixTimestamp,

    /// A unique 32-byte nonce preventing authorization replay.
    pub nonce: B256,
}

/// Extra payment requirements data for the exact scheme.
///
/// Carries the EIP-712 domain parameters of the token contract; both fields
/// are required for domain separation.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequirementsExtra {
    /// The token name as used in the EIP-712 domain.
    pub name: String,

    /// The token version as used in the EIP-712 domain.
    pub version: String,
}

sol!(
    /// Solidity-compatible struct definition for ERC-3009
    /// `transferWithAuthorization`, as used in EIP-712 typed data.
    ///
    /// The declaration itself is the type schema: field names, order, and
    /// types feed the recursive struct-hash computation, so they must match
    /// the on-chain contract definition exactly.
    #[derive(Debug)]
    struct TransferWithAuthorization {
        address from;
        address to;
        uint256 value;
        uint256 validAfter;
        uint256 validBefore;
        bytes32 nonce;
    }
);

/// Wire format type aliases for the V1 exact scheme on EIP-155 chains.
pub mod v1 {
    use p402::proto::v1 as proto_v1;

    use super::{ExactPayload, ExactScheme, PaymentRequirementsExtra};
    use crate::chain::TokenAmount;
    use alloy_primitives::Address;

    /// Payment payload with the exact-scheme EVM payload.
    pub type PaymentPayload = proto_v1::PaymentPayload<ExactScheme, ExactPayload>;

    /// Payment requirements with EVM-typed amount and addresses.
    pub type PaymentRequirements =
        proto_v1::PaymentRequirements<ExactScheme, TokenAmount, Address, PaymentRequirementsExtra>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::{address, b256};

    fn authorization() -> Eip3009Authorization {
        Eip3009Authorization {
            from: address!("2980bc24bBFB34DE1BBC91479Cb712ffbCE02F73"),
            to: address!("7553F6FA4Fb62986b64f79aEFa1fB93ea64A22b1"),
            value: TokenAmount::from(10_000u64),
            valid_after: UnixTimestamp::from_secs(1_748_534_647),
            valid_before: UnixTimestamp::from_secs(1_748_534_767),
            nonce: b256!("9b750f5097972d82c02ac371278b83ecf3ca3be8387db59e664eb38c98f97a3d"),
        }
    }

    #[test]
    fn test_unsigned_payload_serializes_null_signature() {
        let payload = Eip3009Payload {
            signature: None,
            authorization: authorization(),
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["signature"], serde_json::Value::Null);
        assert_eq!(json["authorization"]["value"], "10000");
        assert_eq!(json["authorization"]["validAfter"], "1748534647");
        assert_eq!(
            json["authorization"]["nonce"],
            "0x9b750f5097972d82c02ac371278b83ecf3ca3be8387db59e664eb38c98f97a3d"
        );
    }

    #[test]
    fn test_with_signature_leaves_source_untouched() {
        let unsigned = Eip3009Payload {
            signature: None,
            authorization: authorization(),
        };
        let signed = unsigned.with_signature(Bytes::from(vec![0xab; 65]));
        assert!(unsigned.signature.is_none());
        assert_eq!(signed.signature.as_ref().unwrap().len(), 65);
        assert_eq!(signed.authorization.from, unsigned.authorization.from);
    }

    #[test]
    fn test_exact_payload_roundtrip() {
        let payload = ExactPayload::Eip3009(Eip3009Payload {
            signature: Some(Bytes::from(vec![0x01; 65])),
            authorization: authorization(),
        });
        let json = serde_json::to_string(&payload).unwrap();
        let parsed: ExactPayload = serde_json::from_str(&json).unwrap();
        assert_eq!(
            parsed.from_address(),
            address!("2980bc24bBFB34DE1BBC91479Cb712ffbCE02F73")
        );
        assert_eq!(parsed.signature().unwrap().len(), 65);
    }

    #[test]
    fn test_exact_payload_accepts_missing_signature_field() {
        let json = serde_json::json!({
            "authorization": {
                "from": "0x2980bc24bBFB34DE1BBC91479Cb712ffbCE02F73",
                "to": "0x7553F6FA4Fb62986b64f79aEFa1fB93ea64A22b1",
                "value": "10000",
                "validAfter": "1748534647",
                "validBefore": "1748534767",
                "nonce": "0x9b750f5097972d82c02ac371278b83ecf3ca3be8387db59e664eb38c98f97a3d"
            }
        });
        let parsed: ExactPayload = serde_json::from_value(json).unwrap();
        assert!(parsed.signature().is_none());
    }
}
