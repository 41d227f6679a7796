//! EIP-712 typed-data document construction.
//!
//! Turns payment requirements and an authorization into the typed-data
//! document that gets hashed and signed: the `EIP712Domain` built from the
//! token's domain parameters and the chain ID, and a
//! `TransferWithAuthorization` message built from the authorization fields.
//! Pure data assembly; no I/O, no randomness.

use alloy_primitives::B256;
use alloy_sol_types::{Eip712Domain, SolStruct, eip712_domain};
use p402::networks;
use p402::scheme::X402Error;

use crate::exact::types::{Eip3009Authorization, TransferWithAuthorization, v1};

/// A canonical EIP-712 typed-data document, ready for hashing.
///
/// Pairs the domain separator inputs with the primary-type message. The type
/// schema (`EIP712Domain` + `TransferWithAuthorization`) is fixed at compile
/// time by the `sol!` declaration, so two documents built from identical
/// inputs always hash identically.
#[derive(Debug, Clone)]
pub struct TransferTypedData {
    domain: Eip712Domain,
    message: TransferWithAuthorization,
}

impl TransferTypedData {
    /// Assembles a document from an already-built domain and message.
    #[must_use]
    pub const fn new(domain: Eip712Domain, message: TransferWithAuthorization) -> Self {
        Self { domain, message }
    }

    /// Computes the EIP-712 signing hash:
    /// `keccak256(0x19 0x01 ‖ domainSeparator ‖ structHash(message))`.
    ///
    /// Both halves follow the standard's recursive struct-hashing algorithm
    /// over the declared type schema; nothing here hashes serialized text.
    #[must_use]
    pub fn signing_hash(&self) -> B256 {
        self.message.eip712_signing_hash(&self.domain)
    }

    /// Returns the EIP-712 domain.
    #[must_use]
    pub const fn domain(&self) -> &Eip712Domain {
        &self.domain
    }

    /// Returns the `TransferWithAuthorization` message.
    #[must_use]
    pub const fn message(&self) -> &TransferWithAuthorization {
        &self.message
    }
}

/// Builds the typed-data document for an authorization under the given
/// payment requirements.
///
/// The domain name and version come from the requirements' `extra`
/// parameters, falling back to empty strings when absent; the chain ID is
/// resolved through the known-network registry and the verifying contract is
/// the requirements' asset address.
///
/// # Errors
///
/// Returns [`X402Error::UnsupportedNetwork`] if the network name is unknown,
/// before any cryptographic work begins.
pub fn typed_data_for(
    requirements: &v1::PaymentRequirements,
    authorization: &Eip3009Authorization,
) -> Result<TransferTypedData, X402Error> {
    let chain_id = networks::chain_id_by_name(&requirements.network)
        .ok_or_else(|| X402Error::UnsupportedNetwork(requirements.network.clone()))?;

    let (name, version) = requirements.extra.as_ref().map_or_else(
        || (String::new(), String::new()),
        |extra| (extra.name.clone(), extra.version.clone()),
    );

    let domain = eip712_domain! {
        name: name,
        version: version,
        chain_id: chain_id,
        verifying_contract: requirements.asset,
    };

    let message = TransferWithAuthorization {
        from: authorization.from,
        to: authorization.to,
        value: authorization.value.into(),
        validAfter: authorization.valid_after.as_u256(),
        validBefore: authorization.valid_before.as_u256(),
        nonce: authorization.nonce,
    };

    Ok(TransferTypedData::new(domain, message))
}
