//! Signing and recovery over the EIP-712 typed-data hash.
//!
//! Signing drives a secp256k1 ECDSA primitive over the document's structured
//! hash and renders the result as 65 bytes `r ‖ s ‖ v` with `v ∈ {27, 28}`.
//! Verification recomputes the identical hash, recovers the signer address
//! from the signature, and compares it with the expected payer — on parsed
//! 20-byte values, so address case never matters.

use alloy_primitives::{Address, B256, Bytes, Signature};
use alloy_signer::SignerSync;
use alloy_signer_local::PrivateKeySigner;
use p402::scheme::X402Error;
use std::sync::Arc;

use super::typed_data::TransferTypedData;

/// A trait that abstracts signing operations, allowing both owned signers
/// and `Arc`-wrapped signers.
///
/// Necessary because Alloy's signer traits are not implemented for `Arc<T>`,
/// but callers may want to share a signer across concurrent payments.
pub trait SignerLike {
    /// Returns the address of the signer.
    fn address(&self) -> Address;

    /// Signs the given 32-byte hash.
    ///
    /// # Errors
    ///
    /// Returns the underlying primitive's error if signing fails.
    fn sign_hash(&self, hash: &B256) -> Result<Signature, alloy_signer::Error>;
}

impl SignerLike for PrivateKeySigner {
    fn address(&self) -> Address {
        Self::address(self)
    }

    fn sign_hash(&self, hash: &B256) -> Result<Signature, alloy_signer::Error> {
        self.sign_hash_sync(hash)
    }
}

impl<T: SignerLike> SignerLike for Arc<T> {
    fn address(&self) -> Address {
        (**self).address()
    }

    fn sign_hash(&self, hash: &B256) -> Result<Signature, alloy_signer::Error> {
        (**self).sign_hash(hash)
    }
}

/// Signs a typed-data document, returning the 65-byte `r ‖ s ‖ v` signature.
///
/// `r` and `s` are 32 bytes each, big-endian, zero-padded; `v` is rendered
/// as 27 or 28. The key material is borrowed only for the duration of this
/// call and never captured in any diagnostic.
///
/// # Errors
///
/// Returns [`X402Error::SigningError`] if the ECDSA primitive fails.
#[cfg_attr(feature = "telemetry", tracing::instrument(skip_all, err))]
pub fn sign_typed_data<S: SignerLike>(
    signer: &S,
    typed_data: &TransferTypedData,
) -> Result<Bytes, X402Error> {
    let hash = typed_data.signing_hash();
    let signature = signer
        .sign_hash(&hash)
        .map_err(|e| X402Error::SigningError(e.to_string()))?;
    Ok(signature.as_bytes().into())
}

/// Verifies a signature over a typed-data document against an expected
/// signer address.
///
/// Accepts recovery ids in `{0, 1, 27, 28}`: a `v` below 27 is normalized by
/// adding 27, so signatures from non-normalizing signers verify too. Any
/// other recovery id, or an unrecoverable signature, yields `Ok(false)` —
/// verification mismatch is a normal boolean outcome, never an error.
///
/// # Errors
///
/// Returns [`X402Error::MalformedInput`] only when the signature is not
/// exactly 65 bytes.
#[cfg_attr(feature = "telemetry", tracing::instrument(skip_all, err))]
pub fn verify_typed_data(
    signature: &[u8],
    typed_data: &TransferTypedData,
    expected_signer: Address,
) -> Result<bool, X402Error> {
    if signature.len() != 65 {
        return Err(X402Error::MalformedInput(format!(
            "signature must be 65 bytes, got {}",
            signature.len()
        )));
    }
    let Ok(parsed) = Signature::from_raw(signature) else {
        return Ok(false);
    };
    let parsed = parsed.normalized_s();
    let hash = typed_data.signing_hash();
    Ok(parsed
        .recover_address_from_prehash(&hash)
        .is_ok_and(|recovered| recovered == expected_signer))
}
