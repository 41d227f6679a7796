//! Payer-side payload lifecycle for the "exact" scheme.
//!
//! Orchestrates the forward-only flow from server-issued payment
//! requirements to a signed payment payload: build an unsigned authorization
//! with a fresh nonce and validity window, assemble the typed-data document,
//! sign it, and attach the signature as a new immutable value. Encoding the
//! result for transport lives in [`p402::proto::headers`].

use alloy_primitives::{Address, B256};
use p402::proto::v1 as proto_v1;
use p402::scheme::{ExactScheme, X402Error};
use p402::timestamp::UnixTimestamp;
use rand::RngExt;
use rand::rng;

use crate::exact::signature::{self, SignerLike};
use crate::exact::typed_data;
use crate::exact::types::{Eip3009Authorization, Eip3009Payload, ExactPayload, v1};

fn as_concrete(
    requirements: &proto_v1::PaymentRequirements,
) -> Result<v1::PaymentRequirements, X402Error> {
    if requirements.scheme != ExactScheme::VALUE {
        return Err(X402Error::UnsupportedScheme(requirements.scheme.clone()));
    }
    requirements.as_concrete().ok_or_else(|| {
        X402Error::InvalidRequirements("malformed amount or address".to_owned())
    })
}

/// Builds an unsigned payment payload from server-issued requirements.
///
/// The authorization copies the required amount verbatim, opens its validity
/// window at the current time, closes it `maxTimeoutSeconds` later, and
/// carries a fresh cryptographically random 32-byte nonce — independent on
/// every call, even for identical inputs.
///
/// # Errors
///
/// - [`X402Error::UnsupportedScheme`] for any scheme other than `"exact"`
/// - [`X402Error::InvalidRequirements`] for a malformed amount or address,
///   or a zero timeout (which would make the validity window empty)
#[cfg_attr(feature = "telemetry", tracing::instrument(skip_all, err))]
pub fn build_unsigned_payload(
    payer: Address,
    requirements: &proto_v1::PaymentRequirements,
) -> Result<v1::PaymentPayload, X402Error> {
    let concrete = as_concrete(requirements)?;
    if concrete.max_timeout_seconds == 0 {
        return Err(X402Error::InvalidRequirements(
            "maxTimeoutSeconds must be positive".to_owned(),
        ));
    }

    let valid_after = UnixTimestamp::now();
    let valid_before = valid_after + concrete.max_timeout_seconds;
    let nonce = B256::from(rng().random::<[u8; 32]>());

    let authorization = Eip3009Authorization {
        from: payer,
        to: concrete.pay_to,
        value: concrete.max_amount_required,
        valid_after,
        valid_before,
        nonce,
    };

    Ok(v1::PaymentPayload {
        x402_version: proto_v1::V1,
        scheme: ExactScheme,
        network: concrete.network,
        payload: ExactPayload::Eip3009(Eip3009Payload {
            signature: None,
            authorization,
        }),
    })
}

/// Signs an unsigned payload and returns a new payload carrying the
/// signature; the input payload is untouched.
///
/// The typed-data document is rebuilt from the requirements and the
/// payload's own authorization, so the signature binds exactly the fields a
/// verifier will reconstruct.
///
/// # Errors
///
/// Propagates requirement conversion errors, [`X402Error::UnsupportedNetwork`]
/// from typed-data construction, and [`X402Error::SigningError`] from the
/// ECDSA primitive.
#[cfg_attr(feature = "telemetry", tracing::instrument(skip_all, err))]
pub fn attach_signature<S: SignerLike>(
    signer: &S,
    requirements: &proto_v1::PaymentRequirements,
    unsigned: &v1::PaymentPayload,
) -> Result<v1::PaymentPayload, X402Error> {
    let concrete = as_concrete(requirements)?;
    let signed = match &unsigned.payload {
        ExactPayload::Eip3009(inner) => {
            let typed_data = typed_data::typed_data_for(&concrete, &inner.authorization)?;
            let sig = signature::sign_typed_data(signer, &typed_data)?;
            inner.with_signature(sig)
        }
    };

    Ok(v1::PaymentPayload {
        x402_version: unsigned.x402_version,
        scheme: unsigned.scheme,
        network: unsigned.network.clone(),
        payload: ExactPayload::Eip3009(signed),
    })
}

/// Builds and signs a payment payload in one step, with the signer's own
/// address as the payer.
///
/// # Errors
///
/// See [`build_unsigned_payload`] and [`attach_signature`].
pub fn sign_payment<S: SignerLike>(
    signer: &S,
    requirements: &proto_v1::PaymentRequirements,
) -> Result<v1::PaymentPayload, X402Error> {
    let unsigned = build_unsigned_payload(signer.address(), requirements)?;
    attach_signature(signer, requirements, &unsigned)
}

/// Verifies a signed payload against its requirements and an expected payer.
///
/// Rebuilds the typed-data document the same way [`attach_signature`] does
/// and checks the signature recovers the expected address.
///
/// # Errors
///
/// - requirement conversion and typed-data errors, as in [`attach_signature`]
/// - [`X402Error::MalformedInput`] if the payload carries no signature or a
///   signature of the wrong byte length
#[cfg_attr(feature = "telemetry", tracing::instrument(skip_all, err))]
pub fn verify_payment(
    requirements: &proto_v1::PaymentRequirements,
    payload: &v1::PaymentPayload,
    expected_signer: Address,
) -> Result<bool, X402Error> {
    let concrete = as_concrete(requirements)?;
    match &payload.payload {
        ExactPayload::Eip3009(inner) => {
            let sig = inner.signature.as_ref().ok_or_else(|| {
                X402Error::MalformedInput("payload carries no signature".to_owned())
            })?;
            let typed_data = typed_data::typed_data_for(&concrete, &inner.authorization)?;
            signature::verify_typed_data(sig, &typed_data, expected_signer)
        }
    }
}
