#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! EIP-155 (EVM) payment signing for the x402 payment protocol.
//!
//! This crate implements the payer side of the "exact" payment scheme on
//! EVM-compatible chains: ERC-3009 `transferWithAuthorization` messages
//! signed with EIP-712 structured-data signing.
//!
//! # Pipeline
//!
//! Data flows strictly forward:
//!
//! 1. Server-issued requirements become an unsigned payload with a fresh
//!    nonce and validity window ([`exact::client::build_unsigned_payload`]).
//! 2. The requirements and the payload's authorization are assembled into an
//!    EIP-712 typed-data document ([`exact::typed_data::typed_data_for`]).
//! 3. The document's structured hash is signed, producing a 65-byte
//!    `r ‖ s ‖ v` signature ([`exact::signature::sign_typed_data`]), which is
//!    attached as a new immutable payload value.
//!
//! Verification ([`exact::signature::verify_typed_data`]) recomputes the same
//! hash and recovers the signer address; a mismatch is a boolean `false`, not
//! an error.
//!
//! # Feature Flags
//!
//! - `telemetry` - Enables tracing instrumentation on the fallible operations

pub mod chain;
pub mod exact;

pub use exact::client::{attach_signature, build_unsigned_payload, sign_payment, verify_payment};
pub use exact::signature::SignerLike;
