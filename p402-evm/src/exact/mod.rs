//! The EIP-155 "exact" payment scheme.
//!
//! - [`types`] - Wire format types for the scheme payload
//! - [`typed_data`] - EIP-712 typed-data document construction
//! - [`signature`] - Signing and recovery over the typed-data hash
//! - [`client`] - The payer-side payload lifecycle

pub mod client;
pub mod signature;
pub mod typed_data;
pub mod types;

pub use typed_data::TransferTypedData;
pub use types::*;
