#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! Core types for the x402 payment protocol.
//!
//! This crate provides the chain-agnostic building blocks for implementing
//! HTTP 402 Payment Required flows: the wire format types exchanged between
//! buyers and sellers, the base64 header codecs, and a registry of well-known
//! networks. Chain-specific signing lives in separate crates (`p402-evm` for
//! EIP-155 chains).
//!
//! # Overview
//!
//! When a client requests a paid resource, the server answers with payment
//! requirements (the `accepts` list of a [`proto::v1::PaymentRequired`]). The
//! client picks one, signs a payment authorization for it, and retries the
//! request with the signed payload in the `X-PAYMENT` header. The settlement
//! outcome comes back in the `X-PAYMENT-RESPONSE` header.
//!
//! # Modules
//!
//! - [`encoding`] - Base64 wrapper used by the header codecs
//! - [`networks`] - Registry of well-known EVM networks
//! - [`proto`] - Wire format types and header codecs
//! - [`scheme`] - Scheme marker types and the client error taxonomy
//! - [`timestamp`] - Unix timestamps for authorization validity windows
//!
//! # Feature Flags
//!
//! - `telemetry` - Enables tracing instrumentation for the header codecs

pub mod encoding;
pub mod networks;
pub mod proto;
pub mod scheme;
pub mod timestamp;
