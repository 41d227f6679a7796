//! Registry of well-known EVM networks.
//!
//! V1 payment requirements identify chains by human-readable network names
//! (e.g., `"base-sepolia"`), while EIP-712 domain separation needs the numeric
//! EIP-155 chain ID. This module is the single source of truth for that
//! mapping, plus the USDC deployment constants the test suites rely on.

use alloy_primitives::{Address, address};

/// A known network definition with its chain ID and human-readable name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NetworkInfo {
    /// Human-readable network name (e.g., "base-sepolia").
    pub name: &'static str,
    /// EIP-155 chain ID (e.g., 84532 for Base Sepolia).
    pub chain_id: u64,
}

/// All networks this SDK knows out of the box.
pub const EVM_NETWORKS: &[NetworkInfo] = &[
    NetworkInfo {
        name: "ethereum",
        chain_id: 1,
    },
    NetworkInfo {
        name: "base",
        chain_id: 8453,
    },
    NetworkInfo {
        name: "base-sepolia",
        chain_id: 84532,
    },
    NetworkInfo {
        name: "polygon",
        chain_id: 137,
    },
    NetworkInfo {
        name: "polygon-amoy",
        chain_id: 80002,
    },
    NetworkInfo {
        name: "avalanche",
        chain_id: 43114,
    },
    NetworkInfo {
        name: "avalanche-fuji",
        chain_id: 43113,
    },
    NetworkInfo {
        name: "celo",
        chain_id: 42220,
    },
];

/// Looks up the EIP-155 chain ID for a network name.
#[must_use]
pub fn chain_id_by_name(name: &str) -> Option<u64> {
    EVM_NETWORKS
        .iter()
        .find(|info| info.name == name)
        .map(|info| info.chain_id)
}

/// Looks up the network name for an EIP-155 chain ID.
#[must_use]
pub fn name_by_chain_id(chain_id: u64) -> Option<&'static str> {
    EVM_NETWORKS
        .iter()
        .find(|info| info.chain_id == chain_id)
        .map(|info| info.name)
}

/// USDC contract address on Base Sepolia.
pub const USDC_BASE_SEPOLIA: Address = address!("036CbD53842c5426634e7929541eC2318f3dCF7e");

/// Default EIP-712 domain name for USDC deployments.
pub const DEFAULT_USDC_NAME: &str = "USDC";

/// Default EIP-712 domain version for USDC deployments.
pub const DEFAULT_USDC_VERSION: &str = "2";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chain_id_by_name() {
        assert_eq!(chain_id_by_name("base-sepolia"), Some(84532));
        assert_eq!(chain_id_by_name("base"), Some(8453));
        assert_eq!(chain_id_by_name("ethereum"), Some(1));
    }

    #[test]
    fn test_name_by_chain_id() {
        assert_eq!(name_by_chain_id(84532), Some("base-sepolia"));
        assert_eq!(name_by_chain_id(42220), Some("celo"));
    }

    #[test]
    fn test_unknown_network_misses() {
        assert_eq!(chain_id_by_name("hyperborea"), None);
        assert_eq!(name_by_chain_id(999_999), None);
    }

    #[test]
    fn test_both_directions_agree() {
        for info in EVM_NETWORKS {
            assert_eq!(chain_id_by_name(info.name), Some(info.chain_id));
            assert_eq!(name_by_chain_id(info.chain_id), Some(info.name));
        }
    }
}
