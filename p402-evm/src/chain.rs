//! EVM chain primitives.
//!
//! Provides [`TokenAmount`], the uint256 amount representation used for the
//! `value` field of ERC-3009 authorizations.

use alloy_primitives::U256;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// A token amount in the token's smallest unit (e.g., `"1000000"` for 1 USDC).
///
/// Backed by a [`U256`] so amounts beyond the 64-bit range survive intact.
/// On the wire this is a decimal string; hex, signs, and non-digit input are
/// rejected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct TokenAmount(U256);

impl TokenAmount {
    /// Wraps a raw [`U256`] amount.
    #[must_use]
    pub const fn new(amount: U256) -> Self {
        Self(amount)
    }

    /// Returns the raw [`U256`] amount.
    #[must_use]
    pub const fn inner(&self) -> U256 {
        self.0
    }
}

impl From<U256> for TokenAmount {
    fn from(amount: U256) -> Self {
        Self(amount)
    }
}

impl From<u64> for TokenAmount {
    fn from(amount: u64) -> Self {
        Self(U256::from(amount))
    }
}

impl From<TokenAmount> for U256 {
    fn from(amount: TokenAmount) -> Self {
        amount.0
    }
}

impl FromStr for TokenAmount {
    type Err = alloy_primitives::ruint::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        U256::from_str_radix(s, 10).map(Self)
    }
}

impl Display for TokenAmount {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for TokenAmount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0.to_string())
    }
}

impl<'de> Deserialize<'de> for TokenAmount {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse()
            .map_err(|_| serde::de::Error::custom("amount must be a non-negative decimal integer"))
    }
}
