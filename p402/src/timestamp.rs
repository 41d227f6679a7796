//! Unix timestamp utilities for x402 payment authorization windows.
//!
//! Payment authorizations are time-bounded: `validAfter` marks the earliest
//! moment an authorization may be executed and `validBefore` the moment it
//! expires. Both travel on the wire as stringified integers, and the EIP-712
//! message encodes them as `uint256`, so [`UnixTimestamp`] is backed by a
//! [`U256`] rather than a machine integer.

use alloy_primitives::U256;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::{Display, Formatter};
use std::ops::Add;
use std::str::FromStr;
use std::time::SystemTime;

/// Seconds since the Unix epoch (1970-01-01T00:00:00Z).
///
/// # Serialization
///
/// Serialized as a stringified decimal integer to avoid loss of precision in
/// JSON, since `JavaScript`'s `Number` type cannot safely represent all large
/// integers:
///
/// ```json
/// "1748534647"
/// ```
///
/// Deserialization accepts decimal digits only; hex, signs, and garbage are
/// rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct UnixTimestamp(U256);

impl UnixTimestamp {
    /// Creates a [`UnixTimestamp`] from a raw seconds value.
    #[must_use]
    pub fn from_secs(secs: u64) -> Self {
        Self(U256::from(secs))
    }

    /// Returns the current system time as a [`UnixTimestamp`].
    ///
    /// # Panics
    ///
    /// Panics if the system clock is set to a time before the Unix epoch,
    /// which should never happen on properly configured systems.
    #[must_use]
    pub fn now() -> Self {
        let now = SystemTime::now()
            .duration_since(SystemTime::UNIX_EPOCH)
            .expect("SystemTime before UNIX epoch?!?")
            .as_secs();
        Self(U256::from(now))
    }

    /// Returns the timestamp as a [`U256`] seconds value.
    #[must_use]
    pub const fn as_u256(&self) -> U256 {
        self.0
    }
}

impl From<U256> for UnixTimestamp {
    fn from(secs: U256) -> Self {
        Self(secs)
    }
}

impl Add<u64> for UnixTimestamp {
    type Output = Self;

    fn add(self, rhs: u64) -> Self::Output {
        Self(self.0 + U256::from(rhs))
    }
}

impl FromStr for UnixTimestamp {
    type Err = alloy_primitives::ruint::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        U256::from_str_radix(s, 10).map(Self)
    }
}

impl Display for UnixTimestamp {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for UnixTimestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0.to_string())
    }
}

impl<'de> Deserialize<'de> for UnixTimestamp {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse()
            .map_err(|_| serde::de::Error::custom("timestamp must be a non-negative integer"))
    }
}
