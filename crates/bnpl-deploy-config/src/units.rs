// crates/bnpl-deploy-config/src/units.rs
// ============================================================================
// Module: Token Units
// Description: Arbitrary-precision token amounts, fee tiers, and time units.
// Purpose: Compute smallest-unit values without fixed-width overflow.
// Dependencies: num-bigint, serde, thiserror
// ============================================================================

//! ## Overview
//! Token amounts are carried in their smallest denomination. A bonding
//! amount of two million 18-decimal tokens is `2 * 10^24`, beyond `u64`, so
//! amounts are backed by [`BigUint`] and serialized as base-10 strings.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;
use std::str::FromStr;

use num_bigint::BigUint;
use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use serde::Serializer;
use thiserror::Error;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// One minute in seconds.
pub const ONE_MINUTE: u64 = 60;
/// One hour in seconds.
pub const ONE_HOUR: u64 = ONE_MINUTE * 60;
/// One day in seconds.
pub const ONE_DAY: u64 = ONE_HOUR * 24;
/// One week in seconds.
pub const ONE_WEEK: u64 = ONE_DAY * 7;
/// One month (30 days) in seconds.
pub const ONE_MONTH: u64 = ONE_DAY * 30;
/// One year (365 days) in seconds.
pub const ONE_YEAR: u64 = ONE_DAY * 365;

/// Decimal precision of USDT.
pub const USDT_TOKEN_DECIMALS: u8 = 6;
/// Decimal precision of TUSD.
pub const TUSD_TOKEN_DECIMALS: u8 = 18;
/// Decimal precision of the BNPL staking token.
pub const BNPL_TOKEN_DECIMALS: u8 = 18;

/// Largest decimal precision whose unit (`10^decimals`) fits in a `uint256`.
pub const MAX_TOKEN_DECIMALS: u8 = 77;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Errors raised when parsing a base-10 token amount or fee tier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmountError {
    /// Input was empty.
    #[error("amount is empty")]
    Empty,
    /// Input contained something other than ASCII digits.
    #[error("amount {value} contains non-digit character '{character}'")]
    InvalidDigit {
        /// Offending input.
        value: String,
        /// First non-digit character found.
        character: char,
    },
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Returns `10^decimals`.
fn pow10(decimals: u8) -> BigUint {
    BigUint::from(10_u32).pow(u32::from(decimals))
}

/// Scales a whole-token `amount` into smallest units: `amount * 10^decimals`.
///
/// ```
/// use bnpl_deploy_config::scale_to_token_units;
///
/// assert_eq!(scale_to_token_units(5, 6).to_string(), "5000000");
/// ```
#[must_use]
pub fn scale_to_token_units(amount: u64, decimals: u8) -> TokenAmount {
    TokenAmount(BigUint::from(amount) * pow10(decimals))
}

/// Wraps a swap market pool fee identifier without altering it.
#[must_use]
pub fn fee_tier(amount: u32) -> FeeTier {
    FeeTier(BigUint::from(amount))
}

// ============================================================================
// SECTION: Token Amount
// ============================================================================

/// Non-negative token amount expressed in the token's smallest unit.
///
/// # Invariants
/// - Serialized as a base-10 string with no separators.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TokenAmount(BigUint);

impl TokenAmount {
    /// Wraps a raw smallest-unit value.
    #[must_use]
    pub const fn new(value: BigUint) -> Self {
        Self(value)
    }

    /// Returns one whole token (`10^decimals`) in smallest units.
    #[must_use]
    pub fn one_token(decimals: u8) -> Self {
        Self(pow10(decimals))
    }

    /// Returns the underlying integer.
    #[must_use]
    pub const fn as_biguint(&self) -> &BigUint {
        &self.0
    }

    /// Returns true when the amount is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.bits() == 0
    }
}

impl fmt::Display for TokenAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for TokenAmount {
    type Err = AmountError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        parse_decimal(value).map(Self)
    }
}

impl From<u64> for TokenAmount {
    fn from(value: u64) -> Self {
        Self(BigUint::from(value))
    }
}

impl Serialize for TokenAmount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for TokenAmount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserialize_decimal(deserializer).map(Self)
    }
}

// ============================================================================
// SECTION: Fee Tier
// ============================================================================

/// Swap market pool fee tier identifier.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FeeTier(BigUint);

impl FeeTier {
    /// Returns the underlying integer.
    #[must_use]
    pub const fn as_biguint(&self) -> &BigUint {
        &self.0
    }
}

impl fmt::Display for FeeTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for FeeTier {
    type Err = AmountError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        parse_decimal(value).map(Self)
    }
}

impl Serialize for FeeTier {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for FeeTier {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserialize_decimal(deserializer).map(Self)
    }
}

// ============================================================================
// SECTION: Serde Helpers
// ============================================================================

/// Parses a strictly base-10 digit string.
fn parse_decimal(value: &str) -> Result<BigUint, AmountError> {
    if let Some(character) = value.chars().find(|ch| !ch.is_ascii_digit()) {
        return Err(AmountError::InvalidDigit {
            value: value.to_string(),
            character,
        });
    }
    BigUint::parse_bytes(value.as_bytes(), 10).ok_or(AmountError::Empty)
}

/// Deserializes a base-10 string into a [`BigUint`].
fn deserialize_decimal<'de, D: Deserializer<'de>>(deserializer: D) -> Result<BigUint, D::Error> {
    let raw = String::deserialize(deserializer)?;
    parse_decimal(&raw).map_err(|err| {
        serde::de::Error::custom(format!("invalid decimal integer: {err}"))
    })
}
