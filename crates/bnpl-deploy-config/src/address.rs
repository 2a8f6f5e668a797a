// crates/bnpl-deploy-config/src/address.rs
// ============================================================================
// Module: Addresses and Role Holders
// Description: Syntactically validated EVM addresses and role placeholders.
// Purpose: Reject malformed address literals before any deployment step.
// Dependencies: serde, sha3, thiserror
// ============================================================================

//! ## Overview
//! [`Address`] accepts `0x` followed by exactly 40 hexadecimal digits and
//! keeps the literal casing it was given. Mixed-case literals must carry a
//! valid EIP-55 checksum; all-lower and all-upper literals are unchecked.
//! [`RoleHolder`] is either such an address or a symbolic role (e.g.
//! `deployer`) that the deployment tool resolves to a concrete account at
//! run time.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;
use sha3::Digest;
use sha3::Keccak256;
use thiserror::Error;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Number of hexadecimal digits in an address body.
pub const ADDRESS_HEX_LENGTH: usize = 40;
/// Maximum length of a symbolic role name.
pub const MAX_ROLE_NAME_LENGTH: usize = 64;
/// Symbolic role resolved to the deploying account.
pub const DEPLOYER_ROLE: &str = "deployer";

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Address parsing errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    /// Input was empty.
    #[error("address is empty")]
    Empty,
    /// Input did not start with `0x`.
    #[error("address {0} must start with 0x")]
    MissingPrefix(String),
    /// Body did not contain exactly 40 hex digits.
    #[error("address {address} has {actual} hex digits, expected 40")]
    InvalidLength {
        /// Offending input.
        address: String,
        /// Number of characters after the prefix.
        actual: usize,
    },
    /// Body contained a non-hex character.
    #[error("address {address} contains non-hex character '{character}'")]
    InvalidHex {
        /// Offending input.
        address: String,
        /// First non-hex character found.
        character: char,
    },
    /// Mixed-case input whose casing is not the EIP-55 checksum.
    #[error("address {address} has an invalid EIP-55 checksum, expected {expected}")]
    InvalidChecksum {
        /// Offending input.
        address: String,
        /// Correctly checksummed form of the same address.
        expected: String,
    },
}

/// Role holder parsing errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoleError {
    /// Input was empty.
    #[error("role holder is empty")]
    Empty,
    /// Input looked like an address but failed address validation.
    #[error("role holder address invalid: {0}")]
    Address(#[from] AddressError),
    /// Symbolic role name is not `[a-z][a-z0-9_]*` within the length limit.
    #[error("role name {0} must match [a-z][a-z0-9_]* and be at most 64 characters")]
    InvalidName(String),
}

// ============================================================================
// SECTION: Address
// ============================================================================

/// EVM account or contract address.
///
/// # Invariants
/// - `0x` prefix followed by exactly 40 ASCII hex digits.
/// - Mixed-case literals are valid EIP-55 checksums.
/// - Input casing is preserved. `==`, [`Hash`], and [`Ord`] compare the
///   literal, so the same account in two casings compares unequal; use
///   [`Address::eq_ignore_case`] or [`Address::to_lowercase`] to compare
///   accounts.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Address(String);

impl Address {
    /// Parses and validates an address literal.
    ///
    /// # Errors
    ///
    /// Returns [`AddressError`] when the literal is not `0x` + 40 hex digits,
    /// or when a mixed-case literal fails the EIP-55 checksum.
    pub fn parse(value: &str) -> Result<Self, AddressError> {
        if value.is_empty() {
            return Err(AddressError::Empty);
        }
        let Some(body) = value.strip_prefix("0x") else {
            return Err(AddressError::MissingPrefix(value.to_string()));
        };
        if let Some(character) = body.chars().find(|ch| !ch.is_ascii_hexdigit()) {
            return Err(AddressError::InvalidHex {
                address: value.to_string(),
                character,
            });
        }
        if body.len() != ADDRESS_HEX_LENGTH {
            return Err(AddressError::InvalidLength {
                address: value.to_string(),
                actual: body.len(),
            });
        }
        let has_lower = body.bytes().any(|byte| byte.is_ascii_lowercase());
        let has_upper = body.bytes().any(|byte| byte.is_ascii_uppercase());
        if has_lower && has_upper {
            let expected = checksum_encode(body);
            if expected[2 ..] != *body {
                return Err(AddressError::InvalidChecksum {
                    address: value.to_string(),
                    expected,
                });
            }
        }
        Ok(Self(value.to_string()))
    }

    /// Returns the EIP-55 checksummed form of the address.
    #[must_use]
    pub fn to_checksummed(&self) -> String {
        checksum_encode(&self.0[2 ..])
    }

    /// Returns the address literal as given.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the lower-cased form of the address.
    #[must_use]
    pub fn to_lowercase(&self) -> String {
        self.0.to_ascii_lowercase()
    }

    /// Returns true when both addresses name the same account.
    #[must_use]
    pub fn eq_ignore_case(&self, other: &Self) -> bool {
        self.0.eq_ignore_ascii_case(&other.0)
    }

    /// Returns true for the all-zero address.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0[2 ..].bytes().all(|byte| byte == b'0')
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for Address {
    type Err = AddressError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse(value)
    }
}

impl TryFrom<String> for Address {
    type Error = AddressError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Address> for String {
    fn from(value: Address) -> Self {
        value.0
    }
}

// ============================================================================
// SECTION: Role Holder
// ============================================================================

/// Holder of a protocol administration role.
///
/// # Invariants
/// - Strings starting with `0x` always parse as [`RoleHolder::Address`].
/// - [`RoleHolder::Named`] values match `[a-z][a-z0-9_]*`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum RoleHolder {
    /// Concrete account address.
    Address(Address),
    /// Symbolic role resolved by the deployment tool.
    Named(String),
}

impl RoleHolder {
    /// Returns the `deployer` symbolic role.
    #[must_use]
    pub fn deployer() -> Self {
        Self::Named(DEPLOYER_ROLE.to_string())
    }

    /// Parses a role holder from an address literal or a role name.
    ///
    /// # Errors
    ///
    /// Returns [`RoleError`] when the value is empty, a malformed address,
    /// or an invalid role name.
    pub fn parse(value: &str) -> Result<Self, RoleError> {
        if value.is_empty() {
            return Err(RoleError::Empty);
        }
        if value.starts_with("0x") {
            return Ok(Self::Address(Address::parse(value)?));
        }
        if !is_valid_role_name(value) {
            return Err(RoleError::InvalidName(value.to_string()));
        }
        Ok(Self::Named(value.to_string()))
    }

    /// Returns the concrete address when the holder is not symbolic.
    #[must_use]
    pub const fn address(&self) -> Option<&Address> {
        match self {
            Self::Address(address) => Some(address),
            Self::Named(_) => None,
        }
    }

    /// Returns the string form used on the wire.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Address(address) => address.as_str(),
            Self::Named(name) => name,
        }
    }
}

impl fmt::Display for RoleHolder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RoleHolder {
    type Err = RoleError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse(value)
    }
}

impl TryFrom<String> for RoleHolder {
    type Error = RoleError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<RoleHolder> for String {
    fn from(value: RoleHolder) -> Self {
        match value {
            RoleHolder::Address(address) => address.into(),
            RoleHolder::Named(name) => name,
        }
    }
}

/// Encodes a 40-digit hex body as `0x` + EIP-55 checksummed hex.
///
/// A letter is upper-cased when the matching nibble of
/// `keccak256(lowercase body)` is 8 or above.
fn checksum_encode(body: &str) -> String {
    let lower = body.to_ascii_lowercase();
    let mut hasher = Keccak256::new();
    hasher.update(lower.as_bytes());
    let digest = hasher.finalize();
    let mut out = String::with_capacity(lower.len() + 2);
    out.push_str("0x");
    for (index, ch) in lower.chars().enumerate() {
        let byte = digest.get(index / 2).copied().unwrap_or_default();
        let nibble = if index.is_multiple_of(2) { byte >> 4 } else { byte & 0x0f };
        if nibble >= 8 {
            out.push(ch.to_ascii_uppercase());
        } else {
            out.push(ch);
        }
    }
    out
}

/// Returns true when `name` is a well-formed symbolic role.
fn is_valid_role_name(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    name.len() <= MAX_ROLE_NAME_LENGTH
        && first.is_ascii_lowercase()
        && chars.all(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '_')
}
