// crates/bnpl-deploy-config/src/registry.rs
// ============================================================================
// Module: Deployment Registry
// Description: Immutable network-key to deployment-record mapping.
// Purpose: Build, validate, and serve deployment records by network key.
// Dependencies: serde, thiserror, crate::networks, crate::params
// ============================================================================

//! ## Overview
//! The built-in registry is constructed and validated once on first access
//! and lives for the rest of the process. Construction is all-or-nothing: a
//! single malformed record fails the whole registry, and that failure is
//! reported on every subsequent access.
//!
//! ## Invariants
//! - Keys are unique, lower-case network labels.
//! - Chain ids are unique across networks.
//! - Records are never mutated after construction.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::collections::BTreeSet;
use std::sync::OnceLock;

use serde::Serialize;
use thiserror::Error;

use crate::address::AddressError;
use crate::address::RoleError;
use crate::networks::builtin_networks;
use crate::params::DeploymentParameters;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Maximum length of a network key.
pub const MAX_NETWORK_KEY_LENGTH: usize = 64;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Registry construction and lookup errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// No record exists for the requested network key.
    #[error("unknown network: {0}")]
    UnknownNetwork(String),
    /// The same network key was declared twice.
    #[error("duplicate network: {0}")]
    DuplicateNetwork(String),
    /// No network was passed explicitly or through the environment.
    #[error("no network selected: pass --network or set {0}")]
    NetworkNotSelected(&'static str),
    /// Record data violates a registry invariant.
    #[error("invalid registry: {0}")]
    Invalid(String),
    /// An address literal is malformed.
    #[error("invalid registry address: {0}")]
    Address(#[from] AddressError),
    /// A role holder literal is malformed.
    #[error("invalid registry role: {0}")]
    Role(#[from] RoleError),
}

// ============================================================================
// SECTION: Registry
// ============================================================================

/// Validated mapping from network key to deployment parameters.
///
/// Serializes as a JSON object keyed by network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Registry {
    /// Records keyed by network label.
    networks: BTreeMap<String, DeploymentParameters>,
}

impl Registry {
    /// Returns the process-wide built-in registry.
    ///
    /// # Errors
    ///
    /// Returns the [`RegistryError`] raised while building or validating the
    /// built-in records. The error is cached and returned on every call.
    pub fn builtin() -> Result<&'static Self, RegistryError> {
        static BUILTIN: OnceLock<Result<Registry, RegistryError>> = OnceLock::new();
        BUILTIN
            .get_or_init(|| builtin_networks().and_then(Self::from_networks))
            .as_ref()
            .map_err(RegistryError::clone)
    }

    /// Builds a validated registry from `(key, record)` pairs.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::DuplicateNetwork`] for a repeated key and
    /// [`RegistryError::Invalid`] for any record or key that fails validation.
    pub fn from_networks(
        entries: impl IntoIterator<Item = (String, DeploymentParameters)>,
    ) -> Result<Self, RegistryError> {
        let mut networks = BTreeMap::new();
        for (key, params) in entries {
            if networks.contains_key(&key) {
                return Err(RegistryError::DuplicateNetwork(key));
            }
            networks.insert(key, params);
        }
        let registry = Self {
            networks,
        };
        registry.validate()?;
        Ok(registry)
    }

    /// Returns the record for `network`, or `None` for an unknown key.
    #[must_use]
    pub fn get(&self, network: &str) -> Option<&DeploymentParameters> {
        self.networks.get(network)
    }

    /// Returns the record for `network`.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::UnknownNetwork`] when no record exists.
    pub fn require(&self, network: &str) -> Result<&DeploymentParameters, RegistryError> {
        self.get(network).ok_or_else(|| RegistryError::UnknownNetwork(network.to_string()))
    }

    /// Iterates over network keys in sorted order.
    pub fn networks(&self) -> impl Iterator<Item = &str> {
        self.networks.keys().map(String::as_str)
    }

    /// Iterates over `(key, record)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &DeploymentParameters)> {
        self.networks.iter().map(|(key, params)| (key.as_str(), params))
    }

    /// Returns the number of networks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.networks.len()
    }

    /// Returns true when no networks are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.networks.is_empty()
    }

    /// Runs the full validation pass over every key and record.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Invalid`] on the first violated rule.
    pub fn validate(&self) -> Result<(), RegistryError> {
        if self.networks.is_empty() {
            return Err(RegistryError::Invalid("registry must define at least one network".into()));
        }
        let mut chain_ids = BTreeSet::new();
        for (key, params) in &self.networks {
            validate_network_key(key)?;
            params.validate(key)?;
            if !chain_ids.insert(params.network_id.as_str()) {
                return Err(RegistryError::Invalid(format!(
                    "duplicate network_id {} (network {key})",
                    params.network_id
                )));
            }
        }
        Ok(())
    }
}

/// Looks up `network` in the built-in registry.
///
/// # Errors
///
/// Returns [`RegistryError::UnknownNetwork`] for an unknown key, or the
/// built-in registry's construction error.
pub fn lookup(network: &str) -> Result<&'static DeploymentParameters, RegistryError> {
    Registry::builtin()?.require(network)
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Validates a network key: `[a-z0-9-]+`, bounded length.
fn validate_network_key(key: &str) -> Result<(), RegistryError> {
    if key.is_empty() {
        return Err(RegistryError::Invalid("network key must be set".to_string()));
    }
    if key.len() > MAX_NETWORK_KEY_LENGTH {
        return Err(RegistryError::Invalid(format!(
            "network key {key} exceeds {MAX_NETWORK_KEY_LENGTH} characters"
        )));
    }
    if !key.bytes().all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-') {
        return Err(RegistryError::Invalid(format!(
            "network key {key} must contain only a-z, 0-9 and '-'"
        )));
    }
    Ok(())
}
