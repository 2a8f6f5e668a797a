// crates/bnpl-deploy-config/src/selection.rs
// ============================================================================
// Module: Network Selection
// Description: Resolves the target network key from flags or environment.
// Purpose: One resolution rule shared by every consumer of the registry.
// Dependencies: std
// ============================================================================

//! ## Overview
//! An explicit value wins; otherwise [`NETWORK_ENV_VAR`] is consulted. The
//! resolved key is trimmed and lower-cased but not checked against the
//! registry, so an unknown key still fails at lookup with
//! [`RegistryError::UnknownNetwork`].

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::env;

use crate::registry::MAX_NETWORK_KEY_LENGTH;
use crate::registry::RegistryError;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Environment variable naming the target network.
pub const NETWORK_ENV_VAR: &str = "BNPL_DEPLOY_NETWORK";

// ============================================================================
// SECTION: Resolution
// ============================================================================

/// Resolves the target network from `explicit` or [`NETWORK_ENV_VAR`].
///
/// # Errors
///
/// Returns [`RegistryError::NetworkNotSelected`] when neither source is set
/// and [`RegistryError::Invalid`] for an empty or oversized explicit value.
pub fn resolve_network(explicit: Option<&str>) -> Result<String, RegistryError> {
    let env_value = env::var(NETWORK_ENV_VAR).ok();
    resolve_network_with(explicit, env_value.as_deref())
}

/// Resolves the target network from an explicit value and an environment value.
///
/// A blank environment value counts as unset.
///
/// # Errors
///
/// Same as [`resolve_network`].
pub fn resolve_network_with(
    explicit: Option<&str>,
    env_value: Option<&str>,
) -> Result<String, RegistryError> {
    if let Some(value) = explicit {
        return normalize(value, "--network");
    }
    match env_value.map(str::trim).filter(|value| !value.is_empty()) {
        Some(value) => normalize(value, NETWORK_ENV_VAR),
        None => Err(RegistryError::NetworkNotSelected(NETWORK_ENV_VAR)),
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Trims and lower-cases a network key.
fn normalize(value: &str, source: &str) -> Result<String, RegistryError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(RegistryError::Invalid(format!("{source} must not be empty")));
    }
    if trimmed.len() > MAX_NETWORK_KEY_LENGTH {
        return Err(RegistryError::Invalid(format!(
            "{source} exceeds {MAX_NETWORK_KEY_LENGTH} characters"
        )));
    }
    Ok(trimmed.to_ascii_lowercase())
}
