// crates/bnpl-deploy-config/tests/common/mod.rs
// =============================================================================
// Module: Registry Test Helpers
// Description: Shared helpers for registry validation tests.
// Purpose: Reduce duplication across integration tests for bnpl-deploy-config.
// =============================================================================

#![allow(dead_code, reason = "Test helpers are selectively used across suites.")]

use bnpl_deploy_config::DeploymentParameters;
use bnpl_deploy_config::Registry;
use bnpl_deploy_config::RegistryError;
use bnpl_deploy_config::networks;

/// Result alias used by every test in this crate.
pub type TestResult = Result<(), String>;

/// Returns a fresh, mutable copy of the kovan record.
pub fn kovan() -> Result<DeploymentParameters, String> {
    networks::kovan().map_err(|err| err.to_string())
}

/// Returns a fresh, mutable copy of the mainnet record.
pub fn mainnet() -> Result<DeploymentParameters, String> {
    networks::mainnet().map_err(|err| err.to_string())
}

/// Returns the built-in registry or a printable error.
pub fn builtin() -> Result<&'static Registry, String> {
    Registry::builtin().map_err(|err| err.to_string())
}

/// Asserts that `result` failed with a message containing `needle`.
pub fn assert_invalid<T>(result: Result<T, RegistryError>, needle: &str) -> TestResult {
    match result {
        Err(error) => {
            let message = error.to_string();
            if message.contains(needle) {
                Ok(())
            } else {
                Err(format!("error {message} did not contain {needle}"))
            }
        }
        Ok(_) => Err("expected invalid registry data".to_string()),
    }
}
