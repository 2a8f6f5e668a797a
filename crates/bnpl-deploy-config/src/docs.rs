// crates/bnpl-deploy-config/src/docs.rs
// ============================================================================
// Module: Registry Docs Generator
// Description: Markdown summary of every network and lendable token.
// Purpose: Keep human-facing deployment docs in sync with the registry.
// Dependencies: std, thiserror
// ============================================================================

//! ## Overview
//! Renders a deterministic Markdown reference of the registry. Networks are
//! listed in key order and tokens in deployment order, so regenerating the
//! document from unchanged data yields byte-identical output.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::params::DeploymentParameters;
use crate::params::LendableTokenParameters;
use crate::registry::Registry;
use crate::registry::RegistryError;
use crate::units::ONE_DAY;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Errors raised when generating or verifying registry docs.
#[derive(Debug, Error)]
pub enum DocsError {
    /// IO failure while reading or writing docs.
    #[error("docs io error: {0}")]
    Io(String),
    /// The built-in registry failed to load.
    #[error("docs registry error: {0}")]
    Registry(#[from] RegistryError),
    /// Generated docs do not match the file on disk.
    #[error("docs drift: {0}")]
    Drift(String),
}

// ============================================================================
// SECTION: Public API
// ============================================================================

/// Renders the Markdown reference for `registry`.
#[must_use]
pub fn registry_docs_markdown(registry: &Registry) -> String {
    let mut out = String::new();
    out.push_str("<!--\n");
    out.push_str("Generated: This file is auto-generated; do not edit manually.\n");
    out.push_str("-->\n\n");
    out.push_str("# BNPL Deployment Networks\n\n");
    out.push_str("| Network | Chain Id | Name | Lendable Tokens |\n");
    out.push_str("| --- | --- | --- | --- |\n");
    for (key, params) in registry.iter() {
        let symbols: Vec<&str> =
            params.lendable_tokens.iter().map(|token| token.symbol.as_str()).collect();
        out.push_str(&format!(
            "| `{key}` | {} | {} | {} |\n",
            params.network_id,
            params.network_name,
            symbols.join(", ")
        ));
    }
    out.push('\n');
    for (key, params) in registry.iter() {
        render_network(&mut out, key, params);
    }
    out
}

/// Writes the docs for the built-in registry to `path`.
///
/// # Errors
///
/// Returns [`DocsError`] when the registry fails to load or the write fails.
pub fn write_registry_docs(path: &Path) -> Result<(), DocsError> {
    let content = registry_docs_markdown(Registry::builtin()?);
    fs::write(path, content.as_bytes()).map_err(|err| DocsError::Io(err.to_string()))
}

/// Verifies the docs at `path` match the built-in registry.
///
/// # Errors
///
/// Returns [`DocsError::Drift`] when the file differs from generated output.
pub fn verify_registry_docs(path: &Path) -> Result<(), DocsError> {
    let content = registry_docs_markdown(Registry::builtin()?);
    let existing = fs::read_to_string(path).map_err(|err| DocsError::Io(err.to_string()))?;
    if existing != content {
        return Err(DocsError::Drift(format!("docs mismatch: {}", path.display())));
    }
    Ok(())
}

// ============================================================================
// SECTION: Rendering
// ============================================================================

/// Renders one network section.
fn render_network(out: &mut String, key: &str, params: &DeploymentParameters) {
    out.push_str(&format!("## `{key}`\n\n"));
    out.push_str("| Field | Value |\n");
    out.push_str("| --- | --- |\n");
    let rows = [
        ("networkId", params.network_id.clone()),
        ("networkName", params.network_name.clone()),
        ("stakingTokenAddress", format!("`{}`", params.staking_token_address)),
        ("minBondingAmount", params.min_bonding_amount.to_string()),
        ("loanOverdueGracePeriod", render_seconds(params.loan_overdue_grace_period)),
        ("defaultRewardDuration", render_seconds(params.default_reward_duration)),
        ("distributorAdmin", format!("`{}`", params.distributor_admin)),
        ("managerAdmin", format!("`{}`", params.manager_admin)),
        ("bankNodeManagerConfigurator", format!("`{}`", params.bank_node_manager_configurator)),
    ];
    for (field, value) in rows {
        out.push_str(&format!("| `{field}` | {value} |\n"));
    }
    out.push('\n');
    for token in &params.lendable_tokens {
        render_token(out, token);
    }
}

/// Renders one lendable token subsection.
fn render_token(out: &mut String, token: &LendableTokenParameters) {
    out.push_str(&format!("### {} ({})\n\n", token.symbol, token.pool_symbol));
    out.push_str(&format!("- enabled: {}\n", token.enabled));
    out.push_str(&format!("- token contract: `{}`\n", token.token_contract));
    out.push_str(&format!(
        "- swap market: `{}` (pool fee {})\n",
        token.swap_market, token.swap_market_pool_fee
    ));
    out.push_str(&format!(
        "- decimals: {} (value multiplier {})\n",
        token.decimals, token.value_multiplier
    ));
    out.push_str(&format!(
        "- unused funds lending: {} via `{}` (receipt token `{}`)\n\n",
        token.unused_funds_lending_mode.as_str(),
        token.unused_funds_lending_contract,
        token.unused_funds_lending_token
    ));
}

/// Renders seconds with a whole-day annotation when exact.
fn render_seconds(seconds: u64) -> String {
    if seconds.is_multiple_of(ONE_DAY) {
        format!("{seconds} ({} days)", seconds / ONE_DAY)
    } else {
        format!("{seconds} seconds")
    }
}
