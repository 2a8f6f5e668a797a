// crates/bnpl-deploy-config/src/lib.rs
// ============================================================================
// Module: BNPL Deploy Config Library
// Description: Network-keyed deployment parameter registry for the BNPL protocol.
// Purpose: Single source of truth for per-network deployment constants.
// Dependencies: num-bigint, serde, serde_json, thiserror
// ============================================================================

//! ## Overview
//! `bnpl-deploy-config` holds the baked-in deployment parameters for every
//! supported network (`kovan`, `mainnet`). The registry is built and
//! validated once, then handed out as read-only `'static` views. Deployment
//! tooling selects a record by network key and reads addresses and numeric
//! constants straight from it.
//!
//! ```
//! use bnpl_deploy_config::Registry;
//!
//! let registry = Registry::builtin()?;
//! let mainnet = registry.require("mainnet")?;
//! assert_eq!(mainnet.lendable_tokens[0].symbol, "USDT");
//! # Ok::<(), bnpl_deploy_config::RegistryError>(())
//! ```

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod address;
pub mod docs;
pub mod networks;
pub mod params;
pub mod registry;
pub mod schema;
pub mod selection;
pub mod units;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use address::Address;
pub use address::AddressError;
pub use address::RoleError;
pub use address::RoleHolder;
pub use docs::DocsError;
pub use docs::registry_docs_markdown;
pub use docs::verify_registry_docs;
pub use docs::write_registry_docs;
pub use params::DeploymentParameters;
pub use params::LendableTokenParameters;
pub use params::UnusedFundsLendingMode;
pub use registry::Registry;
pub use registry::RegistryError;
pub use registry::lookup;
pub use schema::deployment_parameters_schema;
pub use schema::registry_schema;
pub use selection::NETWORK_ENV_VAR;
pub use selection::resolve_network;
pub use selection::resolve_network_with;
pub use units::AmountError;
pub use units::FeeTier;
pub use units::TokenAmount;
pub use units::fee_tier;
pub use units::scale_to_token_units;
