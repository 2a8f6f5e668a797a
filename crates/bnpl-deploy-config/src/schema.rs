// crates/bnpl-deploy-config/src/schema.rs
// ============================================================================
// Module: Registry Schemas
// Description: JSON schema builders for exported deployment records.
// Purpose: Give deployment tooling a machine-checkable contract for exports.
// Dependencies: serde_json
// ============================================================================

//! ## Overview
//! Schemas describe the serialized (camelCase) form of
//! [`DeploymentParameters`](crate::DeploymentParameters). Big integers are
//! base-10 strings; addresses are `0x` + 40 hex digits; role holders are an
//! address or a lower-case role name.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde_json::Value;
use serde_json::json;

use crate::address::MAX_ROLE_NAME_LENGTH;
use crate::registry::MAX_NETWORK_KEY_LENGTH;
use crate::units::MAX_TOKEN_DECIMALS;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Pattern matched by every address field.
const ADDRESS_PATTERN: &str = "^0x[0-9a-fA-F]{40}$";
/// Pattern matched by arbitrary-precision integers.
const DECIMAL_PATTERN: &str = "^[0-9]+$";

// ============================================================================
// SECTION: Public API
// ============================================================================

/// Returns the JSON schema for the full exported registry.
#[must_use]
pub fn registry_schema() -> Value {
    json!({
        "$schema": "https://json-schema.org/draft/2020-12/schema",
        "$id": "bnpl-deploy://schemas/registry.schema.json",
        "title": "BNPL Deployment Registry",
        "description": "Deployment parameters keyed by network.",
        "type": "object",
        "minProperties": 1,
        "propertyNames": {
            "pattern": "^[a-z0-9-]+$",
            "maxLength": MAX_NETWORK_KEY_LENGTH
        },
        "additionalProperties": deployment_parameters_body()
    })
}

/// Returns the JSON schema for a single network record.
#[must_use]
pub fn deployment_parameters_schema() -> Value {
    let mut schema = deployment_parameters_body();
    if let Value::Object(map) = &mut schema {
        map.insert(
            "$schema".to_string(),
            json!("https://json-schema.org/draft/2020-12/schema"),
        );
        map.insert(
            "$id".to_string(),
            json!("bnpl-deploy://schemas/deployment-parameters.schema.json"),
        );
        map.insert("title".to_string(), json!("BNPL Deployment Parameters"));
    }
    schema
}

// ============================================================================
// SECTION: Records
// ============================================================================

/// Schema body for a deployment record.
fn deployment_parameters_body() -> Value {
    json!({
        "type": "object",
        "properties": {
            "networkId": {
                "type": "string",
                "pattern": DECIMAL_PATTERN,
                "description": "Chain identifier (base-10)."
            },
            "networkName": {
                "type": "string",
                "minLength": 1,
                "description": "Human-readable network label."
            },
            "stakingTokenAddress": address_schema("Protocol staking token."),
            "minBondingAmount": decimal_schema("Minimum stake in staking-token smallest units."),
            "loanOverdueGracePeriod": seconds_schema("Seconds before an overdue loan is penalized."),
            "defaultRewardDuration": seconds_schema("Seconds over which rewards vest by default."),
            "distributorAdmin": role_holder_schema("Reward distributor administrator."),
            "managerAdmin": role_holder_schema("Bank node manager administrator."),
            "bankNodeManagerConfigurator": role_holder_schema("Bank node manager configurator."),
            "lendableTokens": {
                "type": "array",
                "minItems": 1,
                "items": lendable_token_schema()
            }
        },
        "required": [
            "networkId",
            "networkName",
            "stakingTokenAddress",
            "minBondingAmount",
            "loanOverdueGracePeriod",
            "defaultRewardDuration",
            "distributorAdmin",
            "managerAdmin",
            "bankNodeManagerConfigurator",
            "lendableTokens"
        ],
        "additionalProperties": false
    })
}

/// Schema for a lendable token entry.
fn lendable_token_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "enabled": { "type": "boolean" },
            "tokenContract": address_schema("Underlying ERC20 asset."),
            "swapMarket": address_schema("Swap venue used to price the asset."),
            "swapMarketPoolFee": decimal_schema("Swap venue pool fee tier."),
            "decimals": {
                "type": "integer",
                "minimum": 0,
                "maximum": MAX_TOKEN_DECIMALS
            },
            "valueMultiplier": decimal_schema("One whole token in smallest units (10^decimals)."),
            "unusedFundsLendingMode": {
                "type": "integer",
                "enum": [0, 1],
                "description": "0 = none, 1 = external lending protocol."
            },
            "unusedFundsLendingContract": address_schema("External lending pool."),
            "unusedFundsLendingToken": address_schema("External lending receipt token."),
            "symbol": { "type": "string", "minLength": 1 },
            "poolSymbol": { "type": "string", "minLength": 1 }
        },
        "required": [
            "enabled",
            "tokenContract",
            "swapMarket",
            "swapMarketPoolFee",
            "decimals",
            "valueMultiplier",
            "unusedFundsLendingMode",
            "unusedFundsLendingContract",
            "unusedFundsLendingToken",
            "symbol",
            "poolSymbol"
        ],
        "additionalProperties": false
    })
}

// ============================================================================
// SECTION: Field Helpers
// ============================================================================

/// Schema for an address string.
fn address_schema(description: &str) -> Value {
    json!({
        "type": "string",
        "pattern": ADDRESS_PATTERN,
        "description": description
    })
}

/// Schema for an arbitrary-precision integer string.
fn decimal_schema(description: &str) -> Value {
    json!({
        "type": "string",
        "pattern": DECIMAL_PATTERN,
        "description": description
    })
}

/// Schema for a positive duration in seconds.
fn seconds_schema(description: &str) -> Value {
    json!({
        "type": "integer",
        "minimum": 1,
        "description": description
    })
}

/// Schema for an address or symbolic role.
fn role_holder_schema(description: &str) -> Value {
    json!({
        "oneOf": [
            { "type": "string", "pattern": ADDRESS_PATTERN },
            {
                "type": "string",
                "pattern": "^[a-z][a-z0-9_]*$",
                "maxLength": MAX_ROLE_NAME_LENGTH
            }
        ],
        "description": description
    })
}
