//! Deployment record validation tests for bnpl-deploy-config.
// crates/bnpl-deploy-config/tests/record_validation.rs
// =============================================================================
// Module: Record Validation Tests
// Description: Validate fail-closed checks on deployment records and registries.
// Purpose: Ensure malformed records never make it into a registry.
// =============================================================================

use bnpl_deploy_config::Address;
use bnpl_deploy_config::DeploymentParameters;
use bnpl_deploy_config::Registry;
use bnpl_deploy_config::RegistryError;
use bnpl_deploy_config::TokenAmount;
use bnpl_deploy_config::UnusedFundsLendingMode;
use bnpl_deploy_config::scale_to_token_units;

mod common;

use common::TestResult;
use common::assert_invalid;

const ZERO: &str = "0x0000000000000000000000000000000000000000";

fn zero_address() -> Result<Address, String> {
    Address::parse(ZERO).map_err(|err| err.to_string())
}

#[test]
fn builtin_records_pass_validation() -> TestResult {
    common::kovan()?.validate("kovan").map_err(|err| err.to_string())?;
    common::mainnet()?.validate("mainnet").map_err(|err| err.to_string())?;
    common::builtin()?.validate().map_err(|err| err.to_string())
}

#[test]
fn value_multiplier_must_match_decimals() -> TestResult {
    let mut mainnet = common::mainnet()?;
    // Legacy shape: USDT reusing the staking token's 18-decimal multiplier.
    mainnet.lendable_tokens[0].value_multiplier = scale_to_token_units(1, 18);
    assert_invalid(
        mainnet.validate("mainnet"),
        "mainnet.lendable_tokens[0].value_multiplier 1000000000000000000 must equal 10^6 (1000000)",
    )
}

#[test]
fn decimals_above_maximum_are_rejected() -> TestResult {
    let mut kovan = common::kovan()?;
    kovan.lendable_tokens[0].decimals = 78;
    assert_invalid(kovan.validate("kovan"), "kovan.lendable_tokens[0].decimals 78 exceeds max 77")
}

#[test]
fn empty_lendable_tokens_are_rejected() -> TestResult {
    let mut kovan = common::kovan()?;
    kovan.lendable_tokens.clear();
    assert_invalid(kovan.validate("kovan"), "kovan.lendable_tokens must not be empty")
}

#[test]
fn zero_staking_token_is_rejected() -> TestResult {
    let mut mainnet = common::mainnet()?;
    mainnet.staking_token_address = zero_address()?;
    assert_invalid(
        mainnet.validate("mainnet"),
        "mainnet.staking_token_address must not be the zero address",
    )
}

#[test]
fn zero_min_bonding_amount_is_rejected() -> TestResult {
    let mut kovan = common::kovan()?;
    kovan.min_bonding_amount = TokenAmount::from(0);
    assert_invalid(kovan.validate("kovan"), "kovan.min_bonding_amount must be greater than zero")
}

#[test]
fn zero_durations_are_rejected() -> TestResult {
    let mut kovan = common::kovan()?;
    kovan.loan_overdue_grace_period = 0;
    assert_invalid(
        kovan.validate("kovan"),
        "kovan.loan_overdue_grace_period must be greater than zero",
    )?;
    let mut mainnet = common::mainnet()?;
    mainnet.default_reward_duration = 0;
    assert_invalid(
        mainnet.validate("mainnet"),
        "mainnet.default_reward_duration must be greater than zero",
    )
}

#[test]
fn network_id_must_be_decimal() -> TestResult {
    let mut kovan = common::kovan()?;
    kovan.network_id = "0x2a".to_string();
    assert_invalid(kovan.validate("kovan"), "kovan.network_id must be a base-10 chain id")?;
    kovan.network_id = String::new();
    assert_invalid(kovan.validate("kovan"), "kovan.network_id must be a base-10 chain id")
}

#[test]
fn blank_network_name_is_rejected() -> TestResult {
    let mut mainnet = common::mainnet()?;
    mainnet.network_name = "   ".to_string();
    assert_invalid(mainnet.validate("mainnet"), "mainnet.network_name must be set")
}

#[test]
fn token_symbols_must_be_set_and_trimmed() -> TestResult {
    let mut kovan = common::kovan()?;
    kovan.lendable_tokens[0].symbol = String::new();
    assert_invalid(kovan.validate("kovan"), "kovan.lendable_tokens[0].symbol must be set")?;
    let mut kovan = common::kovan()?;
    kovan.lendable_tokens[0].pool_symbol = " pTUSD".to_string();
    assert_invalid(kovan.validate("kovan"), "kovan.lendable_tokens[0].pool_symbol must be trimmed")
}

#[test]
fn external_lending_requires_lending_addresses() -> TestResult {
    let mut kovan = common::kovan()?;
    kovan.lendable_tokens[0].unused_funds_lending_contract = zero_address()?;
    assert_invalid(
        kovan.validate("kovan"),
        "kovan.lendable_tokens[0].unused_funds_lending_contract must not be the zero address",
    )
}

#[test]
fn idle_funds_mode_none_tolerates_zero_lending_addresses() -> TestResult {
    let mut kovan = common::kovan()?;
    let token = &mut kovan.lendable_tokens[0];
    token.unused_funds_lending_mode = UnusedFundsLendingMode::None;
    token.unused_funds_lending_contract = zero_address()?;
    token.unused_funds_lending_token = zero_address()?;
    kovan.validate("kovan").map_err(|err| err.to_string())
}

#[test]
fn duplicate_token_symbols_are_rejected() -> TestResult {
    let mut mainnet = common::mainnet()?;
    let mut twin = mainnet.lendable_tokens[0].clone();
    twin.token_contract = common::kovan()?.lendable_tokens[0].token_contract.clone();
    twin.pool_symbol = "pUSDT2".to_string();
    mainnet.lendable_tokens.push(twin);
    assert_invalid(mainnet.validate("mainnet"), "duplicate mainnet.lendable_tokens.symbol: USDT")
}

#[test]
fn duplicate_token_contracts_are_rejected_case_insensitively() -> TestResult {
    let mut mainnet = common::mainnet()?;
    let mut twin = mainnet.lendable_tokens[0].clone();
    let upper = format!("0x{}", twin.token_contract.as_str()[2 ..].to_ascii_uppercase());
    twin.token_contract = Address::parse(&upper).map_err(|err| err.to_string())?;
    twin.symbol = "USDT2".to_string();
    twin.pool_symbol = "pUSDT2".to_string();
    mainnet.lendable_tokens.push(twin);
    assert_invalid(mainnet.validate("mainnet"), "duplicate mainnet.lendable_tokens.token_contract")
}

#[test]
fn from_networks_rejects_duplicate_keys() -> TestResult {
    let result = Registry::from_networks([
        ("kovan".to_string(), common::kovan()?),
        ("kovan".to_string(), common::kovan()?),
    ]);
    match result {
        Err(RegistryError::DuplicateNetwork(key)) if key == "kovan" => Ok(()),
        Err(other) => Err(format!("unexpected error: {other}")),
        Ok(_) => Err("duplicate keys must be rejected".to_string()),
    }
}

#[test]
fn from_networks_rejects_duplicate_chain_ids() -> TestResult {
    let result = Registry::from_networks([
        ("kovan".to_string(), common::kovan()?),
        ("kovan-fork".to_string(), common::kovan()?),
    ]);
    assert_invalid(result, "duplicate network_id 13371337")
}

#[test]
fn from_networks_rejects_malformed_keys() -> TestResult {
    assert_invalid(
        Registry::from_networks([("Mainnet".to_string(), common::mainnet()?)]),
        "network key Mainnet must contain only a-z, 0-9 and '-'",
    )?;
    assert_invalid(
        Registry::from_networks([(String::new(), common::mainnet()?)]),
        "network key must be set",
    )?;
    assert_invalid(
        Registry::from_networks([("a".repeat(65), common::mainnet()?)]),
        "exceeds 64 characters",
    )
}

#[test]
fn from_networks_rejects_empty_registry() -> TestResult {
    let empty: Vec<(String, DeploymentParameters)> = Vec::new();
    assert_invalid(Registry::from_networks(empty), "registry must define at least one network")
}

#[test]
fn from_networks_accepts_additional_networks() -> TestResult {
    let mut fork = common::mainnet()?;
    fork.network_id = "31337".to_string();
    fork.network_name = "BNPL LOCAL FORK".to_string();
    let registry = Registry::from_networks([
        ("mainnet".to_string(), common::mainnet()?),
        ("mainnet-fork".to_string(), fork),
    ])
    .map_err(|err| err.to_string())?;
    let keys: Vec<&str> = registry.networks().collect();
    if keys != vec!["mainnet", "mainnet-fork"] {
        return Err(format!("unexpected keys {}", keys.join(",")));
    }
    Ok(())
}
