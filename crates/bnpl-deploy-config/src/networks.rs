// crates/bnpl-deploy-config/src/networks.rs
// ============================================================================
// Module: Network Definitions
// Description: Baked-in address book and deployment records per network.
// Purpose: Declare the literal deployment data for kovan and mainnet.
// Dependencies: crate::address, crate::params, crate::units
// ============================================================================

//! ## Overview
//! Literal deployment data. Address constants are kept as raw strings and
//! parsed when a record is built, so a typo surfaces as a
//! [`RegistryError`] during registry construction rather than at deploy
//! time.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::address::Address;
use crate::address::RoleHolder;
use crate::params::DeploymentParameters;
use crate::params::LendableTokenParameters;
use crate::params::UnusedFundsLendingMode;
use crate::registry::RegistryError;
use crate::units::BNPL_TOKEN_DECIMALS;
use crate::units::ONE_MONTH;
use crate::units::ONE_WEEK;
use crate::units::TUSD_TOKEN_DECIMALS;
use crate::units::USDT_TOKEN_DECIMALS;
use crate::units::fee_tier;
use crate::units::scale_to_token_units;

// ============================================================================
// SECTION: Network Keys
// ============================================================================

/// Registry key of the Kovan test network.
pub const KOVAN: &str = "kovan";
/// Registry key of Ethereum mainnet.
pub const MAINNET: &str = "mainnet";

// ============================================================================
// SECTION: Kovan Address Book
// ============================================================================

/// BNPL staking token on Kovan.
pub const BNPL_TOKEN_ADDRESS_KOVAN: &str = "0x0c6ec7437657cb501ae35718e5426815e83e9e00";
/// TUSD on Kovan.
pub const TUSD_KOVAN: &str = "0x016750AC630F711882812f24Dba6c95b9D35856d";
/// Aave interest-bearing TUSD on Kovan.
pub const A_TUSD_KOVAN: &str = "0x39914AdBe5fDbC2b9ADeedE8Bcd444b20B039204";
/// `SushiSwap` router on Kovan.
pub const SUSHISWAP_KOVAN: &str = "0x1b02dA8Cb0d097eB8D57A175b88c7D8b47997506";
/// Aave lending pool on Kovan.
pub const AAVE_LENDING_POOL_KOVAN: &str = "0xE0fBa4Fc209b4948668006B2bE61711b7f465bAe";
/// Staked AAVE (stkAAVE) on Kovan.
pub const STAKE_AAVE_KOVAN: &str = "0xf2fbf9a6710afda1c4aab2e922de9d69e0c97fd2";
/// AAVE token on Kovan.
pub const AAVE_KOVAN: &str = "0xB597cd8D3217ea6477232F9217fa70837ff667Af";

// ============================================================================
// SECTION: Mainnet Address Book
// ============================================================================

/// BNPL staking token on mainnet.
pub const BNPL_TOKEN_ADDRESS_MAINNET: &str = "0x84d821F7FbDD595c4C4A50842913e6b1E07d7a53";
/// USDT on mainnet.
pub const USDT_MAINNET: &str = "0xdac17f958d2ee523a2206206994597c13d831ec7";
/// Aave interest-bearing USDT on mainnet.
pub const A_USDT_MAINNET: &str = "0x3ed3b47dd13ec9a98b44e6204a523e766b225811";
/// `SushiSwap` router on mainnet.
pub const SUSHISWAP_MAINNET: &str = "0xd9e1cE17f2641f24aE83637ab66a2cca9C378B9F";
/// Aave lending pool on mainnet.
pub const AAVE_LENDING_POOL_MAINNET: &str = "0x7d2768dE32b0b80b7a3454c06BdAc94A69DDc7A9";

/// Default pool fee tier used on every swap market.
const DEFAULT_POOL_FEE: u32 = 3000;

// ============================================================================
// SECTION: Records
// ============================================================================

/// Builds every baked-in `(key, record)` pair.
///
/// # Errors
///
/// Returns [`RegistryError::Address`] when an address literal is malformed.
pub fn builtin_networks() -> Result<Vec<(String, DeploymentParameters)>, RegistryError> {
    Ok(vec![(KOVAN.to_string(), kovan()?), (MAINNET.to_string(), mainnet()?)])
}

/// Deployment record for the Kovan test network.
///
/// # Errors
///
/// Returns [`RegistryError::Address`] when an address literal is malformed.
pub fn kovan() -> Result<DeploymentParameters, RegistryError> {
    Ok(DeploymentParameters {
        network_id: "13371337".to_string(),
        network_name: "BNPL TESTING".to_string(),
        staking_token_address: Address::parse(BNPL_TOKEN_ADDRESS_KOVAN)?,
        min_bonding_amount: scale_to_token_units(100_000, BNPL_TOKEN_DECIMALS),
        loan_overdue_grace_period: ONE_WEEK,
        default_reward_duration: ONE_WEEK,
        distributor_admin: RoleHolder::deployer(),
        manager_admin: RoleHolder::deployer(),
        bank_node_manager_configurator: RoleHolder::deployer(),
        lendable_tokens: vec![LendableTokenParameters {
            enabled: true,
            token_contract: Address::parse(TUSD_KOVAN)?,
            swap_market: Address::parse(SUSHISWAP_KOVAN)?,
            swap_market_pool_fee: fee_tier(DEFAULT_POOL_FEE),
            decimals: TUSD_TOKEN_DECIMALS,
            value_multiplier: scale_to_token_units(1, TUSD_TOKEN_DECIMALS),
            unused_funds_lending_mode: UnusedFundsLendingMode::ExternalLending,
            unused_funds_lending_contract: Address::parse(AAVE_LENDING_POOL_KOVAN)?,
            unused_funds_lending_token: Address::parse(A_TUSD_KOVAN)?,
            symbol: "TUSD".to_string(),
            pool_symbol: "pTUSD".to_string(),
        }],
    })
}

/// Deployment record for Ethereum mainnet.
///
/// # Errors
///
/// Returns [`RegistryError::Address`] when an address literal is malformed.
pub fn mainnet() -> Result<DeploymentParameters, RegistryError> {
    Ok(DeploymentParameters {
        network_id: "1".to_string(),
        network_name: "BNPL MAINNET".to_string(),
        staking_token_address: Address::parse(BNPL_TOKEN_ADDRESS_MAINNET)?,
        min_bonding_amount: scale_to_token_units(2_000_000, BNPL_TOKEN_DECIMALS),
        loan_overdue_grace_period: ONE_WEEK,
        default_reward_duration: ONE_MONTH,
        distributor_admin: RoleHolder::deployer(),
        manager_admin: RoleHolder::deployer(),
        bank_node_manager_configurator: RoleHolder::deployer(),
        lendable_tokens: vec![LendableTokenParameters {
            enabled: true,
            token_contract: Address::parse(USDT_MAINNET)?,
            swap_market: Address::parse(SUSHISWAP_MAINNET)?,
            swap_market_pool_fee: fee_tier(DEFAULT_POOL_FEE),
            decimals: USDT_TOKEN_DECIMALS,
            value_multiplier: scale_to_token_units(1, USDT_TOKEN_DECIMALS),
            unused_funds_lending_mode: UnusedFundsLendingMode::ExternalLending,
            unused_funds_lending_contract: Address::parse(AAVE_LENDING_POOL_MAINNET)?,
            unused_funds_lending_token: Address::parse(A_USDT_MAINNET)?,
            symbol: "USDT".to_string(),
            pool_symbol: "pUSDT".to_string(),
        }],
    })
}
