// crates/bnpl-deploy-config/src/params.rs
// ============================================================================
// Module: Deployment Parameters
// Description: Per-network deployment record and per-token lending metadata.
// Purpose: Typed shape of everything a deployment reads for one network.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! [`DeploymentParameters`] is the record a deployment tool selects by
//! network key. Field names serialize in camelCase so the exported shape
//! matches what existing deployment scripts expect. Validation is
//! fail-closed: the first violated rule is reported with its field path.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeSet;

use serde::Deserialize;
use serde::Serialize;

use crate::address::Address;
use crate::address::RoleHolder;
use crate::registry::RegistryError;
use crate::units::FeeTier;
use crate::units::MAX_TOKEN_DECIMALS;
use crate::units::TokenAmount;

// ============================================================================
// SECTION: Lending Mode
// ============================================================================

/// Strategy for depositing idle pool funds into an external yield venue.
///
/// # Invariants
/// - Serialized as its integer code (`0` or `1`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum UnusedFundsLendingMode {
    /// Idle funds stay in the pool.
    None,
    /// Idle funds are lent to an external lending protocol.
    ExternalLending,
}

impl UnusedFundsLendingMode {
    /// Returns the integer code for the mode.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::None => 0,
            Self::ExternalLending => 1,
        }
    }

    /// Resolves a mode from its integer code.
    #[must_use]
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::None),
            1 => Some(Self::ExternalLending),
            _ => None,
        }
    }

    /// Returns a stable label for the mode.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::ExternalLending => "external_lending",
        }
    }
}

impl TryFrom<u8> for UnusedFundsLendingMode {
    type Error = String;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::from_code(code).ok_or_else(|| format!("unknown unused funds lending mode {code}"))
    }
}

impl From<UnusedFundsLendingMode> for u8 {
    fn from(mode: UnusedFundsLendingMode) -> Self {
        mode.code()
    }
}

// ============================================================================
// SECTION: Lendable Token
// ============================================================================

/// Deployment metadata for one lendable asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct LendableTokenParameters {
    /// Whether the asset is enabled for lending.
    pub enabled: bool,
    /// ERC20 contract of the underlying asset.
    pub token_contract: Address,
    /// Swap venue used to price and swap the asset.
    pub swap_market: Address,
    /// Fee tier of the swap venue pool.
    pub swap_market_pool_fee: FeeTier,
    /// Decimal precision of the asset.
    pub decimals: u8,
    /// One whole token in smallest units (`10^decimals`).
    pub value_multiplier: TokenAmount,
    /// Strategy for idle funds.
    pub unused_funds_lending_mode: UnusedFundsLendingMode,
    /// External lending pool receiving idle funds.
    pub unused_funds_lending_contract: Address,
    /// Receipt token minted by the external lending pool.
    pub unused_funds_lending_token: Address,
    /// Display symbol of the underlying asset.
    pub symbol: String,
    /// Display symbol of the wrapped pool token.
    pub pool_symbol: String,
}

impl LendableTokenParameters {
    /// Validates the token entry; `path` prefixes error messages.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Invalid`] on the first violated rule.
    pub fn validate(&self, path: &str) -> Result<(), RegistryError> {
        validate_symbol(&self.symbol, &format!("{path}.symbol"))?;
        validate_symbol(&self.pool_symbol, &format!("{path}.pool_symbol"))?;
        require_non_zero(&self.token_contract, &format!("{path}.token_contract"))?;
        require_non_zero(&self.swap_market, &format!("{path}.swap_market"))?;
        if self.decimals > MAX_TOKEN_DECIMALS {
            return Err(RegistryError::Invalid(format!(
                "{path}.decimals {} exceeds max {MAX_TOKEN_DECIMALS}",
                self.decimals
            )));
        }
        let expected = TokenAmount::one_token(self.decimals);
        if self.value_multiplier != expected {
            return Err(RegistryError::Invalid(format!(
                "{path}.value_multiplier {} must equal 10^{} ({expected})",
                self.value_multiplier, self.decimals
            )));
        }
        if self.unused_funds_lending_mode == UnusedFundsLendingMode::ExternalLending {
            require_non_zero(
                &self.unused_funds_lending_contract,
                &format!("{path}.unused_funds_lending_contract"),
            )?;
            require_non_zero(
                &self.unused_funds_lending_token,
                &format!("{path}.unused_funds_lending_token"),
            )?;
        }
        Ok(())
    }
}

// ============================================================================
// SECTION: Deployment Record
// ============================================================================

/// Deployment parameters for one network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DeploymentParameters {
    /// Chain identifier (base-10).
    pub network_id: String,
    /// Human-readable network label.
    pub network_name: String,
    /// Protocol staking token (BNPL).
    pub staking_token_address: Address,
    /// Minimum stake in staking-token smallest units.
    pub min_bonding_amount: TokenAmount,
    /// Seconds before an overdue loan is penalized.
    pub loan_overdue_grace_period: u64,
    /// Seconds over which rewards vest by default.
    pub default_reward_duration: u64,
    /// Reward distributor administrator.
    pub distributor_admin: RoleHolder,
    /// Bank node manager administrator.
    pub manager_admin: RoleHolder,
    /// Account allowed to configure the bank node manager.
    pub bank_node_manager_configurator: RoleHolder,
    /// Lendable assets in deployment order.
    pub lendable_tokens: Vec<LendableTokenParameters>,
}

impl DeploymentParameters {
    /// Returns the lendable token with the given symbol.
    #[must_use]
    pub fn lendable_token(&self, symbol: &str) -> Option<&LendableTokenParameters> {
        self.lendable_tokens.iter().find(|token| token.symbol == symbol)
    }

    /// Iterates over enabled lendable tokens in deployment order.
    pub fn enabled_lendable_tokens(&self) -> impl Iterator<Item = &LendableTokenParameters> {
        self.lendable_tokens.iter().filter(|token| token.enabled)
    }

    /// Returns every concrete address the record references.
    ///
    /// Symbolic role holders are skipped.
    #[must_use]
    pub fn addresses(&self) -> Vec<&Address> {
        let mut addresses = vec![&self.staking_token_address];
        addresses.extend(
            [&self.distributor_admin, &self.manager_admin, &self.bank_node_manager_configurator]
                .into_iter()
                .filter_map(RoleHolder::address),
        );
        for token in &self.lendable_tokens {
            addresses.extend([
                &token.token_contract,
                &token.swap_market,
                &token.unused_funds_lending_contract,
                &token.unused_funds_lending_token,
            ]);
        }
        addresses
    }

    /// Validates the record; `network` prefixes error messages.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Invalid`] on the first violated rule.
    pub fn validate(&self, network: &str) -> Result<(), RegistryError> {
        if self.network_id.is_empty() || !self.network_id.bytes().all(|b| b.is_ascii_digit()) {
            return Err(RegistryError::Invalid(format!(
                "{network}.network_id must be a base-10 chain id, got '{}'",
                self.network_id
            )));
        }
        if self.network_name.trim().is_empty() {
            return Err(RegistryError::Invalid(format!("{network}.network_name must be set")));
        }
        require_non_zero(&self.staking_token_address, &format!("{network}.staking_token_address"))?;
        if self.min_bonding_amount.is_zero() {
            return Err(RegistryError::Invalid(format!(
                "{network}.min_bonding_amount must be greater than zero"
            )));
        }
        if self.loan_overdue_grace_period == 0 {
            return Err(RegistryError::Invalid(format!(
                "{network}.loan_overdue_grace_period must be greater than zero"
            )));
        }
        if self.default_reward_duration == 0 {
            return Err(RegistryError::Invalid(format!(
                "{network}.default_reward_duration must be greater than zero"
            )));
        }
        if self.lendable_tokens.is_empty() {
            return Err(RegistryError::Invalid(format!(
                "{network}.lendable_tokens must not be empty"
            )));
        }
        let mut contracts = BTreeSet::new();
        let mut symbols = BTreeSet::new();
        let mut pool_symbols = BTreeSet::new();
        for (index, token) in self.lendable_tokens.iter().enumerate() {
            let path = format!("{network}.lendable_tokens[{index}]");
            token.validate(&path)?;
            if !contracts.insert(token.token_contract.to_lowercase()) {
                return Err(RegistryError::Invalid(format!(
                    "duplicate {network}.lendable_tokens.token_contract: {}",
                    token.token_contract
                )));
            }
            if !symbols.insert(token.symbol.as_str()) {
                return Err(RegistryError::Invalid(format!(
                    "duplicate {network}.lendable_tokens.symbol: {}",
                    token.symbol
                )));
            }
            if !pool_symbols.insert(token.pool_symbol.as_str()) {
                return Err(RegistryError::Invalid(format!(
                    "duplicate {network}.lendable_tokens.pool_symbol: {}",
                    token.pool_symbol
                )));
            }
        }
        Ok(())
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Rejects the all-zero address for a required field.
fn require_non_zero(address: &Address, path: &str) -> Result<(), RegistryError> {
    if address.is_zero() {
        return Err(RegistryError::Invalid(format!("{path} must not be the zero address")));
    }
    Ok(())
}

/// Rejects empty or padded display symbols.
fn validate_symbol(symbol: &str, path: &str) -> Result<(), RegistryError> {
    if symbol.is_empty() {
        return Err(RegistryError::Invalid(format!("{path} must be set")));
    }
    if symbol.trim() != symbol {
        return Err(RegistryError::Invalid(format!("{path} must be trimmed")));
    }
    Ok(())
}
