// crates/bnpl-deploy-config/tests/proptest_units.rs
// ============================================================================
// Module: Token Unit Property-Based Tests
// Description: Property tests for decimal scaling and address parsing.
// Purpose: Detect overflow and parsing gaps across wide input ranges.
// ============================================================================

//! Property-based tests for token unit and address invariants.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only assertions and helpers are permitted."
)]

use bnpl_deploy_config::Address;
use bnpl_deploy_config::TokenAmount;
use bnpl_deploy_config::scale_to_token_units;
use bnpl_deploy_config::units::MAX_TOKEN_DECIMALS;
use proptest::prelude::*;

proptest! {
    #[test]
    fn scaling_appends_decimal_zeros(
        amount in 1_u64 ..,
        decimals in 0_u8 ..= MAX_TOKEN_DECIMALS,
    ) {
        let scaled = scale_to_token_units(amount, decimals);
        let expected = format!("{amount}{}", "0".repeat(usize::from(decimals)));
        prop_assert_eq!(scaled.to_string(), expected);
    }

    #[test]
    fn scaling_is_monotonic_in_amount(
        amount in 0_u64 .. u64::MAX,
        decimals in 0_u8 ..= MAX_TOKEN_DECIMALS,
    ) {
        let lower = scale_to_token_units(amount, decimals);
        let upper = scale_to_token_units(amount + 1, decimals);
        prop_assert!(lower < upper);
    }

    #[test]
    fn token_amount_string_encoding_is_lossless(amount in any::<u64>(), decimals in 0_u8 ..= 30) {
        let scaled = scale_to_token_units(amount, decimals);
        let json = serde_json::to_string(&scaled).unwrap();
        let decoded: TokenAmount = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(decoded, scaled);
    }

    #[test]
    fn single_case_addresses_always_parse(body in "[0-9a-f]{40}") {
        let lower = format!("0x{body}");
        let upper = format!("0x{}", body.to_ascii_uppercase());
        let address = Address::parse(&lower).unwrap();
        prop_assert_eq!(address.as_str(), lower.as_str());
        prop_assert!(Address::parse(&upper).unwrap().eq_ignore_case(&address));
    }

    #[test]
    fn checksummed_form_parses_and_names_the_same_account(body in "[0-9a-f]{40}") {
        let address = Address::parse(&format!("0x{body}")).unwrap();
        let checksummed = Address::parse(&address.to_checksummed()).unwrap();
        prop_assert!(checksummed.eq_ignore_case(&address));
        prop_assert_eq!(checksummed.to_checksummed(), checksummed.as_str());
    }

    #[test]
    fn address_parsing_never_panics(input in ".{0,64}") {
        let _ = Address::parse(&input);
    }
}
