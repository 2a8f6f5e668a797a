// crates/bnpl-deploy-cli/src/main_tests.rs
// ============================================================================
// Module: CLI Main Helpers Tests
// Description: Unit tests for argument parsing and record rendering.
// Purpose: Ensure CLI flags map to the intended commands and encodings.
// Dependencies: bnpl-deploy-cli main helpers
// ============================================================================

//! ## Overview
//! Validates clap wiring and the JSON, TOML, and text renderers used by
//! `show`, independently of process spawning.

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
    reason = "Test-only output and panic-based assertions are permitted."
)]

// ============================================================================
// SECTION: Imports
// ============================================================================

use bnpl_deploy_config::DeploymentParameters;
use bnpl_deploy_config::Registry;
use clap::Parser;

use super::Cli;
use super::Commands;
use super::ListFormat;
use super::RecordFormat;
use super::network_summaries;
use super::output_error;
use super::render_record;
use super::render_record_text;

// ============================================================================
// SECTION: Helpers
// ============================================================================

fn registry() -> &'static Registry {
    Registry::builtin().expect("built-in registry")
}

fn mainnet() -> &'static DeploymentParameters {
    registry().require("mainnet").expect("mainnet record")
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[test]
fn show_parses_network_format_and_out() {
    let cli = Cli::try_parse_from([
        "bnpl-deploy",
        "show",
        "--network",
        "kovan",
        "--format",
        "toml",
        "--out",
        "kovan.toml",
    ])
    .expect("parse show");
    let Some(Commands::Show(command)) = cli.command else {
        panic!("expected show command");
    };
    assert_eq!(command.network.as_deref(), Some("kovan"));
    assert_eq!(command.format, RecordFormat::Toml);
    assert_eq!(command.out.as_deref().and_then(|path| path.to_str()), Some("kovan.toml"));
}

#[test]
fn defaults_apply_when_flags_are_omitted() {
    let cli = Cli::try_parse_from(["bnpl-deploy", "show"]).expect("parse show");
    let Some(Commands::Show(command)) = cli.command else {
        panic!("expected show command");
    };
    assert!(command.network.is_none());
    assert_eq!(command.format, RecordFormat::Json);

    let cli = Cli::try_parse_from(["bnpl-deploy", "networks"]).expect("parse networks");
    let Some(Commands::Networks(command)) = cli.command else {
        panic!("expected networks command");
    };
    assert_eq!(command.format, ListFormat::Text);
}

#[test]
fn version_flag_is_global() {
    let cli = Cli::try_parse_from(["bnpl-deploy", "networks", "--version"]).expect("parse");
    assert!(cli.show_version);
}

#[test]
fn unknown_format_is_rejected() {
    assert!(Cli::try_parse_from(["bnpl-deploy", "show", "--format", "yaml"]).is_err());
}

#[test]
fn docs_check_requires_out() {
    assert!(Cli::try_parse_from(["bnpl-deploy", "docs", "--check"]).is_err());
    let cli = Cli::try_parse_from(["bnpl-deploy", "docs", "--check", "--out", "networks.md"])
        .expect("parse docs");
    let Some(Commands::Docs(command)) = cli.command else {
        panic!("expected docs command");
    };
    assert!(command.check);
}

#[test]
fn json_rendering_is_canonical() {
    let bytes = render_record("mainnet", mainnet(), RecordFormat::Json).expect("render json");
    let text = String::from_utf8(bytes).expect("utf8");
    assert!(text.ends_with('\n'));
    assert!(!text.trim_end().contains('\n'), "canonical json is a single line");
    // Keys are sorted, so bankNodeManagerConfigurator leads the object.
    assert!(text.starts_with("{\"bankNodeManagerConfigurator\":\"deployer\""));
    let decoded: DeploymentParameters = serde_json::from_str(&text).expect("decode json");
    assert_eq!(&decoded, mainnet());
}

#[test]
fn toml_rendering_round_trips() {
    let bytes = render_record("mainnet", mainnet(), RecordFormat::Toml).expect("render toml");
    let text = String::from_utf8(bytes).expect("utf8");
    assert!(text.contains("minBondingAmount = \"2000000000000000000000000\""));
    let decoded: DeploymentParameters = toml::from_str(&text).expect("decode toml");
    assert_eq!(&decoded, mainnet());
}

#[test]
fn text_rendering_lists_every_token_field() {
    let text = render_record_text("mainnet", mainnet());
    assert!(text.starts_with("network: mainnet\nnetworkId: 1\n"));
    assert!(text.contains("lendableTokens[0].symbol: USDT\n"));
    assert!(text.contains("lendableTokens[0].valueMultiplier: 1000000\n"));
    assert!(text.contains("lendableTokens[0].unusedFundsLendingMode: external_lending\n"));
}

#[test]
fn summaries_follow_key_order() {
    let summaries = network_summaries(registry());
    let keys: Vec<&str> = summaries.iter().map(|summary| summary.network).collect();
    assert_eq!(keys, vec!["kovan", "mainnet"]);
    assert_eq!(summaries[1].lendable_tokens, vec!["USDT"]);
}

#[test]
fn output_errors_name_the_stream() {
    let error = std::io::Error::other("closed");
    assert_eq!(output_error("stdout", &error), "failed to write to stdout: closed");
}
