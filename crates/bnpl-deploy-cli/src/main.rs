// crates/bnpl-deploy-cli/src/main.rs
// ============================================================================
// Module: BNPL Deploy CLI Entry Point
// Description: Command dispatcher for inspecting the deployment registry.
// Purpose: Read-only access to network records, schema, and docs artifacts.
// Dependencies: bnpl-deploy-config, clap, serde, serde_jcs, thiserror, toml.
// ============================================================================

//! ## Overview
//! The `bnpl-deploy` CLI lists supported networks, exports a single
//! deployment record as canonical JSON, TOML, or text, runs the registry
//! validation pass, and emits the JSON schema and Markdown docs. Nothing
//! here mutates the registry; every command reads the built-in records.

// ============================================================================
// SECTION: Modules
// ============================================================================

#[cfg(test)]
mod main_tests;

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;
use std::process::ExitCode;

use bnpl_deploy_config::DeploymentParameters;
use bnpl_deploy_config::Registry;
use bnpl_deploy_config::deployment_parameters_schema;
use bnpl_deploy_config::registry_docs_markdown;
use bnpl_deploy_config::registry_schema;
use bnpl_deploy_config::resolve_network;
use bnpl_deploy_config::resolve_network_with;
use bnpl_deploy_config::verify_registry_docs;
use clap::ArgAction;
use clap::Args;
use clap::CommandFactory;
use clap::Parser;
use clap::Subcommand;
use clap::ValueEnum;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

// ============================================================================
// SECTION: CLI Types
// ============================================================================

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(name = "bnpl-deploy", disable_help_subcommand = true, disable_version_flag = true)]
struct Cli {
    /// Print version information and exit.
    #[arg(long = "version", action = ArgAction::SetTrue, global = true)]
    show_version: bool,
    /// Selected subcommand to execute.
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Supported CLI subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// List supported networks.
    Networks(NetworksCommand),
    /// Export the deployment record for one network.
    Show(ShowCommand),
    /// Run the registry validation pass.
    Validate(ValidateCommand),
    /// Emit the JSON schema for exported records.
    Schema(SchemaCommand),
    /// Emit the Markdown reference for every network.
    Docs(DocsCommand),
}

/// Arguments for `networks`.
#[derive(Args, Debug)]
struct NetworksCommand {
    /// Output format.
    #[arg(long, value_enum, default_value_t = ListFormat::Text)]
    format: ListFormat,
}

/// Arguments for `show`.
#[derive(Args, Debug)]
struct ShowCommand {
    /// Network key (overrides `BNPL_DEPLOY_NETWORK`).
    #[arg(long, value_name = "KEY")]
    network: Option<String>,
    /// Output format.
    #[arg(long, value_enum, default_value_t = RecordFormat::Json)]
    format: RecordFormat,
    /// Write output to a file instead of stdout.
    #[arg(long, value_name = "PATH")]
    out: Option<PathBuf>,
}

/// Arguments for `validate`.
#[derive(Args, Debug)]
struct ValidateCommand {
    /// Validate a single network instead of the whole registry.
    #[arg(long, value_name = "KEY")]
    network: Option<String>,
}

/// Arguments for `schema`.
#[derive(Args, Debug)]
struct SchemaCommand {
    /// Emit the single-record schema instead of the registry schema.
    #[arg(long, action = ArgAction::SetTrue)]
    record: bool,
    /// Write output to a file instead of stdout.
    #[arg(long, value_name = "PATH")]
    out: Option<PathBuf>,
}

/// Arguments for `docs`.
#[derive(Args, Debug)]
struct DocsCommand {
    /// Write output to a file instead of stdout.
    #[arg(long, value_name = "PATH")]
    out: Option<PathBuf>,
    /// Verify the file at `--out` matches instead of writing it.
    #[arg(long, action = ArgAction::SetTrue, requires = "out")]
    check: bool,
}

/// Output formats for network listings.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum ListFormat {
    /// Canonical JSON array.
    Json,
    /// One line per network.
    Text,
}

/// Output formats for a single record.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum RecordFormat {
    /// Canonical JSON (RFC 8785).
    Json,
    /// Pretty-printed TOML.
    Toml,
    /// Human-readable `field: value` lines.
    Text,
}

/// Listing entry for `networks --format json`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct NetworkSummary<'a> {
    /// Network key.
    network: &'a str,
    /// Chain identifier.
    network_id: &'a str,
    /// Human-readable network label.
    network_name: &'a str,
    /// Lendable token symbols in deployment order.
    lendable_tokens: Vec<&'a str>,
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// CLI error wrapper for user-facing messages.
#[derive(Debug, Error)]
#[error("{message}")]
struct CliError {
    /// Human-readable error message.
    message: String,
}

impl CliError {
    /// Constructs a new [`CliError`] from a message.
    const fn new(message: String) -> Self {
        Self {
            message,
        }
    }
}

/// CLI result alias for fallible operations.
type CliResult<T> = Result<T, CliError>;

// ============================================================================
// SECTION: Entry Point
// ============================================================================

/// CLI entry point returning an exit code.
fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(err) => emit_error(&err.to_string()),
    }
}

/// Executes the CLI command dispatcher.
fn run() -> CliResult<ExitCode> {
    let cli = Cli::parse();

    if cli.show_version {
        let version = env!("CARGO_PKG_VERSION");
        write_stdout_line(&format!("bnpl-deploy {version}"))
            .map_err(|err| CliError::new(output_error("stdout", &err)))?;
        return Ok(ExitCode::SUCCESS);
    }

    let Some(command) = cli.command else {
        show_help()?;
        return Ok(ExitCode::SUCCESS);
    };

    match command {
        Commands::Networks(command) => command_networks(&command),
        Commands::Show(command) => command_show(&command),
        Commands::Validate(command) => command_validate(&command),
        Commands::Schema(command) => command_schema(&command),
        Commands::Docs(command) => command_docs(&command),
    }
}

/// Prints top-level help.
fn show_help() -> CliResult<()> {
    let mut command = Cli::command();
    command.print_help().map_err(|err| CliError::new(output_error("stdout", &err)))?;
    write_stdout_line("").map_err(|err| CliError::new(output_error("stdout", &err)))?;
    Ok(())
}

/// Loads the built-in registry.
fn load_registry() -> CliResult<&'static Registry> {
    Registry::builtin().map_err(|err| CliError::new(format!("registry load failed: {err}")))
}

// ============================================================================
// SECTION: Registry Commands
// ============================================================================

/// Executes `networks`.
fn command_networks(command: &NetworksCommand) -> CliResult<ExitCode> {
    let registry = load_registry()?;
    match command.format {
        ListFormat::Json => {
            let value = serde_json::to_value(network_summaries(registry))
                .map_err(|err| CliError::new(format!("json encoding failed: {err}")))?;
            write_json_value(&value)?;
        }
        ListFormat::Text => {
            for summary in network_summaries(registry) {
                write_stdout_line(&format!(
                    "{}\t{}\t{}\t{}",
                    summary.network,
                    summary.network_id,
                    summary.network_name,
                    summary.lendable_tokens.join(",")
                ))
                .map_err(|err| CliError::new(output_error("stdout", &err)))?;
            }
        }
    }
    Ok(ExitCode::SUCCESS)
}

/// Executes `show`.
fn command_show(command: &ShowCommand) -> CliResult<ExitCode> {
    let network = resolve_network(command.network.as_deref())
        .map_err(|err| CliError::new(err.to_string()))?;
    let registry = load_registry()?;
    let params = registry.require(&network).map_err(|err| CliError::new(err.to_string()))?;
    let bytes = render_record(&network, params, command.format)?;
    write_output(&bytes, command.out.as_deref())?;
    Ok(ExitCode::SUCCESS)
}

/// Executes `validate`.
fn command_validate(command: &ValidateCommand) -> CliResult<ExitCode> {
    let registry = load_registry()?;
    let message = match command.network.as_deref() {
        Some(explicit) => {
            // Environment selection is not consulted when validating.
            let network = resolve_network_with(Some(explicit), None)
                .map_err(|err| CliError::new(err.to_string()))?;
            let params = registry.require(&network).map_err(|err| CliError::new(err.to_string()))?;
            params.validate(&network).map_err(|err| CliError::new(err.to_string()))?;
            format!("network {network} ok")
        }
        None => {
            registry.validate().map_err(|err| CliError::new(err.to_string()))?;
            let keys: Vec<&str> = registry.networks().collect();
            format!("registry ok: {}", keys.join(", "))
        }
    };
    write_stdout_line(&message).map_err(|err| CliError::new(output_error("stdout", &err)))?;
    Ok(ExitCode::SUCCESS)
}

// ============================================================================
// SECTION: Artifact Commands
// ============================================================================

/// Executes `schema`.
fn command_schema(command: &SchemaCommand) -> CliResult<ExitCode> {
    let schema = if command.record { deployment_parameters_schema() } else { registry_schema() };
    match command.out.as_deref() {
        Some(path) => write_output(&canonical_json_bytes(&schema)?, Some(path))?,
        None => write_json_value(&schema)?,
    }
    Ok(ExitCode::SUCCESS)
}

/// Executes `docs`.
fn command_docs(command: &DocsCommand) -> CliResult<ExitCode> {
    if command.check {
        let path = command
            .out
            .as_deref()
            .ok_or_else(|| CliError::new("--check requires --out".to_string()))?;
        verify_registry_docs(path).map_err(|err| CliError::new(err.to_string()))?;
        write_stdout_line(&format!("docs up to date: {}", path.display()))
            .map_err(|err| CliError::new(output_error("stdout", &err)))?;
        return Ok(ExitCode::SUCCESS);
    }
    let docs = registry_docs_markdown(load_registry()?);
    write_output(docs.as_bytes(), command.out.as_deref())?;
    Ok(ExitCode::SUCCESS)
}

// ============================================================================
// SECTION: Rendering
// ============================================================================

/// Builds listing entries in key order.
fn network_summaries(registry: &Registry) -> Vec<NetworkSummary<'_>> {
    registry
        .iter()
        .map(|(network, params)| NetworkSummary {
            network,
            network_id: &params.network_id,
            network_name: &params.network_name,
            lendable_tokens: params
                .lendable_tokens
                .iter()
                .map(|token| token.symbol.as_str())
                .collect(),
        })
        .collect()
}

/// Renders a record in the requested format, newline-terminated.
fn render_record(
    network: &str,
    params: &DeploymentParameters,
    format: RecordFormat,
) -> CliResult<Vec<u8>> {
    match format {
        RecordFormat::Json => canonical_json_bytes(params),
        RecordFormat::Toml => toml::to_string_pretty(params)
            .map(String::into_bytes)
            .map_err(|err| CliError::new(format!("toml encoding failed: {err}"))),
        RecordFormat::Text => Ok(render_record_text(network, params).into_bytes()),
    }
}

/// Renders a record as `field: value` lines.
fn render_record_text(network: &str, params: &DeploymentParameters) -> String {
    let mut out = format!("network: {network}\n");
    out.push_str(&format!("networkId: {}\n", params.network_id));
    out.push_str(&format!("networkName: {}\n", params.network_name));
    out.push_str(&format!("stakingTokenAddress: {}\n", params.staking_token_address));
    out.push_str(&format!("minBondingAmount: {}\n", params.min_bonding_amount));
    out.push_str(&format!("loanOverdueGracePeriod: {}\n", params.loan_overdue_grace_period));
    out.push_str(&format!("defaultRewardDuration: {}\n", params.default_reward_duration));
    out.push_str(&format!("distributorAdmin: {}\n", params.distributor_admin));
    out.push_str(&format!("managerAdmin: {}\n", params.manager_admin));
    out.push_str(&format!(
        "bankNodeManagerConfigurator: {}\n",
        params.bank_node_manager_configurator
    ));
    for (index, token) in params.lendable_tokens.iter().enumerate() {
        let prefix = format!("lendableTokens[{index}]");
        out.push_str(&format!("{prefix}.symbol: {}\n", token.symbol));
        out.push_str(&format!("{prefix}.poolSymbol: {}\n", token.pool_symbol));
        out.push_str(&format!("{prefix}.enabled: {}\n", token.enabled));
        out.push_str(&format!("{prefix}.tokenContract: {}\n", token.token_contract));
        out.push_str(&format!("{prefix}.swapMarket: {}\n", token.swap_market));
        out.push_str(&format!("{prefix}.swapMarketPoolFee: {}\n", token.swap_market_pool_fee));
        out.push_str(&format!("{prefix}.decimals: {}\n", token.decimals));
        out.push_str(&format!("{prefix}.valueMultiplier: {}\n", token.value_multiplier));
        out.push_str(&format!(
            "{prefix}.unusedFundsLendingMode: {}\n",
            token.unused_funds_lending_mode.as_str()
        ));
        out.push_str(&format!(
            "{prefix}.unusedFundsLendingContract: {}\n",
            token.unused_funds_lending_contract
        ));
        out.push_str(&format!(
            "{prefix}.unusedFundsLendingToken: {}\n",
            token.unused_funds_lending_token
        ));
    }
    out
}

/// Encodes a value as canonical JSON with a trailing newline.
fn canonical_json_bytes<T: Serialize>(value: &T) -> CliResult<Vec<u8>> {
    let mut bytes = serde_jcs::to_vec(value)
        .map_err(|err| CliError::new(format!("json encoding failed: {err}")))?;
    bytes.push(b'\n');
    Ok(bytes)
}

// ============================================================================
// SECTION: Output Helpers
// ============================================================================

/// Writes bytes to `out` when set, otherwise to stdout.
fn write_output(bytes: &[u8], out: Option<&Path>) -> CliResult<()> {
    match out {
        Some(path) => fs::write(path, bytes).map_err(|err| {
            CliError::new(format!("failed to write {}: {err}", path.display()))
        }),
        None => write_stdout_bytes(bytes).map_err(|err| CliError::new(output_error("stdout", &err))),
    }
}

/// Writes a single line to stdout.
fn write_stdout_line(message: &str) -> std::io::Result<()> {
    let mut stdout = std::io::stdout();
    writeln!(&mut stdout, "{message}")
}

/// Writes raw bytes to stdout without adding a newline.
fn write_stdout_bytes(bytes: &[u8]) -> std::io::Result<()> {
    let mut stdout = std::io::stdout();
    stdout.write_all(bytes)
}

/// Writes a canonical JSON value to stdout.
fn write_json_value(value: &Value) -> CliResult<()> {
    let bytes = canonical_json_bytes(value)?;
    write_stdout_bytes(&bytes).map_err(|err| CliError::new(output_error("stdout", &err)))
}

/// Writes a single line to stderr.
fn write_stderr_line(message: &str) -> std::io::Result<()> {
    let mut stderr = std::io::stderr();
    writeln!(&mut stderr, "{message}")
}

/// Formats an output error message.
fn output_error(stream: &str, error: &std::io::Error) -> String {
    format!("failed to write to {stream}: {error}")
}

/// Emits an error message to stderr and returns a failure exit code.
fn emit_error(message: &str) -> ExitCode {
    let _ = write_stderr_line(message);
    ExitCode::FAILURE
}
