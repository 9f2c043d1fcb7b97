use clap::{ArgAction, Args, Parser, Subcommand};
use std::time::Duration;

use super::parsers::{no_color_from_env, parse_bool_env, parse_duration_arg, parse_request_count};
use super::types::PositiveU64;

#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Start the application stack (`<compose-bin> compose ... up -d`)
    Up(StackArgs),
    /// Stop the application stack (`<compose-bin> compose ... down`)
    Down(StackArgs),
}

#[derive(Debug, Args, Clone)]
pub struct StackArgs {
    /// Environment file handed to the orchestration tool (default: .env)
    #[arg(long = "env-file")]
    pub env_file: Option<String>,

    /// Compose file to use instead of the tool's default lookup
    #[arg(long = "compose-file", short = 'f')]
    pub compose_file: Option<String>,

    /// Orchestration binary to invoke (default: docker)
    #[arg(long = "compose-bin")]
    pub compose_bin: Option<String>,
}

#[derive(Debug, Parser, Clone)]
#[clap(
    name = "routeload",
    version,
    about = "Walks a fixed list of endpoints, sends N sequential GET requests to each and prints every status code."
)]
pub struct LoadArgs {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Base URL of the app under test (prefix for every endpoint path)
    #[arg(long, short)]
    pub url: Option<String>,

    /// Number of requests per endpoint
    #[arg(long, short = 'n', value_parser = parse_request_count)]
    pub requests: Option<PositiveU64>,

    /// Endpoint path to hit (repeatable, replaces the built-in list)
    #[arg(long = "endpoint", short = 'e')]
    pub endpoints: Vec<String>,

    /// Per-request timeout (supports ms/s/m/h)
    #[arg(
        long = "timeout",
        default_value = "10s",
        value_parser = parse_duration_arg
    )]
    pub request_timeout: Duration,

    /// Timeout for establishing a new connection (supports ms/s/m/h)
    #[arg(
        long = "connect-timeout",
        default_value = "5s",
        value_parser = parse_duration_arg
    )]
    pub connect_timeout: Duration,

    /// Path to config file (TOML/JSON). Defaults to ./routeload.toml or ./routeload.json if present.
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Fail instead of prompting when the URL or request count is missing
    #[arg(long = "no-prompt")]
    pub no_prompt: bool,

    /// Enable verbose logging (sets log level to debug unless overridden by ROUTELOAD_LOG/RUST_LOG)
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Disable color output (`--no-color` or `--no-color=<bool>`)
    #[arg(
        long = "no-color",
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_value = "false",
        default_missing_value = "true",
        value_parser = parse_bool_env
    )]
    pub no_color: bool,
}

impl LoadArgs {
    /// Color is off when asked for on the command line or in config, or
    /// when `NO_COLOR` is set to any non-empty value.
    #[must_use]
    pub fn color_disabled(&self) -> bool {
        self.no_color || no_color_from_env()
    }
}
