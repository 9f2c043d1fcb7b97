//! CLI argument types and parsing helpers.
mod cli;
mod defaults;
pub(crate) mod parsers;
mod types;

#[cfg(test)]
mod test_support;

pub use cli::{Command, LoadArgs, StackArgs};
pub use types::PositiveU64;

pub(crate) use defaults::{
    DEFAULT_COMPOSE_BIN, DEFAULT_CONNECT_TIMEOUT, DEFAULT_ENV_FILE, DEFAULT_REQUEST_TIMEOUT,
    DEFAULT_USER_AGENT,
};
#[cfg(test)]
pub(crate) use test_support::parse_test_args;
