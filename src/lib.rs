//! Core library for the `routeload` CLI.
//!
//! The binary walks a fixed list of endpoint paths under an operator-supplied
//! base URL, sends a fixed number of sequential GET requests to each and
//! prints every status code as it arrives. It can also start and stop the
//! compose stack under test. The primary interface is the command-line
//! application; library APIs exist for testing and may change.
pub mod args;
pub mod config;
pub mod error;
pub mod load;
pub mod prompt;
pub mod stack;

#[cfg(feature = "fuzzing")]
pub mod fuzzing;
