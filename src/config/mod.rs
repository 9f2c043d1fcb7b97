//! Configuration loading and application.
mod apply;
mod loader;
pub mod types;


pub use apply::{apply_config, apply_stack_config};
pub use loader::{load_config, load_config_file};
