mod app;
mod config;
mod http;
mod stack;
mod validation;

#[cfg(test)]
mod test_support;

pub use app::{AppError, AppResult};
pub use config::ConfigError;
pub use http::HttpError;
pub use stack::StackError;
pub use validation::ValidationError;
