use std::time::Duration;

pub(crate) const DEFAULT_USER_AGENT: &str = concat!("routeload/", env!("CARGO_PKG_VERSION"));

pub(crate) const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
pub(crate) const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

pub(crate) const DEFAULT_ENV_FILE: &str = ".env";
pub(crate) const DEFAULT_COMPOSE_BIN: &str = "docker";
