use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Installs the global subscriber.
///
/// Logs are written to stderr. Stdout carries the prompts and the
/// status-code stream, and scripts that capture it must not see log lines
/// mixed into it.
pub fn init_logging(verbose: bool, no_color: bool) {
    let directive = filter_directive(
        std::env::var("ROUTELOAD_LOG").ok(),
        std::env::var("RUST_LOG").ok(),
        verbose,
    );
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new("info"));

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .finish();

    if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set global default subscriber: {}", err);
    }
}

/// `ROUTELOAD_LOG` wins over `RUST_LOG`; `-v` only changes the fallback.
fn filter_directive(own: Option<String>, rust_log: Option<String>, verbose: bool) -> String {
    own.or(rust_log).unwrap_or_else(|| {
        if verbose {
            "debug".to_owned()
        } else {
            "info".to_owned()
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_logging_is_idempotent() {
        init_logging(false, false);
        init_logging(false, false);
    }

    #[test]
    fn filter_directive_precedence() -> Result<(), String> {
        let cases = [
            (Some("warn"), Some("trace"), true, "warn"),
            (None, Some("trace"), true, "trace"),
            (None, None, true, "debug"),
            (None, None, false, "info"),
        ];
        for (own, rust_log, verbose, expected) in cases {
            let directive =
                filter_directive(own.map(str::to_owned), rust_log.map(str::to_owned), verbose);
            if directive != expected {
                return Err(format!(
                    "Expected {} for {:?}/{:?}/{}, got {}",
                    expected, own, rust_log, verbose, directive
                ));
            }
        }
        Ok(())
    }
}
