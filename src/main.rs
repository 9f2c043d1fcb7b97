mod entry;
mod system;

use std::process::ExitCode;

fn main() -> ExitCode {
    match entry::run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("routeload: {}", err);
            ExitCode::FAILURE
        }
    }
}
