//! `up` / `down`: hands a start or stop directive to the compose tool.
use std::path::Path;
use std::process::{ExitCode, Stdio};

use tokio::process::Command;
use tracing::{info, warn};

use crate::args::{DEFAULT_COMPOSE_BIN, DEFAULT_ENV_FILE, StackArgs};
use crate::error::{AppError, AppResult, StackError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StackAction {
    Up,
    Down,
}

impl StackAction {
    const fn compose_args(self) -> &'static [&'static str] {
        match self {
            StackAction::Up => &["up", "-d"],
            StackAction::Down => &["down"],
        }
    }
}

/// A fully resolved orchestration invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackCommand {
    pub program: String,
    pub args: Vec<String>,
    pub env_file: String,
}

impl StackCommand {
    #[must_use]
    pub fn build(action: StackAction, stack: &StackArgs) -> Self {
        let program = stack
            .compose_bin
            .clone()
            .unwrap_or_else(|| DEFAULT_COMPOSE_BIN.to_owned());
        let env_file = stack
            .env_file
            .clone()
            .unwrap_or_else(|| DEFAULT_ENV_FILE.to_owned());

        let mut args = vec!["compose".to_owned()];
        if let Some(compose_file) = stack.compose_file.as_ref() {
            args.push("-f".to_owned());
            args.push(compose_file.clone());
        }
        args.push("--env-file".to_owned());
        args.push(env_file.clone());
        args.extend(action.compose_args().iter().map(|arg| (*arg).to_owned()));

        Self {
            program,
            args,
            env_file,
        }
    }
}

/// Runs the orchestration tool with inherited stdio and returns its exit code.
///
/// # Errors
///
/// Returns an error when the environment file is missing or the program
/// cannot be started.
pub async fn run_stack(action: StackAction, stack: &StackArgs) -> AppResult<ExitCode> {
    let command = StackCommand::build(action, stack);
    if !Path::new(&command.env_file).exists() {
        return Err(AppError::stack(StackError::MissingEnvFile {
            path: command.env_file,
        }));
    }

    info!("Running {} {}", command.program, command.args.join(" "));
    let status = Command::new(&command.program)
        .args(&command.args)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .await
        .map_err(|err| {
            AppError::stack(StackError::Spawn {
                program: command.program.clone(),
                source: err,
            })
        })?;

    Ok(ExitCode::from(exit_status_byte(status.code())))
}

/// Maps a child's exit status onto ours. Signal deaths (no code) become 1.
fn exit_status_byte(code: Option<i32>) -> u8 {
    match code {
        Some(code) => u8::try_from(code).unwrap_or_else(|_err| {
            warn!("Child exit code {} does not fit a process exit code", code);
            1
        }),
        None => {
            warn!("Child terminated without an exit code");
            1
        }
    }
}
