use std::io::{self, IsTerminal};
use std::process::ExitCode;

use clap::ArgMatches;

use routeload::args::{Command, LoadArgs, StackArgs};
use routeload::config::{apply_config, apply_stack_config, load_config};
use routeload::error::AppResult;
use routeload::load::{HttpProbe, LoadPlan, Reporter, run_load};
use routeload::prompt::{NonInteractive, Prompter};
use routeload::stack::{StackAction, run_stack};

pub(super) enum RunPlan {
    Stack { action: StackAction, stack: StackArgs },
    Load { plan: LoadPlan, color: bool },
}

pub(super) fn build_plan(mut args: LoadArgs, matches: &ArgMatches) -> AppResult<RunPlan> {
    let config = load_config(args.config.as_deref())?;

    if let Some(command) = args.command.take() {
        let (action, mut stack) = match command {
            Command::Up(stack) => (StackAction::Up, stack),
            Command::Down(stack) => (StackAction::Down, stack),
        };
        if let Some(config) = config.as_ref() {
            apply_stack_config(&mut stack, config);
        }
        return Ok(RunPlan::Stack { action, stack });
    }

    if let Some(config) = config.as_ref() {
        apply_config(&mut args, matches, config)?;
    }

    let color = !args.color_disabled() && io::stdout().is_terminal();
    let plan = if args.no_prompt {
        LoadPlan::from_args(args, &mut NonInteractive)?
    } else {
        let mut prompter = Prompter::new(io::stdin().lock(), io::stdout());
        LoadPlan::from_args(args, &mut prompter)?
    };

    Ok(RunPlan::Load { plan, color })
}

pub(super) async fn execute_plan(plan: RunPlan) -> AppResult<ExitCode> {
    match plan {
        RunPlan::Stack { action, stack } => run_stack(action, &stack).await,
        RunPlan::Load { plan, color } => {
            let probe = HttpProbe::new(plan.request_timeout, plan.connect_timeout)?;
            let mut reporter = Reporter::new(io::stdout(), color);
            run_load(&plan, &probe, &mut reporter).await?;
            Ok(ExitCode::SUCCESS)
        }
    }
}
