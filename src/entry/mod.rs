mod plan;

use std::process::ExitCode;

use clap::{ArgMatches, CommandFactory, FromArgMatches};

use routeload::args::LoadArgs;
use routeload::error::AppResult;
use plan::{build_plan, execute_plan};

pub(crate) fn run() -> AppResult<ExitCode> {
    let (args, matches) = parse_args()?;

    crate::system::logger::init_logging(args.verbose, args.color_disabled());

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    runtime.block_on(run_async(args, &matches))
}

fn parse_args() -> AppResult<(LoadArgs, ArgMatches)> {
    let matches = LoadArgs::command().get_matches();
    let args = LoadArgs::from_arg_matches(&matches)?;
    Ok((args, matches))
}

async fn run_async(args: LoadArgs, matches: &ArgMatches) -> AppResult<ExitCode> {
    let plan = build_plan(args, matches)?;
    execute_plan(plan).await
}
