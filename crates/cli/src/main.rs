use std::process::ExitCode;

use clap::Parser;
use fizzbuzz_cli::{Cli, Environment, LogConfig, app, logging};

fn main() -> ExitCode {
    // Usage errors exit here with status 2, before any logging is set up
    let cli = Cli::parse();

    let env = Environment::detect();
    let log_config = LogConfig::resolve(&cli, &env);
    let dispatch = logging::dispatch(&log_config);

    app::run(&cli, &dispatch, &mut std::io::stdout().lock())
}
