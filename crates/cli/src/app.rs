use std::io::Write;
use std::process::ExitCode;

use tracing::{Dispatch, error};

use crate::cli::Cli;

/// Run the program with `dispatch` as the active logger.
///
/// Failures are logged with their whole context chain and reported through
/// the exit code; `out` only ever receives a complete sequence.
pub fn run<W: Write + ?Sized>(cli: &Cli, dispatch: &Dispatch, out: &mut W) -> ExitCode {
    tracing::dispatcher::with_default(dispatch, || match cli.execute(out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err:?}");
            ExitCode::FAILURE
        }
    })
}
