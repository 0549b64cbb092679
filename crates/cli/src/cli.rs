use anyhow::Result;
use clap::{ArgGroup, Parser};
use fizzbuzz_core::{DEFAULT_BUZZ, DEFAULT_FIZZ};

use crate::commands::run_command;

const LONG_ABOUT: &str = "\
Generalized fizzbuzz generator.

Prints one label per integer from START to END inclusive: \"fizz\" for
multiples of the fizz modulus, \"buzz\" for multiples of the buzz modulus,
\"fizzbuzz\" for multiples of both and the number itself otherwise.

Log lines go to standard error when it is a terminal and to the system log
otherwise. RUST_LOG overrides the level selected by --debug.";

#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "fizzbuzz")]
#[command(version, about, long_about = LONG_ABOUT)]
#[command(group(ArgGroup::new("verbosity").args(["debug", "silent"])))]
pub struct Cli {
    /// Enable debugging
    #[arg(short, long)]
    pub debug: bool,

    /// Don't log
    #[arg(short, long)]
    pub silent: bool,

    /// Modulo value for fizz
    #[arg(
        long,
        value_name = "N",
        default_value_t = DEFAULT_FIZZ,
        allow_negative_numbers = true,
        help_heading = "Fizzbuzz settings"
    )]
    pub fizz: i64,

    /// Modulo value for buzz
    #[arg(
        long,
        value_name = "N",
        default_value_t = DEFAULT_BUZZ,
        allow_negative_numbers = true,
        help_heading = "Fizzbuzz settings"
    )]
    pub buzz: i64,

    /// Start value
    #[arg(allow_negative_numbers = true)]
    pub start: i64,

    /// End value
    #[arg(allow_negative_numbers = true)]
    pub end: i64,
}

impl Cli {
    /// Execute the command, writing the sequence to `out`
    pub fn execute<W: std::io::Write + ?Sized>(&self, out: &mut W) -> Result<()> {
        run_command(self, out)
    }
}
