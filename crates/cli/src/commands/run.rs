use std::io::Write;

use anyhow::{Context, Result};
use fizzbuzz_core::{SequenceGenerator, sequence_len};
use tracing::debug;

use crate::cli::Cli;
use crate::display::write_sequence;

/// Compute the sequence described by `cli` and print it to `out`.
///
/// Nothing is written unless the whole sequence was computed.
pub fn run_command<W: Write + ?Sized>(cli: &Cli, out: &mut W) -> Result<()> {
    debug!(
        fizz = cli.fizz,
        buzz = cli.buzz,
        count = %sequence_len(cli.start, cli.end),
        "compute fizzbuzz from {} to {}",
        cli.start,
        cli.end
    );

    let labels = SequenceGenerator::new(cli.fizz, cli.buzz)
        .and_then(|generator| generator.generate(cli.start, cli.end))
        .with_context(|| {
            format!(
                "Failed to compute fizzbuzz from {} to {}",
                cli.start, cli.end
            )
        })?;

    write_sequence(out, &labels).context("Failed to write sequence to standard output")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use fizzbuzz_core::Error;

    fn run(args: &str) -> Result<String> {
        let cli = Cli::try_parse_from(std::iter::once("fizzbuzz").chain(args.split_whitespace()))?;
        let mut out = Vec::new();
        run_command(&cli, &mut out)?;
        Ok(String::from_utf8(out)?)
    }

    #[test]
    fn test_run_scenarios() -> Result<()> {
        let cases = [
            ("0 0", vec!["fizzbuzz"]),
            ("3 5", vec!["fizz", "4", "buzz"]),
            ("9 12", vec!["fizz", "buzz", "11", "fizz"]),
            ("14 17", vec!["14", "fizzbuzz", "16", "17"]),
            ("14 17 --fizz=2", vec!["fizz", "buzz", "fizz", "17"]),
            ("17 20 --buzz=10", vec!["17", "fizz", "19", "buzz"]),
        ];

        for (args, expected) in cases {
            let output = run(args)?;
            assert_eq!(output, format!("{}\n", expected.join("\n")), "args: {args}");
        }
        Ok(())
    }

    #[test]
    fn test_zero_modulus_writes_nothing() {
        let cli = Cli::parse_from(["fizzbuzz", "--fizz", "0", "1", "10"]);
        let mut out = Vec::new();

        let err = run_command(&cli, &mut out).unwrap_err();

        assert!(out.is_empty());
        assert_eq!(
            err.to_string(),
            "Failed to compute fizzbuzz from 1 to 10"
        );
        assert_eq!(
            err.downcast_ref::<Error>(),
            Some(&Error::InvalidArgument {
                name: "fizz",
                value: 0
            })
        );
    }

    #[test]
    fn test_full_domain_writes_nothing() {
        let cli = Cli::parse_from([
            "fizzbuzz",
            "--",
            "-9223372036854775808",
            "9223372036854775807",
        ]);
        let mut out = Vec::new();

        let err = run_command(&cli, &mut out).unwrap_err();

        assert!(out.is_empty());
        assert!(matches!(
            err.downcast_ref::<Error>(),
            Some(Error::RangeTooLarge { .. })
        ));
    }

    #[test]
    fn test_reversed_range() -> Result<()> {
        assert_eq!(run("10 1")?, "\n");
        Ok(())
    }
}
