//! Startup configuration: what the process environment looks like and how
//! logging should be set up for this run.
//!
//! Everything here is read once in `main`. The rest of the program receives
//! these values explicitly and never queries the environment on its own.

use std::io::IsTerminal;
use std::path::{Path, PathBuf};

use tracing::level_filters::LevelFilter;

use crate::cli::Cli;

const DEFAULT_PROGRAM_NAME: &str = "fizzbuzz";

/// Default location of the local syslog socket
pub const SYSLOG_SOCKET: &str = "/dev/log";

/// Facts about the process environment, captured at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Environment {
    pub stderr_is_terminal: bool,
    pub program_name: String,
    pub pid: u32,
    /// Directives from `RUST_LOG`, if set
    pub log_directives: Option<String>,
}

impl Environment {
    pub fn detect() -> Self {
        Self {
            stderr_is_terminal: std::io::stderr().is_terminal(),
            program_name: program_name(std::env::args_os().next().as_deref().map(Path::new)),
            pid: std::process::id(),
            log_directives: std::env::var(tracing_subscriber::EnvFilter::DEFAULT_ENV)
                .ok()
                .filter(|directives| !directives.trim().is_empty()),
        }
    }
}

fn program_name(argv0: Option<&Path>) -> String {
    argv0
        .and_then(Path::file_stem)
        .and_then(|stem| stem.to_str())
        .filter(|stem| !stem.is_empty())
        .unwrap_or(DEFAULT_PROGRAM_NAME)
        .to_string()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Silent,
    Info,
    Debug,
}

impl Verbosity {
    pub fn level(self) -> LevelFilter {
        match self {
            Verbosity::Silent => LevelFilter::OFF,
            Verbosity::Info => LevelFilter::INFO,
            Verbosity::Debug => LevelFilter::DEBUG,
        }
    }
}

/// Where log events end up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogSink {
    /// Human-readable lines on standard error
    Terminal,
    /// Datagrams to the local syslog daemon
    Syslog,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    pub verbosity: Verbosity,
    pub sink: LogSink,
    pub program_name: String,
    pub pid: u32,
    pub directives: String,
    /// Socket used by the syslog sink
    pub syslog_socket: PathBuf,
}

impl LogConfig {
    pub fn resolve(cli: &Cli, env: &Environment) -> Self {
        let verbosity = if cli.silent {
            Verbosity::Silent
        } else if cli.debug {
            Verbosity::Debug
        } else {
            Verbosity::Info
        };

        let sink = if env.stderr_is_terminal {
            LogSink::Terminal
        } else {
            LogSink::Syslog
        };

        // Our own crates log at the chosen level, everything else at WARN.
        let directives = env.log_directives.clone().unwrap_or_else(|| {
            let level = verbosity.level();
            format!("warn,fizzbuzz_cli={level},fizzbuzz_core={level}")
        });

        Self {
            verbosity,
            sink,
            program_name: env.program_name.clone(),
            pid: env.pid,
            directives,
            syslog_socket: PathBuf::from(SYSLOG_SOCKET),
        }
    }

    pub fn is_silent(&self) -> bool {
        self.verbosity == Verbosity::Silent
    }
}
