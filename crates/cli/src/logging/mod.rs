//! Log sinks.
//!
//! [`dispatch`] turns a [`LogConfig`] into a [`Dispatch`]. Callers scope it
//! around their work with `tracing::dispatcher::with_default`; no global
//! subscriber is ever installed.

#[cfg(test)]
pub(crate) mod capture;
pub mod format;
#[cfg(unix)]
pub mod syslog;

use tracing::Dispatch;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::MakeWriter;

use crate::config::{LogConfig, LogSink};
pub use format::{HumanFormat, SyslogFormat};

/// Build the dispatcher for this run
pub fn dispatch(config: &LogConfig) -> Dispatch {
    dispatch_to(config, std::io::stderr)
}

/// Build the dispatcher, using `stderr` for human-readable output
pub fn dispatch_to<W>(config: &LogConfig, stderr: W) -> Dispatch
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    if config.is_silent() {
        return Dispatch::none();
    }

    match config.sink {
        LogSink::Terminal => terminal_dispatch(config, stderr),
        LogSink::Syslog => syslog_or_terminal(config, stderr),
    }
}

#[cfg(unix)]
fn syslog_or_terminal<W>(config: &LogConfig, stderr: W) -> Dispatch
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    match syslog::SyslogSocket::connect(&config.syslog_socket) {
        Ok(socket) => syslog_dispatch(config, socket),
        // No syslog daemon listening; stderr is better than nothing.
        Err(_) => terminal_dispatch(config, stderr),
    }
}

#[cfg(not(unix))]
fn syslog_or_terminal<W>(config: &LogConfig, stderr: W) -> Dispatch
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    terminal_dispatch(config, stderr)
}

fn env_filter(config: &LogConfig) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .parse_lossy(&config.directives)
}

/// Human-readable sink writing to `writer`
pub fn terminal_dispatch<W>(config: &LogConfig, writer: W) -> Dispatch
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let subscriber = tracing_subscriber::fmt()
        .event_format(HumanFormat::new(&config.program_name))
        .with_writer(writer)
        .with_env_filter(env_filter(config))
        .finish();
    Dispatch::new(subscriber)
}

/// Syslog-formatted sink writing to `writer`
pub fn syslog_dispatch<W>(config: &LogConfig, writer: W) -> Dispatch
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    // `with_ansi` is only available on the default formatter, so it has to
    // be set before the event format is swapped out.
    let subscriber = tracing_subscriber::fmt()
        .with_ansi(false)
        .event_format(SyslogFormat::new(&config.program_name, config.pid))
        .with_writer(writer)
        .with_env_filter(env_filter(config))
        .finish();
    Dispatch::new(subscriber)
}
