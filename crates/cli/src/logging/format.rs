use std::fmt;

use tracing::{Event, Level, Subscriber};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;

/// `daemon` facility code
const FACILITY_DAEMON: u8 = 3;

/// Human-readable lines: `LEVEL[program] message`
#[derive(Debug, Clone)]
pub struct HumanFormat {
    program_name: String,
}

impl HumanFormat {
    pub fn new(program_name: impl Into<String>) -> Self {
        Self {
            program_name: program_name.into(),
        }
    }
}

impl<S, N> FormatEvent<S, N> for HumanFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        write!(writer, "{}[{}] ", event.metadata().level(), self.program_name)?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

/// RFC 3164 style messages: `<PRI>program[pid]: message`
#[derive(Debug, Clone)]
pub struct SyslogFormat {
    program_name: String,
    pid: u32,
}

impl SyslogFormat {
    pub fn new(program_name: impl Into<String>, pid: u32) -> Self {
        Self {
            program_name: program_name.into(),
            pid,
        }
    }
}

pub(crate) fn severity(level: &Level) -> u8 {
    match *level {
        Level::ERROR => 3,
        Level::WARN => 4,
        Level::INFO => 6,
        // debug and trace
        _ => 7,
    }
}

pub(crate) fn priority(level: &Level) -> u8 {
    FACILITY_DAEMON * 8 + severity(level)
}

impl<S, N> FormatEvent<S, N> for SyslogFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        write!(
            writer,
            "<{}>{}[{}]: ",
            priority(event.metadata().level()),
            self.program_name,
            self.pid
        )?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}
