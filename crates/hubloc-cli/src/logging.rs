use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use env_logger::{fmt::Formatter, Builder, Target};
use hubloc_core::{HubError, HubResult};
use log::{Level, Record};

use crate::args::{Args, LogFormat};

/// Logs go to `--log-file` when given, otherwise to stderr; stdout only ever
/// carries the report.
pub fn init_logger(args: &Args) -> HubResult<()> {
    let format = args.log_format;
    let timestamp = args.log_timestamp;

    let mut builder = Builder::new();
    builder
        .filter_level(args.log_level.to_filter())
        .write_style(env_logger::WriteStyle::Never)
        .target(log_target(args.log_file.as_deref())?)
        .format(move |buf: &mut Formatter, record| {
            if timestamp {
                write!(buf, "{} ", buf.timestamp_millis())?;
            }
            write_record(buf, record, format)
        });

    builder
        .try_init()
        .map_err(|e| HubError::other(format!("logger init failed: {e}")))
}

fn log_target(path: Option<&Path>) -> HubResult<Target> {
    let Some(path) = path else {
        return Ok(Target::Stderr);
    };
    let file = File::create(path).map_err(|e| {
        HubError::config(format!("cannot open log file {}: {e}", path.display()))
    })?;
    Ok(Target::Pipe(Box::new(file)))
}

/// Compact: `INFO message`. Pretty: `INFO climb::optimizer | message`, with the
/// crate prefix dropped from the module path.
fn write_record<W: Write>(out: &mut W, record: &Record<'_>, format: LogFormat) -> io::Result<()> {
    let level = level_tag(record.level());
    match format {
        LogFormat::Compact => writeln!(out, "{level:<5} {}", record.args()),
        LogFormat::Pretty => {
            let module = record.target().strip_prefix("hubloc_").unwrap_or(record.target());
            writeln!(out, "{level:<5} {module} | {}", record.args())
        }
    }
}

fn level_tag(level: Level) -> &'static str {
    match level {
        Level::Error => "ERROR",
        Level::Warn => "WARN",
        Level::Info => "INFO",
        Level::Debug => "DEBUG",
        Level::Trace => "TRACE",
    }
}
