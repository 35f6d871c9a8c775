//! stderr logger for the CLI.
//!
//! Implements `log::Log` with the driver's severity labels. `debug!` records
//! are shown as VERBOSE. FATAL is not a `log` level: [`fatal`] prints and
//! exits.

use std::env;
use std::fmt::Display;
use std::process;

use log::{Level, LevelFilter, Metadata, Record};

/// Environment variable selecting the log level.
pub const LOG_ENV: &str = "CCDRIVE_LOG";

static LOGGER: CliLogger = CliLogger;

struct CliLogger;

impl log::Log for CliLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("[{}] {}", label(record.level()), record.args());
        }
    }

    fn flush(&self) {}
}

/// Install the logger. A second call leaves the first logger in place.
pub fn init(max_level: LevelFilter) {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(max_level);
    }
}

/// Level from `CCDRIVE_LOG`, defaulting to INFO.
pub fn level_from_env() -> LevelFilter {
    parse_level(env::var(LOG_ENV).ok().as_deref())
}

pub fn parse_level(value: Option<&str>) -> LevelFilter {
    match value.map(|v| v.trim().to_ascii_lowercase()).as_deref() {
        Some("verbose") | Some("debug") => LevelFilter::Debug,
        Some("trace") => LevelFilter::Trace,
        Some("error") => LevelFilter::Error,
        Some("off") | Some("quiet") => LevelFilter::Off,
        _ => LevelFilter::Info,
    }
}

pub fn label(level: Level) -> &'static str {
    match level {
        Level::Error => "ERROR",
        Level::Warn => "WARN",
        Level::Info => "INFO",
        Level::Debug => "VERBOSE",
        Level::Trace => "TRACE",
    }
}

/// Report an unrecoverable condition and terminate with status 1.
pub fn fatal(message: impl Display) -> ! {
    eprintln!("[FATAL] {message}");
    process::exit(1)
}
