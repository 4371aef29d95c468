//! Console logger for the simulator.
//!
//! Lines end in `\r\n` so they stay readable while the terminal is in raw mode.

use std::io::Write;
use std::str::FromStr;

use anyhow::Context as _;
use log::{Level, LevelFilter, Log, Metadata, Record};

/// Environment variable holding the log level (`error`..`trace`, or `off`).
pub const LOG_ENV: &str = "NOTES_LOG";

pub struct ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let level_str = match record.level() {
            Level::Error => "ERROR",
            Level::Warn => "WARN",
            Level::Info => "INFO",
            Level::Debug => "DEBUG",
            Level::Trace => "TRACE",
        };
        let mut stderr = std::io::stderr().lock();
        let _ = write!(stderr, "[{}] {}: {}\r\n", level_str, record.target(), record.args());
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

/// Parse a level setting, defaulting to `info` when unset.
pub fn level_from(setting: Option<&str>) -> anyhow::Result<LevelFilter> {
    match setting {
        None => Ok(LevelFilter::Info),
        Some(value) => LevelFilter::from_str(value.trim())
            .with_context(|| format!("{} must be a log level, got {:?}", LOG_ENV, value)),
    }
}

/// Install the console logger with the level from [`LOG_ENV`].
pub fn init() -> anyhow::Result<LevelFilter> {
    let setting = std::env::var(LOG_ENV).ok();
    let level = level_from(setting.as_deref())?;

    match log::set_boxed_logger(Box::new(ConsoleLogger)) {
        Ok(()) => log::set_max_level(level),
        Err(_) => {
            // Logger already set
        }
    }
    Ok(level)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_level() {
        assert_eq!(level_from(None).unwrap(), LevelFilter::Info);
    }

    #[test]
    fn test_parse_level() {
        assert_eq!(level_from(Some("debug")).unwrap(), LevelFilter::Debug);
        assert_eq!(level_from(Some(" TRACE ")).unwrap(), LevelFilter::Trace);
        assert_eq!(level_from(Some("off")).unwrap(), LevelFilter::Off);
    }

    #[test]
    fn test_bad_level_names_variable() {
        let err = level_from(Some("loud")).unwrap_err();
        assert!(err.to_string().contains(LOG_ENV));
    }
}
