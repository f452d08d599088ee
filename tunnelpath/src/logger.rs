//! Minimal stderr logger.

use std::io::Write;

use log::{Level, LevelFilter, Log, Metadata, Record};

/// Overrides the level chosen from the problem file.
pub const LEVEL_VAR: &str = "TUNNELPATH_LOG";

struct StderrLogger;

static LOGGER: StderrLogger = StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let mut err = std::io::stderr().lock();
        // Info records, the open-list trace among them, go out bare.
        let _ = if record.level() == Level::Info {
            writeln!(err, "{}", record.args())
        } else {
            writeln!(err, "[{}] {}: {}", record.level(), record.target(), record.args())
        };
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

/// Parse a level name as accepted in [`LEVEL_VAR`].
pub fn parse_level(s: &str) -> Option<LevelFilter> {
    match s.trim().to_ascii_lowercase().as_str() {
        "off" => Some(LevelFilter::Off),
        "error" => Some(LevelFilter::Error),
        "warn" => Some(LevelFilter::Warn),
        "info" => Some(LevelFilter::Info),
        "debug" => Some(LevelFilter::Debug),
        "trace" => Some(LevelFilter::Trace),
        _ => None,
    }
}

/// Install the logger. Safe to call more than once; only the level changes
/// after the first call.
pub fn init(default: LevelFilter) {
    let level = std::env::var(LEVEL_VAR)
        .ok()
        .and_then(|v| parse_level(&v))
        .unwrap_or(default);
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(level);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_names() {
        assert_eq!(parse_level("WARN"), Some(LevelFilter::Warn));
        assert_eq!(parse_level(" trace "), Some(LevelFilter::Trace));
        assert_eq!(parse_level("off"), Some(LevelFilter::Off));
        assert_eq!(parse_level("loud"), None);
    }
}
