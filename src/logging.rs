//! Minimal stderr logger behind the `log` facade.

use std::env;

use log::{LevelFilter, Log, Metadata, Record};

/// Environment variable holding the log level (`error` .. `trace`, or `off`).
pub const LOG_ENV: &str = "BROADSIDE_LOG";

struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level() && metadata.target().starts_with("broadside")
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let module = record.target().trim_start_matches("broadside::");
        eprintln!("[{:<5} {}] {}", record.level(), module, record.args());
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

/// Install the logger. The level is read from [`LOG_ENV`] and falls back to
/// `default` when the variable is unset or unparsable. Calling this twice is
/// harmless; the first logger stays.
pub fn init_logging(default: LevelFilter) {
    let level = parse_level(env::var(LOG_ENV).ok().as_deref(), default);
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

/// Level named by `value`, or `default`.
pub fn parse_level(value: Option<&str>, default: LevelFilter) -> LevelFilter {
    value
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}
