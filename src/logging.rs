// src/logging.rs
// =============================================================================
// Logger setup for the command-line tool.
//
// The library only emits records through the `log` facade; the binary
// decides where they go. We use env_logger, writing to stderr so the report
// on stdout stays clean (important for --json output).
//
// RUST_LOG decides the filter (warn when unset). An explicit --log-level
// replaces it for the global level and for this crate. The HTML parser
// crates are noisy at debug level, so they are always capped at warn.
// =============================================================================

use env_logger::{Builder, Env};
use log::{LevelFilter, SetLoggerError};
use std::io::Write;

// Filter used when RUST_LOG is not set
const DEFAULT_FILTER: &str = "warn";

// Initializes the global logger
//
// Parameters:
//   level: minimum level from --log-level, or None to leave RUST_LOG in charge
//
// Returns: an error if a logger was already installed
pub fn init_logger(level: Option<LevelFilter>) -> Result<(), SetLoggerError> {
    let mut builder = Builder::from_env(Env::default().default_filter_or(DEFAULT_FILTER));

    if let Some(level) = level {
        builder.filter_level(level);
        builder.filter_module("seo_audit", level);
    }
    builder.filter_module("html5ever", LevelFilter::Warn);
    builder.filter_module("selectors", LevelFilter::Warn);

    builder.format(|buf, record| {
        writeln!(
            buf,
            "[{} {}] {}",
            record.level(),
            record.target(),
            record.args()
        )
    });

    // try_init() instead of init() so a second call returns an error
    // rather than panicking
    builder.try_init()
}
