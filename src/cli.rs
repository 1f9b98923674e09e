// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// clap is a popular Rust library for parsing command-line arguments.
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes (the #[...] things).
//
// Rust concepts:
// - Structs: Custom data types that group related data
// - Enums: Types that can be one of several variants
// - Derive macros: Automatically generate code for our types
// =============================================================================

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

// This struct represents our entire CLI application
//
// #[derive(Parser)] tells clap to automatically generate parsing code
// The #[command(...)] attributes configure how the CLI behaves
#[derive(Parser, Debug)]
#[command(
    name = "seo-audit",
    version = "0.1.0",
    about = "Audit a single HTML page for SEO issues",
    long_about = "seo-audit reads an HTML file (or stdin) and reports SEO problems: missing meta tags, \
                  broken heading hierarchy, images without alt text, weak links, thin content, \
                  mobile viewport issues and render-blocking resources. \
                  It exits with code 1 when critical issues are found, which makes it easy to use in CI."
)]
pub struct Cli {
    /// HTML file to audit, or "-" to read from stdin
    ///
    /// This is a positional argument (required, no flag needed)
    pub input: PathBuf,

    /// URL of the page, shown in the report
    ///
    /// Only used as a label; nothing is fetched
    #[arg(long)]
    pub url: Option<String>,

    /// Output results in JSON format instead of a markdown report
    ///
    /// This is an optional flag: --json
    #[arg(long)]
    pub json: bool,

    /// Minimum level of log messages written to stderr
    ///
    /// Without this flag RUST_LOG decides (warn when unset); with it,
    /// the flag replaces RUST_LOG's global and seo_audit levels
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,
}

impl Cli {
    /// True when the input should be read from stdin
    pub fn reads_stdin(&self) -> bool {
        self.input.as_os_str() == "-"
    }
}

// Log levels accepted by --log-level
//
// #[derive(ValueEnum)] lets clap parse "debug" into LogLevel::Debug
// and list the choices in --help
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why PathBuf instead of String for the input?
//    - PathBuf is the owned path type; it handles non-UTF-8 file names
//    - We still accept "-" as a special value meaning stdin
//
// 2. Why Option<String> for --url?
//    - The flag is optional; None means "not given"
//    - The audit then labels the page "unknown"
//
// 3. Why is --log-level an Option?
//    - None means "not given", so RUST_LOG stays in charge
//    - A default value would always win and silently hide RUST_LOG
//
// 4. What is ValueEnum?
//    - A clap derive that maps command-line strings to enum variants
//    - Invalid values are rejected with a helpful error listing the choices
// -----------------------------------------------------------------------------
