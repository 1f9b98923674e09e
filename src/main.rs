// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Set up logging (to stderr)
// 3. Read the HTML from a file or stdin
// 4. Run the audit and print the report (markdown or JSON)
// 5. Exit with proper code (0 = no critical issues, 1 = critical issues, 2 = error)
//
// Rust concepts used:
// - async/await: tokio drives the audit and the file/stdin reads
// - Result<T, E>: For error handling (T = success type, E = error type)
// - anyhow::Context: attach a human-readable message to any error
// =============================================================================

// Module declarations - tells Rust about our other source files
mod cli; // src/cli.rs - command-line parsing

use anyhow::{Context, Result};
use clap::Parser; // Parser trait enables the parse() method
use cli::Cli;
use log::{debug, warn};
use seo_audit::{audit_page, logging, report, AuditResult};
use tokio::io::AsyncReadExt; // gives stdin the read_to_string() method

// The #[tokio::main] attribute transforms our async main into a real main function
// It creates a tokio runtime and runs our async code inside it
#[tokio::main]
async fn main() {
    // Run our application logic and capture the exit code
    // std::process::exit() terminates the program with the given code
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            // If an unexpected error occurred, print it and exit with code 2
            // {:#} prints the whole context chain: "Audit failed: analyzer ..."
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// This is the main application logic
// Returns:
//   Ok(0) = no critical issues
//   Ok(1) = critical issues found
//   Err = unexpected error (mapped to exit code 2)
async fn run() -> Result<i32> {
    // Parse command-line arguments into our Cli struct
    // This will automatically handle --help, --version, etc.
    let cli = Cli::parse();

    if let Err(e) = logging::init_logger(cli.log_level.map(Into::into)) {
        eprintln!("Warning: could not initialize logger: {}", e);
    }

    let html = read_input(&cli).await?;
    debug!("Read {} bytes of HTML", html.len());
    if html.trim().is_empty() {
        warn!("Input is empty; the report will list everything as missing");
    }

    let result = audit_page(&html, cli.url.as_deref())
        .await
        .context("Audit failed")?;

    print_result(&result, cli.json)?;

    if result.passed() {
        Ok(0) // Exit code 0 = nothing critical
    } else {
        Ok(1) // Exit code 1 = critical issues found
    }
}

// Reads the HTML to audit, from stdin when the input is "-"
async fn read_input(cli: &Cli) -> Result<String> {
    if cli.reads_stdin() {
        let mut html = String::new();
        tokio::io::stdin()
            .read_to_string(&mut html)
            .await
            .context("Failed to read HTML from stdin")?;
        Ok(html)
    } else {
        tokio::fs::read_to_string(&cli.input)
            .await
            .with_context(|| format!("Failed to read {}", cli.input.display()))
    }
}

// Prints the result either as a markdown report or JSON
// Parameters:
//   result: the finished audit
//   json: whether to output JSON format
fn print_result(result: &AuditResult, json: bool) -> Result<()> {
    if json {
        // Serialize results to JSON and print
        let json_output = report::format_json(result).context("Failed to serialize result")?;
        println!("{}", json_output);
    } else {
        // Print the human-readable markdown report
        print!("{}", report::format_report(result));
    }
    Ok(())
}
