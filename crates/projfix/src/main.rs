//! projfix - Xcode registration checklist for TaskSnap
//!
//! Prints the source files that still need to be added to
//! `TaskSnap.xcodeproj`, with manual instructions for doing so. The
//! checklist is print-only; registration itself happens in Xcode (or via
//! xcodeproj/tuist/xcodegen), never here.

use clap::Parser;
use projfix::cli;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Default stderr log filter when RUST_LOG is unset
const DEFAULT_LOG_FILTER: &str = "projfix=info,projfix_registry=info";

#[derive(Parser, Debug)]
#[command(
    name = "projfix",
    about = "Checklist of files awaiting registration in TaskSnap.xcodeproj",
    version
)]
struct Cli {
    /// Enable verbose logging (debug to stderr)
    #[arg(short = 'v', long)]
    verbose: bool,

    /// Output as JSON
    #[arg(long)]
    json: bool,

    /// Output file paths only (quiet mode)
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = cli::report::run(cli::report::ReportArgs {
        json: cli.json,
        quiet: cli.quiet,
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{:?}", err);
            ExitCode::from(1)
        }
    }
}

/// Initialize tracing. Logs go to stderr so the stdout report stays clean
/// in every output mode.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
