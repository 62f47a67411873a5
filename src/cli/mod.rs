//! Command-line interface for code-analyzer
//!
//! One positional action per invocation: `generate` prints the composed
//! command, the `execute*` actions run it, and `tool`/`status` manage the
//! stored preference. Analysis failures are rendered as banners, not exit
//! codes; the wrapper itself exits 0 unless argument parsing or a
//! preference write fails.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod analyze;
mod status;
mod tool;

/// Drive external AI code-analysis CLIs from a fixed scenario catalog
#[derive(Parser)]
#[command(name = "code-analyzer")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the analysis command without running it
    Generate(analyze::GenerateArgs),

    /// Run the analysis and print the full output
    Execute(analyze::AnalyzeArgs),

    /// Run the analysis, save full output to a side file, print a summary
    ExecuteOptimized(analyze::AnalyzeArgs),

    /// Optimized run with automatic retries on failure
    ExecuteRetry(analyze::AnalyzeArgs),

    /// Set the preferred analysis tool
    Tool(tool::ToolArgs),

    /// Show the preferred tool and which tools are installed
    Status(status::StatusArgs),
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // Wire verbose flag to the tracing log level.
    // RUST_LOG in the environment always takes precedence; --verbose falls back to DEBUG.
    let filter = if cli.verbose {
        EnvFilter::from_default_env().add_directive(Level::DEBUG.into())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    match cli.command {
        Commands::Generate(args) => analyze::run_generate(args),
        Commands::Execute(args) => analyze::run_execute(args),
        Commands::ExecuteOptimized(args) => analyze::run_execute_optimized(args),
        Commands::ExecuteRetry(args) => analyze::run_execute_retry(args),
        Commands::Tool(args) => tool::run(args),
        Commands::Status(args) => status::run(args),
    }
}
