//! Analysis actions: generate, execute, execute-optimized, execute-retry

use anyhow::Result;
use clap::Args;

use crate::command::{analysis_command, commands_for_all_tools, resolve_tool};
use crate::config::ConfigStore;
use crate::domain::{ExecutionResult, RunOutcome, SummaryResult, Tool};
use crate::exec;

const BANNER: &str = "==================================================";

#[derive(Args)]
pub struct AnalyzeArgs {
    /// Analysis scenario (patterns, architecture, quality, review, audit,
    /// features, documentation)
    #[arg(short, long)]
    pub scenario: String,

    /// Specific target within the scenario
    #[arg(short, long)]
    pub target: Option<String>,

    /// Additional context appended to the prompt
    #[arg(short, long)]
    pub context: Option<String>,

    /// Command timeout in seconds
    #[arg(long, default_value_t = exec::DEFAULT_TIMEOUT_SECS, value_name = "SECS")]
    pub timeout: u64,

    /// Maximum retry attempts (execute-retry only)
    #[arg(long, default_value_t = exec::DEFAULT_MAX_RETRIES, value_name = "N")]
    pub max_retries: u32,

    /// Override the configured tool for this invocation
    #[arg(long, value_name = "TOOL")]
    pub tool: Option<Tool>,

    /// Print the result record as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub analyze: AnalyzeArgs,

    /// Print the command for every supported tool, not just the configured one
    #[arg(long)]
    pub all_tools: bool,
}

impl AnalyzeArgs {
    fn command(&self, store: &ConfigStore) -> String {
        let tool = resolve_tool(store, self.tool);
        analysis_command(tool, &self.scenario, self.target.as_deref(), self.context.as_deref())
    }
}

pub fn run_generate(args: GenerateArgs) -> Result<()> {
    let store = ConfigStore::new();

    if args.all_tools {
        let commands = commands_for_all_tools(
            &store,
            &args.analyze.scenario,
            args.analyze.target.as_deref(),
            args.analyze.context.as_deref(),
        );
        if args.analyze.json {
            println!("{}", serde_json::to_string_pretty(&commands)?);
        } else {
            for (tool, command) in &commands {
                println!("{tool}: {command}");
            }
        }
        return Ok(());
    }

    let command = args.analyze.command(&store);
    if args.analyze.json {
        println!("{}", serde_json::json!({ "command": command }));
    } else {
        println!("Generated command: {command}");
    }
    Ok(())
}

pub fn run_execute(args: AnalyzeArgs) -> Result<()> {
    let store = ConfigStore::new();
    let command = args.command(&store);

    if !args.json {
        println!("Executing analysis command: {command}");
        println!("This may take several minutes...");
    }

    let result = exec::run(&command, args.timeout);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    if result.success {
        println!("Analysis completed successfully!");
        println!("\nAnalysis Results:");
        println!("{BANNER}");
        println!("{}", result.stdout);
    } else {
        render_failure(&result);
    }
    Ok(())
}

pub fn run_execute_optimized(args: AnalyzeArgs) -> Result<()> {
    let store = ConfigStore::new();
    let command = args.command(&store);

    if !args.json {
        println!("Executing analysis command: {command}");
        println!("This may take several minutes...");
    }

    let outcome = exec::run_optimized(&command, args.timeout, &std::env::temp_dir());
    render_outcome(&outcome, args.json)
}

pub fn run_execute_retry(args: AnalyzeArgs) -> Result<()> {
    let store = ConfigStore::new();
    let command = args.command(&store);

    if !args.json {
        println!("Executing analysis command: {command}");
        println!("This may take several minutes...");
    }

    let outcome =
        exec::run_with_retry(&command, args.timeout, args.max_retries, &std::env::temp_dir());
    render_outcome(&outcome, args.json)
}

fn render_outcome(outcome: &RunOutcome, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(outcome)?);
        return Ok(());
    }
    match outcome {
        RunOutcome::Summarized(result) => render_summary(result),
        RunOutcome::Failed(result) => render_failure(result),
    }
    Ok(())
}

fn render_summary(result: &SummaryResult) {
    println!("Analysis completed successfully!");
    if let Some(retry_info) = &result.retry_info {
        println!("\n{retry_info}");
    }
    println!("\nSummary ({} lines total):", result.total_lines);
    println!("{BANNER}");
    println!("{}", result.summary);
    println!("\nFull analysis saved to: {}", result.full_output_path.display());
}

fn render_failure(result: &ExecutionResult) {
    println!("Analysis failed!");
    println!("Error: {}", result.stderr);
    println!("Command: {}", result.command);
}
