//! Status command: preference, probe results, effective tool

use anyhow::Result;
use clap::Args;

use crate::config::ConfigStore;

#[derive(Args)]
pub struct StatusArgs {
    /// Print the status record as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: StatusArgs) -> Result<()> {
    let status = ConfigStore::new().status();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&status)?);
        return Ok(());
    }

    println!("Current Configuration:");
    println!("  Preferred tool: {}", status.preferred_tool);
    println!("  Available tools:");
    for (tool, info) in &status.available_tools {
        let marker = if info.available { "Available" } else { "Not available" };
        println!("    {tool}: {marker} - Command: {}", info.command);
    }
    match status.effective_tool {
        Some(tool) => println!("  Effective tool: {tool}"),
        None => println!("  Effective tool: none (preferred tool is not installed)"),
    }
    Ok(())
}
