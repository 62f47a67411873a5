//! Tool preference command

use anyhow::Result;
use clap::Args;

use crate::config::ConfigStore;
use crate::domain::Tool;

#[derive(Args)]
pub struct ToolArgs {
    /// Analysis tool to prefer (gemini or qwen)
    #[arg(value_name = "TOOL")]
    pub tool: Tool,
}

pub fn run(args: ToolArgs) -> Result<()> {
    let store = ConfigStore::new();
    store.set_preferred_tool(args.tool)?;
    println!("Successfully set preferred tool to: {}", args.tool);

    let status = store.status();
    println!("\nCurrent configuration:");
    println!("  Preferred tool: {}", status.preferred_tool);
    match status.effective_tool {
        Some(tool) => println!("  Effective tool: {tool}"),
        None => println!("  Effective tool: none (preferred tool is not installed)"),
    }
    Ok(())
}
