//! code-analyzer: drive external AI code-analysis CLIs
//!
//! Selects between the Gemini and Qwen analysis CLIs, composes a prompt
//! from a fixed scenario catalog, and shells out to the chosen tool.

use anyhow::Result;

fn main() -> Result<()> {
    code_analyzer::cli::run()
}
