//! Command composition
//!
//! Joins a tool-specific invocation prefix with the resolved prompt. The
//! prompt is embedded between double quotes without further escaping:
//! embedded quotes or shell metacharacters in catalog text or user context
//! will corrupt the command. Accepted limitation, not a guarantee.

use crate::catalog;
use crate::config::ConfigStore;
use crate::domain::Tool;
use std::collections::BTreeMap;

/// Compose the full shell command for one analysis run.
pub fn analysis_command(
    tool: Tool,
    scenario: &str,
    target: Option<&str>,
    context: Option<&str>,
) -> String {
    let prompt = catalog::resolve_prompt(scenario, target, context);
    format!("{} --all-files --yolo -p \"{}\"", tool.invocation(), prompt)
}

/// Resolve the active tool: explicit override first, stored preference
/// otherwise.
pub fn resolve_tool(store: &ConfigStore, override_tool: Option<Tool>) -> Tool {
    override_tool.unwrap_or_else(|| store.preferred_tool())
}

/// Commands for every supported tool plus the configured one, for
/// side-by-side comparison.
pub fn commands_for_all_tools(
    store: &ConfigStore,
    scenario: &str,
    target: Option<&str>,
    context: Option<&str>,
) -> BTreeMap<String, String> {
    let mut commands: BTreeMap<String, String> = Tool::ALL
        .iter()
        .map(|tool| {
            (tool.to_string(), analysis_command(*tool, scenario, target, context))
        })
        .collect();
    commands.insert(
        "configured".to_string(),
        analysis_command(store.preferred_tool(), scenario, target, context),
    );
    commands
}
