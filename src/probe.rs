//! Tool availability probing
//!
//! Resolves each supported tool's executable aliases on the current search
//! path. Probing is side-effect free and re-runs on every call so a freshly
//! installed tool is picked up without restarting anything.

use crate::domain::{Tool, ToolAvailability};
use std::collections::BTreeMap;

const NOT_FOUND: &str = "Not found";

/// Probe PATH for every supported tool.
pub fn detect_available_tools() -> BTreeMap<Tool, ToolAvailability> {
    Tool::ALL.iter().map(|tool| (*tool, probe_tool(*tool))).collect()
}

/// Probe PATH for a single tool. The first alias that resolves wins.
pub fn probe_tool(tool: Tool) -> ToolAvailability {
    for alias in tool.aliases() {
        if let Ok(path) = which::which(alias) {
            return ToolAvailability {
                available: true,
                command: path.to_string_lossy().to_string(),
            };
        }
    }
    ToolAvailability { available: false, command: NOT_FOUND.to_string() }
}
