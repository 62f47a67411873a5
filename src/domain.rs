//! Shared types for the analysis wrapper

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// External analysis CLI selected by configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tool {
    Gemini,
    #[default]
    Qwen,
}

/// Raised when a tool name outside the supported vocabulary is given.
///
/// Rejection happens at parse time, before any file-system access.
#[derive(Debug, thiserror::Error)]
#[error("tool must be 'gemini' or 'qwen', got '{0}'")]
pub struct ParseToolError(pub String);

impl Tool {
    pub const ALL: [Tool; 2] = [Tool::Gemini, Tool::Qwen];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tool::Gemini => "gemini",
            Tool::Qwen => "qwen",
        }
    }

    /// Executable prefix used when composing the analysis command.
    ///
    /// The Gemini CLI installs its shell entrypoint as `geminicli`, not
    /// `gemini`; Qwen uses its own name.
    pub fn invocation(&self) -> &'static str {
        match self {
            Tool::Gemini => "geminicli",
            Tool::Qwen => "qwen",
        }
    }

    /// Executable aliases probed on PATH, in preference order.
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            Tool::Gemini => &["geminicli", "gemini"],
            Tool::Qwen => &["qwen"],
        }
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tool {
    type Err = ParseToolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "gemini" => Ok(Tool::Gemini),
            "qwen" => Ok(Tool::Qwen),
            other => Err(ParseToolError(other.to_string())),
        }
    }
}

/// Outcome of one subprocess invocation.
#[derive(Debug, Clone, Serialize)]
pub struct ExecutionResult {
    pub success: bool,
    pub returncode: i32,
    pub stdout: String,
    pub stderr: String,
    pub command: String,
}

impl ExecutionResult {
    /// Structured failure carrying a message instead of captured output.
    pub fn failure(command: impl Into<String>, stderr: impl Into<String>) -> Self {
        Self {
            success: false,
            returncode: -1,
            stdout: String::new(),
            stderr: stderr.into(),
            command: command.into(),
        }
    }
}

/// Outcome of an optimized run: bounded summary plus a pointer to the
/// side file holding the full output.
#[derive(Debug, Clone, Serialize)]
pub struct SummaryResult {
    pub success: bool,
    pub summary: String,
    pub full_output_path: PathBuf,
    pub total_lines: usize,
    pub command: String,
    pub returncode: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retry_info: Option<String>,
}

/// The optimized and retry entry points either produce a summary or pass
/// a failure result through unchanged.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum RunOutcome {
    Summarized(SummaryResult),
    Failed(ExecutionResult),
}

impl RunOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, RunOutcome::Summarized(_))
    }
}

/// Whether a tool resolves on the current search path, and where.
#[derive(Debug, Clone, Serialize)]
pub struct ToolAvailability {
    pub available: bool,
    /// Resolved executable path, or the literal "Not found".
    pub command: String,
}

/// Snapshot of the current configuration: preference, probe results, and
/// the tool that would actually run.
#[derive(Debug, Clone, Serialize)]
pub struct ConfigStatus {
    pub preferred_tool: Tool,
    pub available_tools: BTreeMap<Tool, ToolAvailability>,
    /// Preferred tool if it is installed, otherwise `None`.
    pub effective_tool: Option<Tool>,
}
