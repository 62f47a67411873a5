//! Preference store backed by a JSON config file

use crate::domain::{ConfigStatus, Tool};
use crate::probe;
use anyhow::{Context, Result};
use serde_json::{Map, Value};
use std::fs;
use std::path::PathBuf;

const CONFIG_FILE: &str = "code_analyzer_config.json";
const PREFERRED_TOOL_KEY: &str = "preferred_tool";

/// Reads and writes the preferred-tool setting.
///
/// The file is read on every query; there is no in-memory cache. Concurrent
/// `set_preferred_tool` calls race read-modify-write (last writer wins).
pub struct ConfigStore {
    config_file: PathBuf,
    default_tool: Tool,
}

impl ConfigStore {
    /// Store at the fixed per-user path:
    /// `<config-dir>/code-analyzer/code_analyzer_config.json`.
    pub fn new() -> Self {
        let config_dir = dirs::config_dir()
            .or_else(|| dirs::home_dir().map(|home| home.join(".config")))
            .unwrap_or_else(|| PathBuf::from("."));
        Self::with_path(config_dir.join("code-analyzer").join(CONFIG_FILE))
    }

    /// Store at an explicit path. Used by tests to avoid touching the real
    /// user configuration.
    pub fn with_path(config_file: PathBuf) -> Self {
        Self { config_file, default_tool: Tool::default() }
    }

    pub fn path(&self) -> &PathBuf {
        &self.config_file
    }

    /// The configured tool, or the default when the file is missing,
    /// unreadable, malformed, or holds an out-of-vocabulary value.
    /// Read faults are warnings, never errors.
    pub fn preferred_tool(&self) -> Tool {
        match self.read_existing() {
            Some(config) => config
                .get(PREFERRED_TOOL_KEY)
                .and_then(Value::as_str)
                .and_then(|name| name.parse::<Tool>().ok())
                .unwrap_or(self.default_tool),
            None => self.default_tool,
        }
    }

    /// Persist the preferred tool, merging into any existing JSON object so
    /// unrelated keys are preserved. Write faults propagate to the caller.
    pub fn set_preferred_tool(&self, tool: Tool) -> Result<()> {
        if let Some(parent) = self.config_file.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let mut config = self.read_existing().unwrap_or_default();
        config.insert(PREFERRED_TOOL_KEY.to_string(), Value::String(tool.to_string()));

        let body = serde_json::to_string_pretty(&config).context("Failed to encode config")?;
        fs::write(&self.config_file, body).with_context(|| {
            format!("Failed to save configuration: {}", self.config_file.display())
        })?;
        Ok(())
    }

    /// Preference plus live probe results and the effective tool.
    pub fn status(&self) -> ConfigStatus {
        let preferred_tool = self.preferred_tool();
        let available_tools = probe::detect_available_tools();
        let effective_tool = available_tools
            .get(&preferred_tool)
            .filter(|info| info.available)
            .map(|_| preferred_tool);

        ConfigStatus { preferred_tool, available_tools, effective_tool }
    }

    fn read_existing(&self) -> Option<Map<String, Value>> {
        if !self.config_file.exists() {
            return None;
        }
        let content = match fs::read_to_string(&self.config_file) {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!("Failed to read configuration file {}: {e}", self.config_file.display());
                return None;
            }
        };
        match serde_json::from_str::<Value>(&content) {
            Ok(Value::Object(map)) => Some(map),
            Ok(_) => {
                tracing::warn!(
                    "Configuration file {} is not a JSON object, ignoring",
                    self.config_file.display()
                );
                None
            }
            Err(e) => {
                tracing::warn!("Failed to parse configuration file {}: {e}", self.config_file.display());
                None
            }
        }
    }
}

impl Default for ConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_in(tmp: &TempDir) -> ConfigStore {
        ConfigStore::with_path(tmp.path().join("nested").join(CONFIG_FILE))
    }

    #[test]
    fn test_missing_file_returns_default() {
        let tmp = TempDir::new().expect("tmp");
        assert_eq!(store_in(&tmp).preferred_tool(), Tool::Qwen);
    }

    #[test]
    fn test_set_then_get_round_trips() {
        let tmp = TempDir::new().expect("tmp");
        let store = store_in(&tmp);
        store.set_preferred_tool(Tool::Gemini).expect("set");
        assert_eq!(store.preferred_tool(), Tool::Gemini);
    }

    #[test]
    fn test_set_creates_parent_directories() {
        let tmp = TempDir::new().expect("tmp");
        let store = store_in(&tmp);
        store.set_preferred_tool(Tool::Qwen).expect("set");
        assert!(store.path().exists());
    }

    #[test]
    fn test_set_preserves_unknown_keys() {
        let tmp = TempDir::new().expect("tmp");
        let store = store_in(&tmp);
        fs::create_dir_all(store.path().parent().expect("parent")).expect("mkdir");
        fs::write(store.path(), r#"{"theme": "dark", "preferred_tool": "gemini"}"#)
            .expect("seed config");

        store.set_preferred_tool(Tool::Qwen).expect("set");

        let raw = fs::read_to_string(store.path()).expect("read back");
        let config: Value = serde_json::from_str(&raw).expect("json");
        assert_eq!(config["theme"], "dark");
        assert_eq!(config["preferred_tool"], "qwen");
    }

    #[test]
    fn test_malformed_json_reads_as_default() {
        let tmp = TempDir::new().expect("tmp");
        let store = store_in(&tmp);
        fs::create_dir_all(store.path().parent().expect("parent")).expect("mkdir");
        fs::write(store.path(), "{not json").expect("seed config");

        assert_eq!(store.preferred_tool(), Tool::Qwen);
    }

    #[test]
    fn test_out_of_vocabulary_value_reads_as_default() {
        let tmp = TempDir::new().expect("tmp");
        let store = store_in(&tmp);
        fs::create_dir_all(store.path().parent().expect("parent")).expect("mkdir");
        fs::write(store.path(), r#"{"preferred_tool": "copilot"}"#).expect("seed config");

        assert_eq!(store.preferred_tool(), Tool::Qwen);
    }

    #[test]
    fn test_non_object_json_reads_as_default() {
        let tmp = TempDir::new().expect("tmp");
        let store = store_in(&tmp);
        fs::create_dir_all(store.path().parent().expect("parent")).expect("mkdir");
        fs::write(store.path(), "[1, 2, 3]").expect("seed config");

        assert_eq!(store.preferred_tool(), Tool::Qwen);
    }
}
