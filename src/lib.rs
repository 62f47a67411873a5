//! code-analyzer: drive external AI code-analysis CLIs
//!
//! A thin orchestration layer that selects between the Gemini and Qwen
//! code-analysis CLIs, builds a prompt from a fixed catalog of analysis
//! scenarios, shells out to the chosen tool, and renders or summarizes the
//! captured output.

pub mod catalog;
pub mod cli;
pub mod command;
pub mod config;
pub mod domain;
pub mod exec;
pub mod probe;
