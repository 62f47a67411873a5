//! Execution engine
//!
//! Three entry points layered on one primitive: a base run that shells out
//! with a timeout, an optimized run that persists full output to a side file
//! and returns a bounded summary, and a retry run that wraps the optimized
//! run in a bounded retry loop. Every failure mode is folded into a result
//! record; nothing here returns `Err`.

pub mod summary;

use crate::domain::{ExecutionResult, RunOutcome, SummaryResult};
use anyhow::Context;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Default subprocess timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 300;
/// Default retry budget (total attempts = retries + 1).
pub const DEFAULT_MAX_RETRIES: u32 = 2;
/// Fixed pause between retry attempts.
const RETRY_PAUSE: Duration = Duration::from_secs(2);

const SEPARATOR_WIDTH: usize = 80;

/// Run `command` through `sh -c` with a timeout, capturing everything into
/// an [`ExecutionResult`]. Timeouts and launch faults become structured
/// failures with `returncode = -1`.
pub fn run(command: &str, timeout_secs: u64) -> ExecutionResult {
    tracing::info!("Executing analysis command: {command}");

    let runtime = match tokio::runtime::Runtime::new().context("Failed to create Tokio runtime") {
        Ok(runtime) => runtime,
        Err(e) => return ExecutionResult::failure(command, format!("Execution failed: {e}")),
    };
    runtime.block_on(run_async(command, timeout_secs))
}

async fn run_async(command: &str, timeout_secs: u64) -> ExecutionResult {
    let child = tokio::process::Command::new("sh")
        .arg("-c")
        .arg(command)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .spawn();

    let child = match child {
        Ok(child) => child,
        Err(e) => return ExecutionResult::failure(command, format!("Execution failed: {e}")),
    };

    match tokio::time::timeout(Duration::from_secs(timeout_secs), child.wait_with_output()).await {
        Ok(Ok(output)) => ExecutionResult {
            success: output.status.success(),
            returncode: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            command: command.to_string(),
        },
        Ok(Err(e)) => ExecutionResult::failure(command, format!("Execution failed: {e}")),
        // kill_on_drop reaps the child when the timeout fires.
        Err(_) => ExecutionResult::failure(
            command,
            format!("Command timed out after {timeout_secs} seconds"),
        ),
    }
}

/// Base run plus side-file persistence and summary extraction.
///
/// Failures of the base run pass through unchanged. A side-file write fault
/// also becomes a failure; the captured output is lost in that path since
/// only the summary shape carries it forward.
pub fn run_optimized(command: &str, timeout_secs: u64, output_dir: &Path) -> RunOutcome {
    let result = run(command, timeout_secs);
    if !result.success {
        return RunOutcome::Failed(result);
    }

    let full_output_path =
        match write_side_file(output_dir, &result.command, &result.stdout, &result.stderr) {
            Ok(path) => path,
            Err(e) => {
                return RunOutcome::Failed(ExecutionResult::failure(
                    result.command,
                    format!("Failed to save output file: {e}"),
                ))
            }
        };

    let (summary, total_lines) = summary::summarize(&result.stdout);

    RunOutcome::Summarized(SummaryResult {
        success: true,
        summary,
        full_output_path,
        total_lines,
        command: result.command,
        returncode: result.returncode,
        retry_info: None,
    })
}

/// Optimized run wrapped in a bounded retry loop with a fixed 2 second
/// pause between attempts.
pub fn run_with_retry(
    command: &str,
    timeout_secs: u64,
    max_retries: u32,
    output_dir: &Path,
) -> RunOutcome {
    retry_with_pause(
        || run_optimized(command, timeout_secs, output_dir),
        max_retries,
        RETRY_PAUSE,
    )
}

/// Generic bounded retry over a fallible run operation.
///
/// Success at attempt `n > 0` is annotated with `retry_info`. Exhaustion
/// yields a failure whose `command` is the literal "unknown": the command is
/// not tracked across attempts in this path.
pub fn retry_with_pause<F>(mut op: F, max_retries: u32, pause: Duration) -> RunOutcome
where
    F: FnMut() -> RunOutcome,
{
    for attempt in 0..=max_retries {
        match op() {
            RunOutcome::Summarized(mut result) => {
                if attempt > 0 {
                    let noun = if attempt == 1 { "retry" } else { "retries" };
                    result.retry_info = Some(format!("Succeeded after {attempt} {noun}"));
                }
                return RunOutcome::Summarized(result);
            }
            RunOutcome::Failed(failure) => {
                if attempt < max_retries {
                    tracing::warn!(
                        "Analysis failed, retrying (attempt {}/{max_retries}): {}",
                        attempt + 1,
                        failure.stderr
                    );
                    std::thread::sleep(pause);
                }
            }
        }
    }

    RunOutcome::Failed(ExecutionResult::failure(
        "unknown",
        format!("Analysis failed after {max_retries} retries"),
    ))
}

/// Persist the full run output to `<dir>/code-analysis-<epoch>.txt`.
///
/// Naming by epoch second avoids collisions across rapid calls only
/// best-effort: same-second runs overwrite each other.
fn write_side_file(
    dir: &Path,
    command: &str,
    stdout: &str,
    stderr: &str,
) -> std::io::Result<PathBuf> {
    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let path = dir.join(format!("code-analysis-{timestamp}.txt"));

    let mut file = std::fs::File::create(&path)?;
    writeln!(file, "Command: {command}")?;
    writeln!(file, "Timestamp: {}", chrono::Local::now().format("%a %b %e %H:%M:%S %Y"))?;
    writeln!(file, "{}", "=".repeat(SEPARATOR_WIDTH))?;
    writeln!(file)?;
    file.write_all(stdout.as_bytes())?;
    if !stderr.is_empty() {
        write!(file, "\n\n{}\nSTDERR:\n", "=".repeat(SEPARATOR_WIDTH))?;
        file.write_all(stderr.as_bytes())?;
    }
    Ok(path)
}
