//! Summary extraction over captured analysis output
//!
//! External analysis CLIs tend to front-load their findings under markdown
//! headings, so a cheap line-shape heuristic over the head of the output
//! recovers a usable digest without parsing anything.

/// How far into the output header-looking lines are scanned for.
const SCAN_WINDOW: usize = 50;
/// Leading lines kept unconditionally.
const ALWAYS_KEEP: usize = 5;
/// Hard cap on summary length.
const MAX_SUMMARY_LINES: usize = 30;
/// Below this many captured lines the summary is padded with a prefix slice.
const MIN_SUMMARY_LINES: usize = 10;
/// Prefix slice length used for padding short summaries.
const PAD_WINDOW: usize = 20;

/// Whether a single line looks like a header or key marker worth keeping.
pub fn is_header_line(line: &str) -> bool {
    line.starts_with('#')
        || line.contains("Summary")
        || line.contains("Key")
        || line.contains("Important")
        || line.contains("##")
}

/// Extract a bounded summary from raw stdout.
///
/// Scans the first 50 lines, always keeps the first 5, opportunistically
/// keeps header-looking lines, and caps at 30. When that yields fewer than
/// 10 lines the summary is padded with the first 20 lines instead, re-capped
/// at 30. Returns the summary text and the total number of newline-delimited
/// segments in the input.
pub fn summarize(stdout: &str) -> (String, usize) {
    let lines: Vec<&str> = stdout.split('\n').collect();

    let mut kept: Vec<&str> = Vec::new();
    for (index, line) in lines.iter().take(SCAN_WINDOW).enumerate() {
        if index < ALWAYS_KEEP || is_header_line(line) {
            kept.push(line);
            if kept.len() >= MAX_SUMMARY_LINES {
                break;
            }
        }
    }

    if kept.len() < MIN_SUMMARY_LINES {
        kept.extend(lines.iter().take(PAD_WINDOW).copied());
        kept.truncate(MAX_SUMMARY_LINES);
    }

    (kept.join("\n"), lines.len())
}
