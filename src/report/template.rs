//! Markdown wrapper for review reports.

use chrono::{DateTime, Local};

/// Heading of every report.
pub const REPORT_TITLE: &str = "# Code Review Report";

/// Closing line of every report.
pub const REPORT_FOOTER: &str = "*Generated by Code Review Agent*";

/// Wall-clock rendering used for the "Generated on:" line (e.g. `3/14/2026, 9:05:07 AM`).
const TIMESTAMP_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

pub fn format_timestamp(at: &DateTime<Local>) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}

/// Wrap `content` in the report template.
pub fn render_report(content: &str, generated_on: &str) -> String {
    format!(
        "{REPORT_TITLE}\n\nGenerated on: {generated_on}\n\n---\n\n{content}\n\n---\n\n{REPORT_FOOTER}\n"
    )
}
