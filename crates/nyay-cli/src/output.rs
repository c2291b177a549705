//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use nyay_domain::{Source, VerdictRecord, VerdictsResponse};
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Summaries longer than this are cut in table output.
const SUMMARY_WIDTH: usize = 60;

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format a parsed response.
    pub fn format_response(&self, response: &VerdictsResponse) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(response)?),
            OutputFormat::Table => Ok(self.format_response_table(response)),
            OutputFormat::Quiet => Ok(self.format_verdicts_quiet(&response.verdicts)),
        }
    }

    /// Format verdicts as a table, followed by any sources.
    fn format_response_table(&self, response: &VerdictsResponse) -> String {
        if response.verdicts.is_empty() {
            return self.colorize("No verdicts found.", "yellow");
        }

        let mut builder = Builder::default();
        builder.push_record(["#", "Case Name", "Court", "Date", "Summary"]);

        for record in &response.verdicts {
            builder.push_record([
                (record.id + 1).to_string(),
                record.case_name.clone(),
                self.field_cell(&record.court, record.has_court()),
                self.field_cell(&record.date, record.has_date()),
                truncate(&record.summary, SUMMARY_WIDTH),
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        let mut output = table.to_string();
        if !response.sources.is_empty() {
            output.push_str("\n\n");
            output.push_str(&self.format_sources(&response.sources));
        }
        output
    }

    /// Format verdicts in quiet mode (case names only).
    fn format_verdicts_quiet(&self, verdicts: &[VerdictRecord]) -> String {
        let names: Vec<&str> = verdicts.iter().map(|v| v.case_name.as_str()).collect();
        names.join("\n")
    }

    /// Table cell for a field that may hold the `N/A` placeholder, dimmed when missing.
    fn field_cell(&self, value: &str, present: bool) -> String {
        if present || !self.color_enabled {
            value.to_string()
        } else {
            value.dimmed().to_string()
        }
    }

    /// Format a source list; untitled sources show their URI.
    pub fn format_sources(&self, sources: &[Source]) -> String {
        let mut lines = vec![self.colorize("Sources:", "cyan")];
        for source in sources {
            if source.title.trim().is_empty() {
                lines.push(format!("  - {}", source.uri));
            } else {
                lines.push(format!("  - {} ({})", source.title, source.uri));
            }
        }
        lines.join("\n")
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            _ => text.to_string(),
        }
    }
}

/// Cut `text` to at most `max` characters, marking the cut with an ellipsis.
fn truncate(text: &str, max: usize) -> String {
    let flat = text.replace('\n', " ");
    if flat.chars().count() <= max {
        return flat;
    }
    let kept: String = flat.chars().take(max.saturating_sub(1)).collect();
    format!("{}…", kept.trim_end())
}
