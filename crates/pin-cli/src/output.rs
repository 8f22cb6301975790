//! Output formatting for CLI
//!
//! Provides consistent output formatting across all commands:
//! - Human-readable default output
//! - JSON output (--json flag)
//! - Quiet mode for scripting (--quiet flag)

use anyhow::Result;

use pin_core::{Tag, TagTable};

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable output (default)
    Human,
    /// JSON output
    Json,
    /// Quiet mode - minimal output
    Quiet,
}

impl OutputFormat {
    /// Create format from CLI flags
    pub fn from_flags(json: bool, quiet: bool) -> Self {
        if quiet {
            OutputFormat::Quiet
        } else if json {
            OutputFormat::Json
        } else {
            OutputFormat::Human
        }
    }
}

/// Output helper for consistent formatting
pub struct Output {
    /// The output format
    pub format: OutputFormat,
}

impl Output {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Render a tag listing, keeping the order of `tags`
    pub fn format_tags(&self, tags: &[Tag]) -> Result<String> {
        let text = match self.format {
            OutputFormat::Human => TagTable::new(tags).render(tags),
            OutputFormat::Json => format!("{}\n", serde_json::to_string_pretty(tags)?),
            OutputFormat::Quiet => tags.iter().map(|t| format!("{}\n", t.name)).collect(),
        };
        Ok(text)
    }

    /// Render a response body as received, ending it with a newline
    pub fn format_raw(&self, body: &str) -> String {
        match self.format {
            OutputFormat::Quiet => String::new(),
            OutputFormat::Human | OutputFormat::Json => {
                if body.is_empty() || body.ends_with('\n') {
                    body.to_string()
                } else {
                    format!("{}\n", body)
                }
            }
        }
    }

    /// Print a response body as received
    pub fn print_raw(&self, body: &str) {
        print!("{}", self.format_raw(body));
    }
}
