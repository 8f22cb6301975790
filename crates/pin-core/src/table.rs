//! Text table layout for tag listings
//!
//! ```text
//! | Tag  | Use Count |
//! +------+-----------+
//! | go   |         3 |
//! | rust |        12 |
//! +------+-----------+
//! ```

use std::fmt::Display;

use crate::models::Tag;

const NAME_HEADER: &str = "Tag";
const COUNT_HEADER: &str = "Use Count";

/// Number of decimal digits in `n` (0 has one digit)
pub fn digit_count(mut n: u64) -> usize {
    let mut digits = 1;
    while n >= 10 {
        n /= 10;
        digits += 1;
    }
    digits
}

/// Column widths for a set of tags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagTable {
    /// Longest tag name, in characters
    pub name_width: usize,
    /// Digits in the largest use count, never narrower than the header
    pub count_width: usize,
}

impl TagTable {
    pub fn new(tags: &[Tag]) -> Self {
        let name_width = tags
            .iter()
            .map(|t| t.name.chars().count())
            .max()
            .unwrap_or(0);
        let max_count = tags.iter().map(|t| t.use_count).max().unwrap_or(0);
        let count_width = digit_count(max_count).max(COUNT_HEADER.len());

        Self {
            name_width,
            count_width,
        }
    }

    /// Horizontal rule sized to the columns
    pub fn rule(&self) -> String {
        format!(
            "+{}+{}+",
            "-".repeat(self.name_width + 2),
            "-".repeat(self.count_width + 2)
        )
    }

    /// One `| name | count |` line
    fn row(&self, name: &str, count: impl Display) -> String {
        format!(
            "| {:<nw$} | {:>cw$} |\n",
            name,
            count,
            nw = self.name_width,
            cw = self.count_width
        )
    }

    /// Render header, rule, one row per tag (in the given order) and a closing rule
    pub fn render(&self, tags: &[Tag]) -> String {
        let rule = format!("{}\n", self.rule());

        let mut out = self.row(NAME_HEADER, COUNT_HEADER);
        out.push_str(&rule);
        for tag in tags {
            out.push_str(&self.row(&tag.name, tag.use_count));
        }
        out.push_str(&rule);

        out
    }
}
