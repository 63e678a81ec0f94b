//! Display-line model for decoded signaling reports.
//!
//! The decoder and assembler emit an ordered, append-only sequence of
//! [`ReportLine`]s. Consumers scroll, paginate, or write them to a text
//! file; nothing downstream needs random access or re-parsing. Indentation
//! conveys nesting (frame / subframe / PLP / nested list) for display only.

use std::fmt;

use serde::Serialize;

/// One line of a decoded report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ReportLine {
    /// Section banner, e.g. `--- L1-Basic Signaling ---`.
    Section { title: String },
    /// Nested group header, e.g. `Subframe #0:` or `    PLP #1:`.
    Group { depth: u8, title: String },
    /// One decoded signaling field or annotation.
    Field { depth: u8, label: String, value: String },
    /// Verbatim device text (PLP info lines).
    Text { text: String },
    /// Horizontal separator between report blocks.
    Rule,
    /// Empty spacer line.
    Blank,
    /// The buffer ran out before the signaling grammar did; everything
    /// before this marker decoded normally.
    Truncated,
}

impl ReportLine {
    pub fn section(title: impl Into<String>) -> Self {
        ReportLine::Section { title: title.into() }
    }

    pub fn group(depth: u8, title: impl Into<String>) -> Self {
        ReportLine::Group {
            depth,
            title: title.into(),
        }
    }

    pub fn field(depth: u8, label: impl Into<String>, value: impl Into<String>) -> Self {
        ReportLine::Field {
            depth,
            label: label.into(),
            value: value.into(),
        }
    }

    pub fn text(text: impl Into<String>) -> Self {
        ReportLine::Text { text: text.into() }
    }
}

const RULE_WIDTH: usize = 40;

fn indent(depth: u8) -> String {
    "  ".repeat(depth as usize)
}

impl fmt::Display for ReportLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportLine::Section { title } => write!(f, "--- {} ---", title),
            ReportLine::Group { depth, title } => write!(f, "{}{}:", indent(*depth), title),
            ReportLine::Field { depth, label, value } => {
                write!(f, "{}{}: {}", indent(*depth), label, value)
            }
            ReportLine::Text { text } => f.write_str(text),
            ReportLine::Rule => f.write_str(&"-".repeat(RULE_WIDTH)),
            ReportLine::Blank => Ok(()),
            ReportLine::Truncated => f.write_str("--- Truncated ---"),
        }
    }
}

/// Render a report as newline-terminated text, one line per entry.
///
/// This is the exact format written when the user saves the details screen
/// to a file.
pub fn render_report(lines: &[ReportLine]) -> String {
    let mut out = String::new();
    for line in lines {
        out.push_str(&line.to_string());
        out.push('\n');
    }
    out
}
