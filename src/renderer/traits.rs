use tracing::warn;

/// Heading markup strategy. The tree walk is shared across output formats;
/// only heading lines differ, so this is the whole per-format surface.
pub trait HeadingFormat {
    fn format_heading(&self, text: &str, depth: usize) -> String;
}

/// Headings are bare paragraphs in plain text.
pub struct PlainText;

impl HeadingFormat for PlainText {
    fn format_heading(&self, text: &str, _depth: usize) -> String {
        format!("{}\n\n", text)
    }
}

pub struct Markdown;

impl HeadingFormat for Markdown {
    fn format_heading(&self, text: &str, depth: usize) -> String {
        // Markdown defines six heading levels. Deeper nesting is reported
        // but still emitted as computed, never clamped.
        if depth > 5 {
            warn!(depth, "nesting too deep, Markdown will not produce the expected result");
        }
        format!("{} {}\n\n", "#".repeat(depth + 1), text)
    }
}

pub struct Wiki;

impl HeadingFormat for Wiki {
    fn format_heading(&self, text: &str, depth: usize) -> String {
        format!("h{}. {}\n\n", depth + 1, text)
    }
}

/// Output format selection, as chosen on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    PlainText,
    Markdown,
    Wiki,
}

impl OutputFormat {
    pub fn heading_format(&self) -> &'static dyn HeadingFormat {
        match self {
            OutputFormat::PlainText => &PlainText,
            OutputFormat::Markdown => &Markdown,
            OutputFormat::Wiki => &Wiki,
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::PlainText => ".txt",
            OutputFormat::Markdown => ".md",
            OutputFormat::Wiki => ".wiki",
        }
    }
}
