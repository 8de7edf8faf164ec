//! Incremental builder for snippet bodies

use crate::config::SnippetConfig;

use super::tabstop::TabStop;

/// One indentation unit
pub const INDENT: &str = "\t";

/// Build a snippet body from literal text, indentation, line breaks and stops
///
/// ```rust
/// use cellery_snippets::template::{SnippetWriter, TabStop};
/// use cellery_snippets::{LineEnding, SnippetConfig};
///
/// let config = SnippetConfig::new().with_line_ending(LineEnding::Lf);
/// let body = SnippetWriter::new(&config)
///     .text("x = {")
///     .line(1)
///     .stop(TabStop::with_placeholder(1, "value"))
///     .line(0)
///     .text("}")
///     .finish();
/// assert_eq!(body, "x = {\n\t${1:value}\n}");
/// ```
#[derive(Debug)]
pub struct SnippetWriter {
    out: String,
    newline: &'static str,
}

impl SnippetWriter {
    pub fn new(config: &SnippetConfig) -> Self {
        Self {
            out: String::new(),
            newline: config.line_ending.as_str(),
        }
    }

    /// Append literal text
    pub fn text(mut self, text: &str) -> Self {
        self.out.push_str(text);
        self
    }

    /// Append a tab-stop marker
    pub fn stop(mut self, stop: TabStop) -> Self {
        self.out.push_str(&stop.to_string());
        self
    }

    /// Append `depth` indentation units
    pub fn tab(mut self, depth: usize) -> Self {
        self.out.push_str(&INDENT.repeat(depth));
        self
    }

    /// Start a new line indented by `depth` units
    pub fn line(self, depth: usize) -> Self {
        let newline = self.newline;
        self.text(newline).tab(depth)
    }

    /// Splice in text that was rendered elsewhere with the same config
    pub fn raw(mut self, rendered: &str) -> Self {
        self.out.push_str(rendered);
        self
    }

    pub fn finish(self) -> String {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LineEnding;

    #[test]
    fn test_line_uses_configured_separator() {
        let config = SnippetConfig::new().with_line_ending(LineEnding::CrLf);
        let body = SnippetWriter::new(&config)
            .text("a")
            .line(2)
            .text("b")
            .finish();
        assert_eq!(body, "a\r\n\t\tb");
    }

    #[test]
    fn test_tab_zero_is_noop() {
        let config = SnippetConfig::new();
        let body = SnippetWriter::new(&config).tab(0).text("x").finish();
        assert_eq!(body, "x");
    }

    #[test]
    fn test_raw_splices_rendered_block() {
        let config = SnippetConfig::new().with_line_ending(LineEnding::Lf);
        let body = SnippetWriter::new(&config)
            .text("components: ")
            .raw("{\n\t\ta: b\n\t}")
            .line(0)
            .text("};")
            .finish();
        assert_eq!(body, "components: {\n\t\ta: b\n\t}\n};");
    }

    #[test]
    fn test_stop_renders_marker() {
        let config = SnippetConfig::new();
        let body = SnippetWriter::new(&config)
            .stop(TabStop::plain(3))
            .text(" ")
            .stop(TabStop::with_placeholder(4, "cell"))
            .finish();
        assert_eq!(body, "$3 ${4:cell}");
    }
}
