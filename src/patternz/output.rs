//! # Output Buffer
//!
//! Both demos describe their work as a sequence of printed lines. Instead of
//! writing to stdout directly, the core appends [`Line`]s to an [`Output`]
//! buffer and the CLI decides how to render them. Each line carries a
//! [`LineStyle`] so the renderer can pick colors without parsing text.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    /// A data line: a customer name, a vehicle part.
    Plain,
    /// A label introducing a block ("Customer Group: ..", "Vehicle Type: ..").
    Heading,
    /// A separator made of dashes.
    Rule,
    Blank,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub style: LineStyle,
    pub text: String,
}

impl Line {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            style: LineStyle::Plain,
            text: text.into(),
        }
    }

    pub fn heading(text: impl Into<String>) -> Self {
        Self {
            style: LineStyle::Heading,
            text: text.into(),
        }
    }

    pub fn rule(width: usize) -> Self {
        Self {
            style: LineStyle::Rule,
            text: "-".repeat(width),
        }
    }

    pub fn blank() -> Self {
        Self {
            style: LineStyle::Blank,
            text: String::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Output {
    lines: Vec<Line>,
}

impl Output {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, line: Line) {
        self.lines.push(line);
    }

    pub fn plain(&mut self, text: impl Into<String>) {
        self.push(Line::plain(text));
    }

    pub fn heading(&mut self, text: impl Into<String>) {
        self.push(Line::heading(text));
    }

    pub fn rule(&mut self, width: usize) {
        self.push(Line::rule(width));
    }

    pub fn blank(&mut self) {
        self.push(Line::blank());
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Line texts without styling, in order.
    pub fn texts(&self) -> Vec<&str> {
        self.lines.iter().map(|l| l.text.as_str()).collect()
    }

    /// Last line written, if any.
    pub fn last_text(&self) -> Option<&str> {
        self.lines.last().map(|l| l.text.as_str())
    }
}

impl std::fmt::Display for Output {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for line in &self.lines {
            writeln!(f, "{}", line.text)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rule_is_dashes_of_width() {
        assert_eq!(Line::rule(4).text, "----");
    }

    #[test]
    fn display_joins_lines_with_newlines() {
        let mut out = Output::new();
        out.heading("Title");
        out.blank();
        out.plain(" item");
        assert_eq!(out.to_string(), "Title\n\n item\n");
    }

    #[test]
    fn last_text_is_most_recent_line() {
        let mut out = Output::new();
        assert_eq!(out.last_text(), None);
        out.plain("one");
        out.rule(2);
        assert_eq!(out.texts(), vec!["one", "--"]);
        assert_eq!(out.last_text(), Some("--"));
    }
}
