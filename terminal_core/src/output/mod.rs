//! Output lines and the append-only session log.

use serde::{Deserialize, Serialize};

/// Rendering class of an output line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineKind {
    /// Echo of the submitted input.
    Command,
    Info,
    Success,
    Error,
    /// Secondary detail such as excerpts and dates.
    Muted,
    /// Plain text, including blank spacer lines.
    Text,
}

/// One immutable line of terminal output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputLine {
    pub text: String,
    pub kind: LineKind,

    /// Nesting depth inside a listing. Purely presentational.
    #[serde(default, skip_serializing_if = "is_zero")]
    pub indent: u8,
}

fn is_zero(indent: &u8) -> bool {
    *indent == 0
}

impl OutputLine {
    pub fn new(text: impl Into<String>, kind: LineKind) -> Self {
        Self {
            text: text.into(),
            kind,
            indent: 0,
        }
    }

    pub fn command(text: impl Into<String>) -> Self {
        Self::new(text, LineKind::Command)
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self::new(text, LineKind::Info)
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::new(text, LineKind::Success)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(text, LineKind::Error)
    }

    pub fn muted(text: impl Into<String>) -> Self {
        Self::new(text, LineKind::Muted)
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self::new(text, LineKind::Text)
    }

    /// Blank spacer line.
    pub fn blank() -> Self {
        Self::text("")
    }

    pub fn indented(mut self, indent: u8) -> Self {
        self.indent = indent;
        self
    }
}

/// Ordered record of everything shown in a session.
///
/// Lines are only ever appended; `clear` is the one reset and leaves the log
/// empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OutputLog {
    lines: Vec<OutputLine>,
}

impl OutputLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, line: OutputLine) {
        self.lines.push(line);
    }

    pub fn extend(&mut self, lines: impl IntoIterator<Item = OutputLine>) {
        self.lines.extend(lines);
    }

    /// Drop every line.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn lines(&self) -> &[OutputLine] {
        &self.lines
    }

    pub fn iter(&self) -> impl Iterator<Item = &OutputLine> {
        self.lines.iter()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Lines of one kind, in order.
    pub fn of_kind(&self, kind: LineKind) -> impl Iterator<Item = &OutputLine> {
        self.lines.iter().filter(move |l| l.kind == kind)
    }

    /// Serialize the transcript as a JSON array.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_append_and_clear() {
        let mut log = OutputLog::new();
        log.push(OutputLine::command("$ blogs"));
        log.extend([OutputLine::info("Available blog posts:"), OutputLine::blank()]);

        assert_eq!(log.len(), 3);
        assert_eq!(log.lines()[0].kind, LineKind::Command);
        assert_eq!(log.of_kind(LineKind::Info).count(), 1);

        log.clear();
        assert!(log.is_empty());
    }

    #[test]
    fn test_json_transcript() {
        let mut log = OutputLog::new();
        log.push(OutputLine::error("Command not found: xyz"));
        log.push(OutputLine::muted("excerpt").indented(2));

        let json: serde_json::Value = serde_json::from_str(&log.to_json().unwrap()).unwrap();
        assert_eq!(json[0]["kind"], "error");
        assert_eq!(json[0]["text"], "Command not found: xyz");
        assert!(json[0].get("indent").is_none());
        assert_eq!(json[1]["indent"], 2);
    }
}
