/// Read-only, line-addressed view of a manifest document.
///
/// The engine uses this so it can run against whatever line storage the host
/// editor exposes, and against an in-memory implementation in tests.
pub trait DocumentLines {
    fn line_count(&self) -> usize;

    /// The text of one line, without its trailing newline. `None` when the
    /// index is out of bounds.
    fn line(&self, index: usize) -> Option<&str>;
}

/// `DocumentLines` over an owned string, split on `\n`.
#[derive(Debug, Clone)]
pub struct InMemoryDocument {
    lines: Vec<String>,
}

impl InMemoryDocument {
    pub fn new(text: &str) -> Self {
        Self {
            lines: text.split('\n').map(|l| l.trim_end_matches('\r').to_string()).collect(),
        }
    }
}

impl DocumentLines for InMemoryDocument {
    fn line_count(&self) -> usize {
        self.lines.len()
    }

    fn line(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_lines_and_strips_carriage_returns() {
        let doc = InMemoryDocument::new("{\r\n  \"name\": \"x\"\r\n}");
        assert_eq!(doc.line_count(), 3);
        assert_eq!(doc.line(1), Some("  \"name\": \"x\""));
        assert_eq!(doc.line(3), None);
    }

    #[test]
    fn empty_text_is_a_single_empty_line() {
        let doc = InMemoryDocument::new("");
        assert_eq!(doc.line_count(), 1);
        assert_eq!(doc.line(0), Some(""));
    }
}
