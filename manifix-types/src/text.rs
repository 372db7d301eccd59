use serde::{Deserialize, Serialize};

/// A zero-based line/column position within a document.
///
/// Columns are byte offsets within the line's text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// A half-open span between two positions in a document.
///
/// Coordinates are line/column based, matching the editor hosts that produce
/// diagnostics. The document itself is never carried inside a range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextRange {
    pub start: Position,
    pub end: Position,
}

impl TextRange {
    pub fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// A collapsed range at a single position (used for insertions).
    pub fn at(pos: Position) -> Self {
        Self {
            start: pos,
            end: pos,
        }
    }

    /// A range confined to one line.
    pub fn on_line(line: usize, start_col: usize, end_col: usize) -> Self {
        Self {
            start: Position::new(line, start_col),
            end: Position::new(line, end_col),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Edit operation kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EditOp {
    Insert,
    Replace,
}

/// A described change against a document.
///
/// Edits are descriptions only: the engine never applies them itself, it
/// hands them to the host (or to `manifix-edit`) to apply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edit {
    pub range: TextRange,
    pub op: EditOp,
    pub text: String,
}

impl Edit {
    pub fn insert(at: Position, text: impl Into<String>) -> Self {
        Self {
            range: TextRange::at(at),
            op: EditOp::Insert,
            text: text.into(),
        }
    }

    pub fn replace(range: TextRange, text: impl Into<String>) -> Self {
        Self {
            range,
            op: EditOp::Replace,
            text: text.into(),
        }
    }
}
