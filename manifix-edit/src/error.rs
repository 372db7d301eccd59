use thiserror::Error;

/// Failures while translating described edits into concrete text changes.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EditError {
    #[error("line {line} out of bounds (document has {line_count} lines)")]
    LineOutOfBounds { line: usize, line_count: usize },

    #[error("column {column} out of bounds on line {line} (line length {length})")]
    ColumnOutOfBounds {
        line: usize,
        column: usize,
        length: usize,
    },

    #[error("edit {index} has an inverted range")]
    InvertedRange { index: usize },

    #[error("edits overlap at byte offset {offset}")]
    OverlappingEdits { offset: usize },
}
