//! Edit application for manifix fixes.
//!
//! The code-action engine only *describes* edits; this crate is the host
//! surface that applies them to manifest text and renders a unified diff
//! preview. Callers decide whether the result is written back to disk.

mod error;

pub use error::EditError;

use diffy::PatchFormatter;
use manifix_types::action::Fix;
use manifix_types::text::{Edit, EditOp, Position};
use tracing::debug;

/// Apply a single fix to manifest text, returning the new text.
pub fn apply_fix(text: &str, fix: &Fix) -> Result<String, EditError> {
    apply_edits(text, &fix.edits)
}

/// Apply every fix in order, as one batch of edits against the same
/// original text.
///
/// All ranges are interpreted against `text` as given, so edits from
/// different fixes must not overlap. Insertions at the same position are
/// fine and land in fix order.
pub fn apply_all(text: &str, fixes: &[Fix]) -> Result<String, EditError> {
    let edits: Vec<Edit> = fixes.iter().flat_map(|f| f.edits.iter().cloned()).collect();
    apply_edits(text, &edits)
}

/// Render a unified diff between the original and edited text.
pub fn render_patch(before: &str, after: &str) -> String {
    let patch = diffy::create_patch(before, after);
    PatchFormatter::new().fmt_patch(&patch).to_string()
}

fn apply_edits(text: &str, edits: &[Edit]) -> Result<String, EditError> {
    let mut spans = Vec::with_capacity(edits.len());
    for (index, edit) in edits.iter().enumerate() {
        let start = offset_of(text, edit.range.start)?;
        let end = match edit.op {
            EditOp::Insert => start,
            EditOp::Replace => offset_of(text, edit.range.end)?,
        };
        if end < start {
            return Err(EditError::InvertedRange { index });
        }
        spans.push((start, end, index, edit.text.as_str()));
    }

    // Reject overlapping spans; collapsed insertions at a shared position
    // are allowed.
    let mut check = spans.clone();
    check.sort_by_key(|&(start, end, index, _)| (start, end, index));
    for pair in check.windows(2) {
        let (_, prev_end, _, _) = pair[0];
        let (next_start, _, _, _) = pair[1];
        if next_start < prev_end {
            return Err(EditError::OverlappingEdits { offset: next_start });
        }
    }

    // Apply bottom-up so earlier spans keep their offsets. For insertions at
    // the same position, the later edit is applied first so the batch lands
    // in its original order.
    spans.sort_by(|a, b| (b.0, b.1, b.2).cmp(&(a.0, a.1, a.2)));

    let mut out = text.to_string();
    for (start, end, _, replacement) in spans {
        out.replace_range(start..end, replacement);
    }

    debug!(edits = edits.len(), "applied edit batch");
    Ok(out)
}

/// Translate a line/column position into a byte offset into `text`.
fn offset_of(text: &str, pos: Position) -> Result<usize, EditError> {
    let mut line_start = 0usize;
    let mut line_index = 0usize;

    for line in text.split('\n') {
        if line_index == pos.line {
            if pos.column > line.len() || !line.is_char_boundary(pos.column) {
                return Err(EditError::ColumnOutOfBounds {
                    line: pos.line,
                    column: pos.column,
                    length: line.len(),
                });
            }
            return Ok(line_start + pos.column);
        }
        line_start += line.len() + 1;
        line_index += 1;
    }

    Err(EditError::LineOutOfBounds {
        line: pos.line,
        line_count: line_index,
    })
}
