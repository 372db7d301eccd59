use crate::diagnostic::Diagnostic;
use crate::text::Edit;
use serde::{Deserialize, Serialize};

/// Label used for every missing-member insertion fix.
pub const MISSING_MEMBER_LABEL: &str = "Manifest missing a required member";

/// A suggested, host-applicable fix for one diagnostic.
///
/// The engine returns fixes fully self-contained; the host decides whether
/// to present and apply them. A fix always carries at least one edit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fix {
    /// Human-readable label. Either [`MISSING_MEMBER_LABEL`] or the literal
    /// diagnostic code for value replacements.
    pub label: String,

    /// Edits in the order they were synthesized.
    pub edits: Vec<Edit>,

    /// The diagnostics this fix addresses.
    #[serde(default)]
    pub diagnostics: Vec<Diagnostic>,
}

impl Fix {
    pub fn new(label: impl Into<String>, edits: Vec<Edit>, diagnostic: Diagnostic) -> Self {
        Self {
            label: label.into(),
            edits,
            diagnostics: vec![diagnostic],
        }
    }
}
