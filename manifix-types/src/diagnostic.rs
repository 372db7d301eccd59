use crate::text::TextRange;
use serde::{Deserialize, Serialize};

/// The diagnostic code used when a required top-level member is missing.
///
/// Validators report missing members with this fixed code and put the member
/// name in [`Diagnostic::source`] instead of using a per-member code.
pub const GLOBAL_CODE: &str = "global";

/// A problem reported against a manifest document.
///
/// Produced by external validation, consumed read-only here. manifix is
/// tolerant when reading diagnostics: unknown fields are ignored and optional
/// fields may be absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Machine-readable code. Either [`GLOBAL_CODE`] or the name of the
    /// offending manifest member.
    pub code: String,

    /// For `global` diagnostics, the name of the missing member. Otherwise
    /// the identifier of the validator that produced the diagnostic.
    #[serde(default)]
    pub source: String,

    pub range: TextRange,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(default)]
    pub severity: Severity,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    #[default]
    Warning,
    Error,
    Info,
}

impl Diagnostic {
    /// True when this diagnostic reports a missing required top-level member.
    pub fn is_global(&self) -> bool {
        self.code == GLOBAL_CODE
    }
}

/// On-disk envelope for a batch of diagnostics, e.g. the output of an
/// external manifest validator handed to the `manifix fix` command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiagnosticsFile {
    /// Schema identifier, e.g. "manifix.diagnostics.v1".
    pub schema: String,

    /// Identifier of the tool that produced the diagnostics.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool: Option<String>,

    #[serde(default)]
    pub diagnostics: Vec<Diagnostic>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::{Position, TextRange};

    #[test]
    fn severity_defaults_to_warning() {
        let json = serde_json::json!({
            "code": "theme_color",
            "range": {
                "start": { "line": 3, "column": 18 },
                "end": { "line": 3, "column": 27 }
            }
        });
        let d: Diagnostic = serde_json::from_value(json).expect("deserialize");
        assert_eq!(d.severity, Severity::Warning);
        assert_eq!(d.source, "");
        assert!(!d.is_global());
    }

    #[test]
    fn global_diagnostic_is_detected() {
        let d = Diagnostic {
            code: GLOBAL_CODE.to_string(),
            source: "name".to_string(),
            range: TextRange::at(Position::new(0, 0)),
            message: None,
            severity: Severity::Error,
        };
        assert!(d.is_global());
    }

    #[test]
    fn diagnostics_file_tolerates_missing_fields() {
        let json = serde_json::json!({
            "schema": crate::schema::MANIFIX_DIAGNOSTICS_V1,
            "extra_field": true
        });
        let f: DiagnosticsFile = serde_json::from_value(json).expect("deserialize");
        assert!(f.diagnostics.is_empty());
        assert!(f.tool.is_none());
    }
}
