use manifix_rules::FieldRule;
use manifix_types::diagnostic::Diagnostic;
use tracing::debug;

/// How a diagnostic's fix must be expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixMode {
    /// The member is missing entirely; insert a placeholder near the top of
    /// the document.
    Insert,
    /// The member exists with an invalid value; replace the text after its
    /// colon with the rule's default.
    Replace,
}

/// Decide whether a diagnostic qualifies for a fix, and which kind.
///
/// A `global` diagnostic names the missing member in its `source`; every
/// other qualifying diagnostic names the offending member directly as its
/// `code`. Diagnostics matching no rule yield `None` and are skipped.
pub fn interpret(diagnostic: &Diagnostic) -> Option<(&'static FieldRule, FixMode)> {
    if diagnostic.is_global() {
        let Some(rule) = manifix_rules::lookup(&diagnostic.source) else {
            debug!(source = %diagnostic.source, "global diagnostic for unknown member");
            return None;
        };
        return Some((rule, FixMode::Insert));
    }

    let Some(rule) = manifix_rules::lookup(&diagnostic.code) else {
        debug!(code = %diagnostic.code, "no field rule for diagnostic code");
        return None;
    };
    Some((rule, FixMode::Replace))
}

#[cfg(test)]
mod tests {
    use super::*;
    use manifix_types::diagnostic::{GLOBAL_CODE, Severity};
    use manifix_types::text::{Position, TextRange};

    fn diag(code: &str, source: &str) -> Diagnostic {
        Diagnostic {
            code: code.to_string(),
            source: source.to_string(),
            range: TextRange::at(Position::new(0, 0)),
            message: None,
            severity: Severity::Warning,
        }
    }

    #[test]
    fn global_diagnostic_maps_to_insert() {
        let (rule, mode) = interpret(&diag(GLOBAL_CODE, "name")).expect("fix");
        assert_eq!(rule.member, "name");
        assert_eq!(mode, FixMode::Insert);
    }

    #[test]
    fn member_code_maps_to_replace() {
        let (rule, mode) = interpret(&diag("theme_color", "manifest-validator")).expect("fix");
        assert_eq!(rule.member, "theme_color");
        assert_eq!(mode, FixMode::Replace);
    }

    #[test]
    fn global_diagnostic_with_unknown_source_yields_nothing() {
        assert!(interpret(&diag(GLOBAL_CODE, "no_such_member")).is_none());
    }

    #[test]
    fn unknown_code_yields_nothing() {
        assert!(interpret(&diag("no_such_member", "manifest-validator")).is_none());
    }
}
