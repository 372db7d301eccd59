use crate::doc::DocumentLines;
use crate::interpret::{FixMode, interpret};
use crate::locate::locate_value_range;
use crate::synth::{insert_edit, replace_edit};
use manifix_types::action::{Fix, MISSING_MEMBER_LABEL};
use manifix_types::diagnostic::Diagnostic;
use manifix_types::text::TextRange;
use tracing::debug;

/// The editor context a fix request carries.
#[derive(Debug, Clone, Default)]
pub struct FixContext {
    pub diagnostics: Vec<Diagnostic>,
}

/// Resolves diagnostics into offered fixes.
///
/// Pure and stateless beyond the compiled-in rule table: the same document
/// and context always produce the same fixes, and nothing is mutated. Every
/// failure mode (unknown code, no matching line, empty document) degrades to
/// "offer no fix"; the provider never errors.
#[derive(Debug, Clone, Copy, Default)]
pub struct CodeActionProvider;

impl CodeActionProvider {
    pub fn new() -> Self {
        Self
    }

    /// Produce one fix per qualifying diagnostic, in context order.
    ///
    /// Diagnostics are resolved independently and aggregated rather than
    /// short-circuiting at the first match, so a request carrying several
    /// problems offers a fix for each. A fix with no edits is never emitted.
    ///
    /// The requested range is accepted for host-interface compatibility but
    /// does not influence resolution: insertions use a fixed anchor and
    /// replacements are located by member name.
    pub fn provide(
        &self,
        document: &dyn DocumentLines,
        _range: TextRange,
        context: &FixContext,
    ) -> Vec<Fix> {
        let mut fixes = Vec::new();

        for diagnostic in &context.diagnostics {
            let Some(fix) = self.resolve(document, diagnostic) else {
                continue;
            };
            fixes.push(fix);
        }

        debug!(
            diagnostics = context.diagnostics.len(),
            fixes = fixes.len(),
            "resolved code actions"
        );
        fixes
    }

    fn resolve(&self, document: &dyn DocumentLines, diagnostic: &Diagnostic) -> Option<Fix> {
        let (rule, mode) = interpret(diagnostic)?;

        match mode {
            FixMode::Insert => Some(Fix::new(
                MISSING_MEMBER_LABEL,
                vec![insert_edit(rule)],
                diagnostic.clone(),
            )),
            FixMode::Replace => {
                let range = locate_value_range(rule.member, document)?;
                Some(Fix::new(
                    diagnostic.code.clone(),
                    vec![replace_edit(rule, range)],
                    diagnostic.clone(),
                ))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::doc::InMemoryDocument;
    use manifix_types::diagnostic::{GLOBAL_CODE, Severity};
    use manifix_types::text::Position;
    use pretty_assertions::assert_eq;

    fn diag(code: &str, source: &str) -> Diagnostic {
        Diagnostic {
            code: code.to_string(),
            source: source.to_string(),
            range: TextRange::at(Position::new(0, 0)),
            message: None,
            severity: Severity::Warning,
        }
    }

    fn provide(doc: &InMemoryDocument, diagnostics: Vec<Diagnostic>) -> Vec<Fix> {
        CodeActionProvider::new().provide(
            doc,
            TextRange::at(Position::new(0, 0)),
            &FixContext { diagnostics },
        )
    }

    #[test]
    fn empty_context_offers_nothing() {
        let doc = InMemoryDocument::new("{\n}");
        assert!(provide(&doc, vec![]).is_empty());
    }

    #[test]
    fn missing_member_gets_one_insertion_fix() {
        let doc = InMemoryDocument::new("{\n  \"start_url\": \"/\"\n}");
        let fixes = provide(&doc, vec![diag(GLOBAL_CODE, "name")]);
        assert_eq!(fixes.len(), 1);
        assert_eq!(fixes[0].label, MISSING_MEMBER_LABEL);
        assert_eq!(fixes[0].edits.len(), 1);
        assert!(fixes[0].edits[0].text.contains("\"name\": \"\""));
        assert_eq!(fixes[0].edits[0].range.start, Position::new(1, 0));
    }

    #[test]
    fn invalid_value_gets_a_replacement_fix_labeled_by_code() {
        let doc = InMemoryDocument::new("{\n  \"icons\": [],\n}");
        let fixes = provide(&doc, vec![diag("icons", "manifest-validator")]);
        assert_eq!(fixes.len(), 1);
        assert_eq!(fixes[0].label, "icons");
        let edit = &fixes[0].edits[0];
        // Everything after the colon on the icons line is replaced.
        assert_eq!(edit.range, TextRange::on_line(1, 10, 14));
        let rule = manifix_rules::lookup("icons").expect("rule");
        assert_eq!(edit.text, format!("{},", rule.default_value));
    }

    #[test]
    fn replacement_without_a_matching_line_offers_nothing() {
        let doc = InMemoryDocument::new("{\n  \"name\": \"x\"\n}");
        assert!(provide(&doc, vec![diag("display", "manifest-validator")]).is_empty());
    }

    #[test]
    fn unknown_code_offers_nothing() {
        let doc = InMemoryDocument::new("{\n  \"name\": \"x\"\n}");
        assert!(provide(&doc, vec![diag("not_a_member", "manifest-validator")]).is_empty());
    }

    #[test]
    fn multiple_diagnostics_aggregate_in_order() {
        let doc = InMemoryDocument::new("{\n  \"display\": \"bogus\",\n  \"theme_color\": 7,\n}");
        let fixes = provide(
            &doc,
            vec![
                diag("display", "manifest-validator"),
                diag(GLOBAL_CODE, "name"),
                diag("theme_color", "manifest-validator"),
            ],
        );
        let labels: Vec<_> = fixes.iter().map(|f| f.label.as_str()).collect();
        assert_eq!(labels, vec!["display", MISSING_MEMBER_LABEL, "theme_color"]);
    }

    #[test]
    fn resolution_is_idempotent() {
        let doc = InMemoryDocument::new("{\n  \"display\": \"bogus\",\n}");
        let diags = vec![diag("display", "manifest-validator"), diag(GLOBAL_CODE, "lang")];
        let first = provide(&doc, diags.clone());
        let second = provide(&doc, diags);
        assert_eq!(first, second);
    }
}
