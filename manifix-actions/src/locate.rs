use crate::doc::DocumentLines;
use manifix_types::text::TextRange;

/// Find the value span for a member: everything after the first `:` on the
/// first line whose text contains the member name.
///
/// Matching is plain substring search over raw lines, not JSON parsing. A
/// member name occurring inside a string value, or a duplicate key in a
/// nested object, produces a false match. Known limitation, kept as a
/// deliberate simplicity trade-off.
///
/// When the member name appears on several lines, the first match wins and
/// the scan stops there. Lines that contain the member but no colon are
/// skipped so a later well-formed occurrence can still match.
pub fn locate_value_range(member: &str, document: &dyn DocumentLines) -> Option<TextRange> {
    for index in 0..document.line_count() {
        let Some(text) = document.line(index) else {
            continue;
        };
        if !text.contains(member) {
            continue;
        }
        if let Some(colon) = text.find(':') {
            return Some(TextRange::on_line(index, colon + 1, text.len()));
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::doc::InMemoryDocument;

    #[test]
    fn range_spans_colon_to_end_of_line() {
        let doc = InMemoryDocument::new("{\n  \"theme_color\": \"#BADBAD\",\n}");
        let range = locate_value_range("theme_color", &doc).expect("range");
        assert_eq!(range, TextRange::on_line(1, 16, 27));
    }

    #[test]
    fn missing_member_yields_no_range() {
        let doc = InMemoryDocument::new("{\n  \"name\": \"x\"\n}");
        assert!(locate_value_range("display", &doc).is_none());
    }

    #[test]
    fn first_matching_line_wins() {
        let doc = InMemoryDocument::new(
            "{\n  \"display\": \"browser\",\n  \"description\": \"display stuff\": ,\n}",
        );
        let range = locate_value_range("display", &doc).expect("range");
        assert_eq!(range.start.line, 1);
    }

    #[test]
    fn match_inside_a_string_value_is_a_known_false_positive() {
        let doc = InMemoryDocument::new("{\n  \"description\": \"my icons gallery\",\n}");
        let range = locate_value_range("icons", &doc).expect("range");
        assert_eq!(range.start.line, 1);
    }

    #[test]
    fn line_without_colon_is_skipped() {
        let doc = InMemoryDocument::new("icons\n  \"icons\": [],\n");
        let range = locate_value_range("icons", &doc).expect("range");
        assert_eq!(range.start.line, 1);
    }

    #[test]
    fn empty_document_yields_no_range() {
        let doc = InMemoryDocument::new("");
        assert!(locate_value_range("name", &doc).is_none());
    }
}
