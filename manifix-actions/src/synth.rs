use manifix_rules::{FieldRule, FieldShape};
use manifix_types::text::{Edit, Position, TextRange};

/// Where missing-member placeholders are inserted: the document's second
/// line, first column, right after the opening brace. The member does not
/// exist anywhere yet, so the diagnostic's own range is irrelevant.
pub const INSERT_ANCHOR: Position = Position { line: 1, column: 0 };

/// Build the insertion edit for a missing member.
///
/// The placeholder is always an empty quoted string, regardless of the
/// member's shape: the user must fill in a real value, and an empty string
/// is always syntactically valid to quote.
pub fn insert_edit(rule: &FieldRule) -> Edit {
    Edit::insert(INSERT_ANCHOR, format!("\"{}\": \"\", \n", rule.member))
}

/// Build the replacement edit for an invalid member value.
///
/// Array-shaped defaults are JSON array literals and go in unquoted; scalar
/// defaults are quoted, with a leading space to match the ` "key": value`
/// formatting convention of the surrounding document. Both end with a
/// trailing comma since the replaced span swallowed the original one.
pub fn replace_edit(rule: &FieldRule, range: TextRange) -> Edit {
    let text = match rule.shape {
        FieldShape::ArrayLike => format!("{},", rule.default_value),
        FieldShape::Scalar => format!(" \"{}\",", rule.default_value),
    };
    Edit::replace(range, text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use manifix_types::text::EditOp;

    #[test]
    fn insertion_is_anchored_and_quoted() {
        let rule = manifix_rules::lookup("name").expect("rule");
        let edit = insert_edit(rule);
        assert_eq!(edit.op, EditOp::Insert);
        assert_eq!(edit.range, TextRange::at(INSERT_ANCHOR));
        assert_eq!(edit.text, "\"name\": \"\", \n");
    }

    #[test]
    fn scalar_replacement_is_quoted_with_leading_space() {
        let rule = manifix_rules::lookup("display").expect("rule");
        let edit = replace_edit(rule, TextRange::on_line(4, 11, 20));
        assert_eq!(edit.op, EditOp::Replace);
        assert_eq!(edit.text, " \"standalone\",");
    }

    #[test]
    fn array_like_replacement_is_unquoted() {
        let rule = manifix_rules::lookup("icons").expect("rule");
        let edit = replace_edit(rule, TextRange::on_line(7, 9, 12));
        assert_eq!(edit.text, format!("{},", rule.default_value));
        assert!(!edit.text.starts_with(' '));
        assert!(!edit.text.starts_with('"'));
    }
}
