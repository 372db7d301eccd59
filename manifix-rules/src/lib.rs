//! Static rule table for web app manifest members.
//!
//! Each rule describes one top-level manifest member the code-action engine
//! knows how to repair: its name, the default value offered as a fix, and
//! whether the value is a plain scalar or a JSON array literal. The table is
//! compiled in, read-only, and safe for unsynchronized concurrent reads.

use serde::Serialize;

/// How a member's default value must be spliced into the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldShape {
    /// Plain string value; quoted when inserted.
    Scalar,
    /// The default value is itself a JSON array literal; inserted unquoted.
    ArrayLike,
}

impl std::fmt::Display for FieldShape {
    /// Matches the serialized form, so text and JSON output agree.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldShape::Scalar => f.write_str("scalar"),
            FieldShape::ArrayLike => f.write_str("array_like"),
        }
    }
}

/// One repairable manifest member.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct FieldRule {
    /// Top-level manifest member name. Unique across the table.
    pub member: &'static str,
    /// Default value offered when replacing an invalid value.
    pub default_value: &'static str,
    pub shape: FieldShape,
}

const DEFAULT_ICONS: &str = r#"[{"src": "icons/icon-512x512.png", "sizes": "512x512", "type": "image/png"}]"#;
const DEFAULT_SCREENSHOTS: &str =
    r#"[{"src": "screenshots/home.png", "sizes": "1280x720", "type": "image/png"}]"#;

/// Registry of all repairable manifest members.
pub static FIELD_RULES: &[FieldRule] = &[
    FieldRule {
        member: "name",
        default_value: "My PWA",
        shape: FieldShape::Scalar,
    },
    FieldRule {
        member: "short_name",
        default_value: "My PWA",
        shape: FieldShape::Scalar,
    },
    FieldRule {
        member: "description",
        default_value: "My awesome PWA",
        shape: FieldShape::Scalar,
    },
    FieldRule {
        member: "start_url",
        default_value: "/",
        shape: FieldShape::Scalar,
    },
    FieldRule {
        member: "display",
        default_value: "standalone",
        shape: FieldShape::Scalar,
    },
    FieldRule {
        member: "background_color",
        default_value: "#FFFFFF",
        shape: FieldShape::Scalar,
    },
    FieldRule {
        member: "theme_color",
        default_value: "#FFFFFF",
        shape: FieldShape::Scalar,
    },
    FieldRule {
        member: "orientation",
        default_value: "any",
        shape: FieldShape::Scalar,
    },
    FieldRule {
        member: "scope",
        default_value: "/",
        shape: FieldShape::Scalar,
    },
    FieldRule {
        member: "lang",
        default_value: "en",
        shape: FieldShape::Scalar,
    },
    FieldRule {
        member: "dir",
        default_value: "ltr",
        shape: FieldShape::Scalar,
    },
    FieldRule {
        member: "icons",
        default_value: DEFAULT_ICONS,
        shape: FieldShape::ArrayLike,
    },
    FieldRule {
        member: "screenshots",
        default_value: DEFAULT_SCREENSHOTS,
        shape: FieldShape::ArrayLike,
    },
];

/// Look up the rule for a manifest member, if one exists.
pub fn lookup(member: &str) -> Option<&'static FieldRule> {
    FIELD_RULES.iter().find(|r| r.member == member)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn members_are_unique() {
        let names: BTreeSet<_> = FIELD_RULES.iter().map(|r| r.member).collect();
        assert_eq!(names.len(), FIELD_RULES.len());
    }

    #[test]
    fn only_icons_and_screenshots_are_array_like() {
        let array_like: Vec<_> = FIELD_RULES
            .iter()
            .filter(|r| r.shape == FieldShape::ArrayLike)
            .map(|r| r.member)
            .collect();
        assert_eq!(array_like, vec!["icons", "screenshots"]);
    }

    #[test]
    fn array_like_defaults_are_valid_json_arrays() {
        for rule in FIELD_RULES.iter().filter(|r| r.shape == FieldShape::ArrayLike) {
            let value: serde_json::Value =
                serde_json::from_str(rule.default_value).expect("parse default");
            assert!(value.is_array(), "{} default is not an array", rule.member);
        }
    }

    #[test]
    fn shape_display_matches_serialized_form() {
        for shape in [FieldShape::Scalar, FieldShape::ArrayLike] {
            let serialized = serde_json::to_value(shape).expect("serialize shape");
            assert_eq!(serialized, serde_json::Value::String(shape.to_string()));
        }
    }

    #[test]
    fn lookup_finds_known_member() {
        let rule = lookup("display").expect("display rule");
        assert_eq!(rule.default_value, "standalone");
        assert_eq!(rule.shape, FieldShape::Scalar);
    }

    #[test]
    fn lookup_misses_unknown_member() {
        assert!(lookup("not_a_member").is_none());
        assert!(lookup("global").is_none());
    }
}
