//! Value normalization for assertion attributes.

use serde_json::Value as JsonValue;

/// Key of the single-entry table `toml` uses to carry a datetime through
/// non-TOML deserializers such as `serde_json::Value`.
const TOML_DATETIME_FIELD: &str = "$__toml_private_datetime";

/// Whether a string contains at least one non-blank character.
pub fn has_text(value: &str) -> bool {
    value.chars().any(|c| !is_blank(c))
}

/// Whitespace that does not count as text. Non-breaking spaces (U+00A0,
/// U+2007, U+202F) and NEL (U+0085) are text; the information separators
/// U+001C to U+001F are blank.
fn is_blank(c: char) -> bool {
    match c {
        '\u{001C}'..='\u{001F}' => true,
        '\u{0085}' | '\u{00A0}' | '\u{2007}' | '\u{202F}' => false,
        other => other.is_whitespace(),
    }
}

/// Render a configured static value as attribute values.
///
/// Lists contribute one value per element, anything else a single value.
pub fn render_static_value(value: &JsonValue) -> Vec<String> {
    match value {
        JsonValue::Array(items) => items.iter().map(render_scalar).collect(),
        other => vec![render_scalar(other)],
    }
}

fn render_scalar(value: &JsonValue) -> String {
    match value {
        JsonValue::Null => "null".to_string(),
        JsonValue::String(s) => s.clone(),
        JsonValue::Object(map) if map.len() == 1 => match map.get(TOML_DATETIME_FIELD) {
            Some(JsonValue::String(datetime)) => datetime.clone(),
            _ => value.to_string(),
        },
        // Numbers, booleans and nested structures use their JSON text
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_has_text() {
        assert!(has_text("Ada"));
        assert!(has_text("  a "));
        assert!(!has_text(""));
        assert!(!has_text(" \t\n"));
        assert!(!has_text("\u{2003}\u{3000}\u{001F}"));
    }

    #[test]
    fn test_non_breaking_spaces_are_text() {
        assert!(has_text("\u{00A0}"));
        assert!(has_text("\u{2007}"));
        assert!(has_text("\u{202F}"));
    }

    #[test]
    fn test_render_toml_datetime() {
        assert_eq!(
            render_static_value(&json!({"$__toml_private_datetime": "2024-01-01"})),
            vec!["2024-01-01"]
        );
        assert_eq!(
            render_static_value(&json!([{"$__toml_private_datetime": "1979-05-27T07:32:00Z"}])),
            vec!["1979-05-27T07:32:00Z"]
        );
    }

    #[test]
    fn test_render_list() {
        assert_eq!(
            render_static_value(&json!(["eng", null, 3, true])),
            vec!["eng", "null", "3", "true"]
        );
    }

    #[test]
    fn test_render_scalars() {
        assert_eq!(render_static_value(&json!(null)), vec!["null"]);
        assert_eq!(render_static_value(&json!("eng")), vec!["eng"]);
        assert_eq!(render_static_value(&json!(1.5)), vec!["1.5"]);
        assert_eq!(render_static_value(&json!(false)), vec!["false"]);
    }

    #[test]
    fn test_render_empty_list() {
        assert!(render_static_value(&json!([])).is_empty());
    }

    #[test]
    fn test_render_nested_object() {
        assert_eq!(render_static_value(&json!({"a": 1})), vec![r#"{"a":1}"#]);
    }
}
