//! Value classification shared by every generator.

use colored::Color;
use serde::Serialize;
use serde_json::Value;

/// Semantic kind of a JSON value. One per `classify` call; never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    Null,
    Boolean,
    String,
    Number,
    Integer,
    Array,
    Object,
}

/// Classify a JSON value. Total and deterministic.
///
/// Rule order matters: null before anything else, arrays before objects, and
/// numeric integrality before the plain number kind. Downstream code relies on
/// `classify(&json!([]))` being `Array`, never `Object`.
pub fn classify(value: &Value) -> ValueKind {
    match value {
        Value::Null => ValueKind::Null,
        Value::Array(_) => ValueKind::Array,
        Value::Number(n) => {
            let integral = n.as_i64().is_some()
                || n.as_u64().is_some()
                || n.as_f64().is_some_and(|f| f.fract() == 0.0);
            if integral { ValueKind::Integer } else { ValueKind::Number }
        }
        Value::Object(_) => ValueKind::Object,
        Value::String(_) => ValueKind::String,
        Value::Bool(_) => ValueKind::Boolean,
    }
}

impl ValueKind {
    /// Name used in schema `type` fields and interface type expressions.
    pub fn primitive_name(self) -> &'static str {
        match self {
            ValueKind::Null => "null",
            ValueKind::Boolean => "boolean",
            ValueKind::String => "string",
            ValueKind::Number => "number",
            ValueKind::Integer => "integer",
            ValueKind::Array => "array",
            ValueKind::Object => "object",
        }
    }

    /// Short badge shown in the tree view.
    pub fn icon(self) -> &'static str {
        match self {
            ValueKind::Null => "ø",
            ValueKind::Boolean => "!",
            ValueKind::String => "abc",
            ValueKind::Number => "#",
            ValueKind::Integer => "123",
            ValueKind::Array => "[]",
            ValueKind::Object => "{}",
        }
    }

    /// Badge color in the tree view.
    pub fn color(self) -> Color {
        match self {
            ValueKind::Null => Color::BrightBlack,
            ValueKind::Boolean => Color::Magenta,
            ValueKind::String => Color::Green,
            ValueKind::Number => Color::Blue,
            ValueKind::Integer => Color::Cyan,
            ValueKind::Array => Color::Yellow,
            ValueKind::Object => Color::BrightYellow,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn classify_is_deterministic() {
        let values = [
            json!(null),
            json!(true),
            json!("x"),
            json!(1),
            json!(1.5),
            json!([1, 2]),
            json!({"a": 1}),
        ];
        for v in &values {
            assert_eq!(classify(v), classify(v));
        }
    }

    #[test]
    fn null_and_empty_array_ordering() {
        assert_eq!(classify(&json!(null)), ValueKind::Null);
        assert_eq!(classify(&json!([])), ValueKind::Array);
        assert_eq!(classify(&json!({})), ValueKind::Object);
    }

    #[test]
    fn integrality_ignores_the_numeric_representation() {
        assert_eq!(classify(&json!(30)), ValueKind::Integer);
        assert_eq!(classify(&json!(-7)), ValueKind::Integer);
        assert_eq!(classify(&json!(u64::MAX)), ValueKind::Integer);
        // 1.0 parses as a float but has no fractional part
        assert_eq!(classify(&json!(1.0)), ValueKind::Integer);
        assert_eq!(classify(&json!(1.5)), ValueKind::Number);
        assert_eq!(classify(&json!(-0.25)), ValueKind::Number);
    }

    #[test]
    fn primitive_names_round_trip_kinds() {
        assert_eq!(classify(&json!("x")).primitive_name(), "string");
        assert_eq!(classify(&json!(false)).primitive_name(), "boolean");
        assert_eq!(classify(&json!(null)).primitive_name(), "null");
    }
}
