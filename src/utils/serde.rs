use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Upstream label field that may arrive as a bare string, a list, or not at all.
///
/// Deserialization never fails: list elements that are not strings are kept in
/// their JSON text form, and any other shape (number, object, bool) is `None`.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub enum StringOrVec {
    #[default]
    None,
    Single(String),
    Multiple(Vec<String>),
}

impl From<Value> for StringOrVec {
    fn from(value: Value) -> Self {
        match value {
            Value::String(text) => Self::Single(text),
            Value::Array(items) => Self::Multiple(
                items
                    .into_iter()
                    .map(|item| match item {
                        Value::String(text) => text,
                        other => other.to_string(),
                    })
                    .collect(),
            ),
            _ => Self::None,
        }
    }
}

impl<'de> Deserialize<'de> for StringOrVec {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Value::deserialize(deserializer).map(Self::from)
    }
}

impl StringOrVec {
    /// Joins list values with `", "` in upstream order. Never yields an empty string.
    pub fn join(&self) -> Option<String> {
        let joined = match self {
            Self::None => return None,
            Self::Single(value) => value.clone(),
            Self::Multiple(values) => values.join(", "),
        };
        (!joined.is_empty()).then_some(joined)
    }

    /// First list element, or the string itself when it is not blank.
    pub fn first_text(&self) -> Option<String> {
        match self {
            Self::None => None,
            Self::Single(value) if value.trim().is_empty() => None,
            Self::Single(value) => Some(value.clone()),
            Self::Multiple(values) => values.first().cloned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::StringOrVec;

    fn parse(raw: &str) -> StringOrVec {
        serde_json::from_str(raw).expect("lenient parse")
    }

    #[test]
    fn join_keeps_order_and_drops_empty() {
        assert_eq!(
            StringOrVec::Multiple(vec!["A".into(), "B".into()]).join(),
            Some("A, B".to_string())
        );
        assert_eq!(StringOrVec::Single("A".into()).join(), Some("A".to_string()));
        assert_eq!(StringOrVec::Multiple(Vec::new()).join(), None);
        assert_eq!(StringOrVec::Single(String::new()).join(), None);
        assert_eq!(StringOrVec::None.join(), None);
    }

    #[test]
    fn first_text_skips_blank_strings_and_empty_lists() {
        assert_eq!(
            StringOrVec::Multiple(vec!["x".into(), "y".into()]).first_text(),
            Some("x".to_string())
        );
        assert_eq!(StringOrVec::Single("  ".into()).first_text(), None);
        assert_eq!(StringOrVec::Single(String::new()).first_text(), None);
        assert_eq!(StringOrVec::Multiple(Vec::new()).first_text(), None);
        assert_eq!(StringOrVec::None.first_text(), None);
        assert_eq!(
            StringOrVec::Single("Pain reliever".into()).first_text(),
            Some("Pain reliever".to_string())
        );
    }

    #[test]
    fn deserializes_null_string_and_list() {
        assert_eq!(parse("null"), StringOrVec::None);
        assert_eq!(parse("\"Tylenol\"").join().as_deref(), Some("Tylenol"));
        assert_eq!(parse("[\"A\",\"B\"]").join().as_deref(), Some("A, B"));
    }

    #[test]
    fn non_string_list_elements_are_stringified() {
        assert_eq!(parse("[42, \"x\"]").first_text().as_deref(), Some("42"));
        assert_eq!(parse("[true]").join().as_deref(), Some("true"));
        assert_eq!(
            parse("[{\"text\": \"x\"}]").first_text().as_deref(),
            Some("{\"text\":\"x\"}")
        );
    }

    #[test]
    fn other_shapes_are_absent() {
        assert_eq!(parse("{\"text\": \"x\"}"), StringOrVec::None);
        assert_eq!(parse("42"), StringOrVec::None);
        assert_eq!(parse("false"), StringOrVec::None);
    }
}
