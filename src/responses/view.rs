//! Tolerant field access over raw JSON payloads.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The result of a typed lookup.
///
/// Walmart IO is inconsistent about field types: the same field may come
/// back as a number, a string, or something else entirely. Accessors coerce
/// what they can and hand back the raw value otherwise, so a present field
/// is never reported as missing.
#[derive(Clone, Debug, PartialEq)]
pub enum Lenient<T> {
    /// The value was coerced to the requested type.
    Parsed(T),
    /// The value could not be coerced and is returned unchanged.
    Raw(Value),
}

impl<T> Lenient<T> {
    /// Returns the coerced value, discarding an unparseable raw value.
    #[must_use]
    pub fn parsed(self) -> Option<T> {
        match self {
            Self::Parsed(value) => Some(value),
            Self::Raw(_) => None,
        }
    }

    /// Returns a reference to the coerced value.
    #[must_use]
    pub const fn as_parsed(&self) -> Option<&T> {
        match self {
            Self::Parsed(value) => Some(value),
            Self::Raw(_) => None,
        }
    }

    /// Returns the raw value when coercion failed.
    #[must_use]
    pub const fn as_raw(&self) -> Option<&Value> {
        match self {
            Self::Parsed(_) => None,
            Self::Raw(value) => Some(value),
        }
    }

    /// Returns `true` if the value was coerced.
    #[must_use]
    pub const fn is_parsed(&self) -> bool {
        matches!(self, Self::Parsed(_))
    }
}

/// A read-only view over a raw JSON value.
///
/// Lookups never fail: a missing key yields `None`, and typed lookups fall
/// back to the raw value when it does not have the requested type. Lookups have no side
/// effects, so repeating one always gives the same answer.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use walmart_io::responses::{Lenient, ResponseView};
///
/// let view = ResponseView::new(json!({
///     "itemId": "42",
///     "stock": "abc",
///     "shortDescription": "Fish &amp; Chips",
/// }));
///
/// assert_eq!(view.get_int("itemId"), Some(Lenient::Parsed(42)));
/// assert_eq!(view.get_int("stock"), Some(Lenient::Raw(json!("abc"))));
/// assert_eq!(view.get_int("missing"), None);
/// assert_eq!(
///     view.get_text("shortDescription"),
///     Some(Lenient::Parsed("Fish & Chips".to_string()))
/// );
/// assert_eq!(view.get_str("itemId"), Some(Lenient::Parsed("42")));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResponseView(Value);

impl ResponseView {
    /// Wraps a raw value.
    #[must_use]
    pub const fn new(value: Value) -> Self {
        Self(value)
    }

    /// Returns the value of a field. A present `null` is returned as
    /// `Some(Value::Null)`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Returns a string field without transformation. A present value of
    /// another type is returned as [`Lenient::Raw`].
    #[must_use]
    pub fn get_str(&self, key: &str) -> Option<Lenient<&str>> {
        self.get(key).map(|value| {
            value
                .as_str()
                .map_or_else(|| Lenient::Raw(value.clone()), Lenient::Parsed)
        })
    }

    /// Returns a boolean field. A present value of another type is returned
    /// as [`Lenient::Raw`].
    #[must_use]
    pub fn get_bool(&self, key: &str) -> Option<Lenient<bool>> {
        self.get(key).map(|value| {
            value
                .as_bool()
                .map_or_else(|| Lenient::Raw(value.clone()), Lenient::Parsed)
        })
    }

    /// Returns an integer field.
    ///
    /// Integers are returned as is, finite floats are truncated, strings are
    /// trimmed and parsed, booleans become 0 or 1. Anything else is returned
    /// as [`Lenient::Raw`].
    #[must_use]
    pub fn get_int(&self, key: &str) -> Option<Lenient<i64>> {
        self.get(key).map(|value| {
            coerce_int(value).map_or_else(|| Lenient::Raw(value.clone()), Lenient::Parsed)
        })
    }

    /// Returns a floating point field, with the same coercions as
    /// [`ResponseView::get_int`].
    #[must_use]
    pub fn get_float(&self, key: &str) -> Option<Lenient<f64>> {
        self.get(key).map(|value| {
            coerce_float(value).map_or_else(|| Lenient::Raw(value.clone()), Lenient::Parsed)
        })
    }

    /// Returns a string field with HTML entities decoded. A present value of
    /// another type is returned as [`Lenient::Raw`].
    #[must_use]
    pub fn get_text(&self, key: &str) -> Option<Lenient<String>> {
        self.get_str(key).map(|text| match text {
            Lenient::Parsed(text) => {
                Lenient::Parsed(html_escape::decode_html_entities(text).into_owned())
            }
            Lenient::Raw(value) => Lenient::Raw(value),
        })
    }

    /// Returns a nested object or value as a view.
    #[must_use]
    pub fn get_view(&self, key: &str) -> Option<Self> {
        self.get(key).filter(|value| !value.is_null()).cloned().map(Self)
    }

    /// Returns the elements of an array field as views.
    ///
    /// An absent or non-array field yields an empty list.
    #[must_use]
    pub fn get_views(&self, key: &str) -> Vec<Self> {
        self.get(key).map_or_else(Vec::new, elements)
    }

    /// Returns the keys of an object payload. Non-object payloads have none.
    #[must_use]
    pub fn keys(&self) -> Vec<&str> {
        self.0
            .as_object()
            .map(|object| object.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// Returns the raw value.
    #[must_use]
    pub const fn raw(&self) -> &Value {
        &self.0
    }

    /// Consumes the view and returns the raw value.
    #[must_use]
    pub fn into_raw(self) -> Value {
        self.0
    }
}

impl From<Value> for ResponseView {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

impl fmt::Display for ResponseView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Returns the elements of an array value as views; anything else is empty.
pub(crate) fn elements(value: &Value) -> Vec<ResponseView> {
    value
        .as_array()
        .map(|items| items.iter().cloned().map(ResponseView).collect())
        .unwrap_or_default()
}

#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn coerce_int(value: &Value) -> Option<i64> {
    match value {
        Value::Number(number) => number.as_i64().or_else(|| {
            number
                .as_f64()
                .filter(|f| f.is_finite() && *f >= i64::MIN as f64 && *f <= i64::MAX as f64)
                .map(|f| f.trunc() as i64)
        }),
        Value::String(text) => text.trim().parse().ok(),
        Value::Bool(flag) => Some(i64::from(*flag)),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

fn coerce_float(value: &Value) -> Option<f64> {
    match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse().ok().filter(|f: &f64| f.is_finite()),
        Value::Bool(flag) => Some(f64::from(u8::from(*flag))),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> ResponseView {
        ResponseView::new(json!({
            "int": 7,
            "float": 4.9,
            "numericString": " 42 ",
            "floatString": "3.5",
            "garbage": "abc",
            "flag": true,
            "nothing": null,
            "html": "Lenovo&#8482; &lt;b&gt;Yoga&lt;/b&gt;",
            "nested": {"label": "Good"},
            "list": [{"a": 1}, {"a": 2}],
            "notList": "x"
        }))
    }

    #[test]
    fn test_missing_keys_yield_none() {
        let view = sample();
        assert_eq!(view.get("missing"), None);
        assert_eq!(view.get_int("missing"), None);
        assert_eq!(view.get_float("missing"), None);
        assert_eq!(view.get_text("missing"), None);
        assert_eq!(view.get_str("missing"), None);
        assert_eq!(view.get_bool("missing"), None);
        assert_eq!(view.get_view("missing"), None);
        assert!(view.get_views("missing").is_empty());
    }

    #[test]
    fn test_present_null_is_distinguishable() {
        let view = sample();
        assert_eq!(view.get("nothing"), Some(&Value::Null));
        assert_eq!(view.get_int("nothing"), Some(Lenient::Raw(Value::Null)));
        assert_eq!(view.get_str("nothing"), Some(Lenient::Raw(Value::Null)));
        assert_eq!(view.get_view("nothing"), None);
    }

    #[test]
    fn test_int_coercion() {
        let view = sample();
        assert_eq!(view.get_int("int"), Some(Lenient::Parsed(7)));
        assert_eq!(view.get_int("float"), Some(Lenient::Parsed(4)));
        assert_eq!(view.get_int("numericString"), Some(Lenient::Parsed(42)));
        assert_eq!(view.get_int("flag"), Some(Lenient::Parsed(1)));
        assert_eq!(view.get_int("garbage"), Some(Lenient::Raw(json!("abc"))));
        assert_eq!(view.get_int("floatString"), Some(Lenient::Raw(json!("3.5"))));
    }

    #[test]
    fn test_float_coercion() {
        let view = sample();
        assert_eq!(view.get_float("float"), Some(Lenient::Parsed(4.9)));
        assert_eq!(view.get_float("int"), Some(Lenient::Parsed(7.0)));
        assert_eq!(view.get_float("floatString"), Some(Lenient::Parsed(3.5)));
        assert_eq!(view.get_float("garbage"), Some(Lenient::Raw(json!("abc"))));
    }

    #[test]
    fn test_text_is_unescaped() {
        let view = sample();
        assert_eq!(
            view.get_text("html"),
            Some(Lenient::Parsed("Lenovo\u{2122} <b>Yoga</b>".to_string()))
        );
        assert_eq!(view.get_text("int"), Some(Lenient::Raw(json!(7))));
    }

    #[test]
    fn test_present_values_of_other_types_are_not_missing() {
        let view = sample();
        assert_eq!(view.get_str("garbage"), Some(Lenient::Parsed("abc")));
        assert_eq!(view.get_str("int"), Some(Lenient::Raw(json!(7))));
        assert_eq!(view.get_str("nested"), Some(Lenient::Raw(json!({"label": "Good"}))));
        assert_eq!(view.get_bool("flag"), Some(Lenient::Parsed(true)));
        assert_eq!(view.get_bool("garbage"), Some(Lenient::Raw(json!("abc"))));
    }

    #[test]
    fn test_lookups_are_idempotent() {
        let view = sample();
        assert_eq!(view.get_int("garbage"), view.get_int("garbage"));
        assert_eq!(view.get_text("html"), view.get_text("html"));
        assert_eq!(view, sample());
    }

    #[test]
    fn test_nested_views() {
        let view = sample();
        let nested = view.get_view("nested").unwrap();
        assert_eq!(nested.get_str("label"), Some(Lenient::Parsed("Good")));

        let list = view.get_views("list");
        assert_eq!(list.len(), 2);
        assert_eq!(list[1].get_int("a"), Some(Lenient::Parsed(2)));

        assert!(view.get_views("notList").is_empty());
    }

    #[test]
    fn test_keys_of_object_and_scalar() {
        let view = ResponseView::new(json!({"b": 1, "a": 2}));
        let mut keys = view.keys();
        keys.sort_unstable();
        assert_eq!(keys, vec!["a", "b"]);

        assert!(ResponseView::new(json!([1, 2])).keys().is_empty());
    }

    #[test]
    fn test_lenient_helpers() {
        let parsed: Lenient<i64> = Lenient::Parsed(5);
        assert!(parsed.is_parsed());
        assert_eq!(parsed.as_parsed(), Some(&5));
        assert_eq!(parsed.parsed(), Some(5));

        let raw: Lenient<i64> = Lenient::Raw(json!("x"));
        assert_eq!(raw.as_raw(), Some(&json!("x")));
        assert_eq!(raw.parsed(), None);
    }

    #[test]
    fn test_display_renders_json() {
        let view = ResponseView::new(json!({"a": 1}));
        assert_eq!(view.to_string(), r#"{"a":1}"#);
    }
}
