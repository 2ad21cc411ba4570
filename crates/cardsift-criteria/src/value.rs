//! Runtime value types for record fields.
//!
//! A record field holds a [`FieldValue`]: nothing, a single [`Scalar`], a list
//! of scalars, or a raw JSON object that is only searchable as a whole.

use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;

use serde_json::{Map, Value as Json};

/// Numeric value supporting signed, unsigned and floating point numbers.
///
/// Comparisons between different variants fall back to `f64`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// Signed 64-bit integer.
    I64(i64),
    /// Unsigned 64-bit integer.
    U64(u64),
    /// 64-bit floating point.
    F64(f64),
}

impl Number {
    /// Converts the number to f64 for comparison.
    pub fn to_f64(self) -> f64 {
        match self {
            Number::I64(n) => n as f64,
            Number::U64(n) => n as f64,
            Number::F64(n) => n,
        }
    }

    /// Compares two numbers, handling mixed types.
    pub fn compare(self, other: Number) -> Option<Ordering> {
        match (self, other) {
            (Number::I64(a), Number::I64(b)) => Some(a.cmp(&b)),
            (Number::U64(a), Number::U64(b)) => Some(a.cmp(&b)),
            (Number::F64(a), Number::F64(b)) => a.partial_cmp(&b),

            // Mixed type comparisons - convert to f64
            _ => self.to_f64().partial_cmp(&other.to_f64()),
        }
    }

    /// Reads the number written by the ASCII digits of `text`.
    ///
    /// Every other character is dropped first, so `"Cost: 7"` reads as `7`
    /// and `"-2.5"` reads as `25`. Text without digits reads as `0`.
    pub fn from_digits(text: &str) -> Number {
        let digits: String = text.chars().filter(char::is_ascii_digit).collect();
        if digits.is_empty() {
            return Number::U64(0);
        }
        match digits.parse::<u64>() {
            Ok(n) => Number::U64(n),
            // Too long for u64; a digit run always parses as f64
            Err(_) => Number::F64(digits.parse::<f64>().unwrap_or(f64::INFINITY)),
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::I64(n) => write!(f, "{n}"),
            Number::U64(n) => write!(f, "{n}"),
            Number::F64(n) => write!(f, "{n}"),
        }
    }
}

impl From<&serde_json::Number> for Number {
    fn from(n: &serde_json::Number) -> Self {
        if let Some(u) = n.as_u64() {
            Number::U64(u)
        } else if let Some(i) = n.as_i64() {
            Number::I64(i)
        } else {
            Number::F64(n.as_f64().unwrap_or(f64::NAN))
        }
    }
}

/// A single searchable value.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    /// Text value.
    String(String),
    /// Numeric value.
    Number(Number),
    /// Boolean value.
    Bool(bool),
}

impl Scalar {
    /// Returns the canonical string form used for matching.
    pub fn canonical(&self) -> Cow<'_, str> {
        match self {
            Scalar::String(s) => Cow::Borrowed(s),
            other => Cow::Owned(other.to_string()),
        }
    }

    /// Returns the text value, if this is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Scalar::String(s) => Some(s),
            _ => None,
        }
    }

    fn to_json(&self) -> Json {
        match self {
            Scalar::String(s) => Json::String(s.clone()),
            Scalar::Bool(b) => Json::Bool(*b),
            Scalar::Number(Number::I64(n)) => Json::from(*n),
            Scalar::Number(Number::U64(n)) => Json::from(*n),
            Scalar::Number(Number::F64(n)) => serde_json::Number::from_f64(*n)
                .map(Json::Number)
                .unwrap_or(Json::Null),
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::String(s) => f.write_str(s),
            Scalar::Number(n) => write!(f, "{n}"),
            Scalar::Bool(b) => write!(f, "{b}"),
        }
    }
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self {
        Scalar::String(s.to_string())
    }
}

impl From<String> for Scalar {
    fn from(s: String) -> Self {
        Scalar::String(s)
    }
}

impl From<Number> for Scalar {
    fn from(n: Number) -> Self {
        Scalar::Number(n)
    }
}

impl From<i64> for Scalar {
    fn from(n: i64) -> Self {
        Scalar::Number(Number::I64(n))
    }
}

impl From<f64> for Scalar {
    fn from(n: f64) -> Self {
        Scalar::Number(Number::F64(n))
    }
}

impl From<bool> for Scalar {
    fn from(b: bool) -> Self {
        Scalar::Bool(b)
    }
}

/// Runtime shape of a field, as reported in field descriptors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldType {
    String,
    Number,
    Boolean,
    Array,
    Object,
    Null,
}

impl FieldType {
    /// Returns the display name of this type.
    pub fn as_str(self) -> &'static str {
        match self {
            FieldType::String => "string",
            FieldType::Number => "number",
            FieldType::Boolean => "boolean",
            FieldType::Array => "array",
            FieldType::Object => "object",
            FieldType::Null => "null",
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Value of one record field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Explicit null.
    Null,
    /// A single scalar.
    Scalar(Scalar),
    /// A list of scalars.
    List(Vec<Scalar>),
    /// A nested object, kept as raw JSON.
    Object(Map<String, Json>),
}

impl FieldValue {
    /// Returns `true` if this is `Null`.
    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }

    /// Returns the runtime shape of this value.
    pub fn field_type(&self) -> FieldType {
        match self {
            FieldValue::Null => FieldType::Null,
            FieldValue::Scalar(Scalar::String(_)) => FieldType::String,
            FieldValue::Scalar(Scalar::Number(_)) => FieldType::Number,
            FieldValue::Scalar(Scalar::Bool(_)) => FieldType::Boolean,
            FieldValue::List(_) => FieldType::Array,
            FieldValue::Object(_) => FieldType::Object,
        }
    }

    /// Pushes the searchable values of this field onto `out`.
    ///
    /// Lists contribute every element, scalars themselves, objects their JSON
    /// text, and null nothing.
    pub fn extend_candidates<'a>(&'a self, out: &mut Vec<Cow<'a, Scalar>>) {
        match self {
            FieldValue::Null => {}
            FieldValue::Scalar(s) => out.push(Cow::Borrowed(s)),
            FieldValue::List(items) => out.extend(items.iter().map(Cow::Borrowed)),
            FieldValue::Object(_) => out.push(Cow::Owned(Scalar::String(self.to_json_string()))),
        }
    }

    /// Converts the value back to JSON.
    pub fn to_json(&self) -> Json {
        match self {
            FieldValue::Null => Json::Null,
            FieldValue::Scalar(s) => s.to_json(),
            FieldValue::List(items) => Json::Array(items.iter().map(Scalar::to_json).collect()),
            FieldValue::Object(map) => Json::Object(map.clone()),
        }
    }

    /// Serializes the whole value to compact JSON text.
    pub fn to_json_string(&self) -> String {
        self.to_json().to_string()
    }
}

impl From<Json> for FieldValue {
    fn from(json: Json) -> Self {
        match json {
            Json::Null => FieldValue::Null,
            Json::Object(map) => FieldValue::Object(map),
            Json::Array(items) => FieldValue::List(
                items
                    .into_iter()
                    .filter_map(|item| match item {
                        Json::Null => None,
                        Json::String(s) => Some(Scalar::String(s)),
                        Json::Bool(b) => Some(Scalar::Bool(b)),
                        Json::Number(n) => Some(Scalar::Number(Number::from(&n))),
                        // Nested structure is only searchable as text
                        nested => Some(Scalar::String(nested.to_string())),
                    })
                    .collect(),
            ),
            Json::String(s) => FieldValue::Scalar(Scalar::String(s)),
            Json::Bool(b) => FieldValue::Scalar(Scalar::Bool(b)),
            Json::Number(n) => FieldValue::Scalar(Scalar::Number(Number::from(&n))),
        }
    }
}

impl From<Scalar> for FieldValue {
    fn from(s: Scalar) -> Self {
        FieldValue::Scalar(s)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Scalar(Scalar::from(s))
    }
}

impl From<i64> for FieldValue {
    fn from(n: i64) -> Self {
        FieldValue::Scalar(Scalar::from(n))
    }
}

impl From<Vec<Scalar>> for FieldValue {
    fn from(items: Vec<Scalar>) -> Self {
        FieldValue::List(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn number_comparisons_mixed_types() {
        assert_eq!(
            Number::I64(5).compare(Number::U64(10)),
            Some(Ordering::Less)
        );
        assert_eq!(
            Number::I64(5).compare(Number::F64(5.0)),
            Some(Ordering::Equal)
        );
        assert_eq!(
            Number::U64(10).compare(Number::F64(5.5)),
            Some(Ordering::Greater)
        );
        assert_eq!(Number::F64(f64::NAN).compare(Number::F64(1.0)), None);
    }

    #[test]
    fn number_from_digits_strips_non_digits() {
        assert_eq!(Number::from_digits("Cost: 7"), Number::U64(7));
        assert_eq!(Number::from_digits("12"), Number::U64(12));
        assert_eq!(Number::from_digits("1-2-3"), Number::U64(123));
        assert_eq!(Number::from_digits("-2.5"), Number::U64(25));
    }

    #[test]
    fn number_from_digits_without_digits_is_zero() {
        assert_eq!(Number::from_digits(""), Number::U64(0));
        assert_eq!(Number::from_digits("none"), Number::U64(0));
    }

    #[test]
    fn number_from_digits_overflow_falls_back_to_float() {
        let n = Number::from_digits("123456789012345678901234567890");
        assert!(matches!(n, Number::F64(_)));
        assert_eq!(n.compare(Number::U64(u64::MAX)), Some(Ordering::Greater));
    }

    #[test]
    fn scalar_canonical_forms() {
        assert_eq!(Scalar::from("Dragon").canonical(), "Dragon");
        assert_eq!(Scalar::from(7i64).canonical(), "7");
        assert_eq!(Scalar::from(7.0f64).canonical(), "7");
        assert_eq!(Scalar::from(7.5f64).canonical(), "7.5");
        assert_eq!(Scalar::from(true).canonical(), "true");
    }

    #[test]
    fn field_value_from_json() {
        assert_eq!(FieldValue::from(json!(null)), FieldValue::Null);
        assert_eq!(FieldValue::from(json!("a")), FieldValue::from("a"));
        assert_eq!(
            FieldValue::from(json!(3)),
            FieldValue::Scalar(Scalar::Number(Number::U64(3)))
        );
        assert_eq!(
            FieldValue::from(json!(-3)),
            FieldValue::Scalar(Scalar::Number(Number::I64(-3)))
        );
        assert_eq!(
            FieldValue::from(json!(["a", null, 2, [1]])),
            FieldValue::List(vec![
                Scalar::from("a"),
                Scalar::Number(Number::U64(2)),
                Scalar::from("[1]"),
            ])
        );
        assert_eq!(FieldValue::from(json!({"a": 1})).field_type(), FieldType::Object);
    }

    #[test]
    fn field_types() {
        assert_eq!(FieldValue::from("x").field_type(), FieldType::String);
        assert_eq!(FieldValue::from(1i64).field_type(), FieldType::Number);
        assert_eq!(FieldValue::from(Scalar::Bool(false)).field_type(), FieldType::Boolean);
        assert_eq!(FieldValue::List(vec![]).field_type(), FieldType::Array);
        assert_eq!(FieldValue::Null.field_type(), FieldType::Null);
    }

    #[test]
    fn candidates_expand_lists() {
        let value = FieldValue::List(vec![Scalar::from("a"), Scalar::from("b")]);
        let mut out = Vec::new();
        value.extend_candidates(&mut out);
        assert_eq!(out.len(), 2);

        let mut out = Vec::new();
        FieldValue::Null.extend_candidates(&mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn object_candidate_is_json_text() {
        let value = FieldValue::from(json!({"power": 5000}));
        let mut out = Vec::new();
        value.extend_candidates(&mut out);
        assert_eq!(out[0].canonical(), r#"{"power":5000}"#);
    }
}
