//! Typed record model and JSON loading.
//!
//! A [`Record`] maps field names to [`FieldValue`]s and may carry a secondary
//! record of the same shape (the back of a card). Filters reach records
//! through the [`Searchable`] trait, so callers can also plug in their own
//! types.

use std::io::Read;

use indexmap::IndexMap;
use serde_json::{Map, Value as Json};

use crate::error::{CriteriaError, Result};
use crate::value::{FieldType, FieldValue};

/// Default key of the secondary sub-record in card JSON.
pub const DEFAULT_SECONDARY_FIELD: &str = "cardBack";

/// Trait for records that filters can be evaluated against.
///
/// # Example
///
/// ```
/// use cardsift_criteria::{FieldValue, Searchable};
///
/// struct Card {
///     name: FieldValue,
/// }
///
/// impl Searchable for Card {
///     fn field(&self, name: &str) -> Option<&FieldValue> {
///         match name {
///             "name" => Some(&self.name),
///             _ => None,
///         }
///     }
/// }
///
/// let card = Card { name: "Goku".into() };
/// assert!(card.field("name").is_some());
/// assert!(card.secondary().is_none());
/// ```
pub trait Searchable {
    /// Returns the value of a field, or `None` if the record lacks it.
    fn field(&self, name: &str) -> Option<&FieldValue>;

    /// Returns the secondary sub-record consulted as a fallback, if any.
    fn secondary(&self) -> Option<&Self> {
        None
    }
}

/// A record loaded from JSON.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    fields: IndexMap<String, FieldValue>,
    secondary: Option<Box<Record>>,
}

impl Record {
    /// Creates an empty record.
    pub fn new() -> Self {
        Record::default()
    }

    /// Adds or replaces a field.
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.insert(name, value);
        self
    }

    /// Attaches a secondary sub-record.
    pub fn with_secondary(mut self, secondary: Record) -> Self {
        self.secondary = Some(Box::new(secondary));
        self
    }

    /// Adds or replaces a field, keeping first-insertion order.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<FieldValue>) {
        self.fields.insert(name.into(), value.into());
    }

    /// Builds a record from a JSON object.
    ///
    /// When `secondary_field` names an object member, that member is parsed
    /// into the secondary record. It also stays visible as an object field.
    pub fn from_json(json: Json, secondary_field: &str) -> Result<Self> {
        match json {
            Json::Object(map) => Ok(Record::from_map(map, Some(secondary_field))),
            other => Err(CriteriaError::RecordNotAnObject {
                actual: json_kind(&other),
            }),
        }
    }

    fn from_map(map: Map<String, Json>, secondary_field: Option<&str>) -> Self {
        let mut record = Record::new();
        for (name, value) in map {
            if secondary_field == Some(name.as_str()) {
                if let Json::Object(inner) = &value {
                    // The sub-record has no sub-record of its own
                    record.secondary = Some(Box::new(Record::from_map(inner.clone(), None)));
                }
            }
            record.insert(name, FieldValue::from(value));
        }
        record
    }

    /// Converts the record back to a JSON object in field order.
    pub fn to_json(&self) -> Json {
        let map: Map<String, Json> = self
            .iter()
            .map(|(name, value)| (name.to_string(), value.to_json()))
            .collect();
        Json::Object(map)
    }

    /// Iterates fields in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields
            .iter()
            .map(|(name, value)| (name.as_str(), value))
    }

    /// Returns the number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if the record has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl Searchable for Record {
    fn field(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    fn secondary(&self) -> Option<&Self> {
        self.secondary.as_deref()
    }
}

/// Loads a record collection from JSON.
///
/// Accepts either an array of record objects or an object whose values are
/// record objects (a dictionary keyed by card number). Dictionary order is
/// the order of the file.
pub fn load_records<R: Read>(reader: R, secondary_field: &str) -> Result<Vec<Record>> {
    let json: Json = serde_json::from_reader(reader)?;
    let items: Vec<Json> = match json {
        Json::Array(items) => items,
        Json::Object(map) => map.into_iter().map(|(_, item)| item).collect(),
        other => {
            return Err(CriteriaError::InvalidCollection {
                actual: json_kind(&other),
            })
        }
    };

    let records = items
        .into_iter()
        .map(|item| Record::from_json(item, secondary_field))
        .collect::<Result<Vec<_>>>()?;
    tracing::debug!(count = records.len(), "loaded records");
    Ok(records)
}

fn json_kind(json: &Json) -> &'static str {
    match json {
        Json::Null => "null",
        Json::Bool(_) => "boolean",
        Json::Number(_) => "number",
        Json::String(_) => "string",
        Json::Array(_) => "array",
        Json::Object(_) => "object",
    }
}

/// Metadata about one filterable field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Key into the record.
    pub field_name: String,
    /// Runtime shape of the value.
    pub field_type: FieldType,
    /// Display name, used for sorting.
    pub label: String,
}

/// Describes the fields of a sample record, sorted by label.
pub fn describe_fields(record: &Record) -> Vec<FieldDescriptor> {
    let mut fields: Vec<FieldDescriptor> = record
        .iter()
        .map(|(name, value)| FieldDescriptor {
            field_name: name.to_string(),
            field_type: value.field_type(),
            label: name.to_string(),
        })
        .collect();
    fields.sort_by(|a, b| a.label.cmp(&b.label));
    fields
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Scalar;
    use serde_json::json;

    fn card_json() -> Json {
        json!({
            "name": "Son Goku",
            "cost": 3,
            "color": ["Red", "Blue"],
            "era": null,
            "cardBack": { "name": "Son Goku, Awakened", "power": "Power: 15000" }
        })
    }

    #[test]
    fn from_json_reads_fields() {
        let record = Record::from_json(card_json(), DEFAULT_SECONDARY_FIELD).unwrap();
        assert_eq!(record.len(), 5);
        assert_eq!(record.field("name"), Some(&FieldValue::from("Son Goku")));
        assert_eq!(record.field("era"), Some(&FieldValue::Null));
        assert_eq!(record.field("missing"), None);
    }

    #[test]
    fn from_json_extracts_secondary() {
        let record = Record::from_json(card_json(), DEFAULT_SECONDARY_FIELD).unwrap();
        let back = record.secondary().unwrap();
        assert_eq!(back.field("power"), Some(&FieldValue::from("Power: 15000")));
        assert!(back.secondary().is_none());
        // still visible as an object field
        assert_eq!(
            record.field("cardBack").map(FieldValue::field_type),
            Some(FieldType::Object)
        );
    }

    #[test]
    fn secondary_field_is_configurable() {
        let record = Record::from_json(card_json(), "other").unwrap();
        assert!(record.secondary().is_none());
    }

    #[test]
    fn non_object_secondary_is_plain_field() {
        let record = Record::from_json(json!({"cardBack": "none"}), "cardBack").unwrap();
        assert!(record.secondary().is_none());
        assert_eq!(record.field("cardBack"), Some(&FieldValue::from("none")));
    }

    #[test]
    fn from_json_rejects_non_objects() {
        let err = Record::from_json(json!([1, 2]), DEFAULT_SECONDARY_FIELD).unwrap_err();
        assert!(matches!(err, CriteriaError::RecordNotAnObject { actual: "array" }));
    }

    #[test]
    fn to_json_round_trips_fields() {
        let record = Record::from_json(card_json(), DEFAULT_SECONDARY_FIELD).unwrap();
        assert_eq!(record.to_json(), card_json());
    }

    #[test]
    fn builder_keeps_insertion_order() {
        let record = Record::new()
            .with_field("b", "x")
            .with_field("a", 1i64)
            .with_field("b", "y");
        let names: Vec<&str> = record.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["b", "a"]);
        assert_eq!(record.field("b"), Some(&FieldValue::from("y")));
    }

    #[test]
    fn load_records_from_array() {
        let data = r#"[{"name": "a"}, {"name": "b"}]"#;
        let records = load_records(data.as_bytes(), DEFAULT_SECONDARY_FIELD).unwrap();
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn load_records_from_dictionary() {
        let data = r#"{"BT1-001": {"name": "a"}, "BT1-002": {"name": "b"}}"#;
        let records = load_records(data.as_bytes(), DEFAULT_SECONDARY_FIELD).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].field("name"), Some(&FieldValue::from("b")));
    }

    #[test]
    fn load_records_rejects_scalars_and_bad_items() {
        let err = load_records("42".as_bytes(), DEFAULT_SECONDARY_FIELD).unwrap_err();
        assert!(matches!(err, CriteriaError::InvalidCollection { actual: "number" }));

        let err = load_records(r#"[{"a": 1}, "x"]"#.as_bytes(), DEFAULT_SECONDARY_FIELD)
            .unwrap_err();
        assert!(matches!(err, CriteriaError::RecordNotAnObject { actual: "string" }));

        let err = load_records("{".as_bytes(), DEFAULT_SECONDARY_FIELD).unwrap_err();
        assert!(matches!(err, CriteriaError::InvalidJson(_)));
    }

    #[test]
    fn describe_fields_sorted_by_label() {
        let record = Record::from_json(card_json(), DEFAULT_SECONDARY_FIELD).unwrap();
        let fields = describe_fields(&record);
        let labels: Vec<&str> = fields.iter().map(|f| f.label.as_str()).collect();
        assert_eq!(labels, vec!["cardBack", "color", "cost", "era", "name"]);

        let types: Vec<FieldType> = fields.iter().map(|f| f.field_type).collect();
        assert_eq!(
            types,
            vec![
                FieldType::Object,
                FieldType::Array,
                FieldType::Number,
                FieldType::Null,
                FieldType::String,
            ]
        );
    }

    #[test]
    fn list_fields_hold_scalars() {
        let record = Record::from_json(card_json(), DEFAULT_SECONDARY_FIELD).unwrap();
        assert_eq!(
            record.field("color"),
            Some(&FieldValue::List(vec![Scalar::from("Red"), Scalar::from("Blue")]))
        );
    }
}
