//! Field matching.
//!
//! Gathers the candidate values a record offers for a field and tests parsed
//! conditions against them.

use std::borrow::{Borrow, Cow};

use crate::condition::Condition;
use crate::record::Searchable;
use crate::value::{FieldType, Scalar};

/// Returns `true` if any candidate satisfies any condition.
///
/// # Example
///
/// ```
/// use cardsift_criteria::{matches, parse, Scalar};
///
/// let candidates = [Scalar::from("xaz")];
/// assert!(matches(&parse("a||b"), &candidates));
/// assert!(!matches(&parse("a||b"), &[Scalar::from("xyz")]));
/// ```
pub fn matches<I, S>(conditions: &[Condition], candidates: I) -> bool
where
    I: IntoIterator<Item = S>,
    S: Borrow<Scalar>,
{
    candidates.into_iter().any(|candidate| {
        let candidate = candidate.borrow();
        conditions.iter().any(|condition| condition.matches(candidate))
    })
}

/// Gathers the candidate values of `field` on `record`.
///
/// Returns `None` when the record's own value is absent or null; the
/// secondary record is not consulted in that case.
///
/// - `FieldType::Object`: the whole value serialized to JSON text.
/// - Otherwise: the value (every element of a list), followed by the
///   secondary record's value for the same field when it has a non-null one.
pub fn candidates<'a, R>(
    record: &'a R,
    field: &str,
    field_type: FieldType,
) -> Option<Vec<Cow<'a, Scalar>>>
where
    R: Searchable,
{
    let primary = record.field(field).filter(|value| !value.is_null())?;

    if field_type == FieldType::Object {
        return Some(vec![Cow::Owned(Scalar::String(primary.to_json_string()))]);
    }

    let mut out = Vec::new();
    primary.extend_candidates(&mut out);
    if let Some(secondary) = record.secondary().and_then(|back| back.field(field)) {
        secondary.extend_candidates(&mut out);
    }
    Some(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::op::Op;
    use crate::parser::parse;
    use crate::record::Record;
    use crate::value::FieldValue;
    use serde_json::json;

    fn card() -> Record {
        Record::new()
            .with_field("name", "Son Goku")
            .with_field(
                "color",
                FieldValue::List(vec![Scalar::from("Red"), Scalar::from("Blue")]),
            )
            .with_field("cost", 3i64)
            .with_field("era", FieldValue::Null)
            .with_field("skills", FieldValue::from(json!({"auto": "Barrier"})))
            .with_secondary(
                Record::new()
                    .with_field("name", "Son Goku, Awakened")
                    .with_field("color", "Green")
                    .with_field("era", "Z"),
            )
    }

    fn texts(values: &[Cow<'_, Scalar>]) -> Vec<String> {
        values.iter().map(|v| v.canonical().into_owned()).collect()
    }

    #[test]
    fn matches_any_condition_any_candidate() {
        let values = [Scalar::from("abc"), Scalar::from("def")];
        assert!(matches(&parse("zz || ef"), &values));
        assert!(!matches(&parse("zz || yy"), &values));
    }

    #[test]
    fn matches_with_no_candidates_is_false() {
        let values: [Scalar; 0] = [];
        assert!(!matches(&parse(""), &values));
    }

    #[test]
    fn matches_with_no_conditions_is_false() {
        assert!(!matches(&[], [Scalar::from("abc")]));
    }

    #[test]
    fn matches_owned_candidates() {
        assert!(matches(
            &[Condition::numeric(Op::Gte, "3")],
            vec![Scalar::from("cost: 5")]
        ));
    }

    #[test]
    fn candidates_include_secondary() {
        let record = card();
        let values = candidates(&record, "name", FieldType::String).unwrap();
        assert_eq!(texts(&values), vec!["Son Goku", "Son Goku, Awakened"]);
    }

    #[test]
    fn candidates_expand_both_sides() {
        let record = card();
        let values = candidates(&record, "color", FieldType::Array).unwrap();
        assert_eq!(texts(&values), vec!["Red", "Blue", "Green"]);
    }

    #[test]
    fn candidates_without_secondary_value() {
        let record = card();
        let values = candidates(&record, "cost", FieldType::Number).unwrap();
        assert_eq!(texts(&values), vec!["3"]);
    }

    #[test]
    fn falsy_secondary_values_are_candidates() {
        let record = Record::new()
            .with_field("cost", 5i64)
            .with_secondary(Record::new().with_field("cost", 0i64));
        let values = candidates(&record, "cost", FieldType::Number).unwrap();
        assert_eq!(texts(&values), vec!["5", "0"]);
        assert!(matches(&parse("<1"), values.iter().map(|v| v.as_ref())));

        let record = Record::new()
            .with_field("cost", 5i64)
            .with_secondary(Record::new().with_field("cost", FieldValue::Null));
        let values = candidates(&record, "cost", FieldType::Number).unwrap();
        assert_eq!(texts(&values), vec!["5"]);
    }

    #[test]
    fn null_primary_does_not_fall_back() {
        let record = card();
        assert!(candidates(&record, "era", FieldType::String).is_none());
        assert!(candidates(&record, "missing", FieldType::String).is_none());
    }

    #[test]
    fn object_type_serializes_whole_value() {
        let record = card();
        let values = candidates(&record, "skills", FieldType::Object).unwrap();
        assert_eq!(texts(&values), vec![r#"{"auto":"Barrier"}"#]);

        // scalars are serialized as JSON too
        let values = candidates(&record, "name", FieldType::Object).unwrap();
        assert_eq!(texts(&values), vec![r#""Son Goku""#]);
    }

    #[test]
    fn object_type_missing_field_is_none() {
        assert!(candidates(&card(), "missing", FieldType::Object).is_none());
    }
}
