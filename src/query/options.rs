//! Distinct values per field, for filter suggestion lists.
//!
//! Recomputed on every call: the store can change between calls.

use crate::core::{FieldPath, Record, render_value};
use std::collections::BTreeSet;

/// Sorted, de-duplicated text of every non-null value at `field`.
pub fn distinct_values(records: &[Record], field: &FieldPath) -> Vec<String> {
    records
        .iter()
        .filter_map(|record| record.resolve(field))
        .map(render_value)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Options containing `term`, ignoring case. An empty term keeps everything.
pub fn narrow_options<'a>(options: &'a [String], term: &str) -> Vec<&'a str> {
    let term = term.to_lowercase();
    options
        .iter()
        .filter(|option| option.to_lowercase().contains(&term))
        .map(String::as_str)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fields_from_json;
    use serde_json::{Value as JsonValue, json};

    fn port(id: &str, value: JsonValue) -> Record {
        Record::new(id, fields_from_json(value).unwrap())
    }

    #[test]
    fn test_distinct_sorted_values() {
        let records = vec![
            port("A", json!({ "country": "Netherlands" })),
            port("B", json!({ "country": "Belgium" })),
            port("C", json!({ "country": "Netherlands" })),
            port("D", json!({ "country": null })),
            port("E", json!({})),
        ];

        assert_eq!(
            distinct_values(&records, &FieldPath::parse("country")),
            vec!["Belgium", "Netherlands"]
        );
    }

    #[test]
    fn test_distinct_nested_numbers_as_text() {
        let records = vec![
            port("A", json!({ "coordinates": { "latitude": 51.0 } })),
            port("B", json!({ "coordinates": { "latitude": 4.5 } })),
            port("C", json!({ "coordinates": {} })),
        ];

        assert_eq!(
            distinct_values(&records, &FieldPath::parse("coordinates.latitude")),
            vec!["4.5", "51"]
        );
    }

    #[test]
    fn test_unknown_field_has_no_options() {
        let records = vec![port("A", json!({ "name": "Aden" }))];
        assert!(distinct_values(&records, &FieldPath::parse("harbour.depth")).is_empty());
    }

    #[test]
    fn test_narrow_options_ignores_case() {
        let options = vec!["Belgium".to_string(), "Netherlands".to_string(), "New Zealand".to_string()];
        assert_eq!(narrow_options(&options, "NE"), vec!["Netherlands", "New Zealand"]);
        assert_eq!(narrow_options(&options, "gium"), vec!["Belgium"]);
        assert_eq!(narrow_options(&options, "e").len(), 3);
        assert_eq!(narrow_options(&options, "").len(), 3);
    }
}
