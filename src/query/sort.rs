// ============================================================================
// src/query/sort.rs - Single-key stable sorting
// ============================================================================
//
// At most one sort key is active. Choosing a new column replaces the current
// key instead of adding a secondary one, and repeated toggles on the same
// column cycle ascending -> descending -> unsorted.
//
// Equal keys keep their input order (stable sort); no tie-breaker is added.
//
// ============================================================================

use crate::core::{FieldPath, Record, compare_values};
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn is_descending(self) -> bool {
        self == Self::Desc
    }

    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Asc => ordering,
            Self::Desc => ordering.reverse(),
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Asc => write!(f, "asc"),
            Self::Desc => write!(f, "desc"),
        }
    }
}

// ============================================================================
// SORT KEY
// ============================================================================

/// The active sort: a field path and a direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortKey {
    pub field: FieldPath,
    pub direction: SortDirection,
}

impl SortKey {
    pub fn new(field: impl Into<FieldPath>, direction: SortDirection) -> Self {
        Self {
            field: field.into(),
            direction,
        }
    }

    pub fn asc(field: impl Into<FieldPath>) -> Self {
        Self::new(field, SortDirection::Asc)
    }

    pub fn desc(field: impl Into<FieldPath>) -> Self {
        Self::new(field, SortDirection::Desc)
    }

    /// Compare two records on this key. Missing values sort as the empty
    /// string, i.e. first when ascending.
    pub fn compare(&self, left: &Record, right: &Record) -> Ordering {
        let ordering = compare_values(left.resolve(&self.field), right.resolve(&self.field));
        self.direction.apply(ordering)
    }
}

/// Next sort state after clicking `field`.
///
/// - unsorted or sorted by another field: `field` ascending
/// - `field` ascending: `field` descending
/// - `field` descending: unsorted
pub fn toggle_sort(current: Option<&SortKey>, field: &str) -> Option<SortKey> {
    match current {
        Some(key) if key.field.as_str() == field => match key.direction {
            SortDirection::Asc => Some(SortKey::desc(key.field.clone())),
            SortDirection::Desc => None,
        },
        _ => Some(SortKey::asc(field)),
    }
}

/// Stable in-place sort. `None` leaves the order untouched.
pub fn sort_records<R: Borrow<Record>>(records: &mut [R], key: Option<&SortKey>) {
    let Some(key) = key else {
        return;
    };
    if records.len() < 2 {
        return;
    }

    // slice::sort_by is stable
    records.sort_by(|left, right| {
        key.compare(
            <R as Borrow<Record>>::borrow(left),
            <R as Borrow<Record>>::borrow(right),
        )
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fields_from_json;
    use serde_json::{Value as JsonValue, json};

    fn port(id: &str, value: JsonValue) -> Record {
        Record::new(id, fields_from_json(value).unwrap())
    }

    fn ids(records: &[&Record]) -> Vec<String> {
        records.iter().map(|r| r.id().to_string()).collect()
    }

    #[test]
    fn test_sort_by_name_both_directions() {
        let a = port("A", json!({ "name": "Rotterdam" }));
        let b = port("B", json!({ "name": "Antwerp" }));
        let c = port("C", json!({ "name": "Hamburg" }));

        let mut rows = vec![&a, &b, &c];
        sort_records(&mut rows, Some(&SortKey::asc("name")));
        assert_eq!(ids(&rows), vec!["B", "C", "A"]);

        sort_records(&mut rows, Some(&SortKey::desc("name")));
        assert_eq!(ids(&rows), vec!["A", "C", "B"]);
    }

    #[test]
    fn test_sort_is_stable_for_equal_keys() {
        let rows_owned = vec![
            port("1", json!({ "country": "NL" })),
            port("2", json!({ "country": "BE" })),
            port("3", json!({ "country": "NL" })),
            port("4", json!({ "country": "BE" })),
            port("5", json!({ "country": "NL" })),
        ];
        let mut rows: Vec<&Record> = rows_owned.iter().collect();

        sort_records(&mut rows, Some(&SortKey::asc("country")));
        assert_eq!(ids(&rows), vec!["2", "4", "1", "3", "5"]);

        let mut rows: Vec<&Record> = rows_owned.iter().collect();
        sort_records(&mut rows, Some(&SortKey::desc("country")));
        assert_eq!(ids(&rows), vec!["1", "3", "5", "2", "4"]);
    }

    #[test]
    fn test_missing_values_sort_first_ascending() {
        let a = port("A", json!({ "province": "Zeeland" }));
        let b = port("B", json!({}));
        let c = port("C", json!({ "province": "Antwerpen" }));

        let mut rows = vec![&a, &b, &c];
        sort_records(&mut rows, Some(&SortKey::asc("province")));
        assert_eq!(ids(&rows), vec!["B", "C", "A"]);
    }

    #[test]
    fn test_nested_numeric_sort() {
        let a = port("A", json!({ "coordinates": { "latitude": 51.9 } }));
        let b = port("B", json!({ "coordinates": { "latitude": -33.9 } }));
        let c = port("C", json!({ "coordinates": { "latitude": 9.5 } }));

        let mut rows = vec![&a, &b, &c];
        sort_records(&mut rows, Some(&SortKey::asc("coordinates.latitude")));
        assert_eq!(ids(&rows), vec!["B", "C", "A"]);
    }

    #[test]
    fn test_no_key_keeps_order() {
        let a = port("A", json!({ "name": "Z" }));
        let b = port("B", json!({ "name": "A" }));
        let mut rows = vec![&a, &b];
        sort_records(&mut rows, None);
        assert_eq!(ids(&rows), vec!["A", "B"]);
    }

    #[test]
    fn test_mixed_numbers_and_numeric_text_sort_totally() {
        // fixed LCG so the shuffle is repeatable
        let mut state: u64 = 0x2545_F491_4F6C_DD1D;
        let mut next = move || {
            state = state.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1);
            state >> 33
        };

        for size in [50, 333, 2000] {
            let mut rows: Vec<Record> = (0..size)
                .map(|n| {
                    let value = next() % 1000;
                    let code = if next() % 2 == 0 {
                        json!(value)
                    } else {
                        json!(value.to_string())
                    };
                    port(&n.to_string(), json!({ "code": code }))
                })
                .collect();

            sort_records(&mut rows, Some(&SortKey::asc("code")));

            let codes: Vec<&JsonValue> = rows.iter().map(|r| r.get("code").unwrap()).collect();
            let split = codes.iter().position(|code| code.is_string()).unwrap_or(codes.len());
            assert!(codes[..split].iter().all(|code| code.is_number()));
            assert!(codes[split..].iter().all(|code| code.is_string()));

            let numbers: Vec<u64> = codes[..split].iter().filter_map(|c| c.as_u64()).collect();
            assert!(numbers.windows(2).all(|pair| pair[0] <= pair[1]));
            let texts: Vec<&str> = codes[split..].iter().filter_map(|c| c.as_str()).collect();
            assert!(texts.windows(2).all(|pair| pair[0] <= pair[1]));
        }
    }

    #[test]
    fn test_toggle_cycles_and_replaces() {
        let first = toggle_sort(None, "name");
        assert_eq!(first, Some(SortKey::asc("name")));

        let second = toggle_sort(first.as_ref(), "name");
        assert_eq!(second, Some(SortKey::desc("name")));

        let third = toggle_sort(second.as_ref(), "name");
        assert_eq!(third, None);

        let other = toggle_sort(second.as_ref(), "country");
        assert_eq!(other, Some(SortKey::asc("country")));
    }
}
