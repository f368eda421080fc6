use serde_json::{Number, Value as JsonValue};
use std::cmp::Ordering;

/// Render a resolved field value as display text.
///
/// Arrays join their elements with `,`, objects render as compact JSON,
/// integral floats drop the fractional part (`51.0` renders as `51`).
pub fn render_value(value: &JsonValue) -> String {
    match value {
        JsonValue::Null => String::new(),
        JsonValue::Bool(b) => b.to_string(),
        JsonValue::Number(n) => render_number(n),
        JsonValue::String(s) => s.clone(),
        JsonValue::Array(items) => items
            .iter()
            .map(render_value)
            .collect::<Vec<_>>()
            .join(","),
        JsonValue::Object(_) => value.to_string(),
    }
}

fn render_number(n: &Number) -> String {
    if let Some(i) = n.as_i64() {
        return i.to_string();
    }
    if let Some(u) = n.as_u64() {
        return u.to_string();
    }
    match n.as_f64() {
        Some(f) if f.is_finite() && f.fract() == 0.0 && f.abs() < 1e21 => format!("{f:.0}"),
        Some(f) => f.to_string(),
        None => n.to_string(),
    }
}

/// Three-way comparison of two resolved values.
///
/// Values are ranked by kind first: absent (also `null` and `""`), then
/// booleans, numbers, strings, and finally arrays and objects. Within a
/// kind numbers compare numerically, strings and booleans natively, and
/// arrays and objects by rendered text. The result is a total order.
pub fn compare_values(left: Option<&JsonValue>, right: Option<&JsonValue>) -> Ordering {
    let (left_rank, right_rank) = (kind_rank(left), kind_rank(right));
    if left_rank != right_rank {
        return left_rank.cmp(&right_rank);
    }

    match (left, right) {
        (Some(JsonValue::Number(a)), Some(JsonValue::Number(b))) => compare_numbers(a, b),
        (Some(JsonValue::String(a)), Some(JsonValue::String(b))) => a.cmp(b),
        (Some(JsonValue::Bool(a)), Some(JsonValue::Bool(b))) => a.cmp(b),
        (Some(a @ (JsonValue::Array(_) | JsonValue::Object(_))), Some(b)) => {
            render_value(a).cmp(&render_value(b))
        }
        _ => Ordering::Equal,
    }
}

fn kind_rank(value: Option<&JsonValue>) -> u8 {
    match value {
        None | Some(JsonValue::Null) => 0,
        Some(JsonValue::String(s)) if s.is_empty() => 0,
        Some(JsonValue::Bool(_)) => 1,
        Some(JsonValue::Number(_)) => 2,
        Some(JsonValue::String(_)) => 3,
        Some(JsonValue::Array(_) | JsonValue::Object(_)) => 4,
    }
}

// Single f64 key for every pair, large integers included.
fn compare_numbers(a: &Number, b: &Number) -> Ordering {
    match (a.as_f64(), b.as_f64()) {
        (Some(a), Some(b)) => a.total_cmp(&b),
        _ => a.to_string().cmp(&b.to_string()),
    }
}
