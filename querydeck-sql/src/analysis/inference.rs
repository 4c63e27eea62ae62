//! Name-based type guessing for placeholders.
//!
//! Categories are tried in a fixed order and the first hit wins, so a name
//! like `deleted_flag` is a date (the date list sees `deleted` first) even
//! though the boolean list also mentions `deleted`.

use crate::types::ParameterType;

const DATE_FRAGMENTS: &[&str] = &["date", "time", "_at", "created", "updated", "deleted"];
const DATE_NAMES: &[&str] = &["from", "to", "start", "end"];

const NUMBER_FRAGMENTS: &[&str] = &[
    "id", "count", "num", "amount", "price", "quantity", "total", "limit", "offset", "page",
    "size", "age", "year", "month", "day",
];

const BOOLEAN_FRAGMENTS: &[&str] = &[
    "is_", "has_", "can_", "should_", "active", "enabled", "visible", "deleted",
];
const BOOLEAN_NAMES: &[&str] = &["flag", "status"];

/// Guess the semantic type of a parameter from its name.
pub fn infer_parameter_type(name: &str) -> ParameterType {
    let lower = name.to_lowercase();
    let contains_any = |fragments: &[&str]| fragments.iter().any(|f| lower.contains(f));
    let equals_any = |names: &[&str]| names.contains(&lower.as_str());

    if contains_any(DATE_FRAGMENTS) || lower.ends_with("_on") || equals_any(DATE_NAMES) {
        ParameterType::Date
    } else if contains_any(NUMBER_FRAGMENTS) {
        ParameterType::Number
    } else if contains_any(BOOLEAN_FRAGMENTS) || equals_any(BOOLEAN_NAMES) {
        ParameterType::Boolean
    } else {
        ParameterType::Text
    }
}
