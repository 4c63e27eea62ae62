//! Placeholder substitution and SQL literal formatting.
//!
//! This is plain text replacement, not parameter binding. Quote doubling
//! keeps ordinary values well-formed, but it is not a security boundary:
//! never run substituted SQL built from untrusted input against a database
//! where the caller's privileges matter. Use the driver's prepared
//! statements for that.

use super::helpers::escape_string_literal;
use super::parameters::{ANY_PLACEHOLDER_RE, detect_parameters};
use crate::error::{AnalysisError, AnalysisResult};
use crate::types::{ParameterType, QueryParameter, SubstitutionValue};
use regex_lite::Captures;
use std::collections::HashMap;
use tracing::{debug, warn};

/// Replace every placeholder whose name has a value, in any of the three
/// syntaxes, with the value's SQL literal.
///
/// One pass: text produced by a replacement is never scanned again, and
/// placeholders without a value are left as written.
pub fn substitute_parameters(sql: &str, values: &HashMap<String, SubstitutionValue>) -> String {
    if sql.is_empty() || values.is_empty() {
        return sql.to_string();
    }

    let mut replaced = 0usize;
    let result = ANY_PLACEHOLDER_RE.replace_all(sql, |caps: &Captures<'_>| {
        let value = (1..=3)
            .find_map(|group| caps.get(group))
            .and_then(|name| values.get(name.as_str()));
        match value {
            Some(value) => {
                replaced += 1;
                value.to_sql_literal()
            }
            None => caps[0].to_string(),
        }
    });
    let result = result.into_owned();

    debug!(replaced, supplied = values.len(), "substituted query parameters");
    result
}

/// Detected parameters that have no entry in `values`, in detection order.
pub fn missing_parameters(
    sql: &str,
    values: &HashMap<String, SubstitutionValue>,
) -> Vec<QueryParameter> {
    detect_parameters(sql)
        .into_iter()
        .filter(|p| !values.contains_key(&p.name))
        .collect()
}

impl SubstitutionValue {
    /// Format as a SQL literal. Empty text counts as absent and becomes `NULL`.
    pub fn to_sql_literal(&self) -> String {
        match self {
            Self::Null => "NULL".to_string(),
            Self::Boolean(true) => "TRUE".to_string(),
            Self::Boolean(false) => "FALSE".to_string(),
            Self::Number(n) => n.to_string(),
            Self::Text(s) if s.is_empty() => "NULL".to_string(),
            Self::Text(s) => escape_string_literal(s),
        }
    }

    /// Convert what a user typed into a parameter form.
    ///
    /// Blank input is `Null` for every type. Dates stay text and are quoted.
    pub fn parse_input(name: &str, raw: &str, param_type: ParameterType) -> AnalysisResult<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Ok(Self::Null);
        }

        let invalid = |expected: &'static str| AnalysisError::InvalidValue {
            name: name.to_string(),
            expected,
            input: raw.to_string(),
        };

        match param_type {
            ParameterType::Number => {
                if let Ok(i) = trimmed.parse::<i64>() {
                    return Ok(Self::Number(i.into()));
                }
                trimmed
                    .parse::<f64>()
                    .ok()
                    .and_then(serde_json::Number::from_f64)
                    .map(Self::Number)
                    .ok_or_else(|| invalid("number"))
            }
            ParameterType::Boolean => match trimmed.to_ascii_lowercase().as_str() {
                "true" | "t" | "yes" | "1" => Ok(Self::Boolean(true)),
                "false" | "f" | "no" | "0" => Ok(Self::Boolean(false)),
                _ => Err(invalid("boolean")),
            },
            ParameterType::Date => Ok(Self::Text(trimmed.to_string())),
            ParameterType::Text => Ok(Self::Text(raw.to_string())),
        }
    }
}

impl From<bool> for SubstitutionValue {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl From<i64> for SubstitutionValue {
    fn from(v: i64) -> Self {
        Self::Number(v.into())
    }
}

impl From<i32> for SubstitutionValue {
    fn from(v: i32) -> Self {
        Self::Number(v.into())
    }
}

impl From<u64> for SubstitutionValue {
    fn from(v: u64) -> Self {
        Self::Number(v.into())
    }
}

impl From<f64> for SubstitutionValue {
    fn from(v: f64) -> Self {
        match serde_json::Number::from_f64(v) {
            Some(n) => Self::Number(n),
            None => {
                warn!(value = %v, "non-finite number substituted as NULL");
                Self::Null
            }
        }
    }
}

impl From<&str> for SubstitutionValue {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<String> for SubstitutionValue {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl<T: Into<SubstitutionValue>> From<Option<T>> for SubstitutionValue {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}

impl From<serde_json::Value> for SubstitutionValue {
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(b) => Self::Boolean(b),
            serde_json::Value::Number(n) => Self::Number(n),
            serde_json::Value::String(s) => Self::Text(s),
            other => Self::Text(other.to_string()),
        }
    }
}
