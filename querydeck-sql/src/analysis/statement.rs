//! Statement classification from the leading keyword.

use super::normalizer::normalize_sql;
use crate::types::StatementType;

/// Classify a query by its first keyword, ignoring leading comments.
pub fn classify_statement(sql: &str) -> StatementType {
    let upper = normalize_sql(sql).to_ascii_uppercase();
    let mut words = upper
        .split(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
        .filter(|w| !w.is_empty());

    match (words.next(), words.next()) {
        (Some("SELECT" | "WITH"), _) => StatementType::Select,
        (Some("INSERT"), _) => StatementType::Insert,
        (Some("UPDATE"), _) => StatementType::Update,
        (Some("DELETE"), _) => StatementType::Delete,
        (Some("CREATE"), Some("TABLE")) => StatementType::CreateTable,
        (Some("ALTER"), Some("TABLE")) => StatementType::AlterTable,
        _ => StatementType::Other,
    }
}
