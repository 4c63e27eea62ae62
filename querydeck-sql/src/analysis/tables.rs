//! Table reference extraction.
//!
//! A keyword scan over normalized text, not a parser: `FROM`/`JOIN` clauses
//! plus the write targets of `UPDATE`, `INSERT INTO` and `DELETE FROM`.
//! The word after a `FROM`/`JOIN` table is taken as its alias and skipped,
//! even when it is a keyword, so `FROM a JOIN b` only reports `a`.
//! Subqueries (`FROM (`) never match the identifier class and so are skipped
//! while the inner `FROM` is still seen. CTE names are not tracked.

use super::helpers::IDENT;
use super::normalizer::normalize_sql;
use regex_lite::Regex;
use std::collections::BTreeSet;
use std::sync::LazyLock;
use tracing::{debug, trace};

static READ_CLAUSE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?i)\b(?:FROM|JOIN)\s+({IDENT}(?:\.{IDENT})?)(?:\s+(?:AS\s+)?{IDENT})?"
    ))
    .expect("read clause pattern is valid")
});

static WRITE_CLAUSE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?i)\b(?:UPDATE|INSERT\s+INTO|DELETE\s+FROM)\s+({IDENT}(?:\.{IDENT})?)"
    ))
    .expect("write clause pattern is valid")
});

/// Lower-cased, deduplicated names of the tables `sql` reads or writes.
pub fn extract_table_names(sql: &str) -> BTreeSet<String> {
    let mut tables = BTreeSet::new();
    if sql.trim().is_empty() {
        return tables;
    }

    let normalized = normalize_sql(sql);
    for re in [&*READ_CLAUSE_RE, &*WRITE_CLAUSE_RE] {
        for cap in re.captures_iter(&normalized) {
            if let Some(name) = cap.get(1) {
                trace!(table = name.as_str(), "table reference");
                tables.insert(name.as_str().to_ascii_lowercase());
            }
        }
    }

    debug!(table_count = tables.len(), "extracted table names");
    tables
}
