//! Which saved queries touch which tables.

use super::helpers::bare_table_name;
use super::tables::extract_table_names;
use crate::types::SavedQuery;
use tracing::debug;

/// Field names checked, in order, when a JSON record carries query text.
const JSON_TEXT_FIELDS: &[&str] = &["query", "sql", "content"];

/// A record that carries SQL text.
pub trait QueryText {
    /// The SQL, or `None` when the record has no populated text field.
    fn query_text(&self) -> Option<&str>;
}

impl QueryText for SavedQuery {
    fn query_text(&self) -> Option<&str> {
        Some(&self.sql)
    }
}

impl QueryText for str {
    fn query_text(&self) -> Option<&str> {
        Some(self)
    }
}

impl QueryText for String {
    fn query_text(&self) -> Option<&str> {
        Some(self)
    }
}

/// Uses the first non-empty string among `query`, `sql` and `content`.
impl QueryText for serde_json::Value {
    fn query_text(&self) -> Option<&str> {
        JSON_TEXT_FIELDS.iter().find_map(|field| {
            self.get(field)
                .and_then(serde_json::Value::as_str)
                .filter(|s| !s.is_empty())
        })
    }
}

impl<T: QueryText + ?Sized> QueryText for &T {
    fn query_text(&self) -> Option<&str> {
        (**self).query_text()
    }
}

/// True when `sql` references `table_name`, exactly or ignoring schema
/// prefixes on either side (`public.users` matches `users` and vice versa).
pub fn query_references_table(sql: &str, table_name: &str) -> bool {
    let target = table_name.trim().to_lowercase();
    if target.is_empty() {
        return false;
    }

    let tables = extract_table_names(sql);
    if tables.contains(&target) {
        return true;
    }
    let bare = bare_table_name(&target);
    tables.iter().any(|t| bare_table_name(t) == bare)
}

/// Records whose query text references `table_name`, in input order.
pub fn find_queries_for_table<'a, Q: QueryText>(queries: &'a [Q], table_name: &str) -> Vec<&'a Q> {
    let matches: Vec<&Q> = queries
        .iter()
        .filter(|q| {
            q.query_text()
                .is_some_and(|sql| query_references_table(sql, table_name))
        })
        .collect();
    debug!(
        table = table_name,
        scanned = queries.len(),
        matched = matches.len(),
        "filtered saved queries by table"
    );
    matches
}
