//! Shared helper functions for the analysis scanners.

/// Unquoted SQL identifier as recognized by every scanner in this crate.
pub(crate) const IDENT: &str = "[A-Za-z_][A-Za-z0-9_]*";

/// Wrap a value in single quotes, doubling any embedded quote.
pub(crate) fn escape_string_literal(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}

/// Strip any schema prefix: `public.users` -> `users`.
pub(crate) fn bare_table_name(name: &str) -> &str {
    name.rsplit('.').next().unwrap_or(name)
}

/// Current time in milliseconds since Unix epoch.
pub(crate) fn now_millis() -> i64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as i64
}
