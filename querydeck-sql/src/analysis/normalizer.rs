//! Comment stripping and whitespace collapsing ahead of table extraction.
//!
//! Comments are removed without regard to string literals: `'--'` inside a
//! quoted value starts a comment just as it would outside one.

/// Remove comments and collapse whitespace runs to single spaces.
pub fn normalize_sql(sql: &str) -> String {
    strip_comments(sql)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Remove `-- ...` line comments and `/* ... */` block comments.
///
/// Block comments do not nest and leave nothing behind, so `FROM/*x*/users`
/// becomes `FROMusers`. An unterminated `/*` swallows the rest of the input.
pub(crate) fn strip_comments(sql: &str) -> String {
    let bytes = sql.as_bytes();
    let mut out = String::with_capacity(sql.len());
    let mut start = 0;
    let mut i = 0;

    while i < bytes.len() {
        match (bytes[i], bytes.get(i + 1)) {
            (b'-', Some(b'-')) => {
                out.push_str(&sql[start..i]);
                // keep the newline itself
                i = sql[i..].find('\n').map_or(bytes.len(), |off| i + off);
                start = i;
            }
            (b'/', Some(b'*')) => {
                out.push_str(&sql[start..i]);
                i = sql[i + 2..]
                    .find("*/")
                    .map_or(bytes.len(), |off| i + 2 + off + 2);
                start = i;
            }
            _ => i += 1,
        }
    }
    out.push_str(&sql[start..]);
    out
}
