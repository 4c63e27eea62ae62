//! Named placeholder detection.
//!
//! Three syntaxes are recognized on the raw text (comments included):
//! `:name`, `${name}` and `{{name}}`. There is no dialect awareness: the
//! `:numeric` in `price::numeric` is a parameter like any other.

use super::helpers::IDENT;
use super::inference::infer_parameter_type;
use crate::types::{PlaceholderSyntax, QueryParameter};
use regex_lite::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;
use tracing::debug;

static COLON_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r":({IDENT})")).expect("colon pattern is valid")
});

static DOLLAR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"\$\{{({IDENT})\}}")).expect("dollar pattern is valid")
});

static MUSTACHE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"\{{\{{({IDENT})\}}\}}")).expect("mustache pattern is valid")
});

/// All three syntaxes in one alternation, name in group 1, 2 or 3.
pub(crate) static ANY_PLACEHOLDER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r":({IDENT})|\$\{{({IDENT})\}}|\{{\{{({IDENT})\}}\}}"))
        .expect("placeholder pattern is valid")
});

/// Unique parameters in first-seen order.
///
/// Syntaxes are scanned colon, then dollar, then mustache; a name written in
/// more than one syntax keeps the syntax of the scan that saw it first.
pub fn detect_parameters(sql: &str) -> Vec<QueryParameter> {
    let mut params = Vec::new();
    if sql.is_empty() {
        return params;
    }

    let scans = [
        (PlaceholderSyntax::Colon, &*COLON_RE),
        (PlaceholderSyntax::Dollar, &*DOLLAR_RE),
        (PlaceholderSyntax::Mustache, &*MUSTACHE_RE),
    ];

    let mut seen = HashSet::new();
    for (syntax, re) in scans {
        for cap in re.captures_iter(sql) {
            let (Some(whole), Some(name)) = (cap.get(0), cap.get(1)) else {
                continue;
            };
            if !seen.insert(name.as_str()) {
                continue;
            }
            params.push(QueryParameter {
                name: name.as_str().to_string(),
                param_type: infer_parameter_type(name.as_str()),
                syntax,
                placeholder: whole.as_str().to_string(),
            });
        }
    }

    debug!(parameter_count = params.len(), "detected query parameters");
    params
}
