//! Heuristic SQL analysis for QueryDeck saved queries.
//!
//! The dashboard calls into this crate whenever a saved query is edited or
//! run. It answers four questions about free-form SQL text without parsing
//! it: which tables it touches, which named placeholders it contains (and
//! what type each probably is), what the SQL looks like with values filled
//! in, and which saved queries touch a given table. It also produces canned
//! sample/count/stats queries for a table.
//!
//! # Architecture
//!
//! Everything is a pure function over `&str`. Scanning uses `regex-lite`
//! character-class patterns with no nested quantifiers, so run time stays
//! linear in the input. Nothing is cached between calls apart from the
//! compiled patterns.
//!
//! Table extraction reads comment-stripped text; placeholder detection reads
//! the raw text, so a `:name` inside a comment still shows up as a parameter.
//!
//! Substitution is literal formatting, not binding. It is not an injection
//! defence; see [`substitute_parameters`].

mod analysis;
mod config;
mod error;
mod types;

pub use analysis::{
    QueryText, QuickActionGenerator, analyze_query, classify_statement, detect_parameters,
    extract_table_names, find_queries_for_table, generate_quick_action_query,
    infer_parameter_type, missing_parameters, normalize_sql, query_references_table,
    substitute_parameters,
};
pub use config::AnalyzerConfig;
pub use error::{AnalysisError, AnalysisResult};
pub use types::{
    ParameterType, PlaceholderSyntax, QueryAnalysis, QueryParameter, QuickAction, SavedQuery,
    StatementType, SubstitutionValue,
};
