//! Stateless SQL text analysis: every function here is pure and safe to call
//! from any thread without coordination.

mod association;
pub(crate) mod helpers;
mod inference;
mod normalizer;
mod parameters;
mod quick_actions;
mod statement;
mod substitution;
mod tables;

pub use association::{QueryText, find_queries_for_table, query_references_table};
pub use inference::infer_parameter_type;
pub use normalizer::normalize_sql;
pub use parameters::detect_parameters;
pub use quick_actions::{QuickActionGenerator, generate_quick_action_query};
pub use statement::classify_statement;
pub use substitution::{missing_parameters, substitute_parameters};
pub use tables::extract_table_names;

use crate::types::QueryAnalysis;

/// Statement type, tables and parameters of `sql` in one call.
pub fn analyze_query(sql: &str) -> QueryAnalysis {
    QueryAnalysis {
        statement_type: classify_statement(sql),
        tables: extract_table_names(sql),
        parameters: detect_parameters(sql),
    }
}
