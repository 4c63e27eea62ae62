//! Canned exploration queries for a table.
//!
//! Output is final SQL: the table and column names are inserted exactly as
//! given, without quoting or placeholders.

use crate::config::AnalyzerConfig;
use crate::types::QuickAction;
use tracing::debug;

/// Builds quick-action queries under a given configuration.
#[derive(Clone, Debug, Default)]
pub struct QuickActionGenerator {
    config: AnalyzerConfig,
}

impl QuickActionGenerator {
    pub fn new(config: AnalyzerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// SQL for `action` on `table`. `columns` only matters for `stats`;
    /// columns past the configured cap are dropped.
    pub fn generate(&self, table: &str, action: QuickAction, columns: &[&str]) -> String {
        match action {
            QuickAction::Sample => {
                format!("SELECT * FROM {table} LIMIT {}", self.config.sample_limit)
            }
            QuickAction::Count => format!("SELECT COUNT(*) as row_count FROM {table}"),
            QuickAction::Stats if columns.is_empty() => {
                format!("SELECT COUNT(*) as total_rows FROM {table}")
            }
            QuickAction::Stats => {
                if columns.len() > self.config.max_stats_columns {
                    debug!(
                        table,
                        requested = columns.len(),
                        used = self.config.max_stats_columns,
                        "stats column list truncated"
                    );
                }
                let mut select = vec!["COUNT(*) as total_rows".to_string()];
                select.extend(
                    columns
                        .iter()
                        .take(self.config.max_stats_columns)
                        .map(|col| column_stats(col)),
                );
                format!("SELECT {} FROM {table}", select.join(", "))
            }
        }
    }
}

fn column_stats(col: &str) -> String {
    format!("COUNT({col}) as {col}_count, COUNT(DISTINCT {col}) as {col}_distinct")
}

/// [`QuickActionGenerator::generate`] with the default configuration.
pub fn generate_quick_action_query(table: &str, action: QuickAction, columns: &[&str]) -> String {
    QuickActionGenerator::default().generate(table, action, columns)
}
