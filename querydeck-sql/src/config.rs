//! Quick-action configuration.

use crate::error::{AnalysisError, AnalysisResult};
use serde::{Deserialize, Serialize};

/// Tunables for generated quick-action queries.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Row limit used by the `sample` action.
    pub sample_limit: u64,

    /// Maximum number of columns the `stats` action aggregates over.
    pub max_stats_columns: usize,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            sample_limit: 100,
            max_stats_columns: 10,
        }
    }
}

impl AnalyzerConfig {
    /// Parse a (possibly partial) JSON object; missing fields keep their defaults.
    pub fn from_json(json: &str) -> AnalysisResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would generate degenerate queries.
    pub fn validate(&self) -> AnalysisResult<()> {
        if self.sample_limit == 0 {
            return Err(AnalysisError::Config(
                "sample_limit must be greater than zero".to_string(),
            ));
        }
        if self.max_stats_columns == 0 {
            return Err(AnalysisError::Config(
                "max_stats_columns must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}
