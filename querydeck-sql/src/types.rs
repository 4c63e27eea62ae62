//! Core data types for query analysis.

use crate::analysis::helpers::now_millis;
use crate::error::{AnalysisError, AnalysisResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Best-guess semantic type of a named placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterType {
    Date,
    Number,
    Boolean,
    Text,
}

impl ParameterType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Date => "date",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Text => "text",
        }
    }
}

impl fmt::Display for ParameterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ParameterType {
    type Err = AnalysisError;

    fn from_str(s: &str) -> AnalysisResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "date" => Ok(Self::Date),
            "number" => Ok(Self::Number),
            "boolean" => Ok(Self::Boolean),
            "text" => Ok(Self::Text),
            _ => Err(AnalysisError::UnknownParameterType(s.to_string())),
        }
    }
}

/// Placeholder syntax a parameter was written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaceholderSyntax {
    /// `:name`
    Colon,
    /// `${name}`
    Dollar,
    /// `{{name}}`
    Mustache,
}

impl PlaceholderSyntax {
    /// Render `name` in this syntax.
    pub fn placeholder(&self, name: &str) -> String {
        match self {
            Self::Colon => format!(":{name}"),
            Self::Dollar => format!("${{{name}}}"),
            Self::Mustache => format!("{{{{{name}}}}}"),
        }
    }
}

/// A named placeholder found in query text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryParameter {
    pub name: String,
    pub param_type: ParameterType,
    pub syntax: PlaceholderSyntax,
    /// Literal text as written, e.g. `:id`.
    pub placeholder: String,
}

/// A caller-supplied value for a placeholder.
///
/// Untagged so a JSON map coming from a parameter form deserializes directly:
/// `null`, `true`, `42`, `"O'Brien"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SubstitutionValue {
    Null,
    Boolean(bool),
    Number(serde_json::Number),
    Text(String),
}

/// Statement kind, from the first keyword of a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatementType {
    Select,
    Insert,
    Update,
    Delete,
    CreateTable,
    AlterTable,
    Other,
}

impl StatementType {
    /// True for statements that change data or schema.
    pub fn is_mutation(&self) -> bool {
        matches!(
            self,
            Self::Insert | Self::Update | Self::Delete | Self::CreateTable | Self::AlterTable
        )
    }
}

/// Everything a query editor needs after each edit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryAnalysis {
    pub statement_type: StatementType,
    pub tables: BTreeSet<String>,
    pub parameters: Vec<QueryParameter>,
}

/// Canned exploration query kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuickAction {
    Sample,
    Count,
    Stats,
}

impl QuickAction {
    pub const ALL: [QuickAction; 3] = [Self::Sample, Self::Count, Self::Stats];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sample => "sample",
            Self::Count => "count",
            Self::Stats => "stats",
        }
    }
}

impl fmt::Display for QuickAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QuickAction {
    type Err = AnalysisError;

    fn from_str(s: &str) -> AnalysisResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sample" => Ok(Self::Sample),
            "count" => Ok(Self::Count),
            "stats" => Ok(Self::Stats),
            _ => Err(AnalysisError::UnknownQuickAction(s.to_string())),
        }
    }
}

/// A user-authored SQL query as stored by the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedQuery {
    pub id: String,
    pub name: String,
    pub sql: String,
    pub description: Option<String>,
    #[serde(default)]
    pub is_view: bool,
    pub created_at: i64,
    pub modified_at: i64,
}

impl SavedQuery {
    /// New record with a fresh id and current timestamps.
    pub fn new(name: &str, sql: &str) -> Self {
        let now = now_millis();
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            sql: sql.to_string(),
            description: None,
            is_view: false,
            created_at: now,
            modified_at: now,
        }
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    /// Tables referenced by this query's SQL.
    pub fn tables(&self) -> BTreeSet<String> {
        crate::analysis::extract_table_names(&self.sql)
    }
}
