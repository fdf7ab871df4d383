//! Cell edit sets: batches of literal edits converted per column type.
//!
//! An edit set is what a data-editing session hands over before its values
//! are bound into a statement: a column, the column's catalog type, and the
//! text the user typed.
//!
//! # YAML Format
//!
//! ```yaml
//! provider: postgresql   # optional when given on the command line
//! cells:
//!   - column: id
//!     type: uuid
//!     value: 550e8400-e29b-41d4-a716-446655440000
//!   - column: price
//!     type: numeric(10, 2)
//!     value: "10.50"     # quote decimals to keep trailing zeros
//! ```

use crate::registry::lookup_column_type;
use clap::ValueEnum;
use literal_core::{ParseError, Provider, Value};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fs;
use std::path::Path;

/// Error type for edit set operations.
#[derive(Debug, thiserror::Error)]
pub enum EditSetError {
    /// Error reading the edit file
    #[error("Failed to read edit file: {0}")]
    IoError(#[from] std::io::Error),

    /// Error parsing YAML
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// Neither the file nor the caller named a provider
    #[error("No provider given: set `provider` in the edit file or pass --provider")]
    MissingProvider,
}

/// What to do with a cell whose column type has no registered parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum UnknownTypePolicy {
    /// Keep the literal as opaque text
    #[default]
    #[value(name = "text")]
    AsText,
    /// Report the cell as unsupported
    Reject,
}

/// A single cell edit.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CellEdit {
    /// Column name
    pub column: String,

    /// Catalog column type, e.g. `varchar(255)`
    #[serde(rename = "type")]
    pub type_name: String,

    /// Literal text as typed by the user
    #[serde(deserialize_with = "scalar_as_string")]
    pub value: String,
}

impl CellEdit {
    pub fn new(
        column: impl Into<String>,
        type_name: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            column: column.into(),
            type_name: type_name.into(),
            value: value.into(),
        }
    }
}

/// YAML scalars (strings, numbers, booleans) are all taken as literal text.
fn scalar_as_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_yaml::Value::deserialize(deserializer)? {
        serde_yaml::Value::String(s) => Ok(s),
        serde_yaml::Value::Number(n) => Ok(n.to_string()),
        serde_yaml::Value::Bool(b) => Ok(b.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected a scalar literal, got {other:?}"
        ))),
    }
}

/// A batch of cell edits for one provider.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EditSet {
    /// Provider named in the file, if any
    #[serde(default)]
    pub provider: Option<Provider>,

    /// Cells in the order they were edited
    pub cells: Vec<CellEdit>,
}

impl EditSet {
    /// Create an edit set from cells.
    pub fn new(provider: Option<Provider>, cells: Vec<CellEdit>) -> Self {
        Self { provider, cells }
    }

    /// Load an edit set from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, EditSetError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse an edit set from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, EditSetError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Pick the provider: an explicit one wins over the file's.
    pub fn resolve_provider(&self, explicit: Option<Provider>) -> Result<Provider, EditSetError> {
        explicit
            .or(self.provider)
            .ok_or(EditSetError::MissingProvider)
    }

    /// Convert every cell, in order.
    ///
    /// Cells are independent: a failure in one does not stop the others.
    pub fn apply(&self, provider: Provider, policy: UnknownTypePolicy) -> Vec<CellResult> {
        self.cells
            .iter()
            .map(|cell| {
                let outcome = match lookup_column_type(&cell.type_name, provider) {
                    Some(parser) => match parser.apply(&cell.value) {
                        Ok(value) => CellOutcome::Converted(value),
                        Err(e) => {
                            tracing::warn!("Column '{}': {e}", cell.column);
                            CellOutcome::Failed(e)
                        }
                    },
                    None => match policy {
                        UnknownTypePolicy::AsText => CellOutcome::Passthrough(cell.value.clone()),
                        UnknownTypePolicy::Reject => {
                            tracing::warn!(
                                "Column '{}': no conversion for type '{}' on {provider}",
                                cell.column,
                                cell.type_name
                            );
                            CellOutcome::Unsupported
                        }
                    },
                };
                CellResult {
                    column: cell.column.clone(),
                    type_name: cell.type_name.clone(),
                    outcome,
                }
            })
            .collect()
    }
}

/// What happened to one cell.
#[derive(Debug, Clone, PartialEq)]
pub enum CellOutcome {
    /// Converted to a typed value
    Converted(Value),
    /// Unknown type, kept as text
    Passthrough(String),
    /// The literal did not convert
    Failed(ParseError),
    /// Unknown type, rejected
    Unsupported,
}

impl CellOutcome {
    fn status(&self) -> &'static str {
        match self {
            Self::Converted(_) => "converted",
            Self::Passthrough(_) => "passthrough",
            Self::Failed(_) => "failed",
            Self::Unsupported => "unsupported",
        }
    }
}

/// The outcome of one cell edit.
#[derive(Debug, Clone, PartialEq)]
pub struct CellResult {
    pub column: String,
    pub type_name: String,
    pub outcome: CellOutcome,
}

impl Serialize for CellResult {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("column", &self.column)?;
        map.serialize_entry("type", &self.type_name)?;
        map.serialize_entry("status", self.outcome.status())?;
        match &self.outcome {
            CellOutcome::Converted(value) => map.serialize_entry("value", value)?,
            CellOutcome::Passthrough(text) => map.serialize_entry("value", text)?,
            CellOutcome::Failed(e) => map.serialize_entry("error", &e.to_string())?,
            CellOutcome::Unsupported => {}
        }
        map.end()
    }
}

/// Counts of cell outcomes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ApplySummary {
    pub converted: usize,
    pub passthrough: usize,
    pub failed: usize,
    pub unsupported: usize,
}

impl ApplySummary {
    /// Tally a batch of results.
    pub fn from_results(results: &[CellResult]) -> Self {
        results
            .iter()
            .fold(Self::default(), |mut summary, result| {
                match result.outcome {
                    CellOutcome::Converted(_) => summary.converted += 1,
                    CellOutcome::Passthrough(_) => summary.passthrough += 1,
                    CellOutcome::Failed(_) => summary.failed += 1,
                    CellOutcome::Unsupported => summary.unsupported += 1,
                }
                summary
            })
    }

    /// True when no cell failed or was rejected.
    pub fn is_clean(&self) -> bool {
        self.failed == 0 && self.unsupported == 0
    }
}
