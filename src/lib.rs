//! SQL literal conversion library
//!
//! Turns raw literal text (typed into a data editor, embedded in a generated
//! script, or returned uninterpreted by a driver) into a typed value, using
//! the type table of the database provider the text belongs to.
//!
//! # Features
//!
//! - Registry lookup: (column type name, provider) → literal parser
//! - Dialect-accurate tables: PostgreSQL and MySQL each recognize only their own types
//! - Edit sets: batch conversion of cell edits loaded from YAML
//!
//! # CLI Usage
//!
//! ```bash
//! # Convert one literal
//! sql-literal parse --provider postgresql --type numeric 10.005
//!
//! # List the types a provider recognizes
//! sql-literal types --provider mysql
//!
//! # Convert a batch of cell edits
//! sql-literal apply --file edits.yaml --unknown-types reject
//! ```

use clap::Parser;

pub mod edits;
pub mod registry;

pub use edits::{
    ApplySummary, CellEdit, CellOutcome, CellResult, EditSet, EditSetError, UnknownTypePolicy,
};
pub use literal_core::{LiteralParser, ParseError, Provider, Value, ValueKind};
pub use registry::{convert, lookup, lookup_by_tag, lookup_column_type, type_names};

#[derive(Parser, Clone, Debug)]
pub struct ProviderOpts {
    /// Database provider (pgsql, postgresql, mysql)
    #[arg(long, env = "SQL_LITERAL_PROVIDER")]
    pub provider: Option<Provider>,
}

impl ProviderOpts {
    /// The configured provider, or an error naming how to set one.
    pub fn required(&self) -> anyhow::Result<Provider> {
        self.provider.ok_or_else(|| {
            anyhow::anyhow!("No provider given: pass --provider or set SQL_LITERAL_PROVIDER")
        })
    }
}
