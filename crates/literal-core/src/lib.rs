//! Core types for SQL literal conversion.
//!
//! This crate provides the foundation shared by the dialect type tables:
//!
//! - [`Value`] / [`ValueKind`] - the native values a literal converts into
//! - [`LiteralParser`] - a stateless text → value conversion, one per kind
//! - [`ParseError`] - why a conversion failed
//! - [`Provider`] - the SQL dialect families
//! - [`ColumnTypeTable`] - the trait each dialect's type enum implements
//!
//! # Architecture
//!
//! ```text
//! literal-core (this crate)
//!    │
//!    ├─── postgresql-types   (Postgres-family ColumnTypeTable)
//!    ├─── mysql-types        (MySQL-family ColumnTypeTable)
//!    │
//!    └─── sql-literal        (registry lookup, edit sets, CLI)
//! ```
//!
//! # Example
//!
//! ```rust
//! use literal_core::{parsers, Value};
//!
//! let value = parsers::INT.apply("42").unwrap();
//! assert_eq!(value, Value::Int(42));
//! ```

pub mod clock;
pub mod datetime;
pub mod error;
pub mod parsers;
pub mod provider;
pub mod table;
pub mod values;

// Re-exports for convenience
pub use bigdecimal::BigDecimal;
pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{ParseError, TableError, UnknownProvider};
pub use parsers::LiteralParser;
pub use provider::Provider;
pub use table::ColumnTypeTable;
pub use values::{Value, ValueKind};
