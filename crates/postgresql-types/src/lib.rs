//! PostgreSQL literal conversions for literal-core types.
//!
//! This crate declares every PostgreSQL type name that has a literal
//! conversion and the parser responsible for it.
//!
//! # Modules
//!
//! - [`schema`] - PostgreSQL column type table
//!
//! # Example
//!
//! ```
//! use literal_core::{ColumnTypeTable, Value};
//! use postgresql_types::PostgreSQLColumnType;
//!
//! let column_type = PostgreSQLColumnType::from_type_name("Integer").unwrap();
//! assert_eq!(column_type.parser().apply("42").unwrap(), Value::Int(42));
//! ```

pub mod schema;

pub use schema::{postgresql_column_type, PostgreSQLColumnType};
