//! MySQL literal conversions for literal-core types.
//!
//! # Structure
//!
//! - `schema`: MySQL column type table (type name → literal parser)
//!
//! # Example
//!
//! ```rust
//! use literal_core::ColumnTypeTable;
//! use mysql_types::mysql_column_type;
//!
//! let column_type = mysql_column_type("DATETIME").unwrap();
//! let value = column_type.parser().apply("2024-06-15 10:30:00").unwrap();
//! assert_eq!(value.to_string(), "2024-06-15 10:30:00");
//! ```

pub mod schema;

pub use schema::{mysql_column_type, MySQLColumnType};
