//! Registry lookup: (type name, provider) → literal parser.
//!
//! The per-provider tables are static data owned by the dialect crates, so
//! lookups need no initialization, take no locks and can run from any
//! number of threads. A miss is reported as `None`, never as an error;
//! callers decide whether to fall back to opaque text or reject the value.

use literal_core::{ColumnTypeTable, LiteralParser, ParseError, Provider, Value, ValueKind};
use mysql_types::MySQLColumnType;
use postgresql_types::PostgreSQLColumnType;

/// Column attributes MySQL reports after the type name that do not change
/// how a literal is read.
const IGNORED_ATTRIBUTES: [&str; 3] = ["unsigned", "signed", "zerofill"];

/// Find the parser for `type_name` in `provider`'s type table.
///
/// The name is compared case-insensitively.
///
/// # Example
///
/// ```
/// use literal_core::Provider;
/// use sql_literal::registry::lookup;
///
/// let parser = lookup("NUMERIC", Provider::PostgreSQL).unwrap();
/// assert_eq!(parser.apply("10.005").unwrap().to_string(), "10.005");
///
/// assert!(lookup("uuid", Provider::MySQL).is_none());
/// ```
pub fn lookup(type_name: &str, provider: Provider) -> Option<LiteralParser> {
    let parser = match provider {
        Provider::PostgreSQL => {
            PostgreSQLColumnType::from_type_name(type_name).map(ColumnTypeTable::parser)
        }
        Provider::MySQL => MySQLColumnType::from_type_name(type_name).map(ColumnTypeTable::parser),
    };

    if parser.is_none() {
        tracing::debug!("No literal parser for type '{type_name}' on {provider}");
    }
    parser
}

/// [`lookup`] keyed by the provider's canonical tag (`"PGSQL"`, `"MySQL"`).
///
/// An unrecognized tag yields `None`, like an unrecognized type name.
pub fn lookup_by_tag(type_name: &str, provider_tag: &str) -> Option<LiteralParser> {
    match Provider::from_tag(provider_tag) {
        Some(provider) => lookup(type_name, provider),
        None => {
            tracing::debug!("Unknown provider tag '{provider_tag}'");
            None
        }
    }
}

/// [`lookup`] for a full catalog column type such as `varchar(255)`,
/// `numeric(10, 2)`, `int(11) unsigned` or `timestamp(3) with time zone`.
///
/// Modifiers are discarded, not enforced. `character(10)` and `char(10)`
/// resolve to the single-character parser, so a value longer than one
/// character fails with `LengthExceeded` even when it fits the declared
/// length.
pub fn lookup_column_type(column_type: &str, provider: Provider) -> Option<LiteralParser> {
    lookup(&base_type_name(column_type), provider)
}

/// Reduce a catalog column type to its base type name: parenthesised
/// modifiers and sign/zerofill attributes removed, whitespace collapsed,
/// lower-cased.
pub fn base_type_name(column_type: &str) -> String {
    let mut stripped = String::with_capacity(column_type.len());
    let mut depth = 0usize;
    for c in column_type.chars() {
        match c {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            _ if depth == 0 => stripped.push(c),
            _ => {}
        }
    }

    stripped
        .split_whitespace()
        .map(str::to_lowercase)
        .filter(|token| !IGNORED_ATTRIBUTES.contains(&token.as_str()))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Look up and apply in one step.
///
/// `None` when no parser is registered; otherwise the conversion result.
pub fn convert(
    type_name: &str,
    provider: Provider,
    literal: &str,
) -> Option<Result<Value, ParseError>> {
    lookup(type_name, provider).map(|parser| parser.apply(literal))
}

/// Every type name `provider` recognizes, with the kind it converts to.
pub fn type_names(provider: Provider) -> Vec<(&'static str, ValueKind)> {
    match provider {
        Provider::PostgreSQL => names_of::<PostgreSQLColumnType>(),
        Provider::MySQL => names_of::<MySQLColumnType>(),
    }
}

fn names_of<T: ColumnTypeTable>() -> Vec<(&'static str, ValueKind)> {
    T::type_names()
        .iter()
        .map(|(name, column_type)| (*name, column_type.parser().kind()))
        .collect()
}
