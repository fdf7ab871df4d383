//! The per-provider column type table abstraction.

use crate::error::TableError;
use crate::parsers::LiteralParser;
use crate::provider::Provider;

/// A dialect's closed set of column types and the parser each one uses.
///
/// Implementors are enums whose `parser` is an exhaustive `match`, so a
/// variant without a parser does not compile. The name table is static data
/// and is never mutated.
pub trait ColumnTypeTable: Copy + PartialEq + 'static {
    /// The provider this table belongs to.
    const PROVIDER: Provider;

    /// Every recognized type name (lower-case) and the variant it denotes.
    ///
    /// Canonical names come first; a variant may also appear under aliases.
    fn type_names() -> &'static [(&'static str, Self)];

    /// The canonical type name of this variant.
    fn canonical_name(self) -> &'static str;

    /// The parser responsible for this column type.
    fn parser(self) -> LiteralParser;

    /// Resolve a type name, ignoring ASCII case.
    fn from_type_name(name: &str) -> Option<Self> {
        Self::type_names()
            .iter()
            .find(|(known, _)| known.eq_ignore_ascii_case(name))
            .map(|(_, column_type)| *column_type)
    }

    /// Every recognized name, canonical names and aliases alike.
    fn all_type_names() -> Vec<&'static str> {
        Self::type_names().iter().map(|(name, _)| *name).collect()
    }
}

/// Check that a name table is well formed: lower-case, unique names, and
/// every canonical name resolving back to its own variant.
pub fn validate_table<T: ColumnTypeTable>() -> Result<(), TableError> {
    let provider = T::PROVIDER;
    let names = T::type_names();
    for (i, &(name, column_type)) in names.iter().enumerate() {
        if name != name.to_lowercase() {
            return Err(TableError::NotLowerCase { provider, name });
        }
        if names[..i].iter().any(|(earlier, _)| *earlier == name) {
            return Err(TableError::DuplicateName { provider, name });
        }
        let canonical = column_type.canonical_name();
        if T::from_type_name(canonical) != Some(column_type) {
            return Err(TableError::UnresolvedCanonicalName {
                provider,
                name: canonical,
            });
        }
    }
    Ok(())
}
