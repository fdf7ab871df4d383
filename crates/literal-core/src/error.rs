//! Error types for literal conversion.

use crate::provider::Provider;
use crate::values::ValueKind;
use thiserror::Error;

/// Errors that can occur while converting a literal into a [`Value`](crate::Value).
///
/// A missing parser for a (provider, type) pair is not an error; lookups
/// report it as `None`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The text does not satisfy the grammar of the target kind
    #[error("Invalid {kind} literal '{value}': {reason}")]
    InvalidLiteral {
        kind: ValueKind,
        value: String,
        reason: String,
    },

    /// The text is longer than the target kind allows
    #[error("Literal '{value}' is too long for {kind}: {actual} characters, at most {max} allowed")]
    LengthExceeded {
        kind: ValueKind,
        value: String,
        max: usize,
        actual: usize,
    },

    /// The kind is recognized but has no working conversion
    #[error("Conversion to {kind} is not implemented")]
    Unimplemented { kind: ValueKind },
}

impl ParseError {
    pub(crate) fn invalid(kind: ValueKind, value: &str, reason: impl Into<String>) -> Self {
        Self::InvalidLiteral {
            kind,
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    /// The kind the failed conversion was targeting.
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::InvalidLiteral { kind, .. }
            | Self::LengthExceeded { kind, .. }
            | Self::Unimplemented { kind } => *kind,
        }
    }

    /// Whether this failure means "not supported" rather than "bad value".
    pub fn is_unimplemented(&self) -> bool {
        matches!(self, Self::Unimplemented { .. })
    }
}

/// A provider name that does not match any supported dialect.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown provider: '{0}' (expected one of: pgsql, postgresql, mysql)")]
pub struct UnknownProvider(pub String);

/// A malformed column type name table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    #[error("{provider}: type name '{name}' is not lower-case")]
    NotLowerCase {
        provider: Provider,
        name: &'static str,
    },

    #[error("{provider}: duplicate type name '{name}'")]
    DuplicateName {
        provider: Provider,
        name: &'static str,
    },

    #[error("{provider}: canonical name '{name}' does not resolve to its own type")]
    UnresolvedCanonicalName {
        provider: Provider,
        name: &'static str,
    },
}
