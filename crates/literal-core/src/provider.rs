//! Database provider (SQL dialect family) identifiers.

use crate::error::UnknownProvider;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Canonical tag for the Postgres-compatible provider.
pub const PG_PROVIDER_TAG: &str = "PGSQL";

/// Canonical tag for the MySQL-compatible provider.
pub const MYSQL_PROVIDER_TAG: &str = "MySQL";

/// SQL dialect family whose type names and rules apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum Provider {
    /// PostgreSQL and compatible engines
    PostgreSQL,
    /// MySQL and compatible engines
    MySQL,
}

impl Provider {
    /// Every supported provider.
    pub const ALL: [Provider; 2] = [Self::PostgreSQL, Self::MySQL];

    /// The canonical tag shared with the rest of the tooling.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::PostgreSQL => PG_PROVIDER_TAG,
            Self::MySQL => MYSQL_PROVIDER_TAG,
        }
    }

    /// Resolve a canonical tag. Matching is exact; anything else is `None`.
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.tag() == tag)
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PostgreSQL => write!(f, "PostgreSQL"),
            Self::MySQL => write!(f, "MySQL"),
        }
    }
}

impl FromStr for Provider {
    type Err = UnknownProvider;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pgsql" | "pg" | "postgres" | "postgresql" => Ok(Self::PostgreSQL),
            "mysql" => Ok(Self::MySQL),
            _ => Err(UnknownProvider(s.to_string())),
        }
    }
}

impl TryFrom<String> for Provider {
    type Error = UnknownProvider;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
