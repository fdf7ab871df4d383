//! PostgreSQL column type table.
//!
//! Maps the type names PostgreSQL reports (`information_schema.columns`
//! spellings plus the short `pg_type` aliases) to the literal parser used
//! for values of that type.

use literal_core::{parsers, ColumnTypeTable, LiteralParser, Provider};

/// PostgreSQL column types with a literal conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PostgreSQLColumnType {
    Boolean,
    Real,
    DoublePrecision,
    SmallInt,
    Integer,
    BigInt,
    Numeric,
    /// Fixed-length `character`; edited one character at a time
    Character,
    CharacterVarying,
    Text,
    Date,
    Time,
    TimeWithTimeZone,
    Timestamp,
    TimestampWithTimeZone,
    Interval,
    Uuid,
    /// Internal identifier type used in the system catalogs
    Name,
}

const TYPE_NAMES: &[(&str, PostgreSQLColumnType)] = &[
    // Canonical information_schema names
    ("boolean", PostgreSQLColumnType::Boolean),
    ("real", PostgreSQLColumnType::Real),
    ("double precision", PostgreSQLColumnType::DoublePrecision),
    ("smallint", PostgreSQLColumnType::SmallInt),
    ("integer", PostgreSQLColumnType::Integer),
    ("bigint", PostgreSQLColumnType::BigInt),
    ("numeric", PostgreSQLColumnType::Numeric),
    ("character", PostgreSQLColumnType::Character),
    ("character varying", PostgreSQLColumnType::CharacterVarying),
    ("text", PostgreSQLColumnType::Text),
    ("date", PostgreSQLColumnType::Date),
    ("time without time zone", PostgreSQLColumnType::Time),
    ("time with time zone", PostgreSQLColumnType::TimeWithTimeZone),
    ("timestamp without time zone", PostgreSQLColumnType::Timestamp),
    ("timestamp with time zone", PostgreSQLColumnType::TimestampWithTimeZone),
    ("interval", PostgreSQLColumnType::Interval),
    ("uuid", PostgreSQLColumnType::Uuid),
    ("name", PostgreSQLColumnType::Name),
    // Aliases
    ("bool", PostgreSQLColumnType::Boolean),
    ("float4", PostgreSQLColumnType::Real),
    ("float8", PostgreSQLColumnType::DoublePrecision),
    ("int2", PostgreSQLColumnType::SmallInt),
    ("int", PostgreSQLColumnType::Integer),
    ("int4", PostgreSQLColumnType::Integer),
    ("int8", PostgreSQLColumnType::BigInt),
    ("decimal", PostgreSQLColumnType::Numeric),
    ("char", PostgreSQLColumnType::Character),
    ("bpchar", PostgreSQLColumnType::Character),
    ("varchar", PostgreSQLColumnType::CharacterVarying),
    ("time", PostgreSQLColumnType::Time),
    ("timetz", PostgreSQLColumnType::TimeWithTimeZone),
    ("timestamp", PostgreSQLColumnType::Timestamp),
    ("timestamptz", PostgreSQLColumnType::TimestampWithTimeZone),
];

impl ColumnTypeTable for PostgreSQLColumnType {
    const PROVIDER: Provider = Provider::PostgreSQL;

    fn type_names() -> &'static [(&'static str, Self)] {
        TYPE_NAMES
    }

    fn canonical_name(self) -> &'static str {
        match self {
            Self::Boolean => "boolean",
            Self::Real => "real",
            Self::DoublePrecision => "double precision",
            Self::SmallInt => "smallint",
            Self::Integer => "integer",
            Self::BigInt => "bigint",
            Self::Numeric => "numeric",
            Self::Character => "character",
            Self::CharacterVarying => "character varying",
            Self::Text => "text",
            Self::Date => "date",
            Self::Time => "time without time zone",
            Self::TimeWithTimeZone => "time with time zone",
            Self::Timestamp => "timestamp without time zone",
            Self::TimestampWithTimeZone => "timestamp with time zone",
            Self::Interval => "interval",
            Self::Uuid => "uuid",
            Self::Name => "name",
        }
    }

    fn parser(self) -> LiteralParser {
        match self {
            Self::Boolean => parsers::BOOL,
            Self::Real | Self::DoublePrecision => parsers::FLOAT,
            Self::SmallInt | Self::Integer | Self::BigInt => parsers::INT,
            Self::Numeric => parsers::DECIMAL,
            Self::Character => parsers::CHAR,
            Self::CharacterVarying | Self::Text | Self::Name => parsers::STRING,
            Self::Date => parsers::DATE,
            Self::Time => parsers::TIME,
            Self::TimeWithTimeZone => parsers::TIME_TZ,
            Self::Timestamp | Self::TimestampWithTimeZone => parsers::TIMESTAMP,
            Self::Interval => parsers::DURATION,
            Self::Uuid => parsers::UUID,
        }
    }
}

/// Resolve a PostgreSQL type name (any case) to its column type.
///
/// # Example
///
/// ```
/// use postgresql_types::{postgresql_column_type, PostgreSQLColumnType};
///
/// assert_eq!(
///     postgresql_column_type("TIMESTAMPTZ"),
///     Some(PostgreSQLColumnType::TimestampWithTimeZone)
/// );
/// assert_eq!(postgresql_column_type("jsonb"), None);
/// ```
pub fn postgresql_column_type(data_type: &str) -> Option<PostgreSQLColumnType> {
    PostgreSQLColumnType::from_type_name(data_type)
}
