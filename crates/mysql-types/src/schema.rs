//! MySQL column type table.
//!
//! Maps the `DATA_TYPE` names MySQL reports in `information_schema.columns`
//! to the literal parser used for values of that type. MySQL has no native
//! UUID or time-zone-aware time type, and `TINYINT` is an integer here even
//! when declared as `tinyint(1)`.

use literal_core::{parsers, ColumnTypeTable, LiteralParser, Provider};

/// MySQL column types with a literal conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MySQLColumnType {
    Float,
    Double,
    TinyInt,
    SmallInt,
    MediumInt,
    Int,
    BigInt,
    Decimal,
    Numeric,
    Char,
    VarChar,
    Text,
    Date,
    Time,
    Timestamp,
    DateTime,
}

const TYPE_NAMES: &[(&str, MySQLColumnType)] = &[
    ("float", MySQLColumnType::Float),
    ("double", MySQLColumnType::Double),
    ("tinyint", MySQLColumnType::TinyInt),
    ("smallint", MySQLColumnType::SmallInt),
    ("mediumint", MySQLColumnType::MediumInt),
    ("int", MySQLColumnType::Int),
    ("bigint", MySQLColumnType::BigInt),
    ("decimal", MySQLColumnType::Decimal),
    ("numeric", MySQLColumnType::Numeric),
    ("char", MySQLColumnType::Char),
    ("varchar", MySQLColumnType::VarChar),
    ("text", MySQLColumnType::Text),
    ("date", MySQLColumnType::Date),
    ("time", MySQLColumnType::Time),
    ("timestamp", MySQLColumnType::Timestamp),
    ("datetime", MySQLColumnType::DateTime),
    // Synonyms accepted in DDL
    ("double precision", MySQLColumnType::Double),
    ("real", MySQLColumnType::Double),
    ("integer", MySQLColumnType::Int),
    ("dec", MySQLColumnType::Decimal),
    ("tinytext", MySQLColumnType::Text),
    ("mediumtext", MySQLColumnType::Text),
    ("longtext", MySQLColumnType::Text),
];

impl ColumnTypeTable for MySQLColumnType {
    const PROVIDER: Provider = Provider::MySQL;

    fn type_names() -> &'static [(&'static str, Self)] {
        TYPE_NAMES
    }

    fn canonical_name(self) -> &'static str {
        match self {
            Self::Float => "float",
            Self::Double => "double",
            Self::TinyInt => "tinyint",
            Self::SmallInt => "smallint",
            Self::MediumInt => "mediumint",
            Self::Int => "int",
            Self::BigInt => "bigint",
            Self::Decimal => "decimal",
            Self::Numeric => "numeric",
            Self::Char => "char",
            Self::VarChar => "varchar",
            Self::Text => "text",
            Self::Date => "date",
            Self::Time => "time",
            Self::Timestamp => "timestamp",
            Self::DateTime => "datetime",
        }
    }

    fn parser(self) -> LiteralParser {
        match self {
            Self::Float | Self::Double => parsers::FLOAT,
            Self::TinyInt | Self::SmallInt | Self::MediumInt | Self::Int | Self::BigInt => {
                parsers::INT
            }
            Self::Decimal | Self::Numeric => parsers::DECIMAL,
            Self::Char => parsers::CHAR,
            Self::VarChar | Self::Text => parsers::STRING,
            Self::Date => parsers::DATE,
            Self::Time => parsers::TIME,
            Self::Timestamp | Self::DateTime => parsers::TIMESTAMP,
        }
    }
}

/// Resolve a MySQL type name (any case) to its column type.
///
/// # Example
///
/// ```
/// use mysql_types::{mysql_column_type, MySQLColumnType};
///
/// assert_eq!(mysql_column_type("MEDIUMINT"), Some(MySQLColumnType::MediumInt));
/// assert_eq!(mysql_column_type("uuid"), None);
/// ```
pub fn mysql_column_type(data_type: &str) -> Option<MySQLColumnType> {
    MySQLColumnType::from_type_name(data_type)
}
