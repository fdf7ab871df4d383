//! Value representations produced by the literal parsers.
//!
//! This module defines the native value model that a raw textual literal is
//! converted into, and the `ValueKind` tag that names each member of it.

use bigdecimal::BigDecimal;
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};
use serde::{Serialize, Serializer};
use std::fmt;
use uuid::Uuid;

/// The kind of value a parser produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Bool,
    Int,
    Float,
    Decimal,
    Char,
    String,
    Date,
    Time,
    TimeTz,
    Timestamp,
    Duration,
    Uuid,
}

impl ValueKind {
    /// Every value kind, in declaration order.
    pub const ALL: [ValueKind; 12] = [
        Self::Bool,
        Self::Int,
        Self::Float,
        Self::Decimal,
        Self::Char,
        Self::String,
        Self::Date,
        Self::Time,
        Self::TimeTz,
        Self::Timestamp,
        Self::Duration,
        Self::Uuid,
    ];

    /// Stable lowercase name of the kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::Int => "int",
            Self::Float => "float",
            Self::Decimal => "decimal",
            Self::Char => "char",
            Self::String => "string",
            Self::Date => "date",
            Self::Time => "time",
            Self::TimeTz => "timetz",
            Self::Timestamp => "timestamp",
            Self::Duration => "duration",
            Self::Uuid => "uuid",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ValueKind {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

/// A native typed value converted from a textual literal.
///
/// Temporal values that may or may not carry a UTC offset keep it as an
/// `Option`: `None` means the literal was naive, not that it was UTC.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Boolean value
    Bool(bool),

    /// 64-bit signed integer
    Int(i64),

    /// 64-bit floating point
    Float(f64),

    /// Arbitrary-precision decimal, scale preserved from the source text
    Decimal(BigDecimal),

    /// Single character
    Char(char),

    /// String value
    String(String),

    /// Calendar date
    Date(NaiveDate),

    /// Time of day without offset
    Time(NaiveTime),

    /// Time of day with its UTC offset, when the literal had one
    TimeTz {
        time: NaiveTime,
        offset: Option<FixedOffset>,
    },

    /// Combined date and time with its UTC offset, when the literal had one
    Timestamp {
        datetime: NaiveDateTime,
        offset: Option<FixedOffset>,
    },

    /// Time duration
    Duration(TimeDelta),

    /// UUID value
    Uuid(Uuid),
}

impl Value {
    /// The kind of this value.
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Bool(_) => ValueKind::Bool,
            Self::Int(_) => ValueKind::Int,
            Self::Float(_) => ValueKind::Float,
            Self::Decimal(_) => ValueKind::Decimal,
            Self::Char(_) => ValueKind::Char,
            Self::String(_) => ValueKind::String,
            Self::Date(_) => ValueKind::Date,
            Self::Time(_) => ValueKind::Time,
            Self::TimeTz { .. } => ValueKind::TimeTz,
            Self::Timestamp { .. } => ValueKind::Timestamp,
            Self::Duration(_) => ValueKind::Duration,
            Self::Uuid(_) => ValueKind::Uuid,
        }
    }

    /// Try to get this value as a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to get this value as an i64.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Try to get this value as an f64.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Try to get this value as a decimal.
    pub fn as_decimal(&self) -> Option<&BigDecimal> {
        match self {
            Self::Decimal(d) => Some(d),
            _ => None,
        }
    }

    /// Try to get this value as a single character.
    pub fn as_char(&self) -> Option<char> {
        match self {
            Self::Char(c) => Some(*c),
            _ => None,
        }
    }

    /// Try to get this value as a string reference.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get this value as a date.
    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            Self::Date(d) => Some(*d),
            _ => None,
        }
    }

    /// Try to get the time of day, from either time kind.
    pub fn as_time(&self) -> Option<NaiveTime> {
        match self {
            Self::Time(t) => Some(*t),
            Self::TimeTz { time, .. } => Some(*time),
            _ => None,
        }
    }

    /// Try to get the UTC offset carried by a time or timestamp.
    pub fn offset(&self) -> Option<FixedOffset> {
        match self {
            Self::TimeTz { offset, .. } | Self::Timestamp { offset, .. } => *offset,
            _ => None,
        }
    }

    /// Try to get the local date and time of a timestamp.
    pub fn as_datetime(&self) -> Option<NaiveDateTime> {
        match self {
            Self::Timestamp { datetime, .. } => Some(*datetime),
            _ => None,
        }
    }

    /// Try to get a timestamp as an offset-aware instant.
    ///
    /// Returns `None` for naive timestamps.
    pub fn as_datetime_with_offset(&self) -> Option<DateTime<FixedOffset>> {
        match self {
            Self::Timestamp {
                datetime,
                offset: Some(offset),
            } => datetime.and_local_timezone(*offset).single(),
            _ => None,
        }
    }

    /// Try to get this value as a UUID.
    pub fn as_uuid(&self) -> Option<&Uuid> {
        match self {
            Self::Uuid(u) => Some(u),
            _ => None,
        }
    }
}

fn write_offset(f: &mut fmt::Formatter<'_>, offset: &Option<FixedOffset>) -> fmt::Result {
    match offset {
        // FixedOffset displays as +HH:MM
        Some(offset) => write!(f, "{offset}"),
        None => Ok(()),
    }
}

/// Plain positional notation at exactly the stored scale, so `0.000` and
/// `1.50` keep their trailing zeros.
fn write_decimal(f: &mut fmt::Formatter<'_>, decimal: &BigDecimal) -> fmt::Result {
    let (digits, scale) = decimal.as_bigint_and_exponent();
    let digits = digits.to_string();
    let (sign, magnitude) = match digits.strip_prefix('-') {
        Some(magnitude) => ("-", magnitude),
        None => ("", digits.as_str()),
    };
    f.write_str(sign)?;

    if scale <= 0 {
        f.write_str(magnitude)?;
        return f.write_str(&"0".repeat(scale.unsigned_abs() as usize));
    }

    let scale = scale as usize;
    if magnitude.len() > scale {
        let (whole, fraction) = magnitude.split_at(magnitude.len() - scale);
        write!(f, "{whole}.{fraction}")
    } else {
        write!(f, "0.{}{magnitude}", "0".repeat(scale - magnitude.len()))
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Decimal(d) => write_decimal(f, d),
            Self::Char(c) => write!(f, "{c}"),
            Self::String(s) => f.write_str(s),
            Self::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            Self::Time(t) => write!(f, "{}", t.format("%H:%M:%S%.f")),
            Self::TimeTz { time, offset } => {
                write!(f, "{}", time.format("%H:%M:%S%.f"))?;
                write_offset(f, offset)
            }
            Self::Timestamp { datetime, offset } => {
                write!(f, "{}", datetime.format("%Y-%m-%d %H:%M:%S%.f"))?;
                write_offset(f, offset)
            }
            Self::Duration(d) => write!(f, "{d}"),
            Self::Uuid(u) => write!(f, "{}", u.hyphenated()),
        }
    }
}

// Serialized as {"kind": "...", "value": ...}. Bool, int and finite floats
// stay native JSON; everything else uses the Display text so no precision
// or offset information is lost.
impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("kind", &self.kind())?;
        match self {
            Self::Bool(b) => map.serialize_entry("value", b)?,
            Self::Int(i) => map.serialize_entry("value", i)?,
            Self::Float(v) if v.is_finite() => map.serialize_entry("value", v)?,
            other => map.serialize_entry("value", &other.to_string())?,
        }
        map.end()
    }
}
