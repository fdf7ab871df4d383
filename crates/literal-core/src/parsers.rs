//! Literal parsers: one stateless conversion per value kind.
//!
//! Every parser is a plain function from text to a [`Value`] or a
//! [`ParseError`]. None of them touch shared state, with one exception:
//! [`parse_timestamp`] reads the system clock for the literal `now()`, so
//! repeated calls with that literal are not idempotent. Use
//! [`parse_timestamp_with_clock`] where determinism matters.

use crate::clock::{Clock, SystemClock};
use crate::datetime::{parse_free_form, ParsedDateTime};
use crate::error::ParseError;
use crate::values::{Value, ValueKind};
use bigdecimal::BigDecimal;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Literals accepted as `true` (compared lower-cased).
pub const VALID_TRUE_VALUES: [&str; 5] = ["true", "t", "y", "yes", "1"];

/// Literals accepted as `false` (compared lower-cased).
pub const VALID_FALSE_VALUES: [&str; 5] = ["false", "f", "n", "no", "0"];

/// The literal that the timestamp parser reads as "the current instant".
pub const NOW_LITERAL: &str = "now()";

type ParseFn = fn(&str) -> Result<Value, ParseError>;

/// A conversion capability from literal text to one value kind.
///
/// There is exactly one parser per [`ValueKind`], so parsers compare equal
/// when they produce the same kind.
#[derive(Clone, Copy)]
pub struct LiteralParser {
    kind: ValueKind,
    parse: ParseFn,
}

impl LiteralParser {
    const fn new(kind: ValueKind, parse: ParseFn) -> Self {
        Self { kind, parse }
    }

    /// The kind of value this parser produces.
    pub fn kind(&self) -> ValueKind {
        self.kind
    }

    /// Convert `text` into a value.
    pub fn apply(&self, text: &str) -> Result<Value, ParseError> {
        (self.parse)(text)
    }
}

impl PartialEq for LiteralParser {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
    }
}

impl Eq for LiteralParser {}

impl fmt::Debug for LiteralParser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LiteralParser")
            .field("kind", &self.kind)
            .finish()
    }
}

pub const BOOL: LiteralParser = LiteralParser::new(ValueKind::Bool, parse_bool);
pub const INT: LiteralParser = LiteralParser::new(ValueKind::Int, parse_int);
pub const FLOAT: LiteralParser = LiteralParser::new(ValueKind::Float, parse_float);
pub const DECIMAL: LiteralParser = LiteralParser::new(ValueKind::Decimal, parse_decimal);
pub const CHAR: LiteralParser = LiteralParser::new(ValueKind::Char, parse_char);
pub const STRING: LiteralParser = LiteralParser::new(ValueKind::String, parse_str);
pub const DATE: LiteralParser = LiteralParser::new(ValueKind::Date, parse_date);
pub const TIME: LiteralParser = LiteralParser::new(ValueKind::Time, parse_time);
pub const TIME_TZ: LiteralParser =
    LiteralParser::new(ValueKind::TimeTz, parse_time_with_timezone);
pub const TIMESTAMP: LiteralParser = LiteralParser::new(ValueKind::Timestamp, parse_timestamp);
pub const DURATION: LiteralParser = LiteralParser::new(ValueKind::Duration, parse_duration);
pub const UUID: LiteralParser = LiteralParser::new(ValueKind::Uuid, parse_uuid);

/// The parser for a value kind.
pub fn parser_for(kind: ValueKind) -> LiteralParser {
    match kind {
        ValueKind::Bool => BOOL,
        ValueKind::Int => INT,
        ValueKind::Float => FLOAT,
        ValueKind::Decimal => DECIMAL,
        ValueKind::Char => CHAR,
        ValueKind::String => STRING,
        ValueKind::Date => DATE,
        ValueKind::Time => TIME,
        ValueKind::TimeTz => TIME_TZ,
        ValueKind::Timestamp => TIMESTAMP,
        ValueKind::Duration => DURATION,
        ValueKind::Uuid => UUID,
    }
}

/// Parse a boolean word, case-insensitively.
pub fn parse_bool(value: &str) -> Result<Value, ParseError> {
    let lowered = value.to_lowercase();
    if VALID_TRUE_VALUES.contains(&lowered.as_str()) {
        Ok(Value::Bool(true))
    } else if VALID_FALSE_VALUES.contains(&lowered.as_str()) {
        Ok(Value::Bool(false))
    } else {
        Err(ParseError::invalid(
            ValueKind::Bool,
            value,
            "expected one of true/t/y/yes/1 or false/f/n/no/0",
        ))
    }
}

/// Parse a base-10 64-bit integer with an optional sign.
pub fn parse_int(value: &str) -> Result<Value, ParseError> {
    value
        .trim()
        .parse::<i64>()
        .map(Value::Int)
        .map_err(|e| ParseError::invalid(ValueKind::Int, value, e.to_string()))
}

/// Parse a binary double-precision float.
pub fn parse_float(value: &str) -> Result<Value, ParseError> {
    value
        .trim()
        .parse::<f64>()
        .map(Value::Float)
        .map_err(|e| ParseError::invalid(ValueKind::Float, value, e.to_string()))
}

/// Parse an exact decimal, keeping the digits and scale of the input.
pub fn parse_decimal(value: &str) -> Result<Value, ParseError> {
    BigDecimal::from_str(value.trim())
        .map(Value::Decimal)
        .map_err(|e| ParseError::invalid(ValueKind::Decimal, value, e.to_string()))
}

/// Parse a single character.
pub fn parse_char(value: &str) -> Result<Value, ParseError> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(Value::Char(c)),
        (None, _) => Err(ParseError::invalid(
            ValueKind::Char,
            value,
            "expected exactly one character",
        )),
        (Some(_), Some(_)) => Err(ParseError::LengthExceeded {
            kind: ValueKind::Char,
            value: value.to_string(),
            max: 1,
            actual: value.chars().count(),
        }),
    }
}

/// Pass the text through unchanged.
pub fn parse_str(value: &str) -> Result<Value, ParseError> {
    Ok(Value::String(value.to_string()))
}

fn read_temporal(kind: ValueKind, value: &str) -> Result<ParsedDateTime, ParseError> {
    parse_free_form(value)
        .ok_or_else(|| ParseError::invalid(kind, value, "unrecognized date/time format"))
}

/// Parse a date/time literal and keep only the date.
pub fn parse_date(value: &str) -> Result<Value, ParseError> {
    let parsed = read_temporal(ValueKind::Date, value)?;
    parsed
        .date
        .map(Value::Date)
        .ok_or_else(|| ParseError::invalid(ValueKind::Date, value, "literal has no date"))
}

/// Parse a date/time literal and keep only the time of day, dropping any offset.
pub fn parse_time(value: &str) -> Result<Value, ParseError> {
    let parsed = read_temporal(ValueKind::Time, value)?;
    Ok(Value::Time(parsed.time_or_midnight()))
}

/// Parse a date/time literal and keep the time of day and its offset.
pub fn parse_time_with_timezone(value: &str) -> Result<Value, ParseError> {
    let parsed = read_temporal(ValueKind::TimeTz, value)?;
    Ok(Value::TimeTz {
        time: parsed.time_or_midnight(),
        offset: parsed.offset,
    })
}

/// Parse a combined date and time literal.
///
/// The literal `now()` yields the current local time from the system clock;
/// this is the only non-deterministic conversion in the crate.
pub fn parse_timestamp(value: &str) -> Result<Value, ParseError> {
    parse_timestamp_with_clock(value, &SystemClock)
}

/// [`parse_timestamp`] with an explicit clock for the `now()` literal.
pub fn parse_timestamp_with_clock(value: &str, clock: &dyn Clock) -> Result<Value, ParseError> {
    if value == NOW_LITERAL {
        let datetime = clock.now();
        tracing::trace!("Resolved {NOW_LITERAL} to {datetime}");
        return Ok(Value::Timestamp {
            datetime,
            offset: None,
        });
    }

    let parsed = read_temporal(ValueKind::Timestamp, value)?;
    let date = parsed.date.ok_or_else(|| {
        ParseError::invalid(ValueKind::Timestamp, value, "literal has no date")
    })?;
    Ok(Value::Timestamp {
        datetime: date.and_time(parsed.time_or_midnight()),
        offset: parsed.offset,
    })
}

/// Interval literals have no agreed grammar; conversion always fails.
pub fn parse_duration(_value: &str) -> Result<Value, ParseError> {
    Err(ParseError::Unimplemented {
        kind: ValueKind::Duration,
    })
}

/// Parse a UUID in any of its standard textual forms.
pub fn parse_uuid(value: &str) -> Result<Value, ParseError> {
    Uuid::parse_str(value)
        .map(Value::Uuid)
        .map_err(|e| ParseError::invalid(ValueKind::Uuid, value, e.to_string()))
}
