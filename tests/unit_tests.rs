use chrono::NaiveDate;
use literal_core::parsers::{self, parse_timestamp_with_clock};
use literal_core::{BigDecimal, FixedClock, ParseError, ValueKind};
use sql_literal::{lookup, lookup_by_tag, type_names, Provider, ProviderOpts, Value};
use std::str::FromStr;

#[test]
fn test_provider_opts_creation() {
    let opts = ProviderOpts {
        provider: Some(Provider::MySQL),
    };
    assert_eq!(opts.required().unwrap(), Provider::MySQL);

    let opts = ProviderOpts { provider: None };
    assert!(opts.required().is_err());
}

#[test]
fn test_lookup_is_case_insensitive_for_every_table_entry() {
    for provider in Provider::ALL {
        for (name, kind) in type_names(provider) {
            let exact = lookup(name, provider);
            assert_eq!(exact.map(|p| p.kind()), Some(kind), "{provider}: {name}");
            assert_eq!(lookup(&name.to_uppercase(), provider), exact, "{provider}: {name}");
            assert_eq!(lookup(&name.to_lowercase(), provider), exact, "{provider}: {name}");
        }
    }
}

#[test]
fn test_lookup_absent_is_not_an_error() {
    assert!(lookup("notarealtype", Provider::PostgreSQL).is_none());
    assert!(lookup_by_tag("bool", "UnknownProvider").is_none());
    assert!(lookup("uuid", Provider::MySQL).is_none());
}

#[test]
fn test_dialect_differences() {
    // Postgres-only
    for name in ["uuid", "time with time zone", "interval", "name", "boolean"] {
        assert!(lookup(name, Provider::PostgreSQL).is_some(), "{name}");
        assert!(lookup(name, Provider::MySQL).is_none(), "{name}");
    }
    // MySQL-only
    for name in ["tinyint", "mediumint", "datetime"] {
        assert!(lookup(name, Provider::MySQL).is_some(), "{name}");
        assert!(lookup(name, Provider::PostgreSQL).is_none(), "{name}");
    }
}

#[test]
fn test_boolean_literals() {
    let parser = lookup("boolean", Provider::PostgreSQL).unwrap();
    assert_eq!(parser.apply("Yes"), Ok(Value::Bool(true)));
    assert_eq!(parser.apply("NO"), Ok(Value::Bool(false)));
    assert!(matches!(
        parser.apply("maybe"),
        Err(ParseError::InvalidLiteral { .. })
    ));
}

#[test]
fn test_integer_literals() {
    let parser = lookup("bigint", Provider::MySQL).unwrap();
    assert_eq!(parser.apply("42"), Ok(Value::Int(42)));
    assert!(matches!(
        parser.apply("4.2"),
        Err(ParseError::InvalidLiteral { .. })
    ));
}

#[test]
fn test_decimal_literal_is_exact() {
    let parser = lookup("numeric", Provider::PostgreSQL).unwrap();
    let value = parser.apply("10.005").unwrap();
    assert_eq!(
        value.as_decimal(),
        Some(&BigDecimal::from_str("10.005").unwrap())
    );
    assert_eq!(value.to_string(), "10.005");
}

#[test]
fn test_character_literals() {
    let parser = lookup("character", Provider::PostgreSQL).unwrap();
    assert_eq!(parser.apply("a"), Ok(Value::Char('a')));
    assert!(matches!(
        parser.apply("ab"),
        Err(ParseError::LengthExceeded { max: 1, actual: 2, .. })
    ));
}

#[test]
fn test_uuid_literals() {
    let parser = lookup("uuid", Provider::PostgreSQL).unwrap();
    let value = parser
        .apply("550E8400-E29B-41D4-A716-446655440000")
        .unwrap();
    assert_eq!(value.to_string(), "550e8400-e29b-41d4-a716-446655440000");
    assert!(matches!(
        parser.apply("not-a-uuid"),
        Err(ParseError::InvalidLiteral { .. })
    ));
}

#[test]
fn test_interval_is_unimplemented() {
    let parser = lookup("interval", Provider::PostgreSQL).unwrap();
    for input in ["", "1 day", "anything"] {
        assert_eq!(
            parser.apply(input),
            Err(ParseError::Unimplemented {
                kind: ValueKind::Duration
            })
        );
    }
}

#[test]
fn test_temporal_literals_per_dialect() {
    let time = lookup("time", Provider::MySQL).unwrap();
    let value = time.apply("14:30:45+02:00").unwrap();
    assert_eq!(value.kind(), ValueKind::Time);
    assert_eq!(value.offset(), None);

    let timetz = lookup("timetz", Provider::PostgreSQL).unwrap();
    let value = timetz.apply("14:30:45+02:00").unwrap();
    assert_eq!(value.to_string(), "14:30:45+02:00");

    let datetime = lookup("DATETIME", Provider::MySQL).unwrap();
    let value = datetime.apply("2024-06-15 10:30:00").unwrap();
    assert_eq!(value.to_string(), "2024-06-15 10:30:00");
}

#[test]
fn test_locale_tolerant_date_literals() {
    let expected = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
    for provider in Provider::ALL {
        let parser = lookup("date", provider).unwrap();
        for input in [
            "15/06/2024",
            "15.06.2024",
            "Saturday, June 15, 2024",
            "Jun 15 2024 10:30AM",
        ] {
            let value = parser
                .apply(input)
                .unwrap_or_else(|e| panic!("{provider}: {input}: {e}"));
            assert_eq!(value, Value::Date(expected), "{provider}: {input}");
        }
    }

    let timetz = lookup("time with time zone", Provider::PostgreSQL).unwrap();
    assert_eq!(
        timetz.apply("2:30 PM +02:00").unwrap().to_string(),
        "14:30:00+02:00"
    );

    let timestamp = lookup("datetime", Provider::MySQL).unwrap();
    assert_eq!(
        timestamp.apply("Jun 15 2024 10:30AM").unwrap().to_string(),
        "2024-06-15 10:30:00"
    );
}

#[test]
fn test_zero_decimal_keeps_scale() {
    let parser = lookup("decimal", Provider::MySQL).unwrap();
    assert_eq!(parser.apply("0.000").unwrap().to_string(), "0.000");
    assert_eq!(parser.apply("0.00").unwrap().to_string(), "0.00");
}

#[test]
fn test_now_literal_with_injected_clock() {
    let instant = NaiveDate::from_ymd_opt(2024, 2, 29)
        .unwrap()
        .and_hms_opt(23, 59, 59)
        .unwrap();
    let clock = FixedClock(instant);

    let first = parse_timestamp_with_clock("now()", &clock).unwrap();
    let second = parse_timestamp_with_clock("now()", &clock).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.as_datetime(), Some(instant));

    // The registry's parser reads the system clock
    let parser = lookup("timestamp", Provider::PostgreSQL).unwrap();
    assert_eq!(parser, parsers::TIMESTAMP);
    assert!(parser.apply("now()").unwrap().as_datetime().is_some());
}

#[test]
fn test_concurrent_lookups() {
    let handles: Vec<_> = (0..8)
        .map(|i| {
            std::thread::spawn(move || {
                let provider = Provider::ALL[i % 2];
                (0..100)
                    .filter_map(|n| lookup("integer", provider).map(|p| p.apply(&n.to_string())))
                    .filter(|result| result.is_ok())
                    .count()
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), 100);
    }
}
