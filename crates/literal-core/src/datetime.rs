//! Free-form date/time literal reading.
//!
//! Users type dates and times in many shapes. This module accepts the common
//! locale-independent spellings (ISO 8601 / RFC 3339, RFC 2822, slash and
//! US month-first dates, month names, 12-hour clocks) and reports which
//! components were present so each parser can keep only what it needs.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Weekday};

/// Combined date and time layouts, tried in order.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%d %I:%M:%S%.f %p",
    "%Y-%m-%d %I:%M %p",
    "%Y-%m-%d %I:%M%p",
    "%Y/%m/%d %H:%M:%S%.f",
    "%Y/%m/%d %H:%M",
    "%m/%d/%Y %H:%M:%S%.f",
    "%m/%d/%Y %H:%M",
    "%m/%d/%Y %I:%M:%S%.f %p",
    "%m/%d/%Y %I:%M %p",
    "%m/%d/%Y %I:%M%p",
    "%d/%m/%Y %H:%M:%S%.f",
    "%d/%m/%Y %H:%M",
    "%d.%m.%Y %H:%M:%S%.f",
    "%d.%m.%Y %H:%M",
    "%B %d, %Y %H:%M:%S%.f",
    "%B %d, %Y %H:%M",
    "%B %d, %Y %I:%M:%S %p",
    "%B %d, %Y %I:%M %p",
    "%B %d, %Y %I:%M%p",
    "%B %d %Y %H:%M:%S%.f",
    "%B %d %Y %H:%M",
    "%B %d %Y %I:%M %p",
    "%B %d %Y %I:%M%p",
    "%d %B %Y %H:%M:%S%.f",
    "%d %B %Y %H:%M",
];

/// Date-only layouts, tried in order after the compact `YYYYMMDD` form.
///
/// Month-first wins for ambiguous slash and dash dates; the day-first
/// layouts only match once the first field cannot be a month.
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%d/%m/%Y",
    "%m-%d-%Y",
    "%d-%m-%Y",
    "%d.%m.%Y",
    "%B %d, %Y",
    "%B %d %Y",
    "%d %B %Y",
    "%d-%B-%Y",
];

/// Time-only layouts.
const TIME_FORMATS: &[&str] = &[
    "%H:%M:%S%.f",
    "%H:%M",
    "%I:%M:%S%.f %p",
    "%I:%M %p",
    "%I:%M:%S%.f%p",
    "%I:%M%p",
];

/// Components found in a free-form literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedDateTime {
    pub date: Option<NaiveDate>,
    pub time: Option<NaiveTime>,
    pub offset: Option<FixedOffset>,
}

impl ParsedDateTime {
    fn from_datetime(datetime: NaiveDateTime, offset: Option<FixedOffset>) -> Self {
        Self {
            date: Some(datetime.date()),
            time: Some(datetime.time()),
            offset,
        }
    }

    /// The time of day, midnight when the literal was date-only.
    pub fn time_or_midnight(&self) -> NaiveTime {
        self.time.unwrap_or(NaiveTime::MIN)
    }
}

/// Read a free-form date/time literal.
///
/// Returns `None` when no supported layout matches, including for empty
/// input and out-of-range components.
pub fn parse_free_form(value: &str) -> Option<ParsedDateTime> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc2822(value) {
        return Some(ParsedDateTime::from_datetime(
            dt.naive_local(),
            Some(*dt.offset()),
        ));
    }

    let (rest, offset) = split_offset(strip_weekday(value));

    if let Some(datetime) = DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(rest, fmt).ok())
    {
        return Some(ParsedDateTime::from_datetime(datetime, offset));
    }

    // An offset is only split off when a time is present, so a date-only
    // match never drops one.
    if let Some(date) = parse_date_only(rest) {
        return Some(ParsedDateTime {
            date: Some(date),
            time: None,
            offset,
        });
    }

    TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveTime::parse_from_str(rest, fmt).ok())
        .map(|time| ParsedDateTime {
            date: None,
            time: Some(time),
            offset,
        })
}

/// Drop a leading `Saturday, ` or `Sat, `. The weekday is not checked
/// against the date.
fn strip_weekday(value: &str) -> &str {
    match value.split_once(',') {
        Some((head, rest)) if head.trim().parse::<Weekday>().is_ok() => rest.trim_start(),
        _ => value,
    }
}

fn parse_date_only(value: &str) -> Option<NaiveDate> {
    if value.len() == 8 && value.bytes().all(|b| b.is_ascii_digit()) {
        let year = value[0..4].parse().ok()?;
        let month = value[4..6].parse().ok()?;
        let day = value[6..8].parse().ok()?;
        return NaiveDate::from_ymd_opt(year, month, day);
    }

    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(value, fmt).ok())
}

/// Split a trailing zone designator (`Z`, `UTC`, `GMT`, `+HH`, `+HHMM`,
/// `+HH:MM`) off a literal whose last token before it is a time.
fn split_offset(value: &str) -> (&str, Option<FixedOffset>) {
    let utc = FixedOffset::east_opt(0);

    if !value.contains(':') {
        return (value, None);
    }

    for name in ["UTC", "GMT"] {
        if let Some(split) = value.len().checked_sub(name.len()) {
            if let (Some(head), Some(tail)) = (value.get(..split), value.get(split..)) {
                if tail.eq_ignore_ascii_case(name) && ends_with_time(head) {
                    return (head.trim_end(), utc);
                }
            }
        }
    }

    if let Some(head) = value.strip_suffix(&['Z', 'z'][..]) {
        if ends_with_time(head) {
            return (head.trim_end(), utc);
        }
    }

    let Some(sign_pos) = value.rfind(&['+', '-'][..]) else {
        return (value, None);
    };
    let (head, tail) = value.split_at(sign_pos);
    if !ends_with_time(head) {
        return (value, None);
    }

    match parse_numeric_offset(tail) {
        Some(offset) => (head.trim_end(), Some(offset)),
        None => (value, None),
    }
}

fn ends_with_time(head: &str) -> bool {
    let head = strip_meridiem(head.trim_end());
    let token = head.rsplit(&[' ', 'T'][..]).next().unwrap_or(head);
    token.contains(':') && token.ends_with(|c: char| c.is_ascii_digit())
}

/// Remove a trailing `AM`/`PM`, spaced or not.
fn strip_meridiem(head: &str) -> &str {
    let split = head.len().saturating_sub(2);
    match (head.get(..split), head.get(split..)) {
        (Some(rest), Some(tail))
            if tail.eq_ignore_ascii_case("am") || tail.eq_ignore_ascii_case("pm") =>
        {
            rest.trim_end()
        }
        _ => head,
    }
}

fn parse_numeric_offset(tail: &str) -> Option<FixedOffset> {
    let mut chars = tail.chars();
    let sign = match chars.next()? {
        '+' => 1,
        '-' => -1,
        _ => return None,
    };
    let digits: String = chars.filter(|c| *c != ':').collect();
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let (hours, minutes): (i32, i32) = match digits.len() {
        2 => (digits.parse().ok()?, 0),
        4 => (digits[0..2].parse().ok()?, digits[2..4].parse().ok()?),
        _ => return None,
    };
    if hours > 23 || minutes > 59 {
        return None;
    }

    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn time(h: u32, m: u32, s: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, s).unwrap()
    }

    fn offset_hours(h: i32) -> Option<FixedOffset> {
        FixedOffset::east_opt(h * 3600)
    }

    #[test]
    fn test_iso_datetime() {
        let parsed = parse_free_form("2024-06-15T10:30:00").unwrap();
        assert_eq!(parsed.date, Some(date(2024, 6, 15)));
        assert_eq!(parsed.time, Some(time(10, 30, 0)));
        assert_eq!(parsed.offset, None);

        let parsed = parse_free_form("2024-06-15 10:30").unwrap();
        assert_eq!(parsed.time, Some(time(10, 30, 0)));
    }

    #[test]
    fn test_rfc3339_offsets() {
        let parsed = parse_free_form("2024-06-15T10:30:00+00:00").unwrap();
        assert_eq!(parsed.offset, offset_hours(0));

        let parsed = parse_free_form("2024-06-15T10:30:00Z").unwrap();
        assert_eq!(parsed.offset, offset_hours(0));
        assert_eq!(parsed.time, Some(time(10, 30, 0)));

        let parsed = parse_free_form("2024-06-15 10:30:00-05").unwrap();
        assert_eq!(parsed.offset, offset_hours(-5));

        let parsed = parse_free_form("2024-06-15 10:30:00 +0530").unwrap();
        assert_eq!(parsed.offset, FixedOffset::east_opt(5 * 3600 + 30 * 60));
    }

    #[test]
    fn test_fractional_seconds() {
        let parsed = parse_free_form("2024-06-15T10:30:00.123456-05:00").unwrap();
        assert_eq!(
            parsed.time,
            NaiveTime::from_hms_micro_opt(10, 30, 0, 123_456)
        );
        assert_eq!(parsed.offset, offset_hours(-5));
    }

    #[test]
    fn test_rfc2822() {
        let parsed = parse_free_form("Sat, 15 Jun 2024 10:30:00 +0200").unwrap();
        assert_eq!(parsed.date, Some(date(2024, 6, 15)));
        assert_eq!(parsed.time, Some(time(10, 30, 0)));
        assert_eq!(parsed.offset, offset_hours(2));
    }

    #[test]
    fn test_named_utc() {
        let parsed = parse_free_form("2024-06-15 10:30:00 UTC").unwrap();
        assert_eq!(parsed.offset, offset_hours(0));
        let parsed = parse_free_form("10:30:00 gmt").unwrap();
        assert_eq!(parsed.offset, offset_hours(0));
        assert_eq!(parsed.date, None);
    }

    #[test]
    fn test_date_layouts() {
        for input in [
            "2024-06-15",
            "2024/06/15",
            "06/15/2024",
            "6/15/2024",
            "20240615",
            "June 15, 2024",
            "Jun 15 2024",
            "15 June 2024",
            "15-Jun-2024",
        ] {
            let parsed = parse_free_form(input).unwrap_or_else(|| panic!("Failed for {input}"));
            assert_eq!(parsed.date, Some(date(2024, 6, 15)), "Failed for {input}");
            assert_eq!(parsed.time, None, "Failed for {input}");
        }
    }

    #[test]
    fn test_date_is_not_an_offset() {
        // The trailing "-15" is the day, not a UTC offset
        let parsed = parse_free_form("2024-06-15").unwrap();
        assert_eq!(parsed.offset, None);
    }

    #[test]
    fn test_time_layouts() {
        let parsed = parse_free_form("14:30:45").unwrap();
        assert_eq!(parsed.date, None);
        assert_eq!(parsed.time, Some(time(14, 30, 45)));

        let parsed = parse_free_form("2:30 PM").unwrap();
        assert_eq!(parsed.time, Some(time(14, 30, 0)));

        let parsed = parse_free_form("14:30:45+02:00").unwrap();
        assert_eq!(parsed.offset, offset_hours(2));
    }

    #[test]
    fn test_twelve_hour_datetime() {
        let parsed = parse_free_form("06/15/2024 02:30 PM").unwrap();
        assert_eq!(parsed.date, Some(date(2024, 6, 15)));
        assert_eq!(parsed.time, Some(time(14, 30, 0)));
    }

    #[test]
    fn test_unparsable() {
        for input in ["", "   ", "not a date", "2024-13-01", "25:00", "2024-02-30", "12345"] {
            assert_eq!(parse_free_form(input), None, "Should reject: {input}");
        }
    }

    #[test]
    fn test_day_first_when_month_first_is_impossible() {
        let parsed = parse_free_form("15/06/2024").unwrap();
        assert_eq!(parsed.date, Some(date(2024, 6, 15)));

        let parsed = parse_free_form("15-06-2024").unwrap();
        assert_eq!(parsed.date, Some(date(2024, 6, 15)));

        // Ambiguous dates stay month-first
        let parsed = parse_free_form("06/05/2024").unwrap();
        assert_eq!(parsed.date, Some(date(2024, 6, 5)));

        let parsed = parse_free_form("15/06/2024 10:30").unwrap();
        assert_eq!(parsed.date, Some(date(2024, 6, 15)));
        assert_eq!(parsed.time, Some(time(10, 30, 0)));
    }

    #[test]
    fn test_dotted_dates() {
        let parsed = parse_free_form("15.06.2024").unwrap();
        assert_eq!(parsed.date, Some(date(2024, 6, 15)));
        assert_eq!(parsed.time, None);

        let parsed = parse_free_form("15.06.2024 10:30:00").unwrap();
        assert_eq!(parsed.time, Some(time(10, 30, 0)));
    }

    #[test]
    fn test_weekday_prefix() {
        let parsed = parse_free_form("Saturday, June 15, 2024").unwrap();
        assert_eq!(parsed.date, Some(date(2024, 6, 15)));

        let parsed = parse_free_form("Sat, 15 Jun 2024").unwrap();
        assert_eq!(parsed.date, Some(date(2024, 6, 15)));

        let parsed = parse_free_form("sat, June 15, 2024 2:30 PM").unwrap();
        assert_eq!(parsed.time, Some(time(14, 30, 0)));

        assert_eq!(parse_free_form("Someday, June 15, 2024"), None);
    }

    #[test]
    fn test_unspaced_meridiem() {
        let parsed = parse_free_form("Jun 15 2024 10:30AM").unwrap();
        assert_eq!(parsed.date, Some(date(2024, 6, 15)));
        assert_eq!(parsed.time, Some(time(10, 30, 0)));

        let parsed = parse_free_form("2:30pm").unwrap();
        assert_eq!(parsed.time, Some(time(14, 30, 0)));

        let parsed = parse_free_form("2024-06-15 10:30PM").unwrap();
        assert_eq!(parsed.time, Some(time(22, 30, 0)));
    }

    #[test]
    fn test_meridiem_followed_by_offset() {
        let parsed = parse_free_form("2:30 PM +02:00").unwrap();
        assert_eq!(parsed.date, None);
        assert_eq!(parsed.time, Some(time(14, 30, 0)));
        assert_eq!(parsed.offset, offset_hours(2));

        let parsed = parse_free_form("06/15/2024 02:30PM -05").unwrap();
        assert_eq!(parsed.date, Some(date(2024, 6, 15)));
        assert_eq!(parsed.time, Some(time(14, 30, 0)));
        assert_eq!(parsed.offset, offset_hours(-5));

        let parsed = parse_free_form("2:30 PM UTC").unwrap();
        assert_eq!(parsed.offset, offset_hours(0));
    }

    #[test]
    fn test_time_or_midnight() {
        let parsed = parse_free_form("2024-06-15").unwrap();
        assert_eq!(parsed.time_or_midnight(), time(0, 0, 0));
    }
}
