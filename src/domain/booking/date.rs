//! Booking date resolution and validation.

use chrono::{DateTime, Datelike, Months, NaiveDate, NaiveDateTime, Utc};

use super::{Booking, LooseValue};

/// How far ahead of "now" a booking date may lie and still be trusted.
const MAX_FUTURE_MONTHS: u32 = 24;

const NAIVE_DATETIME_FORMATS: [&str; 5] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M:%S",
];

const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];

/// Parses a date value without applying the future bound.
///
/// Numbers are epoch milliseconds. Text may be RFC 3339, RFC 2822, or a
/// zone-less date/datetime, which is read as UTC.
pub fn parse_booking_date(value: &LooseValue) -> Option<DateTime<Utc>> {
    if !value.is_present() {
        return None;
    }

    match value {
        LooseValue::Number(ms) if ms.is_finite() => DateTime::from_timestamp_millis(*ms as i64),
        LooseValue::Text(text) => parse_text(text.trim()),
        _ => None,
    }
}

fn parse_text(text: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(text) {
        return Some(dt.with_timezone(&Utc));
    }
    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, format) {
            return Some(naive.and_utc());
        }
    }
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(text, format) {
            return date.and_hms_opt(0, 0, 0).map(|naive| naive.and_utc());
        }
    }
    None
}

/// Whether `value` parses and lies no more than two years after `now`.
///
/// Past dates are always valid.
pub fn is_valid_booking_date_at(value: Option<&LooseValue>, now: DateTime<Utc>) -> bool {
    let Some(date) = value.and_then(parse_booking_date) else {
        return false;
    };

    match now.checked_add_months(Months::new(MAX_FUTURE_MONTHS)) {
        Some(max_future) => date <= max_future,
        None => true,
    }
}

/// [`is_valid_booking_date_at`] against the current time.
pub fn is_valid_booking_date(value: Option<&LooseValue>) -> bool {
    is_valid_booking_date_at(value, Utc::now())
}

/// Resolves the booking's date from its first present date field.
pub fn get_booking_date(booking: &Booking) -> Option<DateTime<Utc>> {
    let source = booking.date_source()?;
    if !is_valid_booking_date(Some(source)) {
        return None;
    }
    parse_booking_date(source)
}

/// Whether the booking falls in `month` (0 = January) of `year`, in UTC.
pub fn is_booking_in_month(booking: &Booking, month: u32, year: i32) -> bool {
    match get_booking_date(booking) {
        Some(date) => date.month0() == month && date.year() == year,
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn text(s: &str) -> LooseValue {
        LooseValue::Text(s.to_string())
    }

    fn iso(dt: DateTime<Utc>) -> LooseValue {
        LooseValue::Text(dt.to_rfc3339())
    }

    #[test]
    fn parses_common_shapes() {
        let expected = Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap();
        assert_eq!(parse_booking_date(&text("2024-01-15")), Some(expected));
        assert_eq!(parse_booking_date(&text("2024-01-15T00:00:00Z")), Some(expected));
        assert_eq!(parse_booking_date(&text("2024-01-15T00:00:00.000Z")), Some(expected));
        assert_eq!(parse_booking_date(&text("2024-01-15 00:00:00")), Some(expected));
        assert_eq!(
            parse_booking_date(&text("Mon, 15 Jan 2024 00:00:00 +0000")),
            Some(expected)
        );
        assert_eq!(
            parse_booking_date(&LooseValue::Number(1_705_276_800_000.0)),
            Some(expected)
        );
    }

    #[test]
    fn offsets_are_normalized_to_utc() {
        let parsed = parse_booking_date(&text("2024-02-01T01:00:00+02:00")).unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2024, 1, 31, 23, 0, 0).unwrap());
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(parse_booking_date(&text("not a date")), None);
        assert_eq!(parse_booking_date(&text("")), None);
        assert_eq!(parse_booking_date(&LooseValue::Number(0.0)), None);
        assert!(!is_valid_booking_date(Some(&text("not a date"))));
        assert!(!is_valid_booking_date(None));
    }

    #[test]
    fn future_bound_is_two_years() {
        let now = Utc::now();
        assert!(is_valid_booking_date(Some(&iso(now + Duration::days(365)))));
        assert!(!is_valid_booking_date(Some(&iso(now + Duration::days(3 * 365)))));
        assert!(is_valid_booking_date(Some(&iso(now - Duration::days(20 * 365)))));
    }

    #[test]
    fn future_bound_is_inclusive_at_explicit_now() {
        let now = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
        let edge = Utc.with_ymd_and_hms(2027, 6, 1, 12, 0, 0).unwrap();
        assert!(is_valid_booking_date_at(Some(&iso(edge)), now));
        assert!(!is_valid_booking_date_at(
            Some(&iso(edge + Duration::seconds(1))),
            now
        ));
    }

    #[test]
    fn resolves_first_present_field() {
        let booking = Booking {
            created_at: Some(text("2023-05-02")),
            timestamp: Some(text("2020-01-01")),
            ..Booking::default()
        };
        assert_eq!(
            get_booking_date(&booking),
            Some(Utc.with_ymd_and_hms(2023, 5, 2, 0, 0, 0).unwrap())
        );
    }

    #[test]
    fn invalid_first_field_does_not_fall_through() {
        let booking = Booking {
            date: Some(text("garbage")),
            created_at: Some(text("2023-05-02")),
            ..Booking::default()
        };
        assert_eq!(get_booking_date(&booking), None);
    }

    #[test]
    fn january_matches_month_zero() {
        let booking = Booking::default().with_date("2024-01-31T23:59:59Z");
        assert!(is_booking_in_month(&booking, 0, 2024));
        assert!(!is_booking_in_month(&booking, 1, 2024));
        assert!(!is_booking_in_month(&booking, 0, 2023));

        let booking = Booking::default().with_date("2024-02-01T00:00:00Z");
        assert!(is_booking_in_month(&booking, 1, 2024));
    }

    #[test]
    fn december_matches_month_eleven() {
        let booking = Booking::default().with_date("2023-12-15");
        assert!(is_booking_in_month(&booking, 11, 2023));
    }

    #[test]
    fn undated_booking_is_in_no_month() {
        assert!(!is_booking_in_month(&Booking::default(), 0, 2024));
    }
}
