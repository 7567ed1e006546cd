//! Age <-> date-of-birth conversions used by the PWD registration form.
//!
//! `today` is always passed in so the rules stay deterministic under test.

use chrono::{Datelike, NaiveDate};

pub const ADULT_AGE: i32 = 18;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Highest age the registration form accepts.
pub const MAX_AGE: u32 = 150;

/// Whole years between `dob` and `today`. Negative for dates in the future.
pub fn age_on(dob: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - dob.year();
    if (today.month(), today.day()) < (dob.month(), dob.day()) {
        age -= 1;
    }
    age
}

/// Birth date for someone turning `age` today: same month/day, `age` years back.
/// 29 February falls back to the 28th in non-leap years. `None` above [`MAX_AGE`].
pub fn dob_from_age(age: u32, today: NaiveDate) -> Option<NaiveDate> {
    if age > MAX_AGE {
        return None;
    }
    let year = today.year().checked_sub(i32::try_from(age).ok()?)?;
    NaiveDate::from_ymd_opt(year, today.month(), today.day())
        .or_else(|| NaiveDate::from_ymd_opt(year, today.month(), 28))
}

pub fn is_minor(age: i32) -> bool {
    age < ADULT_AGE
}

/// Parses an `<input type="date">` value.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    // API records sometimes carry a time part ("1990-04-02 00:00:00" / ISO).
    let date_part = value.split(['T', ' ']).next().unwrap_or(value);
    NaiveDate::parse_from_str(date_part, DATE_FORMAT).ok()
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Parses the free-typed age field. Empty, negative, non-numeric and
/// out-of-range input is `None`.
pub fn parse_age(value: &str) -> Option<u32> {
    value.trim().parse::<u32>().ok().filter(|age| *age <= MAX_AGE)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_age_before_and_after_birthday() {
        let today = d(2025, 6, 15);
        assert_eq!(age_on(d(2000, 6, 15), today), 25);
        assert_eq!(age_on(d(2000, 6, 16), today), 24);
        assert_eq!(age_on(d(2000, 1, 1), today), 25);
        assert_eq!(age_on(d(2000, 12, 31), today), 24);
    }

    #[test]
    fn test_dob_from_age_keeps_month_and_day() {
        assert_eq!(dob_from_age(30, d(2025, 3, 9)), Some(d(1995, 3, 9)));
        assert_eq!(dob_from_age(0, d(2025, 3, 9)), Some(d(2025, 3, 9)));
    }

    #[test]
    fn test_dob_from_age_on_leap_day() {
        assert_eq!(dob_from_age(1, d(2024, 2, 29)), Some(d(2023, 2, 28)));
        assert_eq!(dob_from_age(4, d(2024, 2, 29)), Some(d(2020, 2, 29)));
    }

    #[test]
    fn test_dob_from_age_out_of_range() {
        let today = d(2025, 8, 20);
        assert_eq!(dob_from_age(MAX_AGE, today), Some(d(1875, 8, 20)));
        assert_eq!(dob_from_age(MAX_AGE + 1, today), None);
        assert_eq!(dob_from_age(300_000, today), None);
        assert_eq!(dob_from_age(u32::MAX, today), None);
    }

    #[test]
    fn test_round_trip_from_typed_age() {
        let today = d(2025, 10, 17);
        let dob = dob_from_age(17, today).unwrap();
        assert_eq!(age_on(dob, today), 17);
        assert!(is_minor(age_on(dob, today)));
    }

    #[test]
    fn test_minor_boundary() {
        assert!(is_minor(17));
        assert!(!is_minor(18));
    }

    #[test]
    fn test_parse_date_accepts_time_suffix() {
        assert_eq!(parse_date("1990-04-02"), Some(d(1990, 4, 2)));
        assert_eq!(parse_date("1990-04-02 00:00:00"), Some(d(1990, 4, 2)));
        assert_eq!(parse_date("1990-04-02T10:00:00Z"), Some(d(1990, 4, 2)));
        assert_eq!(parse_date(""), None);
    }

    #[test]
    fn test_parse_age() {
        assert_eq!(parse_age(" 42 "), Some(42));
        assert_eq!(parse_age("-3"), None);
        assert_eq!(parse_age("abc"), None);
        assert_eq!(parse_age("150"), Some(150));
        assert_eq!(parse_age("151"), None);
        assert_eq!(parse_age("2147483648"), None);
    }
}
