/// Date formatting for tables and detail pages
///
/// API dates arrive as `YYYY-MM-DD` or full ISO timestamps.
use chrono::{DateTime, NaiveDateTime};
use contracts::shared::age::parse_date;

/// Format ISO date string to "Mar 15, 2024"
/// Unparseable input is returned unchanged
pub fn format_date(date_str: &str) -> String {
    match parse_date(date_str) {
        Some(date) => date.format("%b %-d, %Y").to_string(),
        None => date_str.to_string(),
    }
}

/// Format ISO datetime string to "Mar 15, 2024 14:02"
pub fn format_datetime(datetime_str: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(datetime_str) {
        return dt.format("%b %-d, %Y %H:%M").to_string();
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(datetime_str, "%Y-%m-%d %H:%M:%S") {
        return dt.format("%b %-d, %Y %H:%M").to_string();
    }
    format_date(datetime_str)
}

/// `format_date` over an optional field, "N/A" when absent
pub fn format_optional_date(value: Option<&str>) -> String {
    match value.filter(|v| !v.trim().is_empty()) {
        Some(v) => format_date(v),
        None => "N/A".to_string(),
    }
}

/// Today's date in the browser's local time zone
pub fn today() -> chrono::NaiveDate {
    chrono::Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_datetime() {
        assert_eq!(
            format_datetime("2024-03-15T14:02:26.123Z"),
            "Mar 15, 2024 14:02"
        );
        assert_eq!(format_datetime("2024-12-31 23:59:59"), "Dec 31, 2024 23:59");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-05"), "Mar 5, 2024");
        assert_eq!(format_date("2024-03-15T14:02:26.123Z"), "Mar 15, 2024");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_datetime("invalid"), "invalid");
        assert_eq!(format_date("invalid"), "invalid");
        assert_eq!(format_optional_date(None), "N/A");
        assert_eq!(format_optional_date(Some(" ")), "N/A");
    }
}
