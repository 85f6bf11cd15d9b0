//! Utilities for date formatting
//!
//! Provides consistent date display across the application

use chrono::{DateTime, Utc};

/// Format a timestamp for list display
/// Example: 2024-03-15T14:02:26Z -> "Mar 15, 2024"
pub fn format_date(timestamp: &DateTime<Utc>) -> String {
    timestamp.format("%b %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_date() {
        let ts = Utc.with_ymd_and_hms(2024, 3, 15, 14, 2, 26).unwrap();
        assert_eq!(format_date(&ts), "Mar 15, 2024");
        let ts = Utc.with_ymd_and_hms(2024, 12, 31, 23, 59, 59).unwrap();
        assert_eq!(format_date(&ts), "Dec 31, 2024");
    }

    #[test]
    fn test_format_date_uses_utc_day() {
        let ts = chrono::DateTime::parse_from_rfc3339("2024-03-05T01:00:00+03:00")
            .unwrap()
            .with_timezone(&Utc);
        assert_eq!(format_date(&ts), "Mar 4, 2024");
    }
}
