//! Display formatting for dates coming from the backend.

use chrono::{DateTime, NaiveDate, Utc};

pub fn datetime(at: &DateTime<Utc>) -> String {
    at.format("%d %b %Y, %H:%M").to_string()
}

pub fn date(at: &DateTime<Utc>) -> String {
    at.format("%d %b %Y").to_string()
}

/// Due date, or `N/A` when the task has none.
pub fn due(due: Option<NaiveDate>) -> String {
    due.map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "N/A".to_string())
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn test_formats() {
        let at = Utc.with_ymd_and_hms(2025, 5, 3, 14, 5, 0).unwrap();
        assert_eq!(datetime(&at), "03 May 2025, 14:05");
        assert_eq!(date(&at), "03 May 2025");
        assert_eq!(due(NaiveDate::from_ymd_opt(2025, 6, 1)), "2025-06-01");
        assert_eq!(due(None), "N/A");
    }
}
