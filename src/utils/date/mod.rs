// Date utility functions

use chrono::{DateTime, Local, NaiveDate, TimeZone};

/// Calendar-day equality; time of day is ignored
pub fn is_same_day<Tz: TimeZone>(date: &DateTime<Tz>, day: NaiveDate) -> bool {
    date.date_naive() == day
}

/// Today's date in the local timezone
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    #[test]
    fn test_same_day_ignores_time() {
        let day = NaiveDate::from_ymd_opt(2025, 6, 30).unwrap();
        let morning = Utc.with_ymd_and_hms(2025, 6, 30, 0, 0, 1).unwrap();
        let night = Utc.with_ymd_and_hms(2025, 6, 30, 23, 59, 59).unwrap();
        assert!(is_same_day(&morning, day));
        assert!(is_same_day(&night, day));
    }

    #[test]
    fn test_same_day_uses_the_datetime_local_date() {
        let day = NaiveDate::from_ymd_opt(2025, 7, 1).unwrap();
        let offset = FixedOffset::east_opt(10 * 3600).unwrap();
        // 2025-06-30 20:00 UTC is already July 1st at +10:00
        let date = offset.with_ymd_and_hms(2025, 7, 1, 6, 0, 0).unwrap();
        assert!(is_same_day(&date, day));
        assert!(!is_same_day(&date.with_timezone(&Utc), day));
    }
}
