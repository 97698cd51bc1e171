use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// How far ahead a move may be booked, counted in business days.
///
/// Shared by the estimate date precondition and the availability validator so
/// the two rules cannot drift apart.
pub const BOOKING_HORIZON_BUSINESS_DAYS: u32 = 60;

/// Monday through Friday. No holiday calendar is consulted; holiday handling
/// belongs to the scheduling collaborator outside this crate.
pub fn is_business_day(date: NaiveDate) -> bool {
    !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Walk forward one calendar day at a time until `count` business days have
/// been accumulated.
pub fn add_business_days(start: NaiveDate, count: u32) -> NaiveDate {
    let mut date = start;
    let mut remaining = count;
    while remaining > 0 {
        date += Duration::days(1);
        if is_business_day(date) {
            remaining -= 1;
        }
    }
    date
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    #[test]
    fn weekends_are_not_business_days() {
        assert!(is_business_day(date(2026, 8, 7))); // Friday
        assert!(!is_business_day(date(2026, 8, 8))); // Saturday
        assert!(!is_business_day(date(2026, 8, 9))); // Sunday
        assert!(is_business_day(date(2026, 8, 10))); // Monday
    }

    #[test]
    fn adding_business_days_skips_weekends() {
        // Friday + 1 business day lands on Monday.
        assert_eq!(add_business_days(date(2026, 8, 7), 1), date(2026, 8, 10));
        // A full business week spans seven calendar days.
        assert_eq!(add_business_days(date(2026, 8, 10), 5), date(2026, 8, 17));
    }

    #[test]
    fn adding_zero_days_is_identity() {
        assert_eq!(add_business_days(date(2026, 8, 8), 0), date(2026, 8, 8));
    }

    #[test]
    fn horizon_spans_twelve_calendar_weeks() {
        // 60 business days from a Monday is exactly 12 weeks out.
        assert_eq!(
            add_business_days(date(2026, 8, 10), BOOKING_HORIZON_BUSINESS_DAYS),
            date(2026, 11, 2)
        );
    }
}
