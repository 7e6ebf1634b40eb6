//! Named date ranges over event start dates.
//!
//! Every range is evaluated against a date-only "today" taken from the
//! caller's local calendar. Start dates are bare calendar dates
//! ([`chrono::NaiveDate`]); treating them as UTC instants would shift
//! events across a day boundary in timezones west of UTC, so no range ever
//! goes through `DateTime`.

use chrono::{Datelike, Duration, NaiveDate};

/// A named predicate over an event's start date, relative to "today".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateRange {
    /// Matches every event, dated or not.
    All,
    /// Start date equals today.
    Today,
    /// Start date in `[today, today + 7]`, both ends inclusive.
    ThisWeek,
    /// Start date in the same calendar month and year as today,
    /// including days of this month already past.
    ThisMonth,
    /// Start date today or later.
    Upcoming,
    /// Start date strictly before today.
    Past,
    /// Start date in `[today, today + days]`, both ends inclusive.
    /// Zero days matches only today.
    CustomDays(i64),
}

impl DateRange {
    /// Parse a range name. `custom_days` has no name; it is selected by
    /// the caller passing an explicit day count.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "all" => Some(DateRange::All),
            "today" => Some(DateRange::Today),
            "this_week" => Some(DateRange::ThisWeek),
            "this_month" => Some(DateRange::ThisMonth),
            "upcoming" => Some(DateRange::Upcoming),
            "past" => Some(DateRange::Past),
            _ => None,
        }
    }

    /// Like [`DateRange::parse`], but unknown names fall back to `all`
    /// instead of being rejected. Used for stored defaults, where a stale
    /// name should widen the view rather than break it.
    pub fn from_key(raw: &str) -> Self {
        Self::parse(raw).unwrap_or(DateRange::All)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DateRange::All => "all",
            DateRange::Today => "today",
            DateRange::ThisWeek => "this_week",
            DateRange::ThisMonth => "this_month",
            DateRange::Upcoming => "upcoming",
            DateRange::Past => "past",
            DateRange::CustomDays(_) => "custom_days",
        }
    }

    /// Whether `start_date` falls inside this range, relative to `today`.
    ///
    /// An undated event is excluded from every range except `all`.
    pub fn contains(&self, start_date: Option<NaiveDate>, today: NaiveDate) -> bool {
        if matches!(self, DateRange::All) {
            return true;
        }
        let date = match start_date {
            Some(date) => date,
            None => return false,
        };
        match self {
            DateRange::All => true,
            DateRange::Today => date == today,
            DateRange::ThisWeek => date >= today && date <= today + Duration::days(7),
            DateRange::ThisMonth => {
                date.month() == today.month() && date.year() == today.year()
            }
            DateRange::Upcoming => date >= today,
            DateRange::Past => date < today,
            DateRange::CustomDays(days) => {
                // A window end past the calendar range is unbounded above.
                let within_end = match today.checked_add_signed(Duration::days(*days)) {
                    Some(end) => date <= end,
                    None => true,
                };
                date >= today && within_end
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    #[test]
    fn all_matches_even_undated_events() {
        let today = day(2026, 3, 15);
        assert!(DateRange::All.contains(None, today));
        assert!(DateRange::All.contains(Some(day(1999, 1, 1)), today));
    }

    #[test]
    fn undated_events_match_nothing_else() {
        let today = day(2026, 3, 15);
        for range in [
            DateRange::Today,
            DateRange::ThisWeek,
            DateRange::ThisMonth,
            DateRange::Upcoming,
            DateRange::Past,
            DateRange::CustomDays(30),
        ] {
            assert!(!range.contains(None, today), "{range:?}");
        }
    }

    #[test]
    fn today_boundary() {
        let today = day(2026, 3, 15);
        // Exactly today matches today, upcoming, and this_week, not past.
        assert!(DateRange::Today.contains(Some(today), today));
        assert!(DateRange::Upcoming.contains(Some(today), today));
        assert!(DateRange::ThisWeek.contains(Some(today), today));
        assert!(!DateRange::Past.contains(Some(today), today));

        assert!(!DateRange::Today.contains(Some(day(2026, 3, 16)), today));
        assert!(DateRange::Past.contains(Some(day(2026, 3, 14)), today));
    }

    #[test]
    fn this_week_is_inclusive_on_both_ends() {
        let today = day(2026, 3, 15);
        assert!(DateRange::ThisWeek.contains(Some(day(2026, 3, 22)), today));
        assert!(!DateRange::ThisWeek.contains(Some(day(2026, 3, 23)), today));
        // Yesterday is not "this week": the window looks forward only.
        assert!(!DateRange::ThisWeek.contains(Some(day(2026, 3, 14)), today));
    }

    #[test]
    fn this_month_includes_past_days_of_the_month() {
        let today = day(2026, 3, 15);
        assert!(DateRange::ThisMonth.contains(Some(day(2026, 3, 1)), today));
        assert!(DateRange::ThisMonth.contains(Some(day(2026, 3, 31)), today));
        assert!(!DateRange::ThisMonth.contains(Some(day(2026, 4, 1)), today));
        // Same month of a different year does not count.
        assert!(!DateRange::ThisMonth.contains(Some(day(2025, 3, 15)), today));
    }

    #[test]
    fn custom_days_zero_matches_only_today() {
        let today = day(2026, 3, 15);
        assert!(DateRange::CustomDays(0).contains(Some(today), today));
        assert!(!DateRange::CustomDays(0).contains(Some(day(2026, 3, 16)), today));
        assert!(!DateRange::CustomDays(0).contains(Some(day(2026, 3, 14)), today));
    }

    #[test]
    fn custom_days_upper_bound_is_inclusive() {
        let today = day(2026, 3, 15);
        assert!(DateRange::CustomDays(14).contains(Some(day(2026, 3, 29)), today));
        assert!(!DateRange::CustomDays(14).contains(Some(day(2026, 3, 30)), today));
    }

    #[test]
    fn oversized_custom_window_is_unbounded_above() {
        // A day count past the calendar range must widen the window, not
        // overflow the date arithmetic.
        let today = day(2026, 3, 15);
        let huge = DateRange::CustomDays(i64::from(u32::MAX));
        assert!(huge.contains(Some(today), today));
        assert!(huge.contains(Some(day(9999, 12, 31)), today));
        assert!(!huge.contains(Some(day(2026, 3, 14)), today));
        assert!(!huge.contains(None, today));
    }

    #[test]
    fn month_boundary_west_of_utc_cannot_shift() {
        // 2026-03-01 stays the 1st regardless of host timezone because
        // NaiveDate carries no offset to shift with.
        let today = day(2026, 3, 1);
        assert!(DateRange::Today.contains(Some(day(2026, 3, 1)), today));
        assert!(DateRange::ThisMonth.contains(Some(day(2026, 3, 1)), today));
        assert!(!DateRange::ThisMonth.contains(Some(day(2026, 2, 28)), today));
    }

    #[test]
    fn parse_known_names() {
        assert_eq!(DateRange::parse("this_week"), Some(DateRange::ThisWeek));
        assert_eq!(DateRange::parse(" upcoming "), Some(DateRange::Upcoming));
        assert_eq!(DateRange::parse("fortnight"), None);
        assert_eq!(DateRange::from_key("fortnight"), DateRange::All);
    }
}
