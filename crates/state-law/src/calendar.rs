use chrono::{Datelike, Days, NaiveDate, Weekday};

/// Business calendar for counting public-records response periods.
///
/// Business days exclude weekends and U.S. federal holidays. State-specific
/// holidays are not modelled; agencies observing extra closures may take
/// longer than the computed date.
pub struct FederalBusinessCalendar;

impl FederalBusinessCalendar {
    /// Add business days to a date, excluding weekends and federal holidays
    pub fn add_business_days(start_date: NaiveDate, days: u32) -> Option<NaiveDate> {
        let mut current_date = start_date;
        let mut remaining_days = days;

        while remaining_days > 0 {
            current_date = current_date.succ_opt()?;

            if Self::is_business_day(current_date) {
                remaining_days -= 1;
            }
        }

        Some(current_date)
    }

    pub fn add_calendar_days(start_date: NaiveDate, days: u32) -> Option<NaiveDate> {
        start_date.checked_add_days(Days::new(u64::from(days)))
    }

    /// Check if a date is a business day (not weekend or holiday)
    pub fn is_business_day(date: NaiveDate) -> bool {
        !Self::is_weekend(date) && !Self::is_holiday(date)
    }

    fn is_weekend(date: NaiveDate) -> bool {
        matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
    }

    /// Check if a date is a federal holiday
    pub fn is_holiday(date: NaiveDate) -> bool {
        Self::is_fixed_holiday(date.month(), date.day())
            || Self::is_observed_holiday(date)
            || Self::is_floating_holiday(date, date.year())
    }

    /// Fixed holidays on a Saturday close the Friday before, on a Sunday the Monday after
    fn is_observed_holiday(date: NaiveDate) -> bool {
        let actual = match date.weekday() {
            Weekday::Fri => date.succ_opt(),
            Weekday::Mon => date.pred_opt(),
            _ => None,
        };
        actual.map_or(false, |day| Self::is_fixed_holiday(day.month(), day.day()))
    }

    fn is_fixed_holiday(month: u32, day: u32) -> bool {
        matches!(
            (month, day),
            (1, 1) |   // New Year's Day
            (6, 19) |  // Juneteenth
            (7, 4) |   // Independence Day
            (11, 11) | // Veterans Day
            (12, 25) // Christmas
        )
    }

    fn is_floating_holiday(date: NaiveDate, year: i32) -> bool {
        // (month, weekday, nth occurrence)
        const NTH_WEEKDAY_HOLIDAYS: &[(u32, Weekday, u32)] = &[
            (1, Weekday::Mon, 3),  // Martin Luther King Jr. Day
            (2, Weekday::Mon, 3),  // Washington's Birthday
            (9, Weekday::Mon, 1),  // Labor Day
            (10, Weekday::Mon, 2), // Columbus Day
            (11, Weekday::Thu, 4), // Thanksgiving
        ];

        let nth_match = NTH_WEEKDAY_HOLIDAYS.iter().any(|&(month, weekday, n)| {
            Self::get_nth_weekday_of_month(year, month, weekday, n) == Some(date)
        });

        // Memorial Day - Last Monday in May
        nth_match || Self::get_last_weekday_of_month(year, 5, Weekday::Mon) == Some(date)
    }

    /// Get the nth occurrence of a weekday in a month
    fn get_nth_weekday_of_month(
        year: i32,
        month: u32,
        weekday: Weekday,
        n: u32,
    ) -> Option<NaiveDate> {
        let mut current = NaiveDate::from_ymd_opt(year, month, 1)?;
        let mut count = 0;

        while current.month() == month {
            if current.weekday() == weekday {
                count += 1;
                if count == n {
                    return Some(current);
                }
            }
            current = current.succ_opt()?;
        }

        None
    }

    /// Get the last occurrence of a weekday in a month
    fn get_last_weekday_of_month(year: i32, month: u32, weekday: Weekday) -> Option<NaiveDate> {
        let last_day = if month == 12 {
            NaiveDate::from_ymd_opt(year + 1, 1, 1)?.pred_opt()?
        } else {
            NaiveDate::from_ymd_opt(year, month + 1, 1)?.pred_opt()?
        };

        let mut current = last_day;
        while current.month() == month {
            if current.weekday() == weekday {
                return Some(current);
            }
            current = current.pred_opt()?;
        }

        None
    }
}
