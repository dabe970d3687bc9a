//! Calendar-aware values derived from a birth date.
//!
//! Age follows civil calendar semantics: whole months are counted first
//! (clamping to the last day of shorter months) and the remainder is a day
//! count. A Jan 31 birth on Mar 1 of a common year is therefore one month
//! and one day old, not 29 days.

use std::cmp::Ordering;
use std::fmt;

use chrono::{Datelike, Months, NaiveDate};

/// Age expressed as years, months and days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CalendarAge {
    pub years: u32,
    pub months: u32,
    pub days: u32,
}

impl fmt::Display for CalendarAge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} years, {} months, {} days",
            self.years, self.months, self.days
        )
    }
}

/// Countdown to the next birthday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NextBirthday {
    Today,
    InDays(u32),
}

impl fmt::Display for NextBirthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Today => write!(f, "Today!"),
            Self::InDays(days) => write!(f, "{days} days"),
        }
    }
}

/// Where a Feb 29 birthday lands in a common year.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum LeapDayPolicy {
    /// Celebrate on Feb 28.
    #[default]
    Feb28,
    /// Celebrate on Mar 1.
    Mar1,
}

impl LeapDayPolicy {
    fn substitute(self, year: i32) -> Option<NaiveDate> {
        match self {
            Self::Feb28 => NaiveDate::from_ymd_opt(year, 2, 28),
            Self::Mar1 => NaiveDate::from_ymd_opt(year, 3, 1),
        }
    }
}

/// Birthday occurrence in `year`, applying `policy` for Feb 29 in common years.
pub fn anniversary(birth: NaiveDate, year: i32, policy: LeapDayPolicy) -> Option<NaiveDate> {
    birth.with_year(year).or_else(|| {
        if birth.month() == 2 && birth.day() == 29 {
            policy.substitute(year)
        } else {
            None
        }
    })
}

/// Years, months and days elapsed from `birth` to `as_of`.
pub fn calendar_age(birth: NaiveDate, as_of: NaiveDate) -> Option<CalendarAge> {
    if as_of < birth {
        return None;
    }
    let mut months = (as_of.year() - birth.year()) * 12 + as_of.month() as i32
        - birth.month() as i32;
    let mut anchor = add_months(birth, months)?;
    if anchor > as_of {
        months -= 1;
        anchor = add_months(birth, months)?;
    }
    let days = (as_of - anchor).num_days();
    Some(CalendarAge {
        years: u32::try_from(months / 12).ok()?,
        months: u32::try_from(months % 12).ok()?,
        days: u32::try_from(days).ok()?,
    })
}

fn add_months(date: NaiveDate, months: i32) -> Option<NaiveDate> {
    date.checked_add_months(Months::new(u32::try_from(months).ok()?))
}

/// Days from `as_of` to the next occurrence of `birth`'s month and day.
pub fn next_birthday(
    birth: NaiveDate,
    as_of: NaiveDate,
    policy: LeapDayPolicy,
) -> Option<NextBirthday> {
    let this_year = anniversary(birth, as_of.year(), policy)?;
    let target = match this_year.cmp(&as_of) {
        Ordering::Equal => return Some(NextBirthday::Today),
        Ordering::Greater => this_year,
        Ordering::Less => anniversary(birth, as_of.year() + 1, policy)?,
    };
    let days = (target - as_of).num_days();
    Some(NextBirthday::InDays(u32::try_from(days).ok()?))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn age_on_exact_anniversary() {
        let age = calendar_age(date(1990, 6, 15), date(2024, 6, 15)).unwrap();
        assert_eq!(
            age,
            CalendarAge {
                years: 34,
                months: 0,
                days: 0
            }
        );
        assert_eq!(age.to_string(), "34 years, 0 months, 0 days");
    }

    #[test]
    fn age_day_before_anniversary() {
        let age = calendar_age(date(1990, 6, 15), date(2024, 6, 14)).unwrap();
        assert_eq!(age.years, 33);
        assert_eq!(age.months, 11);
        assert_eq!(age.days, 30);
    }

    #[test]
    fn age_clamps_month_end() {
        let age = calendar_age(date(2001, 1, 31), date(2001, 3, 1)).unwrap();
        assert_eq!((age.years, age.months, age.days), (0, 1, 1));
    }

    #[test]
    fn age_before_birth_is_none() {
        assert!(calendar_age(date(2000, 1, 2), date(2000, 1, 1)).is_none());
    }

    #[test]
    fn age_on_birth_date_is_zero() {
        let age = calendar_age(date(2000, 2, 29), date(2000, 2, 29)).unwrap();
        assert_eq!((age.years, age.months, age.days), (0, 0, 0));
    }

    #[test]
    fn next_birthday_today() {
        let next = next_birthday(date(1985, 5, 3), date(2024, 5, 3), LeapDayPolicy::Feb28);
        assert_eq!(next, Some(NextBirthday::Today));
        assert_eq!(next.unwrap().to_string(), "Today!");
    }

    #[test]
    fn next_birthday_later_this_year() {
        let next = next_birthday(date(1985, 5, 3), date(2024, 5, 1), LeapDayPolicy::Feb28);
        assert_eq!(next, Some(NextBirthday::InDays(2)));
        assert_eq!(next.unwrap().to_string(), "2 days");
    }

    #[test]
    fn next_birthday_rolls_to_next_year() {
        let next = next_birthday(date(1985, 5, 3), date(2023, 5, 4), LeapDayPolicy::Feb28);
        assert_eq!(next, Some(NextBirthday::InDays(365)));
    }

    #[test]
    fn leap_day_birthday_in_common_year() {
        let birth = date(2000, 2, 29);
        assert_eq!(
            next_birthday(birth, date(2023, 2, 28), LeapDayPolicy::Feb28),
            Some(NextBirthday::Today)
        );
        assert_eq!(
            next_birthday(birth, date(2023, 2, 28), LeapDayPolicy::Mar1),
            Some(NextBirthday::InDays(1))
        );
        assert_eq!(
            next_birthday(birth, date(2023, 3, 1), LeapDayPolicy::Mar1),
            Some(NextBirthday::Today)
        );
    }

    #[test]
    fn leap_day_birthday_in_leap_year() {
        let birth = date(2000, 2, 29);
        assert_eq!(
            next_birthday(birth, date(2024, 2, 28), LeapDayPolicy::Feb28),
            Some(NextBirthday::InDays(1))
        );
        // 2024-03-01 -> 2025-02-28
        assert_eq!(
            next_birthday(birth, date(2024, 3, 1), LeapDayPolicy::Feb28),
            Some(NextBirthday::InDays(364))
        );
    }
}
