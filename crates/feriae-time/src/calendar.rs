//! `Calendar` trait: working-day queries on top of a holiday source.
//!
//! An implementor only has to say which dates are holidays; weekend handling,
//! date adjustment and working-day counting come from the default methods.

use feriae_core::errors::{Error, Result};

use crate::business_day_convention::BusinessDayConvention;
use crate::date::Date;
use crate::weekday::WeekdaySet;

/// A working-day calendar.
pub trait Calendar: std::fmt::Debug + Send + Sync {
    /// Human-readable name (e.g. `"Bosnia and Herzegovina (SRP)"`).
    fn name(&self) -> &str;

    /// Weekdays that are never working days.
    fn weekend(&self) -> WeekdaySet {
        WeekdaySet::SATURDAY_SUNDAY
    }

    /// Return `true` if `date` is a public holiday (weekends excluded).
    fn is_public_holiday(&self, date: Date) -> bool;

    /// Return `true` if `date` falls on a weekend day.
    fn is_weekend(&self, date: Date) -> bool {
        self.weekend().contains(date.weekday())
    }

    /// Return `true` if `date` is neither a weekend day nor a holiday.
    fn is_business_day(&self, date: Date) -> bool {
        !self.is_weekend(date) && !self.is_public_holiday(date)
    }

    /// Return `true` if `date` is not a working day.
    fn is_holiday(&self, date: Date) -> bool {
        !self.is_business_day(date)
    }

    /// Return `true` if `date` is the last working day of its month.
    fn is_end_of_month(&self, date: Date) -> bool {
        self.is_business_day(date) && self.end_of_month(date).is_ok_and(|eom| eom == date)
    }

    /// Return the last working day of the month containing `date`.
    ///
    /// # Errors
    /// As for [`adjust`](Self::adjust).
    fn end_of_month(&self, date: Date) -> Result<Date> {
        self.adjust(date.end_of_month(), BusinessDayConvention::Preceding)
    }

    /// Adjust `date` according to the given convention.
    ///
    /// # Errors
    /// [`Error::Date`] when no working day lies within
    /// [`MAX_BUSINESS_DAY_SEARCH`] days in the required direction, or the
    /// walk leaves the supported date range.
    fn adjust(&self, date: Date, convention: BusinessDayConvention) -> Result<Date> {
        match convention {
            BusinessDayConvention::Unadjusted => Ok(date),
            BusinessDayConvention::Following => first_business_day(self, date, 1),
            BusinessDayConvention::Preceding => first_business_day(self, date, -1),
            BusinessDayConvention::ModifiedFollowing => match first_business_day(self, date, 1) {
                Ok(adjusted) if adjusted.month() == date.month() => Ok(adjusted),
                _ => first_business_day(self, date, -1),
            },
            BusinessDayConvention::ModifiedPreceding => match first_business_day(self, date, -1) {
                Ok(adjusted) if adjusted.month() == date.month() => Ok(adjusted),
                _ => first_business_day(self, date, 1),
            },
            BusinessDayConvention::Nearest => {
                let fwd = first_business_day(self, date, 1);
                let bwd = first_business_day(self, date, -1);
                match (fwd, bwd) {
                    (Ok(f), Ok(b)) => Ok(if f - date <= date - b { f } else { b }),
                    (Ok(f), Err(_)) => Ok(f),
                    (Err(_), Ok(b)) => Ok(b),
                    (Err(e), Err(_)) => Err(e),
                }
            }
        }
    }

    /// Advance `date` by `n` working days (backwards when `n` is negative).
    ///
    /// # Errors
    /// As for [`adjust`](Self::adjust).
    fn advance_business_days(&self, date: Date, n: i32) -> Result<Date> {
        let step = if n >= 0 { 1 } else { -1 };
        let mut date = date;
        for _ in 0..n.unsigned_abs() {
            date = first_business_day(self, date.add_days(step)?, step)?;
        }
        Ok(date)
    }

    /// Count the working days between `d1` (exclusive) and `d2` (inclusive).
    /// Negative when `d2 < d1`.
    fn business_days_between(&self, d1: Date, d2: Date) -> i32 {
        let (start, end, sign) = if d2 >= d1 { (d1, d2, 1) } else { (d2, d1, -1) };
        let count = (1..=end - start)
            .filter_map(|k| start.add_days(k).ok())
            .filter(|&d| self.is_business_day(d))
            .count();
        sign * count as i32
    }
}

/// Longest run of non-working days a working-day walk crosses.
pub const MAX_BUSINESS_DAY_SEARCH: i32 = 366;

/// First working day at or after `from` (`step` = 1) or at or before it
/// (`step` = -1).
fn first_business_day<C: Calendar + ?Sized>(calendar: &C, from: Date, step: i32) -> Result<Date> {
    let mut date = from;
    for _ in 0..MAX_BUSINESS_DAY_SEARCH {
        if calendar.is_business_day(date) {
            return Ok(date);
        }
        date = date.add_days(step)?;
    }
    Err(Error::Date(format!(
        "{}: no working day within {MAX_BUSINESS_DAY_SEARCH} days of {from}",
        calendar.name()
    )))
}

/// A calendar with a weekend and no holidays.
#[derive(Debug, Clone, Copy)]
pub struct WeekendsOnly {
    weekend: WeekdaySet,
}

impl WeekendsOnly {
    /// Weekend-only calendar with the given weekend days.
    pub fn new(weekend: WeekdaySet) -> Self {
        Self { weekend }
    }
}

impl Default for WeekendsOnly {
    fn default() -> Self {
        Self::new(WeekdaySet::SATURDAY_SUNDAY)
    }
}

impl Calendar for WeekendsOnly {
    fn name(&self) -> &str {
        "Weekends Only"
    }

    fn weekend(&self) -> WeekdaySet {
        self.weekend
    }

    fn is_public_holiday(&self, _date: Date) -> bool {
        false
    }
}
