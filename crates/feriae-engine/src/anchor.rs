//! Rule anchors: how a rule finds its date(s) in a given year.

use feriae_core::Year;
use feriae_time::{easter_sunday, Date, EasterMethod, IslamicCalendar, IslamicFeast, Weekday};

/// The date source of a [`Rule`](crate::rule::Rule).
///
/// An anchor resolves to every date it produces *within* the evaluated
/// Gregorian year: usually one, zero when the date does not exist that year
/// (Feb 29 in a common year, a year outside the Hijri table), and two for
/// lunar feasts that recur within eleven days of a year's span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Anchor {
    /// A fixed Gregorian month and day.
    Fixed {
        /// Month (1–12).
        month: u8,
        /// Day of month.
        day: u8,
    },
    /// A fixed Julian-calendar month and day, placed on the Gregorian date
    /// it corresponds to (Orthodox Christmas is Julian December 25).
    Julian {
        /// Julian month (1–12).
        month: u8,
        /// Julian day of month.
        day: u8,
    },
    /// Easter Sunday plus `offset` days.
    Easter {
        /// Computus tradition.
        method: EasterMethod,
        /// Day offset from Easter Sunday (Good Friday is `-2`).
        offset: i32,
    },
    /// An Islamic feast plus `offset` days, taken from the entity's
    /// [`IslamicCalendar`].
    Islamic {
        /// The feast.
        feast: IslamicFeast,
        /// Day offset from the feast's first day.
        offset: i32,
    },
    /// The `n`-th `weekday` of `month`; `n == -1` is the last one.
    NthWeekday {
        /// Month (1–12).
        month: u8,
        /// Weekday.
        weekday: Weekday,
        /// Occurrence, 1–5, or -1 for the last.
        n: i8,
    },
    /// Explicit dates for rules with no closed form.
    Dates(Vec<Date>),
}

impl Anchor {
    /// Fixed Gregorian date.
    pub const fn fixed(month: u8, day: u8) -> Self {
        Anchor::Fixed { month, day }
    }

    /// Fixed Julian-calendar date.
    pub const fn julian(month: u8, day: u8) -> Self {
        Anchor::Julian { month, day }
    }

    /// Western (Gregorian computus) Easter plus `offset` days.
    pub const fn easter(offset: i32) -> Self {
        Anchor::Easter { method: EasterMethod::Western, offset }
    }

    /// Orthodox (Julian computus) Easter plus `offset` days.
    pub const fn orthodox_easter(offset: i32) -> Self {
        Anchor::Easter { method: EasterMethod::Orthodox, offset }
    }

    /// Islamic feast plus `offset` days.
    pub const fn islamic(feast: IslamicFeast, offset: i32) -> Self {
        Anchor::Islamic { feast, offset }
    }

    /// Resolve the anchor to its dates within `year`, in ascending order.
    pub fn resolve(&self, year: Year, islamic: &IslamicCalendar) -> Vec<Date> {
        match self {
            Anchor::Fixed { month, day } => Date::from_ymd(year, *month, *day).ok().into_iter().collect(),
            Anchor::Julian { month, day } => {
                // Julian dates run 10–13+ days behind, so a late-December
                // Julian date of the previous year can land in `year`.
                [year.checked_sub(1), Some(year)]
                    .into_iter()
                    .flatten()
                    .filter_map(|y| Date::from_julian_ymd(y, *month, *day).ok())
                    .filter(|d| d.year() == year)
                    .collect()
            }
            Anchor::Easter { method, offset } => [year.checked_sub(1), Some(year), year.checked_add(1)]
                .into_iter()
                .flatten()
                .filter_map(|y| easter_sunday(y, *method).ok())
                .filter_map(|e| e.add_days(*offset).ok())
                .filter(|d| d.year() == year)
                .collect(),
            Anchor::Islamic { feast, offset } => [year.checked_sub(1), Some(year), year.checked_add(1)]
                .into_iter()
                .flatten()
                .flat_map(|y| islamic.dates(y, *feast))
                .filter_map(|d| d.add_days(*offset).ok())
                .filter(|d| d.year() == year)
                .collect(),
            Anchor::NthWeekday { month, weekday, n } => {
                let found = match *n {
                    -1 => Date::last_weekday(*weekday, year, *month),
                    n @ 1..=5 => Date::nth_weekday(n as u8, *weekday, year, *month),
                    _ => return Vec::new(),
                };
                found.ok().into_iter().collect()
            }
            Anchor::Dates(dates) => {
                let mut out: Vec<Date> = dates.iter().copied().filter(|d| d.year() == year).collect();
                out.sort();
                out.dedup();
                out
            }
        }
    }
}
