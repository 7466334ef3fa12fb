//! Islamic (Hijri) feast estimation.
//!
//! Arithmetic Hijri conversion drifts from locally announced dates by up to
//! two days, so conversion goes through a precomputed table of Hijri years
//! (see `islamic_data`).  The table covers Gregorian years 1925–2076; outside
//! that window every lookup yields an empty set, which callers must read as
//! "unknown", not "absent".
//!
//! A Hijri year is about eleven days shorter than a Gregorian one, so a feast
//! may occur twice in one Gregorian year (Eid al-Adha in 2006: January 10 and
//! December 31), and consequently every lookup returns a list.

use std::collections::BTreeMap;
use std::ops::RangeInclusive;

use crate::date::Date;
use crate::islamic_data::{FIRST_HIJRI_YEAR, HIJRI_YEARS};
use feriae_core::Year;

/// Islamic feasts with a fixed Hijri date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum IslamicFeast {
    /// 1 Muharram.
    IslamicNewYear,
    /// 10 Muharram.
    Ashura,
    /// 12 Rabi al-Awwal.
    MawlidAnNabi,
    /// 1 Ramadan.
    RamadanBeginning,
    /// 1 Shawwal.
    EidAlFitr,
    /// 9 Dhu al-Hijjah.
    ArafahDay,
    /// 10 Dhu al-Hijjah.
    EidAlAdha,
}

impl IslamicFeast {
    /// The feast's Hijri `(month, day)`.
    pub fn hijri_month_day(&self) -> (u8, u8) {
        match self {
            IslamicFeast::IslamicNewYear => (1, 1),
            IslamicFeast::Ashura => (1, 10),
            IslamicFeast::MawlidAnNabi => (3, 12),
            IslamicFeast::RamadanBeginning => (9, 1),
            IslamicFeast::EidAlFitr => (10, 1),
            IslamicFeast::ArafahDay => (12, 9),
            IslamicFeast::EidAlAdha => (12, 10),
        }
    }
}

/// Gregorian years fully covered by the Hijri table.
pub fn covered_years() -> RangeInclusive<Year> {
    1925..=2076
}

/// Convert a Hijri date to its Gregorian date.
///
/// Returns `None` when the Hijri year is outside the table or the month/day
/// does not exist.
pub fn hijri_to_gregorian(year: u16, month: u8, day: u8) -> Option<Date> {
    let row = HIJRI_YEARS.get(year.checked_sub(FIRST_HIJRI_YEAR)? as usize)?;
    let (_, gy, gm, gd, mask) = *row;
    if !(1..=12).contains(&month) || day == 0 || day > month_length(mask, month) {
        return None;
    }
    let before: i32 = (1..month).map(|m| month_length(mask, m) as i32).sum();
    Date::from_ymd(gy, gm, gd)
        .and_then(|start| start.add_days(before + day as i32 - 1))
        .ok()
}

/// Estimated Gregorian dates of `feast` within `year` (zero, one or two).
pub fn estimate(year: Year, feast: IslamicFeast) -> Vec<Date> {
    if !covered_years().contains(&year) {
        return Vec::new();
    }
    let (month, day) = feast.hijri_month_day();
    HIJRI_YEARS
        .iter()
        .filter(|row| row.1 + 1 == year || row.1 == year)
        .filter_map(|row| hijri_to_gregorian(row.0, month, day))
        .filter(|d| d.year() == year)
        .collect()
}

fn month_length(mask: u16, month: u8) -> u8 {
    if mask & (1 << (month - 1)) != 0 {
        30
    } else {
        29
    }
}

/// Islamic feast source for one jurisdiction.
///
/// Falls back to the table [`estimate`] unless the jurisdiction's religious
/// authority announced different dates for a Gregorian year, in which case
/// those dates replace the estimate for that year.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IslamicCalendar {
    overrides: BTreeMap<(IslamicFeast, Year), Vec<Date>>,
}

impl IslamicCalendar {
    /// A calendar that always uses the table estimate.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the estimate of `feast` for every year in which `dates` has
    /// an entry.
    pub fn with_override(mut self, feast: IslamicFeast, dates: &[Date]) -> Self {
        for &d in dates {
            let slot = self.overrides.entry((feast, d.year())).or_default();
            if !slot.contains(&d) {
                slot.push(d);
                slot.sort();
            }
        }
        self
    }

    /// Whether `feast` in `year` comes from an announced date rather than the
    /// table estimate.
    pub fn is_announced(&self, year: Year, feast: IslamicFeast) -> bool {
        self.overrides.contains_key(&(feast, year))
    }

    /// Dates of `feast` within `year`, announced dates first.
    pub fn dates(&self, year: Year, feast: IslamicFeast) -> Vec<Date> {
        match self.overrides.get(&(feast, year)) {
            Some(dates) => dates.clone(),
            None => estimate(year, feast),
        }
    }
}
