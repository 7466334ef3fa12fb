//! `Date` type.
//!
//! Dates are a serial number of days counted from **1970-01-01** in the
//! proleptic Gregorian calendar.
//!
//! # Serial number convention
//! * Serial 0 is 1970-01-01; earlier dates have negative serials.
//! * The valid date range is 0001-01-01 to 9999-12-31.
//! * Julian-calendar dates are converted on construction through
//!   [`Date::from_julian_ymd`]; a `Date` is always Gregorian.

use std::str::FromStr;

use crate::month::Month;
use crate::weekday::Weekday;
use feriae_core::errors::{Error, Result};
use feriae_core::Year;

/// A Gregorian calendar date represented as a day serial.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date(i32);

// ── Constants ─────────────────────────────────────────────────────────────────

/// Julian Day Number of 1970-01-01.
const JDN_UNIX_EPOCH: i32 = 2_440_588;

impl Date {
    /// Minimum valid date: January 1, 0001.
    pub const MIN: Date = Date(-719_162);

    /// Maximum valid date: December 31, 9999.
    pub const MAX: Date = Date(2_932_896);

    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a date from a serial number (days since 1970-01-01).
    pub fn from_serial(serial: i32) -> Result<Self> {
        let d = Date(serial);
        if d < Self::MIN || d > Self::MAX {
            return Err(Error::Date(format!("serial {serial} out of range")));
        }
        Ok(d)
    }

    /// Create a date from year, month (1–12), and day-of-month (1–31).
    pub fn from_ymd(year: Year, month: u8, day: u8) -> Result<Self> {
        check_ymd(year, month, day)?;
        Ok(Date(days_from_civil(year as i32, month as i32, day as i32)))
    }

    /// Create a date from a day in the **Julian** calendar.
    ///
    /// `Date::from_julian_ymd(2020, 12, 25)` is 2021-01-07, the Gregorian
    /// date of Orthodox Christmas.
    pub fn from_julian_ymd(year: Year, month: u8, day: u8) -> Result<Self> {
        if year == 0 || !(1..=12).contains(&month) {
            return Err(Error::Date(format!(
                "invalid Julian date {year:04}-{month:02}-{day:02}"
            )));
        }
        let days_in = julian_days_in_month(year, month);
        if day == 0 || day > days_in {
            return Err(Error::Date(format!(
                "day {day} out of range [1, {days_in}] for Julian {year}-{month:02}"
            )));
        }
        let (y, m, d) = (year as i32, month as i32, day as i32);
        let a = (14 - m) / 12;
        let y = y + 4800 - a;
        let m = m + 12 * a - 3;
        let jdn = d + (153 * m + 2) / 5 + 365 * y + y / 4 - 32_083;
        Self::from_serial(jdn - JDN_UNIX_EPOCH)
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Return the serial number.
    pub fn serial(&self) -> i32 {
        self.0
    }

    /// Return `(year, month, day)`.
    pub fn ymd(&self) -> (Year, u8, u8) {
        let (y, m, d) = civil_from_days(self.0);
        (y as Year, m as u8, d as u8)
    }

    /// Return the year (1–9999).
    pub fn year(&self) -> Year {
        self.ymd().0
    }

    /// Return the month number (1–12).
    pub fn month(&self) -> u8 {
        self.ymd().1
    }

    /// Return the month as a [`Month`].
    pub fn month_of_year(&self) -> Month {
        Month::ALL[self.month() as usize - 1]
    }

    /// Return the day of the month (1–31).
    pub fn day_of_month(&self) -> u8 {
        self.ymd().2
    }

    /// Return the day of the year (1–366).
    pub fn day_of_year(&self) -> u16 {
        let (y, _, _) = civil_from_days(self.0);
        (self.0 - days_from_civil(y, 1, 1) + 1) as u16
    }

    /// Return the weekday.
    pub fn weekday(&self) -> Weekday {
        // 1970-01-01 was a Thursday (ordinal 4).
        let w = ((self.0 + 3).rem_euclid(7) + 1) as u8;
        Weekday::from_ordinal(w).expect("rem_euclid always in 1..=7")
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// Advance by `n` days.  Returns an error if the result is out of range.
    pub fn add_days(self, n: i32) -> Result<Self> {
        let serial = self
            .0
            .checked_add(n)
            .ok_or_else(|| Error::Date("date arithmetic overflow".into()))?;
        Self::from_serial(serial)
    }

    /// Return the number of calendar days between `self` and `other`.
    /// Positive if `other > self`.
    pub fn days_between(self, other: Date) -> i32 {
        other.0 - self.0
    }

    /// Return the last day of the month containing this date.
    pub fn end_of_month(self) -> Self {
        let (y, m, _) = self.ymd();
        Date(days_from_civil(
            y as i32,
            m as i32,
            days_in_month(y, m) as i32,
        ))
    }

    /// Return the first date strictly after `self` that falls on `weekday`.
    pub fn next_weekday(self, weekday: Weekday) -> Result<Self> {
        let gap = (weekday.ordinal() as i32 - self.weekday().ordinal() as i32).rem_euclid(7);
        self.add_days(if gap == 0 { 7 } else { gap })
    }

    /// Return the last date strictly before `self` that falls on `weekday`.
    pub fn previous_weekday(self, weekday: Weekday) -> Result<Self> {
        let gap = (self.weekday().ordinal() as i32 - weekday.ordinal() as i32).rem_euclid(7);
        self.add_days(-(if gap == 0 { 7 } else { gap }))
    }

    /// Return the *n*-th occurrence of `weekday` in the month of `year`/`month`.
    ///
    /// For example, `nth_weekday(3, Weekday::Wednesday, 2024, 3)` returns the
    /// third Wednesday of March 2024 (2024-03-20).
    ///
    /// # Errors
    /// [`Error::InvalidArgument`] if `n` is outside 1..=5, and
    /// [`Error::Date`] if the month has fewer than `n` such weekdays.
    pub fn nth_weekday(n: u8, weekday: Weekday, year: Year, month: u8) -> Result<Self> {
        if !(1..=5).contains(&n) {
            return Err(Error::InvalidArgument(format!("nth_weekday: n = {n} outside 1..=5")));
        }
        let first = Date::from_ymd(year, month, 1)?;
        let skip = (weekday.ordinal() as i32 - first.weekday().ordinal() as i32).rem_euclid(7);
        let day = 1 + skip + 7 * (i32::from(n) - 1);
        if day > i32::from(days_in_month(year, month)) {
            return Err(Error::Date(format!(
                "nth_weekday: {n}-th {weekday} does not exist in {year}-{month:02}"
            )));
        }
        first.add_days(day - 1)
    }

    /// Return the last occurrence of `weekday` in the month of `year`/`month`.
    pub fn last_weekday(weekday: Weekday, year: Year, month: u8) -> Result<Self> {
        let last = Date::from_ymd(year, month, days_in_month(year, month))?;
        let back = (last.weekday().ordinal() as i32 - weekday.ordinal() as i32).rem_euclid(7);
        last.add_days(-back)
    }
}

// ── Arithmetic operators ──────────────────────────────────────────────────────

/// # Panics
/// When the result leaves the supported range; use [`Date::add_days`] to
/// handle that case.
impl std::ops::Add<i32> for Date {
    type Output = Self;
    fn add(self, rhs: i32) -> Self {
        self.add_days(rhs).expect("date addition overflow")
    }
}

/// # Panics
/// When the result leaves the supported range.
impl std::ops::Sub<i32> for Date {
    type Output = Self;
    fn sub(self, rhs: i32) -> Self {
        self.add_days(-rhs).expect("date subtraction underflow")
    }
}

impl std::ops::Sub<Date> for Date {
    type Output = i32;
    fn sub(self, rhs: Date) -> i32 {
        self.0 - rhs.0
    }
}

impl std::ops::AddAssign<i32> for Date {
    fn add_assign(&mut self, rhs: i32) {
        *self = *self + rhs;
    }
}

// ── Display / parsing ─────────────────────────────────────────────────────────

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (y, m, d) = self.ymd();
        write!(f, "{y:04}-{m:02}-{d:02}")
    }
}

impl std::fmt::Debug for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Date({self})")
    }
}

impl FromStr for Date {
    type Err = Error;

    /// Parse an ISO 8601 calendar date (`YYYY-MM-DD`).
    fn from_str(s: &str) -> Result<Self> {
        let parts: Vec<&str> = s.trim().split('-').collect();
        let [y, m, d] = parts.as_slice() else {
            return Err(Error::Date(format!("expected YYYY-MM-DD, found {s:?}")));
        };
        let parse = |p: &str| {
            p.parse::<u16>()
                .map_err(|_| Error::Date(format!("invalid number {p:?} in {s:?}")))
        };
        let month = u8::try_from(parse(m)?).map_err(|_| Error::Date(format!("bad month in {s:?}")))?;
        let day = u8::try_from(parse(d)?).map_err(|_| Error::Date(format!("bad day in {s:?}")))?;
        Date::from_ymd(parse(y)?, month, day)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Date {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Date {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = <std::borrow::Cow<'de, str>>::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(feature = "chrono")]
impl From<Date> for chrono::NaiveDate {
    fn from(d: Date) -> Self {
        let (y, m, day) = d.ymd();
        chrono::NaiveDate::from_ymd_opt(y as i32, m as u32, day as u32)
            .expect("every Date is representable as NaiveDate")
    }
}

#[cfg(feature = "chrono")]
impl TryFrom<chrono::NaiveDate> for Date {
    type Error = Error;

    fn try_from(d: chrono::NaiveDate) -> Result<Self> {
        use chrono::Datelike;
        let year = Year::try_from(d.year())
            .map_err(|_| Error::Date(format!("year {} out of range", d.year())))?;
        Date::from_ymd(year, d.month() as u8, d.day() as u8)
    }
}

// ── Calendar helpers ──────────────────────────────────────────────────────────

/// Whether a given year is a Gregorian leap year.
pub fn is_leap_year(year: Year) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a given Gregorian month.
pub fn days_in_month(year: Year, month: u8) -> u8 {
    debug_assert!((1..=12).contains(&month));
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        _ if is_leap_year(year) => 29,
        _ => 28,
    }
}

fn julian_days_in_month(year: Year, month: u8) -> u8 {
    match month {
        2 if year % 4 == 0 => 29,
        2 => 28,
        _ => days_in_month(year, month),
    }
}

fn check_ymd(year: Year, month: u8, day: u8) -> Result<()> {
    if !(1..=9999).contains(&year) {
        return Err(Error::Date(format!("year {year} out of range [1, 9999]")));
    }
    if !(1..=12).contains(&month) {
        return Err(Error::Date(format!("month {month} out of range [1, 12]")));
    }
    let days_in = days_in_month(year, month);
    if day == 0 || day > days_in {
        return Err(Error::Date(format!(
            "day {day} out of range [1, {days_in}] for {year}-{month:02}"
        )));
    }
    Ok(())
}

/// Days since 1970-01-01 for a proleptic Gregorian (year, month, day).
fn days_from_civil(y: i32, m: i32, d: i32) -> i32 {
    let y = if m <= 2 { y - 1 } else { y };
    let era = y.div_euclid(400);
    let yoe = y - era * 400;
    let mp = (m + 9) % 12;
    let doy = (153 * mp + 2) / 5 + d - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146_097 + doe - 719_468
}

/// Inverse of [`days_from_civil`].
fn civil_from_days(z: i32) -> (i32, i32, i32) {
    let z = z + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z - era * 146_097;
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let d = doy - (153 * mp + 2) / 5 + 1;
    let m = if mp < 10 { mp + 3 } else { mp - 9 };
    let y = yoe + era * 400 + i32::from(m <= 2);
    (y, m, d)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
