//! Easter computus.
//!
//! Both traditions are closed-form: no lookup table is involved.
//!
//! * **Western**: the Gregorian computus (Meeus/Jones/Butcher form), valid
//!   for every year from 1583 onward.
//! * **Orthodox**: the Julian computus, whose Julian-calendar result is
//!   converted to the Gregorian date it falls on.

use crate::date::Date;
use feriae_core::errors::{Error, Result};
use feriae_core::Year;

/// First year of the Gregorian calendar.
pub const FIRST_GREGORIAN_YEAR: Year = 1583;

/// Calendar tradition used to compute Easter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EasterMethod {
    /// Catholic and Protestant churches (Gregorian computus).
    Western,
    /// Eastern Orthodox churches (Julian computus).
    Orthodox,
}

/// Return the Gregorian date of Easter Sunday in `year`.
///
/// # Errors
/// Returns an error for years before 1583 with [`EasterMethod::Western`],
/// and for years before 326 with [`EasterMethod::Orthodox`].
pub fn easter_sunday(year: Year, method: EasterMethod) -> Result<Date> {
    match method {
        EasterMethod::Western => western(year),
        EasterMethod::Orthodox => orthodox(year),
    }
}

fn western(year: Year) -> Result<Date> {
    if year < FIRST_GREGORIAN_YEAR {
        return Err(Error::Date(format!(
            "Gregorian computus is undefined for {year}"
        )));
    }
    let y = year as i32;
    let a = y % 19;
    let b = y / 100;
    let c = y % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let month = (h + l - 7 * m + 114) / 31;
    let day = (h + l - 7 * m + 114) % 31 + 1;
    Date::from_ymd(year, month as u8, day as u8)
}

fn orthodox(year: Year) -> Result<Date> {
    if year < 326 {
        return Err(Error::Date(format!("Julian computus is undefined for {year}")));
    }
    let y = year as i32;
    let a = y % 4;
    let b = y % 7;
    let c = y % 19;
    let d = (19 * c + 15) % 30;
    let e = (2 * a + 4 * b - d + 34) % 7;
    let month = (d + e + 114) / 31;
    let day = (d + e + 114) % 31 + 1;
    Date::from_julian_ymd(year, month as u8, day as u8)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::weekday::Weekday;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn western_known_dates() {
        let known = [
            (1583, 4, 10),
            (1818, 3, 22),
            (1943, 4, 25),
            (2000, 4, 23),
            (2019, 4, 21),
            (2021, 4, 4),
            (2024, 3, 31),
            (2038, 4, 25),
        ];
        for (y, m, d) in known {
            assert_eq!(easter_sunday(y, EasterMethod::Western).unwrap(), date(y, m, d));
        }
    }

    #[test]
    fn orthodox_known_dates() {
        let known = [
            (2012, 4, 15),
            (2016, 5, 1),
            (2019, 4, 28),
            (2021, 5, 2),
            (2023, 4, 16),
            (2024, 5, 5),
        ];
        for (y, m, d) in known {
            assert_eq!(easter_sunday(y, EasterMethod::Orthodox).unwrap(), date(y, m, d));
        }
    }

    #[test]
    fn traditions_can_coincide() {
        assert_eq!(
            easter_sunday(2017, EasterMethod::Western).unwrap(),
            easter_sunday(2017, EasterMethod::Orthodox).unwrap()
        );
    }

    #[test]
    fn rejects_pre_gregorian_years() {
        assert!(easter_sunday(1582, EasterMethod::Western).is_err());
        assert!(easter_sunday(1582, EasterMethod::Orthodox).is_ok());
    }

    #[test]
    fn always_a_sunday() {
        for y in 1583..=2300 {
            for method in [EasterMethod::Western, EasterMethod::Orthodox] {
                let e = easter_sunday(y, method).unwrap();
                assert_eq!(e.weekday(), Weekday::Sunday, "{method:?} {y}");
            }
        }
    }
}
