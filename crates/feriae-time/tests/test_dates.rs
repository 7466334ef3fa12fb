//! Integration tests for `Date`, `DateRange` and the movable-feast helpers.

use feriae_time::date::{days_in_month, is_leap_year};
use feriae_time::islamic::{self, IslamicFeast};
use feriae_time::{easter_sunday, Date, DateRange, EasterMethod, Month, Weekday};
use proptest::prelude::*;

fn date(y: u16, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

// ─── Serial consistency ───────────────────────────────────────────────────────

#[test]
fn consecutive_serials_walk_the_calendar() {
    let mut d = date(1899, 12, 31);
    let end = date(2101, 1, 1);
    let mut prev_weekday = d.weekday();
    while d < end {
        let next = d + 1;
        assert_eq!(next - d, 1);
        assert_eq!(next.weekday(), prev_weekday.succ());
        let (y, m, day) = d.ymd();
        if day == days_in_month(y, m) {
            assert_eq!(next.day_of_month(), 1, "{d} is the last day of its month");
        } else {
            assert_eq!(next.ymd(), (y, m, day + 1));
        }
        prev_weekday = next.weekday();
        d = next;
    }
}

#[test]
fn leap_years() {
    assert!(is_leap_year(2000));
    assert!(is_leap_year(2024));
    assert!(!is_leap_year(1900));
    assert!(!is_leap_year(2023));
    assert_eq!(Month::February.days(2024), 29);
}

#[test]
fn year_range_covers_every_day() {
    let r = DateRange::year(2024).unwrap();
    assert_eq!(r.len(), 366);
    assert_eq!(r.iter().filter(|d| d.weekday() == Weekday::Sunday).count(), 52);
}

// ─── Movable feasts ───────────────────────────────────────────────────────────

#[test]
fn easter_monday_2021() {
    let western = easter_sunday(2021, EasterMethod::Western).unwrap() + 1;
    let orthodox = easter_sunday(2021, EasterMethod::Orthodox).unwrap() + 1;
    assert_eq!(western, date(2021, 4, 5));
    assert_eq!(orthodox, date(2021, 5, 3));
}

#[test]
fn islamic_feasts_stay_in_their_year() {
    for year in islamic::covered_years() {
        for d in islamic::estimate(year, IslamicFeast::EidAlAdha) {
            assert_eq!(d.year(), year);
        }
    }
}

// ─── Properties ───────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn ymd_round_trips_through_serial(serial in Date::MIN.serial()..=Date::MAX.serial()) {
        let d = Date::from_serial(serial).unwrap();
        let (y, m, day) = d.ymd();
        prop_assert_eq!(Date::from_ymd(y, m, day).unwrap(), d);
    }

    #[test]
    fn display_parses_back(serial in Date::MIN.serial()..=Date::MAX.serial()) {
        let d = Date::from_serial(serial).unwrap();
        prop_assert_eq!(d.to_string().parse::<Date>().unwrap(), d);
    }

    #[test]
    fn julian_offset_grows_by_century(year in 1583u16..=4000) {
        // The Julian calendar loses 3 days every 400 years against the Gregorian.
        let gregorian = date(year, 3, 1);
        let julian = Date::from_julian_ymd(year, 3, 1).unwrap();
        let expected = (year / 100) as i32 - (year / 400) as i32 - 2;
        prop_assert_eq!(julian - gregorian, expected);
    }

    #[test]
    fn nth_weekday_lands_in_month(year in 1900u16..2100, month in 1u8..=12, n in 1u8..=4, wd in 1u8..=7) {
        let weekday = Weekday::from_ordinal(wd).unwrap();
        let d = Date::nth_weekday(n, weekday, year, month).unwrap();
        prop_assert_eq!(d.weekday(), weekday);
        prop_assert_eq!(d.month(), month);
        prop_assert_eq!((d.day_of_month() - 1) / 7 + 1, n);
    }
}
