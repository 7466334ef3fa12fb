//! # feriae-time
//!
//! Date arithmetic primitives and the movable-feast calculators the holiday
//! engine anchors its rules on.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Business-day adjustment conventions.
pub mod business_day_convention;

/// Business-day `Calendar` trait.
pub mod calendar;

/// `Date` type.
pub mod date;

/// Inclusive date ranges.
pub mod date_range;

/// Easter computus (Western and Orthodox).
pub mod easter;

/// Hijri calendar lookup table and Islamic feast estimation.
pub mod islamic;

mod islamic_data;

/// Month of the year.
pub mod month;

/// Day of the week, and weekday sets.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use business_day_convention::BusinessDayConvention;
pub use calendar::{Calendar, WeekendsOnly};
pub use date::Date;
pub use date_range::DateRange;
pub use easter::{easter_sunday, EasterMethod};
pub use islamic::{IslamicCalendar, IslamicFeast};
pub use month::Month;
pub use weekday::{Weekday, WeekdaySet};
