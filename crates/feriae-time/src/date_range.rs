//! Inclusive date ranges.

use crate::date::Date;
use feriae_core::errors::Result;
use feriae_core::{ensure, Year};

/// An inclusive range of dates, `[start, end]`, iterable day by day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateRange {
    start: Date,
    end: Date,
}

impl DateRange {
    /// Create the range `[start, end]`.
    ///
    /// # Errors
    /// Returns an error if `end < start`.
    pub fn new(start: Date, end: Date) -> Result<Self> {
        ensure!(start <= end, "date range end {end} precedes start {start}");
        Ok(Self { start, end })
    }

    /// The whole Gregorian `year`.
    pub fn year(year: Year) -> Result<Self> {
        Self::new(Date::from_ymd(year, 1, 1)?, Date::from_ymd(year, 12, 31)?)
    }

    /// First date of the range.
    pub fn start(&self) -> Date {
        self.start
    }

    /// Last date of the range.
    pub fn end(&self) -> Date {
        self.end
    }

    /// Number of days in the range.
    pub fn len(&self) -> usize {
        (self.end - self.start) as usize + 1
    }

    /// Always `false`: an inclusive range holds at least one day.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Whether `date` lies inside the range.
    pub fn contains(&self, date: Date) -> bool {
        self.start <= date && date <= self.end
    }

    /// Iterate every date in the range.
    pub fn iter(&self) -> DateRangeIter {
        DateRangeIter {
            next: Some(self.start),
            end: self.end,
        }
    }
}

impl IntoIterator for DateRange {
    type Item = Date;
    type IntoIter = DateRangeIter;

    fn into_iter(self) -> DateRangeIter {
        self.iter()
    }
}

/// Iterator over a [`DateRange`].
#[derive(Debug, Clone)]
pub struct DateRangeIter {
    next: Option<Date>,
    end: Date,
}

impl Iterator for DateRangeIter {
    type Item = Date;

    fn next(&mut self) -> Option<Date> {
        let current = self.next?;
        self.next = if current < self.end {
            current.add_days(1).ok()
        } else {
            None
        };
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.next.map_or(0, |d| (self.end - d) as usize + 1);
        (n, Some(n))
    }
}

impl ExactSizeIterator for DateRangeIter {}
