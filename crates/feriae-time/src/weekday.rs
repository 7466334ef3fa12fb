//! Day-of-week enum, and [`WeekdaySet`] for weekend definitions.

/// Day of the week.
///
/// Variants are numbered 1–7 (Monday = 1, Sunday = 7), following ISO 8601.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Weekday {
    /// Monday (1).
    Monday = 1,
    /// Tuesday (2).
    Tuesday = 2,
    /// Wednesday (3).
    Wednesday = 3,
    /// Thursday (4).
    Thursday = 4,
    /// Friday (5).
    Friday = 5,
    /// Saturday (6).
    Saturday = 6,
    /// Sunday (7).
    Sunday = 7,
}

impl Weekday {
    /// All weekdays, Monday first.
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    /// Construct from the ISO ordinal (1 = Monday … 7 = Sunday).
    ///
    /// Returns `None` if the value is out of range.
    pub fn from_ordinal(n: u8) -> Option<Self> {
        match n {
            1..=7 => Some(Self::ALL[n as usize - 1]),
            _ => None,
        }
    }

    /// Return the ISO ordinal (1 = Monday … 7 = Sunday).
    pub fn ordinal(&self) -> u8 {
        *self as u8
    }

    /// Zero-based index (Monday = 0), used for per-weekday lookup tables.
    pub fn index(&self) -> usize {
        *self as usize - 1
    }

    /// The following day of the week.
    pub fn succ(&self) -> Self {
        Self::ALL[(self.index() + 1) % 7]
    }

    /// The preceding day of the week.
    pub fn pred(&self) -> Self {
        Self::ALL[(self.index() + 6) % 7]
    }
}

impl std::fmt::Display for Weekday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        };
        write!(f, "{name}")
    }
}

/// A set of weekdays, stored as a 7-bit mask.
///
/// Entities use it to declare their non-working days; most use
/// [`WeekdaySet::SATURDAY_SUNDAY`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct WeekdaySet(u8);

impl WeekdaySet {
    /// The empty set.
    pub const EMPTY: WeekdaySet = WeekdaySet(0);

    /// Saturday and Sunday.
    pub const SATURDAY_SUNDAY: WeekdaySet = WeekdaySet(0b110_0000);

    /// Friday and Saturday.
    pub const FRIDAY_SATURDAY: WeekdaySet = WeekdaySet(0b011_0000);

    /// Build a set from a slice of weekdays.
    pub fn from_days(days: &[Weekday]) -> Self {
        days.iter().fold(Self::EMPTY, |set, &d| set.with(d))
    }

    /// Return a copy of the set with `day` added.
    pub const fn with(self, day: Weekday) -> Self {
        WeekdaySet(self.0 | 1 << (day as u8 - 1))
    }

    /// Whether `day` belongs to the set.
    pub fn contains(&self, day: Weekday) -> bool {
        self.0 & (1 << day.index()) != 0
    }

    /// Number of days in the set.
    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Iterate the members, Monday first.
    pub fn iter(&self) -> impl Iterator<Item = Weekday> + '_ {
        Weekday::ALL.into_iter().filter(|d| self.contains(*d))
    }
}
