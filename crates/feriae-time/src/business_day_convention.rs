//! Business-day conventions.

/// How to move a date that falls on a non-working day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BusinessDayConvention {
    /// The first working day after the date.
    Following,
    /// The first working day after the date unless it falls in the next
    /// month, in which case the first working day before it.
    ModifiedFollowing,
    /// The first working day before the date.
    Preceding,
    /// The first working day before the date unless it falls in the previous
    /// month, in which case the first working day after it.
    ModifiedPreceding,
    /// Leave the date alone.
    Unadjusted,
    /// The nearest working day; ties go forward.
    Nearest,
}

impl std::fmt::Display for BusinessDayConvention {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            BusinessDayConvention::Following => "Following",
            BusinessDayConvention::ModifiedFollowing => "Modified Following",
            BusinessDayConvention::Preceding => "Preceding",
            BusinessDayConvention::ModifiedPreceding => "Modified Preceding",
            BusinessDayConvention::Unadjusted => "Unadjusted",
            BusinessDayConvention::Nearest => "Nearest",
        };
        write!(f, "{s}")
    }
}
