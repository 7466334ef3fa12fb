//! Observed-date shift policies.
//!
//! When a holiday lands on a non-working weekday, many jurisdictions grant a
//! substitute day.  Which weekdays trigger a substitute, where it goes and
//! whether it replaces the canonical date differ between jurisdictions,
//! between holidays of one jurisdiction, between subdivisions, and sometimes
//! between single years (decrees), so the policy is data attached to each
//! [`Rule`](crate::rule::Rule):
//!
//! * [`Shift`] says where one occurrence moves;
//! * [`ShiftRule`] maps each weekday to an optional `Shift`;
//! * [`ObservedPolicy`] adds the validity window, excluded years, per-year
//!   overrides, shared-date suppression and the [`ObservedMode`].
//!
//! Workday-seeking shifts skip weekend days, every raw holiday date of the
//! query and every observed date already placed, so a cluster of holidays
//! around a weekend cascades onto consecutive working days.

use std::collections::BTreeSet;

use feriae_core::Year;
use feriae_time::{Date, Weekday, WeekdaySet};

use crate::rule::{Rule, YearRange};
use crate::rule_set::RawHoliday;

/// Longest run of days a workday search may cover before giving up.
const MAX_WORKDAY_SEARCH: i32 = 366;

// ── Shift ─────────────────────────────────────────────────────────────────────

/// Where a single occurrence moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shift {
    /// A fixed number of days (negative moves backwards), regardless of
    /// what is already on the target date.
    Days(i32),
    /// The first later day that is neither weekend nor holiday.
    NextWorkday,
    /// The last earlier day that is neither weekend nor holiday.
    PreviousWorkday,
}

// ── ShiftRule ─────────────────────────────────────────────────────────────────

/// Per-weekday shift table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ShiftRule {
    shifts: [Option<Shift>; 7],
}

impl ShiftRule {
    /// No weekday shifts.
    pub const NONE: ShiftRule = ShiftRule { shifts: [None; 7] };

    /// Shift occurrences on `weekday` by `shift`.
    pub const fn on(mut self, weekday: Weekday, shift: Shift) -> Self {
        self.shifts[weekday as usize - 1] = Some(shift);
        self
    }

    /// Sunday moves to Monday.
    pub const fn sunday_to_monday() -> Self {
        Self::NONE.on(Weekday::Sunday, Shift::Days(1))
    }

    /// Sunday moves to the next working day.
    pub const fn sunday_to_next_workday() -> Self {
        Self::NONE.on(Weekday::Sunday, Shift::NextWorkday)
    }

    /// Saturday and Sunday both move to Monday.
    pub const fn weekend_to_monday() -> Self {
        Self::NONE
            .on(Weekday::Saturday, Shift::Days(2))
            .on(Weekday::Sunday, Shift::Days(1))
    }

    /// Saturday moves back to Friday, Sunday forward to Monday.
    pub const fn saturday_to_friday_sunday_to_monday() -> Self {
        Self::NONE
            .on(Weekday::Saturday, Shift::Days(-1))
            .on(Weekday::Sunday, Shift::Days(1))
    }

    /// Saturday and Sunday both move to the next working day.
    pub const fn weekend_to_next_workday() -> Self {
        Self::NONE
            .on(Weekday::Saturday, Shift::NextWorkday)
            .on(Weekday::Sunday, Shift::NextWorkday)
    }

    /// The shift for occurrences on `weekday`, if any.
    pub fn shift_for(&self, weekday: Weekday) -> Option<Shift> {
        self.shifts[weekday.index()]
    }

    /// Whether no weekday shifts.
    pub fn is_empty(&self) -> bool {
        self.shifts.iter().all(Option::is_none)
    }
}

// ── ObservedPolicy ────────────────────────────────────────────────────────────

/// Whether a substitute day is granted in addition to, or instead of, the
/// canonical date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ObservedMode {
    /// Keep the canonical entry and add the observed one.
    #[default]
    Add,
    /// Drop the canonical entry when it is shifted.
    Replace,
}

/// Observed-date policy attached to one rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservedPolicy {
    rule: ShiftRule,
    mode: ObservedMode,
    years: YearRange,
    except_years: Vec<Year>,
    year_rules: Vec<(Year, ShiftRule)>,
    skip_shared: bool,
}

impl ObservedPolicy {
    /// A policy in force every year, in [`ObservedMode::Add`] mode.
    pub fn new(rule: ShiftRule) -> Self {
        Self {
            rule,
            mode: ObservedMode::Add,
            years: YearRange::ALL,
            except_years: Vec::new(),
            year_rules: Vec::new(),
            skip_shared: false,
        }
    }

    /// Set the mode.
    pub fn mode(mut self, mode: ObservedMode) -> Self {
        self.mode = mode;
        self
    }

    /// Restrict the policy to `years`.
    pub fn years(mut self, years: YearRange) -> Self {
        self.years = years;
        self
    }

    /// Grant no substitute in the listed years.
    pub fn except_years(mut self, years: &[Year]) -> Self {
        self.except_years.extend_from_slice(years);
        self
    }

    /// Grant no substitute when another holiday falls on the same date.
    pub fn unless_shared(mut self) -> Self {
        self.skip_shared = true;
        self
    }

    /// Use `rule` instead of the default shift table in `year`.
    pub fn with_year_rule(mut self, year: Year, rule: ShiftRule) -> Self {
        self.year_rules.retain(|(y, _)| *y != year);
        self.year_rules.push((year, rule));
        self
    }

    /// The policy's mode.
    pub fn observed_mode(&self) -> ObservedMode {
        self.mode
    }

    /// The shift table in force for an occurrence in `year`, if any.
    pub fn shift_rule(&self, year: Year) -> Option<&ShiftRule> {
        if !self.years.contains(year) || self.except_years.contains(&year) {
            return None;
        }
        Some(
            self.year_rules
                .iter()
                .find(|(y, _)| *y == year)
                .map_or(&self.rule, |(_, rule)| rule),
        )
    }

    /// The observed date for an occurrence on `date`, if the policy moves it.
    pub(crate) fn target(&self, date: Date, days: &ShiftContext) -> Option<Date> {
        let shift = self.shift_rule(date.year())?.shift_for(date.weekday())?;
        match shift {
            Shift::Days(0) => None,
            Shift::Days(n) => date.add_days(n).ok(),
            Shift::NextWorkday => days.find_workday(date, 1),
            Shift::PreviousWorkday => days.find_workday(date, -1),
        }
    }
}

// ── Shifting ──────────────────────────────────────────────────────────────────

/// Working-day knowledge available to workday-seeking shifts.
#[derive(Debug)]
pub(crate) struct ShiftContext {
    weekend: WeekdaySet,
    taken: BTreeSet<Date>,
}

impl ShiftContext {
    pub(crate) fn new(weekend: WeekdaySet, raw: &[RawHoliday]) -> Self {
        Self { weekend, taken: raw.iter().map(|h| h.date).collect() }
    }

    fn is_free(&self, date: Date) -> bool {
        !self.weekend.contains(date.weekday()) && !self.taken.contains(&date)
    }

    fn find_workday(&self, from: Date, step: i32) -> Option<Date> {
        (1..=MAX_WORKDAY_SEARCH)
            .filter_map(|i| from.add_days(i * step).ok())
            .find(|d| self.is_free(*d))
    }

    fn take(&mut self, date: Date) {
        self.taken.insert(date);
    }
}

/// One observed substitution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ObservedShift {
    pub(crate) from: Date,
    pub(crate) to: Date,
    pub(crate) rule: usize,
    pub(crate) mode: ObservedMode,
}

/// Run every applicable policy over `raw`, which must be sorted by
/// `(date, rule)`.  Substitutes are placed in that order, so earlier
/// holidays claim the nearest free days.
pub(crate) fn shift_all(
    raw: &[RawHoliday],
    rules: &[Rule],
    subdivision: Option<&str>,
    weekend: WeekdaySet,
) -> Vec<ObservedShift> {
    let mut days = ShiftContext::new(weekend, raw);
    let mut shifts = Vec::new();
    for holiday in raw {
        let Some(rule) = rules.get(holiday.rule) else { continue };
        let Some(policy) = rule.observed_policy(subdivision) else { continue };
        if policy.skip_shared && shares_date(holiday, raw, rules, rule.key()) {
            continue;
        }
        let Some(to) = policy.target(holiday.date, &days) else {
            continue;
        };
        tracing::trace!(rule = holiday.rule, from = %holiday.date, to = %to, "observed shift");
        days.take(to);
        shifts.push(ObservedShift { from: holiday.date, to, rule: holiday.rule, mode: policy.mode });
    }
    shifts
}

fn shares_date(holiday: &RawHoliday, raw: &[RawHoliday], rules: &[Rule], key: &str) -> bool {
    raw.iter()
        .filter(|other| other.date == holiday.date)
        .any(|other| rules.get(other.rule).is_some_and(|r| r.key() != key))
}
