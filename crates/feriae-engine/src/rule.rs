//! The atomic declarative unit of a holiday calendar.

use std::borrow::Cow;

use feriae_core::Year;
use feriae_time::{Date, IslamicCalendar};

use crate::anchor::Anchor;
use crate::observed::ObservedPolicy;

// ── YearRange ─────────────────────────────────────────────────────────────────

/// Inclusive, optionally open-ended interval of years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct YearRange {
    since: Option<Year>,
    until: Option<Year>,
}

impl YearRange {
    /// Every year.
    pub const ALL: YearRange = YearRange { since: None, until: None };

    /// `since..=until`.
    pub const fn between(since: Year, until: Year) -> Self {
        Self { since: Some(since), until: Some(until) }
    }

    /// `since..`.
    pub const fn since(since: Year) -> Self {
        Self { since: Some(since), until: None }
    }

    /// `..=until`.
    pub const fn until(until: Year) -> Self {
        Self { since: None, until: Some(until) }
    }

    /// First year in the range, if bounded below.
    pub fn first(&self) -> Option<Year> {
        self.since
    }

    /// Last year in the range, if bounded above.
    pub fn last(&self) -> Option<Year> {
        self.until
    }

    /// Whether `year` is inside the range.
    pub fn contains(&self, year: Year) -> bool {
        self.since.map_or(true, |s| year >= s) && self.until.map_or(true, |u| year <= u)
    }
}

impl std::fmt::Display for YearRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.since, self.until) {
            (Some(s), Some(u)) => write!(f, "{s}..={u}"),
            (Some(s), None) => write!(f, "{s}.."),
            (None, Some(u)) => write!(f, "..={u}"),
            (None, None) => write!(f, ".."),
        }
    }
}

// ── SubdivisionScope ──────────────────────────────────────────────────────────

/// Which subdivision contexts a rule (or an observed policy) applies to.
///
/// Subdivision codes are compared case-insensitively.  A query with no
/// subdivision matches [`SubdivisionScope::All`] and every `Except` scope,
/// never an `Only` scope.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubdivisionScope {
    /// Applies everywhere.
    #[default]
    All,
    /// Applies only under the listed subdivisions.
    Only(Vec<Cow<'static, str>>),
    /// Applies everywhere except under the listed subdivisions.
    Except(Vec<Cow<'static, str>>),
}

impl SubdivisionScope {
    /// Scope restricted to `codes`.
    pub fn only(codes: &[&'static str]) -> Self {
        SubdivisionScope::Only(codes.iter().map(|c| Cow::Borrowed(*c)).collect())
    }

    /// Scope excluding `codes`.
    pub fn except(codes: &[&'static str]) -> Self {
        SubdivisionScope::Except(codes.iter().map(|c| Cow::Borrowed(*c)).collect())
    }

    /// Whether the scope admits the given subdivision context.
    pub fn matches(&self, subdivision: Option<&str>) -> bool {
        let listed = |codes: &[Cow<'static, str>], s: &str| codes.iter().any(|c| c.eq_ignore_ascii_case(s));
        match (self, subdivision) {
            (SubdivisionScope::All, _) => true,
            (SubdivisionScope::Only(_), None) => false,
            (SubdivisionScope::Only(codes), Some(s)) => listed(codes, s),
            (SubdivisionScope::Except(_), None) => true,
            (SubdivisionScope::Except(codes), Some(s)) => !listed(codes, s),
        }
    }

    /// Subdivision codes the scope names.
    pub fn codes(&self) -> &[Cow<'static, str>] {
        match self {
            SubdivisionScope::All => &[],
            SubdivisionScope::Only(codes) | SubdivisionScope::Except(codes) => codes,
        }
    }
}

// ── Rule ──────────────────────────────────────────────────────────────────────

/// One holiday rule.
///
/// A rule carries a name *key* (resolved to a display string by a
/// [`Translator`](crate::localization::Translator)), an [`Anchor`], the years
/// it is in force, the subdivisions it applies to and zero or more observed
/// policies, each with its own subdivision scope.
///
/// Multi-day holidays are several rules sharing a key.
///
/// ```
/// use feriae_engine::{Anchor, Rule, ShiftRule, ObservedPolicy, SubdivisionScope};
///
/// let rule = Rule::new("statehood_day", Anchor::fixed(11, 25))
///     .since(2004)
///     .only(&["BIH"])
///     .observed(SubdivisionScope::All, ObservedPolicy::new(ShiftRule::sunday_to_next_workday()));
/// assert!(rule.is_active(2021, Some("bih")));
/// assert!(!rule.is_active(2003, Some("BIH")));
/// assert!(!rule.is_active(2021, None));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    key: Cow<'static, str>,
    anchor: Anchor,
    years: YearRange,
    scope: SubdivisionScope,
    observed: Vec<(SubdivisionScope, ObservedPolicy)>,
}

impl Rule {
    /// A rule in force every year, everywhere, with no observed policy.
    pub fn new(key: impl Into<Cow<'static, str>>, anchor: Anchor) -> Self {
        Self {
            key: key.into(),
            anchor,
            years: YearRange::ALL,
            scope: SubdivisionScope::All,
            observed: Vec::new(),
        }
    }

    // ── Builder methods ──────────────────────────────────────────────────────

    /// In force from `year` onwards.
    pub fn since(mut self, year: Year) -> Self {
        self.years.since = Some(year);
        self
    }

    /// In force up to and including `year`.
    pub fn until(mut self, year: Year) -> Self {
        self.years.until = Some(year);
        self
    }

    /// In force during `years`.
    pub fn years(mut self, years: YearRange) -> Self {
        self.years = years;
        self
    }

    /// Restrict to the listed subdivisions.
    pub fn only(mut self, subdivisions: &[&'static str]) -> Self {
        self.scope = SubdivisionScope::only(subdivisions);
        self
    }

    /// Exclude the listed subdivisions.
    pub fn except(mut self, subdivisions: &[&'static str]) -> Self {
        self.scope = SubdivisionScope::except(subdivisions);
        self
    }

    /// Set the subdivision scope.
    pub fn scope(mut self, scope: SubdivisionScope) -> Self {
        self.scope = scope;
        self
    }

    /// Attach an observed policy for the subdivisions in `scope`.
    ///
    /// Policies are tried in attachment order; the first whose scope
    /// matches the query's subdivision is used.
    pub fn observed(mut self, scope: SubdivisionScope, policy: ObservedPolicy) -> Self {
        self.observed.push((scope, policy));
        self
    }

    // ── Accessors ────────────────────────────────────────────────────────────

    /// Name key.
    pub fn key(&self) -> &str {
        &self.key
    }

    pub(crate) fn key_cow(&self) -> &Cow<'static, str> {
        &self.key
    }

    /// Date anchor.
    pub fn anchor(&self) -> &Anchor {
        &self.anchor
    }

    /// Years in force.
    pub fn valid_years(&self) -> YearRange {
        self.years
    }

    /// Subdivision scope.
    pub fn subdivision_scope(&self) -> &SubdivisionScope {
        &self.scope
    }

    /// Whether the rule applies to `year` under `subdivision`.
    pub fn is_active(&self, year: Year, subdivision: Option<&str>) -> bool {
        self.years.contains(year) && self.scope.matches(subdivision)
    }

    /// The observed policy that applies under `subdivision`, if any.
    pub fn observed_policy(&self, subdivision: Option<&str>) -> Option<&ObservedPolicy> {
        self.observed
            .iter()
            .find(|(scope, _)| scope.matches(subdivision))
            .map(|(_, policy)| policy)
    }

    /// Dates the rule produces in `year` under `subdivision`.
    pub fn evaluate(&self, year: Year, subdivision: Option<&str>, islamic: &IslamicCalendar) -> Vec<Date> {
        if !self.is_active(year, subdivision) {
            return Vec::new();
        }
        self.anchor.resolve(year, islamic)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observed::{ObservedPolicy, ShiftRule};

    #[test]
    fn year_range_bounds() {
        assert!(YearRange::ALL.contains(1));
        assert!(YearRange::since(2010).contains(2010));
        assert!(!YearRange::since(2010).contains(2009));
        assert!(YearRange::until(2015).contains(2015));
        assert!(!YearRange::until(2015).contains(2016));
        assert!(YearRange::between(1985, 1988).contains(1987));
        assert!(!YearRange::between(1985, 1988).contains(1989));
        assert_eq!(YearRange::between(1985, 1988).to_string(), "1985..=1988");
        assert_eq!(YearRange::since(1825).to_string(), "1825..");
    }

    #[test]
    fn scope_matching() {
        let only = SubdivisionScope::only(&["BIH", "SRP"]);
        assert!(only.matches(Some("srp")));
        assert!(!only.matches(Some("BRC")));
        assert!(!only.matches(None));

        let except = SubdivisionScope::except(&["BRC"]);
        assert!(except.matches(None));
        assert!(except.matches(Some("BIH")));
        assert!(!except.matches(Some("brc")));
    }

    #[test]
    fn evaluate_respects_validity() {
        let cal = IslamicCalendar::new();
        let rule = Rule::new("plurinational_state_day", Anchor::fixed(1, 22)).since(2010);
        assert!(rule.evaluate(2009, None, &cal).is_empty());
        assert_eq!(rule.evaluate(2010, None, &cal).len(), 1);
    }

    #[test]
    fn first_matching_policy_wins() {
        let narrow = ObservedPolicy::new(ShiftRule::sunday_to_next_workday());
        let broad = ObservedPolicy::new(ShiftRule::sunday_to_monday());
        let rule = Rule::new("new_year", Anchor::fixed(1, 2))
            .observed(SubdivisionScope::only(&["BRC"]), narrow.clone())
            .observed(SubdivisionScope::All, broad.clone());
        assert_eq!(rule.observed_policy(Some("BRC")), Some(&narrow));
        assert_eq!(rule.observed_policy(Some("SRP")), Some(&broad));
        assert_eq!(rule.observed_policy(None), Some(&broad));

        let bare = Rule::new("christmas", Anchor::fixed(12, 25));
        assert!(bare.observed_policy(None).is_none());
    }
}
