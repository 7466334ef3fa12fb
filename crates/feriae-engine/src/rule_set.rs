//! A jurisdiction's compiled rule table.

use feriae_core::Year;
use feriae_time::{Date, IslamicCalendar};

use crate::rule::Rule;

/// A date produced by one rule for one year, before observed shifting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RawHoliday {
    /// The date.
    pub date: Date,
    /// Declaration index of the producing rule within its [`RuleSet`].
    pub rule: usize,
}

/// Ordered, immutable list of rules plus the Islamic feast source they use.
///
/// Declaration order matters: it breaks ties between holidays sharing a
/// date.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleSet {
    rules: Vec<Rule>,
    islamic: IslamicCalendar,
}

impl RuleSet {
    /// An empty rule set using the table Islamic estimate.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a rule.
    pub fn rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Append several rules.
    pub fn rules(mut self, rules: impl IntoIterator<Item = Rule>) -> Self {
        self.rules.extend(rules);
        self
    }

    /// Use `islamic` for Islamic-anchored rules.
    pub fn islamic_calendar(mut self, islamic: IslamicCalendar) -> Self {
        self.islamic = islamic;
        self
    }

    /// The rules, in declaration order.
    pub fn as_slice(&self) -> &[Rule] {
        &self.rules
    }

    /// The rule at declaration index `index`.
    pub fn get(&self, index: usize) -> Option<&Rule> {
        self.rules.get(index)
    }

    /// Number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the set has no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// The Islamic feast source.
    pub fn islamic(&self) -> &IslamicCalendar {
        &self.islamic
    }

    /// Evaluate every rule for `year` under `subdivision`, in declaration
    /// order.  A rule whose anchor yields several dates emits one entry per
    /// date.
    pub fn evaluate(&self, year: Year, subdivision: Option<&str>) -> Vec<RawHoliday> {
        self.rules
            .iter()
            .enumerate()
            .flat_map(|(index, rule)| {
                rule.evaluate(year, subdivision, &self.islamic)
                    .into_iter()
                    .map(move |date| RawHoliday { date, rule: index })
            })
            .collect()
    }
}
