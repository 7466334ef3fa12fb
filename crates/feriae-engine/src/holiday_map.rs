//! The resolved result of a holiday query.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::ops::RangeInclusive;
use std::sync::Arc;

use feriae_core::Year;
use feriae_time::Date;

use crate::localization::Translator;

/// One holiday on one date.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct HolidayEntry {
    key: Cow<'static, str>,
    observed: bool,
    #[cfg_attr(feature = "serde", serde(skip))]
    rule: usize,
}

impl HolidayEntry {
    pub(crate) fn new(key: Cow<'static, str>, observed: bool, rule: usize) -> Self {
        Self { key, observed, rule }
    }

    /// Name key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Whether this is a substitute for a holiday on another date.
    pub fn is_observed(&self) -> bool {
        self.observed
    }

    /// Declaration index of the producing rule.
    pub fn rule_index(&self) -> usize {
        self.rule
    }

    /// Display string in the given translator's language.
    pub fn display(&self, translator: &dyn Translator) -> String {
        translator.display(&self.key, self.observed)
    }
}

/// Immutable mapping from date to the holidays on that date.
///
/// Within a date, entries are ordered by rule-declaration index, and an
/// observed entry follows a canonical entry of the same rule.  The map
/// carries the translator and delimiter of the engine that produced it, so
/// it can render display names without further context.
#[derive(Clone)]
pub struct HolidayMap {
    entries: BTreeMap<Date, Vec<HolidayEntry>>,
    translator: Arc<dyn Translator>,
    delimiter: Arc<str>,
}

impl HolidayMap {
    pub(crate) fn new(
        entries: BTreeMap<Date, Vec<HolidayEntry>>,
        translator: Arc<dyn Translator>,
        delimiter: Arc<str>,
    ) -> Self {
        Self { entries, translator, delimiter }
    }

    fn derive(&self, entries: BTreeMap<Date, Vec<HolidayEntry>>) -> Self {
        Self {
            entries,
            translator: Arc::clone(&self.translator),
            delimiter: Arc::clone(&self.delimiter),
        }
    }

    // ── Lookup ───────────────────────────────────────────────────────────────

    /// Entries on `date`.
    pub fn get(&self, date: Date) -> Option<&[HolidayEntry]> {
        self.entries.get(&date).map(Vec::as_slice)
    }

    /// Whether `date` is a holiday.
    pub fn contains(&self, date: Date) -> bool {
        self.entries.contains_key(&date)
    }

    /// Display names on `date`, in order; empty when not a holiday.
    pub fn names(&self, date: Date) -> Vec<String> {
        self.get(date)
            .map(|entries| entries.iter().map(|e| e.display(self.translator.as_ref())).collect())
            .unwrap_or_default()
    }

    /// Display names on `date` joined with the delimiter.
    pub fn joined(&self, date: Date) -> Option<String> {
        self.contains(date).then(|| self.names(date).join(self.delimiter.as_ref()))
    }

    /// Dates on which an entry with name key `key` appears.
    pub fn dates_named(&self, key: &str) -> Vec<Date> {
        self.entries
            .iter()
            .filter(|(_, entries)| entries.iter().any(|e| e.key() == key))
            .map(|(d, _)| *d)
            .collect()
    }

    // ── Iteration ────────────────────────────────────────────────────────────

    /// Holiday dates in ascending order.
    pub fn dates(&self) -> impl Iterator<Item = Date> + '_ {
        self.entries.keys().copied()
    }

    /// `(date, entries)` pairs in ascending date order.
    pub fn iter(&self) -> impl Iterator<Item = (Date, &[HolidayEntry])> + '_ {
        self.entries.iter().map(|(d, e)| (*d, e.as_slice()))
    }

    /// Number of holiday dates.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map has no dates.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Every date with its joined display names.
    pub fn to_display_map(&self) -> BTreeMap<Date, String> {
        self.entries
            .keys()
            .filter_map(|d| self.joined(*d).map(|names| (*d, names)))
            .collect()
    }

    /// Language of the display names.
    pub fn language(&self) -> &str {
        self.translator.language()
    }

    // ── Views ────────────────────────────────────────────────────────────────

    /// Dates within `range`.
    pub fn range(&self, range: RangeInclusive<Date>) -> Self {
        self.derive(self.entries.range(range).map(|(d, e)| (*d, e.clone())).collect())
    }

    /// Dates within `year`.
    pub fn year(&self, year: Year) -> Self {
        self.derive(
            self.entries
                .iter()
                .filter(|(d, _)| d.year() == year)
                .map(|(d, e)| (*d, e.clone()))
                .collect(),
        )
    }

    /// The same map with every observed entry removed.
    pub fn without_observed(&self) -> Self {
        self.derive(
            self.entries
                .iter()
                .filter_map(|(d, entries)| {
                    let kept: Vec<HolidayEntry> = entries.iter().filter(|e| !e.observed).cloned().collect();
                    (!kept.is_empty()).then_some((*d, kept))
                })
                .collect(),
        )
    }
}

impl PartialEq for HolidayMap {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
            && self.delimiter == other.delimiter
            && self.translator.language() == other.translator.language()
    }
}

impl Eq for HolidayMap {}

impl std::fmt::Debug for HolidayMap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map().entries(self.to_display_map()).finish()
    }
}

impl<'a> IntoIterator for &'a HolidayMap {
    type Item = (Date, &'a [HolidayEntry]);
    type IntoIter = Box<dyn Iterator<Item = (Date, &'a [HolidayEntry])> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for HolidayMap {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for date in self.entries.keys() {
            map.serialize_entry(date, &self.names(*date))?;
        }
        map.end()
    }
}
