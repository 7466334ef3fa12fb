//! Holiday resolution engine.
//!
//! An [`Engine`] binds one registered entity to a subdivision context and a
//! display language.  Construction validates both; every query afterwards is
//! a pure computation over the immutable rule set:
//!
//! 1. **Evaluating**: raw holidays for each requested year and its
//!    neighbours, so substitutes can cross a year boundary;
//! 2. **Shifting**: when observed mode is on, the rules' observed policies
//!    run over the raw set in `(date, rule)` order;
//! 3. **Resolved**: entries are grouped by date, restricted to the requested
//!    years and ordered by rule-declaration index.
//!
//! Years the entity has no calendar for produce nothing and are reported
//! with a `warn!` event.

use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use feriae_core::errors::{Error, Result};
use feriae_core::Year;
use feriae_time::Date;
use tracing::{debug, trace, warn};

use crate::entity::HolidayEntity;
use crate::holiday_calendar::HolidayCalendar;
use crate::holiday_map::{HolidayEntry, HolidayMap};
use crate::localization::{Catalog, Translator};
use crate::observed::{shift_all, ObservedMode};
use crate::registry::Registry;
use crate::rule_set::RawHoliday;

// ── Configuration ─────────────────────────────────────────────────────────────

/// Engine construction options.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize), serde(default))]
pub struct EngineConfig {
    /// Subdivision code; `None` selects entity-wide rules only.
    pub subdivision: Option<String>,
    /// Display language; `None` selects the entity's default.
    pub language: Option<String>,
    /// Observed mode used by queries that do not take an explicit flag.
    pub observed: bool,
    /// Separator for [`HolidayMap::joined`].
    pub name_delimiter: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            subdivision: None,
            language: None,
            observed: true,
            name_delimiter: "; ".to_owned(),
        }
    }
}

/// Builder returned by [`Engine::builder`].
#[derive(Debug)]
#[must_use]
pub struct EngineBuilder<'r> {
    registry: &'r Registry,
    code: String,
    config: EngineConfig,
}

impl<'r> EngineBuilder<'r> {
    /// Select a subdivision.
    pub fn subdivision(mut self, code: impl Into<String>) -> Self {
        self.config.subdivision = Some(code.into());
        self
    }

    /// Select a display language.
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.config.language = Some(language.into());
        self
    }

    /// Set the default observed mode.
    pub fn observed(mut self, observed: bool) -> Self {
        self.config.observed = observed;
        self
    }

    /// Set the name delimiter.
    pub fn name_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.config.name_delimiter = delimiter.into();
        self
    }

    /// Replace every option at once.
    pub fn config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Validate the options and build the engine.
    ///
    /// # Errors
    /// [`Error::UnknownEntity`] or [`Error::UnknownSubdivision`].
    pub fn build(self) -> Result<Engine> {
        let entity = Arc::clone(self.registry.get(&self.code)?);

        let subdivision = match self.config.subdivision.as_deref() {
            None => None,
            Some(code) => match entity.find_subdivision(code.trim()) {
                Some(s) => Some(s.code().to_owned()),
                None => {
                    return Err(Error::UnknownSubdivision {
                        entity: entity.code().to_owned(),
                        subdivision: code.to_owned(),
                    })
                }
            },
        };

        let translator = select_translator(&entity, self.config.language.as_deref())?;
        debug!(
            entity = entity.code(),
            subdivision = ?subdivision,
            language = translator.language(),
            rules = entity.rules().len(),
            "rule set loaded"
        );

        Ok(Engine {
            entity,
            subdivision,
            translator,
            delimiter: Arc::from(self.config.name_delimiter.as_str()),
            config: self.config,
        })
    }
}

/// Catalog used for entities that ship none: keys are shown verbatim.
const KEYS_ONLY: &str = "observed-label = { $name } (observed)\n";

fn select_translator(entity: &HolidayEntity, language: Option<&str>) -> Result<Arc<dyn Translator>> {
    let requested = language.and_then(|lang| {
        let found = entity.catalog_for(lang);
        if found.is_none() {
            warn!(entity = entity.code(), language = lang, "no catalog for language, using default");
        }
        found
    });
    Ok(match requested.or_else(|| entity.default_catalog()) {
        Some(catalog) => Arc::clone(catalog) as Arc<dyn Translator>,
        None => Arc::new(Catalog::parse("und", KEYS_ONLY)?),
    })
}

// ── Engine ────────────────────────────────────────────────────────────────────

/// A holiday resolver for one entity and subdivision context.
///
/// Engines hold only immutable data and are `Send + Sync`; queries can run
/// concurrently without locking.
///
/// ```
/// use feriae_engine::{Anchor, Engine, HolidayEntity, ObservedPolicy, Registry, Rule, RuleSet,
///                     ShiftRule, SubdivisionScope};
/// use feriae_time::Date;
///
/// let rules = RuleSet::new().rule(
///     Rule::new("christmas", Anchor::fixed(12, 25))
///         .observed(SubdivisionScope::All, ObservedPolicy::new(ShiftRule::sunday_to_monday())),
/// );
/// let mut registry = Registry::new();
/// registry.register(HolidayEntity::new("XX", "Example", rules)).unwrap();
///
/// let engine = Engine::builder(&registry, "XX").build().unwrap();
/// let map = engine.holidays([2022], true);
/// let monday = Date::from_ymd(2022, 12, 26).unwrap();
/// assert_eq!(map.names(monday), vec!["christmas (observed)"]);
/// ```
#[derive(Debug, Clone)]
pub struct Engine {
    entity: Arc<HolidayEntity>,
    subdivision: Option<String>,
    translator: Arc<dyn Translator>,
    delimiter: Arc<str>,
    config: EngineConfig,
}

impl Engine {
    /// Start building an engine for the entity registered under `code`.
    pub fn builder<'r>(registry: &'r Registry, code: &str) -> EngineBuilder<'r> {
        EngineBuilder {
            registry,
            code: code.to_owned(),
            config: EngineConfig::default(),
        }
    }

    /// Build an engine with default options and an optional subdivision.
    ///
    /// # Errors
    /// [`Error::UnknownEntity`] or [`Error::UnknownSubdivision`].
    pub fn new(registry: &Registry, code: &str, subdivision: Option<&str>) -> Result<Self> {
        let builder = Self::builder(registry, code);
        match subdivision {
            Some(s) => builder.subdivision(s).build(),
            None => builder.build(),
        }
    }

    // ── Accessors ────────────────────────────────────────────────────────────

    /// The entity.
    pub fn entity(&self) -> &HolidayEntity {
        &self.entity
    }

    /// Canonical subdivision code, if one was selected.
    pub fn subdivision(&self) -> Option<&str> {
        self.subdivision.as_deref()
    }

    /// Display language in use.
    pub fn language(&self) -> &str {
        self.translator.language()
    }

    /// The translator in use.
    pub fn translator(&self) -> &dyn Translator {
        self.translator.as_ref()
    }

    /// Construction options.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    // ── Queries ──────────────────────────────────────────────────────────────

    /// Resolve the holidays of `years`.
    ///
    /// With `observed` off, the result holds canonical dates only.  Years
    /// outside the entity's supported range contribute nothing.
    pub fn holidays(&self, years: impl IntoIterator<Item = Year>, observed: bool) -> HolidayMap {
        let years: BTreeSet<Year> = years.into_iter().collect();
        HolidayMap::new(
            self.resolve(&years, observed),
            Arc::clone(&self.translator),
            Arc::clone(&self.delimiter),
        )
    }

    /// [`holidays`](Self::holidays) with the configured observed mode.
    pub fn holidays_for(&self, years: impl IntoIterator<Item = Year>) -> HolidayMap {
        self.holidays(years, self.config.observed)
    }

    /// Entries on `date`, in order.
    pub fn entries_on(&self, date: Date, observed: bool) -> Vec<HolidayEntry> {
        let years = BTreeSet::from([date.year()]);
        self.resolve(&years, observed).remove(&date).unwrap_or_default()
    }

    /// Display names of the holidays on `date`; empty when it is not one.
    pub fn names_on(&self, date: Date, observed: bool) -> Vec<String> {
        self.entries_on(date, observed)
            .iter()
            .map(|e| e.display(self.translator.as_ref()))
            .collect()
    }

    /// Whether `date` is a holiday.
    pub fn is_holiday(&self, date: Date, observed: bool) -> bool {
        !self.entries_on(date, observed).is_empty()
    }

    /// Working-day calendar view over this engine.
    pub fn calendar(&self) -> HolidayCalendar {
        HolidayCalendar::new(self.clone())
    }

    // ── Resolution ───────────────────────────────────────────────────────────

    fn resolve(&self, years: &BTreeSet<Year>, observed: bool) -> BTreeMap<Date, Vec<HolidayEntry>> {
        let entity = &self.entity;
        let subdivision = self.subdivision.as_deref();

        let requested: BTreeSet<Year> = years
            .iter()
            .copied()
            .filter(|&year| {
                let supported = entity.supports_year(year);
                if !supported {
                    warn!(
                        entity = entity.code(),
                        year,
                        supported = %entity.years(),
                        "year outside supported range"
                    );
                }
                supported
            })
            .collect();
        if requested.is_empty() {
            return BTreeMap::new();
        }

        let window: BTreeSet<Year> = requested
            .iter()
            .flat_map(|&y| [y.checked_sub(1), Some(y), y.checked_add(1)])
            .flatten()
            .filter(|&y| entity.supports_year(y))
            .collect();
        debug!(entity = entity.code(), subdivision = ?subdivision, years = ?requested, "evaluating");

        let rules = entity.rules();
        let mut raw: Vec<RawHoliday> = window
            .iter()
            .flat_map(|&y| rules.evaluate(y, subdivision))
            .collect();
        raw.sort();
        raw.dedup();

        let shifts = if observed {
            let shifts = shift_all(&raw, rules.as_slice(), subdivision, entity.weekend_days());
            debug!(entity = entity.code(), count = shifts.len(), "shifting");
            shifts
        } else {
            Vec::new()
        };
        let replaced: BTreeSet<RawHoliday> = shifts
            .iter()
            .filter(|s| s.mode == ObservedMode::Replace)
            .map(|s| RawHoliday { date: s.from, rule: s.rule })
            .collect();

        let mut out: BTreeMap<Date, Vec<HolidayEntry>> = BTreeMap::new();
        let mut place = |date: Date, rule: usize, observed: bool| {
            if !requested.contains(&date.year()) {
                return;
            }
            let Some(r) = rules.get(rule) else { return };
            let key: Cow<'static, str> = r.key_cow().clone();
            out.entry(date).or_default().push(HolidayEntry::new(key, observed, rule));
        };
        for h in raw.iter().filter(|h| !replaced.contains(h)) {
            place(h.date, h.rule, false);
        }
        for s in &shifts {
            place(s.to, s.rule, true);
        }

        for entries in out.values_mut() {
            entries.sort_by_key(|e| (e.rule_index(), e.is_observed()));
            let mut seen: BTreeSet<(String, bool)> = BTreeSet::new();
            entries.retain(|e| seen.insert((e.key().to_owned(), e.is_observed())));
        }
        trace!(entity = entity.code(), dates = out.len(), "resolved");
        out
    }
}
