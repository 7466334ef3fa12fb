//! Jurisdictions: a rule set plus the metadata needed to query it.

use std::borrow::Cow;
use std::sync::Arc;

use feriae_core::Year;
use feriae_time::WeekdaySet;
use unic_langid::LanguageIdentifier;

use crate::localization::Catalog;
use crate::rule::YearRange;
use crate::rule_set::RuleSet;

/// A subdivision recognised by an entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subdivision {
    code: Cow<'static, str>,
    name: Cow<'static, str>,
}

impl Subdivision {
    /// Canonical code (e.g. `"SRP"`).
    pub fn code(&self) -> &str {
        &self.code
    }

    /// English name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// A country or territory with its holiday rules.
///
/// Entities are immutable once registered; engines share them through an
/// [`Arc`].
#[derive(Debug, Clone)]
pub struct HolidayEntity {
    code: Cow<'static, str>,
    alpha3: Option<Cow<'static, str>>,
    name: Cow<'static, str>,
    subdivisions: Vec<Subdivision>,
    weekend: WeekdaySet,
    years: YearRange,
    default_language: Option<Cow<'static, str>>,
    catalogs: Vec<Arc<Catalog>>,
    rules: RuleSet,
}

impl HolidayEntity {
    /// An entity with a Saturday/Sunday weekend, no subdivisions, every year
    /// supported and no catalogs.
    pub fn new(code: impl Into<Cow<'static, str>>, name: impl Into<Cow<'static, str>>, rules: RuleSet) -> Self {
        Self {
            code: code.into(),
            alpha3: None,
            name: name.into(),
            subdivisions: Vec::new(),
            weekend: WeekdaySet::SATURDAY_SUNDAY,
            years: YearRange::ALL,
            default_language: None,
            catalogs: Vec::new(),
            rules,
        }
    }

    // ── Builder methods ──────────────────────────────────────────────────────

    /// Register an alternative (ISO alpha-3) code.
    pub fn alpha3(mut self, code: impl Into<Cow<'static, str>>) -> Self {
        self.alpha3 = Some(code.into());
        self
    }

    /// Add a subdivision.
    pub fn subdivision(mut self, code: impl Into<Cow<'static, str>>, name: impl Into<Cow<'static, str>>) -> Self {
        self.subdivisions.push(Subdivision { code: code.into(), name: name.into() });
        self
    }

    /// Set the weekend.
    pub fn weekend(mut self, weekend: WeekdaySet) -> Self {
        self.weekend = weekend;
        self
    }

    /// Set the years the entity has a holiday calendar for.
    pub fn supported_years(mut self, years: YearRange) -> Self {
        self.years = years;
        self
    }

    /// Add a name catalog.  The first catalog added is the default unless
    /// [`default_language`](Self::default_language) says otherwise.
    pub fn catalog(mut self, catalog: Catalog) -> Self {
        self.catalogs.push(Arc::new(catalog));
        self
    }

    /// Set the default language.
    pub fn default_language(mut self, language: impl Into<Cow<'static, str>>) -> Self {
        self.default_language = Some(language.into());
        self
    }

    // ── Accessors ────────────────────────────────────────────────────────────

    /// Canonical (ISO alpha-2) code.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Alternative code, if any.
    pub fn alpha3_code(&self) -> Option<&str> {
        self.alpha3.as_deref()
    }

    /// English name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Recognised subdivisions.
    pub fn subdivisions(&self) -> &[Subdivision] {
        &self.subdivisions
    }

    /// Look up a subdivision, ignoring case.
    pub fn find_subdivision(&self, code: &str) -> Option<&Subdivision> {
        self.subdivisions.iter().find(|s| s.code.eq_ignore_ascii_case(code))
    }

    /// Weekend days.
    pub fn weekend_days(&self) -> WeekdaySet {
        self.weekend
    }

    /// Years with a defined holiday calendar.
    pub fn years(&self) -> YearRange {
        self.years
    }

    /// Whether `year` has a defined holiday calendar.
    pub fn supports_year(&self, year: Year) -> bool {
        self.years.contains(year)
    }

    /// The rule set.
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Languages with a catalog.
    pub fn languages(&self) -> impl Iterator<Item = &str> + '_ {
        use crate::localization::Translator;
        self.catalogs.iter().map(|c| c.language())
    }

    /// The default catalog, if the entity has any.
    pub fn default_catalog(&self) -> Option<&Arc<Catalog>> {
        match &self.default_language {
            Some(lang) => self.catalog_for(lang).or_else(|| self.catalogs.first()),
            None => self.catalogs.first(),
        }
    }

    /// The catalog for `language`.
    ///
    /// The tag is parsed as a language identifier, so case and `-`/`_`
    /// separators do not matter.  An exact match wins; otherwise the first
    /// catalog with the same primary language is used (`en-US` → `en`).
    pub fn catalog_for(&self, language: &str) -> Option<&Arc<Catalog>> {
        let requested: LanguageIdentifier = language.trim().parse().ok()?;
        self.catalogs
            .iter()
            .find(|c| *c.language_id() == requested)
            .or_else(|| self.catalogs.iter().find(|c| c.language_id().language == requested.language))
    }
}
