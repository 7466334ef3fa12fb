//! Business-day [`Calendar`] view over an [`Engine`].

use std::collections::{BTreeMap, BTreeSet};
use std::sync::{Arc, RwLock};

use feriae_core::Year;
use feriae_time::{Calendar, Date, WeekdaySet};

use crate::engine::Engine;

/// Working-day calendar backed by a holiday engine.
///
/// A date is a holiday when the engine reports any entry on it, using the
/// engine's configured observed mode; weekend days come from the entity.
/// Holiday dates are resolved once per year and cached.
#[derive(Debug)]
pub struct HolidayCalendar {
    name: String,
    engine: Engine,
    years: RwLock<BTreeMap<Year, Arc<BTreeSet<Date>>>>,
}

impl HolidayCalendar {
    /// Wrap `engine`.
    pub fn new(engine: Engine) -> Self {
        let name = match engine.subdivision() {
            Some(s) => format!("{} ({s})", engine.entity().name()),
            None => engine.entity().name().to_owned(),
        };
        Self {
            name,
            engine,
            years: RwLock::default(),
        }
    }

    /// The underlying engine.
    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    fn holiday_dates(&self, year: Year) -> Arc<BTreeSet<Date>> {
        if let Some(dates) = self.years.read().ok().and_then(|years| years.get(&year).cloned()) {
            return dates;
        }
        let dates: Arc<BTreeSet<Date>> = Arc::new(
            self.engine
                .holidays([year], self.engine.config().observed)
                .dates()
                .collect(),
        );
        if let Ok(mut years) = self.years.write() {
            years.insert(year, Arc::clone(&dates));
        }
        dates
    }
}

impl Clone for HolidayCalendar {
    fn clone(&self) -> Self {
        Self::new(self.engine.clone())
    }
}

impl Calendar for HolidayCalendar {
    fn name(&self) -> &str {
        &self.name
    }

    fn weekend(&self) -> WeekdaySet {
        self.engine.entity().weekend_days()
    }

    fn is_public_holiday(&self, date: Date) -> bool {
        self.holiday_dates(date.year()).contains(&date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anchor::Anchor;
    use crate::entity::HolidayEntity;
    use crate::observed::{ObservedPolicy, ShiftRule};
    use crate::registry::Registry;
    use crate::rule::{Rule, SubdivisionScope};
    use crate::rule_set::RuleSet;
    use feriae_time::BusinessDayConvention;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn registry() -> Registry {
        let rules = RuleSet::new().rule(
            Rule::new("christmas", Anchor::fixed(12, 25))
                .observed(SubdivisionScope::All, ObservedPolicy::new(ShiftRule::sunday_to_monday())),
        );
        Registry::new()
            .with(HolidayEntity::new("XX", "Example", rules).subdivision("A", "Alpha"))
            .unwrap()
    }

    #[test]
    fn observed_days_are_not_working_days() {
        let r = registry();
        let cal = Engine::new(&r, "XX", Some("A")).unwrap().calendar();
        assert_eq!(cal.name(), "Example (A)");
        // 2022-12-25 Sunday, observed Monday 2022-12-26.
        assert!(!cal.is_business_day(date(2022, 12, 26)));
        assert_eq!(
            cal.adjust(date(2022, 12, 24), BusinessDayConvention::Following),
            Ok(date(2022, 12, 27))
        );
        assert_eq!(cal.business_days_between(date(2022, 12, 23), date(2022, 12, 30)), 4);
    }

    #[test]
    fn observed_mode_off_keeps_substitutes_working() {
        let r = registry();
        let engine = Engine::builder(&r, "XX").observed(false).build().unwrap();
        let cal = HolidayCalendar::new(engine);
        assert!(cal.is_business_day(date(2022, 12, 26)));
        assert_eq!(cal.advance_business_days(date(2023, 12, 22), 1), Ok(date(2023, 12, 26)));
    }

    #[test]
    fn agrees_with_the_engine_across_years() {
        let r = registry();
        let engine = Engine::new(&r, "XX", None).unwrap();
        let cal = engine.calendar();
        for year in [2021, 2022, 2023] {
            for d in feriae_time::DateRange::year(year).unwrap() {
                assert_eq!(cal.is_public_holiday(d), engine.is_holiday(d, true), "{d}");
            }
        }
        assert!(cal.clone().is_public_holiday(date(2022, 12, 26)));
    }
}
