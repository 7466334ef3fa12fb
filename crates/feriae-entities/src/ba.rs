//! Bosnia and Herzegovina.
//!
//! Three subdivisions with their own holiday laws: the Federation (`BIH`),
//! Brčko District (`BRC`) and Republika Srpska (`SRP`).  State-level
//! holidays apply everywhere; each subdivision adds its own and transfers
//! Sunday holidays differently:
//!
//! * `BIH` moves a Sunday New Year or Labor Day two days forward, to the
//!   Tuesday after the two-day holiday, unless the Sunday is shared with
//!   another holiday;
//! * `BRC` moves every Sunday holiday to the next working day;
//! * `SRP` moves the second day of New Year and Labor Day to Monday.
//!
//! Islamic holidays follow the dates announced by the Islamic Community,
//! which differ from the table estimate in a few years.

use feriae_core::errors::Result;
use feriae_engine::{
    Anchor, Catalog, HolidayEntity, ObservedPolicy, Rule, RuleSet, Shift, ShiftRule, SubdivisionScope,
    YearRange,
};
use feriae_time::{Date, IslamicCalendar, IslamicFeast, Weekday};

/// ISO 3166-1 alpha-2 code.
pub const CODE: &str = "BA";

const FEDERATION: &str = "BIH";
const BRCKO: &str = "BRC";
const SRPSKA: &str = "SRP";

const BOSNIAN: &str = include_str!("../locales/ba/bs.ftl");
const ENGLISH: &str = include_str!("../locales/ba/en.ftl");

/// The Bosnia and Herzegovina entity.
///
/// # Errors
/// Propagates a catalog that fails to parse.
pub fn entity() -> Result<HolidayEntity> {
    Ok(HolidayEntity::new(CODE, "Bosnia and Herzegovina", rules())
        .alpha3("BIH")
        .subdivision(FEDERATION, "Federation of Bosnia and Herzegovina")
        .subdivision(BRCKO, "Brčko District")
        .subdivision(SRPSKA, "Republika Srpska")
        .supported_years(YearRange::since(1992))
        .catalog(Catalog::parse("bs", BOSNIAN)?)
        .catalog(Catalog::parse("en", ENGLISH)?)
        .default_language("bs"))
}

fn federation() -> (SubdivisionScope, ObservedPolicy) {
    let two_days = ShiftRule::NONE.on(Weekday::Sunday, Shift::Days(2));
    (SubdivisionScope::only(&[FEDERATION]), ObservedPolicy::new(two_days).unless_shared())
}

fn brcko() -> (SubdivisionScope, ObservedPolicy) {
    (
        SubdivisionScope::only(&[BRCKO]),
        ObservedPolicy::new(ShiftRule::sunday_to_next_workday()),
    )
}

fn srpska() -> (SubdivisionScope, ObservedPolicy) {
    (SubdivisionScope::only(&[SRPSKA]), ObservedPolicy::new(ShiftRule::sunday_to_monday()))
}

fn with(rule: Rule, policies: impl IntoIterator<Item = (SubdivisionScope, ObservedPolicy)>) -> Rule {
    policies
        .into_iter()
        .fold(rule, |rule, (scope, policy)| rule.observed(scope, policy))
}

fn islamic_calendar() -> IslamicCalendar {
    let d = |y, m, day| Date::from_ymd(y, m, day).ok();
    let fitr: Vec<Date> = [d(2015, 7, 18)].into_iter().flatten().collect();
    let adha: Vec<Date> = [d(2010, 11, 17), d(2015, 9, 24), d(2018, 8, 22)]
        .into_iter()
        .flatten()
        .collect();
    IslamicCalendar::new()
        .with_override(IslamicFeast::EidAlFitr, &fitr)
        .with_override(IslamicFeast::EidAlAdha, &adha)
}

fn rules() -> RuleSet {
    const BIH_SRP: &[&str] = &[FEDERATION, SRPSKA];
    RuleSet::new()
        .islamic_calendar(islamic_calendar())
        // State level.
        .rule(with(Rule::new("new_year", Anchor::fixed(1, 1)), [federation(), brcko()]))
        .rule(with(Rule::new("new_year", Anchor::fixed(1, 2)), [brcko(), srpska()]))
        .rule(with(Rule::new("orthodox_christmas", Anchor::julian(12, 25)), [brcko()]))
        .rule(Rule::new("catholic_easter_monday", Anchor::easter(1)))
        .rule(Rule::new("orthodox_good_friday", Anchor::orthodox_easter(-2)))
        .rule(with(Rule::new("labor_day", Anchor::fixed(5, 1)), [federation(), brcko()]))
        .rule(with(Rule::new("labor_day", Anchor::fixed(5, 2)), [brcko(), srpska()]))
        .rule(Rule::new("eid_al_fitr", Anchor::islamic(IslamicFeast::EidAlFitr, 0)))
        .rule(Rule::new("eid_al_adha", Anchor::islamic(IslamicFeast::EidAlAdha, 0)))
        .rule(with(Rule::new("catholic_christmas", Anchor::fixed(12, 25)), [brcko()]))
        // Subdivisions.
        .rule(Rule::new("orthodox_christmas_eve", Anchor::julian(12, 24)).only(BIH_SRP))
        .rule(Rule::new("orthodox_new_year", Anchor::julian(1, 1)).only(&[SRPSKA]))
        .rule(Rule::new("independence_day", Anchor::fixed(3, 1)).since(1993).only(&[FEDERATION]))
        .rule(with(
            Rule::new("brcko_day", Anchor::fixed(3, 8)).since(2000).only(&[BRCKO]),
            [brcko()],
        ))
        .rule(Rule::new("catholic_good_friday", Anchor::easter(-2)).only(BIH_SRP))
        .rule(Rule::new("catholic_easter", Anchor::easter(0)).only(BIH_SRP))
        .rule(Rule::new("orthodox_easter", Anchor::orthodox_easter(0)).only(BIH_SRP))
        .rule(Rule::new("orthodox_easter_monday", Anchor::orthodox_easter(1)).only(BIH_SRP))
        .rule(Rule::new("victory_day", Anchor::fixed(5, 9)).only(BIH_SRP))
        .rule(Rule::new("eid_al_fitr", Anchor::islamic(IslamicFeast::EidAlFitr, 1)).only(BIH_SRP))
        .rule(Rule::new("eid_al_adha", Anchor::islamic(IslamicFeast::EidAlAdha, 1)).only(BIH_SRP))
        .rule(Rule::new("dayton_day", Anchor::fixed(11, 21)).since(1996).only(&[SRPSKA]))
        .rule(Rule::new("statehood_day", Anchor::fixed(11, 25)).since(2004).only(&[FEDERATION]))
        .rule(Rule::new("catholic_christmas_eve", Anchor::fixed(12, 24)).only(BIH_SRP))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_key_is_translated() {
        let entity = entity().unwrap();
        for rule in entity.rules().as_slice() {
            for lang in ["bs", "en"] {
                let catalog = entity.catalog_for(lang).unwrap();
                assert!(catalog.has_name(rule.key()), "{lang}: {}", rule.key());
            }
        }
    }

    #[test]
    fn islamic_overrides() {
        let cal = islamic_calendar();
        assert!(cal.is_announced(2015, IslamicFeast::EidAlFitr));
        assert!(cal.is_announced(2018, IslamicFeast::EidAlAdha));
        assert!(!cal.is_announced(2021, IslamicFeast::EidAlAdha));
    }
}
