//! Bolivia.
//!
//! National holidays falling on a Sunday move to Monday.  Labor Day follows
//! per-year decrees in 2012 and 2014, and All Souls' Day stopped moving
//! after 2015.  Each of the nine departments has one holiday of its own.

use feriae_core::errors::Result;
use feriae_engine::{
    Anchor, Catalog, HolidayEntity, ObservedPolicy, Rule, RuleSet, Shift, ShiftRule, SubdivisionScope,
    YearRange,
};
use feriae_time::Weekday;

/// ISO 3166-1 alpha-2 code.
pub const CODE: &str = "BO";

/// Departments: `(code, English name)`.
const DEPARTMENTS: [(&str, &str); 9] = [
    ("B", "Beni"),
    ("C", "Cochabamba"),
    ("H", "Chuquisaca"),
    ("L", "La Paz"),
    ("N", "Pando"),
    ("O", "Oruro"),
    ("P", "Potosí"),
    ("S", "Santa Cruz"),
    ("T", "Tarija"),
];

const SPANISH: &str = include_str!("../locales/bo/es.ftl");
const ENGLISH: &str = include_str!("../locales/bo/en.ftl");

/// The Bolivia entity.
///
/// # Errors
/// Propagates a catalog that fails to parse.
pub fn entity() -> Result<HolidayEntity> {
    Ok(DEPARTMENTS
        .iter()
        .fold(HolidayEntity::new(CODE, "Bolivia", rules()), |e, &(code, name)| {
            e.subdivision(code, name)
        })
        .alpha3("BOL")
        .supported_years(YearRange::since(1825))
        .catalog(Catalog::parse("es", SPANISH)?)
        .catalog(Catalog::parse("en", ENGLISH)?)
        .default_language("es"))
}

fn observed(rule: Rule) -> Rule {
    rule.observed(SubdivisionScope::All, ObservedPolicy::new(ShiftRule::sunday_to_monday()))
}

fn rules() -> RuleSet {
    let labor_day_policy = ObservedPolicy::new(ShiftRule::sunday_to_monday())
        .with_year_rule(2012, ShiftRule::NONE.on(Weekday::Tuesday, Shift::Days(-1)))
        .with_year_rule(2014, ShiftRule::NONE.on(Weekday::Thursday, Shift::Days(1)));
    let all_souls_policy = ObservedPolicy::new(ShiftRule::sunday_to_monday()).years(YearRange::until(2015));

    RuleSet::new()
        .rule(observed(Rule::new("new_year", Anchor::fixed(1, 1))))
        .rule(observed(Rule::new("plurinational_state_day", Anchor::fixed(1, 22)).since(2010)))
        .rule(Rule::new("carnival", Anchor::easter(-48)))
        .rule(Rule::new("carnival", Anchor::easter(-47)))
        .rule(Rule::new("good_friday", Anchor::easter(-2)))
        .rule(Rule::new("labor_day", Anchor::fixed(5, 1)).observed(SubdivisionScope::All, labor_day_policy))
        .rule(Rule::new("corpus_christi", Anchor::easter(60)))
        .rule(observed(Rule::new("andean_new_year", Anchor::fixed(6, 21)).since(2009)))
        .rule(observed(Rule::new("independence_day", Anchor::fixed(8, 6))))
        .rule(Rule::new("national_dignity_day", Anchor::fixed(10, 17)).since(2020))
        .rule(Rule::new("all_saints_day", Anchor::fixed(11, 1)).years(YearRange::between(1985, 1988)))
        .rule(
            Rule::new("all_souls_day", Anchor::fixed(11, 2))
                .since(1989)
                .observed(SubdivisionScope::All, all_souls_policy),
        )
        .rule(observed(Rule::new("christmas", Anchor::fixed(12, 25))))
        // Departments.
        .rule(Rule::new("beni_day", Anchor::fixed(11, 18)).only(&["B"]))
        .rule(Rule::new("cochabamba_day", Anchor::fixed(9, 14)).only(&["C"]))
        .rule(Rule::new("chuquisaca_day", Anchor::fixed(5, 25)).only(&["H"]))
        .rule(Rule::new("la_paz_day", Anchor::fixed(7, 16)).only(&["L"]))
        .rule(Rule::new("pando_day", Anchor::fixed(10, 11)).only(&["N"]))
        .rule(Rule::new("oruro_carnival", Anchor::easter(-51)).only(&["O"]))
        .rule(Rule::new("potosi_day", Anchor::fixed(11, 10)).only(&["P"]))
        .rule(Rule::new("santa_cruz_day", Anchor::fixed(9, 24)).only(&["S"]))
        .rule(Rule::new("la_tablada", Anchor::fixed(4, 15)).only(&["T"]))
}
