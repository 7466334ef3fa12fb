//! # feriae-engine
//!
//! Declarative holiday rules and the engine that resolves them.
//!
//! A jurisdiction is data: a [`RuleSet`] of [`Rule`]s, each with an
//! [`Anchor`], a validity window, a subdivision scope and optional
//! [`ObservedPolicy`] entries.  A [`Registry`] maps entity codes to
//! [`HolidayEntity`] values, and an [`Engine`] answers queries for one
//! entity and subdivision, producing immutable [`HolidayMap`]s.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Rule anchors (fixed, Julian, Easter, Islamic, weekday, explicit dates).
pub mod anchor;

/// Resolution engine and its configuration.
pub mod engine;

/// Entity metadata.
pub mod entity;

/// Business-day calendar adapter.
pub mod holiday_calendar;

/// Query results.
pub mod holiday_map;

/// Display-name catalogs.
pub mod localization;

/// Observed-date shift policies.
pub mod observed;

/// Entity registry.
pub mod registry;

/// Rules, year ranges and subdivision scopes.
pub mod rule;

/// Rule sets.
pub mod rule_set;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use anchor::Anchor;
pub use engine::{Engine, EngineBuilder, EngineConfig};
pub use entity::{HolidayEntity, Subdivision};
pub use holiday_calendar::HolidayCalendar;
pub use holiday_map::{HolidayEntry, HolidayMap};
pub use localization::{Catalog, Translator};
pub use observed::{ObservedMode, ObservedPolicy, Shift, ShiftRule};
pub use registry::Registry;
pub use rule::{Rule, SubdivisionScope, YearRange};
pub use rule_set::{RawHoliday, RuleSet};
