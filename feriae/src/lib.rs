//! # feriae
//!
//! Rule-driven public holiday resolution for countries and their
//! subdivisions.
//!
//! This crate is a **façade** that re-exports the public items of the
//! workspace crates and wires the shipped jurisdictions into a ready-made
//! [`Registry`].  Application code should depend on this crate rather than
//! the individual `feriae-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! feriae = "0.1"
//! ```
//!
//! ```rust
//! use feriae::time::Date;
//!
//! let registry = feriae::default_registry().unwrap();
//! let map = feriae::holidays(&registry, "BA", Some("SRP"), [2021]).unwrap();
//! let may_3 = Date::from_ymd(2021, 5, 3).unwrap();
//! assert_eq!(
//!     map.names(may_3),
//!     ["Međunarodni praznik rada (preneseno)", "Uskrsni ponedjeljak (Pravoslavni)"]
//! );
//! ```
//!
//! For repeated queries build an [`Engine`] once and keep it:
//!
//! ```rust
//! use feriae::{Calendar, Engine};
//! use feriae::time::Date;
//!
//! let engine = Engine::builder(feriae::registry(), "BO")
//!     .subdivision("T")
//!     .language("en")
//!     .build()
//!     .unwrap();
//! let calendar = engine.calendar();
//! assert!(calendar.is_holiday(Date::from_ymd(2021, 4, 15).unwrap()));
//! ```
//!
//! ## Features
//!
//! * `serde`: serialize dates and holiday maps, deserialize [`EngineConfig`].
//! * `chrono`: conversions between [`Date`](time::Date) and `chrono::NaiveDate`.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

use std::sync::OnceLock;

/// Error definitions and the `Year` alias.
pub use feriae_core as core;

/// Dates, movable feasts and business-day calendars.
pub use feriae_time as time;

/// Rules, observed-date policies and the resolution engine.
pub use feriae_engine as engine;

/// Rule tables of the shipped jurisdictions.
pub use feriae_entities as entities;

pub use feriae_core::{Error, Result, Year};
pub use feriae_engine::{
    Engine, EngineBuilder, EngineConfig, HolidayCalendar, HolidayEntry, HolidayMap, Registry,
};
pub use feriae_time::{Calendar, Date};

/// A registry holding every shipped jurisdiction.
///
/// # Errors
/// Propagates a name catalog that fails to parse.
pub fn default_registry() -> Result<Registry> {
    let mut registry = Registry::new();
    feriae_entities::register_all(&mut registry)?;
    Ok(registry)
}

/// Process-wide [`default_registry`], built on first use.
///
/// # Panics
/// If the shipped catalogs fail to parse, which their unit tests rule out.
pub fn registry() -> &'static Registry {
    static REGISTRY: OnceLock<Registry> = OnceLock::new();
    REGISTRY.get_or_init(|| default_registry().expect("shipped catalogs parse"))
}

/// Resolve the observed holidays of `years` for an entity of `registry`.
///
/// # Errors
/// [`Error::UnknownEntity`] or [`Error::UnknownSubdivision`].
pub fn holidays(
    registry: &Registry,
    code: &str,
    subdivision: Option<&str>,
    years: impl IntoIterator<Item = Year>,
) -> Result<HolidayMap> {
    Ok(Engine::new(registry, code, subdivision)?.holidays(years, true))
}

/// Whether `date` is a holiday, observed days included.
///
/// # Errors
/// [`Error::UnknownEntity`] or [`Error::UnknownSubdivision`].
pub fn is_holiday(registry: &Registry, code: &str, subdivision: Option<&str>, date: Date) -> Result<bool> {
    Ok(Engine::new(registry, code, subdivision)?.is_holiday(date, true))
}
