//! Display-name lookup.
//!
//! The engine never stores display strings: entries carry a name key and an
//! observed flag, and a [`Translator`] turns them into text at the edge.
//!
//! [`Catalog`] keeps one Fluent bundle per language.  Every name key is a
//! message, and the [`OBSERVED_LABEL`] message wraps a name passed in as
//! `$name`:
//!
//! ```ftl
//! observed-label = { $name } (preneseno)
//! new_year = Nova godina
//! ```

use std::borrow::Cow;
use std::fmt;

use feriae_core::ensure;
use feriae_core::errors::{Error, Result};
use fluent_bundle::concurrent::FluentBundle;
use fluent_bundle::{FluentArgs, FluentError, FluentResource};
use tracing::warn;
use unic_langid::LanguageIdentifier;

/// Message id of the observed label.  It receives the holiday name as the
/// `$name` argument.
pub const OBSERVED_LABEL: &str = "observed-label";

/// Turns name keys into display strings for one language.
pub trait Translator: fmt::Debug + Send + Sync {
    /// Canonical language tag (e.g. `"bs"`, `"en-US"`).
    fn language(&self) -> &str;

    /// Display name for `key`, if the catalog has one.
    fn translate(&self, key: &str) -> Option<Cow<'_, str>>;

    /// Wrap an already translated `name` in the observed label, e.g.
    /// `"Nova godina"` → `"Nova godina (preneseno)"`.
    fn observed_label(&self, name: &str) -> String;

    /// Display string for an entry; unknown keys are shown verbatim.
    fn display(&self, key: &str, observed: bool) -> String {
        let name = self.translate(key).unwrap_or(Cow::Borrowed(key));
        if observed {
            self.observed_label(&name)
        } else {
            name.into_owned()
        }
    }
}

/// A Fluent name catalog for one language.
///
/// ```
/// use feriae_engine::{Catalog, Translator};
///
/// let bs = Catalog::parse("bs", "observed-label = { $name } (preneseno)\nnew_year = Nova godina\n").unwrap();
/// assert_eq!(bs.display("new_year", true), "Nova godina (preneseno)");
/// assert_eq!(bs.display("unknown_key", false), "unknown_key");
/// ```
pub struct Catalog {
    id: LanguageIdentifier,
    tag: String,
    bundle: FluentBundle<FluentResource>,
}

impl Catalog {
    /// Parse a catalog for `language` from Fluent source.
    ///
    /// # Errors
    /// [`Error::InvalidArgument`] for a malformed language tag or Fluent
    /// syntax errors; [`Error::Precondition`] when the source has no
    /// [`OBSERVED_LABEL`] message.
    pub fn parse(language: &str, source: &str) -> Result<Self> {
        let id: LanguageIdentifier = language
            .trim()
            .parse()
            .map_err(|e| Error::InvalidArgument(format!("language tag {language:?}: {e:?}")))?;
        let resource = FluentResource::try_new(source.to_owned())
            .map_err(|(_, errors)| Error::InvalidArgument(format!("catalog {id}: {errors:?}")))?;

        let mut bundle = FluentBundle::new_concurrent(vec![id.clone()]);
        bundle.set_use_isolating(false);
        bundle
            .add_resource(resource)
            .map_err(|errors| Error::InvalidArgument(format!("catalog {id}: {errors:?}")))?;
        ensure!(bundle.has_message(OBSERVED_LABEL), "catalog {id} has no {OBSERVED_LABEL} message");

        Ok(Self { tag: id.to_string(), id, bundle })
    }

    /// Parsed language identifier.
    pub fn language_id(&self) -> &LanguageIdentifier {
        &self.id
    }

    /// Whether the catalog names `key`.
    pub fn has_name(&self, key: &str) -> bool {
        key != OBSERVED_LABEL && self.bundle.has_message(key)
    }

    fn report(&self, id: &str, errors: &[FluentError]) {
        if !errors.is_empty() {
            warn!(language = %self.tag, id, ?errors, "catalog formatting failed");
        }
    }
}

impl fmt::Debug for Catalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Catalog").field("language", &self.tag).finish_non_exhaustive()
    }
}

impl Translator for Catalog {
    fn language(&self) -> &str {
        &self.tag
    }

    fn translate(&self, key: &str) -> Option<Cow<'_, str>> {
        if key == OBSERVED_LABEL {
            return None;
        }
        let pattern = self.bundle.get_message(key).and_then(|msg| msg.value())?;
        let mut errors = Vec::new();
        let name = self.bundle.format_pattern(pattern, None, &mut errors);
        self.report(key, &errors);
        Some(name)
    }

    fn observed_label(&self, name: &str) -> String {
        let Some(pattern) = self.bundle.get_message(OBSERVED_LABEL).and_then(|msg| msg.value()) else {
            return name.to_owned();
        };
        let mut args = FluentArgs::new();
        args.set("name", name.to_owned());
        let mut errors = Vec::new();
        let label = self.bundle.format_pattern(pattern, Some(&args), &mut errors).into_owned();
        self.report(OBSERVED_LABEL, &errors);
        label
    }
}
