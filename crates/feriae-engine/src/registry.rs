//! Explicit map from entity codes to their compiled rule sets.

use std::collections::BTreeMap;
use std::sync::Arc;

use feriae_core::errors::{Error, Result};

use crate::entity::HolidayEntity;

/// Entity registry.
///
/// Built once at startup and handed to [`Engine::builder`](crate::Engine::builder)
/// by reference.  Lookups ignore case and accept alpha-3 aliases.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    entities: BTreeMap<String, Arc<HolidayEntity>>,
    aliases: BTreeMap<String, String>,
}

impl Registry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `entity` under its code and alias.
    ///
    /// # Errors
    /// [`Error::DuplicateEntity`] if the code or alias is already taken.
    pub fn register(&mut self, entity: HolidayEntity) -> Result<()> {
        let code = entity.code().to_ascii_uppercase();
        let alias = entity.alpha3_code().map(str::to_ascii_uppercase);
        for taken in std::iter::once(&code).chain(alias.as_ref()) {
            if self.entities.contains_key(taken) || self.aliases.contains_key(taken) {
                return Err(Error::DuplicateEntity(taken.clone()));
            }
        }
        if let Some(alias) = alias {
            self.aliases.insert(alias, code.clone());
        }
        tracing::debug!(entity = %code, rules = entity.rules().len(), "registered entity");
        self.entities.insert(code, Arc::new(entity));
        Ok(())
    }

    /// Builder-style [`register`](Self::register).
    pub fn with(mut self, entity: HolidayEntity) -> Result<Self> {
        self.register(entity)?;
        Ok(self)
    }

    /// Look up an entity by code or alias.
    ///
    /// # Errors
    /// [`Error::UnknownEntity`] if nothing is registered under `code`.
    pub fn get(&self, code: &str) -> Result<&Arc<HolidayEntity>> {
        let upper = code.trim().to_ascii_uppercase();
        let canonical = self.aliases.get(&upper).unwrap_or(&upper);
        self.entities
            .get(canonical)
            .ok_or_else(|| Error::UnknownEntity(code.to_owned()))
    }

    /// Whether `code` (or alias) is registered.
    pub fn contains(&self, code: &str) -> bool {
        self.get(code).is_ok()
    }

    /// Canonical codes, sorted.
    pub fn codes(&self) -> impl Iterator<Item = &str> + '_ {
        self.entities.keys().map(String::as_str)
    }

    /// Registered entities, sorted by code.
    pub fn entities(&self) -> impl Iterator<Item = &Arc<HolidayEntity>> + '_ {
        self.entities.values()
    }

    /// Number of registered entities.
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Whether nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}
