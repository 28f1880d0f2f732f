// src/application/ports/entity.rs
use crate::domain::errors::DomainResult;
use crate::domain::slug::value_objects::{EntityId, Locale};

/// Field-level capability a host record exposes to the slug pipeline.
///
/// `get` returns the current in-memory value, `get_original` the value last
/// persisted. For translatable fields `locale` selects the translation; any
/// fallback-locale policy belongs to the implementor. Non-translatable fields
/// ignore `locale`.
pub trait FieldAccessor: Send + Sync {
    /// `None` until the record has been persisted.
    fn id(&self) -> Option<EntityId>;

    fn get(&self, field: &str, locale: Option<&Locale>) -> Option<String>;

    fn get_original(&self, field: &str, locale: Option<&Locale>) -> Option<String>;

    /// Value stored for exactly `locale`, never a fallback translation. Slug
    /// fields are read through this so every locale only sees its own slug.
    fn get_exact(&self, field: &str, locale: Option<&Locale>) -> Option<String> {
        self.get(field, locale)
    }

    fn get_original_exact(&self, field: &str, locale: Option<&Locale>) -> Option<String> {
        self.get_original(field, locale)
    }

    fn set(&mut self, field: &str, value: String, locale: Option<&Locale>) -> DomainResult<()>;

    fn is_translatable(&self, _field: &str) -> bool {
        false
    }

    /// Locales that currently carry a value for `field`, in insertion order.
    fn translated_locales(&self, _field: &str) -> Vec<Locale> {
        Vec::new()
    }
}
