// src/domain/slug/services/source.rs
use crate::application::ports::entity::FieldAccessor;
use crate::domain::slug::options::{SlugOptions, SlugSource};
use crate::domain::slug::text::truncate_chars;
use crate::domain::slug::value_objects::Locale;

/// Builds the text a slug is derived from. Missing fields read as empty strings.
pub struct SourceResolver<'a> {
    options: &'a SlugOptions,
}

impl<'a> SourceResolver<'a> {
    pub fn new(options: &'a SlugOptions) -> Self {
        Self { options }
    }

    /// Source built from the entity's current values.
    pub fn resolve(&self, entity: &dyn FieldAccessor, locale: Option<&Locale>) -> String {
        self.build(entity, locale, |field| entity.get(field, locale))
    }

    /// Source built from the entity's persisted values. A computed source is
    /// simply evaluated again since it cannot see persisted state.
    pub fn resolve_original(&self, entity: &dyn FieldAccessor, locale: Option<&Locale>) -> String {
        self.build(entity, locale, |field| entity.get_original(field, locale))
    }

    fn build<F>(&self, entity: &dyn FieldAccessor, locale: Option<&Locale>, read: F) -> String
    where
        F: Fn(&str) -> Option<String>,
    {
        let joined = match self.options.source() {
            SlugSource::Computed(compute) => compute(entity, locale),
            SlugSource::Fields(fields) => fields
                .iter()
                .map(|field| read(field).unwrap_or_default())
                .collect::<Vec<_>>()
                .join(self.options.separator()),
        };

        truncate_chars(&joined, self.options.max_length()).to_string()
    }
}
