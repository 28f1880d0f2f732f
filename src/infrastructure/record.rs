// src/infrastructure/record.rs
use std::collections::{BTreeMap, BTreeSet};

use crate::application::ports::entity::FieldAccessor;
use crate::domain::errors::DomainResult;
use crate::domain::slug::value_objects::{EntityId, Locale};

#[derive(Debug, Clone, PartialEq, Eq)]
enum FieldValue {
    Plain(Option<String>),
    Translated(Vec<(Locale, String)>),
}

impl FieldValue {
    fn read(&self, locale: Option<&Locale>, fallback: Option<&Locale>) -> Option<String> {
        match self {
            Self::Plain(value) => value.clone(),
            Self::Translated(values) => {
                let lookup = |wanted: &Locale| {
                    values
                        .iter()
                        .find(|(l, _)| l == wanted)
                        .map(|(_, v)| v.clone())
                };
                locale
                    .and_then(lookup)
                    .or_else(|| fallback.and_then(lookup))
            }
        }
    }
}

/// Map-backed record with a current and a persisted snapshot of its fields.
///
/// Translatable fields keep one value per locale; reads for a locale without a
/// value fall back to the configured fallback locale.
#[derive(Debug, Clone, Default)]
pub struct Record {
    id: Option<EntityId>,
    current: BTreeMap<String, FieldValue>,
    original: BTreeMap<String, FieldValue>,
    translatable: BTreeSet<String>,
    fallback_locale: Option<Locale>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id(mut self, id: impl Into<EntityId>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with(mut self, field: &str, value: impl Into<String>) -> Self {
        self.put(field, value);
        self
    }

    pub fn with_translation(mut self, field: &str, locale: &Locale, value: impl Into<String>) -> Self {
        self.set_translation(field, locale, value);
        self
    }

    pub fn with_fallback_locale(mut self, locale: Locale) -> Self {
        self.fallback_locale = Some(locale);
        self
    }

    /// Declare fields as translatable before they carry any translation.
    pub fn with_translatable<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.translatable.extend(fields.into_iter().map(Into::into));
        self
    }

    pub fn assign_id(&mut self, id: impl Into<EntityId>) {
        self.id = Some(id.into());
    }

    pub fn put(&mut self, field: &str, value: impl Into<String>) {
        self.current
            .insert(field.to_string(), FieldValue::Plain(Some(value.into())));
    }

    pub fn clear(&mut self, field: &str) {
        if self.translatable.contains(field) {
            self.current
                .insert(field.to_string(), FieldValue::Translated(Vec::new()));
        } else {
            self.current.insert(field.to_string(), FieldValue::Plain(None));
        }
    }

    pub fn set_translation(&mut self, field: &str, locale: &Locale, value: impl Into<String>) {
        self.translatable.insert(field.to_string());
        let value = value.into();
        let entry = self
            .current
            .entry(field.to_string())
            .or_insert_with(|| FieldValue::Translated(Vec::new()));
        if let FieldValue::Plain(_) = entry {
            *entry = FieldValue::Translated(Vec::new());
        }
        if let FieldValue::Translated(values) = entry {
            match values.iter_mut().find(|(l, _)| l == locale) {
                Some((_, existing)) => *existing = value,
                None => values.push((locale.clone(), value)),
            }
        }
    }

    pub fn forget_translation(&mut self, field: &str, locale: &Locale) {
        if let Some(FieldValue::Translated(values)) = self.current.get_mut(field) {
            values.retain(|(l, _)| l != locale);
        }
    }

    pub fn translation(&self, field: &str, locale: &Locale) -> Option<String> {
        self.current
            .get(field)
            .and_then(|value| value.read(Some(locale), None))
    }

    /// Mark the current state as persisted.
    pub fn sync_original(&mut self) {
        self.original = self.current.clone();
    }

    /// Copy of this record without identity or persisted state, like a freshly replicated row.
    pub fn replicate(&self) -> Self {
        Self {
            id: None,
            current: self.current.clone(),
            original: BTreeMap::new(),
            translatable: self.translatable.clone(),
            fallback_locale: self.fallback_locale.clone(),
        }
    }
}

impl FieldAccessor for Record {
    fn id(&self) -> Option<EntityId> {
        self.id.clone()
    }

    fn get(&self, field: &str, locale: Option<&Locale>) -> Option<String> {
        self.current
            .get(field)
            .and_then(|value| value.read(locale, self.fallback_locale.as_ref()))
    }

    fn get_original(&self, field: &str, locale: Option<&Locale>) -> Option<String> {
        self.original
            .get(field)
            .and_then(|value| value.read(locale, self.fallback_locale.as_ref()))
    }

    fn get_exact(&self, field: &str, locale: Option<&Locale>) -> Option<String> {
        self.current
            .get(field)
            .and_then(|value| value.read(locale, None))
    }

    fn get_original_exact(&self, field: &str, locale: Option<&Locale>) -> Option<String> {
        self.original
            .get(field)
            .and_then(|value| value.read(locale, None))
    }

    fn set(&mut self, field: &str, value: String, locale: Option<&Locale>) -> DomainResult<()> {
        match locale {
            Some(locale) => self.set_translation(field, locale, value),
            None => self.put(field, value),
        }
        Ok(())
    }

    fn is_translatable(&self, field: &str) -> bool {
        self.translatable.contains(field)
    }

    fn translated_locales(&self, field: &str) -> Vec<Locale> {
        match self.current.get(field) {
            Some(FieldValue::Translated(values)) => values.iter().map(|(l, _)| l.clone()).collect(),
            _ => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn locale(code: &str) -> Locale {
        Locale::new(code).unwrap()
    }

    #[test]
    fn plain_fields_ignore_locale() {
        let record = Record::new().with("non_translatable_field", "awesome");
        assert_eq!(
            record.get("non_translatable_field", Some(&locale("nl"))),
            Some("awesome".to_string())
        );
        assert!(!record.is_translatable("non_translatable_field"));
    }

    #[test]
    fn missing_translation_falls_back() {
        let en = locale("en");
        let nl = locale("nl");
        let record = Record::new()
            .with_fallback_locale(en.clone())
            .with_translation("other_field", &en, "Other EN");
        assert_eq!(record.get("other_field", Some(&nl)), Some("Other EN".to_string()));
        assert_eq!(record.translation("other_field", &nl), None);
        assert_eq!(record.get_exact("other_field", Some(&nl)), None);
        assert_eq!(record.get_exact("other_field", Some(&en)), Some("Other EN".to_string()));
    }

    #[test]
    fn translated_locales_keep_insertion_order() {
        let record = Record::new()
            .with_translation("name", &locale("nl"), "NL")
            .with_translation("name", &locale("en"), "EN");
        assert_eq!(record.translated_locales("name"), vec![locale("nl"), locale("en")]);
    }

    #[test]
    fn original_snapshot_is_separate_from_current() {
        let mut record = Record::new().with("name", "a");
        assert_eq!(record.get_original("name", None), None);
        record.sync_original();
        record.put("name", "b");
        assert_eq!(record.get_original("name", None), Some("a".to_string()));
        assert_eq!(record.get("name", None), Some("b".to_string()));
    }

    #[test]
    fn replicate_drops_identity_and_snapshot() {
        let mut record = Record::new().with_id(7i64).with("url", "x");
        record.sync_original();
        let replica = record.replicate();
        assert_eq!(replica.id(), None);
        assert_eq!(replica.get("url", None), Some("x".to_string()));
        assert_eq!(replica.get_original("url", None), None);
    }
}
