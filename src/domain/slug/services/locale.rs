// src/domain/slug/services/locale.rs
use crate::application::ports::entity::FieldAccessor;
use crate::domain::slug::options::{SlugOptions, SlugSource};
use crate::domain::slug::value_objects::Locale;

/// Locales a localized slug is generated for.
///
/// A computed source uses the declared locales. A field source uses every
/// locale present in any translatable source field, in discovery order.
pub fn applicable_locales(entity: &dyn FieldAccessor, options: &SlugOptions) -> Vec<Locale> {
    match options.source() {
        SlugSource::Computed(_) => dedup(options.locales().iter().cloned()),
        SlugSource::Fields(fields) => dedup(
            fields
                .iter()
                .filter(|field| entity.is_translatable(field))
                .flat_map(|field| entity.translated_locales(field)),
        ),
    }
}

/// Locales whose translatable source changed since the last persist.
///
/// Computed sources cannot be diffed, so all declared locales count as modified.
pub fn modified_locales(entity: &dyn FieldAccessor, options: &SlugOptions) -> Vec<Locale> {
    match options.source() {
        SlugSource::Computed(_) => dedup(options.locales().iter().cloned()),
        SlugSource::Fields(fields) => dedup(
            fields
                .iter()
                .filter(|field| entity.is_translatable(field))
                .flat_map(|field| {
                    entity
                        .translated_locales(field)
                        .into_iter()
                        .filter(move |locale| {
                            entity.get(field, Some(locale)) != entity.get_original(field, Some(locale))
                        })
                }),
        ),
    }
}

fn dedup(locales: impl Iterator<Item = Locale>) -> Vec<Locale> {
    let mut seen = Vec::new();
    for locale in locales {
        if !seen.contains(&locale) {
            seen.push(locale);
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::record::Record;

    fn locale(code: &str) -> Locale {
        Locale::new(code).unwrap()
    }

    fn options() -> SlugOptions {
        SlugOptions::create()
            .generate_slugs_from(["name", "other_field", "plain"])
            .save_slugs_to("slug")
            .translatable()
    }

    #[test]
    fn union_of_translatable_fields_in_discovery_order() {
        let record = Record::new()
            .with_translation("name", &locale("en"), "EN")
            .with_translation("name", &locale("nl"), "NL")
            .with_translation("other_field", &locale("fr"), "FR")
            .with_translation("other_field", &locale("en"), "EN")
            .with("plain", "shared");
        assert_eq!(
            applicable_locales(&record, &options()),
            vec![locale("en"), locale("nl"), locale("fr")]
        );
    }

    #[test]
    fn computed_source_uses_declared_locales() {
        let options = SlugOptions::create_with_locales([locale("en"), locale("nl"), locale("en")])
            .generate_slugs_with(|_, _| "x".into())
            .save_slugs_to("slug");
        let record = Record::new().with_translation("name", &locale("fr"), "FR");
        assert_eq!(applicable_locales(&record, &options), vec![locale("en"), locale("nl")]);
        assert_eq!(modified_locales(&record, &options), vec![locale("en"), locale("nl")]);
    }

    #[test]
    fn only_changed_translations_are_modified() {
        let mut record = Record::new()
            .with_translation("name", &locale("en"), "Test EN")
            .with_translation("name", &locale("nl"), "Test NL");
        record.sync_original();
        record.set_translation("name", &locale("en"), "Updated EN");
        assert_eq!(modified_locales(&record, &options()), vec![locale("en")]);
    }

    #[test]
    fn new_records_have_every_locale_modified() {
        let record = Record::new()
            .with_translation("name", &locale("en"), "Test EN")
            .with_translation("name", &locale("nl"), "Test NL");
        assert_eq!(modified_locales(&record, &options()), vec![locale("en"), locale("nl")]);
    }
}
