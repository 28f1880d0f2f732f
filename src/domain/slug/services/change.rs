// src/domain/slug/services/change.rs
use crate::application::ports::entity::FieldAccessor;
use crate::application::ports::util::SlugGenerator;
use crate::domain::slug::options::SlugOptions;
use crate::domain::slug::services::source::SourceResolver;
use crate::domain::slug::text::is_numbered_variant;
use crate::domain::slug::value_objects::Locale;

/// Decides whether the slug currently held by an entity was typed in by a
/// caller rather than produced by the pipeline.
pub trait ChangeDetectionStrategy: Send + Sync {
    fn is_custom(
        &self,
        entity: &dyn FieldAccessor,
        options: &SlugOptions,
        locale: Option<&Locale>,
        generator: &dyn SlugGenerator,
    ) -> bool;

    /// Whether a custom slug is passed through the normalizer before uniquifying.
    fn normalizes_custom_slugs(&self) -> bool {
        false
    }
}

/// Single-field slugs. Custom values are kept verbatim.
#[derive(Debug, Default, Clone, Copy)]
pub struct FieldChangeDetector;

/// Per-locale slugs. Custom values are normalized like any other source.
#[derive(Debug, Default, Clone, Copy)]
pub struct TranslatableChangeDetector;

/// Shared slug tables only change through explicit overrides.
#[derive(Debug, Default, Clone, Copy)]
pub struct NeverCustom;

impl ChangeDetectionStrategy for FieldChangeDetector {
    fn is_custom(
        &self,
        entity: &dyn FieldAccessor,
        options: &SlugOptions,
        locale: Option<&Locale>,
        generator: &dyn SlugGenerator,
    ) -> bool {
        detect_custom(entity, options, locale, generator)
    }
}

impl ChangeDetectionStrategy for TranslatableChangeDetector {
    fn is_custom(
        &self,
        entity: &dyn FieldAccessor,
        options: &SlugOptions,
        locale: Option<&Locale>,
        generator: &dyn SlugGenerator,
    ) -> bool {
        detect_custom(entity, options, locale, generator)
    }

    fn normalizes_custom_slugs(&self) -> bool {
        true
    }
}

impl ChangeDetectionStrategy for NeverCustom {
    fn is_custom(
        &self,
        _entity: &dyn FieldAccessor,
        _options: &SlugOptions,
        _locale: Option<&Locale>,
        _generator: &dyn SlugGenerator,
    ) -> bool {
        false
    }
}

/// A slug is custom when it is non-empty and either differs from the
/// persisted value or, for field sources, no longer derives from the title.
fn detect_custom(
    entity: &dyn FieldAccessor,
    options: &SlugOptions,
    locale: Option<&Locale>,
    generator: &dyn SlugGenerator,
) -> bool {
    let field = options.slug_field();
    let current = entity.get_exact(field, locale).unwrap_or_default();
    if current.is_empty() {
        return false;
    }

    let original = entity.get_original_exact(field, locale).unwrap_or_default();
    if original != current {
        return true;
    }

    if options.source().is_computed() {
        return false;
    }

    !is_based_on_title(entity, options, locale, generator, &current)
}

/// `current` equals the slug of the persisted or current source, optionally
/// followed by one separator and a numeric uniqueness suffix.
pub fn is_based_on_title(
    entity: &dyn FieldAccessor,
    options: &SlugOptions,
    locale: Option<&Locale>,
    generator: &dyn SlugGenerator,
    current: &str,
) -> bool {
    let resolver = SourceResolver::new(options);
    let style = options.style();
    let separator = options.separator();

    let persisted_title = generator.slugify(&resolver.resolve_original(entity, locale), &style);
    if is_numbered_variant(current, &persisted_title, separator) {
        return true;
    }

    let current_title = generator.slugify(&resolver.resolve(entity, locale), &style);
    is_numbered_variant(current, &current_title, separator)
}
