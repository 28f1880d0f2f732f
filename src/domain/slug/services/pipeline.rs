// src/domain/slug/services/pipeline.rs
use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use super::change::{
    ChangeDetectionStrategy, FieldChangeDetector, NeverCustom, TranslatableChangeDetector,
};
use super::locale::{applicable_locales, modified_locales};
use super::source::SourceResolver;
use super::uniqueness::UniquenessResolver;
use super::{SkipReason, SlugOutcome};
use crate::application::ports::entity::FieldAccessor;
use crate::application::ports::util::SlugGenerator;
use crate::domain::errors::{DomainError, DomainResult, InvalidOption};
use crate::domain::slug::options::{SlugMode, SlugOptions};
use crate::domain::slug::repository::{SlugRepository, SlugStore};
use crate::domain::slug::text::truncate_chars;
use crate::domain::slug::value_objects::{EntityId, Locale, Slug, SlugCandidate, SlugScope};

/// Where generated slugs are written and how existing ones are read back.
#[async_trait]
pub trait PersistenceStrategy: Send + Sync {
    /// The non-empty slug currently stored for `locale`, if any.
    async fn existing(
        &self,
        entity: &dyn FieldAccessor,
        options: &SlugOptions,
        locale: Option<&Locale>,
    ) -> DomainResult<Option<String>>;

    /// Runs once per localized generation, after every slug was computed and
    /// before the first write.
    async fn prepare(&self, _entity: &dyn FieldAccessor, _locales: &[Locale]) -> DomainResult<()> {
        Ok(())
    }

    async fn write(
        &self,
        entity: &mut dyn FieldAccessor,
        scope: &SlugScope,
        slug: &Slug,
    ) -> DomainResult<()>;
}

/// Writes into the entity's own slug field (per locale when translatable).
#[derive(Debug, Default, Clone, Copy)]
pub struct FieldPersistence;

#[async_trait]
impl PersistenceStrategy for FieldPersistence {
    async fn existing(
        &self,
        entity: &dyn FieldAccessor,
        options: &SlugOptions,
        locale: Option<&Locale>,
    ) -> DomainResult<Option<String>> {
        Ok(entity
            .get_exact(options.slug_field(), locale)
            .filter(|value| !value.is_empty()))
    }

    async fn write(
        &self,
        entity: &mut dyn FieldAccessor,
        scope: &SlugScope,
        slug: &Slug,
    ) -> DomainResult<()> {
        entity.set(scope.field(), slug.to_string(), scope.locale())
    }
}

/// Writes into a separate slug table keyed by owner and locale.
pub struct SlugTablePersistence {
    store: Arc<dyn SlugStore>,
}

impl SlugTablePersistence {
    pub fn new(store: Arc<dyn SlugStore>) -> Self {
        Self { store }
    }
}

fn owner_of(entity: &dyn FieldAccessor) -> DomainResult<EntityId> {
    entity.id().ok_or_else(|| {
        DomainError::MissingIdentity("shared slugs can only be stored for persisted records".into())
    })
}

#[async_trait]
impl PersistenceStrategy for SlugTablePersistence {
    async fn existing(
        &self,
        entity: &dyn FieldAccessor,
        _options: &SlugOptions,
        locale: Option<&Locale>,
    ) -> DomainResult<Option<String>> {
        let (Some(owner), Some(locale)) = (entity.id(), locale) else {
            return Ok(None);
        };
        Ok(self
            .store
            .find(&owner, locale)
            .await?
            .map(Slug::into_inner)
            .filter(|value| !value.is_empty()))
    }

    async fn prepare(&self, entity: &dyn FieldAccessor, locales: &[Locale]) -> DomainResult<()> {
        let owner = owner_of(entity)?;
        let removed = self.store.retain_locales(&owner, locales).await?;
        if removed > 0 {
            debug!(%owner, removed, "dropped slugs of forgotten locales");
        }
        Ok(())
    }

    async fn write(
        &self,
        entity: &mut dyn FieldAccessor,
        scope: &SlugScope,
        slug: &Slug,
    ) -> DomainResult<()> {
        let owner = owner_of(&*entity)?;
        if scope.locale().is_none() {
            return Err(DomainError::Validation(
                "shared slugs are always stored per locale".into(),
            ));
        }
        self.store.upsert(&owner, scope, slug).await
    }
}

/// Source resolution, change detection, normalization, uniqueness and
/// persistence for one entity type, wired from its options.
pub struct SlugPipeline<'a> {
    options: &'a SlugOptions,
    repository: &'a dyn SlugRepository,
    generator: &'a dyn SlugGenerator,
    detector: Box<dyn ChangeDetectionStrategy>,
    persistence: Box<dyn PersistenceStrategy>,
}

impl<'a> SlugPipeline<'a> {
    /// Validates `options` and picks the strategies for its mode.
    pub fn new(
        options: &'a SlugOptions,
        repository: &'a dyn SlugRepository,
        generator: &'a dyn SlugGenerator,
        store: Option<Arc<dyn SlugStore>>,
    ) -> DomainResult<Self> {
        options.validate()?;

        let (detector, persistence): (Box<dyn ChangeDetectionStrategy>, Box<dyn PersistenceStrategy>) =
            match options.mode() {
                SlugMode::Single => (Box::new(FieldChangeDetector), Box::new(FieldPersistence)),
                SlugMode::Translatable => {
                    (Box::new(TranslatableChangeDetector), Box::new(FieldPersistence))
                }
                SlugMode::SharedTranslatable => {
                    let store = store.ok_or(InvalidOption::MissingSlugStore)?;
                    (Box::new(NeverCustom), Box::new(SlugTablePersistence::new(store)))
                }
            };

        Ok(Self {
            options,
            repository,
            generator,
            detector,
            persistence,
        })
    }

    pub fn options(&self) -> &SlugOptions {
        self.options
    }

    pub fn scope(&self, entity: &dyn FieldAccessor, locale: Option<&Locale>) -> SlugScope {
        SlugScope::new(self.options.slug_field())
            .with_locale(locale.cloned())
            .with_extra(self.options.extra_scope_for(entity))
    }

    pub fn is_custom(&self, entity: &dyn FieldAccessor, locale: Option<&Locale>) -> bool {
        self.detector
            .is_custom(entity, self.options, locale, self.generator)
    }

    /// Source text and normalized base for one locale, before uniqueness.
    pub fn candidate(&self, entity: &dyn FieldAccessor, locale: Option<&Locale>) -> SlugCandidate {
        let style = self.options.style();

        if self.is_custom(entity, locale) {
            let current = entity
                .get_exact(self.options.slug_field(), locale)
                .unwrap_or_default();
            let base = if self.detector.normalizes_custom_slugs() {
                self.generator.slugify(&current, &style)
            } else {
                current.clone()
            };
            debug!(locale = ?locale.map(Locale::as_str), custom = %current, "keeping custom slug");
            return SlugCandidate {
                raw_source: current,
                base,
                locale: locale.cloned(),
            };
        }

        let raw_source = SourceResolver::new(self.options).resolve(entity, locale);
        let base = self.generator.slugify(&raw_source, &style);
        debug!(locale = ?locale.map(Locale::as_str), source = %raw_source, base = %base, "slug source normalized");
        SlugCandidate {
            raw_source,
            base,
            locale: locale.cloned(),
        }
    }

    /// Final slug for one locale. Nothing is written.
    pub async fn compute(
        &self,
        entity: &dyn FieldAccessor,
        locale: Option<&Locale>,
    ) -> DomainResult<Slug> {
        let candidate = self.candidate(entity, locale);
        self.make_unique(entity, &candidate.base, locale).await
    }

    async fn make_unique(
        &self,
        entity: &dyn FieldAccessor,
        base: &str,
        locale: Option<&Locale>,
    ) -> DomainResult<Slug> {
        let scope = self.scope(entity, locale);
        let owner = entity.id();
        let unique = UniquenessResolver::new(self.repository, self.options)
            .make_unique(base, &scope, owner.as_ref())
            .await?;
        Ok(Slug::new(unique))
    }

    /// Generate and write slugs. With `keep_existing` a slot that already holds
    /// a slug is left alone.
    pub async fn run(
        &self,
        entity: &mut dyn FieldAccessor,
        keep_existing: bool,
    ) -> DomainResult<SlugOutcome> {
        if !self.options.mode().is_localized() {
            if keep_existing
                && self
                    .persistence
                    .existing(&*entity, self.options, None)
                    .await?
                    .is_some()
            {
                return Ok(SlugOutcome::Skipped(SkipReason::AlreadyPresent));
            }
            let slug = self.compute(&*entity, None).await?;
            let scope = self.scope(&*entity, None);
            self.persistence.write(entity, &scope, &slug).await?;
            return Ok(SlugOutcome::Single(slug));
        }

        let locales = applicable_locales(&*entity, self.options);
        if locales.is_empty() {
            return Ok(SlugOutcome::Skipped(SkipReason::NoLocales));
        }

        let targets = self.targets(&*entity, &locales).await?;

        let mut computed = Vec::with_capacity(targets.len());
        for locale in &targets {
            if keep_existing
                && self
                    .persistence
                    .existing(&*entity, self.options, Some(locale))
                    .await?
                    .is_some()
            {
                debug!(locale = %locale, "slug already present");
                continue;
            }
            let slug = self.compute(&*entity, Some(locale)).await?;
            computed.push((locale.clone(), slug));
        }

        // Nothing is touched until every locale resolved.
        self.persistence.prepare(&*entity, &locales).await?;

        if computed.is_empty() {
            let reason = if targets.is_empty() {
                SkipReason::Unchanged
            } else {
                SkipReason::AlreadyPresent
            };
            return Ok(SlugOutcome::Skipped(reason));
        }

        for (locale, slug) in &computed {
            let scope = self.scope(&*entity, Some(locale));
            self.persistence.write(entity, &scope, slug).await?;
        }

        Ok(SlugOutcome::Localized(computed))
    }

    /// Locales to (re)generate. The shared table only revisits locales whose
    /// source changed or that have no stored slug yet.
    async fn targets(
        &self,
        entity: &dyn FieldAccessor,
        locales: &[Locale],
    ) -> DomainResult<Vec<Locale>> {
        if self.options.mode() != SlugMode::SharedTranslatable {
            return Ok(locales.to_vec());
        }

        let modified = modified_locales(entity, self.options);
        let mut targets = Vec::new();
        for locale in locales {
            if modified.contains(locale)
                || self
                    .persistence
                    .existing(entity, self.options, Some(locale))
                    .await?
                    .is_none()
            {
                targets.push(locale.clone());
            }
        }
        Ok(targets)
    }

    /// Normalize and uniquify an explicit value, then write it.
    pub async fn assign(
        &self,
        entity: &mut dyn FieldAccessor,
        value: &str,
        locale: Option<&Locale>,
    ) -> DomainResult<Slug> {
        let locale = if self.options.mode().is_localized() {
            Some(locale.ok_or_else(|| {
                DomainError::Validation("a locale is required for localized slugs".into())
            })?)
        } else {
            None
        };

        let source = truncate_chars(value, self.options.max_length());
        let base = self.generator.slugify(source, &self.options.style());
        let slug = self.make_unique(&*entity, &base, locale).await?;
        let scope = self.scope(&*entity, locale);
        self.persistence.write(entity, &scope, &slug).await?;
        Ok(slug)
    }
}
