// src/domain/slug/services/mod.rs
use std::sync::Arc;

use serde::Serialize;

use crate::application::ports::entity::FieldAccessor;
use crate::application::ports::util::SlugGenerator;
use crate::domain::errors::{DomainResult, InvalidOption};
use crate::domain::slug::options::SlugOptions;
use crate::domain::slug::repository::{SlugRepository, SlugStore};
use crate::domain::slug::value_objects::{EntityId, Locale, Slug, SlugCandidate};

pub mod change;
pub mod locale;
pub mod pipeline;
pub mod source;
pub mod uniqueness;

pub use pipeline::{FieldPersistence, PersistenceStrategy, SlugPipeline, SlugTablePersistence};

/// What caused a generation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SlugTrigger {
    Create,
    Update,
    /// Caller asked for it; create/update flags and prevent-overwrite do not apply.
    Explicit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// Generation is switched off for this trigger.
    Disabled,
    /// The skip predicate matched.
    Predicate,
    /// Prevent-overwrite is on and every slot already holds a slug.
    AlreadyPresent,
    /// A localized entity without any translated source.
    NoLocales,
    /// Shared slugs whose sources did not change.
    Unchanged,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum SlugOutcome {
    Skipped(SkipReason),
    Single(Slug),
    /// Written slugs in processing order.
    Localized(Vec<(Locale, Slug)>),
}

impl SlugOutcome {
    pub fn is_skipped(&self) -> bool {
        matches!(self, Self::Skipped(_))
    }

    /// Slug written for `locale`, or the single slug when `locale` is `None`.
    pub fn slug(&self, locale: Option<&Locale>) -> Option<&Slug> {
        match (self, locale) {
            (Self::Single(slug), None) => Some(slug),
            (Self::Localized(slugs), Some(wanted)) => slugs
                .iter()
                .find(|(locale, _)| locale == wanted)
                .map(|(_, slug)| slug),
            _ => None,
        }
    }
}

/// Domain service producing unique slugs for any entity exposing `FieldAccessor`.
pub struct SlugService {
    repository: Arc<dyn SlugRepository>,
    generator: Arc<dyn SlugGenerator>,
    store: Option<Arc<dyn SlugStore>>,
}

impl SlugService {
    pub fn new(repository: Arc<dyn SlugRepository>, generator: Arc<dyn SlugGenerator>) -> Self {
        Self {
            repository,
            generator,
            store: None,
        }
    }

    /// Slug table backing `SlugMode::SharedTranslatable`.
    pub fn with_store(mut self, store: Arc<dyn SlugStore>) -> Self {
        self.store = Some(store);
        self
    }

    pub fn pipeline<'a>(&'a self, options: &'a SlugOptions) -> DomainResult<SlugPipeline<'a>> {
        SlugPipeline::new(
            options,
            self.repository.as_ref(),
            self.generator.as_ref(),
            self.store.clone(),
        )
    }

    /// Explicit generation. Ignores the create/update flags.
    pub async fn generate(
        &self,
        entity: &mut dyn FieldAccessor,
        options: &SlugOptions,
    ) -> DomainResult<SlugOutcome> {
        self.handle(entity, options, SlugTrigger::Explicit).await
    }

    pub async fn handle(
        &self,
        entity: &mut dyn FieldAccessor,
        options: &SlugOptions,
        trigger: SlugTrigger,
    ) -> DomainResult<SlugOutcome> {
        let pipeline = self.pipeline(options)?;

        if options.should_skip(&*entity) {
            return Ok(SlugOutcome::Skipped(SkipReason::Predicate));
        }

        let enabled = match trigger {
            SlugTrigger::Create => options.generates_on_create(),
            SlugTrigger::Update => options.generates_on_update(),
            SlugTrigger::Explicit => true,
        };
        if !enabled {
            return Ok(SlugOutcome::Skipped(SkipReason::Disabled));
        }

        let keep_existing = trigger != SlugTrigger::Explicit && options.prevents_overwrite();
        pipeline.run(entity, keep_existing).await
    }

    pub fn is_custom_slug(
        &self,
        entity: &dyn FieldAccessor,
        options: &SlugOptions,
        locale: Option<&Locale>,
    ) -> DomainResult<bool> {
        Ok(self.pipeline(options)?.is_custom(entity, locale))
    }

    pub fn candidate(
        &self,
        entity: &dyn FieldAccessor,
        options: &SlugOptions,
        locale: Option<&Locale>,
    ) -> DomainResult<SlugCandidate> {
        Ok(self.pipeline(options)?.candidate(entity, locale))
    }

    /// Normalize, uniquify and store an explicit slug value.
    pub async fn set_slug(
        &self,
        entity: &mut dyn FieldAccessor,
        options: &SlugOptions,
        value: &str,
        locale: Option<&Locale>,
    ) -> DomainResult<Slug> {
        self.pipeline(options)?.assign(entity, value, locale).await
    }

    pub async fn find_slug(&self, owner: &EntityId, locale: &Locale) -> DomainResult<Option<Slug>> {
        self.store()?.find(owner, locale).await
    }

    /// Remove every stored slug of `owner`.
    pub async fn forget_slugs(&self, owner: &EntityId) -> DomainResult<usize> {
        self.store()?.retain_locales(owner, &[]).await
    }

    fn store(&self) -> DomainResult<&Arc<dyn SlugStore>> {
        Ok(self.store.as_ref().ok_or(InvalidOption::MissingSlugStore)?)
    }
}
