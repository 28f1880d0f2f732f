// src/infrastructure/repositories/memory.rs
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::application::ports::entity::FieldAccessor;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::slug::options::SlugOptions;
use crate::domain::slug::repository::{SlugRepository, SlugStore};
use crate::domain::slug::value_objects::{EntityId, Locale, Slug, SlugScope};

#[derive(Debug, Clone)]
struct SlugRow {
    owner: Option<EntityId>,
    scope: SlugScope,
    slug: String,
    deleted: bool,
}

impl SlugRow {
    fn same_slot(&self, owner: &EntityId, scope: &SlugScope) -> bool {
        self.owner.as_ref() == Some(owner)
            && self.scope.field() == scope.field()
            && self.scope.locale() == scope.locale()
    }

    /// Every extra entry of `scope` has to match; rows may carry more.
    fn in_scope(&self, scope: &SlugScope) -> bool {
        self.scope.field() == scope.field()
            && self.scope.locale() == scope.locale()
            && scope
                .extra()
                .iter()
                .all(|(key, value)| self.scope.extra().get(key) == Some(value))
    }
}

/// Slug rows kept in process memory. Serves both as the existence probe for
/// field-stored slugs and as the shared slug table.
///
/// Soft-deleted rows still count as taken.
#[derive(Debug, Default)]
pub struct InMemorySlugRepository {
    rows: Mutex<Vec<SlugRow>>,
}

impl InMemorySlugRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn rows(&self) -> DomainResult<MutexGuard<'_, Vec<SlugRow>>> {
        self.rows
            .lock()
            .map_err(|_| DomainError::collaborator("slug repository lock poisoned"))
    }

    /// Record a persisted slug. A row for the same owner, field and locale is replaced.
    pub fn save(
        &self,
        owner: Option<EntityId>,
        scope: SlugScope,
        slug: impl Into<String>,
    ) -> DomainResult<()> {
        let slug = slug.into();
        let mut rows = self.rows()?;
        let existing = owner
            .as_ref()
            .and_then(|owner| rows.iter().position(|row| row.same_slot(owner, &scope)));
        match existing {
            Some(index) => {
                rows[index].slug = slug;
                rows[index].scope = scope;
            }
            None => rows.push(SlugRow {
                owner,
                scope,
                slug,
                deleted: false,
            }),
        }
        Ok(())
    }

    /// Persist the slug field of `entity` the way a host store would after a save.
    pub fn persist(&self, entity: &dyn FieldAccessor, options: &SlugOptions) -> DomainResult<()> {
        let field = options.slug_field();
        let extra = options.extra_scope_for(entity);
        let owner = entity.id();

        if entity.is_translatable(field) {
            for locale in entity.translated_locales(field) {
                let slug = entity.get_exact(field, Some(&locale)).unwrap_or_default();
                let scope = SlugScope::new(field)
                    .with_locale(Some(locale))
                    .with_extra(extra.clone());
                self.save(owner.clone(), scope, slug)?;
            }
            return Ok(());
        }

        if let Some(slug) = entity.get(field, None) {
            self.save(owner, SlugScope::new(field).with_extra(extra), slug)?;
        }
        Ok(())
    }

    /// Mark every row of `owner` as deleted without freeing its slugs.
    pub fn soft_delete(&self, owner: &EntityId) -> DomainResult<usize> {
        let mut rows = self.rows()?;
        let mut count = 0;
        for row in rows.iter_mut().filter(|row| row.owner.as_ref() == Some(owner)) {
            row.deleted = true;
            count += 1;
        }
        Ok(count)
    }

    /// Live slugs in insertion order.
    pub fn slugs(&self) -> DomainResult<Vec<String>> {
        Ok(self
            .rows()?
            .iter()
            .filter(|row| !row.deleted)
            .map(|row| row.slug.clone())
            .collect())
    }
}

#[async_trait]
impl SlugRepository for InMemorySlugRepository {
    async fn exists_with_slug(
        &self,
        slug: &str,
        scope: &SlugScope,
        exclude: Option<&EntityId>,
    ) -> DomainResult<bool> {
        let rows = self.rows()?;
        Ok(rows.iter().any(|row| {
            row.slug == slug
                && row.in_scope(scope)
                && (exclude.is_none() || row.owner.as_ref() != exclude)
        }))
    }
}

#[async_trait]
impl SlugStore for InMemorySlugRepository {
    async fn find(&self, owner: &EntityId, locale: &Locale) -> DomainResult<Option<Slug>> {
        let rows = self.rows()?;
        Ok(rows
            .iter()
            .find(|row| {
                !row.deleted
                    && row.owner.as_ref() == Some(owner)
                    && row.scope.locale() == Some(locale)
            })
            .map(|row| Slug::new(row.slug.clone())))
    }

    async fn upsert(&self, owner: &EntityId, scope: &SlugScope, slug: &Slug) -> DomainResult<()> {
        self.save(Some(owner.clone()), scope.clone(), slug.as_str())
    }

    async fn retain_locales(&self, owner: &EntityId, locales: &[Locale]) -> DomainResult<usize> {
        let mut rows = self.rows()?;
        let before = rows.len();
        rows.retain(|row| {
            row.owner.as_ref() != Some(owner)
                || row
                    .scope
                    .locale()
                    .is_some_and(|locale| locales.contains(locale))
        });
        Ok(before - rows.len())
    }
}
