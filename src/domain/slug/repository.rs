// src/domain/slug/repository.rs
use crate::domain::errors::DomainResult;
use crate::domain::slug::value_objects::{EntityId, Locale, Slug, SlugScope};
use async_trait::async_trait;

/// Existence probe backing the uniqueness loop.
///
/// Implementations must apply every entry of `scope.extra()`, skip the record
/// identified by `exclude`, and count soft-deleted records as taken. Two
/// concurrent callers can both observe `false` for the same candidate; a
/// storage-level unique constraint is what ultimately guarantees uniqueness.
#[async_trait]
pub trait SlugRepository: Send + Sync {
    async fn exists_with_slug(
        &self,
        slug: &str,
        scope: &SlugScope,
        exclude: Option<&EntityId>,
    ) -> DomainResult<bool>;
}

/// Slug table used by shared translatable slugs: one row per owner and locale.
#[async_trait]
pub trait SlugStore: Send + Sync {
    async fn find(&self, owner: &EntityId, locale: &Locale) -> DomainResult<Option<Slug>>;

    /// Insert or replace the row of `owner` for the locale of `scope`. The scope is
    /// stored alongside so later existence probes can honour its extra entries.
    async fn upsert(&self, owner: &EntityId, scope: &SlugScope, slug: &Slug) -> DomainResult<()>;

    /// Drop rows of `owner` whose locale is not in `locales`. Returns how many were removed.
    async fn retain_locales(&self, owner: &EntityId, locales: &[Locale]) -> DomainResult<usize>;
}
