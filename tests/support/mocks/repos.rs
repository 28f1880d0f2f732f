// tests/support/mocks/repos.rs
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use sluggable_core::domain::errors::{DomainError, DomainResult};
use sluggable_core::domain::slug::{EntityId, Locale, Slug, SlugRepository, SlugScope, SlugStore};
use sluggable_core::infrastructure::repositories::InMemorySlugRepository;

/* -------------------------------- FailingRepo -------------------------------- */

/// 存在確認が常に失敗するリポジトリ
pub struct FailingRepo;

#[async_trait]
impl SlugRepository for FailingRepo {
    async fn exists_with_slug(
        &self,
        _slug: &str,
        _scope: &SlugScope,
        _exclude: Option<&EntityId>,
    ) -> DomainResult<bool> {
        Err(DomainError::collaborator("database is unavailable"))
    }
}

/* -------------------------------- FailingStore -------------------------------- */

/// 書き込みが失敗するスラッグテーブル
pub struct FailingStore;

#[async_trait]
impl SlugStore for FailingStore {
    async fn find(&self, _owner: &EntityId, _locale: &Locale) -> DomainResult<Option<Slug>> {
        Ok(None)
    }

    async fn upsert(&self, _owner: &EntityId, _scope: &SlugScope, _slug: &Slug) -> DomainResult<()> {
        Err(DomainError::collaborator("slug table is read-only"))
    }

    async fn retain_locales(&self, _owner: &EntityId, _locales: &[Locale]) -> DomainResult<usize> {
        Ok(0)
    }
}

/* -------------------------------- RecordingRepo -------------------------------- */

/// 存在確認の呼び出しを記録する
#[derive(Debug, Clone)]
pub struct Probe {
    pub slug: String,
    pub scope: SlugScope,
    pub exclude: Option<EntityId>,
}

/// インメモリリポジトリに委譲しつつ呼び出しを記録する
#[derive(Default)]
pub struct RecordingRepo {
    pub inner: Arc<InMemorySlugRepository>,
    probes: Mutex<Vec<Probe>>,
}

impl RecordingRepo {
    pub fn new(inner: Arc<InMemorySlugRepository>) -> Self {
        Self {
            inner,
            probes: Mutex::new(Vec::new()),
        }
    }

    pub fn probes(&self) -> Vec<Probe> {
        self.probes.lock().unwrap().clone()
    }
}

#[async_trait]
impl SlugRepository for RecordingRepo {
    async fn exists_with_slug(
        &self,
        slug: &str,
        scope: &SlugScope,
        exclude: Option<&EntityId>,
    ) -> DomainResult<bool> {
        self.probes.lock().unwrap().push(Probe {
            slug: slug.to_string(),
            scope: scope.clone(),
            exclude: exclude.cloned(),
        });
        self.inner.exists_with_slug(slug, scope, exclude).await
    }
}
