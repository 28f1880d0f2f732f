// tests/support/helpers.rs
use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};

use sluggable_core::application::commands::slugs::SlugCommandService;
use sluggable_core::application::ports::entity::FieldAccessor;
use sluggable_core::application::queries::slugs::SlugQueryService;
use sluggable_core::domain::slug::{
    Locale, SlugMode, SlugOptions, SlugOutcome, SlugRepository, SlugService,
};
use sluggable_core::infrastructure::normalizer::DefaultSlugGenerator;
use sluggable_core::infrastructure::record::Record;
use sluggable_core::infrastructure::repositories::InMemorySlugRepository;

/// インメモリストアとサービス一式。レコードの保存を模倣する。
pub struct Harness {
    pub repo: Arc<InMemorySlugRepository>,
    pub service: Arc<SlugService>,
    pub commands: SlugCommandService,
    pub queries: SlugQueryService,
    next_id: AtomicI64,
}

impl Harness {
    pub fn new() -> Self {
        let repo = Arc::new(InMemorySlugRepository::new());
        Self::with_repository(repo.clone(), repo)
    }

    /// 存在確認は `probe` を経由し、保存した行は `repo` に入る
    pub fn with_repository(
        repo: Arc<InMemorySlugRepository>,
        probe: Arc<dyn SlugRepository>,
    ) -> Self {
        let service = Arc::new(
            SlugService::new(probe, Arc::new(DefaultSlugGenerator)).with_store(repo.clone()),
        );
        Self {
            commands: SlugCommandService::new(service.clone()),
            queries: SlugQueryService::new(service.clone()),
            service,
            repo,
            next_id: AtomicI64::new(1),
        }
    }

    /// 挿入: スラッグは行の作成前に生成する。共有スラッグだけは
    /// 挿入後の ID が必要なので先に ID を振る。
    pub async fn create(&self, record: &mut Record, options: &SlugOptions) -> SlugOutcome {
        let shared = options.mode() == SlugMode::SharedTranslatable;
        if shared {
            self.assign_id(record);
        }
        let outcome = self
            .commands
            .generate_on_create("test_model", record, options)
            .await
            .unwrap();
        if !shared {
            self.assign_id(record);
        }
        self.persist(record, options);
        outcome
    }

    pub async fn update(&self, record: &mut Record, options: &SlugOptions) -> SlugOutcome {
        let outcome = self
            .commands
            .generate_on_update("test_model", record, options)
            .await
            .unwrap();
        self.persist(record, options);
        outcome
    }

    pub async fn generate(&self, record: &mut Record, options: &SlugOptions) -> SlugOutcome {
        let outcome = self
            .commands
            .generate("test_model", record, options)
            .await
            .unwrap();
        self.persist(record, options);
        outcome
    }

    pub fn persist(&self, record: &mut Record, options: &SlugOptions) {
        if options.mode() != SlugMode::SharedTranslatable {
            self.repo.persist(&*record, options).unwrap();
        }
        record.sync_original();
    }

    fn assign_id(&self, record: &mut Record) {
        if record.id().is_none() {
            record.assign_id(self.next_id.fetch_add(1, Ordering::SeqCst));
        }
    }
}

pub fn url(record: &Record) -> String {
    record.get("url", None).unwrap_or_default()
}

pub fn slug_in(record: &Record, locale: &Locale) -> String {
    record.translation("slug", locale).unwrap_or_default()
}
