// tests/scoped_slugs.rs
mod support;

use std::collections::BTreeMap;
use std::sync::Arc;

use sluggable_core::application::ports::entity::FieldAccessor;
use sluggable_core::domain::slug::SlugOptions;
use sluggable_core::infrastructure::record::Record;
use sluggable_core::infrastructure::repositories::InMemorySlugRepository;
use support::{
    Harness, RecordingRepo, TranslatableModelBuilder, title_options, translatable_options, url,
};

fn recording() -> (Harness, Arc<RecordingRepo>) {
    let repo = Arc::new(InMemorySlugRepository::new());
    let probe = Arc::new(RecordingRepo::new(repo.clone()));
    (Harness::with_repository(repo, probe.clone()), probe)
}

fn per_tenant() -> SlugOptions {
    title_options().unique_within(["tenant"])
}

fn in_tenant(name: &str, tenant: &str) -> Record {
    Record::new().with("name", name).with("tenant", tenant)
}

#[tokio::test]
async fn same_slug_is_allowed_in_different_scopes() {
    let harness = Harness::new();
    let options = per_tenant();

    let mut first = in_tenant("Hello", "1");
    let mut second = in_tenant("Hello", "2");
    let mut third = in_tenant("Hello", "1");
    harness.create(&mut first, &options).await;
    harness.create(&mut second, &options).await;
    harness.create(&mut third, &options).await;

    assert_eq!(url(&first), "hello");
    assert_eq!(url(&second), "hello");
    assert_eq!(url(&third), "hello-1");
}

#[tokio::test]
async fn moving_to_another_scope_frees_the_base_slug() {
    let harness = Harness::new();
    let options = per_tenant();

    harness.create(&mut in_tenant("Hello", "1"), &options).await;
    let mut moved = in_tenant("Hello", "1");
    harness.create(&mut moved, &options).await;
    assert_eq!(url(&moved), "hello-1");

    moved.put("tenant", "2");
    harness.update(&mut moved, &options).await;
    assert_eq!(url(&moved), "hello");
}

#[tokio::test]
async fn computed_extra_scope() {
    let harness = Harness::new();
    let options = title_options().extra_scope(|entity| {
        BTreeMap::from([(
            "scope_id".to_string(),
            entity.get("tenant", None).unwrap_or_default().to_uppercase(),
        )])
    });

    let mut lower = in_tenant("Hello", "a");
    let mut upper = in_tenant("Hello", "A");
    harness.create(&mut lower, &options).await;
    harness.create(&mut upper, &options).await;

    assert_eq!(url(&lower), "hello");
    assert_eq!(url(&upper), "hello-1");
}

#[tokio::test]
async fn probes_carry_field_scope_and_identity() {
    let (harness, probe) = recording();
    let options = per_tenant();

    let mut first = in_tenant("Hello", "7");
    harness.create(&mut first, &options).await;
    let mut second = in_tenant("Hello", "7");
    harness.create(&mut second, &options).await;

    let probes = probe.probes();
    let slugs: Vec<&str> = probes.iter().map(|p| p.slug.as_str()).collect();
    assert_eq!(slugs, ["hello", "hello", "hello-1"]);

    for p in &probes {
        assert_eq!(p.scope.field(), "url");
        assert_eq!(p.scope.locale(), None);
        assert_eq!(p.scope.extra().get("tenant").map(String::as_str), Some("7"));
        // Create probes run before the record has an identity.
        assert_eq!(p.exclude, None);
    }
}

#[tokio::test]
async fn update_probes_exclude_the_record_itself() {
    let (harness, probe) = recording();
    let options = title_options();

    let mut record = Record::new().with("name", "Hello");
    harness.create(&mut record, &options).await;
    let id = record.id().unwrap();

    record.put("name", "Hello again");
    harness.update(&mut record, &options).await;

    let last = probe.probes().pop().unwrap();
    assert_eq!(last.slug, "hello-again");
    assert_eq!(last.exclude, Some(id));
}

#[tokio::test]
async fn localized_probes_are_scoped_per_locale() {
    let (harness, probe) = recording();
    let options = translatable_options();

    let mut record = TranslatableModelBuilder::new()
        .name("en", "Hello")
        .name("nl", "Hallo")
        .build();
    harness.create(&mut record, &options).await;

    let probes = probe.probes();
    let seen: Vec<(String, Option<String>)> = probes
        .iter()
        .map(|p| {
            (
                p.slug.clone(),
                p.scope.locale().map(|l| l.as_str().to_string()),
            )
        })
        .collect();
    assert_eq!(
        seen,
        [
            ("hello".to_string(), Some("en".to_string())),
            ("hallo".to_string(), Some("nl".to_string())),
        ]
    );
    assert!(probes.iter().all(|p| p.scope.field() == "slug"));
}

#[tokio::test]
async fn allow_duplicates_never_probes() {
    let (harness, probe) = recording();
    let options = title_options().allow_duplicate_slugs();

    harness.create(&mut Record::new().with("name", "Hello"), &options).await;
    harness.create(&mut Record::new().with("name", "Hello"), &options).await;

    assert!(probe.probes().is_empty());
}
