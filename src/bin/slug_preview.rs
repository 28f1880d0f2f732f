use std::sync::Arc;

use anyhow::Result;
use serde_json::json;
use sluggable_core::application::commands::slugs::SlugCommandService;
use sluggable_core::config::SlugDefaults;
use sluggable_core::domain::slug::{SlugOptions, SlugService};
use sluggable_core::infrastructure::normalizer::DefaultSlugGenerator;
use sluggable_core::infrastructure::record::Record;
use sluggable_core::infrastructure::repositories::InMemorySlugRepository;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Prints the slug each argument would receive. Arguments are processed in
/// order against one in-memory table, so repeated titles show their suffixes.
#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let defaults = SlugDefaults::from_env()?;
    let options = SlugOptions::create()
        .with_defaults(&defaults)
        .generate_slugs_from(["title"])
        .save_slugs_to("slug");

    let repository = Arc::new(InMemorySlugRepository::new());
    let service = Arc::new(SlugService::new(
        repository.clone(),
        Arc::new(DefaultSlugGenerator),
    ));
    let commands = SlugCommandService::new(service);

    let titles: Vec<String> = std::env::args().skip(1).collect();
    if titles.is_empty() {
        tracing::warn!("no titles given; usage: slug_preview <title>...");
        return Ok(());
    }

    let mut previews = Vec::with_capacity(titles.len());
    for (index, title) in titles.iter().enumerate() {
        let id = i64::try_from(index)? + 1;
        let mut record = Record::new().with_id(id).with("title", title.as_str());
        let outcome = commands
            .generate_on_create("preview", &mut record, &options)
            .await?;
        repository.persist(&record, &options)?;
        previews.push(json!({ "title": title, "outcome": outcome }));
    }

    println!("{}", serde_json::to_string_pretty(&previews)?);
    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}
