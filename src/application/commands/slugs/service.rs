// src/application/commands/slugs/service.rs
use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::slug::{SlugOutcome, SlugService};

/// Entry points a host calls from its record lifecycle.
pub struct SlugCommandService {
    pub(super) slug_service: Arc<SlugService>,
}

impl SlugCommandService {
    pub fn new(slug_service: Arc<SlugService>) -> Self {
        Self { slug_service }
    }
}

pub(super) fn log_outcome(entity_type: &str, outcome: &SlugOutcome) {
    match outcome {
        SlugOutcome::Single(slug) => info!(entity_type, slug = %slug, "slug written"),
        SlugOutcome::Localized(slugs) => {
            for (locale, slug) in slugs {
                info!(entity_type, locale = %locale, slug = %slug, "slug written");
            }
        }
        SlugOutcome::Skipped(reason) => {
            debug!(entity_type, ?reason, "slug generation skipped");
        }
    }
}
