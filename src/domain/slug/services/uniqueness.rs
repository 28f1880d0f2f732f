// src/domain/slug/services/uniqueness.rs
use tracing::debug;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::slug::options::{SlugOptions, Uniqueness};
use crate::domain::slug::repository::SlugRepository;
use crate::domain::slug::value_objects::{EntityId, SlugScope};

/// Appends `separator + suffix` to a candidate until the repository reports it free.
pub struct UniquenessResolver<'a> {
    repository: &'a dyn SlugRepository,
    options: &'a SlugOptions,
}

impl<'a> UniquenessResolver<'a> {
    pub fn new(repository: &'a dyn SlugRepository, options: &'a SlugOptions) -> Self {
        Self {
            repository,
            options,
        }
    }

    /// An empty candidate is never accepted while uniqueness is enforced, so an
    /// empty base yields `-1`, `-2`, ... (with the default separator and suffixes).
    /// Running past the last `u64` suffix is a validation error.
    pub async fn make_unique(
        &self,
        candidate: &str,
        scope: &SlugScope,
        exclude: Option<&EntityId>,
    ) -> DomainResult<String> {
        if self.options.uniqueness() == Uniqueness::AllowDuplicates {
            return Ok(candidate.to_string());
        }

        let separator = self.options.separator();
        let mut slug = candidate.to_string();
        let mut next = Some(self.options.suffix_start());
        let mut force_suffix = self.options.suffix_on_first_occurrence();

        loop {
            let taken = if slug.is_empty() || force_suffix {
                true
            } else {
                self.repository
                    .exists_with_slug(&slug, scope, exclude)
                    .await?
            };

            if !taken {
                return Ok(slug);
            }

            debug!(%scope, rejected = %slug, "slug candidate rejected");
            let iteration = next.ok_or_else(|| {
                DomainError::Validation(format!("suffixes for {candidate:?} are exhausted"))
            })?;
            force_suffix = false;
            slug = format!(
                "{candidate}{separator}{}",
                self.options.suffix(candidate, iteration)
            );
            next = iteration.checked_add(1);
        }
    }
}
