// src/application/queries/slugs.rs
use std::sync::Arc;

use crate::{
    application::{
        error::{ApplicationError, ApplicationResult},
        ports::entity::FieldAccessor,
    },
    domain::slug::{EntityId, Locale, Slug, SlugCandidate, SlugOptions, SlugService},
};

pub struct FindSlugQuery {
    pub owner: EntityId,
    pub locale: Locale,
}

pub struct SlugQueryService {
    slug_service: Arc<SlugService>,
}

impl SlugQueryService {
    pub fn new(slug_service: Arc<SlugService>) -> Self {
        Self { slug_service }
    }

    /// Whether the slug held by `entity` was set by hand rather than generated.
    pub fn is_custom_slug(
        &self,
        entity: &dyn FieldAccessor,
        options: &SlugOptions,
        locale: Option<&Locale>,
    ) -> ApplicationResult<bool> {
        Ok(self.slug_service.is_custom_slug(entity, options, locale)?)
    }

    /// Source and normalized base the next generation would start from.
    pub fn preview(
        &self,
        entity: &dyn FieldAccessor,
        options: &SlugOptions,
        locale: Option<&Locale>,
    ) -> ApplicationResult<SlugCandidate> {
        Ok(self.slug_service.candidate(entity, options, locale)?)
    }

    pub async fn find_slug(&self, query: FindSlugQuery) -> ApplicationResult<Slug> {
        self.slug_service
            .find_slug(&query.owner, &query.locale)
            .await?
            .ok_or_else(|| {
                ApplicationError::not_found(format!(
                    "no slug for {} in locale {}",
                    query.owner, query.locale
                ))
            })
    }
}
