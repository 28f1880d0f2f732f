// src/application/commands/slugs/set.rs
use tracing::info;

use super::SlugCommandService;
use crate::{
    application::{
        error::{ApplicationError, ApplicationResult},
        ports::entity::FieldAccessor,
    },
    domain::slug::{Locale, Slug, SlugOptions},
};

/// Explicit slug chosen by a user. The value is normalized and made unique.
pub struct SetSlugCommand {
    pub value: String,
    pub locale: Option<Locale>,
}

impl SetSlugCommand {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            locale: None,
        }
    }

    pub fn for_locale(mut self, locale: Locale) -> Self {
        self.locale = Some(locale);
        self
    }
}

impl SlugCommandService {
    pub async fn set_slug(
        &self,
        entity_type: &str,
        entity: &mut dyn FieldAccessor,
        options: &SlugOptions,
        command: SetSlugCommand,
    ) -> ApplicationResult<Slug> {
        if command.value.trim().is_empty() {
            return Err(ApplicationError::validation("slug value cannot be empty"));
        }

        let slug = self
            .slug_service
            .set_slug(entity, options, &command.value, command.locale.as_ref())
            .await?;

        info!(
            entity_type,
            locale = ?command.locale.as_ref().map(Locale::as_str),
            slug = %slug,
            "slug set explicitly"
        );
        Ok(slug)
    }
}
