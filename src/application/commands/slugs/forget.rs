// src/application/commands/slugs/forget.rs
use tracing::info;

use super::SlugCommandService;
use crate::{
    application::{
        error::{ApplicationError, ApplicationResult},
        ports::entity::FieldAccessor,
    },
};

impl SlugCommandService {
    /// Drop every shared slug of a deleted record. Soft-deleted records keep theirs,
    /// so only call this on a hard delete.
    pub async fn forget_slugs(
        &self,
        entity_type: &str,
        entity: &dyn FieldAccessor,
    ) -> ApplicationResult<usize> {
        let owner = entity
            .id()
            .ok_or_else(|| ApplicationError::validation("record has no identity"))?;
        let removed = self.slug_service.forget_slugs(&owner).await?;
        info!(entity_type, %owner, removed, "shared slugs removed");
        Ok(removed)
    }
}
