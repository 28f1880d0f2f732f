// src/application/commands/slugs/generate.rs
use super::{SlugCommandService, service::log_outcome};
use crate::{
    application::{error::ApplicationResult, ports::entity::FieldAccessor},
    domain::slug::{SlugOptions, SlugOutcome, SlugTrigger},
};

impl SlugCommandService {
    /// Call before a new record is inserted. Shared slugs are the exception:
    /// their rows reference the owner, so call it once the record has an id.
    pub async fn generate_on_create(
        &self,
        entity_type: &str,
        entity: &mut dyn FieldAccessor,
        options: &SlugOptions,
    ) -> ApplicationResult<SlugOutcome> {
        self.run(entity_type, entity, options, SlugTrigger::Create)
            .await
    }

    /// Call before an update is persisted.
    pub async fn generate_on_update(
        &self,
        entity_type: &str,
        entity: &mut dyn FieldAccessor,
        options: &SlugOptions,
    ) -> ApplicationResult<SlugOutcome> {
        self.run(entity_type, entity, options, SlugTrigger::Update)
            .await
    }

    /// Regenerate regardless of the create/update flags.
    pub async fn generate(
        &self,
        entity_type: &str,
        entity: &mut dyn FieldAccessor,
        options: &SlugOptions,
    ) -> ApplicationResult<SlugOutcome> {
        self.run(entity_type, entity, options, SlugTrigger::Explicit)
            .await
    }

    async fn run(
        &self,
        entity_type: &str,
        entity: &mut dyn FieldAccessor,
        options: &SlugOptions,
        trigger: SlugTrigger,
    ) -> ApplicationResult<SlugOutcome> {
        let outcome = self.slug_service.handle(entity, options, trigger).await?;
        log_outcome(entity_type, &outcome);
        Ok(outcome)
    }
}
