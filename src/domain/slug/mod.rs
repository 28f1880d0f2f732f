pub mod options;
pub mod repository;
pub mod services;
pub mod text;
pub mod value_objects;

pub use options::{Script, SlugMode, SlugOptions, SlugSource, Uniqueness};
pub use repository::{SlugRepository, SlugStore};
pub use services::{SkipReason, SlugOutcome, SlugService, SlugTrigger};
pub use value_objects::{EntityId, Locale, Slug, SlugCandidate, SlugScope};
