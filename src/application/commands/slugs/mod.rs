// src/application/commands/slugs/mod.rs
mod forget;
mod generate;
mod service;
mod set;

pub use set::SetSlugCommand;
pub use service::SlugCommandService;
