// src/infrastructure/repositories/mod.rs
pub mod memory;

pub use memory::InMemorySlugRepository;
