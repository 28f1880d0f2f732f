// src/application/ports/mod.rs
pub mod entity;
pub mod util;
