// src/application/ports/util.rs
use crate::domain::slug::options::Script;

/// Normalization parameters taken from the slug options of one entity type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlugStyle<'a> {
    pub separator: &'a str,
    pub language: &'a str,
    pub script: Script,
}

impl Default for SlugStyle<'_> {
    fn default() -> Self {
        Self {
            separator: "-",
            language: "en",
            script: Script::Ascii,
        }
    }
}

pub trait SlugGenerator: Send + Sync {
    fn slugify(&self, input: &str, style: &SlugStyle<'_>) -> String;
}
