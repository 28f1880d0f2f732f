pub mod normalizer;
pub mod record;
pub mod repositories;
pub mod transliteration;
