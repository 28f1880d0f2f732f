// src/config.rs
use serde::{Deserialize, Serialize};
use std::env;
use thiserror::Error;

/// Process-wide slug defaults. Per entity-type options start from these.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlugDefaults {
    separator: String,
    max_length: usize,
    language: String,
    preserve_scripts: bool,
    suffix_start: u64,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_separator() -> String {
    "-".into()
}

fn default_max_length() -> usize {
    250
}

fn default_language() -> String {
    "en".into()
}

fn default_suffix_start() -> u64 {
    1
}

fn parse_flag(value: &str) -> bool {
    value == "1" || value.eq_ignore_ascii_case("true")
}

impl Default for SlugDefaults {
    fn default() -> Self {
        Self {
            separator: default_separator(),
            max_length: default_max_length(),
            language: default_language(),
            preserve_scripts: false,
            suffix_start: default_suffix_start(),
        }
    }
}

impl SlugDefaults {
    pub fn new(
        separator: impl Into<String>,
        max_length: usize,
        language: impl Into<String>,
        preserve_scripts: bool,
        suffix_start: u64,
    ) -> Self {
        Self {
            separator: separator.into(),
            max_length,
            language: language.into(),
            preserve_scripts,
            suffix_start,
        }
    }

    /// Build defaults from environment variables. Unset keys fall back to the
    /// built-in defaults; set but unparsable keys are an error.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Allow dotenv files to populate env vars when present.
        dotenvy::dotenv().ok();

        let separator = env::var("SLUG_SEPARATOR").unwrap_or_else(|_| default_separator());
        if separator.is_empty() {
            return Err(ConfigError::Invalid("SLUG_SEPARATOR cannot be empty".into()));
        }

        let max_length = match env::var("SLUG_MAX_LENGTH") {
            Ok(raw) => raw
                .trim()
                .parse::<usize>()
                .ok()
                .filter(|len| *len > 0)
                .ok_or_else(|| {
                    ConfigError::Invalid(format!(
                        "SLUG_MAX_LENGTH must be a positive integer, got {raw:?}"
                    ))
                })?,
            Err(_) => default_max_length(),
        };

        let language = env::var("SLUG_LANGUAGE")
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(default_language);

        let preserve_scripts = env::var("SLUG_PRESERVE_SCRIPTS")
            .ok()
            .map(|v| parse_flag(v.trim()))
            .unwrap_or(false);

        let suffix_start = match env::var("SLUG_SUFFIX_START") {
            Ok(raw) => raw.trim().parse::<u64>().map_err(|_| {
                ConfigError::Invalid(format!(
                    "SLUG_SUFFIX_START must be a non-negative integer, got {raw:?}"
                ))
            })?,
            Err(_) => default_suffix_start(),
        };

        Ok(Self {
            separator,
            max_length,
            language,
            preserve_scripts,
            suffix_start,
        })
    }

    pub fn separator(&self) -> &str {
        &self.separator
    }

    pub fn max_length(&self) -> usize {
        self.max_length
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn preserve_scripts(&self) -> bool {
        self.preserve_scripts
    }

    pub fn suffix_start(&self) -> u64 {
        self.suffix_start
    }
}
