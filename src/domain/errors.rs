// src/domain/errors.rs
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

/// Boxed error raised by a collaborator (store, accessor) and passed through untouched.
pub type CollaboratorError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("invalid slug options: {0}")]
    InvalidOption(#[from] InvalidOption),
    #[error("collaborator failure: {0}")]
    Collaborator(#[source] CollaboratorError),
    #[error("entity has no identity: {0}")]
    MissingIdentity(String),
    #[error("validation error: {0}")]
    Validation(String),
}

impl DomainError {
    pub fn collaborator(err: impl Into<CollaboratorError>) -> Self {
        Self::Collaborator(err.into())
    }
}

/// Configuration mistakes detected before any slug is generated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidOption {
    #[error("could not determine which fields should be slugified")]
    MissingFromField,
    #[error("could not determine in which field the slug should be saved")]
    MissingSlugField,
    #[error("maximum length should be greater than zero")]
    InvalidMaximumLength,
    #[error("a computed slug source needs an explicit list of locales")]
    MissingLocales,
    #[error("separator cannot be empty")]
    EmptySeparator,
    #[error("shared translatable slugs need a slug store")]
    MissingSlugStore,
}
