//! Typed failures surfaced by catalog lookups.
//!
//! Loading and validation report through `anyhow` with file context; the
//! variants here are the few conditions callers are expected to match on.

use thiserror::Error;

/// Broad classification of a [`CatalogError`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    /// The source data is malformed; fix the record, not the caller.
    Configuration,
    /// Two records claim the same identity.
    Conflict,
}

#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum CatalogError {
    #[error("company '{company}' defines no contacts; cannot choose a primary contact")]
    NoContacts { company: String },

    #[error("property '{0}' is already registered")]
    DuplicateIdentifier(String),
}

impl CatalogError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CatalogError::NoContacts { .. } => ErrorKind::Configuration,
            CatalogError::DuplicateIdentifier(_) => ErrorKind::Conflict,
        }
    }
}
