//! Service Layer Error Types
//!
//! Failures while translating a materialized event into a tree action. A
//! translation failure is scoped to its event: the translator reports it
//! upward and the caller moves on to the next event; the same input would
//! reproduce the same deterministic failure, so nothing is retried.

use crate::codec::error::{LocatorError, SplitPathError};
use crate::models::OutsideLibraryError;
use thiserror::Error;

/// Event translation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TranslateError {
    /// The observed path failed split-path or canonicalization validation
    #[error("Split path validation failed: {0}")]
    SplitPath(#[from] SplitPathError),

    /// Locator encoding or decoding failed
    #[error("Locator resolution failed: {0}")]
    Locator(#[from] LocatorError),
}

impl From<OutsideLibraryError> for TranslateError {
    fn from(err: OutsideLibraryError) -> Self {
        Self::SplitPath(SplitPathError::OutsideLibrary(err))
    }
}
