//! Codec Error Types
//!
//! This module defines error types for the codec layer. Errors are values,
//! never panics: every codec returns a `Result` and any failure short-circuits
//! the whole operation; there are no partial canonical objects.
//!
//! Each error carries structured context and, where it wraps a lower-level
//! failure, a chained `source` so diagnostics can show the full story.

use crate::models::{NodeNameError, OutsideLibraryError};
use thiserror::Error;

/// Suffix codec errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SuffixError {
    /// The configured delimiter cannot be used to split basenames
    #[error("Invalid suffix delimiter: {delimiter:?}")]
    InvalidDelimiter { delimiter: String },

    /// Splitting produced no tokens at all
    #[error("Basename {basename:?} yields no suffix tokens")]
    EmptyParts { basename: String },

    /// A token failed node-name validation
    #[error("Invalid node name in {basename:?}")]
    InvalidNodeName {
        basename: String,
        #[source]
        cause: NodeNameError,
    },
}

/// Split path codec errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SplitPathError {
    /// A path part failed node-name validation
    #[error("Invalid path part {part:?}")]
    InvalidPathParts {
        part: String,
        #[source]
        cause: NodeNameError,
    },

    /// The basename could not be parsed into suffix tokens
    #[error("Invalid basename {basename:?}")]
    InvalidBasename {
        basename: String,
        #[source]
        cause: SuffixError,
    },

    /// A file path is missing its extension
    #[error("File {basename:?} is missing an extension")]
    MissingExtension { basename: String },

    /// The basename's suffix disagrees with the path's ancestor chain
    #[error("Basename suffix {actual:?} does not match the path-derived suffix {expected:?}")]
    CanonicalizationFailed {
        actual: Vec<String>,
        expected: Vec<String>,
    },

    /// The path does not live under the configured library root
    #[error(transparent)]
    OutsideLibrary(#[from] OutsideLibraryError),
}

impl SplitPathError {
    pub fn invalid_basename(basename: impl Into<String>, cause: SuffixError) -> Self {
        Self::InvalidBasename {
            basename: basename.into(),
            cause,
        }
    }
}

/// Segment ID codec errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SegmentIdError {
    /// The token has fewer parts than its kind requires
    #[error("Segment ID {raw:?} is missing parts")]
    MissingParts { raw: String },

    /// The kind token is not one of section/scroll/file
    #[error("Segment ID {raw:?} has unknown type {kind_token:?}")]
    UnknownType { raw: String, kind_token: String },

    /// The token has a shape no kind accepts
    #[error("Segment ID {raw:?} has an invalid format")]
    InvalidFormat { raw: String },

    /// The core name part is not a usable node name
    #[error("Segment ID {raw:?} has an invalid core name")]
    InvalidNodeName { raw: String },

    /// The extension part is invalid for the encoded kind
    #[error("Segment ID {raw:?} has invalid extension {extension:?}")]
    InvalidExtension { raw: String, extension: String },
}

/// Locator codec errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LocatorError {
    /// The locator addresses a root-level node, which has no parent locator
    #[error("Locator for {segment_id:?} has no parent")]
    NoParent { segment_id: String },

    /// A segment ID in the locator failed to parse
    #[error("Invalid segment ID {segment_id:?} in locator")]
    InvalidSegmentId {
        segment_id: String,
        #[source]
        cause: SegmentIdError,
    },

    /// The chain to parent is structurally unusable
    #[error("Invalid locator chain: {context}")]
    InvalidChain {
        context: String,
        #[source]
        cause: Option<Box<SplitPathError>>,
    },
}

impl LocatorError {
    pub fn invalid_segment_id(segment_id: impl Into<String>, cause: SegmentIdError) -> Self {
        Self::InvalidSegmentId {
            segment_id: segment_id.into(),
            cause,
        }
    }

    pub fn invalid_chain(context: impl Into<String>) -> Self {
        Self::InvalidChain {
            context: context.into(),
            cause: None,
        }
    }

    pub fn invalid_chain_with_cause(context: impl Into<String>, cause: SplitPathError) -> Self {
        Self::InvalidChain {
            context: context.into(),
            cause: Some(Box::new(cause)),
        }
    }
}
