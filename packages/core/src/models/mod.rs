//! Data Models
//!
//! This module contains the core data structures used throughout Librarium:
//!
//! - `NodeName` - validated single naming token
//! - `SplitPath` family - vault-facing path shapes and their canonical form
//! - `CodecRules` / `LibrarySettings` - immutable codec configuration
//!
//! All validation happens at construction; holding a validated type is proof
//! its invariants were checked.

mod node_name;
mod rules;
mod split_path;

pub use node_name::{NodeName, NodeNameError};
pub use rules::{CodecRules, LibrarySettings, SettingsError, MD_EXTENSION, SEGMENT_SEPARATOR};
pub use split_path::{
    CanonicalSplitPathInsideLibrary, NodeKind, OutsideLibraryError, PathKind,
    SeparatedSuffixedBasename, SplitPath, SplitPathInsideLibrary,
};
