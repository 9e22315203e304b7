//! Librarium Canonical-Naming and Event-Healing Engine
//!
//! This crate enforces a naming convention over a hierarchical note library:
//! a node's on-disk basename encodes its ancestor chain as a reversible suffix
//! token sequence, so a note's logical location can be read off its filename
//! alone. The vault is user-editable, so observed states routinely violate the
//! convention; this engine turns raw vault events into the corrective tree
//! actions that heal them.
//!
//! # Architecture
//!
//! - **Pure codecs**: every translation between paths, basenames, and tree
//!   addresses is a synchronous, side-effect-free function taking explicit
//!   [`models::CodecRules`]
//! - **Typed results everywhere**: errors are values across all module
//!   boundaries; a failure aborts its own event and nothing else
//! - **One event, one action**: the pipeline processes events one at a time
//!   and broadcasts at most one tree action per event
//!
//! # Modules
//!
//! - [`models`] - node names, split paths, canonical paths, codec rules
//! - [`codec`] - suffix, canonical split path, segment ID, and locator codecs
//! - [`events`] - scope-classified vault events and their materialization
//! - [`services`] - policy inference, canonicalization engine, translator,
//!   event pipeline

pub mod codec;
pub mod events;
pub mod models;
pub mod services;

// Re-export commonly used types
pub use codec::{LocatorError, SegmentId, SegmentIdError, SplitPathError, SuffixError, TreeNodeLocator};
pub use events::{EventScope, MaterializedNodeEvent, RenameScope, ScopedVaultEvent};
pub use models::{
    CanonicalSplitPathInsideLibrary, CodecRules, LibrarySettings, NodeKind, NodeName, PathKind,
    SplitPath, SplitPathInsideLibrary,
};
pub use services::{ChangePolicy, ContentSource, EventPipeline, RenameIntent, TreeAction};
