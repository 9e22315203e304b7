//! Scope-Classified Vault Events
//!
//! Input shape delivered by the vault-event layer. Scope classification
//! happens upstream: this engine only sees whether an event touched the
//! library, crossed its boundary, or happened entirely outside it.

use crate::models::SplitPath;
use serde::{Deserialize, Serialize};

/// Scope of a non-rename event relative to the library root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EventScope {
    Inside,
    Outside,
}

/// Scope of a rename event; renames can cross the library boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RenameScope {
    Inside,
    InsideToOutside,
    OutsideToInside,
    Outside,
}

/// A raw vault event, already scope-classified by the upstream layer.
///
/// Deletes arriving here are already subtree-collapsed: a deleted folder is
/// reported once, for its topmost node, never per descendant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ScopedVaultEvent {
    Created {
        scope: EventScope,
        path: SplitPath,
    },
    Deleted {
        scope: EventScope,
        path: SplitPath,
    },
    Renamed {
        scope: RenameScope,
        from: SplitPath,
        to: SplitPath,
    },
}
