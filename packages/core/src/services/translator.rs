//! Event Translator
//!
//! Turns a materialized node event into the corrective tree action the tree
//! collaborator should apply. This is where the codecs, policy inference, and
//! the canonicalization engine meet:
//!
//! - Create: canonicalize the observed path, address it, emit `Create`
//! - Delete: canonicalize under `PathKing` (there is no destination to
//!   invent), address it, emit `Delete`
//! - Rename: resolve the existing node from the `from` side (it already
//!   exists canonically, no policy needed), resolve the destination from the
//!   `to` side under the inferred intent, emit `Rename` or `Move`
//!
//! Per-node lifecycle the emitted actions drive:
//! `Nonexistent -Create-> Canonical -Rename/Move-> Canonical -Delete-> Nonexistent`.
//!
//! Any codec failure aborts emission for that event only; sibling events in
//! the same batch are unaffected.

use crate::codec::canonical;
use crate::codec::locator::{canonical_to_locator, TreeNodeLocator};
use crate::events::MaterializedNodeEvent;
use crate::models::{CodecRules, NodeName, SplitPath, SplitPathInsideLibrary};
use crate::services::canonicalizer::canonicalize;
use crate::services::error::TranslateError;
use crate::services::policy::{
    create_policy, effective_rename_policy, infer_rename_intent, ChangePolicy, RenameIntent,
};

/// A corrective action for the external tree.
#[derive(Debug, Clone, PartialEq)]
pub enum TreeAction {
    /// Insert a node at the addressed position.
    Create {
        locator: TreeNodeLocator,
        observed_split_path: SplitPath,
        /// Populated by the pipeline from the content source, when available.
        initial_status: Option<String>,
    },
    /// Remove the addressed node (and, for sections, its subtree).
    Delete { locator: TreeNodeLocator },
    /// Relabel the addressed node in place.
    Rename {
        locator: TreeNodeLocator,
        new_node_name: NodeName,
    },
    /// Reparent the addressed node; `new_parent = None` means the library root.
    Move {
        locator: TreeNodeLocator,
        new_parent: Option<TreeNodeLocator>,
        new_node_name: NodeName,
        observed_split_path: SplitPath,
    },
}

impl TreeAction {
    /// Short label for logging.
    pub fn action_type(&self) -> &'static str {
        match self {
            Self::Create { .. } => "create",
            Self::Delete { .. } => "delete",
            Self::Rename { .. } => "rename",
            Self::Move { .. } => "move",
        }
    }

    /// The locator of the node the action targets.
    pub fn target(&self) -> &TreeNodeLocator {
        match self {
            Self::Create { locator, .. }
            | Self::Delete { locator }
            | Self::Rename { locator, .. }
            | Self::Move { locator, .. } => locator,
        }
    }
}

/// Translate one materialized event into at most one tree action.
///
/// `Ok(None)` means the event was deliberately dropped (e.g. a resolved
/// locator whose kind disagrees with the observed path). `Err` means a codec
/// rejected the event; the caller logs it and moves on.
pub fn translate(
    event: &MaterializedNodeEvent,
    move_policy: ChangePolicy,
    rules: &CodecRules,
) -> Result<Option<TreeAction>, TranslateError> {
    match event {
        MaterializedNodeEvent::CreateFile(path) | MaterializedNodeEvent::CreateScroll(path) => {
            translate_create(path, rules)
        }

        MaterializedNodeEvent::DeleteFile(path)
        | MaterializedNodeEvent::DeleteScroll(path)
        | MaterializedNodeEvent::DeleteSection(path) => translate_delete(path, rules),

        MaterializedNodeEvent::RenameFile { from, to }
        | MaterializedNodeEvent::RenameScroll { from, to }
        | MaterializedNodeEvent::RenameSection { from, to } => {
            translate_rename(from, to, move_policy, rules)
        }
    }
}

fn translate_create(
    path: &SplitPath,
    rules: &CodecRules,
) -> Result<Option<TreeAction>, TranslateError> {
    let inside = SplitPathInsideLibrary::new(path.clone(), rules)?;
    let policy = create_policy(path, rules);
    let canonical = canonicalize(&inside, policy, None, rules)?;
    let locator = canonical_to_locator(&canonical, rules)?;

    if locator.kind != path.node_kind() {
        tracing::warn!(
            "Dropping create for {}: locator kind {} disagrees with observed kind {}",
            path.display_path(),
            locator.kind,
            path.node_kind()
        );
        return Ok(None);
    }

    Ok(Some(TreeAction::Create {
        locator,
        observed_split_path: path.clone(),
        initial_status: None,
    }))
}

fn translate_delete(
    path: &SplitPath,
    rules: &CodecRules,
) -> Result<Option<TreeAction>, TranslateError> {
    let inside = SplitPathInsideLibrary::new(path.clone(), rules)?;
    let canonical = canonicalize(&inside, ChangePolicy::PathKing, None, rules)?;
    let locator = canonical_to_locator(&canonical, rules)?;
    Ok(Some(TreeAction::Delete { locator }))
}

fn translate_rename(
    from: &SplitPath,
    to: &SplitPath,
    move_policy: ChangePolicy,
    rules: &CodecRules,
) -> Result<Option<TreeAction>, TranslateError> {
    // The node already exists canonically at its `from` address; a plain
    // round-trip resolves it without any policy.
    let from_inside = SplitPathInsideLibrary::new(from.clone(), rules)?;
    let target = canonical_to_locator(&canonical::to_canonical(from_inside, rules)?, rules)?;

    let intent = infer_rename_intent(from, to, rules);
    let policy = effective_rename_policy(from, to, intent, move_policy);

    let to_inside = SplitPathInsideLibrary::new(to.clone(), rules)?;
    let destination = canonicalize(&to_inside, policy, Some(intent), rules)?;
    let destination_locator = canonical_to_locator(&destination, rules)?;
    let new_node_name = destination.core_name().clone();

    let action = match intent {
        RenameIntent::Rename => TreeAction::Rename {
            locator: target,
            new_node_name,
        },
        RenameIntent::Move => TreeAction::Move {
            locator: target,
            new_parent: destination_locator.parent(),
            new_node_name,
            observed_split_path: to.clone(),
        },
    };
    Ok(Some(action))
}

#[cfg(test)]
#[path = "translator_test.rs"]
mod translator_test;
