//! Event Pipeline
//!
//! Wires the engine together for the external dispatcher: raw scoped vault
//! events come in one at a time, corrective tree actions go out over a
//! broadcast channel the tree collaborator subscribes to.
//!
//! The pipeline owns no tree state and imposes no cross-event ordering beyond
//! "each event completes before its action is emitted". Failures are scoped
//! per event: a malformed event is logged and dropped, and the next event in
//! the batch is processed normally.

use crate::events::{materialize, MaterializedNodeEvent, ScopedVaultEvent};
use crate::models::{CodecRules, NodeKind, SplitPath};
use crate::services::policy::ChangePolicy;
use crate::services::translator::{translate, TreeAction};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::broadcast;

/// Broadcast channel capacity for tree actions (128 subscriber backlog)
const TREE_ACTION_CHANNEL_CAPACITY: usize = 128;

/// Async capability for reading a node's initial status from its content.
///
/// Used once per scroll create to populate `TreeAction::Create::initial_status`.
/// The content format is the tree collaborator's business; this engine only
/// transports the result.
#[async_trait]
pub trait ContentSource: Send + Sync {
    async fn initial_status(&self, path: &SplitPath) -> anyhow::Result<Option<String>>;
}

/// Translates scoped vault events into tree actions and fans them out.
pub struct EventPipeline {
    rules: Arc<CodecRules>,
    move_policy: ChangePolicy,
    content_source: Option<Arc<dyn ContentSource>>,
    action_tx: broadcast::Sender<TreeAction>,
}

impl EventPipeline {
    pub fn new(rules: Arc<CodecRules>) -> Self {
        let (action_tx, _) = broadcast::channel(TREE_ACTION_CHANNEL_CAPACITY);
        Self {
            rules,
            move_policy: ChangePolicy::PathKing,
            content_source: None,
            action_tx,
        }
    }

    /// Override the policy used for rename events inferred as moves.
    pub fn with_move_policy(mut self, move_policy: ChangePolicy) -> Self {
        self.move_policy = move_policy;
        self
    }

    /// Attach a content source for initial-status population on creates.
    pub fn with_content_source(mut self, source: Arc<dyn ContentSource>) -> Self {
        self.content_source = Some(source);
        self
    }

    pub fn rules(&self) -> &CodecRules {
        &self.rules
    }

    /// Subscribe to the corrective actions this pipeline emits.
    pub fn subscribe(&self) -> broadcast::Receiver<TreeAction> {
        self.action_tx.subscribe()
    }

    /// Process one raw event; returns the action that was emitted, if any.
    pub async fn handle_event(&self, event: ScopedVaultEvent) -> Option<TreeAction> {
        let materialized = materialize(event)?;

        let action = match translate(&materialized, self.move_policy, &self.rules) {
            Ok(Some(action)) => action,
            Ok(None) => {
                tracing::debug!("Dropped {} event without action", materialized.event_type());
                return None;
            }
            Err(e) => {
                tracing::warn!(
                    "Dropping {} event, translation failed: {}",
                    materialized.event_type(),
                    e
                );
                return None;
            }
        };

        let action = self.populate_initial_status(action, &materialized).await;

        tracing::debug!("Emitting {} action", action.action_type());
        // Ignore errors if no subscribers (expected in some tests).
        let _ = self.action_tx.send(action.clone());
        Some(action)
    }

    /// Process a batch; one malformed event never aborts its siblings.
    pub async fn handle_events(&self, events: Vec<ScopedVaultEvent>) -> Vec<TreeAction> {
        let mut actions = Vec::with_capacity(events.len());
        for event in events {
            if let Some(action) = self.handle_event(event).await {
                actions.push(action);
            }
        }
        actions
    }

    async fn populate_initial_status(
        &self,
        action: TreeAction,
        materialized: &MaterializedNodeEvent,
    ) -> TreeAction {
        let Some(source) = &self.content_source else {
            return action;
        };
        match action {
            // Only scrolls carry readable status content.
            TreeAction::Create {
                locator,
                observed_split_path,
                ..
            } if locator.kind == NodeKind::Scroll => {
                let initial_status = match source.initial_status(&observed_split_path).await {
                    Ok(status) => status,
                    Err(e) => {
                        tracing::warn!(
                            "Failed to read initial status for {} event: {}",
                            materialized.event_type(),
                            e
                        );
                        None
                    }
                };
                TreeAction::Create {
                    locator,
                    observed_split_path,
                    initial_status,
                }
            }
            other => other,
        }
    }
}
