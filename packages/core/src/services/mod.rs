//! Business Services
//!
//! This module contains the engine's decision and orchestration layers:
//!
//! - `policy` - ChangePolicy and RenameIntent inference
//! - `canonicalizer` - observed path + policy + intent → canonical destination
//! - `translator` - materialized event → corrective tree action
//! - `pipeline` - raw event intake, per-event failure isolation, action fan-out
//!
//! Everything below the pipeline is synchronous and pure; the pipeline adds
//! the async edges (content reads, broadcast delivery) without touching the
//! core algorithms.

pub mod canonicalizer;
pub mod error;
pub mod pipeline;
pub mod policy;
pub mod translator;

pub use canonicalizer::canonicalize;
pub use error::TranslateError;
pub use pipeline::{ContentSource, EventPipeline};
pub use policy::{
    create_policy, effective_rename_policy, infer_rename_intent, ChangePolicy, RenameIntent,
};
pub use translator::{translate, TreeAction};
