//! Vault Events
//!
//! Event types flowing into the engine and their projection onto single-node,
//! library-scoped events:
//!
//! - `scoped` - scope-classified raw events from the vault layer
//! - `materialize` - bulk/scoped events → single-node Create/Delete/Rename

pub mod materialize;
pub mod scoped;

pub use materialize::{materialize, MaterializedNodeEvent};
pub use scoped::{EventScope, RenameScope, ScopedVaultEvent};
