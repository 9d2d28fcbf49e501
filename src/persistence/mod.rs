//! Saving and restoring standard-mode progress

mod snapshot;
mod store;

pub use snapshot::{BoardSnapshot, DiscardReason, RestoreOutcome, Snapshot};
pub use store::{DEFAULT_STATE_FILE, SnapshotStore};
