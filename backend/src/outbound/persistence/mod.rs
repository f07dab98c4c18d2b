//! Snapshot store adapters.

mod json_snapshot_store;
mod memory_snapshot_store;

pub use json_snapshot_store::JsonSnapshotStore;
pub use memory_snapshot_store::MemorySnapshotStore;
