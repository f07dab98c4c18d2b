//! Domain ports and supporting types for the hexagonal boundary.

mod delete_prompt;
mod record_gateway;
mod snapshot_store;

#[cfg(test)]
pub use delete_prompt::MockDeletePrompt;
pub use delete_prompt::{DeletePrompt, FixturePrompt};
#[cfg(test)]
pub use record_gateway::MockRecordGateway;
pub use record_gateway::{FixtureRecordGateway, RecordGateway, RecordGatewayError};
#[cfg(test)]
pub use snapshot_store::MockSnapshotStore;
pub use snapshot_store::{FixtureSnapshotStore, SnapshotKey, SnapshotStore, SnapshotStoreError};
