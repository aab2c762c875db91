//! In-memory implementations for tests and tooling.

mod block_index;
mod checkpoint;

pub use block_index::StubBlockIndex;
pub use checkpoint::StubSyncCheckpointDb;
