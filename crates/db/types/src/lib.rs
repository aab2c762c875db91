//! Database abstractions for the sync checkpoint state.

mod errors;
pub mod traits;
pub mod types;

#[cfg(feature = "stubs")]
pub mod stubs;

pub use errors::{DbError, DbResult};
