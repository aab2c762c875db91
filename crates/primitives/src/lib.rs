//! Collection of generic data types shared by the sync checkpoint crates.

mod block;
pub mod errors;

pub use block::BlockHash;
pub use errors::ParseError;
