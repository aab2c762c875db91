//! Functionality shared by the sync checkpoint binaries.

pub mod logging;
