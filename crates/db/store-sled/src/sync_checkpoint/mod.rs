pub mod db;
mod schemas;

pub use db::SyncCheckpointDBSled;
