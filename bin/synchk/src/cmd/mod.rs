//! Subcommand implementations. Each returns a report the caller prints.

mod open;
mod reset;
mod show;
mod status;

pub(crate) use open::open;
pub(crate) use reset::reset;
pub(crate) use show::show;
pub(crate) use status::status;
