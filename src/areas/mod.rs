//! Where a shortcut runs
//!
//! - `runner`: the capability through which every external process is spawned
//! - `session`: output writers plus the runner, shared by all handlers

pub mod runner;
pub mod session;

#[cfg(test)]
pub(crate) mod testing;
