//! Short mnemonic shortcuts for everyday git commands.
//!
//! The crate is split the same way the binary thinks about a run:
//!
//! - `areas`: the session a shortcut runs in (writers and the process runner)
//! - `artifacts`: the shortcut table, process invocations and output colorizers
//! - `commands`: one handler per shortcut plus the dispatcher tying them together

pub mod areas;
pub mod artifacts;
pub mod commands;
