//! Data types and text transforms used by the shortcut handlers
//!
//! - `colorize`: ANSI recoloring of `git status` and `git log` output
//! - `core`: shared color palette
//! - `process`: external invocations and their captured output
//! - `shortcut`: the fixed table of shortcut keys

pub mod colorize;
pub mod core;
pub mod process;
pub mod shortcut;
