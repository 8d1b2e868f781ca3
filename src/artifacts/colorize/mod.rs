//! ANSI recoloring of captured git output
//!
//! Both colorizers work on git's human-readable output one line at a time.
//! Lines they do not recognize are returned unchanged, byte for byte.

pub mod log;
pub mod status;

pub use log::LogColorizer;
pub use status::{StatusColorizer, StatusSection};

/// Splits captured output on `\n`, keeping the empty piece after a trailing
/// newline so printing each piece on its own line mirrors the captured text.
pub fn split_lines(output: &str) -> impl Iterator<Item = &str> {
    output.split('\n')
}
