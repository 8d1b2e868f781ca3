//! Shared color palette
//!
//! Every styled piece of output goes through one of these helpers so the
//! shortcuts agree on what "staged", "warning" and "notice" look like.

use colored::{ColoredString, Colorize};

/// xterm-256 palette index.
const ACCENT_ANSI: u8 = 45;
const NOTICE_RGB: (u8, u8, u8) = (255, 165, 0);

pub fn staged(text: &str) -> ColoredString {
    text.green()
}

pub fn warning(text: &str) -> ColoredString {
    text.red()
}

pub fn accent(text: &str) -> ColoredString {
    text.ansi_color(ACCENT_ANSI)
}

/// Informational messages and the help block.
pub fn notice(text: &str) -> ColoredString {
    let (r, g, b) = NOTICE_RGB;
    text.truecolor(r, g, b)
}

pub fn error(text: &str) -> ColoredString {
    text.red()
}
