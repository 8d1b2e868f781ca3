#![allow(dead_code)]

pub mod command;

/// Escape sequence `colored` emits for green foreground text.
pub const GREEN: &str = "\x1b[32m";
pub const RED: &str = "\x1b[31m";
pub const YELLOW: &str = "\x1b[33m";

pub fn stdout_of(output: &std::process::Output) -> Result<String, Box<dyn std::error::Error>> {
    Ok(String::from_utf8(output.stdout.clone())?)
}

pub fn stderr_of(output: &std::process::Output) -> Result<String, Box<dyn std::error::Error>> {
    Ok(String::from_utf8(output.stderr.clone())?)
}
