use crate::artifacts::colorize::split_lines;
use crate::artifacts::core::{accent, staged, warning};
use colored::Colorize;
use regex::{Captures, Regex};

const COMMIT_PREFIX: &str = "commit";
const HEAD_PREFIX: &str = "HEAD -> ";
const REMOTE_PREFIX: &str = "origin/";
const REF_SEPARATOR: &str = ", ";

/// First parenthesized group on a commit header, i.e. the ref decorations.
const DECORATION_REGEX: &str = r"\(([^)]+)\)";

/// Recolors the commit headers of `git log --decorate` output.
///
/// Each header is handled on its own, so no state is carried between lines.
#[derive(Debug)]
pub struct LogColorizer {
    decoration: Regex,
}

impl LogColorizer {
    pub fn new() -> anyhow::Result<Self> {
        Ok(LogColorizer {
            decoration: Regex::new(DECORATION_REGEX)?,
        })
    }

    pub fn colorize_line(&self, line: &str) -> String {
        if !line.starts_with(COMMIT_PREFIX) {
            return line.to_string();
        }

        let recolored = self.decoration.replace(line, |caps: &Captures| {
            let refs = caps[1]
                .split(REF_SEPARATOR)
                .map(Self::paint_ref)
                .collect::<Vec<_>>()
                .join(REF_SEPARATOR);
            format!("({})", refs)
        });
        let recolored: &str = &recolored;

        recolored.yellow().to_string()
    }

    pub fn colorize(&self, output: &str) -> Vec<String> {
        split_lines(output)
            .map(|line| self.colorize_line(line))
            .collect()
    }

    fn paint_ref(name: &str) -> String {
        if let Some(branch) = name.strip_prefix(HEAD_PREFIX) {
            format!("{}{}", accent(HEAD_PREFIX).bold(), staged(branch).bold())
        } else if name.starts_with(REMOTE_PREFIX) {
            warning(name).bold().to_string()
        } else {
            staged(name).bold().to_string()
        }
    }
}
