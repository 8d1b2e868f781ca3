use crate::artifacts::colorize::split_lines;
use crate::artifacts::core::{staged, warning};

const STAGED_HEADING: &str = "Changes to be committed:";
const UNSTAGED_HEADING: &str = "Changes not staged for commit:";
const UNTRACKED_HEADING: &str = "Untracked files:";

/// Section of `git status` output the scanner is currently inside.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusSection {
    Staged,
    /// Unstaged changes and untracked files share one color.
    Unstaged,
}

impl StatusSection {
    fn from_heading(line: &str) -> Option<Self> {
        if line.contains(STAGED_HEADING) {
            Some(StatusSection::Staged)
        } else if line.contains(UNSTAGED_HEADING) || line.contains(UNTRACKED_HEADING) {
            Some(StatusSection::Unstaged)
        } else {
            None
        }
    }

    pub fn paint(&self, line: &str) -> String {
        match self {
            StatusSection::Staged => staged(line).to_string(),
            StatusSection::Unstaged => warning(line).to_string(),
        }
    }
}

/// Single forward pass over `git status` output.
///
/// Headings open a section and stay uncolored, a blank line closes it, and
/// parenthesized hint lines are never colored.
#[derive(Debug, Default)]
pub struct StatusColorizer {
    section: Option<StatusSection>,
}

impl StatusColorizer {
    #[cfg(test)]
    pub(crate) fn section(&self) -> Option<StatusSection> {
        self.section
    }

    pub fn colorize_line(&mut self, line: &str) -> String {
        if let Some(section) = StatusSection::from_heading(line) {
            self.section = Some(section);
            return line.to_string();
        }

        if line.trim().is_empty() {
            self.section = None;
            return line.to_string();
        }

        if line.trim_start().starts_with('(') {
            return line.to_string();
        }

        match self.section {
            Some(section) => section.paint(line),
            None => line.to_string(),
        }
    }

    pub fn colorize(output: &str) -> Vec<String> {
        let mut colorizer = StatusColorizer::default();
        split_lines(output)
            .map(|line| colorizer.colorize_line(line))
            .collect()
    }
}
