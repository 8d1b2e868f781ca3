/// What happened when a shortcut ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The handler completed and any external tool reported success.
    Done,
    /// The user input was rejected before anything was spawned.
    Rejected,
    /// The handler raised an error, already reported by the dispatcher.
    Failed,
    /// The external tool ran but exited unsuccessfully.
    ToolFailed(i32),
}

impl Outcome {
    /// Process exit code for this outcome.
    ///
    /// Rejected input and reported handler errors keep exiting 0; only a
    /// failing external tool changes the exit status, and its code is passed
    /// through.
    pub fn exit_code(&self) -> u8 {
        match self {
            Outcome::Done | Outcome::Rejected | Outcome::Failed => 0,
            Outcome::ToolFailed(code) => u8::try_from(*code)
                .ok()
                .filter(|code| *code != 0)
                .unwrap_or(1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Outcome::Done, 0)]
    #[case(Outcome::Rejected, 0)]
    #[case(Outcome::Failed, 0)]
    #[case(Outcome::ToolFailed(1), 1)]
    #[case(Outcome::ToolFailed(128), 128)]
    #[case(Outcome::ToolFailed(-1), 1)]
    #[case(Outcome::ToolFailed(512), 1)]
    fn exit_code_follows_the_outcome(#[case] outcome: Outcome, #[case] expected: u8) {
        assert_eq!(outcome.exit_code(), expected);
    }
}
