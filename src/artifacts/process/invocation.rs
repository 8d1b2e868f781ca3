use crate::artifacts::shortcut::Outcome;
use derive_new::new;

const GIT: &str = "git";
const CLEAR: &str = "clear";

/// One external program run, with its exact argument vector.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
}

impl Invocation {
    pub fn git<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Invocation::new(GIT.to_string(), args.into_iter().map(Into::into).collect())
    }

    pub fn clear() -> Self {
        Invocation::new(CLEAR.to_string(), Vec::new())
    }
}

impl std::fmt::Display for Invocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Captured result of an [`Invocation`].
///
/// `status` is `None` when the process was terminated by a signal.
#[derive(Debug, Clone, Default, PartialEq, Eq, new)]
pub struct InvocationOutput {
    pub status: Option<i32>,
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
}

impl InvocationOutput {
    pub fn success(&self) -> bool {
        self.status == Some(0)
    }

    /// Maps the exit status onto an [`Outcome`]; signal termination counts as
    /// failure with code 1.
    pub fn outcome(&self) -> Outcome {
        match self.status {
            Some(0) => Outcome::Done,
            Some(code) => Outcome::ToolFailed(code),
            None => Outcome::ToolFailed(1),
        }
    }

    pub fn stdout_text(&self) -> String {
        String::from_utf8_lossy(&self.stdout).into_owned()
    }
}

impl From<std::process::Output> for InvocationOutput {
    fn from(output: std::process::Output) -> Self {
        InvocationOutput::new(output.status.code(), output.stdout, output.stderr)
    }
}
