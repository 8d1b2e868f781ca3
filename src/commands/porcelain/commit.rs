use crate::areas::runner::ProcessRunner;
use crate::areas::session::Session;
use crate::artifacts::process::Invocation;
use crate::artifacts::shortcut::{Outcome, Shortcut};

impl<R: ProcessRunner> Session<R> {
    /// Commits with every trailing token joined into one message, so the
    /// message does not need quoting on the command line.
    pub async fn commit(&self, args: &[String]) -> anyhow::Result<Outcome> {
        let Some(message) = self.required_arg(Shortcut::Commit, args)? else {
            return Ok(Outcome::Rejected);
        };

        self.pass_through(Invocation::git(["commit".to_string(), "-m".to_string(), message]))
            .await
    }
}
