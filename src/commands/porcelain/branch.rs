use crate::areas::runner::ProcessRunner;
use crate::areas::session::Session;
use crate::artifacts::process::Invocation;
use crate::artifacts::shortcut::{Outcome, Shortcut};

impl<R: ProcessRunner> Session<R> {
    pub async fn branch_list(&self) -> anyhow::Result<Outcome> {
        self.pass_through(Invocation::git(["branch"])).await
    }

    /// Safe delete (`-d`): git refuses to drop a branch that is not merged.
    pub async fn branch_delete(&self, args: &[String]) -> anyhow::Result<Outcome> {
        let Some(branch) = self.required_arg(Shortcut::BranchDelete, args)? else {
            return Ok(Outcome::Rejected);
        };

        self.pass_through(Invocation::git(["branch", "-d", branch.as_str()]))
            .await
    }
}
