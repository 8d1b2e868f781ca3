use crate::areas::runner::ProcessRunner;
use crate::areas::session::Session;
use crate::artifacts::process::Invocation;
use crate::artifacts::shortcut::{Outcome, Shortcut};

const REMOTE: &str = "origin";

impl<R: ProcessRunner> Session<R> {
    pub async fn push(&self) -> anyhow::Result<Outcome> {
        self.pass_through(Invocation::git(["push"])).await
    }

    pub async fn push_branch(&self, args: &[String]) -> anyhow::Result<Outcome> {
        let Some(branch) = self.required_arg(Shortcut::PushBranch, args)? else {
            return Ok(Outcome::Rejected);
        };

        self.pass_through(Invocation::git(["push", REMOTE, branch.as_str()]))
            .await
    }

    pub async fn pull(&self) -> anyhow::Result<Outcome> {
        self.pass_through(Invocation::git(["pull"])).await
    }

    pub async fn pull_branch(&self, args: &[String]) -> anyhow::Result<Outcome> {
        let Some(branch) = self.required_arg(Shortcut::PullBranch, args)? else {
            return Ok(Outcome::Rejected);
        };

        self.pass_through(Invocation::git(["pull", REMOTE, branch.as_str()]))
            .await
    }
}
