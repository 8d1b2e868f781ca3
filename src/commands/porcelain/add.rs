use crate::areas::runner::ProcessRunner;
use crate::areas::session::Session;
use crate::artifacts::process::Invocation;
use crate::artifacts::shortcut::Outcome;

impl<R: ProcessRunner> Session<R> {
    pub async fn add_all(&self) -> anyhow::Result<Outcome> {
        self.pass_through(Invocation::git(["add", "."])).await
    }

    pub async fn restore_all(&self) -> anyhow::Result<Outcome> {
        self.pass_through(Invocation::git(["restore", "."])).await
    }
}
