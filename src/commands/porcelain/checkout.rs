use crate::areas::runner::ProcessRunner;
use crate::areas::session::Session;
use crate::artifacts::process::Invocation;
use crate::artifacts::shortcut::{Outcome, Shortcut};

impl<R: ProcessRunner> Session<R> {
    pub async fn checkout(&self, args: &[String]) -> anyhow::Result<Outcome> {
        let Some(branch) = self.required_arg(Shortcut::Checkout, args)? else {
            return Ok(Outcome::Rejected);
        };

        self.pass_through(Invocation::git(["checkout", branch.as_str()]))
            .await
    }

    pub async fn checkout_new_branch(&self, args: &[String]) -> anyhow::Result<Outcome> {
        let Some(branch) = self.required_arg(Shortcut::CheckoutNewBranch, args)? else {
            return Ok(Outcome::Rejected);
        };

        self.pass_through(Invocation::git(["checkout", "-b", branch.as_str()]))
            .await
    }
}
