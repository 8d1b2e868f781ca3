use crate::areas::runner::ProcessRunner;
use crate::areas::session::Session;
use crate::artifacts::core::{error, notice};
use crate::artifacts::shortcut::{Outcome, Shortcut};
use std::io::Write;
use tracing::debug;

const HELP_HINT: &str = "Use 'gsh' to see available commands.";

impl<R: ProcessRunner> Session<R> {
    /// Resolves `key` and runs its handler with `args`.
    ///
    /// A missing or unknown key and any failure raised by the handler are
    /// reported here; none of them turn into an `Err`. Only failing to write
    /// those reports is returned as an error.
    pub async fn dispatch(&self, key: Option<&str>, args: &[String]) -> anyhow::Result<Outcome> {
        let Some(key) = key else {
            writeln!(
                self.writer(),
                "{}",
                notice(&format!("No command provided. {}", HELP_HINT))
            )?;
            return Ok(Outcome::Rejected);
        };

        let Some(shortcut) = Shortcut::from_key(key) else {
            writeln!(self.err_writer(), "{}", error(&format!("Unknown command: {}", key)))?;
            writeln!(self.writer(), "{}", notice(HELP_HINT))?;
            return Ok(Outcome::Rejected);
        };

        debug!(%shortcut, ?args, "dispatching shortcut");
        match self.execute(shortcut, args).await {
            Ok(outcome) => {
                debug!(%shortcut, ?outcome, "shortcut finished");
                Ok(outcome)
            }
            Err(err) => {
                self.report_failure(&err)?;
                Ok(Outcome::Failed)
            }
        }
    }

    /// Runs the handler bound to `shortcut`.
    pub async fn execute(&self, shortcut: Shortcut, args: &[String]) -> anyhow::Result<Outcome> {
        match shortcut {
            Shortcut::AddAll => self.add_all().await,
            Shortcut::RestoreAll => self.restore_all().await,
            Shortcut::Commit => self.commit(args).await,
            Shortcut::Push => self.push().await,
            Shortcut::PushBranch => self.push_branch(args).await,
            Shortcut::Pull => self.pull().await,
            Shortcut::PullBranch => self.pull_branch(args).await,
            Shortcut::Status => self.status().await,
            Shortcut::Log => self.log().await,
            Shortcut::BranchList => self.branch_list().await,
            Shortcut::BranchDelete => self.branch_delete(args).await,
            Shortcut::Checkout => self.checkout(args).await,
            Shortcut::CheckoutNewBranch => self.checkout_new_branch(args).await,
            Shortcut::Clear => self.clear().await,
            Shortcut::Help => self.help(),
        }
    }

    fn report_failure(&self, err: &anyhow::Error) -> anyhow::Result<()> {
        let message = format!("{:#}", err);
        let line = if message.trim().is_empty() {
            format!("Unknown error executing command: {:?}", err)
        } else {
            format!("Error executing command: {}", message)
        };
        writeln!(self.err_writer(), "{}", error(&line))?;

        Ok(())
    }
}
