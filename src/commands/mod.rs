//! Shortcut handlers
//!
//! - `dispatch`: resolves a key to a [`Shortcut`] and catches handler failures
//! - `porcelain`: handlers wrapping one git porcelain command each
//! - `terminal`: handlers that do not talk to git (`cl`, `gsh`)
//!
//! Every handler is a method on [`Session`], so it only reaches the outside
//! world through the session's runner and writers.

pub mod dispatch;
pub mod porcelain;
pub mod terminal;

use crate::areas::runner::ProcessRunner;
use crate::areas::session::Session;
use crate::artifacts::core::error;
use crate::artifacts::process::Invocation;
use crate::artifacts::shortcut::{Outcome, Shortcut};
use std::io::Write;

impl<R: ProcessRunner> Session<R> {
    /// Runs `invocation` and prints its decoded stdout followed by a newline.
    pub(crate) async fn pass_through(&self, invocation: Invocation) -> anyhow::Result<Outcome> {
        let output = self.invoke(invocation).await?;
        writeln!(self.writer(), "{}", output.stdout_text())?;

        Ok(output.outcome())
    }

    /// Extracts the value `shortcut` needs from its trailing tokens.
    ///
    /// When it is missing, the error is reported and `None` is returned; the
    /// caller must then return without spawning anything.
    pub(crate) fn required_arg(
        &self,
        shortcut: Shortcut,
        args: &[String],
    ) -> anyhow::Result<Option<String>> {
        let arity = shortcut.arity();
        match arity.extract(args) {
            Some(value) => Ok(Some(value)),
            None => {
                writeln!(self.err_writer(), "{}", error(arity.missing_message()))?;
                Ok(None)
            }
        }
    }
}
