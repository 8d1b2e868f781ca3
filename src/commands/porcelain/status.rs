use crate::areas::runner::ProcessRunner;
use crate::areas::session::Session;
use crate::artifacts::colorize::StatusColorizer;
use crate::artifacts::process::Invocation;
use crate::artifacts::shortcut::Outcome;
use std::io::Write;

impl<R: ProcessRunner> Session<R> {
    pub async fn status(&self) -> anyhow::Result<Outcome> {
        let output = self.invoke(Invocation::git(["status"])).await?;

        let mut writer = self.writer();
        for line in StatusColorizer::colorize(&output.stdout_text()) {
            writeln!(writer, "{}", line)?;
        }

        Ok(output.outcome())
    }
}
