use crate::areas::runner::ProcessRunner;
use crate::areas::session::Session;
use crate::artifacts::colorize::LogColorizer;
use crate::artifacts::process::Invocation;
use crate::artifacts::shortcut::Outcome;
use std::io::Write;

/// How many commits `gl` shows.
const LOG_DEPTH: &str = "4";

impl<R: ProcessRunner> Session<R> {
    pub async fn log(&self) -> anyhow::Result<Outcome> {
        let colorizer = LogColorizer::new()?;
        let output = self
            .invoke(Invocation::git(["log", "--decorate", "-n", LOG_DEPTH]))
            .await?;

        let mut writer = self.writer();
        for line in colorizer.colorize(&output.stdout_text()) {
            writeln!(writer, "{}", line)?;
        }

        Ok(output.outcome())
    }
}
