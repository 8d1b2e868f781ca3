use crate::areas::runner::ProcessRunner;
use crate::areas::session::Session;
use crate::artifacts::core::notice;
use crate::artifacts::process::Invocation;
use crate::artifacts::shortcut::{Outcome, Shortcut};
use std::io::Write;

impl<R: ProcessRunner> Session<R> {
    /// Runs `clear` and replays its escape sequences on our stdout.
    pub async fn clear(&self) -> anyhow::Result<Outcome> {
        self.pass_through(Invocation::clear()).await
    }

    /// Prints the shortcut reference; spawns nothing.
    pub fn help(&self) -> anyhow::Result<Outcome> {
        writeln!(self.writer(), "{}", notice(&Shortcut::help_text()))?;

        Ok(Outcome::Done)
    }
}

#[cfg(test)]
mod tests {
    use crate::areas::testing::{RecordingRunner, session};
    use crate::artifacts::process::Invocation;
    use crate::artifacts::shortcut::{Outcome, Shortcut};

    #[tokio::test]
    async fn clear_runs_the_clear_program() -> anyhow::Result<()> {
        let (session, stdout, _) = session(RecordingRunner::replying(0, "\x1b[H\x1b[2J", ""));

        session.clear().await?;

        assert_eq!(session.runner().calls(), vec![Invocation::clear()]);
        assert!(stdout.contents().starts_with("\x1b[H\x1b[2J"));
        Ok(())
    }

    #[test]
    fn help_lists_every_key_without_spawning() -> anyhow::Result<()> {
        let (session, stdout, _) = session(RecordingRunner::default());

        let outcome = session.help()?;

        assert_eq!(outcome, Outcome::Done);
        assert!(session.runner().calls().is_empty());
        let contents = stdout.contents();
        assert!(contents.contains("Git Shortcuts - Available Commands:"));
        for shortcut in Shortcut::ALL {
            assert!(contents.contains(&shortcut.signature()));
        }
        Ok(())
    }
}
