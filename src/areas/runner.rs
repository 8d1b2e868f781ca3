use crate::artifacts::process::{Invocation, InvocationOutput};
use anyhow::Context;
use tracing::{debug, trace};

/// Spawns external processes on behalf of the shortcut handlers.
///
/// Handlers never touch `tokio::process` directly, so tests can swap in a
/// runner that only records what would have been executed.
pub trait ProcessRunner {
    fn run(
        &self,
        invocation: &Invocation,
    ) -> impl Future<Output = anyhow::Result<InvocationOutput>>;
}

/// Runs invocations as real child processes found on `PATH`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl ProcessRunner for SystemRunner {
    async fn run(&self, invocation: &Invocation) -> anyhow::Result<InvocationOutput> {
        debug!(%invocation, "spawning external command");

        let output = tokio::process::Command::new(&invocation.program)
            .args(&invocation.args)
            .output()
            .await
            .with_context(|| format!("failed to run '{}'", invocation.program))?;

        trace!(
            status = ?output.status.code(),
            stdout_len = output.stdout.len(),
            stderr_len = output.stderr.len(),
            "external command finished"
        );

        Ok(output.into())
    }
}
