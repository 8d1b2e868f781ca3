use crate::areas::runner::ProcessRunner;
use crate::artifacts::process::{Invocation, InvocationOutput};
use std::cell::{RefCell, RefMut};
use std::io::Write;
use tracing::debug;

/// Everything a shortcut handler needs for one run: the process runner and
/// the two output streams.
pub struct Session<R: ProcessRunner> {
    runner: R,
    writer: RefCell<Box<dyn Write>>,
    err_writer: RefCell<Box<dyn Write>>,
}

impl<R: ProcessRunner> Session<R> {
    pub fn new(runner: R, writer: Box<dyn Write>, err_writer: Box<dyn Write>) -> Self {
        Session {
            runner,
            writer: RefCell::new(writer),
            err_writer: RefCell::new(err_writer),
        }
    }

    #[cfg(test)]
    pub(crate) fn runner(&self) -> &R {
        &self.runner
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn Write>> {
        self.writer.borrow_mut()
    }

    pub fn err_writer(&'_ self) -> RefMut<'_, Box<dyn Write>> {
        self.err_writer.borrow_mut()
    }

    /// Runs the invocation to completion and forwards its stderr untouched.
    ///
    /// Standard output is returned to the caller, which decides how to print it.
    pub async fn invoke(&self, invocation: Invocation) -> anyhow::Result<InvocationOutput> {
        let output = self.runner.run(&invocation).await?;

        if !output.stderr.is_empty() {
            self.err_writer().write_all(&output.stderr)?;
        }
        if !output.success() {
            debug!(%invocation, status = ?output.status, "external command failed");
        }

        Ok(output)
    }

    pub fn flush(&self) -> anyhow::Result<()> {
        self.writer().flush()?;
        self.err_writer().flush()?;
        Ok(())
    }
}
