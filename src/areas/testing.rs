//! Test doubles for driving handlers without spawning processes.

use crate::areas::runner::ProcessRunner;
use crate::areas::session::Session;
use crate::artifacts::process::{Invocation, InvocationOutput};
use std::cell::RefCell;
use std::io::{self, Write};
use std::rc::Rc;

/// Records every invocation and answers with a canned response.
#[derive(Debug, Default)]
pub struct RecordingRunner {
    calls: RefCell<Vec<Invocation>>,
    output: InvocationOutput,
    spawn_error: Option<String>,
}

impl RecordingRunner {
    pub fn replying(status: i32, stdout: &str, stderr: &str) -> Self {
        RecordingRunner {
            output: InvocationOutput::new(
                Some(status),
                stdout.as_bytes().to_vec(),
                stderr.as_bytes().to_vec(),
            ),
            ..Default::default()
        }
    }

    pub fn failing(message: &str) -> Self {
        RecordingRunner {
            spawn_error: Some(message.to_string()),
            ..Default::default()
        }
    }

    pub fn calls(&self) -> Vec<Invocation> {
        self.calls.borrow().clone()
    }
}

impl ProcessRunner for RecordingRunner {
    async fn run(&self, invocation: &Invocation) -> anyhow::Result<InvocationOutput> {
        self.calls.borrow_mut().push(invocation.clone());
        match &self.spawn_error {
            Some(message) => Err(anyhow::anyhow!("{}", message)),
            None => Ok(self.output.clone()),
        }
    }
}

/// In-memory writer whose contents stay readable after being boxed.
#[derive(Debug, Clone, Default)]
pub struct SharedBuffer(Rc<RefCell<Vec<u8>>>);

impl SharedBuffer {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.borrow()).into_owned()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// A session over `runner` plus handles to its stdout and stderr.
pub fn session(runner: RecordingRunner) -> (Session<RecordingRunner>, SharedBuffer, SharedBuffer) {
    let stdout = SharedBuffer::default();
    let stderr = SharedBuffer::default();
    let session = Session::new(runner, Box::new(stdout.clone()), Box::new(stderr.clone()));
    (session, stdout, stderr)
}
