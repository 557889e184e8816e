//! External process invocation
//!
//! The measured subsystem is an opaque executable reached through a
//! command-line contract: one extra argument (the problem size), cycle
//! counts on stdout. `Invoker` is the seam between the trial loop and the
//! operating system, so tests can substitute canned outputs for real
//! subprocesses.

use std::io;
use std::process::Command;

/// Outcome of one benchmark invocation.
#[derive(Debug, Clone)]
pub struct Invocation {
    /// Whether the process exited with status zero.
    pub success: bool,
    /// Captured standard output, decoded as UTF-8 (lossily).
    pub stdout: String,
}

pub trait Invoker {
    /// Run the benchmark once for the given problem size, blocking until
    /// the process exits. No timeout: a hung benchmark hangs the harness.
    fn invoke(&self, size: u64) -> io::Result<Invocation>;
}

/// Invoker that spawns the configured benchmark command as a child process.
pub struct ProcessInvoker {
    command: Vec<String>,
}

impl ProcessInvoker {
    pub fn new(command: Vec<String>) -> Self {
        Self { command }
    }
}

impl Invoker for ProcessInvoker {
    fn invoke(&self, size: u64) -> io::Result<Invocation> {
        let (program, args) = self.command.split_first().ok_or_else(|| {
            io::Error::new(io::ErrorKind::InvalidInput, "empty benchmark command")
        })?;

        let output = Command::new(program)
            .args(args)
            .arg(size.to_string())
            .output()?;

        Ok(Invocation {
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        })
    }
}
