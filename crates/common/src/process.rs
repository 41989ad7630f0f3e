//! External process execution
//!
//! Every saas command delegates its real work to an external program (the
//! platform's `make` targets, `docker-compose`). This module owns the single
//! code path that spawns those children: the argument vector is fully
//! resolved before spawning (no shell involvement), the child's stdout and
//! stderr stream straight through to the caller's own, and the call blocks
//! until the child exits.

use std::io;
use std::process::{Command, ExitStatus};

use thiserror::Error;
use tracing::debug;

/// Result type for process execution
pub type ProcessResult<T> = std::result::Result<T, ProcessError>;

/// Errors from launching or waiting on an external command.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// The program could not be started at all.
    #[error("failed to launch `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: io::Error,
    },

    /// The program ran and returned a non-zero status.
    #[error("`{command}` failed: {status}")]
    Failed { command: String, status: ExitStatus },
}

/// A fully resolved external command: program name plus ordered arguments.
///
/// Arguments are handed to the OS as-is. Nothing is shell-expanded or
/// word-split, so a `VAR=value` argument reaches the child as one element.
#[derive(Debug, Clone)]
pub struct ProcessSpec {
    program: String,
    args: Vec<String>,
}

impl ProcessSpec {
    /// Create a spec for the given program with no arguments.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Invocation of a build-system target: `make <target>`.
    pub fn make(target: &str) -> Self {
        Self::new("make").arg(target)
    }

    /// Append a single argument.
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Append a sequence of arguments.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// The invocation rendered as one line, for log and error messages.
    pub fn command_line(&self) -> String {
        let mut line = self.program.clone();
        for arg in &self.args {
            line.push(' ');
            line.push_str(arg);
        }
        line
    }

    /// Run the command to completion, streaming its output to the caller's
    /// stdout and stderr.
    ///
    /// Blocks until the child exits and returns `Ok(())` only for a zero
    /// exit status. The child is waited on before this returns, on every
    /// path.
    pub fn run(&self) -> ProcessResult<()> {
        debug!(command = %self.command_line(), "spawning");

        let status = Command::new(&self.program)
            .args(&self.args)
            .status()
            .map_err(|source| ProcessError::Spawn {
                command: self.command_line(),
                source,
            })?;

        if !status.success() {
            return Err(ProcessError::Failed {
                command: self.command_line(),
                status,
            });
        }

        Ok(())
    }
}
