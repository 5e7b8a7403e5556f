//! External command execution.
//!
//! Every interaction with the host network stack is a [`HostCommand`]
//! handed to a [`CommandRunner`]. The runner only reports what happened;
//! deciding whether a nonzero exit is an error is left to the caller via
//! [`CommandOutput::check`].

use std::fmt;
use std::future::Future;
use std::process::Stdio;

use super::error::{Error, Result};

/// A program plus its argument vector.
///
/// Arguments are never joined into a shell string. Interface names keep
/// their spaces because each argument stays a single element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostCommand {
    program: String,
    args: Vec<String>,
}

impl HostCommand {
    /// Create a command running `program` with no arguments.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Append one argument.
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Append several arguments.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// The program to execute.
    pub fn program(&self) -> &str {
        &self.program
    }

    /// The arguments, in order.
    pub fn arguments(&self) -> &[String] {
        &self.args
    }
}

impl fmt::Display for HostCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Captured result of a finished command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// Exit code, `None` when the process was terminated by a signal.
    pub code: Option<i32>,
    /// Standard output, lossily decoded.
    pub stdout: String,
    /// Standard error, lossily decoded.
    pub stderr: String,
}

impl CommandOutput {
    /// A successful result with the given stdout.
    pub fn success(stdout: impl Into<String>) -> Self {
        Self {
            code: Some(0),
            stdout: stdout.into(),
            stderr: String::new(),
        }
    }

    /// A failed result with the given exit code and stderr.
    pub fn failure(code: i32, stderr: impl Into<String>) -> Self {
        Self {
            code: Some(code),
            stdout: String::new(),
            stderr: stderr.into(),
        }
    }

    /// Whether the command exited with status zero.
    pub fn is_success(&self) -> bool {
        self.code == Some(0)
    }

    /// Turn a nonzero exit into [`Error::Command`] for `operation`.
    ///
    /// Returns stdout on success.
    pub fn check(self, operation: impl Into<String>) -> Result<String> {
        if self.is_success() {
            Ok(self.stdout)
        } else {
            let err = Error::command(operation, self.code, self.stdout, self.stderr);
            tracing::warn!("{}", err);
            Err(err)
        }
    }
}

/// Executes host commands.
///
/// Implementations must not retry and must not impose a timeout of their
/// own; a command runs until it exits.
pub trait CommandRunner {
    /// Run `cmd` to completion and capture its output.
    ///
    /// Only a failure to start the process is an error here. A nonzero
    /// exit is reported through [`CommandOutput::code`].
    fn run(&self, cmd: &HostCommand) -> impl Future<Output = Result<CommandOutput>> + Send;
}

/// Runs commands as real child processes.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl SystemRunner {
    /// Create a runner for the local host.
    pub fn new() -> Self {
        Self
    }
}

impl CommandRunner for SystemRunner {
    async fn run(&self, cmd: &HostCommand) -> Result<CommandOutput> {
        tracing::debug!("command: {}", cmd);

        let mut child = tokio::process::Command::new(cmd.program());
        for arg in cmd.arguments() {
            // netsh parses its own command line, so `name="Local Area Connection"`
            // must reach it with the quotes exactly as written.
            #[cfg(windows)]
            child.raw_arg(arg);
            #[cfg(not(windows))]
            child.arg(arg);
        }

        let output = child
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .output()
            .await?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

        if !stdout.is_empty() {
            tracing::trace!("command stdout:\n{}", stdout);
        }
        if !stderr.is_empty() {
            tracing::trace!("command stderr:\n{}", stderr);
        }

        Ok(CommandOutput {
            code: output.status.code(),
            stdout,
            stderr,
        })
    }
}
