//! Running the `juju` CLI.
//!
//! All process spawning goes through [`Execute`], so tests (and callers
//! with unusual environments) can swap in their own runner.

use std::io;
use std::process::Command;

use crate::decode::{self, DecodeError, Dialect};
use crate::model::Status;
use crate::wait::StatusSource;

/// Errors that can occur when talking to Juju.
#[derive(Debug, thiserror::Error)]
pub enum JujuError {
    #[error("`{command}` exited with code {code}: {stderr}")]
    Invocation {
        code: i32,
        command: String,
        stderr: String,
    },

    #[error("failed to run juju: {0}")]
    Spawn(#[from] io::Error),

    #[error("invalid JSON from juju: {0}")]
    Json(#[from] serde_json::Error),

    #[error("could not decode juju status: {0}")]
    Decode(#[from] DecodeError),
}

pub type Result<T> = core::result::Result<T, JujuError>;

/// What a finished process left behind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// Exit code; `-1` when the process was killed by a signal.
    pub code: i32,
    pub stdout: String,
    pub stderr: String,
}

/// Something that can run a program to completion.
pub trait Execute {
    fn execute(&self, program: &str, args: &[String]) -> io::Result<CommandOutput>;
}

/// Runs programs as child processes.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessRunner;

impl Execute for ProcessRunner {
    fn execute(&self, program: &str, args: &[String]) -> io::Result<CommandOutput> {
        let output = Command::new(program).args(args).output()?;
        Ok(CommandOutput {
            code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

/// A handle on one Juju model, driven through the CLI.
#[derive(Debug, Clone)]
pub struct Juju<E = ProcessRunner> {
    binary: String,
    model: Option<String>,
    dialect: Option<Dialect>,
    runner: E,
}

impl Default for Juju {
    fn default() -> Self {
        Self::new()
    }
}

impl Juju {
    /// A handle on the current model using `juju` from `PATH`.
    pub fn new() -> Self {
        Self::with_runner(ProcessRunner)
    }
}

impl<E: Execute> Juju<E> {
    pub fn with_runner(runner: E) -> Self {
        Self {
            binary: "juju".to_string(),
            model: None,
            dialect: None,
            runner,
        }
    }

    /// Use a different `juju` executable.
    #[must_use]
    pub fn binary(mut self, binary: impl Into<String>) -> Self {
        self.binary = binary.into();
        self
    }

    /// Target a named model instead of the current one.
    #[must_use]
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Decode status in a fixed dialect instead of detecting it.
    #[must_use]
    pub fn dialect(mut self, dialect: Dialect) -> Self {
        self.dialect = Some(dialect);
        self
    }

    /// Run a juju subcommand and return its stdout.
    ///
    /// When a model is set and `scoped` is true, `--model` is passed right
    /// after the subcommand name.
    pub fn cli(&self, args: &[&str], scoped: bool) -> Result<String> {
        let mut argv: Vec<String> = Vec::with_capacity(args.len() + 2);
        let (subcommand, rest) = args.split_first().map_or((None, args), |(s, r)| (Some(s), r));
        argv.extend(subcommand.map(|s| (*s).to_string()));
        if let (true, Some(model)) = (scoped, &self.model) {
            argv.push("--model".to_string());
            argv.push(model.clone());
        }
        argv.extend(rest.iter().map(|s| (*s).to_string()));

        let command = format!("{} {}", self.binary, argv.join(" "));
        tracing::debug!(%command, "running juju");

        let output = self.runner.execute(&self.binary, &argv)?;
        if output.code != 0 {
            return Err(JujuError::Invocation {
                code: output.code,
                command,
                stderr: output.stderr.trim_end().to_string(),
            });
        }
        Ok(output.stdout)
    }

    /// Fetch and decode the model's status.
    pub fn status(&self) -> Result<Status> {
        let stdout = self.cli(&["status", "--format", "json"], true)?;
        Ok(decode::decode_str(&stdout, self.dialect)?)
    }

    /// The version of the `juju` client, e.g. `3.6.8-genericlinux-amd64`.
    pub fn version(&self) -> Result<String> {
        let stdout = self.cli(&["version", "--format", "json"], false)?;
        Ok(serde_json::from_str(&stdout)?)
    }
}

impl<E: Execute> StatusSource for Juju<E> {
    fn fetch_status(&self) -> Result<Status> {
        self.status()
    }
}
