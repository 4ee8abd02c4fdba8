//! Subprocess execution adapter.

use std::process::{Command, Stdio};

use tracing::{debug, instrument};

use webstrap_core::{
    application::{ApplicationError, ports::ProcessRunner},
    error::WebstrapResult,
};

/// Runs commands with inherited standard I/O so the user sees generator
/// and installer output live. Resolves on exit code zero, fails with a
/// descriptive error otherwise.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl SystemRunner {
    pub fn new() -> Self {
        Self
    }
}

impl ProcessRunner for SystemRunner {
    #[instrument(skip_all, fields(program))]
    fn run(&self, program: &str, args: &[String]) -> WebstrapResult<()> {
        debug!(program, ?args, "spawning");

        let command_line = format!("{} {}", program, args.join(" "));

        let status = Command::new(program)
            .args(args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| ApplicationError::CommandSpawn {
                command: command_line.clone(),
                reason: e.to_string(),
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(ApplicationError::CommandFailed {
                command: command_line,
                code: status.code(),
            }
            .into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_exit_resolves() {
        let runner = SystemRunner::new();
        assert!(runner.run("true", &[]).is_ok());
    }

    #[test]
    fn nonzero_exit_is_command_failed() {
        let runner = SystemRunner::new();
        let err = runner.run("false", &[]).unwrap_err();
        assert!(err.to_string().contains("exited"));
    }

    #[test]
    fn missing_binary_is_spawn_error() {
        let runner = SystemRunner::new();
        let err = runner
            .run("definitely-not-a-real-binary-9f2c", &[])
            .unwrap_err();
        assert!(err.to_string().contains("Failed to launch"));
    }
}
