//! External interpreter invocation.
//!
//! The interpreter is spawned directly with an argument vector: its program, any
//! leading arguments, then the program path. Nothing goes through a shell, so
//! filenames containing spaces or shell metacharacters reach the interpreter as-is.
use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ExecutionError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterpreterCommand {
    pub program: String,
    #[serde(default)]
    pub args: Vec<String>,
}

impl Default for InterpreterCommand {
    fn default() -> Self {
        Self::new("java", ["App"])
    }
}

impl InterpreterCommand {
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Space-joined rendering of the full invocation, for messages only
    pub fn command_line(&self, path: &Path) -> String {
        let mut parts = Vec::with_capacity(self.args.len() + 2);
        parts.push(self.program.clone());
        parts.extend(self.args.iter().cloned());
        parts.push(path.display().to_string());
        parts.join(" ")
    }

    /// Run the interpreter on `path` and return its stdout with surrounding
    /// whitespace trimmed. Stdin and stderr are shared with this process.
    /// Blocks until the child exits; there is no timeout.
    pub fn execute(&self, path: &Path) -> Result<String, ExecutionError> {
        let command = self.command_line(path);
        debug!("Executing: {}", command);

        let output = Command::new(&self.program)
            .args(&self.args)
            .arg(path)
            .stdin(Stdio::inherit())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .output()
            .map_err(|source| ExecutionError::Spawn {
                command: command.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(status_error(command, output.status));
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

fn status_error(command: String, status: ExitStatus) -> ExecutionError {
    if let Some(code) = status.code() {
        return ExecutionError::NonZeroExit { command, code };
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return ExecutionError::Signaled { command, signal };
        }
    }

    ExecutionError::Terminated { command }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_line_appends_path_last() {
        let cmd = InterpreterCommand::default();
        assert_eq!(
            cmd.command_line(Path::new("./foo.rpal.rpal")),
            "java App ./foo.rpal.rpal"
        );
    }

    #[test]
    fn missing_program_is_spawn_error() {
        let cmd = InterpreterCommand::new("rpal-batch-no-such-interpreter", Vec::<String>::new());
        let err = cmd.execute(Path::new("x.rpal.rpal")).unwrap_err();
        assert!(matches!(err, ExecutionError::Spawn { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn stdout_is_trimmed() {
        let cmd = InterpreterCommand::new("sh", ["-c", "printf '  42\\n\\n'", "stub"]);
        assert_eq!(cmd.execute(Path::new("foo.rpal.rpal")).unwrap(), "42");
    }

    #[cfg(unix)]
    #[test]
    fn path_is_passed_as_single_argument() {
        let cmd = InterpreterCommand::new("sh", ["-c", "printf '%s|%s' \"$#\" \"$1\"", "stub"]);
        let out = cmd.execute(Path::new("./odd name; rm -rf.rpal.rpal")).unwrap();
        assert_eq!(out, "1|./odd name; rm -rf.rpal.rpal");
    }

    #[cfg(unix)]
    #[test]
    fn non_zero_exit_reports_code() {
        let cmd = InterpreterCommand::new("sh", ["-c", "exit 3", "stub"]);
        match cmd.execute(Path::new("foo.rpal.rpal")).unwrap_err() {
            ExecutionError::NonZeroExit { code, command } => {
                assert_eq!(code, 3);
                assert!(command.ends_with("foo.rpal.rpal"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn signal_death_is_reported() {
        let cmd = InterpreterCommand::new("sh", ["-c", "kill -9 $$", "stub"]);
        let err = cmd.execute(Path::new("foo.rpal.rpal")).unwrap_err();
        assert!(matches!(err, ExecutionError::Signaled { signal: 9, .. }));
        assert!(err.to_string().ends_with("died with <Signals.SIGKILL: 9>."));
    }
}
