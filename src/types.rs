//! Shared types used across the batch runner.
//! Includes `Validation` (program path check) and `ExecutionOutcome`, the typed
//! form of the text written after `-->` in each results record.
use crate::error::ExecutionError;

/// Literal result recorded for a candidate whose program path fails validation.
pub const NOT_RPAL_PROGRAM: &str = "Not rpal program";

/// Prefix of every result produced by a failed interpreter invocation.
pub const EXECUTION_ERROR_PREFIX: &str = "Error executing command: ";

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Validation {
    Program,
    NotRpal,
}

impl Validation {
    pub fn is_program(self) -> bool {
        matches!(self, Validation::Program)
    }
}

#[derive(Debug)]
pub enum ExecutionOutcome {
    /// Interpreter exited 0; holds its trimmed stdout.
    Output(String),
    NotRpal,
    Failed(ExecutionError),
}

impl std::fmt::Display for ExecutionOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExecutionOutcome::Output(out) => write!(f, "{}", out),
            ExecutionOutcome::NotRpal => write!(f, "{}", NOT_RPAL_PROGRAM),
            // Trailing newline is part of the recorded result.
            ExecutionOutcome::Failed(err) => writeln!(f, "{}{}", EXECUTION_ERROR_PREFIX, err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_outcome_carries_prefix_and_newline() {
        let outcome = ExecutionOutcome::Failed(ExecutionError::NonZeroExit {
            command: "java App ./a.rpal.rpal".to_string(),
            code: 2,
        });
        let text = outcome.to_string();
        assert!(text.starts_with("Error executing command: Command 'java App ./a.rpal.rpal'"));
        assert!(text.ends_with(".\n"));
    }

    #[test]
    fn not_rpal_renders_literal() {
        assert_eq!(ExecutionOutcome::NotRpal.to_string(), "Not rpal program");
    }
}
