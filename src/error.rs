//! Crate-level error type and `Result` alias for run-level failures, plus the
//! per-file `ExecutionError` that is contained and rendered into the results file
//! instead of being propagated.
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Cannot read directory {path:?}: {source}")]
    Directory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot create results file {path:?}: {source}")]
    ResultsFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid argument: {arg}={value}")]
    InvalidArgument { arg: &'static str, value: String },

    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),
}

/// Failure of a single interpreter invocation.
///
/// The `Display` output follows the shape `Command '<cmd>' ...` so that it reads the
/// same in the results file whether the process could not start or exited badly.
#[derive(Debug, Error)]
pub enum ExecutionError {
    #[error("Command '{command}' could not be started: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Command '{command}' returned non-zero exit status {code}.")]
    NonZeroExit { command: String, code: i32 },

    #[error("Command '{command}' died with {}.", signal_label(.signal))]
    Signaled { command: String, signal: i32 },

    #[error("Command '{command}' was terminated without an exit status.")]
    Terminated { command: String },
}

/// `<Signals.SIGKILL: 9>` for known signals, `unknown signal N` otherwise.
fn signal_label(signal: &i32) -> String {
    let name = match *signal {
        1 => "SIGHUP",
        2 => "SIGINT",
        3 => "SIGQUIT",
        4 => "SIGILL",
        5 => "SIGTRAP",
        6 => "SIGABRT",
        8 => "SIGFPE",
        9 => "SIGKILL",
        11 => "SIGSEGV",
        13 => "SIGPIPE",
        14 => "SIGALRM",
        15 => "SIGTERM",
        _ => return format!("unknown signal {}", signal),
    };
    format!("<Signals.{}: {}>", name, signal)
}
