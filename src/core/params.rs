use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::filter::DEFAULT_EXTENSION;
use crate::core::interpreter::InterpreterCommand;
use crate::error::Result;

pub const DEFAULT_RESULTS_FILE: &str = "result.txt";

/// Run parameters suitable for config files; defaults reproduce a bare invocation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunParams {
    /// Directory scanned (non-recursively) for programs
    pub directory: PathBuf,
    /// Results file; relative paths resolve against the process working directory
    pub results_file: PathBuf,
    pub interpreter: InterpreterCommand,
    /// Dot component that marks a program, e.g. `rpal` in `foo.rpal.rpal`
    pub extension: String,
    /// Print each scanned file's second dot component to stdout
    pub echo_components: bool,
}

impl Default for RunParams {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("."),
            results_file: PathBuf::from(DEFAULT_RESULTS_FILE),
            interpreter: InterpreterCommand::default(),
            extension: DEFAULT_EXTENSION.to_string(),
            echo_components: false,
        }
    }
}

impl RunParams {
    /// Parameters for scanning `directory` with everything else at its default
    pub fn for_directory(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            ..Self::default()
        }
    }

    /// Parse parameters from JSON text. Missing fields take their defaults.
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_bare_invocation() {
        let params = RunParams::default();
        assert_eq!(params.directory, PathBuf::from("."));
        assert_eq!(params.results_file, PathBuf::from("result.txt"));
        assert_eq!(params.interpreter.program, "java");
        assert_eq!(params.interpreter.args, vec!["App".to_string()]);
        assert_eq!(params.extension, "rpal");
        assert!(!params.echo_components);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let params = RunParams::from_json(r#"{ "directory": "tests/programs" }"#).unwrap();
        assert_eq!(params.directory, PathBuf::from("tests/programs"));
        assert_eq!(params.results_file, PathBuf::from("result.txt"));
        assert_eq!(params.interpreter, InterpreterCommand::default());
    }

    #[test]
    fn json_interpreter_override() {
        let params = RunParams::from_json(
            r#"{ "interpreter": { "program": "./rpal20", "args": [] }, "extension": "rp",
                 "echo_components": true }"#,
        )
        .unwrap();
        assert!(params.echo_components);
        assert_eq!(params.interpreter.program, "./rpal20");
        assert!(params.interpreter.args.is_empty());
        assert_eq!(params.extension, "rp");
    }

    #[test]
    fn malformed_json_is_config_error() {
        let err = RunParams::from_json("{ directory: ").unwrap_err();
        assert!(matches!(err, crate::error::Error::Config(_)));
    }
}
