//! High-level library API: scan a directory for programs, run each through the
//! external interpreter, and record the results. Prefer these entrypoints over the
//! `core` and `io` primitives when embedding the runner.
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::core::filter::{dot_component, is_candidate, validate_program};
use crate::core::interpreter::InterpreterCommand;
use crate::core::params::RunParams;
use crate::error::{Error, Result};
use crate::io::ResultsWriter;
use crate::types::ExecutionOutcome;

/// Per-run counters. Only `processed`, `rejected` and `errors` produce records.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchReport {
    pub processed: usize,
    pub skipped: usize,
    pub rejected: usize,
    pub errors: usize,
}

impl BatchReport {
    pub fn records(&self) -> usize {
        self.processed + self.rejected + self.errors
    }
}

/// A regular file that passed the candidate filter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub filename: String,
    /// Scanned directory joined with `filename`
    pub path: PathBuf,
}

#[derive(Debug, Default)]
pub struct DirectoryScan {
    /// In directory-listing order
    pub candidates: Vec<Candidate>,
    /// Regular files rejected by the candidate filter
    pub skipped: usize,
    /// Second dot component of every regular file that has one, in listing order
    pub components: Vec<String>,
}

/// List regular files directly inside `directory` whose second dot component equals
/// `extension`. Subdirectories are ignored; the listing order is kept as is.
pub fn scan_directory(directory: &Path, extension: &str) -> Result<DirectoryScan> {
    let entries = fs::read_dir(directory).map_err(|source| Error::Directory {
        path: directory.to_path_buf(),
        source,
    })?;

    let mut scan = DirectoryScan::default();
    for entry in entries {
        let entry = entry?;
        let path = entry.path();

        if !path.is_file() {
            continue;
        }

        let Some(filename) = entry.file_name().to_str().map(str::to_owned) else {
            debug!("Skipping non UTF-8 filename: {:?}", entry.file_name());
            scan.skipped += 1;
            continue;
        };

        match dot_component(&filename, 1) {
            Some(component) => {
                debug!("{}: extension component {:?}", filename, component);
                scan.components.push(component.to_string());
            }
            None => debug!("{}: no extension component", filename),
        }

        if is_candidate(&filename, extension) {
            scan.candidates.push(Candidate { filename, path });
        } else {
            scan.skipped += 1;
        }
    }

    Ok(scan)
}

/// Validate `program` and, if it is a program, run it through `interpreter`.
/// Interpreter failures are returned as `ExecutionOutcome::Failed`, never as `Err`.
pub fn execute_program(
    interpreter: &InterpreterCommand,
    program: &Path,
    extension: &str,
) -> ExecutionOutcome {
    if !validate_program(&program.to_string_lossy(), extension).is_program() {
        return ExecutionOutcome::NotRpal;
    }

    match interpreter.execute(program) {
        Ok(output) => ExecutionOutcome::Output(output),
        Err(e) => ExecutionOutcome::Failed(e),
    }
}

/// Scan `directory` with default parameters, writing `result.txt` in the process
/// working directory.
pub fn run(directory: &Path) -> Result<BatchReport> {
    run_with_params(&RunParams::for_directory(directory))
}

/// Run every candidate in `params.directory` and write one record per candidate to
/// `params.results_file`. Only directory and results-file I/O failures abort the run.
pub fn run_with_params(params: &RunParams) -> Result<BatchReport> {
    if params.extension.is_empty() {
        return Err(Error::InvalidArgument {
            arg: "extension",
            value: params.extension.clone(),
        });
    }

    info!("Scanning directory: {:?}", params.directory);
    let scan = scan_directory(&params.directory, &params.extension)?;

    if params.echo_components {
        let mut stdout = std::io::stdout().lock();
        for component in &scan.components {
            writeln!(stdout, "{}", component)?;
        }
    }

    let mut report = BatchReport {
        skipped: scan.skipped,
        ..BatchReport::default()
    };

    let mut writer = ResultsWriter::create(&params.results_file)?;
    info!("Results file: {:?}", writer.path());

    for candidate in scan.candidates {
        info!("Running: {:?}", candidate.path);

        let outcome =
            execute_program(&params.interpreter, &candidate.path, &params.extension);
        match &outcome {
            ExecutionOutcome::Output(_) => report.processed += 1,
            ExecutionOutcome::NotRpal => {
                debug!("Not a program: {:?}", candidate.path);
                report.rejected += 1;
            }
            ExecutionOutcome::Failed(e) => {
                warn!("Error running {:?}: {}", candidate.path, e);
                report.errors += 1;
            }
        }

        writer.write_record(&candidate.filename, &outcome)?;
    }

    let written = writer.finish()?;
    debug_assert_eq!(written, report.records());
    Ok(report)
}
