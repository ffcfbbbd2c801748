#![doc = r#"
rpal-batch — run every RPAL program in a directory through an external interpreter.

The runner scans a directory (non-recursively) for regular files whose second
dot-separated filename component is `rpal`, invokes the interpreter once per file,
and writes one `<filename>--><result>` line per file to a results file. A result is
the interpreter's trimmed stdout, the literal `Not rpal program`, or an
`Error executing command: ...` description. Interpreter failures never stop the run.

The interpreter itself (by default `java App <file>`) is a separate program.

Quick start
-----------
```rust,no_run
use std::path::Path;

fn main() -> rpal_batch::Result<()> {
    // Writes ./result.txt
    let report = rpal_batch::run(Path::new("."))?;
    println!("processed={} errors={}", report.processed, report.errors);
    Ok(())
}
```

Custom interpreter and output
-----------------------------
```rust,no_run
use std::path::PathBuf;
use rpal_batch::{InterpreterCommand, RunParams, run_with_params};

fn main() -> rpal_batch::Result<()> {
    let params = RunParams {
        directory: PathBuf::from("tests/programs"),
        results_file: PathBuf::from("/tmp/rpal-results.txt"),
        interpreter: InterpreterCommand::new("./rpal20", Vec::<String>::new()),
        ..RunParams::default()
    };
    run_with_params(&params)?;
    Ok(())
}
```

Filename checks
---------------
Two checks with different component indices are applied, see [`crate::core::filter`]:
the candidate filter reads component 1 of the filename, program validation reads
component 2 of the program path (directory joined with filename).

```rust
use rpal_batch::core::filter::{is_candidate, validate_program};
use rpal_batch::Validation;

assert!(is_candidate("foo.rpal.txt", "rpal"));
assert_eq!(validate_program("foo.rpal.txt", "rpal"), Validation::NotRpal);
assert_eq!(validate_program("./foo.rpal.txt", "rpal"), Validation::Program);
```

Error handling
--------------
`run` and `run_with_params` return `rpal_batch::Result<BatchReport>`; an `Err` means the
directory could not be listed or the results file could not be written. Per-file
interpreter failures are reported through [`ExecutionOutcome::Failed`] and the
`errors` counter instead.

Useful modules
--------------
- [`api`] — high-level entry points and `BatchReport`.
- [`crate::core`] — filename checks, `RunParams`, `InterpreterCommand`.
- [`io`] — the results file writer.
- [`error`] — crate-level `Error`, `Result`, and `ExecutionError`.
"#]

pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Curated public API surface
pub use crate::core::interpreter::InterpreterCommand;
pub use crate::core::params::RunParams;
pub use error::{Error, ExecutionError, Result};
pub use io::ResultsWriter;
pub use types::{ExecutionOutcome, Validation};

pub use api::{
    BatchReport, Candidate, DirectoryScan, execute_program, run, run_with_params, scan_directory,
};
