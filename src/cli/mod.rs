//! Command Line Interface (CLI) layer for rpal-batch.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`): logging setup, layering of
//! defaults, config file and flags into `RunParams`, and dispatch to
//! `rpal_batch::run_with_params`.
//!
//! If you are embedding the runner into another application, prefer the
//! library API (`rpal_batch::api`) over calling the CLI code.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
