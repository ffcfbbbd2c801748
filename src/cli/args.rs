use clap::Parser;
use std::path::PathBuf;

/// With no arguments: scan `.`, run `java App <file>` per program, write `result.txt`.
#[derive(Parser, Debug)]
#[command(
    name = "rpal-batch",
    version,
    about = "Run every RPAL program in a directory and record the output"
)]
pub struct CliArgs {
    /// Directory to scan for programs (default: current directory)
    #[arg(short, long)]
    pub dir: Option<PathBuf>,

    /// Results file (default: result.txt in the current directory)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Interpreter executable; replaces both the configured program and its arguments
    #[arg(long)]
    pub interpreter: Option<String>,

    /// Argument passed to the interpreter before the program path (repeatable)
    #[arg(long = "interpreter-arg", allow_hyphen_values = true)]
    pub interpreter_args: Vec<String>,

    /// Dot component that marks a program
    #[arg(long)]
    pub extension: Option<String>,

    /// Print each file's second dot component to stdout while scanning
    #[arg(long, default_value_t = false)]
    pub echo_components: bool,

    /// JSON file with run parameters; flags take precedence over its values
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Enable logging
    #[arg(long, default_value_t = false)]
    pub log: bool,
}
