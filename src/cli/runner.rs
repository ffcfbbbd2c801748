use tracing::info;
use tracing_subscriber::EnvFilter;

use rpal_batch::{InterpreterCommand, RunParams, run_with_params};

use super::args::CliArgs;
use super::errors::AppError;

fn init_logging() -> Result<(), AppError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| AppError::Logging(e.to_string()))
}

/// Layer defaults, then the config file, then flags.
fn resolve_params(args: &CliArgs) -> Result<RunParams, AppError> {
    let mut params = match &args.config {
        Some(path) => RunParams::from_json_file(path).map_err(|source| AppError::Config {
            path: path.clone(),
            source,
        })?,
        None => RunParams::default(),
    };

    if let Some(dir) = &args.dir {
        params.directory = dir.clone();
    }
    if let Some(output) = &args.output {
        params.results_file = output.clone();
    }
    if let Some(program) = &args.interpreter {
        params.interpreter =
            InterpreterCommand::new(program.clone(), args.interpreter_args.clone());
    } else if !args.interpreter_args.is_empty() {
        params.interpreter.args = args.interpreter_args.clone();
    }
    if let Some(extension) = &args.extension {
        params.extension = extension.clone();
    }
    if args.echo_components {
        params.echo_components = true;
    }

    Ok(params)
}

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    if args.log {
        init_logging()?;
    }

    let params = resolve_params(&args)?;
    info!("Interpreter: {} {}", params.interpreter.program, params.interpreter.args.join(" "));

    let report = run_with_params(&params).map_err(AppError::from)?;

    info!("Batch run complete! {} record(s) written", report.records());
    info!("Processed: {}", report.processed);
    info!("Not programs: {}", report.rejected);
    info!("Errors: {}", report.errors);
    info!("Skipped: {}", report.skipped);

    Ok(())
}
