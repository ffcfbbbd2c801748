use std::path::PathBuf;

use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Cannot load config {path:?}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: rpal_batch::Error,
    },

    #[error("Failed to initialise logging: {0}")]
    Logging(String),

    #[error(transparent)]
    Run(#[from] rpal_batch::Error),
}
