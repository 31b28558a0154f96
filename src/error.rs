//! Startup and terminal errors, reported through miette once the terminal
//! has been restored.

use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

use crate::core::error::CoreError;

#[derive(Debug, Error, Diagnostic)]
pub enum AppError {
    #[error("Could not read seed file {path}")]
    #[diagnostic(
        code(agyal::seed::read),
        help("check `data.seed_file` in config.toml, or remove it to use the built-in sample data")
    )]
    SeedRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Seed file {path} is not valid dashboard data")]
    #[diagnostic(code(agyal::seed::parse))]
    SeedParse {
        path: PathBuf,
        #[source_code]
        contents: String,
        #[label("{message}")]
        span: Option<miette::SourceSpan>,
        message: String,
    },

    #[error("Invalid dashboard data")]
    #[diagnostic(
        code(agyal::seed::invalid),
        help("the profile list must be non-empty and ids must be unique")
    )]
    InvalidData(#[source] CoreError),

    #[error("Terminal I/O failed")]
    #[diagnostic(code(agyal::terminal))]
    Terminal(#[from] std::io::Error),
}
