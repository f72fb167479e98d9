use miette::Diagnostic;
use thiserror::Error;

/// Main error type for critter operations
#[derive(Error, Diagnostic, Debug)]
pub enum CritterError {
    #[error("IO error: {0}")]
    #[diagnostic(code(critter::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(critter::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Invalid seed: {input}")]
    #[diagnostic(code(critter::seed))]
    InvalidSeed {
        input: String,
        #[help]
        help: Option<String>,
    },

    #[error("Serialization error: {message}")]
    #[diagnostic(code(critter::serialize))]
    Serialize { message: String },

    #[error("Validation error: {message}")]
    #[diagnostic(code(critter::validate))]
    Validation {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, CritterError>;
