use thiserror::Error;

/// Top-level error type for the Kinship workspace.
#[derive(Error, Debug)]
pub enum KinshipError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Parse error on line {line}: {message}")]
    Parse { line: usize, message: String },
}

pub type Result<T> = std::result::Result<T, KinshipError>;
