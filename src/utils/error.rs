use crate::domain::model::OpenMode;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReverserError {
    #[error("Failed to open file: {} ({mode})", path.display())]
    FileOpen {
        path: PathBuf,
        mode: OpenMode,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Cannot {operation} {}: file was opened for {mode}", path.display())]
    ModeMismatch {
        path: PathBuf,
        mode: OpenMode,
        operation: &'static str,
    },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

impl ReverserError {
    /// 對應的程序結束碼
    pub fn exit_code(&self) -> i32 {
        match self {
            ReverserError::FileOpen { .. } => 1,
            ReverserError::Io(_) | ReverserError::ModeMismatch { .. } => 2,
            ReverserError::ConfigError { .. } | ReverserError::InvalidConfigValueError { .. } => 3,
            ReverserError::ThreadPool(_) => 4,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ReverserError::FileOpen { .. } => {
                "Check that the file exists and that its directory is readable and writable"
            }
            ReverserError::Io(_) => "Check free disk space and that the input is valid UTF-8 text",
            ReverserError::ModeMismatch { .. } => {
                "Open the input for reading and the output for appending"
            }
            ReverserError::ConfigError { .. } | ReverserError::InvalidConfigValueError { .. } => {
                "Fix the configuration file or command line flags and run again"
            }
            ReverserError::ThreadPool(_) => "Lower the worker thread count",
        }
    }
}

pub type Result<T> = std::result::Result<T, ReverserError>;
