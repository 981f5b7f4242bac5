use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalyzeError {
    #[error("Invalid configuration: {0}")]
    ConfigInvalid(String),
    #[error("Error opening log file {}: {source}", path.display())]
    InputOpenFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Error reading input: {0}")]
    ReadFailed(#[source] io::Error),
    #[error("Line {line} exceeds the maximum line length of {limit} bytes")]
    ReadTooLong { line: usize, limit: usize },
    #[error("Error creating report file {}: {source}", path.display())]
    SinkOpenFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Error writing output: {0}")]
    OutputFailed(#[source] io::Error),
}

impl AnalyzeError {
    /// Process exit status for this failure. Success is always 0.
    pub fn exit_code(&self) -> i32 {
        match self {
            AnalyzeError::ConfigInvalid(_) => 2,
            _ => 1,
        }
    }
}
