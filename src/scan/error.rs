use std::path::PathBuf;

/// Errors raised while loading, splitting or extracting records
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("Failed to read input file '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid placeholder pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    #[error("Failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),
}
