//! Headless platform errors

use easel_area::AreaError;
use thiserror::Error;

/// Errors from trace parsing and replay
#[derive(Error, Debug)]
pub enum HeadlessError {
    /// A trace line is not a valid native message
    #[error("trace line {line}: {source}")]
    Parse {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    /// The area rejected a call
    #[error(transparent)]
    Area(#[from] AreaError),
}

/// Result type for headless operations
pub type Result<T> = std::result::Result<T, HeadlessError>;
