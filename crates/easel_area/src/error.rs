//! Area error types

use thiserror::Error;

use crate::native::NativeHandle;

/// Area-related errors
///
/// Dropped input is not an error; these only cover misuse of the registry
/// and invalid configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AreaError {
    /// A native callback named a view no area is registered under
    #[error("no area registered for native view {0:?}")]
    UnknownView(NativeHandle),

    /// An area is already registered for this native view
    #[error("native view {0:?} already has an area")]
    DuplicateView(NativeHandle),

    /// Invalid area configuration
    #[error("invalid area configuration: {0}")]
    Config(String),
}

/// Result type for area operations
pub type Result<T> = std::result::Result<T, AreaError>;
