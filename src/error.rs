use thiserror::Error;

/// Custom error types for hovertip
///
/// The tooltip path itself never errors: missing content or unknown
/// triggers are silent no-ops. These cover the fallible edges around it.
#[derive(Debug, Error)]
pub enum HovertipError {
    #[error("Invalid selector: {0:?}")]
    InvalidSelector(String),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
