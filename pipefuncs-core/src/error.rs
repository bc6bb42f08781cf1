//! Error types for pipe functions and the registry

use thiserror::Error;

/// Pipe function error types
#[derive(Debug, Error)]
pub enum PipeError {
    /// A pipe function could not parse the current value as JSON.
    #[error("{func}: failed to parse string as JSON: {source}")]
    Parse {
        /// Name of the failing pipe function, e.g. `json()`
        func: &'static str,
        /// Underlying serde_json error
        #[source]
        source: serde_json::Error,
    },
    /// A pipe function with the same name is already registered.
    #[error("Pipe function already registered: '{name}'")]
    AlreadyRegistered {
        /// Name that collided
        name: String,
    },
    /// No pipe function is registered under the requested name.
    #[error("Pipe function not found: no pipe function named '{name}' is registered")]
    NotFound {
        /// Name that was looked up
        name: String,
    },
}

impl PipeError {
    /// Name of the pipe function this error is attributed to
    pub fn func_name(&self) -> &str {
        match self {
            PipeError::Parse { func, .. } => *func,
            PipeError::AlreadyRegistered { name } | PipeError::NotFound { name } => name.as_str(),
        }
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, PipeError>;
