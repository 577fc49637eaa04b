//! Schema registry and diagram error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from the schema registry.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// Requested schema name was not found in the registry.
    #[error("Schema not found: {0}")]
    NotFound(String),

    /// JSON value did not pass schema validation.
    #[error("Validation failed: {errors:?}")]
    ValidationFailed {
        /// Individual error messages from the validator.
        errors: Vec<String>,
    },

    /// Schema compilation error.
    #[error("Schema generation error: {0}")]
    Generation(String),
}

/// Errors from rendering an ER diagram to disk.
#[derive(Debug, Error)]
pub enum DiagramError {
    /// The output path's extension does not name a known format.
    #[error("Unsupported diagram format for {}: expected one of {}", .path.display(), crate::diagram::SUPPORTED_EXTENSIONS.join(", "))]
    UnsupportedFormat { path: PathBuf },

    #[error("I/O error writing {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The Graphviz executable could not be started.
    #[error("Graphviz executable '{program}' not found; install Graphviz or write a .dot/.mmd file")]
    GraphvizNotFound { program: String },

    /// Graphviz ran but exited unsuccessfully.
    #[error("Graphviz failed ({status}): {stderr}")]
    Graphviz { status: String, stderr: String },
}
