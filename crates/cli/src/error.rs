//! CLI error types.

use thiserror::Error;

/// Errors surfaced while executing a shell command.
#[derive(Debug, Error)]
pub enum CliError {
    /// The event log could not be read or written.
    #[error("event store error: {0}")]
    Store(#[from] event_store::EventStoreError),

    /// A read model failed to process an event.
    #[error("projection error: {0}")]
    Projection(#[from] projections::ProjectionError),

    /// Query output could not be rendered.
    #[error("render error: {0}")]
    Render(#[from] serde_json::Error),
}

/// Result type for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;
