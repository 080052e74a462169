use thiserror::Error;

/// Errors that can occur when interacting with the event store.
///
/// Only `save` and `load` have failure paths; the in-memory operations
/// (`append`, `get_all`, `clear`) cannot fail.
#[derive(Debug, Error)]
pub enum EventStoreError {
    /// The backing content is not parseable as the expected serialized
    /// structure.
    #[error("event log format error: {0}")]
    Format(#[from] serde_json::Error),

    /// A stored record's discriminator does not match any known event
    /// variant. This is a corrupt-log condition, fatal to the whole load.
    #[error("unknown event type in stored log: {event_type}")]
    Deserialization { event_type: String },

    /// An I/O error occurred while reading or writing the backing file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for event store operations.
pub type Result<T> = std::result::Result<T, EventStoreError>;
