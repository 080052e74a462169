use std::fs;
use std::path::{Path, PathBuf};

use crate::{DomainEvent, EventRecord, EventStoreError, Result};

/// Append-only ordered log of domain events with JSON file durability.
///
/// The in-memory log is canonical; `save` and `load` move the full log to
/// and from the backing file as one JSON array, one element per event,
/// array order equal to append order. Appends do no validation and no
/// deduplication: any event may be appended, and nothing is ever updated
/// or deleted once in the log (compensating facts are new events).
pub struct FileEventStore<E: DomainEvent> {
    events: Vec<EventRecord<E>>,
    path: PathBuf,
}

impl<E: DomainEvent> FileEventStore<E> {
    /// Creates an empty store backed by the given file path.
    ///
    /// The file is not touched until `save` or `load` is called.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            events: Vec::new(),
            path: path.into(),
        }
    }

    /// Creates a store seeded with an initial event list.
    pub fn with_events(initial: Vec<EventRecord<E>>, path: impl Into<PathBuf>) -> Self {
        Self {
            events: initial,
            path: path.into(),
        }
    }

    /// Returns the backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends one event to the end of the log, stamping it with a fresh
    /// identity and the current time. Returns the stored record.
    pub fn append(&mut self, event: E) -> &EventRecord<E> {
        let record = EventRecord::new(event);
        tracing::debug!(event_type = record.event_type(), "event appended");
        self.events.push(record);
        self.events.last().expect("just pushed")
    }

    /// Returns a copy of the full ordered log.
    ///
    /// Callers receive an owned snapshot; mutating it cannot affect the
    /// store's internal log.
    pub fn get_all(&self) -> Vec<EventRecord<E>> {
        self.events.clone()
    }

    /// Borrows the full ordered log without copying.
    pub fn events(&self) -> &[EventRecord<E>] {
        &self.events
    }

    /// Returns the number of events in the log.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Returns true if the log holds no events.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Empties the in-memory log. Used for resets, not part of normal
    /// operation; the backing file is untouched until the next `save`.
    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// Serializes the full log to the backing file, overwriting any prior
    /// content and preserving append order.
    pub fn save(&self) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.events)?;
        fs::write(&self.path, json)?;
        tracing::debug!(count = self.events.len(), path = %self.path.display(), "event log saved");
        Ok(())
    }

    /// Replaces the in-memory log with the contents of the backing file.
    ///
    /// A missing file is not an error and leaves the log unchanged. Fails
    /// with [`EventStoreError::Deserialization`] if a stored record's
    /// discriminator matches no known event variant, and with
    /// [`EventStoreError::Format`] if the content is not a valid serialized
    /// log. Either failure aborts the whole load; there is no partial load.
    pub fn load(&mut self) -> Result<()> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(()),
            Err(e) => return Err(e.into()),
        };

        let raw: Vec<serde_json::Value> = serde_json::from_str(&contents)?;

        let mut events = Vec::with_capacity(raw.len());
        for item in raw {
            if let Some(event_type) = item.get("type").and_then(serde_json::Value::as_str)
                && !E::event_types().contains(&event_type)
            {
                return Err(EventStoreError::Deserialization {
                    event_type: event_type.to_string(),
                });
            }
            let record: EventRecord<E> = serde_json::from_value(item)?;
            events.push(record);
        }

        tracing::debug!(count = events.len(), path = %self.path.display(), "event log loaded");
        self.events = events;
        Ok(())
    }
}
