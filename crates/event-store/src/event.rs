use chrono::{DateTime, Utc};
use serde::{Serialize, de::DeserializeOwned};

use crate::EventId;

/// Trait for domain events the store can persist.
///
/// Domain events represent facts that have happened in the domain.
/// They are immutable, named in past tense, and carry a stable string
/// discriminator used as the `type` field of the on-disk layout.
pub trait DomainEvent: Serialize + DeserializeOwned + Clone + Send + Sync {
    /// Returns the discriminator for this event variant.
    fn event_type(&self) -> &'static str;

    /// Returns every discriminator the event type can deserialize from.
    ///
    /// The store rejects a stored record whose `type` field is not in this
    /// list before attempting to deserialize it.
    fn event_types() -> &'static [&'static str];
}

/// A persisted event along with its identity and recording time.
///
/// On disk a record is one flat JSON object: the `id` and `recorded_at`
/// fields plus the event's own discriminator and structural fields.
#[derive(Debug, Clone, PartialEq, Serialize, serde::Deserialize)]
pub struct EventRecord<E> {
    /// Unique identifier for this event.
    pub id: EventId,

    /// When the event was recorded.
    pub recorded_at: DateTime<Utc>,

    /// The event itself, flattened into the record.
    #[serde(flatten)]
    pub event: E,
}

impl<E: DomainEvent> EventRecord<E> {
    /// Wraps an event with a fresh identity and the current time.
    pub fn new(event: E) -> Self {
        Self {
            id: EventId::new(),
            recorded_at: Utc::now(),
            event,
        }
    }

    /// Returns the event's discriminator.
    pub fn event_type(&self) -> &'static str {
        self.event.event_type()
    }
}
