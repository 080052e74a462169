//! Append-only event log with JSON file persistence.
//!
//! The event store is the single source of truth: the ordered log of
//! immutable facts from which every other view is derived by replay.
//! This crate provides:
//! - [`DomainEvent`] trait for events the store can persist
//! - [`EventRecord`] wrapping an event with its identity and recording time
//! - [`FileEventStore`] holding the in-memory ordered log and making it
//!   durable as one JSON array on disk

pub mod error;
pub mod event;
pub mod store;

pub use common::EventId;
pub use error::{EventStoreError, Result};
pub use event::{DomainEvent, EventRecord};
pub use store::FileEventStore;
