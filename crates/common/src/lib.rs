//! Shared types for the restocking event-sourcing system.

pub mod types;

pub use types::EventId;
