//! Domain layer for the restocking event-sourcing system.
//!
//! This crate provides the core domain abstractions:
//! - Message taxonomy: commands and queries are requests, events are facts
//! - [`Aggregate`] trait for command-deciding components
//! - The restocker aggregate with its state fold and command handler

pub mod aggregate;
pub mod message;
pub mod restock;

pub use aggregate::Aggregate;
pub use message::{Message, MessageKind};
pub use restock::{
    InventoryCommand, InventoryEvent, InventoryQuery, ProductId, RESTOCK_CEILING,
    RestockCommandHandler, Restocker, RestockerState,
};
