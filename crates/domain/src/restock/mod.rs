//! Restocking domain: messages, aggregate, and command handler.

mod aggregate;
mod commands;
mod events;
mod handler;
mod queries;
mod value_objects;

pub use aggregate::{RESTOCK_CEILING, Restocker, RestockerState};
pub use commands::InventoryCommand;
pub use events::InventoryEvent;
pub use handler::RestockCommandHandler;
pub use queries::InventoryQuery;
pub use value_objects::ProductId;
