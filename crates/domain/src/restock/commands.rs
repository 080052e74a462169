//! Restocking domain commands.

use crate::message::{Message, MessageKind};

use super::ProductId;

/// Commands that can be issued against the restocking domain.
///
/// A command is a request; the aggregate decides whether it becomes one or
/// more events. Commands are transient and never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InventoryCommand {
    /// Request to order more stock for a product.
    RestockOrder { product_id: ProductId, quantity: i64 },
}

impl InventoryCommand {
    /// Creates a RestockOrder command.
    pub fn restock_order(product_id: impl Into<ProductId>, quantity: i64) -> Self {
        InventoryCommand::RestockOrder {
            product_id: product_id.into(),
            quantity,
        }
    }
}

impl Message for InventoryCommand {
    fn kind(&self) -> MessageKind {
        MessageKind::Command
    }
}
