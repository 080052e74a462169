//! Restocking domain queries.

use crate::message::{Message, MessageKind};

/// Queries that can be answered by the read models.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InventoryQuery {
    /// Request for the current catalog view.
    Catalog,
}

impl Message for InventoryQuery {
    fn kind(&self) -> MessageKind {
        MessageKind::Query
    }
}
