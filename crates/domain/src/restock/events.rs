//! Restocking domain events.

use event_store::DomainEvent;
use serde::{Deserialize, Serialize};

use crate::message::{Message, MessageKind};

use super::ProductId;

/// Events that can occur in the restocking domain.
///
/// Events are immutable facts; once appended to the log they are never
/// updated or deleted. The serde tag doubles as the on-disk discriminator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InventoryEvent {
    /// A product entered the catalog.
    AddProduct { product_id: ProductId },

    /// A restock was approved and recorded.
    RestockOrdered { product_id: ProductId, quantity: i64 },

    /// A restock request was rejected because an order is already
    /// outstanding.
    RestockAlreadyOrdered {},

    /// The maximum capacity for a product was declared.
    CapacityDefined { product_id: ProductId, capacity: i64 },

    /// Stock fell to the given quantity; may trigger re-ordering.
    ThresholdReached { quantity: i64 },
}

impl DomainEvent for InventoryEvent {
    fn event_type(&self) -> &'static str {
        match self {
            InventoryEvent::AddProduct { .. } => "add_product",
            InventoryEvent::RestockOrdered { .. } => "restock_ordered",
            InventoryEvent::RestockAlreadyOrdered {} => "restock_already_ordered",
            InventoryEvent::CapacityDefined { .. } => "capacity_defined",
            InventoryEvent::ThresholdReached { .. } => "threshold_reached",
        }
    }

    fn event_types() -> &'static [&'static str] {
        &[
            "add_product",
            "restock_ordered",
            "restock_already_ordered",
            "capacity_defined",
            "threshold_reached",
        ]
    }
}

impl Message for InventoryEvent {
    fn kind(&self) -> MessageKind {
        MessageKind::Event
    }
}

// Convenience constructors
impl InventoryEvent {
    /// Creates an AddProduct event.
    pub fn add_product(product_id: impl Into<ProductId>) -> Self {
        InventoryEvent::AddProduct {
            product_id: product_id.into(),
        }
    }

    /// Creates a RestockOrdered event.
    pub fn restock_ordered(product_id: impl Into<ProductId>, quantity: i64) -> Self {
        InventoryEvent::RestockOrdered {
            product_id: product_id.into(),
            quantity,
        }
    }

    /// Creates a RestockAlreadyOrdered event.
    pub fn restock_already_ordered() -> Self {
        InventoryEvent::RestockAlreadyOrdered {}
    }

    /// Creates a CapacityDefined event.
    pub fn capacity_defined(product_id: impl Into<ProductId>, capacity: i64) -> Self {
        InventoryEvent::CapacityDefined {
            product_id: product_id.into(),
            capacity,
        }
    }

    /// Creates a ThresholdReached event.
    pub fn threshold_reached(quantity: i64) -> Self {
        InventoryEvent::ThresholdReached { quantity }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_type_matches_wire_discriminator() {
        assert_eq!(InventoryEvent::add_product("p").event_type(), "add_product");
        assert_eq!(
            InventoryEvent::restock_ordered("p", 10).event_type(),
            "restock_ordered"
        );
        assert_eq!(
            InventoryEvent::restock_already_ordered().event_type(),
            "restock_already_ordered"
        );
        assert_eq!(
            InventoryEvent::capacity_defined("p", 380).event_type(),
            "capacity_defined"
        );
        assert_eq!(
            InventoryEvent::threshold_reached(35).event_type(),
            "threshold_reached"
        );
    }

    #[test]
    fn every_variant_is_a_known_type() {
        let events = [
            InventoryEvent::add_product("p"),
            InventoryEvent::restock_ordered("p", 10),
            InventoryEvent::restock_already_ordered(),
            InventoryEvent::capacity_defined("p", 380),
            InventoryEvent::threshold_reached(35),
        ];
        for event in &events {
            assert!(InventoryEvent::event_types().contains(&event.event_type()));
        }
    }

    #[test]
    fn serialization_uses_declared_fields() {
        let event = InventoryEvent::restock_ordered("broccoli", 20);
        let value = serde_json::to_value(&event).unwrap();

        assert_eq!(value["type"], "restock_ordered");
        assert_eq!(value["product_id"], "broccoli");
        assert_eq!(value["quantity"], 20);
    }

    #[test]
    fn rejection_event_carries_no_fields() {
        let event = InventoryEvent::restock_already_ordered();
        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(value, serde_json::json!({"type": "restock_already_ordered"}));
    }

    #[test]
    fn deserialization_roundtrip() {
        let event = InventoryEvent::capacity_defined("lasagne", 380);
        let json = serde_json::to_string(&event).unwrap();
        let deserialized: InventoryEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, event);
    }

    #[test]
    fn events_are_events() {
        assert_eq!(
            InventoryEvent::threshold_reached(1).kind(),
            MessageKind::Event
        );
    }
}
