//! Restock saga and its state fold.

use domain::{InventoryCommand, InventoryEvent, ProductId};
use event_store::EventRecord;

use crate::saga::Saga;

/// Saga-side state, rebuilt from history on every triggering event.
///
/// Holds the capacity (and product) from the most recently seen
/// `CapacityDefined` event. When no capacity has ever been defined the
/// capacity stays 0 and the product id stays empty; the saga will then
/// emit zero or negative order quantities. Clamping, if desired, is the
/// aggregate's responsibility downstream.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RestockSagaState {
    pub product_id: ProductId,
    pub capacity: i64,
}

impl RestockSagaState {
    /// Rebuilds state by folding over the ordered event history.
    ///
    /// The most recent `CapacityDefined` event wins; every other event
    /// kind is ignored by this fold.
    pub fn replay(history: &[EventRecord<InventoryEvent>]) -> Self {
        let mut state = Self::default();
        for record in history {
            if let InventoryEvent::CapacityDefined {
                product_id,
                capacity,
            } = &record.event
            {
                state.product_id = product_id.clone();
                state.capacity = *capacity;
            }
        }
        state
    }
}

/// Saga that re-orders stock when a threshold is reached.
#[derive(Debug, Clone)]
pub struct RestockSaga {
    state: RestockSagaState,
}

impl RestockSaga {
    /// Creates a saga over already-folded state.
    pub fn new(state: RestockSagaState) -> Self {
        Self { state }
    }

    /// Returns the folded state this saga decides against.
    pub fn state(&self) -> &RestockSagaState {
        &self.state
    }
}

impl Saga for RestockSaga {
    type Event = InventoryEvent;
    type Command = InventoryCommand;

    fn handle(&self, event: &InventoryEvent) -> Vec<InventoryCommand> {
        match event {
            InventoryEvent::ThresholdReached { quantity } => {
                vec![InventoryCommand::restock_order(
                    self.state.product_id.clone(),
                    self.state.capacity - quantity,
                )]
            }
            _ => Vec::new(),
        }
    }
}
