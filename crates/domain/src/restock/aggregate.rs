//! Restocker aggregate and its state fold.

use event_store::EventRecord;

use crate::aggregate::Aggregate;

use super::{InventoryCommand, InventoryEvent};

/// Inclusive ceiling on quantity already on order. A restock request is
/// accepted while the folded quantity-on-order is at or below this value.
pub const RESTOCK_CEILING: i64 = 100;

/// Write-side state for the restocker, rebuilt from history on every
/// command.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RestockerState {
    /// Sum of the quantities of every RestockOrdered event in the log.
    pub quantity_on_order: i64,
}

impl RestockerState {
    /// Rebuilds state by folding over the ordered event history.
    ///
    /// Only RestockOrdered events contribute; every other event kind is
    /// ignored by this fold. The fold is deterministic: identical ordered
    /// input always produces identical state.
    pub fn replay(history: &[EventRecord<InventoryEvent>]) -> Self {
        let mut quantity_on_order = 0;
        for record in history {
            if let InventoryEvent::RestockOrdered { quantity, .. } = &record.event {
                quantity_on_order += quantity;
            }
        }
        Self { quantity_on_order }
    }
}

/// Aggregate deciding the outcome of restock commands.
#[derive(Debug, Clone)]
pub struct Restocker {
    state: RestockerState,
}

impl Restocker {
    /// Creates a restocker over already-folded state.
    pub fn new(state: RestockerState) -> Self {
        Self { state }
    }

    /// Returns the folded state this restocker decides against.
    pub fn state(&self) -> RestockerState {
        self.state
    }
}

impl Aggregate for Restocker {
    type Command = InventoryCommand;
    type Event = InventoryEvent;

    fn handle(&self, command: &InventoryCommand) -> Vec<InventoryEvent> {
        match command {
            InventoryCommand::RestockOrder {
                product_id,
                quantity,
            } => {
                if self.state.quantity_on_order <= RESTOCK_CEILING {
                    vec![InventoryEvent::restock_ordered(
                        product_id.clone(),
                        *quantity,
                    )]
                } else {
                    vec![InventoryEvent::restock_already_ordered()]
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use event_store::EventRecord;

    fn history(events: Vec<InventoryEvent>) -> Vec<EventRecord<InventoryEvent>> {
        events.into_iter().map(EventRecord::new).collect()
    }

    #[test]
    fn empty_history_folds_to_zero_on_order() {
        let state = RestockerState::replay(&[]);
        assert_eq!(state.quantity_on_order, 0);
    }

    #[test]
    fn fold_sums_restock_ordered_quantities_only() {
        let state = RestockerState::replay(&history(vec![
            InventoryEvent::add_product("broccoli"),
            InventoryEvent::restock_ordered("broccoli", 20),
            InventoryEvent::capacity_defined("broccoli", 380),
            InventoryEvent::restock_ordered("lasagne", 50),
            InventoryEvent::threshold_reached(35),
            InventoryEvent::restock_already_ordered(),
        ]));

        assert_eq!(state.quantity_on_order, 70);
    }

    #[test]
    fn restock_accepted_at_the_ceiling() {
        let state = RestockerState::replay(&history(vec![InventoryEvent::restock_ordered(
            "p", 100,
        )]));
        let restocker = Restocker::new(state);

        let events = restocker.handle(&InventoryCommand::restock_order("p", 50));

        assert_eq!(events, vec![InventoryEvent::restock_ordered("p", 50)]);
    }

    #[test]
    fn restock_rejected_above_the_ceiling() {
        let state = RestockerState::replay(&history(vec![InventoryEvent::restock_ordered(
            "p", 101,
        )]));
        let restocker = Restocker::new(state);

        let events = restocker.handle(&InventoryCommand::restock_order("p", 1));

        assert_eq!(events, vec![InventoryEvent::restock_already_ordered()]);
    }

    #[test]
    fn decision_is_deterministic() {
        let state = RestockerState::replay(&history(vec![InventoryEvent::restock_ordered(
            "p", 40,
        )]));
        let restocker = Restocker::new(state);
        let command = InventoryCommand::restock_order("p", 10);

        assert_eq!(restocker.handle(&command), restocker.handle(&command));
    }

    #[test]
    fn negative_quantities_are_not_clamped() {
        let restocker = Restocker::new(RestockerState::default());

        let events = restocker.handle(&InventoryCommand::restock_order("p", -50));

        assert_eq!(events, vec![InventoryEvent::restock_ordered("p", -50)]);
    }
}
