//! Command handler orchestrating the restocker aggregate.

use event_store::EventRecord;

use crate::aggregate::Aggregate;

use super::{InventoryCommand, InventoryEvent, Restocker, RestockerState};

/// Orchestrates one command through the restocker aggregate.
///
/// The handler is constructed with the event history to fold over and a
/// publish callback. Each `handle` call folds the history into fresh
/// aggregate state, runs the aggregate's decision, invokes the publish
/// callback exactly once with all emitted events (order preserved, possibly
/// zero of them), and returns the same events.
///
/// The handler never appends to the event store itself; persisting the
/// published events is the caller's responsibility, performed after this
/// call returns, so the caller controls exactly when and whether
/// persistence happens.
pub struct RestockCommandHandler<F>
where
    F: FnMut(&[InventoryEvent]),
{
    history: Vec<EventRecord<InventoryEvent>>,
    publish: F,
}

impl<F> RestockCommandHandler<F>
where
    F: FnMut(&[InventoryEvent]),
{
    /// Creates a handler over the given history and publish callback.
    pub fn new(history: Vec<EventRecord<InventoryEvent>>, publish: F) -> Self {
        Self { history, publish }
    }

    /// Folds state, runs the aggregate, publishes, and returns the emitted
    /// events.
    pub fn handle(&mut self, command: &InventoryCommand) -> Vec<InventoryEvent> {
        let state = RestockerState::replay(&self.history);
        let restocker = Restocker::new(state);
        let events = restocker.handle(command);
        tracing::debug!(emitted = events.len(), "command handled");
        (self.publish)(&events);
        events
    }
}
