//! Event handler orchestrating the restock saga.

use domain::{InventoryCommand, InventoryEvent};
use event_store::EventRecord;

use crate::restock::{RestockSaga, RestockSagaState};
use crate::saga::Saga;

/// Orchestrates one triggering event through the restock saga.
///
/// Symmetric to the command handler: constructed with the event history and
/// a send callback accepting commands. Each `handle` call folds the history
/// into fresh saga state, runs the saga's decision, invokes the send
/// callback exactly once with all emitted commands (order preserved,
/// possibly zero of them), and returns the same commands.
///
/// The handler does not itself re-invoke the command handler; callers wire
/// that composition explicitly and thereby decide whether chained commands
/// run synchronously on the same call stack or are deferred.
pub struct RestockSagaEventHandler<F>
where
    F: FnMut(&[InventoryCommand]),
{
    history: Vec<EventRecord<InventoryEvent>>,
    send: F,
}

impl<F> RestockSagaEventHandler<F>
where
    F: FnMut(&[InventoryCommand]),
{
    /// Creates a handler over the given history and send callback.
    pub fn new(history: Vec<EventRecord<InventoryEvent>>, send: F) -> Self {
        Self { history, send }
    }

    /// Folds state, runs the saga, sends, and returns the emitted commands.
    pub fn handle(&mut self, event: &InventoryEvent) -> Vec<InventoryCommand> {
        let state = RestockSagaState::replay(&self.history);
        let saga = RestockSaga::new(state);
        let commands = saga.handle(event);
        tracing::debug!(emitted = commands.len(), "saga event handled");
        (self.send)(&commands);
        commands
    }
}
