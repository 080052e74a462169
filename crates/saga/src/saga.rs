//! Core saga trait.

/// Trait for sagas in an event-sourced system.
///
/// A saga folds event history into state and decides which follow-on
/// command(s) a triggering event produces. Like an aggregate decision the
/// result is a pure function of (state, event); an event kind the saga does
/// not react to produces no commands rather than an error.
pub trait Saga {
    /// The event type that triggers this saga.
    type Event;

    /// The command type this saga emits.
    type Command;

    /// Decides which commands the event produces given the current state.
    fn handle(&self, event: &Self::Event) -> Vec<Self::Command>;
}
