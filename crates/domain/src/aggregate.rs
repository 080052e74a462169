//! Core aggregate trait.

/// Trait for aggregates in an event-sourced system.
///
/// An aggregate folds event history into state and decides the outcome of
/// one inbound command against that state. The decision is a pure function
/// of (state, command): no side effects, and identical inputs always
/// produce identical emitted events. The caller is responsible for
/// appending the emitted events before evaluating the next command,
/// otherwise the same command could be accepted twice.
pub trait Aggregate {
    /// The command type this aggregate decides on.
    type Command;

    /// The event type this aggregate emits.
    type Event;

    /// Decides which events the command produces given the current state.
    ///
    /// Returns zero or more events; a command kind the aggregate does not
    /// recognize produces no events rather than an error.
    fn handle(&self, command: &Self::Command) -> Vec<Self::Event>;
}
