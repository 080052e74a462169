//! Saga pattern for the restocking domain.
//!
//! A saga is the mirror image of an aggregate: it folds event history into
//! state and decides which follow-on command(s) a triggering event
//! produces. The restock saga reacts to `ThresholdReached` by ordering the
//! difference between the declared capacity and the remaining quantity.

pub mod handler;
pub mod restock;
pub mod saga;

pub use handler::RestockSagaEventHandler;
pub use restock::{RestockSaga, RestockSagaState};
pub use saga::Saga;
