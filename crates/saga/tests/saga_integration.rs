//! End-to-end tests for the event, saga, command, aggregate chain.

use domain::{InventoryCommand, InventoryEvent, RestockCommandHandler};
use event_store::FileEventStore;
use saga::RestockSagaEventHandler;

/// Runs one threshold event through the full synchronous chain: the event
/// is appended, the saga turns it into a command, the command handler runs
/// the aggregate, and the resulting events are appended.
fn run_threshold(store: &mut FileEventStore<InventoryEvent>, quantity: i64) {
    let trigger = InventoryEvent::threshold_reached(quantity);
    store.append(trigger.clone());

    let mut commands = Vec::new();
    let mut saga_handler =
        RestockSagaEventHandler::new(store.get_all(), |sent: &[InventoryCommand]| {
            commands.extend_from_slice(sent);
        });
    saga_handler.handle(&trigger);
    drop(saga_handler);

    for command in commands {
        let mut published = Vec::new();
        let mut command_handler =
            RestockCommandHandler::new(store.get_all(), |events: &[InventoryEvent]| {
                published.extend_from_slice(events);
            });
        command_handler.handle(&command);
        drop(command_handler);

        for event in published {
            store.append(event);
        }
    }
}

#[test]
fn threshold_event_chains_into_a_recorded_restock() {
    let mut store = FileEventStore::new("/nonexistent/unused.json");
    store.append(InventoryEvent::capacity_defined("broccoli", 380));

    run_threshold(&mut store, 35);

    let events: Vec<_> = store.events().iter().map(|r| r.event.clone()).collect();
    assert_eq!(
        events,
        vec![
            InventoryEvent::capacity_defined("broccoli", 380),
            InventoryEvent::threshold_reached(35),
            InventoryEvent::restock_ordered("broccoli", 345),
        ]
    );
}

#[test]
fn chained_restock_is_rejected_once_an_order_is_outstanding() {
    let mut store = FileEventStore::new("/nonexistent/unused.json");
    store.append(InventoryEvent::capacity_defined("broccoli", 380));

    // First threshold: 345 units ordered, well above the restock ceiling.
    run_threshold(&mut store, 35);
    // Second threshold: the aggregate now rejects the saga's command.
    run_threshold(&mut store, 20);

    let last = store.events().last().unwrap();
    assert_eq!(last.event, InventoryEvent::restock_already_ordered());
}

#[test]
fn undefined_capacity_chains_a_negative_order_through_unclamped() {
    let mut store = FileEventStore::new("/nonexistent/unused.json");

    run_threshold(&mut store, 50);

    let last = store.events().last().unwrap();
    assert_eq!(last.event, InventoryEvent::restock_ordered("", -50));
}
