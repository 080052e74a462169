//! Integration tests driving the products view through the processor.

use domain::{InventoryEvent, InventoryQuery, ProductId};
use event_store::{EventRecord, FileEventStore};
use projections::{Products, Projection, ProjectionProcessor, ReadModel};

fn seeded_store() -> FileEventStore<InventoryEvent> {
    let records = vec![
        InventoryEvent::add_product("broccoli"),
        InventoryEvent::capacity_defined("broccoli", 380),
        InventoryEvent::threshold_reached(35),
        InventoryEvent::restock_ordered("broccoli", 345),
        InventoryEvent::add_product("lasagne"),
    ]
    .into_iter()
    .map(EventRecord::new)
    .collect();
    FileEventStore::with_events(records, "/nonexistent/unused.json")
}

#[test]
fn catch_up_builds_the_catalog_from_the_log() {
    let store = seeded_store();
    let view = Products::new();

    let mut processor = ProjectionProcessor::new();
    processor.register(Box::new(view.clone()));
    processor.run_catch_up(store.events()).unwrap();

    let catalog = view.handle(&InventoryQuery::Catalog);
    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.get(&ProductId::from("broccoli")), Some(&345));
    assert_eq!(catalog.get(&ProductId::from("lasagne")), Some(&0));
}

#[test]
fn repeated_catch_up_is_idempotent() {
    let store = seeded_store();
    let view = Products::new();

    let mut processor = ProjectionProcessor::new();
    processor.register(Box::new(view.clone()));

    processor.run_catch_up(store.events()).unwrap();
    let first = view.handle(&InventoryQuery::Catalog);

    processor.run_catch_up(store.events()).unwrap();
    let second = view.handle(&InventoryQuery::Catalog);

    assert_eq!(first, second);
    assert_eq!(view.position().events_processed, store.len() as u64);
}

#[test]
fn rebuild_matches_a_fresh_catch_up() {
    let store = seeded_store();
    let view = Products::new();

    let mut processor = ProjectionProcessor::new();
    processor.register(Box::new(view.clone()));
    processor.run_catch_up(store.events()).unwrap();

    processor.rebuild_all(store.events()).unwrap();

    let fresh = Products::new();
    for record in store.events() {
        fresh.project(record).unwrap();
    }
    assert_eq!(
        view.handle(&InventoryQuery::Catalog),
        fresh.handle(&InventoryQuery::Catalog)
    );
}

#[test]
fn new_events_flow_through_process_event() {
    let store = seeded_store();
    let view = Products::new();

    let mut processor = ProjectionProcessor::new();
    processor.register(Box::new(view.clone()));
    processor.run_catch_up(store.events()).unwrap();

    let record = EventRecord::new(InventoryEvent::restock_ordered("lasagne", 12));
    processor.process_event(&record).unwrap();

    assert_eq!(view.quantity_on_order(&ProductId::from("lasagne")), Some(12));
    assert_eq!(ReadModel::count(&view), 2);
}
