use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use domain::{InventoryEvent, InventoryQuery};
use event_store::EventRecord;
use projections::{Products, Projection};

fn catalog_catch_up(c: &mut Criterion) {
    let records: Vec<EventRecord<InventoryEvent>> = (0..10_000)
        .map(|i| {
            let event = match i % 4 {
                0 => InventoryEvent::add_product(format!("product-{}", i % 50)),
                1 => InventoryEvent::restock_ordered(format!("product-{}", i % 50), 10),
                2 => InventoryEvent::capacity_defined(format!("product-{}", i % 50), 380),
                _ => InventoryEvent::threshold_reached(35),
            };
            EventRecord::new(event)
        })
        .collect();

    c.bench_function("products_catch_up_10k", |b| {
        b.iter(|| {
            let view = Products::new();
            for record in &records {
                view.project(black_box(record)).unwrap();
            }
            black_box(view.handle(&InventoryQuery::Catalog))
        })
    });
}

criterion_group!(benches, catalog_catch_up);
criterion_main!(benches);
