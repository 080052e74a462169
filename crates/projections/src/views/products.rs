//! Products read model: quantity on order per product.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use domain::{InventoryEvent, InventoryQuery, ProductId};
use event_store::EventRecord;

use crate::Result;
use crate::projection::{Projection, ProjectionPosition};
use crate::read_model::ReadModel;

/// Internal state for the products view.
struct CatalogState {
    products: HashMap<ProductId, i64>,
    position: ProjectionPosition,
}

/// Read model view of the product catalog.
///
/// Tracks how many units of each product are currently on order. A product
/// enters the catalog at zero when it is added or when its first restock
/// arrives, whichever the log records first; re-adding a product never
/// resets an accumulated quantity.
#[derive(Clone)]
pub struct Products {
    state: Arc<RwLock<CatalogState>>,
}

impl Products {
    /// Creates a new empty products view.
    pub fn new() -> Self {
        Self {
            state: Arc::new(RwLock::new(CatalogState {
                products: HashMap::new(),
                position: ProjectionPosition::zero(),
            })),
        }
    }

    /// Answers a catalog query with a snapshot of the current state.
    ///
    /// The returned map is a copy; mutating it has no effect on the view.
    pub fn handle(&self, query: &InventoryQuery) -> HashMap<ProductId, i64> {
        match query {
            InventoryQuery::Catalog => self.read().products.clone(),
        }
    }

    /// Gets the quantity on order for a single product, if known.
    pub fn quantity_on_order(&self, product_id: &ProductId) -> Option<i64> {
        self.read().products.get(product_id).copied()
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, CatalogState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, CatalogState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for Products {
    fn default() -> Self {
        Self::new()
    }
}

impl Projection for Products {
    fn name(&self) -> &'static str {
        "Products"
    }

    fn project(&self, record: &EventRecord<InventoryEvent>) -> Result<()> {
        let mut state = self.write();

        match &record.event {
            InventoryEvent::AddProduct { product_id } => {
                state.products.entry(product_id.clone()).or_insert(0);
            }
            InventoryEvent::RestockOrdered {
                product_id,
                quantity,
            } => {
                *state.products.entry(product_id.clone()).or_insert(0) += quantity;
            }
            // Capacity, threshold, and rejection events carry no catalog change
            _ => {}
        }

        state.position = state.position.advance();
        Ok(())
    }

    fn position(&self) -> ProjectionPosition {
        self.read().position
    }

    fn reset(&self) -> Result<()> {
        let mut state = self.write();
        state.products.clear();
        state.position = ProjectionPosition::zero();
        Ok(())
    }
}

impl ReadModel for Products {
    fn name(&self) -> &'static str {
        "Products"
    }

    fn count(&self) -> usize {
        self.read().products.len()
    }
}
