//! Read model views.

mod products;

pub use products::Products;
