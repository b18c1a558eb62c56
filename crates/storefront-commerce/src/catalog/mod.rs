//! Product catalog module.
//!
//! Contains the product record, the validated catalog and the sample data
//! the storefront ships with.

mod collection;
mod product;
mod sample;

pub use collection::Catalog;
pub use product::{Product, ProductRecord};
