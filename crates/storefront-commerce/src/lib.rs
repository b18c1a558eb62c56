//! Catalog presentation engine for the Pride & Purpose storefront.
//!
//! This crate holds everything a product grid needs to render:
//!
//! - **Catalog**: validated, immutable product records
//! - **Pricing**: discount percentage and price display derived per product
//! - **Cards**: per-product view models with their own liked state
//! - **Cart**: the add-to-cart boundary, guarded against out-of-stock items
//!
//! # Example
//!
//! ```
//! use storefront_commerce::prelude::*;
//!
//! let catalog = Catalog::sample();
//! let mut grid = ProductGrid::from_catalog(&catalog);
//! assert_eq!(grid.len(), 4);
//!
//! let card = grid.card_mut(&ProductId::new("pride-flag-tee")).unwrap();
//! assert_eq!(card.discount_percentage(), 12);
//! assert!(card.toggle_liked());
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod card;
pub mod cart;
pub mod catalog;
pub mod pricing;

pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    pub use crate::card::{LikeState, ProductCard, ProductGrid};
    pub use crate::cart::{add_to_cart, CartNotifier};
    pub use crate::catalog::{Catalog, Product};
    pub use crate::pricing::{discount_percentage, is_on_sale, savings, PriceDisplay};
}
