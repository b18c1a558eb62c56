//! Product card view models.
//!
//! A [`ProductGrid`] is built from a catalog and holds one [`ProductCard`]
//! per product. Each card owns its liked flag; toggling one card never
//! touches another, and every flag starts unliked on each render.

use serde::Serialize;

use crate::cart::{add_to_cart, CartNotifier};
use crate::catalog::{Catalog, Product};
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::pricing::PriceDisplay;

/// Favorite toggle state for a single card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LikeState {
    #[default]
    NotLiked,
    Liked,
}

impl LikeState {
    /// The opposite state.
    pub fn toggled(self) -> Self {
        match self {
            LikeState::NotLiked => LikeState::Liked,
            LikeState::Liked => LikeState::NotLiked,
        }
    }

    pub fn is_liked(self) -> bool {
        self == LikeState::Liked
    }
}

/// Derived view of one product.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductCard<'a> {
    product: &'a Product,
    price: PriceDisplay,
    liked: LikeState,
}

impl<'a> ProductCard<'a> {
    pub fn new(product: &'a Product) -> Self {
        Self {
            product,
            price: PriceDisplay::for_product(product),
            liked: LikeState::default(),
        }
    }

    pub fn product(&self) -> &'a Product {
        self.product
    }

    pub fn id(&self) -> &'a ProductId {
        &self.product.id
    }

    pub fn price(&self) -> &PriceDisplay {
        &self.price
    }

    pub fn discount_percentage(&self) -> u32 {
        self.price.discount_percentage
    }

    pub fn like_state(&self) -> LikeState {
        self.liked
    }

    pub fn is_liked(&self) -> bool {
        self.liked.is_liked()
    }

    /// Flip the liked flag and return the new value.
    pub fn toggle_liked(&mut self) -> bool {
        self.liked = self.liked.toggled();
        self.liked.is_liked()
    }

    /// Whether the add-to-cart control is enabled.
    pub fn add_enabled(&self) -> bool {
        self.product.in_stock
    }

    /// Rating as shown on the card, e.g. "4.8".
    pub fn rating_label(&self) -> String {
        format!("{:.1}", self.product.rating)
    }

    /// Review count as shown on the card, e.g. "127 reviews".
    pub fn reviews_label(&self) -> String {
        match self.product.reviews {
            1 => "1 review".to_string(),
            n => format!("{} reviews", n),
        }
    }

    /// Add this card's product through the notifier.
    ///
    /// Fails exactly when [`add_enabled`](Self::add_enabled) is false.
    pub fn add_to_cart(&self, notifier: &dyn CartNotifier) -> Result<(), CommerceError> {
        add_to_cart(self.product, notifier)
    }
}

/// The product grid: one card per product, in catalog order.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductGrid<'a> {
    cards: Vec<ProductCard<'a>>,
}

impl<'a> ProductGrid<'a> {
    /// One card for every product in the catalog.
    pub fn from_catalog(catalog: &'a Catalog) -> Self {
        Self::from_products(catalog.iter())
    }

    /// Cards for the featured collection only.
    pub fn featured(catalog: &'a Catalog) -> Self {
        Self::from_products(catalog.featured())
    }

    pub fn from_products(products: impl IntoIterator<Item = &'a Product>) -> Self {
        Self {
            cards: products.into_iter().map(ProductCard::new).collect(),
        }
    }

    pub fn cards(&self) -> &[ProductCard<'a>] {
        &self.cards
    }

    pub fn card(&self, id: &ProductId) -> Option<&ProductCard<'a>> {
        self.cards.iter().find(|c| c.id() == id)
    }

    pub fn card_mut(&mut self, id: &ProductId) -> Option<&mut ProductCard<'a>> {
        self.cards.iter_mut().find(|c| c.id() == id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ProductCard<'a>> {
        self.cards.iter()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::{Currency, Money};

    #[test]
    fn test_grid_from_sample() {
        let catalog = Catalog::sample();
        let grid = ProductGrid::from_catalog(&catalog);

        assert_eq!(grid.len(), 4);
        let discounts: Vec<u32> = grid.iter().map(|c| c.discount_percentage()).collect();
        assert_eq!(discounts, vec![12, 0, 19, 15]);
        assert!(grid.iter().all(|c| !c.is_liked()));
        assert!(grid.iter().all(|c| c.add_enabled()));
    }

    #[test]
    fn test_toggle_twice_restores() {
        let catalog = Catalog::sample();
        let mut grid = ProductGrid::from_catalog(&catalog);
        let id = ProductId::new("love-wins-mug");

        let card = grid.card_mut(&id).unwrap();
        assert!(card.toggle_liked());
        assert!(!card.toggle_liked());
        assert_eq!(card.like_state(), LikeState::NotLiked);
    }

    #[test]
    fn test_toggle_is_isolated() {
        let catalog = Catalog::sample();
        let mut grid = ProductGrid::from_catalog(&catalog);

        grid.card_mut(&ProductId::new("unity-hoodie"))
            .unwrap()
            .toggle_liked();

        let liked: Vec<&str> = grid
            .iter()
            .filter(|c| c.is_liked())
            .map(|c| c.id().as_str())
            .collect();
        assert_eq!(liked, vec!["unity-hoodie"]);
    }

    #[test]
    fn test_fresh_grid_resets_likes() {
        let catalog = Catalog::sample();
        let mut grid = ProductGrid::from_catalog(&catalog);
        grid.card_mut(&ProductId::new("pride-flag-tee"))
            .unwrap()
            .toggle_liked();

        let reloaded = ProductGrid::from_catalog(&catalog);
        assert!(reloaded.iter().all(|c| !c.is_liked()));
    }

    #[test]
    fn test_labels() {
        let catalog = Catalog::sample();
        let grid = ProductGrid::from_catalog(&catalog);
        let tee = grid.card(&ProductId::new("pride-flag-tee")).unwrap();
        assert_eq!(tee.rating_label(), "4.8");
        assert_eq!(tee.reviews_label(), "127 reviews");

        let single = Product::new("pin", "Pin", Money::new(500, Currency::USD)).with_rating(5.0, 1);
        assert_eq!(ProductCard::new(&single).reviews_label(), "1 review");
    }

    #[test]
    fn test_out_of_stock_card_disabled() {
        let sticker = Product::new("sticker", "Sticker", Money::new(300, Currency::USD)).in_stock(false);
        let card = ProductCard::new(&sticker);
        assert!(!card.add_enabled());
    }

    #[test]
    fn test_like_state_serializes() {
        assert_eq!(serde_json::to_string(&LikeState::Liked).unwrap(), "\"liked\"");
        assert_eq!(serde_json::to_string(&LikeState::NotLiked).unwrap(), "\"not_liked\"");
    }
}
