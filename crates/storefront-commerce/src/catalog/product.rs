//! Product record and its wire form.

use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// Highest rating a product can carry.
pub const MAX_RATING: f32 = 5.0;

/// A product in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier (a slug).
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Current selling price.
    pub price: Money,
    /// Price before markdown, shown struck through when present.
    pub original_price: Option<Money>,
    /// Emoji or image URL placeholder.
    pub image: String,
    /// Short description for the card.
    pub description: String,
    /// Average rating, 0.0 to 5.0.
    pub rating: f32,
    /// Number of reviews behind the rating.
    pub reviews: u32,
    /// Free-form category tag (e.g. "apparel").
    pub category: String,
    /// Whether the product appears in the featured collection.
    pub featured: bool,
    /// Whether the product can be added to a cart.
    pub in_stock: bool,
}

impl Product {
    /// Create an in-stock product with the given price and no markdown.
    pub fn new(id: impl Into<ProductId>, name: impl Into<String>, price: Money) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            original_price: None,
            image: String::new(),
            description: String::new(),
            rating: 0.0,
            reviews: 0,
            category: String::new(),
            featured: false,
            in_stock: true,
        }
    }

    pub fn with_original_price(mut self, original_price: Money) -> Self {
        self.original_price = Some(original_price);
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_rating(mut self, rating: f32, reviews: u32) -> Self {
        self.rating = rating;
        self.reviews = reviews;
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn featured(mut self, featured: bool) -> Self {
        self.featured = featured;
        self
    }

    pub fn in_stock(mut self, in_stock: bool) -> Self {
        self.in_stock = in_stock;
        self
    }

    /// Check the record against the catalog invariants.
    pub fn validate(&self) -> Result<(), CommerceError> {
        let id = self.id.as_str();

        if self.id.is_blank() {
            return Err(CommerceError::invalid(id, "id must not be empty"));
        }
        if self.name.trim().is_empty() {
            return Err(CommerceError::invalid(id, "name must not be empty"));
        }
        if !self.price.is_positive() {
            return Err(CommerceError::invalid(id, "price must be greater than zero"));
        }
        if let Some(original) = self.original_price {
            if original.currency != self.price.currency {
                return Err(CommerceError::CurrencyMismatch {
                    expected: self.price.currency.code().to_string(),
                    got: original.currency.code().to_string(),
                });
            }
            if original.amount_cents <= self.price.amount_cents {
                return Err(CommerceError::invalid(
                    id,
                    format!(
                        "original price {} must exceed price {}",
                        original, self.price
                    ),
                ));
            }
        }
        if !(0.0..=MAX_RATING).contains(&self.rating) {
            return Err(CommerceError::invalid(
                id,
                format!("rating {} outside 0.0-{}", self.rating, MAX_RATING),
            ));
        }

        Ok(())
    }
}

fn default_true() -> bool {
    true
}

/// Product as it appears in catalog JSON: camelCase keys and decimal prices.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
    pub id: String,
    pub name: String,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<f64>,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub rating: f32,
    #[serde(default)]
    pub reviews: u32,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub featured: bool,
    #[serde(default = "default_true")]
    pub in_stock: bool,
    /// Currency code; the catalog default applies when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
}

impl ProductRecord {
    /// Convert into a [`Product`], resolving the currency.
    ///
    /// Invariants are not checked here; the catalog validates on construction.
    pub fn into_product(self, default_currency: Currency) -> Result<Product, CommerceError> {
        let currency = match self.currency.as_deref() {
            Some(code) => Currency::from_code(code).ok_or_else(|| {
                CommerceError::invalid(&self.id, format!("unknown currency {}", code))
            })?,
            None => default_currency,
        };

        Ok(Product {
            id: ProductId::new(self.id),
            name: self.name,
            price: Money::from_decimal(self.price, currency),
            original_price: self
                .original_price
                .map(|amount| Money::from_decimal(amount, currency)),
            image: self.image,
            description: self.description,
            rating: self.rating,
            reviews: self.reviews,
            category: self.category,
            featured: self.featured,
            in_stock: self.in_stock,
        })
    }
}

impl From<&Product> for ProductRecord {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.to_string(),
            name: product.name.clone(),
            price: product.price.to_decimal(),
            original_price: product.original_price.map(|m| m.to_decimal()),
            image: product.image.clone(),
            description: product.description.clone(),
            rating: product.rating,
            reviews: product.reviews,
            category: product.category.clone(),
            featured: product.featured,
            in_stock: product.in_stock,
            currency: Some(product.price.currency.code().to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn usd(cents: i64) -> Money {
        Money::new(cents, Currency::USD)
    }

    #[test]
    fn test_product_builder() {
        let product = Product::new("love-wins-mug", "Love Wins Coffee Mug", usd(1699))
            .with_image("☕")
            .with_rating(4.9, 89)
            .with_category("home")
            .featured(true);

        assert_eq!(product.id.as_str(), "love-wins-mug");
        assert_eq!(product.reviews, 89);
        assert!(product.featured);
        assert!(product.in_stock);
        assert!(product.original_price.is_none());
        assert!(product.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_markup_as_original_price() {
        let product = Product::new("tee", "Tee", usd(2899)).with_original_price(usd(2899));
        assert!(matches!(
            product.validate(),
            Err(CommerceError::InvalidProduct { .. })
        ));

        let product = Product::new("tee", "Tee", usd(2899)).with_original_price(usd(1999));
        assert!(product.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_non_positive_price() {
        let product = Product::new("free", "Free Sticker", usd(0));
        assert!(product.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_blank_name_and_id() {
        assert!(Product::new("x", "  ", usd(100)).validate().is_err());
        assert!(Product::new("", "Pin", usd(100)).validate().is_err());
    }

    #[test]
    fn test_validate_rejects_rating_out_of_range() {
        let product = Product::new("pin", "Pin", usd(100)).with_rating(5.5, 3);
        assert!(product.validate().is_err());

        let product = Product::new("pin", "Pin", usd(100)).with_rating(-0.1, 3);
        assert!(product.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_currency_mismatch() {
        let product = Product::new("pin", "Pin", usd(100))
            .with_original_price(Money::new(200, Currency::EUR));
        assert!(matches!(
            product.validate(),
            Err(CommerceError::CurrencyMismatch { .. })
        ));
    }

    #[test]
    fn test_record_from_json() {
        let json = r#"{
            "id": "rainbow-pin-set",
            "name": "Rainbow Pin Collection",
            "price": 12.99,
            "originalPrice": 15.99,
            "image": "📌",
            "description": "Set of 6 enamel pins featuring diverse pride flags.",
            "rating": 4.7,
            "reviews": 203,
            "category": "accessories",
            "featured": true,
            "inStock": true
        }"#;

        let record: ProductRecord = serde_json::from_str(json).unwrap();
        let product = record.into_product(Currency::USD).unwrap();

        assert_eq!(product.price, usd(1299));
        assert_eq!(product.original_price, Some(usd(1599)));
        assert_eq!(product.category, "accessories");
        assert!(product.validate().is_ok());
    }

    #[test]
    fn test_record_defaults_to_in_stock() {
        let json = r#"{ "id": "mug", "name": "Mug", "price": 16.99 }"#;
        let record: ProductRecord = serde_json::from_str(json).unwrap();
        assert!(record.in_stock);
        assert!(!record.featured);
    }

    #[test]
    fn test_record_unknown_currency() {
        let json = r#"{ "id": "mug", "name": "Mug", "price": 16.99, "currency": "XYZ" }"#;
        let record: ProductRecord = serde_json::from_str(json).unwrap();
        assert!(record.into_product(Currency::USD).is_err());
    }
}
