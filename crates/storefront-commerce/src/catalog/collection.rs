//! The validated, immutable product catalog.

use std::collections::HashSet;

use crate::catalog::{sample, Product, ProductRecord};
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::Currency;

/// An immutable list of validated products.
///
/// Built once and handed to whatever renders it; nothing mutates a catalog
/// after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate ids and invalid records.
    pub fn new(products: Vec<Product>) -> Result<Self, CommerceError> {
        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            product.validate()?;
            if !seen.insert(product.id.as_str()) {
                return Err(CommerceError::DuplicateProduct(product.id.to_string()));
            }
        }
        Ok(Self { products })
    }

    /// The four-product featured collection.
    ///
    /// The sample records are known to satisfy every catalog invariant.
    pub fn sample() -> Self {
        Self {
            products: sample::products(),
        }
    }

    /// Load a catalog from a JSON array of product records.
    pub fn from_json(json: &str, default_currency: Currency) -> Result<Self, CommerceError> {
        let records: Vec<ProductRecord> = serde_json::from_str(json)?;
        let products = records
            .into_iter()
            .map(|record| record.into_product(default_currency))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(products)
    }

    /// Serialize back to the JSON record form.
    pub fn to_json(&self) -> Result<String, CommerceError> {
        let records: Vec<ProductRecord> = self.products.iter().map(ProductRecord::from).collect();
        Ok(serde_json::to_string_pretty(&records)?)
    }

    /// Look up a product by id.
    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// Look up a product by id, failing with `ProductNotFound`.
    pub fn require(&self, id: &ProductId) -> Result<&Product, CommerceError> {
        self.get(id)
            .ok_or_else(|| CommerceError::ProductNotFound(id.to_string()))
    }

    /// Products flagged as featured, in catalog order.
    pub fn featured(&self) -> impl Iterator<Item = &Product> {
        self.products.iter().filter(|p| p.featured)
    }

    /// Products carrying the given category tag (case-insensitive).
    pub fn in_category<'a>(&'a self, category: &'a str) -> impl Iterator<Item = &'a Product> {
        self.products
            .iter()
            .filter(move |p| p.category.eq_ignore_ascii_case(category))
    }

    /// Distinct category tags in first-seen order.
    pub fn categories(&self) -> Vec<&str> {
        let mut categories: Vec<&str> = Vec::new();
        for product in &self.products {
            let tag = product.category.as_str();
            if !tag.is_empty() && !categories.contains(&tag) {
                categories.push(tag);
            }
        }
        categories
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Product> {
        self.products.iter()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Product;
    type IntoIter = std::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    #[test]
    fn test_sample_catalog_is_valid() {
        let catalog = Catalog::new(sample::products()).unwrap();
        assert_eq!(catalog, Catalog::sample());
        assert_eq!(catalog.len(), 4);
    }

    #[test]
    fn test_sample_ids_in_order() {
        let catalog = Catalog::sample();
        let ids: Vec<&str> = catalog.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(
            ids,
            vec!["pride-flag-tee", "love-wins-mug", "rainbow-pin-set", "unity-hoodie"]
        );
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let mug = Product::new("mug", "Mug", Money::new(1699, Currency::USD));
        let result = Catalog::new(vec![mug.clone(), mug]);
        assert_eq!(result, Err(CommerceError::DuplicateProduct("mug".to_string())));
    }

    #[test]
    fn test_invalid_product_rejected() {
        let bad = Product::new("tee", "Tee", Money::new(2899, Currency::USD))
            .with_original_price(Money::new(2000, Currency::USD));
        assert!(Catalog::new(vec![bad]).is_err());
    }

    #[test]
    fn test_lookup() {
        let catalog = Catalog::sample();
        let hoodie = catalog.get(&ProductId::new("unity-hoodie")).unwrap();
        assert_eq!(hoodie.name, "Unity Embroidered Hoodie");

        let missing = catalog.require(&ProductId::new("rainbow-socks"));
        assert!(matches!(missing, Err(CommerceError::ProductNotFound(_))));
    }

    #[test]
    fn test_categories() {
        let catalog = Catalog::sample();
        assert_eq!(catalog.categories(), vec!["apparel", "home", "accessories"]);
        assert_eq!(catalog.in_category("Apparel").count(), 2);
        assert_eq!(catalog.featured().count(), 4);
    }

    #[test]
    fn test_json_round_trip_keeps_prices() {
        let catalog = Catalog::sample();
        let json = catalog.to_json().unwrap();
        let reloaded = Catalog::from_json(&json, Currency::USD).unwrap();
        assert_eq!(reloaded, catalog);
    }

    #[test]
    fn test_from_json_rejects_bad_data() {
        let json = r#"[{ "id": "tee", "name": "Tee", "price": 28.99, "originalPrice": 20.0 }]"#;
        assert!(Catalog::from_json(json, Currency::USD).is_err());

        assert!(matches!(
            Catalog::from_json("not json", Currency::USD),
            Err(CommerceError::SerializationError(_))
        ));
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::new(Vec::new()).unwrap();
        assert!(catalog.is_empty());
        assert!(catalog.categories().is_empty());
    }
}
