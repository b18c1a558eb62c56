//! Price presentation: markdowns and the discount badge.
//!
//! The discount percentage is `round((1 - price / original) * 100)` with
//! ties rounded up. It is computed on integer cents, so `28.99` against
//! `32.99` always yields 12 regardless of float representation.

use serde::Serialize;

use crate::catalog::Product;
use crate::money::Money;

/// Amount saved against the original price, if the product is marked down.
pub fn savings(product: &Product) -> Option<Money> {
    let original = product.original_price?;
    let saved = original.try_subtract(&product.price)?;
    saved.is_positive().then_some(saved)
}

/// Whether the product sells below its original price.
pub fn is_on_sale(product: &Product) -> bool {
    savings(product).is_some()
}

/// Whole-number discount percentage, 0 when there is no markdown.
///
/// A record whose original price does not exceed its price yields 0 rather
/// than a negative badge; [`Catalog::new`](crate::catalog::Catalog::new)
/// rejects such records up front.
pub fn discount_percentage(product: &Product) -> u32 {
    match (savings(product), product.original_price) {
        (Some(saved), Some(original)) => rounded_percent(saved.amount_cents, original.amount_cents),
        _ => 0,
    }
}

/// `part / whole * 100` rounded half up.
fn rounded_percent(part: i64, whole: i64) -> u32 {
    if whole <= 0 || part <= 0 {
        return 0;
    }
    let part = part as i128;
    let whole = whole as i128;
    let rounded = (part * 200 + whole) / (whole * 2);
    rounded.clamp(0, u32::MAX as i128) as u32
}

/// Display strings for a product's price block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PriceDisplay {
    /// Current price, e.g. "$28.99".
    pub current: String,
    /// Struck-through original price when on sale.
    pub original: Option<String>,
    /// Whole-number discount, 0 when not on sale.
    pub discount_percentage: u32,
}

impl PriceDisplay {
    pub fn for_product(product: &Product) -> Self {
        let on_sale = is_on_sale(product);
        Self {
            current: product.price.display(),
            original: product
                .original_price
                .filter(|_| on_sale)
                .map(|m| m.display()),
            discount_percentage: discount_percentage(product),
        }
    }

    /// Badge text such as "-12%", absent when there is no discount.
    pub fn badge(&self) -> Option<String> {
        (self.discount_percentage > 0).then(|| format!("-{}%", self.discount_percentage))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    fn priced(price: i64, original: Option<i64>) -> Product {
        let product = Product::new("p", "Product", Money::new(price, Currency::USD));
        match original {
            Some(cents) => product.with_original_price(Money::new(cents, Currency::USD)),
            None => product,
        }
    }

    #[test]
    fn test_no_original_price_is_zero() {
        assert_eq!(discount_percentage(&priced(1699, None)), 0);
        assert!(!is_on_sale(&priced(1699, None)));
    }

    #[test]
    fn test_known_discounts() {
        assert_eq!(discount_percentage(&priced(2899, Some(3299))), 12);
        assert_eq!(discount_percentage(&priced(1299, Some(1599))), 19);
        assert_eq!(discount_percentage(&priced(5499, Some(6499))), 15);
    }

    #[test]
    fn test_half_rounds_up() {
        // exactly 12.5%
        assert_eq!(discount_percentage(&priced(7000, Some(8000))), 13);
        // exactly 50%
        assert_eq!(discount_percentage(&priced(500, Some(1000))), 50);
        // just under a half
        assert_eq!(rounded_percent(249, 1000), 25);
        assert_eq!(rounded_percent(1249, 10000), 12);
    }

    #[test]
    fn test_violated_invariant_never_negative() {
        assert_eq!(discount_percentage(&priced(3299, Some(2899))), 0);
        assert_eq!(discount_percentage(&priced(2899, Some(2899))), 0);
    }

    #[test]
    fn test_savings() {
        let tee = priced(2899, Some(3299));
        assert_eq!(savings(&tee), Some(Money::new(400, Currency::USD)));
        assert_eq!(savings(&priced(2899, None)), None);
    }

    #[test]
    fn test_price_display() {
        let display = PriceDisplay::for_product(&priced(1299, Some(1599)));
        assert_eq!(display.current, "$12.99");
        assert_eq!(display.original.as_deref(), Some("$15.99"));
        assert_eq!(display.badge().as_deref(), Some("-19%"));

        let display = PriceDisplay::for_product(&priced(1699, None));
        assert_eq!(display.original, None);
        assert_eq!(display.badge(), None);
    }
}
