//! Add-to-cart boundary.
//!
//! The storefront keeps no cart state. Adding a product means telling an
//! external cart system about the attempt through a [`CartNotifier`].

use std::rc::Rc;
use std::sync::Arc;

use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::ProductId;

/// External collaborator that receives add-to-cart attempts.
pub trait CartNotifier {
    /// Record that `product_id` was added.
    fn notify_add(&self, product_id: &ProductId);
}

impl<T: CartNotifier + ?Sized> CartNotifier for &T {
    fn notify_add(&self, product_id: &ProductId) {
        (**self).notify_add(product_id)
    }
}

impl<T: CartNotifier + ?Sized> CartNotifier for Box<T> {
    fn notify_add(&self, product_id: &ProductId) {
        (**self).notify_add(product_id)
    }
}

impl<T: CartNotifier + ?Sized> CartNotifier for Rc<T> {
    fn notify_add(&self, product_id: &ProductId) {
        (**self).notify_add(product_id)
    }
}

impl<T: CartNotifier + ?Sized> CartNotifier for Arc<T> {
    fn notify_add(&self, product_id: &ProductId) {
        (**self).notify_add(product_id)
    }
}

/// Notify the cart system of an addition.
///
/// Out-of-stock products fail with [`CommerceError::OutOfStock`] and the
/// notifier is not called.
pub fn add_to_cart(
    product: &Product,
    notifier: &dyn CartNotifier,
) -> Result<(), CommerceError> {
    if !product.in_stock {
        return Err(CommerceError::OutOfStock(product.id.to_string()));
    }
    notifier.notify_add(&product.id);
    Ok(())
}
