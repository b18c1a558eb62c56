//! Add-to-cart endpoint.

use http::StatusCode;
use storefront_commerce::card::ProductCard;
use storefront_commerce::cart::CartNotifier;
use storefront_commerce::{CommerceError, ProductId};
use storefront_core::{parse_form, PageError};
use storefront_observability::StructuredLogger;
use storefront_site::Site;

/// Where a successful add sends the browser.
pub const CART_REDIRECT: &str = "/#shop";

/// Records each add as a structured log entry. There is no cart backend.
pub struct LoggingCartNotifier<'a> {
    logger: &'a StructuredLogger,
}

impl<'a> LoggingCartNotifier<'a> {
    pub fn new(logger: &'a StructuredLogger) -> Self {
        Self { logger }
    }
}

impl CartNotifier for LoggingCartNotifier<'_> {
    fn notify_add(&self, product_id: &ProductId) {
        self.logger
            .info_builder("Add to cart")
            .field("product_id", product_id.as_str())
            .emit();
    }
}

/// Result of a cart post, ready to turn into a response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartResponse {
    pub status: StatusCode,
    pub location: Option<&'static str>,
    pub message: String,
}

impl CartResponse {
    fn added(id: &ProductId) -> Self {
        Self {
            status: StatusCode::SEE_OTHER,
            location: Some(CART_REDIRECT),
            message: format!("Added {} to cart", id),
        }
    }

    fn error(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            location: None,
            message: message.into(),
        }
    }
}

/// Handle a urlencoded `product_id=...` form body.
pub fn add_to_cart(site: &Site, body: &[u8], notifier: &dyn CartNotifier) -> CartResponse {
    let form = parse_form(&String::from_utf8_lossy(body));

    let Some(raw_id) = form
        .get("product_id")
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
    else {
        let err = PageError::BadRequest("missing product_id".to_string());
        return CartResponse::error(err.status(), err.to_string());
    };

    let id = ProductId::new(raw_id);
    let result = site
        .catalog()
        .require(&id)
        .and_then(|product| ProductCard::new(product).add_to_cart(notifier));

    match result {
        Ok(()) => CartResponse::added(&id),
        Err(err) => CartResponse::error(status_for(&err), err.to_string()),
    }
}

fn status_for(err: &CommerceError) -> StatusCode {
    match err {
        CommerceError::ProductNotFound(_) => StatusCode::NOT_FOUND,
        CommerceError::OutOfStock(_) => StatusCode::CONFLICT,
        _ => StatusCode::UNPROCESSABLE_ENTITY,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use storefront_commerce::catalog::{Catalog, Product};
    use storefront_commerce::{Currency, Money};
    use storefront_core::{RequestId, SiteConfig};

    #[derive(Default)]
    struct Recorder {
        added: RefCell<Vec<ProductId>>,
    }

    impl CartNotifier for Recorder {
        fn notify_add(&self, product_id: &ProductId) {
            self.added.borrow_mut().push(product_id.clone());
        }
    }

    fn site() -> Site {
        let mut products: Vec<Product> = Catalog::sample().iter().cloned().collect();
        products.push(
            Product::new("sold-out-cap", "Sold Out Cap", Money::new(1999, Currency::USD))
                .in_stock(false),
        );
        Site::new(SiteConfig::default(), Catalog::new(products).unwrap()).unwrap()
    }

    #[test]
    fn test_add_redirects_to_shop() {
        let recorder = Recorder::default();
        let response = add_to_cart(&site(), b"product_id=love-wins-mug", &recorder);

        assert_eq!(response.status, StatusCode::SEE_OTHER);
        assert_eq!(response.location, Some("/#shop"));
        assert_eq!(*recorder.added.borrow(), vec![ProductId::new("love-wins-mug")]);
    }

    #[test]
    fn test_unknown_product() {
        let recorder = Recorder::default();
        let response = add_to_cart(&site(), b"product_id=nope", &recorder);

        assert_eq!(response.status, StatusCode::NOT_FOUND);
        assert!(recorder.added.borrow().is_empty());
    }

    #[test]
    fn test_out_of_stock_never_notifies() {
        let recorder = Recorder::default();
        let response = add_to_cart(&site(), b"product_id=sold-out-cap", &recorder);

        assert_eq!(response.status, StatusCode::CONFLICT);
        assert_eq!(response.location, None);
        assert!(recorder.added.borrow().is_empty());
    }

    #[test]
    fn test_missing_product_id() {
        let recorder = Recorder::default();
        for body in [&b""[..], &b"product_id="[..], &b"product_id=+++"[..], &b"other=1"[..]] {
            let response = add_to_cart(&site(), body, &recorder);
            assert_eq!(response.status, StatusCode::BAD_REQUEST);
        }
        assert!(recorder.added.borrow().is_empty());
    }

    #[test]
    fn test_logging_notifier() {
        let logger = StructuredLogger::new(RequestId::from_string("req-cart"));
        let notifier = LoggingCartNotifier::new(&logger);
        let response = add_to_cart(&site(), b"product_id=unity-hoodie", &notifier);
        assert_eq!(response.status, StatusCode::SEE_OTHER);
    }
}
