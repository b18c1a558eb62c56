//! Observability for the storefront.
//!
//! - `StructuredLogger` - Request-correlated structured logging
//! - `LogBuilder` - Fluent field builder for a single record

mod logging;

pub use logging::*;

// Re-export RequestId from storefront-core for convenience
pub use storefront_core::RequestId;
