//! Core abstractions shared by the storefront crates.
//!
//! - `SiteConfig` - Brand, contact and form settings loaded from TOML
//! - `Route` - The pages and endpoints the storefront serves
//! - `RequestContext` - Per-request identifier, path and timing
//! - `PageError` - Errors that map onto HTTP status codes

mod config;
mod context;
mod error;
mod lifecycle;
mod route;

pub use config::*;
pub use context::*;
pub use error::*;
pub use lifecycle::*;
pub use route::*;
