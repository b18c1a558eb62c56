//! Page assembly for the Pride & Purpose storefront.
//!
//! A [`Site`] pairs the site configuration with an injected catalog and
//! renders every route as a [`RenderedPage`]: a document shell plus the
//! named sections streamed inside it. The same pages back the Spin
//! component and the static export.

pub mod content;
pub mod legal;

mod layout;
mod pages;
mod sections;
mod styles;

pub use pages::{RenderedPage, Site};
