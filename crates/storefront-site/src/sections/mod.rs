//! Section renderers.

mod faq;
mod hero;
mod legal;
mod newsletter;
mod not_found;
mod products;
mod story;
mod testimonials;
mod values;

pub use faq::*;
pub use hero::*;
pub use legal::*;
pub use newsletter::*;
pub use not_found::*;
pub use products::*;
pub use story::*;
pub use testimonials::*;
pub use values::*;
