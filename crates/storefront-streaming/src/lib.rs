//! Streaming primitives for shell-first SSR.
//!
//! This crate enforces shell-first streaming patterns:
//! - `StreamingSink` - Writes the shell, then sections, then the closing tags
//! - `Shell` - Document shell with head metadata
//! - `PageMeta` - SEO metadata rendered into the head
//! - `Section` - Named streamable chunk of body HTML

mod error;
mod escape;
mod meta;
mod section;
mod shell;
mod sink;

pub use error::*;
pub use escape::escape_html;
pub use meta::*;
pub use section::*;
pub use shell::*;
pub use sink::*;
