//! Named, independently streamable parts of a page.

/// A rendered section of body HTML.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// Section name, used for timing marks and logs.
    pub name: String,
    /// Rendered HTML.
    pub html: String,
}

impl Section {
    pub fn new(name: impl Into<String>, html: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            html: html.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.html.len()
    }

    pub fn is_empty(&self) -> bool {
        self.html.is_empty()
    }
}
