//! SEO metadata for a page head.

use crate::shell::HeadContent;

/// Search and social metadata for one page.
#[derive(Debug, Clone, PartialEq)]
pub struct PageMeta {
    /// Full document title, already templated.
    pub title: String,
    pub description: String,
    pub keywords: Vec<String>,
    /// Absolute canonical URL.
    pub canonical_url: String,
    pub site_name: String,
    /// OpenGraph locale, e.g. `en_US`.
    pub locale: String,
    pub twitter_creator: Option<String>,
    pub theme_color: Option<String>,
    /// Whether crawlers may index the page.
    pub indexable: bool,
}

impl PageMeta {
    pub fn new(title: impl Into<String>, canonical_url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            keywords: Vec::new(),
            canonical_url: canonical_url.into(),
            site_name: String::new(),
            locale: "en_US".to_string(),
            twitter_creator: None,
            theme_color: None,
            indexable: true,
        }
    }

    pub fn robots(&self) -> &'static str {
        if self.indexable {
            "index, follow"
        } else {
            "noindex, nofollow"
        }
    }

    /// Build head content carrying every tag for this page.
    pub fn to_head(&self) -> HeadContent {
        let mut head = HeadContent::new(&self.title)
            .with_meta("viewport", "width=device-width, initial-scale=1")
            .with_meta("description", &self.description);

        if !self.keywords.is_empty() {
            head = head.with_meta("keywords", &self.keywords.join(", "));
        }

        head = head
            .with_meta("robots", self.robots())
            .with_meta("twitter:card", "summary_large_image")
            .with_meta("twitter:title", &self.title)
            .with_meta("twitter:description", &self.description);

        if let Some(creator) = &self.twitter_creator {
            head = head.with_meta("twitter:creator", creator);
        }
        if let Some(color) = &self.theme_color {
            head = head.with_meta("theme-color", color);
        }

        head.with_property("og:type", "website")
            .with_property("og:locale", &self.locale)
            .with_property("og:url", &self.canonical_url)
            .with_property("og:title", &self.title)
            .with_property("og:description", &self.description)
            .with_property("og:site_name", &self.site_name)
            .with_link("canonical", &self.canonical_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_head_carries_seo_tags() {
        let mut meta = PageMeta::new("Terms of Service | Pride & Purpose", "https://shop.example/terms");
        meta.description = "Terms".to_string();
        meta.site_name = "Pride & Purpose".to_string();
        meta.keywords = vec!["terms".to_string(), "pride".to_string()];
        meta.theme_color = Some("#0f172a".to_string());
        meta.twitter_creator = Some("@prideandpurpose".to_string());

        let html = meta.to_head().render();
        assert!(html.contains(r#"<meta name="robots" content="index, follow">"#));
        assert!(html.contains(r#"<meta name="keywords" content="terms, pride">"#));
        assert!(html.contains(r##"<meta name="theme-color" content="#0f172a">"##));
        assert!(html.contains(r#"<meta name="twitter:creator" content="@prideandpurpose">"#));
        assert!(html.contains(r#"<meta property="og:url" content="https://shop.example/terms">"#));
        assert!(html.contains(r#"<link rel="canonical" href="https://shop.example/terms">"#));
    }

    #[test]
    fn test_noindex() {
        let mut meta = PageMeta::new("Not Found", "https://shop.example/missing");
        meta.indexable = false;
        assert!(meta.to_head().render().contains("noindex, nofollow"));
    }
}
