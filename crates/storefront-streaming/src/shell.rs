//! Document shell.

use crate::escape::escape_html;

/// Head content for the shell.
#[derive(Debug, Clone, Default)]
pub struct HeadContent {
    /// Page title.
    pub title: Option<String>,
    /// `<meta name=...>` tags.
    pub meta: Vec<(String, String)>,
    /// `<meta property=...>` tags (OpenGraph).
    pub properties: Vec<(String, String)>,
    /// Link tags (canonical, icons) and inline styles.
    pub links: Vec<String>,
}

impl HeadContent {
    /// Create new head content with a title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Default::default()
        }
    }

    /// Add a named meta tag.
    pub fn with_meta(mut self, name: &str, content: &str) -> Self {
        self.meta.push((name.to_string(), content.to_string()));
        self
    }

    /// Add a property meta tag.
    pub fn with_property(mut self, property: &str, content: &str) -> Self {
        self.properties
            .push((property.to_string(), content.to_string()));
        self
    }

    /// Add a link tag.
    pub fn with_link(mut self, rel: &str, href: &str) -> Self {
        self.links.push(format!(
            r#"<link rel="{}" href="{}">"#,
            escape_html(rel),
            escape_html(href)
        ));
        self
    }

    /// Add inline CSS styles.
    pub fn with_style(mut self, css: &str) -> Self {
        self.links.push(format!("<style>{}</style>", css));
        self
    }

    /// Render head content to HTML.
    pub fn render(&self) -> String {
        let mut html = String::new();

        if let Some(title) = &self.title {
            html.push_str(&format!("<title>{}</title>\n", escape_html(title)));
        }

        for (name, content) in &self.meta {
            html.push_str(&format!(
                r#"<meta name="{}" content="{}">"#,
                escape_html(name),
                escape_html(content)
            ));
            html.push('\n');
        }

        for (property, content) in &self.properties {
            html.push_str(&format!(
                r#"<meta property="{}" content="{}">"#,
                escape_html(property),
                escape_html(content)
            ));
            html.push('\n');
        }

        for link in &self.links {
            html.push_str(link);
            html.push('\n');
        }

        html
    }
}

/// Shell template wrapped around streamed sections.
#[derive(Debug, Clone)]
pub struct Shell {
    /// Include doctype declaration.
    pub doctype: bool,
    /// Document language.
    pub lang: String,
    /// Head content.
    pub head: HeadContent,
    /// HTML before sections (opening body, navigation, main).
    pub body_start: String,
    /// HTML after sections (closing tags).
    pub body_end: String,
}

impl Shell {
    /// Create a new shell with basic structure.
    pub fn new(head: HeadContent) -> Self {
        Self {
            doctype: true,
            lang: "en".to_string(),
            head,
            body_start: "<body>\n<main id=\"main-content\">\n".to_string(),
            body_end: "</main>\n</body>\n</html>".to_string(),
        }
    }

    /// Set custom body start HTML.
    pub fn with_body_start(mut self, html: impl Into<String>) -> Self {
        self.body_start = html.into();
        self
    }

    /// Set custom body end HTML.
    pub fn with_body_end(mut self, html: impl Into<String>) -> Self {
        self.body_end = html.into();
        self
    }

    /// Render the opening part of the shell (before sections).
    pub fn render_opening(&self) -> String {
        let mut html = String::new();

        if self.doctype {
            html.push_str("<!DOCTYPE html>\n");
        }

        html.push_str(&format!("<html lang=\"{}\">\n<head>\n", escape_html(&self.lang)));
        html.push_str("<meta charset=\"utf-8\">\n");
        html.push_str(&self.head.render());
        html.push_str("</head>\n");
        html.push_str(&self.body_start);

        html
    }

    /// Render the closing part of the shell (after sections).
    pub fn render_closing(&self) -> String {
        self.body_end.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_head_escapes_values() {
        let head = HeadContent::new("Privacy Policy | Pride & Purpose")
            .with_meta("description", "Say \"hi\"")
            .with_property("og:site_name", "Pride & Purpose");
        let html = head.render();

        assert!(html.contains("<title>Privacy Policy | Pride &amp; Purpose</title>"));
        assert!(html.contains(r#"<meta name="description" content="Say &quot;hi&quot;">"#));
        assert!(html.contains(r#"<meta property="og:site_name" content="Pride &amp; Purpose">"#));
    }

    #[test]
    fn test_shell_opening_and_closing() {
        let shell = Shell::new(HeadContent::new("Home").with_link("canonical", "https://example.com/"))
            .with_body_start("<body>\n<main id=\"main-content\">\n");
        let opening = shell.render_opening();

        assert!(opening.starts_with("<!DOCTYPE html>\n<html lang=\"en\">"));
        assert!(opening.contains("<meta charset=\"utf-8\">"));
        assert!(opening.contains(r#"<link rel="canonical" href="https://example.com/">"#));
        assert!(opening.ends_with("<main id=\"main-content\">\n"));
        assert!(shell.render_closing().ends_with("</html>"));
    }

    #[test]
    fn test_head_links_then_inline_style() {
        let html = HeadContent::new("Home")
            .with_link("icon", "/favicon.ico")
            .with_style("body{margin:0}")
            .render();

        let icon = html.find(r#"<link rel="icon" href="/favicon.ico">"#).unwrap();
        let style = html.find("<style>body{margin:0}</style>").unwrap();
        assert!(icon < style);
        assert!(!html.contains("<script>"));
    }
}
