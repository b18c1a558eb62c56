//! Shared page chrome: head, navigation, footer and client script.

use storefront_core::{Route, SiteConfig};
use storefront_streaming::{escape_html, PageMeta, Shell};

use crate::styles::SITE_STYLES;

const LEGAL_LINKS: [(Route, &str); 3] = [
    (Route::Privacy, "Privacy Policy"),
    (Route::Terms, "Terms of Service"),
    (Route::Returns, "Returns Policy"),
];

/// Build the shell for a page. `current` is `None` for the 404 page.
pub(crate) fn page_shell(config: &SiteConfig, meta: &PageMeta, current: Option<Route>) -> Shell {
    let head = meta
        .to_head()
        .with_link("icon", "/favicon.ico")
        .with_link("apple-touch-icon", "/apple-touch-icon.png")
        .with_style(SITE_STYLES);

    Shell::new(head)
        .with_body_start(body_start(config, current))
        .with_body_end(body_end(config, current))
}

fn aria_current(route: Route, current: Option<Route>) -> &'static str {
    if current == Some(route) {
        r#" aria-current="page""#
    } else {
        ""
    }
}

fn body_start(config: &SiteConfig, current: Option<Route>) -> String {
    let links = if current == Some(Route::Home) {
        r##"<a href="#shop">Shop</a>
            <a href="#about">Our Story</a>
            <a href="#faq">FAQ</a>
            <a href="#contact">Contact</a>"##
            .to_string()
    } else {
        std::iter::once((Route::Home, "Home"))
            .chain(LEGAL_LINKS)
            .map(|(route, label)| {
                format!(
                    r#"<a href="{}"{}>{}</a>"#,
                    route.path(),
                    aria_current(route, current),
                    label
                )
            })
            .collect::<Vec<_>>()
            .join("\n            ")
    };

    format!(
        r##"<body>
<a href="#main-content" class="skip-link">Skip to main content</a>
<header class="site-header">
    <nav class="nav-container" aria-label="Main navigation">
        <a href="/" class="logo" aria-label="{brand} home">{brand}</a>
        <div class="nav-links">
            {links}
        </div>
    </nav>
</header>
<main id="main-content"{main_class}>
"##,
        brand = escape_html(&config.brand),
        links = links,
        main_class = if current.is_some_and(|r| r != Route::Home) {
            r#" class="legal""#
        } else {
            ""
        },
    )
}

fn body_end(config: &SiteConfig, current: Option<Route>) -> String {
    let legal_links: String = LEGAL_LINKS
        .iter()
        .map(|(route, label)| {
            format!(
                r#"<li><a href="{}"{}>{}</a></li>"#,
                route.path(),
                aria_current(*route, current),
                label
            )
        })
        .collect();

    format!(
        r#"
</main>
<footer class="site-footer">
    <div class="footer-container">
        <div class="footer-brand">
            <a href="/" class="logo">{brand}</a>
            <p>{description}</p>
        </div>
        <div class="footer-column">
            <h4>Legal</h4>
            <nav aria-label="Legal links">
                <ul>{legal_links}</ul>
            </nav>
        </div>
        <div class="footer-bottom">
            <p>&copy; {year} {brand}. All rights reserved.</p>
        </div>
    </div>
</footer>
<script>{script}</script>
</body>
</html>"#,
        brand = escape_html(&config.brand),
        description = escape_html(&config.tagline),
        legal_links = legal_links,
        year = config.copyright_year,
        script = CLIENT_SCRIPT,
    )
}

/// Like toggles are client-side only; each button flips its own state.
const CLIENT_SCRIPT: &str = r#"
document.querySelectorAll('.like-button').forEach((button) => {
    button.addEventListener('click', () => {
        const liked = button.getAttribute('aria-pressed') !== 'true';
        button.setAttribute('aria-pressed', String(liked));
        button.classList.toggle('liked', liked);
        button.textContent = liked ? '♥' : '♡';
    });
});
"#;

#[cfg(test)]
mod tests {
    use super::*;

    fn meta() -> PageMeta {
        PageMeta::new("Returns Policy | Pride & Purpose", "https://example.com/returns")
    }

    #[test]
    fn test_legal_nav_marks_current_page() {
        let config = SiteConfig::default();
        let shell = page_shell(&config, &meta(), Some(Route::Returns));
        let opening = shell.render_opening();
        let closing = shell.render_closing();

        assert!(opening.contains(r##"<a href="#main-content" class="skip-link">"##));
        assert!(opening.contains(r#"<a href="/returns" aria-current="page">"#));
        assert!(closing.contains(r#"<li><a href="/returns" aria-current="page">Returns Policy</a></li>"#));
        assert!(closing.contains(r#"<li><a href="/privacy">Privacy Policy</a></li>"#));
        assert!(closing.contains("&copy; 2025 Pride &amp; Purpose."));
    }

    #[test]
    fn test_home_nav_uses_anchors() {
        let config = SiteConfig::default();
        let opening = page_shell(&config, &meta(), Some(Route::Home)).render_opening();
        assert!(opening.contains(r##"<a href="#shop">Shop</a>"##));
        assert!(!opening.contains("class=\"legal\""));
    }
}
