//! Legal page sections.

use storefront_core::SiteConfig;
use storefront_streaming::escape_html;

use crate::legal::{LegalBlock, LegalDocument, LegalSection};

/// Page header: title, last-updated date and introduction.
pub fn render_legal_header(doc: &LegalDocument, config: &SiteConfig) -> String {
    format!(
        r#"<header class="legal-header" data-section="legal-header">
    <h1>{}</h1>
    <p class="legal-updated">Last updated: {}</p>
    <p class="legal-intro">{}</p>
</header>"#,
        escape_html(&doc.title),
        config.legal.last_updated_label(),
        escape_html(&doc.intro)
    )
}

pub fn render_legal_section(section: &LegalSection, config: &SiteConfig) -> String {
    let body: String = section
        .blocks
        .iter()
        .map(|block| render_block(block, config))
        .collect::<Vec<_>>()
        .join("\n    ");

    format!(
        r#"<section class="legal-section" aria-labelledby="{id}" data-section="{id}">
    <h2 id="{id}">{heading}</h2>
    {body}
</section>"#,
        id = escape_html(&section.id),
        heading = escape_html(&section.heading),
        body = body
    )
}

fn render_block(block: &LegalBlock, config: &SiteConfig) -> String {
    match block {
        LegalBlock::Paragraph(text) => format!("<p>{}</p>", escape_html(text)),
        LegalBlock::Subheading(text) => format!("<h3>{}</h3>", escape_html(text)),
        LegalBlock::List(items) => {
            let items: String = items
                .iter()
                .map(|item| format!("<li>{}</li>", escape_html(item)))
                .collect();
            format!("<ul>{}</ul>", items)
        }
        LegalBlock::Contact => {
            let contact = &config.contact;
            format!(
                r#"<div class="contact-card">
        <p>Email: <a href="mailto:{email}">{email}</a></p>
        <p>Phone: {}</p>
        <p>Address: {}</p>
    </div>"#,
                escape_html(&contact.phone),
                escape_html(&contact.address),
                email = escape_html(&contact.email)
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::legal::privacy;

    #[test]
    fn test_header_shows_last_updated() {
        let config = SiteConfig::default();
        let html = render_legal_header(&privacy(&config), &config);
        assert!(html.contains("<h1>Privacy Policy</h1>"));
        assert!(html.contains("Last updated: August 27, 2025"));
    }

    #[test]
    fn test_contact_block_uses_config() {
        let mut config = SiteConfig::default();
        config.contact.email = "privacy@ttp-landing.com".to_string();
        let doc = privacy(&config);
        let contact = doc
            .sections
            .iter()
            .find(|s| s.id == "contact-us")
            .unwrap();

        let html = render_legal_section(contact, &config);
        assert!(html.contains(r#"aria-labelledby="contact-us""#));
        assert!(html.contains("mailto:privacy@ttp-landing.com"));
        assert!(html.contains("+1 (555) 123-4567"));
    }
}
