//! Hero banner.

use storefront_streaming::escape_html;

use crate::content::HeroContent;

pub fn render_hero(content: &HeroContent) -> String {
    format!(
        r#"<section class="hero" data-section="hero">
    <div class="hero-content">
        <span class="hero-badge">{}</span>
        <h1 class="hero-headline">{}
            <span class="hero-highlight">{}</span>
        </h1>
        <p class="hero-subheadline">{}</p>
        <div class="hero-actions">
            <a href="{}" class="btn-primary">{}</a>
            <a href="{}" class="btn-secondary">{}</a>
        </div>
    </div>
</section>"#,
        escape_html(&content.badge),
        escape_html(&content.headline),
        escape_html(&content.highlight),
        escape_html(&content.subheadline),
        escape_html(&content.primary_cta.href),
        escape_html(&content.primary_cta.text),
        escape_html(&content.secondary_cta.href),
        escape_html(&content.secondary_cta.text)
    )
}
