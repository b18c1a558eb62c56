//! Values ("why choose us") section.

use storefront_streaming::escape_html;

use crate::content::ValuesContent;

pub fn render_values(content: &ValuesContent) -> String {
    let features_html: String = content
        .features
        .iter()
        .map(|f| {
            format!(
                r#"<div class="feature-card">
            <span class="feature-icon" aria-hidden="true">{}</span>
            <h3 class="feature-title">{}</h3>
            <p class="feature-description">{}</p>
        </div>"#,
                escape_html(&f.icon),
                escape_html(&f.title),
                escape_html(&f.description)
            )
        })
        .collect();

    format!(
        r#"<section class="values" id="values" data-section="values">
    <div class="section-header">
        <h2>{}</h2>
        <p>{}</p>
    </div>
    <div class="features-grid">
        {}
    </div>
</section>"#,
        escape_html(&content.section_title),
        escape_html(&content.section_subtitle),
        features_html
    )
}
