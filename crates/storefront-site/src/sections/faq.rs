//! FAQ as native disclosure widgets.

use storefront_streaming::escape_html;

use crate::content::FaqContent;

pub fn render_faq(content: &FaqContent) -> String {
    let items: String = content
        .items
        .iter()
        .map(|item| {
            format!(
                r#"<details class="faq-item">
            <summary>{}</summary>
            <p>{}</p>
        </details>"#,
                escape_html(&item.question),
                escape_html(&item.answer)
            )
        })
        .collect();

    format!(
        r#"<section class="faq" id="faq" data-section="faq">
    <div class="section-header">
        <h2>{}</h2>
    </div>
    <div class="faq-list">
        {}
    </div>
</section>"#,
        escape_html(&content.section_title),
        items
    )
}
