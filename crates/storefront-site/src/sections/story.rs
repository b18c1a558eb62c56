//! "Our Story" section.

use storefront_streaming::escape_html;

use crate::content::StoryContent;

pub fn render_story(content: &StoryContent) -> String {
    let paragraphs: String = content
        .paragraphs
        .iter()
        .map(|p| format!("<p>{}</p>", escape_html(p)))
        .collect::<Vec<_>>()
        .join("\n            ");

    let stats: String = content
        .stats
        .iter()
        .map(|s| {
            format!(
                r#"<div class="stat"><dt>{}</dt><dd>{}</dd></div>"#,
                escape_html(&s.label),
                escape_html(&s.value)
            )
        })
        .collect();

    format!(
        r#"<section class="story" id="about" data-section="story">
    <div class="story-grid">
        <div class="story-text">
            <h2>{}</h2>
            {}
        </div>
        <dl class="story-stats">{}</dl>
    </div>
</section>"#,
        escape_html(&content.section_title),
        paragraphs,
        stats
    )
}
