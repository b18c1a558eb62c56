use storefront_streaming::escape_html;

/// Body of the 404 page.
pub fn render_not_found(path: &str) -> String {
    format!(
        r#"<section class="not-found" data-section="not-found">
    <h1>Page not found</h1>
    <p>Nothing lives at <code>{}</code>.</p>
    <a href="/" class="btn-primary">Back to the shop</a>
</section>"#,
        escape_html(path)
    )
}
