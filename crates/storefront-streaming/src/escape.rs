/// Escape text for use in HTML element content and quoted attribute values.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("Pride & Purpose"), "Pride &amp; Purpose");
        assert_eq!(
            escape_html(r#"<a href="x">it's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;it&#39;s&lt;/a&gt;"
        );
        assert_eq!(escape_html("🏳️‍🌈"), "🏳️‍🌈");
    }
}
