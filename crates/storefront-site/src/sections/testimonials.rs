//! Testimonials section.

use storefront_streaming::escape_html;

use crate::content::{Testimonial, TestimonialsContent};

pub fn render_testimonials(content: &TestimonialsContent) -> String {
    let cards: String = content.testimonials.iter().map(render_testimonial).collect();

    format!(
        r#"<section class="testimonials" data-section="testimonials">
    <div class="section-header">
        <h2>{}</h2>
        <p>{}</p>
    </div>
    <div class="testimonials-grid">
        {}
    </div>
</section>"#,
        escape_html(&content.section_title),
        escape_html(&content.section_subtitle),
        cards
    )
}

fn render_testimonial(t: &Testimonial) -> String {
    format!(
        r#"<article class="testimonial-card">
            <div class="stars" aria-label="Rated {} out of 5">{}</div>
            <blockquote class="testimonial-quote">"{}"</blockquote>
            <div class="testimonial-author">
                <div class="author-name">{}</div>
                <div class="author-title">{}</div>
            </div>
        </article>"#,
        t.rating,
        stars(t.rating),
        escape_html(&t.quote),
        escape_html(&t.author),
        escape_html(&t.role)
    )
}

/// Five stars, the first `rating` of them filled.
fn stars(rating: u8) -> String {
    (0..5u8)
        .map(|i| {
            if i < rating {
                r#"<span class="star filled" aria-hidden="true">★</span>"#
            } else {
                r#"<span class="star" aria-hidden="true">★</span>"#
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stars() {
        let html = stars(3);
        assert_eq!(html.matches("star filled").count(), 3);
        assert_eq!(html.matches("class=\"star\"").count(), 2);
    }

    #[test]
    fn test_quote_is_escaped() {
        let content = TestimonialsContent {
            section_title: "Reviews".to_string(),
            section_subtitle: String::new(),
            testimonials: vec![Testimonial::new("<b>Loud</b>", "Sam", "Student", 4)],
        };
        let html = render_testimonials(&content);
        assert!(html.contains("&lt;b&gt;Loud&lt;/b&gt;"));
        assert!(html.contains("Rated 4 out of 5"));
    }
}
