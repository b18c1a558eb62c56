//! Newsletter signup.
//!
//! The form posts straight to the hosted form service; nothing in this
//! workspace handles the submission.

use storefront_core::NewsletterConfig;
use storefront_streaming::escape_html;

use crate::content::NewsletterContent;

pub fn render_newsletter(content: &NewsletterContent, form: &NewsletterConfig) -> String {
    let form_name = escape_html(&form.form_name);
    let honeypot = escape_html(&form.honeypot_field);

    format!(
        r#"<section class="newsletter" id="contact" data-section="newsletter">
    <div class="newsletter-content">
        <h2>{title}</h2>
        <p>{subtitle}</p>
        <form class="newsletter-form" name="{form_name}" action="{action}" method="POST" data-netlify="true" netlify-honeypot="{honeypot}">
            <input type="hidden" name="form-name" value="{form_name}">
            <p class="visually-hidden" aria-hidden="true">
                <label>Leave this empty: <input name="{honeypot}" tabindex="-1" autocomplete="off"></label>
            </p>
            <div class="form-group">
                <label for="newsletter-email" class="visually-hidden">Email address</label>
                <input id="newsletter-email" type="email" name="email" placeholder="Enter your email" required autocomplete="email">
                <button type="submit">{button}</button>
            </div>
            <p class="privacy-note">{note} <a href="/privacy">Privacy Policy</a></p>
        </form>
    </div>
</section>"#,
        title = escape_html(&content.section_title),
        subtitle = escape_html(&content.section_subtitle),
        form_name = form_name,
        action = escape_html(&form.action),
        honeypot = honeypot,
        button = escape_html(&content.button_text),
        note = escape_html(&content.privacy_note),
    )
}
