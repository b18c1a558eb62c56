/// Inline stylesheet shared by every page.
pub(crate) const SITE_STYLES: &str = r##"
:root {
    --primary: #9333ea;
    --primary-hover: #7e22ce;
    --accent: #ec4899;
    --text: #111827;
    --text-muted: #4b5563;
    --bg: #ffffff;
    --bg-alt: #f9fafb;
    --border: #f3f4f6;
    --sale: #ef4444;
    --star: #facc15;
    --gradient: linear-gradient(90deg, #ec4899 0%, #a855f7 50%, #3b82f6 100%);
}

* { box-sizing: border-box; margin: 0; padding: 0; }

body {
    font-family: Inter, -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
    background: var(--bg);
    color: var(--text);
    line-height: 1.6;
    -webkit-font-smoothing: antialiased;
}

.visually-hidden {
    position: absolute;
    width: 1px;
    height: 1px;
    overflow: hidden;
    clip: rect(0 0 0 0);
    white-space: nowrap;
}

.skip-link {
    position: absolute;
    left: -9999px;
}

.skip-link:focus {
    left: 1rem;
    top: 1rem;
    z-index: 200;
    padding: 0.5rem 1rem;
    background: #2563eb;
    color: white;
    border-radius: 0.375rem;
}

/* Header */
.site-header {
    position: sticky;
    top: 0;
    background: rgba(255, 255, 255, 0.8);
    backdrop-filter: blur(12px);
    border-bottom: 1px solid #e5e7eb;
    z-index: 100;
}

.nav-container {
    max-width: 1200px;
    margin: 0 auto;
    padding: 1rem 2rem;
    display: flex;
    align-items: center;
    justify-content: space-between;
}

.logo {
    font-size: 1.25rem;
    font-weight: 700;
    color: var(--text);
    text-decoration: none;
}

.nav-links { display: flex; gap: 1.5rem; }
.nav-links a { color: var(--text-muted); text-decoration: none; }
.nav-links a:hover, .nav-links a[aria-current="page"] { color: var(--primary); }

/* Shared */
section { padding: 6rem 2rem; }
.section-header { text-align: center; max-width: 42rem; margin: 0 auto 4rem; }
.section-header h2 { font-size: 2.25rem; margin-bottom: 1rem; }
.section-header p { font-size: 1.25rem; color: var(--text-muted); }
.section-footer { text-align: center; margin-top: 3rem; }

.btn-primary, .btn-secondary, .btn-outline {
    display: inline-block;
    padding: 1rem 2rem;
    border-radius: 0.5rem;
    font-weight: 600;
    text-decoration: none;
}
.btn-primary { background: var(--primary); color: white; }
.btn-primary:hover { background: var(--primary-hover); }
.btn-secondary { border: 1px solid #d1d5db; color: #374151; }
.btn-outline { border: 1px solid var(--primary); color: var(--primary); padding: 0.75rem 1.5rem; }
.btn-outline:hover { background: var(--primary); color: white; }

/* Hero */
.hero {
    background: linear-gradient(135deg, #fdf2f8 0%, #faf5ff 50%, #eff6ff 100%);
    text-align: center;
    padding: 8rem 2rem;
}
.hero-badge {
    display: inline-block;
    padding: 0.5rem 1rem;
    border-radius: 9999px;
    background: #f3e8ff;
    color: #7e22ce;
    font-size: 0.875rem;
    margin-bottom: 1.5rem;
}
.hero-headline { font-size: 3.5rem; line-height: 1.1; margin-bottom: 1.5rem; }
.hero-highlight {
    display: block;
    background: var(--gradient);
    -webkit-background-clip: text;
    background-clip: text;
    color: transparent;
}
.hero-subheadline { font-size: 1.25rem; color: var(--text-muted); max-width: 48rem; margin: 0 auto 2rem; }
.hero-actions { display: flex; gap: 1rem; justify-content: center; flex-wrap: wrap; }

/* Values */
.features-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(16rem, 1fr)); gap: 2rem; max-width: 1200px; margin: 0 auto; }
.feature-card { text-align: center; padding: 1.5rem; border-radius: 0.75rem; border: 1px solid var(--border); }
.feature-icon { font-size: 2rem; display: block; margin-bottom: 1rem; }
.feature-description { color: var(--text-muted); font-size: 0.875rem; }

/* Products */
.shop { background: var(--bg-alt); }
.product-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(15rem, 1fr)); gap: 1.5rem; max-width: 1200px; margin: 0 auto; }
.product-card { background: white; border-radius: 0.75rem; border: 1px solid var(--border); overflow: hidden; transition: box-shadow 0.3s; }
.product-card:hover { box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1); }
.product-media {
    position: relative;
    aspect-ratio: 1;
    display: flex;
    align-items: center;
    justify-content: center;
    background: linear-gradient(135deg, #fdf2f8 0%, #faf5ff 100%);
}
.product-image { font-size: 3.75rem; opacity: 0.7; }
.discount-badge {
    position: absolute;
    top: 0.75rem;
    left: 0.75rem;
    background: var(--sale);
    color: white;
    padding: 0.25rem 0.5rem;
    border-radius: 9999px;
    font-size: 0.75rem;
    font-weight: 700;
}
.like-button {
    position: absolute;
    top: 0.75rem;
    right: 0.75rem;
    border: none;
    border-radius: 9999px;
    background: white;
    padding: 0.5rem;
    color: #9ca3af;
    cursor: pointer;
}
.like-button.liked, .like-button[aria-pressed="true"] { color: var(--sale); }
.product-body { padding: 1rem; }
.product-heading { display: flex; justify-content: space-between; gap: 0.5rem; }
.product-heading h3 { font-size: 0.875rem; }
.product-rating { font-size: 0.75rem; color: var(--text-muted); white-space: nowrap; }
.product-description { font-size: 0.75rem; color: var(--text-muted); margin: 0.5rem 0 0.75rem; }
.product-reviews { font-size: 0.75rem; color: #6b7280; margin-bottom: 0.75rem; }
.product-footer { display: flex; justify-content: space-between; align-items: center; }
.price-current { font-size: 1.125rem; font-weight: 700; color: var(--primary); }
.price-original { font-size: 0.875rem; color: #9ca3af; margin-left: 0.5rem; }
.add-to-cart button {
    background: var(--primary);
    color: white;
    border: none;
    border-radius: 0.5rem;
    padding: 0.5rem 1rem;
    font-weight: 500;
    cursor: pointer;
}
.add-to-cart button:hover { background: var(--primary-hover); }
.add-to-cart button:disabled { background: #d1d5db; cursor: not-allowed; }

/* Story */
.story-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(20rem, 1fr)); gap: 3rem; max-width: 1200px; margin: 0 auto; align-items: center; }
.story-text p { color: var(--text-muted); margin-top: 1rem; }
.story-stats { display: grid; grid-template-columns: repeat(3, 1fr); gap: 1rem; text-align: center; }
.stat dd { font-size: 2rem; font-weight: 700; color: var(--primary); }
.stat dt { font-size: 0.875rem; color: var(--text-muted); }
.stat { display: flex; flex-direction: column-reverse; }

/* Testimonials */
.testimonials { background: var(--bg-alt); }
.testimonials-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(18rem, 1fr)); gap: 2rem; max-width: 1200px; margin: 0 auto; }
.testimonial-card { background: white; padding: 1.5rem; border-radius: 0.75rem; border: 1px solid var(--border); }
.stars { margin-bottom: 1rem; color: #d1d5db; }
.star.filled { color: var(--star); }
.testimonial-quote { font-style: italic; color: #374151; font-size: 0.875rem; margin-bottom: 1rem; }
.author-name { font-weight: 600; font-size: 0.875rem; }
.author-title { font-size: 0.75rem; color: #6b7280; }

/* FAQ */
.faq-list { max-width: 48rem; margin: 0 auto; }
.faq-item { border-bottom: 1px solid #e5e7eb; padding: 1rem 0; }
.faq-item summary { font-weight: 600; cursor: pointer; }
.faq-item p { color: var(--text-muted); margin-top: 0.5rem; }

/* Newsletter */
.newsletter { background: linear-gradient(135deg, #9333ea 0%, #ec4899 100%); color: white; text-align: center; }
.newsletter-content { max-width: 36rem; margin: 0 auto; }
.newsletter-content h2 { font-size: 2.25rem; margin-bottom: 1rem; }
.form-group { display: flex; gap: 0.5rem; margin: 2rem 0 1rem; }
.form-group input { flex: 1; padding: 1rem; border-radius: 0.5rem; border: none; }
.form-group button { padding: 1rem 2rem; border-radius: 0.5rem; border: none; background: #111827; color: white; font-weight: 600; cursor: pointer; }
.privacy-note { font-size: 0.875rem; opacity: 0.8; }
.privacy-note a { color: white; }

/* Legal */
.legal { max-width: 56rem; margin: 0 auto; padding: 3rem 2rem; }
.legal-header { margin-bottom: 3rem; }
.legal-header h1 { font-size: 2.25rem; margin-bottom: 1rem; }
.legal-updated, .legal-intro { font-size: 1.125rem; color: var(--text-muted); margin-top: 1rem; }
.legal-section { padding: 0; margin-bottom: 2rem; }
.legal-section h2 { font-size: 1.5rem; margin-bottom: 1rem; }
.legal-section h3 { font-size: 1.25rem; margin: 1rem 0 0.5rem; }
.legal-section p, .legal-section li { color: #374151; }
.legal-section ul { margin: 0.5rem 0 0 1.5rem; }
.contact-card { background: var(--bg-alt); padding: 1.5rem; border-radius: 0.5rem; margin-top: 1rem; }

/* 404 */
.not-found { text-align: center; padding: 8rem 2rem; }
.not-found h1 { font-size: 2.5rem; margin-bottom: 1rem; }
.not-found p { color: var(--text-muted); margin-bottom: 2rem; }

/* Footer */
.site-footer { background: #111827; color: white; padding: 3rem 2rem; }
.footer-container { max-width: 1200px; margin: 0 auto; display: grid; grid-template-columns: 2fr 1fr 1fr; gap: 2rem; }
.footer-brand p { color: #9ca3af; margin-top: 1rem; max-width: 28rem; }
.footer-column h4 { font-size: 0.875rem; text-transform: uppercase; letter-spacing: 0.05em; color: #d1d5db; margin-bottom: 1rem; }
.footer-column ul { list-style: none; }
.footer-column a { color: #9ca3af; text-decoration: none; line-height: 2; }
.footer-column a:hover, .footer-column a[aria-current="page"] { color: #60a5fa; }
.footer-bottom { font-size: 0.875rem; color: #9ca3af; }

@media (max-width: 768px) {
    .nav-links { display: none; }
    .hero-headline { font-size: 2.25rem; }
    .footer-container { grid-template-columns: 1fr; }
    .form-group { flex-direction: column; }
}
"##;
