//! Legal documents: privacy policy, terms of service and returns policy.

use storefront_core::{Route, SiteConfig};

/// One block of legal text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LegalBlock {
    Paragraph(String),
    Subheading(String),
    List(Vec<String>),
    /// The configured contact details.
    Contact,
}

/// A titled section of a legal document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegalSection {
    /// Anchor id, also used for `aria-labelledby`.
    pub id: String,
    pub heading: String,
    pub blocks: Vec<LegalBlock>,
}

impl LegalSection {
    fn new(id: &str, heading: &str) -> Self {
        Self {
            id: id.to_string(),
            heading: heading.to_string(),
            blocks: Vec::new(),
        }
    }

    fn paragraph(mut self, text: impl Into<String>) -> Self {
        self.blocks.push(LegalBlock::Paragraph(text.into()));
        self
    }

    fn subheading(mut self, text: &str) -> Self {
        self.blocks.push(LegalBlock::Subheading(text.to_string()));
        self
    }

    fn list(mut self, items: &[&str]) -> Self {
        self.blocks
            .push(LegalBlock::List(items.iter().map(|s| s.to_string()).collect()));
        self
    }

    fn contact(mut self) -> Self {
        self.blocks.push(LegalBlock::Contact);
        self
    }
}

/// A complete legal page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegalDocument {
    pub route: Route,
    pub title: String,
    pub description: String,
    pub keywords: Vec<String>,
    pub intro: String,
    pub sections: Vec<LegalSection>,
}

impl LegalDocument {
    /// The document served at `route`, if it is a legal page.
    pub fn for_route(route: Route, config: &SiteConfig) -> Option<Self> {
        match route {
            Route::Privacy => Some(privacy(config)),
            Route::Terms => Some(terms(config)),
            Route::Returns => Some(returns(config)),
            Route::Home | Route::AddToCart => None,
        }
    }

    /// Section ids in document order.
    pub fn section_ids(&self) -> Vec<&str> {
        self.sections.iter().map(|s| s.id.as_str()).collect()
    }
}

fn keywords(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn privacy(config: &SiteConfig) -> LegalDocument {
    let brand = &config.brand;

    LegalDocument {
        route: Route::Privacy,
        title: "Privacy Policy".to_string(),
        description: format!(
            "Privacy policy and data protection information for {}. Learn how we collect, use, and protect your personal information.",
            brand
        ),
        keywords: keywords(&[
            "privacy policy",
            "data protection",
            "personal information",
            "GDPR",
            "data security",
        ]),
        intro: format!(
            "This Privacy Policy describes how {} (\"we\", \"our\", or \"us\") collects, uses, and protects your personal information when you visit our website.",
            brand
        ),
        sections: vec![
            LegalSection::new("information-collection", "Information We Collect")
                .subheading("Information You Provide")
                .paragraph("We may collect information that you voluntarily provide to us, such as:")
                .list(&[
                    "Contact information (name, email address, phone number)",
                    "Communication preferences",
                    "Any other information you choose to provide",
                ])
                .subheading("Automatically Collected Information")
                .paragraph("When you visit our website, we may automatically collect certain information, including:")
                .list(&[
                    "IP address and device information",
                    "Browser type and version",
                    "Pages visited and time spent on our site",
                    "Referring website information",
                ]),
            LegalSection::new("information-use", "How We Use Your Information")
                .paragraph("We use the information we collect for the following purposes:")
                .list(&[
                    "To provide and maintain our services",
                    "To communicate with you about our services",
                    "To improve our website and user experience",
                    "To analyze website usage and performance",
                    "To comply with legal obligations",
                ]),
            LegalSection::new("information-sharing", "Information Sharing")
                .paragraph("We do not sell, trade, or otherwise transfer your personal information to third parties, except in the following circumstances:")
                .list(&[
                    "With your explicit consent",
                    "To comply with legal requirements or court orders",
                    "To protect our rights, property, or safety",
                    "In connection with a business transfer or acquisition",
                ]),
            LegalSection::new("data-security", "Data Security")
                .paragraph("We implement appropriate technical and organizational security measures to protect your personal information against unauthorized access, alteration, disclosure, or destruction. However, no method of transmission over the internet or electronic storage is 100% secure."),
            LegalSection::new("cookies", "Cookies and Tracking")
                .paragraph("Our website may use cookies and similar tracking technologies to enhance your browsing experience. You can control cookie settings through your browser preferences.")
                .paragraph("We use cookies for:")
                .list(&[
                    "Essential website functionality",
                    "Analytics and performance monitoring",
                    "User preference storage",
                ]),
            LegalSection::new("your-rights", "Your Rights")
                .paragraph("Depending on your location, you may have the following rights regarding your personal information:")
                .list(&[
                    "Right to access your personal information",
                    "Right to correct inaccurate information",
                    "Right to delete your personal information",
                    "Right to restrict processing",
                    "Right to data portability",
                    "Right to object to processing",
                ]),
            LegalSection::new("contact-us", "Contact Us")
                .paragraph("If you have any questions about this Privacy Policy or our data practices, please contact us:")
                .contact(),
            LegalSection::new("policy-updates", "Policy Updates")
                .paragraph("We may update this Privacy Policy from time to time. We will notify you of any material changes by posting the new Privacy Policy on this page and updating the \"Last updated\" date. We encourage you to review this policy periodically for any changes."),
        ],
    }
}

pub fn terms(config: &SiteConfig) -> LegalDocument {
    let brand = &config.brand;

    LegalDocument {
        route: Route::Terms,
        title: "Terms of Service".to_string(),
        description: format!(
            "Terms of service for shopping with {}. Orders, pricing, intellectual property and liability.",
            brand
        ),
        keywords: keywords(&["terms of service", "terms and conditions", "orders", "pricing"]),
        intro: format!(
            "These Terms of Service govern your use of the {} website and any purchase you make from us. By using the site you agree to these terms.",
            brand
        ),
        sections: vec![
            LegalSection::new("orders", "Orders and Availability")
                .paragraph("All orders are subject to availability. Items shown as out of stock cannot be added to your cart.")
                .list(&[
                    "We may limit quantities per order",
                    "We may cancel an order if a product becomes unavailable",
                    "You will be notified before any cancellation is processed",
                ]),
            LegalSection::new("pricing", "Pricing")
                .paragraph(format!(
                    "Prices are shown in {} and include any active discount. Sale prices are shown next to the original price, and the discount badge is rounded to the nearest whole percent.",
                    config.currency
                )),
            LegalSection::new("intellectual-property", "Intellectual Property")
                .paragraph(format!(
                    "All designs on this site are the property of {} or the community artists who created them. You may not reproduce them without written permission.",
                    brand
                )),
            LegalSection::new("liability", "Limitation of Liability")
                .paragraph("To the fullest extent permitted by law, we are not liable for indirect or consequential damages arising from your use of the site or our products."),
            LegalSection::new("contact-us", "Contact Us")
                .paragraph("Questions about these terms can be sent to:")
                .contact(),
        ],
    }
}

pub fn returns(config: &SiteConfig) -> LegalDocument {
    let days = config.legal.return_window_days;

    LegalDocument {
        route: Route::Returns,
        title: "Returns Policy".to_string(),
        description: format!(
            "Returns and exchanges at {}. Unworn items can be returned within {} days.",
            config.brand, days
        ),
        keywords: keywords(&["returns", "refunds", "exchanges", "shipping"]),
        intro: format!(
            "We want you to love what you ordered. If something isn't right, you can return it within {} days of delivery.",
            days
        ),
        sections: vec![
            LegalSection::new("eligibility", "Eligibility")
                .paragraph(format!(
                    "Items are eligible for return within {} days of delivery if they are:",
                    days
                ))
                .list(&[
                    "Unworn, unwashed and undamaged",
                    "In their original packaging",
                    "Accompanied by proof of purchase",
                ]),
            LegalSection::new("non-returnable", "Non-returnable Items")
                .list(&["Gift cards", "Items marked as final sale", "Personalized products"]),
            LegalSection::new("refunds", "Refunds")
                .paragraph("Once we receive and inspect your return, we will refund the original payment method within 5 to 10 business days."),
            LegalSection::new("exchanges", "Exchanges")
                .paragraph("Need a different size? Start a return and place a new order, or contact us and we will arrange an exchange."),
            LegalSection::new("contact-us", "Start a Return")
                .paragraph("To start a return, contact us with your order number:")
                .contact(),
        ],
    }
}
