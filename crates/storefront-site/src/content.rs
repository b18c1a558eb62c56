//! Home page copy.

use serde::{Deserialize, Serialize};
use storefront_core::SiteConfig;

/// Hero banner.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeroContent {
    pub badge: String,
    pub headline: String,
    /// Highlighted second line of the headline.
    pub highlight: String,
    pub subheadline: String,
    pub primary_cta: Link,
    pub secondary_cta: Link,
}

/// A call-to-action link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub text: String,
    pub href: String,
}

impl Link {
    pub fn new(text: &str, href: &str) -> Self {
        Self {
            text: text.to_string(),
            href: href.to_string(),
        }
    }
}

/// A value proposition card.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Feature {
    pub icon: String,
    pub title: String,
    pub description: String,
}

impl Feature {
    pub fn new(icon: &str, title: &str, description: &str) -> Self {
        Self {
            icon: icon.to_string(),
            title: title.to_string(),
            description: description.to_string(),
        }
    }
}

/// "Why choose us" section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValuesContent {
    pub section_title: String,
    pub section_subtitle: String,
    pub features: Vec<Feature>,
}

/// Header and footer copy around the product grid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShopContent {
    pub section_title: String,
    pub section_subtitle: String,
    pub more: Link,
}

/// A headline number in the story section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stat {
    pub value: String,
    pub label: String,
}

/// "Our Story" section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoryContent {
    pub section_title: String,
    pub paragraphs: Vec<String>,
    pub stats: Vec<Stat>,
}

/// A customer testimonial.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Testimonial {
    pub quote: String,
    pub author: String,
    pub role: String,
    /// Whole stars out of five.
    pub rating: u8,
}

impl Testimonial {
    pub fn new(quote: &str, author: &str, role: &str, rating: u8) -> Self {
        Self {
            quote: quote.to_string(),
            author: author.to_string(),
            role: role.to_string(),
            rating: rating.min(5),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestimonialsContent {
    pub section_title: String,
    pub section_subtitle: String,
    pub testimonials: Vec<Testimonial>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FaqItem {
    pub question: String,
    pub answer: String,
}

impl FaqItem {
    pub fn new(question: &str, answer: &str) -> Self {
        Self {
            question: question.to_string(),
            answer: answer.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FaqContent {
    pub section_title: String,
    pub items: Vec<FaqItem>,
}

/// Newsletter signup copy. Form wiring comes from [`storefront_core::NewsletterConfig`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsletterContent {
    pub section_title: String,
    pub section_subtitle: String,
    pub button_text: String,
    pub privacy_note: String,
}

/// Everything the home page shows besides the product grid itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HomeContent {
    pub hero: HeroContent,
    pub values: ValuesContent,
    pub shop: ShopContent,
    pub story: StoryContent,
    pub testimonials: TestimonialsContent,
    pub faq: FaqContent,
    pub newsletter: NewsletterContent,
}

impl HomeContent {
    /// Home page copy with the configured brand and policy terms filled in.
    pub fn for_site(config: &SiteConfig) -> Self {
        let brand = config.brand.as_str();

        Self {
            hero: HeroContent {
                badge: format!("🏳️‍🌈 {}", config.tagline),
                headline: "Express Your True Self with".to_string(),
                highlight: brand.to_string(),
                subheadline: config.description.clone(),
                primary_cta: Link::new("Shop Collection", "#shop"),
                secondary_cta: Link::new("Our Story", "#about"),
            },
            values: ValuesContent {
                section_title: format!("Why Choose {}?", brand),
                section_subtitle: "We're more than a store. We're a community committed to celebrating diversity and promoting equality.".to_string(),
                features: vec![
                    Feature::new(
                        "👥",
                        "Authentic Designs",
                        "Every piece is created by LGBTQIA+ artists and designers, ensuring genuine representation and meaning.",
                    ),
                    Feature::new(
                        "❤️",
                        "Community Impact",
                        "10% of all profits go directly to LGBTQIA+ advocacy organizations and support programs.",
                    ),
                    Feature::new(
                        "🛡️",
                        "Sustainable Practices",
                        "Eco-friendly materials and ethical manufacturing because caring for our planet matters too.",
                    ),
                ],
            },
            shop: ShopContent {
                section_title: "Featured Collection".to_string(),
                section_subtitle: "Handpicked favorites that celebrate identity, promote visibility, and spread love.".to_string(),
                more: Link::new("View Full Collection", "#contact"),
            },
            story: StoryContent {
                section_title: "Our Story".to_string(),
                paragraphs: vec![
                    format!(
                        "Founded in 2023 by a group of LGBTQIA+ creatives, {} started with a simple idea: merchandise that celebrates who we are should be made by us.",
                        brand
                    ),
                    "Every design begins with a story from our community, and every order helps fund the organizations that fight for our rights.".to_string(),
                    "We partner with ethical manufacturers and ship in plastic-free packaging, so pride never costs the planet.".to_string(),
                ],
                stats: vec![
                    Stat { value: "10K+".to_string(), label: "Happy customers".to_string() },
                    Stat { value: "$50K+".to_string(), label: "Donated to advocacy".to_string() },
                    Stat { value: "25+".to_string(), label: "Community artists".to_string() },
                ],
            },
            testimonials: TestimonialsContent {
                section_title: "What Our Community Says".to_string(),
                section_subtitle: "Real stories from people who wear their pride with purpose.".to_string(),
                testimonials: vec![
                    Testimonial::new(
                        "Finally found a brand that truly represents me. The quality is amazing and knowing my purchase supports the community makes it even better.",
                        "Alex Rivera",
                        "Educator & Activist",
                        5,
                    ),
                    Testimonial::new(
                        &format!("I love wearing my {} hoodie to work. It's a conversation starter and helps create visibility in my corporate environment.", brand),
                        "Jordan Chen",
                        "Software Engineer",
                        5,
                    ),
                    Testimonial::new(
                        "The pin collection is perfect! I gift them to allies and new community members. They spark important conversations.",
                        "Sam Taylor",
                        "Student Leader",
                        5,
                    ),
                ],
            },
            faq: FaqContent {
                section_title: "Frequently Asked Questions".to_string(),
                items: vec![
                    FaqItem::new(
                        "Where do the proceeds go?",
                        "10% of all profits go directly to LGBTQIA+ advocacy organizations and support programs.",
                    ),
                    FaqItem::new(
                        "How long does shipping take?",
                        "Most orders ship within 2 business days and arrive within a week.",
                    ),
                    FaqItem::new(
                        "What is your return policy?",
                        &format!(
                            "Unworn items can be returned within {} days of delivery. See our returns policy for details.",
                            config.legal.return_window_days
                        ),
                    ),
                    FaqItem::new(
                        "Are your products sustainably made?",
                        "We use eco-friendly materials and work only with ethical manufacturers.",
                    ),
                ],
            },
            newsletter: NewsletterContent {
                section_title: "Join Our Community".to_string(),
                section_subtitle: "Get early access to new drops, stories from our artists, and ways to support the cause.".to_string(),
                button_text: "Subscribe".to_string(),
                privacy_note: "We respect your privacy. Unsubscribe at any time.".to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brand_flows_into_copy() {
        let config = SiteConfig {
            brand: "TTP Landing".to_string(),
            ..SiteConfig::default()
        };
        let content = HomeContent::for_site(&config);

        assert_eq!(content.hero.highlight, "TTP Landing");
        assert_eq!(content.values.section_title, "Why Choose TTP Landing?");
        assert!(content.story.paragraphs[0].contains("TTP Landing"));
    }

    #[test]
    fn test_sample_copy() {
        let content = HomeContent::for_site(&SiteConfig::default());
        assert_eq!(content.values.features.len(), 3);
        assert_eq!(content.testimonials.testimonials.len(), 3);
        assert!(content.testimonials.testimonials.iter().all(|t| t.rating == 5));
        assert!(content.faq.items[2].answer.contains("30 days"));
    }

    #[test]
    fn test_testimonial_rating_capped() {
        assert_eq!(Testimonial::new("q", "a", "r", 9).rating, 5);
    }
}
