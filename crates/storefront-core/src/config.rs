//! Site configuration.
//!
//! Every field has a default, so a partial TOML file (or none at all)
//! yields a complete configuration.

use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::PageError;

/// Top-level site configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Brand name used in titles, navigation and legal text.
    pub brand: String,
    /// Short line shown in the hero badge and footer.
    pub tagline: String,
    /// Default document title for the home page.
    pub default_title: String,
    /// Meta description.
    pub description: String,
    /// Meta keywords.
    pub keywords: Vec<String>,
    /// Absolute base URL, used for canonical and OpenGraph URLs.
    pub site_url: String,
    /// OpenGraph locale.
    pub locale: String,
    /// ISO currency code prices are displayed in.
    pub currency: String,
    /// Browser theme color.
    pub theme_color: String,
    /// Twitter handle for the card creator tag.
    pub twitter_handle: String,
    /// Year shown in the footer copyright line.
    pub copyright_year: i32,
    /// Contact details shown on legal pages.
    pub contact: ContactConfig,
    /// Newsletter form settings.
    pub newsletter: NewsletterConfig,
    /// Legal page settings.
    pub legal: LegalConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            brand: "Pride & Purpose".to_string(),
            tagline: "Proudly Supporting Our Community".to_string(),
            default_title: "Pride & Purpose - Authentic LGBTQIA+ Merchandise".to_string(),
            description: "Curated, inclusive merchandise designed by and for the LGBTQIA+ community. Every purchase supports equality and acceptance.".to_string(),
            keywords: vec![
                "pride merchandise".to_string(),
                "LGBTQIA+".to_string(),
                "inclusive apparel".to_string(),
                "pride gifts".to_string(),
            ],
            site_url: "https://pride-and-purpose.netlify.app".to_string(),
            locale: "en_US".to_string(),
            currency: "USD".to_string(),
            theme_color: "#0f172a".to_string(),
            twitter_handle: "@prideandpurpose".to_string(),
            copyright_year: 2025,
            contact: ContactConfig::default(),
            newsletter: NewsletterConfig::default(),
            legal: LegalConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Parse from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, PageError> {
        let config: SiteConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, PageError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            PageError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&content)
    }

    /// Serialize to TOML.
    pub fn to_toml(&self) -> Result<String, PageError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Check the fields every page depends on.
    pub fn validate(&self) -> Result<(), PageError> {
        if self.brand.trim().is_empty() {
            return Err(PageError::Config("brand must not be empty".to_string()));
        }
        if !(self.site_url.starts_with("https://") || self.site_url.starts_with("http://")) {
            return Err(PageError::Config(format!(
                "site_url must be absolute, got {:?}",
                self.site_url
            )));
        }
        if self.newsletter.form_name.trim().is_empty() {
            return Err(PageError::Config(
                "newsletter.form_name must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Absolute URL for a site path.
    pub fn page_url(&self, path: &str) -> String {
        let base = self.site_url.trim_end_matches('/');
        if path == "/" || path.is_empty() {
            format!("{}/", base)
        } else {
            format!("{}/{}", base, path.trim_start_matches('/'))
        }
    }

    /// Document title: `"{page} | {brand}"`, or the default title.
    pub fn title_for(&self, page_title: Option<&str>) -> String {
        match page_title {
            Some(title) => format!("{} | {}", title, self.brand),
            None => self.default_title.clone(),
        }
    }
}

/// Contact details.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    pub email: String,
    pub phone: String,
    pub address: String,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            email: "hello@prideandpurpose.shop".to_string(),
            phone: "+1 (555) 123-4567".to_string(),
            address: "123 Rainbow Way, Unity City, UC 12345".to_string(),
        }
    }
}

/// Newsletter form posted to the hosted form service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewsletterConfig {
    /// Form action URL.
    pub action: String,
    /// Value of the hidden `form-name` field.
    pub form_name: String,
    /// Name of the honeypot field bots fill in.
    pub honeypot_field: String,
}

impl Default for NewsletterConfig {
    fn default() -> Self {
        Self {
            action: "/".to_string(),
            form_name: "newsletter".to_string(),
            honeypot_field: "bot-field".to_string(),
        }
    }
}

/// Legal page settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LegalConfig {
    /// "Last updated" date shown on privacy, terms and returns.
    pub last_updated: NaiveDate,
    /// Days a customer has to start a return.
    pub return_window_days: u32,
}

impl Default for LegalConfig {
    fn default() -> Self {
        Self {
            last_updated: NaiveDate::from_ymd_opt(2025, 8, 27).unwrap_or_default(),
            return_window_days: 30,
        }
    }
}

impl LegalConfig {
    /// Date as shown on the page, e.g. "August 27, 2025".
    pub fn last_updated_label(&self) -> String {
        self.last_updated.format("%B %-d, %Y").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = SiteConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.brand, "Pride & Purpose");
        assert_eq!(config.newsletter.honeypot_field, "bot-field");
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config = SiteConfig::from_toml_str(
            r#"
brand = "TTP Landing"
default_title = "TTP Landing - Modern Web Solutions"
site_url = "https://ttp-landing.netlify.app"

[contact]
email = "privacy@ttp-landing.com"
"#,
        )
        .unwrap();

        assert_eq!(config.brand, "TTP Landing");
        assert_eq!(config.contact.email, "privacy@ttp-landing.com");
        assert_eq!(config.contact.phone, ContactConfig::default().phone);
        assert_eq!(config.currency, "USD");
    }

    #[test]
    fn test_invalid_site_url() {
        let result = SiteConfig::from_toml_str(r#"site_url = "example.com""#);
        assert!(matches!(result, Err(PageError::Config(_))));
    }

    #[test]
    fn test_malformed_toml() {
        let result = SiteConfig::from_toml_str("brand = ");
        assert!(matches!(result, Err(PageError::Config(_))));
    }

    #[test]
    fn test_toml_round_trip() {
        let config = SiteConfig::default();
        let text = config.to_toml().unwrap();
        assert_eq!(SiteConfig::from_toml_str(&text).unwrap(), config);
    }

    #[test]
    fn test_page_url() {
        let config = SiteConfig::default();
        assert_eq!(config.page_url("/"), "https://pride-and-purpose.netlify.app/");
        assert_eq!(
            config.page_url("/privacy"),
            "https://pride-and-purpose.netlify.app/privacy"
        );
    }

    #[test]
    fn test_title_for() {
        let config = SiteConfig::default();
        assert_eq!(config.title_for(Some("Privacy Policy")), "Privacy Policy | Pride & Purpose");
        assert_eq!(config.title_for(None), config.default_title);
    }

    #[test]
    fn test_last_updated_label() {
        assert_eq!(LegalConfig::default().last_updated_label(), "August 27, 2025");
    }
}
