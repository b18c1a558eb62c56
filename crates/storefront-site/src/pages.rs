//! Page assembly per route.

use storefront_commerce::card::ProductGrid;
use storefront_commerce::catalog::Catalog;
use storefront_commerce::Currency;
use storefront_core::{PageError, Route, SiteConfig};
use storefront_streaming::{PageMeta, Section, Shell};

use crate::content::HomeContent;
use crate::layout::page_shell;
use crate::legal::LegalDocument;
use crate::sections::{
    render_faq, render_hero, render_legal_header, render_legal_section, render_newsletter,
    render_not_found, render_products, render_story, render_testimonials, render_values,
};

/// A page ready to stream: the shell and the sections that go inside it.
#[derive(Debug, Clone)]
pub struct RenderedPage {
    /// `None` for the 404 page.
    pub route: Option<Route>,
    pub meta: PageMeta,
    pub shell: Shell,
    pub sections: Vec<Section>,
}

impl RenderedPage {
    /// The complete document as one string.
    pub fn to_html(&self) -> String {
        let mut html = self.shell.render_opening();
        for section in &self.sections {
            html.push_str(&section.html);
            html.push('\n');
        }
        html.push_str(&self.shell.render_closing());
        html
    }

    pub fn section_names(&self) -> Vec<&str> {
        self.sections.iter().map(|s| s.name.as_str()).collect()
    }
}

/// The storefront: configuration plus the catalog it presents.
#[derive(Debug, Clone)]
pub struct Site {
    config: SiteConfig,
    catalog: Catalog,
    currency: Currency,
}

impl Site {
    /// Pair a configuration with a catalog.
    ///
    /// Fails if the configuration is invalid or a product is priced in a
    /// different currency than the site.
    pub fn new(config: SiteConfig, catalog: Catalog) -> Result<Self, PageError> {
        config.validate()?;

        let currency = Currency::from_code(&config.currency).ok_or_else(|| {
            PageError::Config(format!("unsupported currency {:?}", config.currency))
        })?;

        if let Some(product) = catalog.iter().find(|p| p.price.currency != currency) {
            return Err(PageError::Config(format!(
                "product {} is priced in {}, site currency is {}",
                product.id, product.price.currency, currency
            )));
        }

        Ok(Self {
            config,
            catalog,
            currency,
        })
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Render a page route.
    pub fn page(&self, route: Route) -> Result<RenderedPage, PageError> {
        match route {
            Route::Home => Ok(self.home()),
            Route::Privacy | Route::Terms | Route::Returns => {
                let doc = LegalDocument::for_route(route, &self.config).ok_or_else(|| {
                    PageError::Render(format!("no legal document for {}", route.name()))
                })?;
                Ok(self.legal(&doc))
            }
            Route::AddToCart => Err(PageError::Render(format!(
                "{} is not a page",
                route.path()
            ))),
        }
    }

    /// Render a page route to a complete document.
    pub fn render(&self, route: Route) -> Result<String, PageError> {
        Ok(self.page(route)?.to_html())
    }

    /// The 404 page for an unknown path.
    pub fn not_found(&self, path: &str) -> RenderedPage {
        let mut meta = self.meta(Some("Page Not Found"), "", path);
        meta.indexable = false;

        RenderedPage {
            route: None,
            shell: page_shell(&self.config, &meta, None),
            meta,
            sections: vec![Section::new("not-found", render_not_found(path))],
        }
    }

    fn home(&self) -> RenderedPage {
        let content = HomeContent::for_site(&self.config);
        let grid = ProductGrid::featured(&self.catalog);
        let meta = self.meta(None, &self.config.description, Route::Home.path());

        let sections = vec![
            Section::new("hero", render_hero(&content.hero)),
            Section::new("values", render_values(&content.values)),
            Section::new("products", render_products(&content.shop, &grid)),
            Section::new("story", render_story(&content.story)),
            Section::new("testimonials", render_testimonials(&content.testimonials)),
            Section::new("faq", render_faq(&content.faq)),
            Section::new(
                "newsletter",
                render_newsletter(&content.newsletter, &self.config.newsletter),
            ),
        ];

        RenderedPage {
            route: Some(Route::Home),
            shell: page_shell(&self.config, &meta, Some(Route::Home)),
            meta,
            sections,
        }
    }

    fn legal(&self, doc: &LegalDocument) -> RenderedPage {
        let mut meta = self.meta(Some(doc.title.as_str()), &doc.description, doc.route.path());
        meta.keywords = doc.keywords.clone();

        let mut sections = vec![Section::new(
            "legal-header",
            render_legal_header(doc, &self.config),
        )];
        sections.extend(
            doc.sections
                .iter()
                .map(|s| Section::new(s.id.clone(), render_legal_section(s, &self.config))),
        );

        RenderedPage {
            route: Some(doc.route),
            shell: page_shell(&self.config, &meta, Some(doc.route)),
            meta,
            sections,
        }
    }

    fn meta(&self, page_title: Option<&str>, description: &str, path: &str) -> PageMeta {
        let config = &self.config;
        let mut meta = PageMeta::new(config.title_for(page_title), config.page_url(path));

        meta.description = if description.is_empty() {
            config.description.clone()
        } else {
            description.to_string()
        };
        meta.keywords = config.keywords.clone();
        meta.site_name = config.brand.clone();
        meta.locale = config.locale.clone();
        meta.twitter_creator = Some(config.twitter_handle.clone()).filter(|h| !h.is_empty());
        meta.theme_color = Some(config.theme_color.clone());
        meta
    }
}
