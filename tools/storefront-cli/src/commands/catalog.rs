//! Catalog validation and price report.

use std::fs;

use anyhow::{anyhow, Context as _, Result};
use serde::Serialize;
use storefront_commerce::catalog::{Catalog, Product};
use storefront_commerce::pricing::PriceDisplay;
use storefront_commerce::Currency;

use super::{CatalogArgs, CatalogFormat};
use crate::context::Context;
use crate::output::{stock_badge, Output};

const COLUMN_WIDTHS: [usize; 6] = [18, 22, 9, 9, 6, 8];

/// One catalog line as printed or serialized.
#[derive(Debug, Serialize)]
pub struct ProductReport {
    pub id: String,
    pub name: String,
    pub category: String,
    pub featured: bool,
    pub in_stock: bool,
    #[serde(flatten)]
    pub price: PriceDisplay,
    pub badge: Option<String>,
}

impl From<&Product> for ProductReport {
    fn from(product: &Product) -> Self {
        let price = PriceDisplay::for_product(product);
        Self {
            id: product.id.to_string(),
            name: product.name.clone(),
            category: product.category.clone(),
            featured: product.featured,
            in_stock: product.in_stock,
            badge: price.badge(),
            price,
        }
    }
}

/// Run the catalog command.
pub fn run(args: CatalogArgs, ctx: &Context) -> Result<()> {
    let currency = Currency::from_code(&ctx.config.currency)
        .ok_or_else(|| anyhow!("Unsupported site currency {:?}", ctx.config.currency))?;

    let catalog = match &args.file {
        Some(file) => {
            let path = ctx.resolve_path(file);
            let json = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            Catalog::from_json(&json, currency)
                .with_context(|| format!("Invalid catalog {}", path.display()))?
        }
        None => Catalog::sample(),
    };
    tracing::debug!(products = catalog.len(), "catalog validated");

    let reports = report(&catalog, args.featured);

    match args.format {
        CatalogFormat::Json => ctx.output.json(&reports),
        CatalogFormat::Table if ctx.output.is_json() => ctx.output.json(&reports),
        CatalogFormat::Table => print_table(&ctx.output, &reports, catalog.len()),
    }

    Ok(())
}

/// Build the report lines, optionally only for featured products.
pub fn report(catalog: &Catalog, featured_only: bool) -> Vec<ProductReport> {
    catalog
        .iter()
        .filter(|p| !featured_only || p.featured)
        .map(ProductReport::from)
        .collect()
}

fn print_table(output: &Output, reports: &[ProductReport], total: usize) {
    output.header("Catalog");
    output.table_row(
        &["ID", "NAME", "PRICE", "WAS", "OFF", "STOCK"],
        &COLUMN_WIDTHS,
    );

    for line in reports {
        output.table_row(
            &[
                line.id.as_str(),
                line.name.as_str(),
                line.price.current.as_str(),
                line.price.original.as_deref().unwrap_or("-"),
                line.badge.as_deref().unwrap_or(""),
                stock_badge(line.in_stock).as_str(),
            ],
            &COLUMN_WIDTHS,
        );
    }

    let on_sale = reports.iter().filter(|r| r.badge.is_some()).count();
    output.success(&format!(
        "{} products valid, {} listed, {} on sale",
        total,
        reports.len(),
        on_sale
    ));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_carries_discounts() {
        let reports = report(&Catalog::sample(), false);
        assert_eq!(reports.len(), 4);

        let tee = reports.iter().find(|r| r.id == "pride-flag-tee").unwrap();
        assert_eq!(tee.badge.as_deref(), Some("-12%"));
        assert_eq!(tee.price.current, "$28.99");
        assert_eq!(tee.price.original.as_deref(), Some("$32.99"));
    }

    #[test]
    fn test_report_json_shape() {
        let reports = report(&Catalog::sample(), false);
        let value = serde_json::to_value(&reports[0]).unwrap();
        assert!(value.get("current").is_some());
        assert!(value.get("discount_percentage").is_some());
        assert!(value.get("badge").is_some());
    }

    #[test]
    fn test_report_from_json_catalog() {
        let json = r#"[
            {"id": "a", "name": "A", "price": 10.0, "originalPrice": 20.0, "featured": true},
            {"id": "b", "name": "B", "price": 5.0}
        ]"#;
        let catalog = Catalog::from_json(json, Currency::USD).unwrap();

        let featured = report(&catalog, true);
        assert_eq!(featured.len(), 1);
        assert_eq!(featured[0].badge.as_deref(), Some("-50%"));

        let all = report(&catalog, false);
        assert_eq!(all[1].badge, None);
    }
}
