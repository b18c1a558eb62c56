//! Featured product grid.

use storefront_commerce::card::{ProductCard, ProductGrid};
use storefront_core::Route;
use storefront_streaming::escape_html;

use crate::content::ShopContent;

/// Render the shop section with one card per grid entry.
pub fn render_products(content: &ShopContent, grid: &ProductGrid<'_>) -> String {
    let cards: String = grid.iter().map(render_product_card).collect();

    format!(
        r#"<section class="shop" id="shop" data-section="products">
    <div class="section-header">
        <h2>{}</h2>
        <p>{}</p>
    </div>
    <div class="product-grid">
        {}
    </div>
    <div class="section-footer">
        <a href="{}" class="btn-outline">{}</a>
    </div>
</section>"#,
        escape_html(&content.section_title),
        escape_html(&content.section_subtitle),
        cards,
        escape_html(&content.more.href),
        escape_html(&content.more.text)
    )
}

/// Render a single product card.
///
/// The add button posts the product id to the cart endpoint and is disabled
/// whenever the card reports the product cannot be added.
pub fn render_product_card(card: &ProductCard<'_>) -> String {
    let product = card.product();
    let id = escape_html(card.id().as_str());
    let name = escape_html(&product.name);

    let badge = card
        .price()
        .badge()
        .map(|b| format!(r#"<span class="discount-badge">{}</span>"#, escape_html(&b)))
        .unwrap_or_default();

    let original = card
        .price()
        .original
        .as_ref()
        .map(|o| format!(r#"<s class="price-original">{}</s>"#, escape_html(o)))
        .unwrap_or_default();

    let (like_class, heart) = if card.is_liked() {
        ("like-button liked", "♥")
    } else {
        ("like-button", "♡")
    };

    let (disabled, add_label) = if card.add_enabled() {
        ("", "Add")
    } else {
        (" disabled aria-disabled=\"true\"", "Sold out")
    };

    format!(
        r#"<article class="product-card" data-product-id="{id}">
            <div class="product-media">
                <span class="product-image" aria-hidden="true">{image}</span>
                {badge}
                <button type="button" class="{like_class}" aria-pressed="{liked}" aria-label="Save {name} to favorites" data-product-id="{id}">{heart}</button>
            </div>
            <div class="product-body">
                <div class="product-heading">
                    <h3>{name}</h3>
                    <span class="product-rating" aria-label="Rated {rating} out of 5">★ {rating}</span>
                </div>
                <p class="product-description">{description}</p>
                <p class="product-reviews">{reviews}</p>
                <div class="product-footer">
                    <div class="product-price">
                        <span class="price-current">{current}</span>
                        {original}
                    </div>
                    <form class="add-to-cart" action="{action}" method="POST">
                        <input type="hidden" name="product_id" value="{id}">
                        <button type="submit"{disabled}>🛒 <span>{add_label}</span></button>
                    </form>
                </div>
            </div>
        </article>"#,
        id = id,
        image = escape_html(&product.image),
        badge = badge,
        like_class = like_class,
        liked = card.is_liked(),
        name = name,
        heart = heart,
        rating = card.rating_label(),
        description = escape_html(&product.description),
        reviews = card.reviews_label(),
        current = escape_html(&card.price().current),
        original = original,
        action = Route::AddToCart.path(),
        disabled = disabled,
        add_label = add_label,
    )
}
