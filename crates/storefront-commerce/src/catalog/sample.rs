//! The featured collection the storefront ships with.

use crate::catalog::Product;
use crate::money::{Currency, Money};

fn usd(cents: i64) -> Money {
    Money::new(cents, Currency::USD)
}

pub(crate) fn products() -> Vec<Product> {
    vec![
        Product::new("pride-flag-tee", "Classic Pride Flag Tee", usd(2899))
            .with_original_price(usd(3299))
            .with_image("🏳️‍🌈")
            .with_description("Soft cotton blend tee with vibrant pride flag design. Unisex fit.")
            .with_rating(4.8, 127)
            .with_category("apparel")
            .featured(true),
        Product::new("love-wins-mug", "Love Wins Coffee Mug", usd(1699))
            .with_image("☕")
            .with_description("Ceramic mug with inspiring message. Microwave and dishwasher safe.")
            .with_rating(4.9, 89)
            .with_category("home")
            .featured(true),
        Product::new("rainbow-pin-set", "Rainbow Pin Collection", usd(1299))
            .with_original_price(usd(1599))
            .with_image("📌")
            .with_description("Set of 6 enamel pins featuring diverse pride flags.")
            .with_rating(4.7, 203)
            .with_category("accessories")
            .featured(true),
        Product::new("unity-hoodie", "Unity Embroidered Hoodie", usd(5499))
            .with_original_price(usd(6499))
            .with_image("👕")
            .with_description("Premium hoodie with embroidered unity design. Limited edition.")
            .with_rating(4.9, 156)
            .with_category("apparel")
            .featured(true),
    ]
}
