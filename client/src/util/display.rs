//! Text and image helpers for the cart header and pages.

use cart::CartLineItem;

#[cfg(test)]
#[path = "display_test.rs"]
mod display_test;

/// Fixed currency symbol; amounts are shown without further formatting.
pub const CURRENCY_SYMBOL: &str = "₹";

/// Shown when a line item has no image or its image fails to load.
pub const PLACEHOLDER_IMAGE_URL: &str = "https://via.placeholder.com/60";

/// `₹1000`, `₹12.5`: the plain number after the symbol.
pub fn format_price(amount: f64) -> String {
    format!("{CURRENCY_SYMBOL}{amount}")
}

/// `₹500 × 2` for one dropdown row.
pub fn line_price_label(item: &CartLineItem) -> String {
    format!("{} × {}", format_price(item.unit_price), item.quantity)
}

/// Cart button text, with the unit count once the cart is non-empty.
pub fn cart_button_label(item_count: u32) -> String {
    if item_count > 0 {
        format!("🛒 Cart ({item_count})")
    } else {
        "🛒 Cart".to_owned()
    }
}

/// Image URL to render, falling back to the placeholder for missing or blank URLs.
pub fn image_src(url: Option<&str>) -> &str {
    match url.map(str::trim) {
        Some(url) if !url.is_empty() => url,
        _ => PLACEHOLDER_IMAGE_URL,
    }
}
