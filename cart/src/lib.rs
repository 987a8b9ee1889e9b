//! Shopping-cart model shared by the storefront UI and server.
//!
//! This crate owns the stored representation of the cart (a JSON array under
//! a fixed key in a string-keyed store), the derived aggregates shown in the
//! header, and the storage boundary. It has no browser dependencies so the
//! same logic runs in WASM, on the SSR server and in tests.

mod line_item;
mod memory;
mod store;

pub use line_item::{CartLineItem, ProductId};
pub use memory::MemoryStore;
pub use store::{CART_STORAGE_KEY, CartSnapshot, CartStoreAdapter, KeyValueStore, StoreError};

use serde::{Deserialize, Serialize};

/// Error returned by validated cart mutations.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum CartError {
    /// Line items must carry at least one unit.
    #[error("quantity must be positive for product {0}")]
    InvalidQuantity(ProductId),
    /// Prices must be finite and non-negative.
    #[error("invalid price {price} for product {product_id}")]
    InvalidPrice { product_id: ProductId, price: f64 },
}

/// Ordered sequence of line items, stored as a bare JSON array.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<CartLineItem>,
}

impl Cart {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CartLineItem> {
        self.items.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// First line item with the given product id.
    #[must_use]
    pub fn get(&self, product_id: &ProductId) -> Option<&CartLineItem> {
        self.items.iter().find(|item| &item.product_id == product_id)
    }

    /// Total number of units across all lines. Zero for an empty cart.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.items
            .iter()
            .fold(0u32, |acc, item| acc.saturating_add(item.quantity))
    }

    /// Sum of `unit_price * quantity` over all lines, with no rounding.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.items.iter().map(CartLineItem::subtotal).sum()
    }

    /// A copy of this cart without any line whose id equals `product_id`.
    ///
    /// Returns an equal cart when nothing matches.
    #[must_use]
    pub fn without(&self, product_id: &ProductId) -> Self {
        Self {
            items: self
                .items
                .iter()
                .filter(|item| &item.product_id != product_id)
                .cloned()
                .collect(),
        }
    }

    /// Insert a line, merging quantities when the product is already present.
    ///
    /// A merged line keeps its position and takes the incoming name, price and
    /// image so the cart reflects the latest product data.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::InvalidQuantity`] for a zero quantity and
    /// [`CartError::InvalidPrice`] for a negative or non-finite price.
    pub fn add(&mut self, item: CartLineItem) -> Result<(), CartError> {
        if item.quantity == 0 {
            return Err(CartError::InvalidQuantity(item.product_id));
        }
        if !item.unit_price.is_finite() || item.unit_price < 0.0 {
            return Err(CartError::InvalidPrice { product_id: item.product_id, price: item.unit_price });
        }

        match self.items.iter_mut().find(|line| line.product_id == item.product_id) {
            Some(line) => {
                line.quantity = line.quantity.saturating_add(item.quantity);
                line.name = item.name;
                line.unit_price = item.unit_price;
                if item.image_url.is_some() {
                    line.image_url = item.image_url;
                }
                line.extra.extend(item.extra);
            }
            None => self.items.push(item),
        }
        Ok(())
    }
}

impl From<Vec<CartLineItem>> for Cart {
    fn from(items: Vec<CartLineItem>) -> Self {
        Self { items }
    }
}

impl FromIterator<CartLineItem> for Cart {
    fn from_iter<I: IntoIterator<Item = CartLineItem>>(iter: I) -> Self {
        Self { items: iter.into_iter().collect() }
    }
}

impl<'a> IntoIterator for &'a Cart {
    type Item = &'a CartLineItem;
    type IntoIter = std::slice::Iter<'a, CartLineItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;
