//! A single product entry in the cart and its stored JSON shape.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[cfg(test)]
#[path = "line_item_test.rs"]
mod line_item_test;

/// Product identifier as written by the storefront: either a number or a string.
///
/// Equality is strict, so `ProductId::Number(1)` never matches `ProductId::Text("1")`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProductId {
    Number(i64),
    Text(String),
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for ProductId {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for ProductId {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for ProductId {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// One product-quantity pairing in the cart.
///
/// Field names on the wire are `productId`, `pname`, `price`, `quantity` and
/// `imageUrl`. Unknown fields are kept in `extra` and written back on save.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CartLineItem {
    #[serde(rename = "productId")]
    pub product_id: ProductId,
    #[serde(rename = "pname", default)]
    pub name: String,
    #[serde(rename = "price")]
    pub unit_price: f64,
    pub quantity: u32,
    #[serde(rename = "imageUrl", default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CartLineItem {
    /// Build a line item with no image and no extra fields.
    pub fn new(product_id: impl Into<ProductId>, name: impl Into<String>, unit_price: f64, quantity: u32) -> Self {
        Self {
            product_id: product_id.into(),
            name: name.into(),
            unit_price,
            quantity,
            image_url: None,
            extra: Map::new(),
        }
    }

    #[must_use]
    pub fn with_image_url(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }

    /// `unit_price * quantity` for this line.
    #[must_use]
    pub fn subtotal(&self) -> f64 {
        self.unit_price * f64::from(self.quantity)
    }
}
