use crate::model::{Product, ProductId};
use serde::{Deserialize, Serialize};

/// One line of the cart: a snapshot of the product as it was when added.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub product: Product,
    pub quantity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_flavor: Option<String>,
}

impl CartItem {
    /// Whether this line is the entry for `(product_id, flavor)`.
    ///
    /// Two lines for the same product that differ only in flavor are distinct entries.
    pub fn matches(&self, product_id: ProductId, flavor: Option<&str>) -> bool {
        self.product.id == product_id && self.selected_flavor.as_deref() == flavor
    }

    pub fn line_total(&self) -> u64 {
        u64::from(self.product.price) * u64::from(self.quantity)
    }
}

/// The cart contents plus the derived total.
///
/// `total` is always the sum of the line totals. Only [`CartState::from_items`] builds
/// a state, so it cannot drift from `items`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartState {
    items: Vec<CartItem>,
    total: u64,
}

impl CartState {
    pub fn from_items(items: Vec<CartItem>) -> Self {
        let total = items.iter().map(CartItem::line_total).sum();
        Self { items, total }
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of units across all lines, as shown on the cart badge.
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }

    pub fn into_items(self) -> Vec<CartItem> {
        self.items
    }
}
