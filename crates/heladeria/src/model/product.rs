/// A product in the storefront catalog.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](actor_framework::ActorEntity) trait,
/// allowing it to be managed by a [`ResourceActor`](actor_framework::ResourceActor).
///
/// See [`impl ActorEntity for Product`](#impl-ActorEntity-for-Product) for details on:
/// - Creation parameters ([`ProductCreate`])
/// - Custom actions ([`ProductAction`](crate::product_actor::ProductAction))
///
/// Products are reference data. Carts hold snapshots of them by value and nothing in
/// the system writes back to the catalog.
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// A product with less stock than this shows a "last units" badge.
pub const LOW_STOCK_BADGE_THRESHOLD: u32 = 10;

/// A product with less stock than this is counted as needing restock on the dashboard.
pub const RESTOCK_THRESHOLD: u32 = 20;

/// Type-safe identifier for Products.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u32);

impl From<u32> for ProductId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Catalog section a product is listed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Ice-cream bars on a stick.
    #[serde(rename = "palitos")]
    Bars,
    /// Individual ice-cream cups.
    #[serde(rename = "tacitas")]
    Cups,
    #[serde(rename = "conos")]
    Cones,
    /// Frozen cakes.
    #[serde(rename = "tortas")]
    Cakes,
    #[serde(rename = "postres")]
    Desserts,
    /// Frozen regional baked goods.
    #[serde(rename = "criollos")]
    Criollos,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Bars,
        Category::Cups,
        Category::Cones,
        Category::Cakes,
        Category::Desserts,
        Category::Criollos,
    ];

    /// The literal used on the wire and in storefront URLs.
    pub fn slug(self) -> &'static str {
        match self {
            Category::Bars => "palitos",
            Category::Cups => "tacitas",
            Category::Cones => "conos",
            Category::Cakes => "tortas",
            Category::Desserts => "postres",
            Category::Criollos => "criollos",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.slug() == slug)
    }
}

/// Unit the stock count of a product is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StockUnit {
    #[serde(rename = "unidad")]
    Unit,
    #[serde(rename = "bolsa")]
    Bag,
    #[serde(rename = "kilo")]
    Kilogram,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub category: Category,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flavors: Option<Vec<String>>,
    /// Unit price in the smallest currency unit.
    pub price: u32,
    #[serde(rename = "stockType")]
    pub stock_unit: StockUnit,
    pub stock: u32,
    pub image_url: String,
    pub description: String,
}

impl Product {
    pub fn from_params(id: ProductId, params: ProductCreate) -> Self {
        Self {
            id,
            name: params.name,
            category: params.category,
            flavors: params.flavors,
            price: params.price,
            stock_unit: params.stock_unit,
            stock: params.stock,
            image_url: params.image_url,
            description: params.description,
        }
    }

    pub fn is_out_of_stock(&self) -> bool {
        self.stock == 0
    }

    pub fn is_running_low(&self) -> bool {
        self.stock < LOW_STOCK_BADGE_THRESHOLD
    }

    pub fn needs_restock(&self) -> bool {
        self.stock < RESTOCK_THRESHOLD
    }

    /// Whether `flavor` is one this product is sold in. Products without a flavor list
    /// accept none.
    pub fn offers_flavor(&self, flavor: &str) -> bool {
        self.flavors
            .as_ref()
            .is_some_and(|flavors| flavors.iter().any(|f| f == flavor))
    }
}

/// Payload for adding a product to the catalog actor.
#[derive(Debug, Clone)]
pub struct ProductCreate {
    pub name: String,
    pub category: Category,
    pub flavors: Option<Vec<String>>,
    pub price: u32,
    pub stock_unit: StockUnit,
    pub stock: u32,
    pub image_url: String,
    pub description: String,
}

/// Aggregate figures shown on the admin dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogStats {
    pub total_products: usize,
    pub low_stock_products: usize,
    pub total_stock: u64,
    /// Mean unit price, rounded half up. Zero for an empty catalog.
    pub average_price: u64,
}

impl CatalogStats {
    pub fn from_products(products: &[Product]) -> Self {
        let total_products = products.len();
        let price_sum: u64 = products.iter().map(|p| u64::from(p.price)).sum();
        let average_price = match total_products as u64 {
            0 => 0,
            n => (price_sum + n / 2) / n,
        };
        Self {
            total_products,
            low_stock_products: products.iter().filter(|p| p.needs_restock()).count(),
            total_stock: products.iter().map(|p| u64::from(p.stock)).sum(),
            average_price,
        }
    }
}
