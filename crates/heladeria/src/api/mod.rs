//! # HTTP API
//!
//! The axum router in front of the actors. Handlers hold clones of the actor clients
//! and never touch state directly.
//!
//! | Method | Path | Handler |
//! |---|---|---|
//! | POST | `/api/orders` | [`orders::submit_order`] |
//! | GET | `/api/orders` | [`orders::get_orders`] |
//! | GET | `/api/products` | [`products::list_products`] |
//! | GET | `/api/products/{id}` | [`products::get_product`] |
//! | GET | `/api/products/{id}/stock` | [`products::product_stock`] |
//! | GET | `/api/admin/stats` | [`admin::catalog_stats`] |
//! | GET | `/api/admin/orders` | [`admin::search_orders`] |
//! | GET | `/api/admin/orders/summary` | [`admin::order_summary`] |
//! | POST | `/api/admin/orders/{id}/status` | [`admin::request_status_change`] |
//! | GET | `/health` | liveness |

pub mod admin;
pub mod error;
pub mod orders;
pub mod products;

pub use error::ApiError;

use crate::clients::{OrderClient, ProductClient};
use crate::lifecycle::OrderSystem;
use axum::routing::{get, post};
use axum::{Json, Router};
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    pub products: ProductClient,
    pub orders: OrderClient,
}

impl AppState {
    pub fn new(system: &OrderSystem) -> Self {
        Self {
            products: system.product_client.clone(),
            orders: system.order_client.clone(),
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/orders",
            post(orders::submit_order).get(orders::get_orders),
        )
        .route("/api/products", get(products::list_products))
        .route("/api/products/{id}", get(products::get_product))
        .route("/api/products/{id}/stock", get(products::product_stock))
        .route("/api/admin/stats", get(admin::catalog_stats))
        .route("/api/admin/orders", get(admin::search_orders))
        .route("/api/admin/orders/summary", get(admin::order_summary))
        .route(
            "/api/admin/orders/{id}/status",
            post(admin::request_status_change),
        )
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}
