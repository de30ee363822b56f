//! `/api/products`: read-only catalog queries.

use super::error::ApiError;
use super::AppState;
use crate::model::{Category, Product, ProductId, StockUnit};
use axum::extract::rejection::PathRejection;
use axum::extract::{Path, Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub struct ProductListResponse {
    pub success: bool,
    pub products: Vec<Product>,
}

#[derive(Debug, Serialize)]
pub struct ProductResponse {
    pub success: bool,
    pub product: Product,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StockResponse {
    pub success: bool,
    pub product_id: ProductId,
    pub stock: u32,
    #[serde(rename = "stockType")]
    pub stock_unit: StockUnit,
    pub out_of_stock: bool,
    pub running_low: bool,
}

#[derive(Debug, Deserialize)]
pub struct CatalogQuery {
    pub category: Option<String>,
}

fn product_id(path: Result<Path<u32>, PathRejection>) -> Result<ProductId, ApiError> {
    path.map(|Path(id)| ProductId(id))
        .map_err(|e| ApiError::Validation(e.body_text()))
}

/// `GET /api/products?category=`
pub async fn list_products(
    State(state): State<AppState>,
    Query(query): Query<CatalogQuery>,
) -> Result<Json<ProductListResponse>, ApiError> {
    let category = match query.category.as_deref() {
        None | Some("") => None,
        Some(slug) => Some(
            Category::from_slug(slug)
                .ok_or_else(|| ApiError::Validation(format!("Unknown category: {slug}")))?,
        ),
    };
    let products = state.products.list_products(category).await?;
    Ok(Json(ProductListResponse {
        success: true,
        products,
    }))
}

/// `GET /api/products/{id}`
pub async fn get_product(
    State(state): State<AppState>,
    path: Result<Path<u32>, PathRejection>,
) -> Result<Json<ProductResponse>, ApiError> {
    let product = state.products.get_product(product_id(path)?).await?;
    Ok(Json(ProductResponse {
        success: true,
        product,
    }))
}

/// `GET /api/products/{id}/stock`
pub async fn product_stock(
    State(state): State<AppState>,
    path: Result<Path<u32>, PathRejection>,
) -> Result<Json<StockResponse>, ApiError> {
    let id = product_id(path)?;
    let product = state.products.get_product(id).await?;
    let stock = state.products.check_stock(id).await?;
    Ok(Json(StockResponse {
        success: true,
        product_id: id,
        stock,
        stock_unit: product.stock_unit,
        out_of_stock: product.is_out_of_stock(),
        running_low: product.is_running_low(),
    }))
}
