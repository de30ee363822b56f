//! `/api/admin`: the computations behind the admin panel.

use super::error::ApiError;
use super::AppState;
use crate::model::{CatalogStats, Order, OrderFilter, OrderId, OrderStatus, OrderSummary};
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub success: bool,
    pub stats: CatalogStats,
}

#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    pub success: bool,
    pub summary: OrderSummary,
}

#[derive(Debug, Serialize)]
pub struct AdminOrdersResponse {
    pub success: bool,
    pub orders: Vec<Order>,
}

#[derive(Debug, Serialize)]
pub struct StatusChangeResponse {
    pub success: bool,
    /// The order as stored. Status changes are not applied.
    pub order: Order,
}

#[derive(Debug, Deserialize)]
pub struct StatusChangeRequest {
    pub status: OrderStatus,
}

/// `GET /api/admin/stats`
pub async fn catalog_stats(
    State(state): State<AppState>,
) -> Result<Json<StatsResponse>, ApiError> {
    let stats = state.products.stats().await?;
    Ok(Json(StatsResponse {
        success: true,
        stats,
    }))
}

/// `GET /api/admin/orders?status=&q=`
pub async fn search_orders(
    State(state): State<AppState>,
    filter: Result<Query<OrderFilter>, QueryRejection>,
) -> Result<Json<AdminOrdersResponse>, ApiError> {
    let Query(filter) = filter.map_err(|e| ApiError::Validation(e.body_text()))?;
    let orders = state.orders.search_orders(&filter).await?;
    Ok(Json(AdminOrdersResponse {
        success: true,
        orders,
    }))
}

/// `GET /api/admin/orders/summary`
pub async fn order_summary(
    State(state): State<AppState>,
) -> Result<Json<SummaryResponse>, ApiError> {
    let summary = state.orders.summary().await?;
    Ok(Json(SummaryResponse {
        success: true,
        summary,
    }))
}

/// `POST /api/admin/orders/{id}/status`
pub async fn request_status_change(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<StatusChangeRequest>, JsonRejection>,
) -> Result<Json<StatusChangeResponse>, ApiError> {
    let Json(request) = body.map_err(|e| ApiError::Validation(e.body_text()))?;
    let order = state
        .orders
        .request_status_change(OrderId(id), request.status)
        .await?;
    Ok(Json(StatusChangeResponse {
        success: true,
        order,
    }))
}
