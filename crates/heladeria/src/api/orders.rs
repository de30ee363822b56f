//! `/api/orders`: checkout submission and order lookup.

use super::error::ApiError;
use super::AppState;
use crate::model::{Order, OrderCreate, OrderId};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Query, State};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub struct OrderResponse {
    pub success: bool,
    pub order: Order,
}

#[derive(Debug, Serialize)]
pub struct OrderListResponse {
    pub success: bool,
    pub orders: Vec<Order>,
}

#[derive(Debug, Deserialize)]
pub struct OrderLookup {
    pub id: Option<String>,
}

/// `POST /api/orders`
///
/// A body that is not valid JSON for an order counts as an internal error, like any
/// other unexpected failure during submission.
pub async fn submit_order(
    State(state): State<AppState>,
    payload: Result<Json<OrderCreate>, JsonRejection>,
) -> Result<Json<OrderResponse>, ApiError> {
    let Json(params) = payload.map_err(|e| ApiError::Internal(e.body_text()))?;
    let order = state.orders.submit_order(params).await?;
    Ok(Json(OrderResponse {
        success: true,
        order,
    }))
}

/// `GET /api/orders?id=`
///
/// One order when `id` is given, otherwise every order in submission order.
pub async fn get_orders(
    State(state): State<AppState>,
    Query(lookup): Query<OrderLookup>,
) -> Result<Response, ApiError> {
    match lookup.id.filter(|id| !id.is_empty()) {
        Some(id) => {
            let order = state.orders.find_order(OrderId(id)).await?;
            Ok(Json(OrderResponse {
                success: true,
                order,
            })
            .into_response())
        }
        None => {
            let orders = state.orders.search_orders(&Default::default()).await?;
            Ok(Json(OrderListResponse {
                success: true,
                orders,
            })
            .into_response())
        }
    }
}
