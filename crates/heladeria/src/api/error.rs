//! The one error type every handler returns.
//!
//! Every failure reaches the client as `{"success": false, "error": <message>}`.
//! Internal failures are logged here and answered with a generic message.

use crate::order_actor::OrderError;
use crate::product_actor::ProductError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

#[derive(Debug, Error)]
pub enum ApiError {
    /// 400
    #[error("{0}")]
    Validation(String),
    /// 404
    #[error("{0}")]
    NotFound(String),
    /// 500. The detail is logged, never sent.
    #[error("Internal server error")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<OrderError> for ApiError {
    fn from(e: OrderError) -> Self {
        match e {
            OrderError::Validation(msg) => ApiError::Validation(msg),
            OrderError::NotFound(_) => ApiError::NotFound(e.to_string()),
            OrderError::Immutable(_) | OrderError::ActorCommunicationError(_) => {
                ApiError::Internal(e.to_string())
            }
        }
    }
}

impl From<ProductError> for ApiError {
    fn from(e: ProductError) -> Self {
        match e {
            ProductError::NotFound(_) => ApiError::NotFound(e.to_string()),
            ProductError::ReadOnly(_)
            | ProductError::SeedOutOfOrder { .. }
            | ProductError::ActorCommunicationError(_) => ApiError::Internal(e.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Internal(detail) = &self {
            tracing::error!(error = %detail, "Request failed");
        }
        let body = Json(json!({
            "success": false,
            "error": self.to_string(),
        }));
        (self.status(), body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_errors_map_to_status() {
        let validation = ApiError::from(OrderError::Validation("Order has no items".into()));
        assert_eq!(validation.status(), StatusCode::BAD_REQUEST);
        assert_eq!(validation.to_string(), "Order has no items");

        let missing = ApiError::from(OrderError::NotFound("ORD-1-x".into()));
        assert_eq!(missing.status(), StatusCode::NOT_FOUND);
        assert_eq!(missing.to_string(), "Order not found: ORD-1-x");

        let missing = ApiError::from(ProductError::NotFound("40".into()));
        assert_eq!(missing.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_internal_detail_is_hidden() {
        let err = ApiError::from(OrderError::ActorCommunicationError("Actor closed".into()));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), INTERNAL_ERROR_MESSAGE);
    }
}
