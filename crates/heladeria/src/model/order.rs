/// Represents a submitted customer order.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](actor_framework::ActorEntity) trait,
/// allowing it to be managed by a [`ResourceActor`](actor_framework::ResourceActor).
///
/// See [`impl ActorEntity for Order`](#impl-ActorEntity-for-Order) for details on:
/// - Creation parameters ([`OrderCreate`])
/// - Custom actions ([`OrderAction`](crate::order_actor::OrderAction))
///
/// Orders are written once at submission and never modified afterwards.
use crate::model::{CartItem, CustomerInfo, PaymentMethod};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Time between submission and the delivery estimate given to the customer.
pub const DELIVERY_ESTIMATE_HOURS: i64 = 2;

/// Type-safe identifier for Orders, shaped `ORD-<epoch millis>-<base-36 suffix>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub String);

impl From<&str> for OrderId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for OrderId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for OrderId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Confirmed,
    Preparing,
    Ready,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Confirmed => "confirmed",
            OrderStatus::Preparing => "preparing",
            OrderStatus::Ready => "ready",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub customer_info: CustomerInfo,
    pub items: Vec<CartItem>,
    pub subtotal: i64,
    pub shipping: i64,
    pub total: i64,
    pub payment_method: PaymentMethod,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_delivery: Option<DateTime<Utc>>,
}

/// Payload for submitting a new order.
///
/// Missing fields default to empty so they surface as validation errors.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OrderCreate {
    pub customer_info: CustomerInfo,
    pub items: Vec<CartItem>,
    pub payment_method: PaymentMethod,
    pub total: i64,
}

/// Shows the item count and total only. Contact details stay out of logs.
impl std::fmt::Debug for OrderCreate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrderCreate")
            .field("items", &self.items.len())
            .field("total", &self.total)
            .finish_non_exhaustive()
    }
}

impl Order {
    /// Builds a pending order submitted at `created_at`.
    ///
    /// Shipping is always free, so the subtotal is the submitted total.
    pub fn new(id: OrderId, params: OrderCreate, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            customer_info: params.customer_info,
            items: params.items,
            subtotal: params.total,
            shipping: 0,
            total: params.total,
            payment_method: params.payment_method,
            status: OrderStatus::Pending,
            created_at,
            estimated_delivery: Some(created_at + Duration::hours(DELIVERY_ESTIMATE_HOURS)),
        }
    }

    /// Case-insensitive match of `term` against the id, the customer's full name and
    /// email.
    pub fn matches_term(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.id.0.to_lowercase().contains(&term)
            || self.customer_info.full_name().to_lowercase().contains(&term)
            || self.customer_info.email.to_lowercase().contains(&term)
    }
}

/// Optional filters for the admin order list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct OrderFilter {
    #[serde(default)]
    pub status: Option<OrderStatus>,
    #[serde(default, rename = "q")]
    pub term: Option<String>,
}

impl OrderFilter {
    pub fn accepts(&self, order: &Order) -> bool {
        if self.status.is_some_and(|status| status != order.status) {
            return false;
        }
        match self.term.as_deref().map(str::trim) {
            Some(term) if !term.is_empty() => order.matches_term(term),
            _ => true,
        }
    }
}

/// Order counts grouped the way the admin orders page shows them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSummary {
    pub total: usize,
    /// Pending or confirmed.
    pub awaiting: usize,
    /// Preparing or ready.
    pub in_preparation: usize,
    pub delivered: usize,
    pub cancelled: usize,
}

impl OrderSummary {
    pub fn from_orders(orders: &[Order]) -> Self {
        orders
            .iter()
            .fold(Self::default(), |mut summary, order| {
                summary.total += 1;
                match order.status {
                    OrderStatus::Pending | OrderStatus::Confirmed => summary.awaiting += 1,
                    OrderStatus::Preparing | OrderStatus::Ready => summary.in_preparation += 1,
                    OrderStatus::Delivered => summary.delivered += 1,
                    OrderStatus::Cancelled => summary.cancelled += 1,
                }
                summary
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn order(id: &str, first: &str, last: &str, email: &str, status: OrderStatus) -> Order {
        let created_at = Utc.with_ymd_and_hms(2026, 1, 15, 18, 30, 0).unwrap();
        let params = OrderCreate {
            customer_info: CustomerInfo {
                first_name: first.into(),
                last_name: last.into(),
                email: email.into(),
                ..Default::default()
            },
            total: 2400,
            ..Default::default()
        };
        let mut order = Order::new(OrderId::from(id), params, created_at);
        order.status = status;
        order
    }

    #[test]
    fn test_new_order_defaults() {
        let o = order("ORD-1-abc", "Ana", "Gómez", "ana@example.com", OrderStatus::Pending);
        assert_eq!(o.subtotal, 2400);
        assert_eq!(o.shipping, 0);
        assert_eq!(o.status, OrderStatus::Pending);
        assert_eq!(
            o.estimated_delivery.unwrap() - o.created_at,
            Duration::hours(2)
        );
    }

    #[test]
    fn test_create_params_debug_hides_contact_details() {
        let params = OrderCreate {
            customer_info: CustomerInfo {
                first_name: "Ana".into(),
                email: "ana@example.com".into(),
                phone: "+54 381 555-0101".into(),
                address: "San Martín 450".into(),
                ..Default::default()
            },
            total: 6200,
            ..Default::default()
        };
        let shown = format!("{params:?}");
        assert_eq!(shown, "OrderCreate { items: 0, total: 6200, .. }");
        for detail in ["Ana", "ana@example.com", "555-0101", "San Martín"] {
            assert!(!shown.contains(detail), "{shown}");
        }
    }

    #[test]
    fn test_wire_format() {
        let o = order("ORD-1-abc", "Ana", "Gómez", "ana@example.com", OrderStatus::Ready);
        let json = serde_json::to_value(&o).unwrap();
        assert_eq!(json["id"], "ORD-1-abc");
        assert_eq!(json["status"], "ready");
        assert_eq!(json["customerInfo"]["firstName"], "Ana");
        assert_eq!(json["paymentMethod"]["type"], "efectivo");
        assert_eq!(json["createdAt"], "2026-01-15T18:30:00Z");
        assert_eq!(json["estimatedDelivery"], "2026-01-15T20:30:00Z");
    }

    #[test]
    fn test_filter_by_status_and_term() {
        let orders = [
            order("ORD-1-aaa", "Ana", "Gómez", "ana@example.com", OrderStatus::Pending),
            order("ORD-2-bbb", "Bruno", "Díaz", "bruno@example.com", OrderStatus::Delivered),
            order("ORD-3-ccc", "Ana", "Pérez", "aperez@example.com", OrderStatus::Delivered),
        ];

        let by_name = OrderFilter {
            term: Some("ANA G".into()),
            ..Default::default()
        };
        let hits: Vec<_> = orders.iter().filter(|o| by_name.accepts(o)).collect();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id.0, "ORD-1-aaa");

        let delivered_ana = OrderFilter {
            status: Some(OrderStatus::Delivered),
            term: Some("ana".into()),
        };
        let hits: Vec<_> = orders.iter().filter(|o| delivered_ana.accepts(o)).collect();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id.0, "ORD-3-ccc");

        let blank = OrderFilter {
            term: Some("  ".into()),
            ..Default::default()
        };
        assert!(orders.iter().all(|o| blank.accepts(o)));
    }

    #[test]
    fn test_summary_buckets() {
        let orders: Vec<Order> = [
            OrderStatus::Pending,
            OrderStatus::Confirmed,
            OrderStatus::Preparing,
            OrderStatus::Ready,
            OrderStatus::Ready,
            OrderStatus::Delivered,
            OrderStatus::Cancelled,
        ]
        .into_iter()
        .enumerate()
        .map(|(i, status)| order(&format!("ORD-{i}-x"), "A", "B", "c@d.e", status))
        .collect();

        assert_eq!(
            OrderSummary::from_orders(&orders),
            OrderSummary {
                total: 7,
                awaiting: 2,
                in_preparation: 3,
                delivered: 1,
                cancelled: 1,
            }
        );
    }
}
