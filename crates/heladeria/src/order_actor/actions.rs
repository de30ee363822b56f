//! Custom actions for the Order actor.

use crate::model::{Order, OrderStatus};

#[derive(Debug, Clone)]
pub enum OrderAction {
    /// An admin asked to move the order to another status.
    ///
    /// The request is recorded in the log only. The stored order keeps its status.
    RequestStatusChange(OrderStatus),
}

/// Results from OrderActions - variants match 1:1 with OrderAction
#[derive(Debug, Clone)]
pub enum OrderActionResult {
    /// The order as stored, unchanged.
    RequestStatusChange(Order),
}
