//! Custom actions for the Product actor.
//!
//! The catalog is read-only, so the only action reads the stock level. It is handled
//! by [`ActorEntity::handle_action`](actor_framework::ActorEntity::handle_action).

#[derive(Debug, Clone)]
pub enum ProductAction {
    /// Reads the current stock level without modifying it.
    CheckStock,
}

/// Results from ProductActions - variants match 1:1 with ProductAction
#[derive(Debug, Clone)]
pub enum ProductActionResult {
    CheckStock(u32),
}
