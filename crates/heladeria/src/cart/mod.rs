//! # Cart
//!
//! The shopping cart of one browsing session.
//!
//! State changes go through [`reduce`], a pure function from the current [`CartState`]
//! and a [`CartCommand`] to the next state. Every command either applies in full or
//! leaves the state as it was, and the total is recomputed from the items each time.
//!
//! ```rust
//! use heladeria::cart::{reduce, CartCommand};
//! use heladeria::catalog;
//! use heladeria::model::CartState;
//!
//! let palito = catalog::products().remove(0);
//! let state = reduce(
//!     &CartState::default(),
//!     CartCommand::AddItem {
//!         product: palito,
//!         quantity: 3,
//!         selected_flavor: Some("Limón".into()),
//!     },
//! );
//! assert_eq!(state.total(), 1500);
//! assert_eq!(state.item_count(), 3);
//! ```
//!
//! - [`store`] - key-value persistence the session is saved to between visits
//! - [`session`] - [`CartSession`], the reducer wired to a store
//! - [`checkout`] - turning a cart into an order submission

pub mod checkout;
pub mod session;
pub mod store;

pub use checkout::*;
pub use session::*;
pub use store::*;

use crate::model::{CartItem, CartState, Product, ProductId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartCommand {
    /// Adds `quantity` units, merging into the line with the same product and flavor.
    AddItem {
        product: Product,
        quantity: u32,
        selected_flavor: Option<String>,
    },
    RemoveItem {
        product_id: ProductId,
        selected_flavor: Option<String>,
    },
    /// Overwrites the quantity of a line. Zero or below removes it.
    UpdateQuantity {
        product_id: ProductId,
        quantity: i64,
        selected_flavor: Option<String>,
    },
    Clear,
    /// Replaces the whole state, as when hydrating a saved cart.
    Load(CartState),
}

/// Computes the state that results from applying `command` to `state`.
pub fn reduce(state: &CartState, command: CartCommand) -> CartState {
    match command {
        CartCommand::AddItem {
            product,
            quantity,
            selected_flavor,
        } => {
            if quantity == 0 {
                return state.clone();
            }
            let mut items = state.items().to_vec();
            match items
                .iter_mut()
                .find(|item| item.matches(product.id, selected_flavor.as_deref()))
            {
                Some(existing) => existing.quantity = existing.quantity.saturating_add(quantity),
                None => items.push(CartItem {
                    product,
                    quantity,
                    selected_flavor,
                }),
            }
            CartState::from_items(items)
        }
        CartCommand::RemoveItem {
            product_id,
            selected_flavor,
        } => remove(state, product_id, selected_flavor.as_deref()),
        CartCommand::UpdateQuantity {
            product_id,
            quantity,
            selected_flavor,
        } => {
            if quantity <= 0 {
                return remove(state, product_id, selected_flavor.as_deref());
            }
            let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
            let items = state
                .items()
                .iter()
                .cloned()
                .map(|mut item| {
                    if item.matches(product_id, selected_flavor.as_deref()) {
                        item.quantity = quantity;
                    }
                    item
                })
                .collect();
            CartState::from_items(items)
        }
        CartCommand::Clear => CartState::default(),
        // The saved total is not trusted.
        CartCommand::Load(loaded) => CartState::from_items(loaded.into_items()),
    }
}

fn remove(state: &CartState, product_id: ProductId, flavor: Option<&str>) -> CartState {
    CartState::from_items(
        state
            .items()
            .iter()
            .filter(|item| !item.matches(product_id, flavor))
            .cloned()
            .collect(),
    )
}

impl CartState {
    /// Method form of [`reduce`].
    pub fn apply(&self, command: CartCommand) -> CartState {
        reduce(self, command)
    }
}
