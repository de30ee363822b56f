use super::store::{CartStore, CartStoreError, CART_STORAGE_KEY};
use super::{reduce, CartCommand};
use crate::cart::checkout::{prepare_checkout, CheckoutError};
use crate::model::{CartState, CustomerInfo, OrderCreate, PaymentMethod, Product, ProductId};
use tracing::{debug, warn};

/// A cart bound to the store it persists to.
///
/// The saved cart is loaded when the session starts and written back after every
/// command. A saved value that does not parse is discarded and the session starts
/// with an empty cart.
pub struct CartSession<S: CartStore> {
    store: S,
    state: CartState,
}

impl<S: CartStore> CartSession<S> {
    pub fn new(store: S) -> Self {
        let state = match store.load(CART_STORAGE_KEY) {
            Ok(Some(saved)) => match serde_json::from_str::<CartState>(&saved) {
                Ok(loaded) => reduce(&CartState::default(), CartCommand::Load(loaded)),
                Err(e) => {
                    warn!(error = %e, "Ignoring unreadable saved cart");
                    CartState::default()
                }
            },
            Ok(None) => CartState::default(),
            Err(e) => {
                warn!(error = %e, "Could not read saved cart");
                CartState::default()
            }
        };
        debug!(items = state.items().len(), total = state.total(), "Cart session started");
        Self { store, state }
    }

    pub fn state(&self) -> &CartState {
        &self.state
    }

    pub fn item_count(&self) -> u64 {
        self.state.item_count()
    }

    /// Applies `command` and saves the result.
    ///
    /// The new state is kept even when saving fails.
    pub fn dispatch(&mut self, command: CartCommand) -> Result<&CartState, CartStoreError> {
        debug!(?command, "Cart command");
        self.state = reduce(&self.state, command);
        let encoded = serde_json::to_string(&self.state)?;
        self.store.save(CART_STORAGE_KEY, encoded)?;
        Ok(&self.state)
    }

    pub fn add_item(
        &mut self,
        product: Product,
        quantity: u32,
        selected_flavor: Option<String>,
    ) -> Result<&CartState, CartStoreError> {
        self.dispatch(CartCommand::AddItem {
            product,
            quantity,
            selected_flavor,
        })
    }

    pub fn remove_item(
        &mut self,
        product_id: ProductId,
        selected_flavor: Option<String>,
    ) -> Result<&CartState, CartStoreError> {
        self.dispatch(CartCommand::RemoveItem {
            product_id,
            selected_flavor,
        })
    }

    pub fn update_quantity(
        &mut self,
        product_id: ProductId,
        quantity: i64,
        selected_flavor: Option<String>,
    ) -> Result<&CartState, CartStoreError> {
        self.dispatch(CartCommand::UpdateQuantity {
            product_id,
            quantity,
            selected_flavor,
        })
    }

    pub fn clear(&mut self) -> Result<&CartState, CartStoreError> {
        self.dispatch(CartCommand::Clear)
    }

    /// Builds the order submission for the current cart without clearing it.
    pub fn checkout(
        &self,
        customer: CustomerInfo,
        payment: PaymentMethod,
    ) -> Result<OrderCreate, CheckoutError> {
        prepare_checkout(&self.state, customer, payment)
    }

    pub fn into_store(self) -> S {
        self.store
    }
}
