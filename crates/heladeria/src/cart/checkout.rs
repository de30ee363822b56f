use crate::model::{CartState, CustomerInfo, OrderCreate, PaymentMethod};
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CheckoutError {
    #[error("Cart is empty")]
    EmptyCart,
    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),
}

/// Builds the order submission for `cart`.
///
/// Checks what the checkout form requires: a non-empty cart plus name, email, phone,
/// address and city. The total sent is the cart's derived total.
pub fn prepare_checkout(
    cart: &CartState,
    customer: CustomerInfo,
    payment: PaymentMethod,
) -> Result<OrderCreate, CheckoutError> {
    if cart.is_empty() {
        return Err(CheckoutError::EmptyCart);
    }
    let missing = customer.missing_checkout_fields();
    if !missing.is_empty() {
        return Err(CheckoutError::MissingFields(missing));
    }
    Ok(OrderCreate {
        customer_info: customer,
        items: cart.items().to_vec(),
        payment_method: payment,
        total: i64::try_from(cart.total()).unwrap_or(i64::MAX),
    })
}
