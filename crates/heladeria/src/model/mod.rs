//! Plain data types shared by the cart, the actors and the HTTP layer.
//!
//! [`Product`] and [`Order`] are the two actor-managed entities. The cart types never
//! leave the client session except as the item list of an [`OrderCreate`].

pub mod cart;
pub mod customer;
pub mod order;
pub mod product;

pub use cart::*;
pub use customer::*;
pub use order::*;
pub use product::*;
