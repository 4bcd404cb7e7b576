//! # Domain Entities
//!
//! Core business objects of the storefront.
//!
//! - **Product**: A catalog item with price and stock
//! - **Order**: A placed order with delivery details and its line snapshot
//! - **Cart**: A session's (product, quantity) lines
//!
//! ## Repository Traits
//!
//! Products and orders each have a repository trait defining data access.
//! Implementations live in the infrastructure layer.

mod cart;
mod order;
mod product;

pub use cart::{Cart, CartError, CartLine, SessionCart};
pub use order::{Order, OrderLine, OrderRepository};
pub use product::{Product, ProductRepository};

#[cfg(test)]
pub use cart::MockCart;
#[cfg(test)]
pub use order::MockOrderRepository;
#[cfg(test)]
pub use product::MockProductRepository;
