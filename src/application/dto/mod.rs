//! Data Transfer Objects
//!
//! View models exchanged with the presentation layer.

pub mod order;
pub mod product;

pub use order::OrderViewModel;
pub use product::{ProductValidationError, ProductViewModel};
