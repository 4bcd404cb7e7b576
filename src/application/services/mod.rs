//! Application Services
//!
//! Business logic services that coordinate domain operations.
//!
//! ## Available Services
//!
//! - **ProductService**: Catalog queries, product forms, stock adjustment
//! - **OrderService**: Order queries and checkout
//! - **LanguageService**: UI culture selection

pub mod language_service;
pub mod order_service;
pub mod product_service;

// Re-export product service types
pub use product_service::{ProductError, ProductService, ProductServiceImpl};

// Re-export order service types
pub use order_service::{OrderError, OrderService, OrderServiceImpl};

// Re-export language service types
pub use language_service::{LanguageService, LanguageServiceImpl};
