//! Repository Implementations
//!
//! In-memory implementations of the domain repository traits, plus the demo
//! catalog used to bootstrap an empty store.
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use storefront::infrastructure::repositories::{
//!     demo_products, InMemoryOrderRepository, InMemoryProductRepository,
//! };
//!
//! let product_repo = InMemoryProductRepository::with_products(demo_products());
//! let order_repo = InMemoryOrderRepository::new();
//! ```

pub mod order_repository;
pub mod product_repository;
pub mod seed;

pub use order_repository::InMemoryOrderRepository;
pub use product_repository::InMemoryProductRepository;
pub use seed::demo_products;
