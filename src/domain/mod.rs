//! # Domain Layer
//!
//! Entities, the cart, and the repository contracts of the storefront.
//! It has no knowledge of configuration, HTTP, or storage engines.
//!
//! ## Design Principles
//!
//! - No dependencies on infrastructure or presentation layers
//! - Repository traits define data access contracts
//! - The cart is per session and handed to services explicitly

pub mod entities;

// Re-export commonly used types
pub use entities::*;
