//! Product entity and repository trait.

use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::shared::error::AppError;

/// A catalog product.
///
/// `id` is assigned by the repository on first save; an id of 0 marks a
/// product that has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Product {
    /// Repository-assigned identifier
    pub id: i32,

    /// Display name
    pub name: String,

    /// Short description
    pub description: String,

    /// Long-form details
    pub details: String,

    /// Unit price (never negative)
    pub price: Decimal,

    /// Units in stock (never negative)
    pub quantity: i32,
}

impl Product {
    /// Whether the product has been persisted.
    pub fn is_new(&self) -> bool {
        self.id == 0
    }

    /// Whether at least one unit is in stock.
    pub fn in_stock(&self) -> bool {
        self.quantity > 0
    }
}

/// Repository trait for Product data access operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// All products, in repository order.
    async fn get_all_products(&self) -> Result<Vec<Product>, AppError>;

    /// Find a product by id.
    async fn get_product(&self, id: i32) -> Result<Option<Product>, AppError>;

    /// Bulk fetch of the catalog.
    async fn get_products(&self) -> Result<Vec<Product>, AppError>;

    /// Insert (id 0) or replace a product. Returns the stored product.
    async fn save_product(&self, product: &Product) -> Result<Product, AppError>;

    /// Remove a product by id.
    async fn delete_product(&self, id: i32) -> Result<(), AppError>;

    /// Take `quantity` units out of the product's stock.
    async fn update_product_stocks(&self, id: i32, quantity: i32) -> Result<(), AppError>;
}
