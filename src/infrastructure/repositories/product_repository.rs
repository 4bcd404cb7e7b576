//! Product Repository Implementation
//!
//! In-memory implementation of the ProductRepository trait. Rows are kept
//! ordered by id so listings are stable.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::domain::{Product, ProductRepository};
use crate::shared::error::AppError;

#[derive(Debug, Default)]
struct ProductTable {
    rows: BTreeMap<i32, Product>,
    last_id: i32,
}

/// In-memory product repository.
///
/// Cloning shares the underlying table.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProductRepository {
    table: Arc<RwLock<ProductTable>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Repository pre-filled with `products`; ids of 0 are assigned.
    pub fn with_products(products: impl IntoIterator<Item = Product>) -> Self {
        let repo = Self::new();
        {
            let mut table = repo.table.write();
            for product in products {
                Self::insert(&mut table, product);
            }
        }
        repo
    }

    pub fn len(&self) -> usize {
        self.table.read().rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.read().rows.is_empty()
    }

    fn insert(table: &mut ProductTable, mut product: Product) -> Product {
        if product.is_new() {
            table.last_id += 1;
            product.id = table.last_id;
        } else {
            table.last_id = table.last_id.max(product.id);
        }
        table.rows.insert(product.id, product.clone());
        product
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn get_all_products(&self) -> Result<Vec<Product>, AppError> {
        Ok(self.table.read().rows.values().cloned().collect())
    }

    async fn get_product(&self, id: i32) -> Result<Option<Product>, AppError> {
        Ok(self.table.read().rows.get(&id).cloned())
    }

    async fn get_products(&self) -> Result<Vec<Product>, AppError> {
        self.get_all_products().await
    }

    async fn save_product(&self, product: &Product) -> Result<Product, AppError> {
        if product.price.is_sign_negative() && !product.price.is_zero() {
            return Err(AppError::Validation("Price must not be negative".into()));
        }
        if product.quantity < 0 {
            return Err(AppError::Validation("Stock must not be negative".into()));
        }

        let mut table = self.table.write();
        Ok(Self::insert(&mut table, product.clone()))
    }

    async fn delete_product(&self, id: i32) -> Result<(), AppError> {
        self.table
            .write()
            .rows
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| AppError::NotFound(format!("Product with id {} not found", id)))
    }

    /// Takes `quantity` (> 0) units out of stock. Sold-out products are
    /// removed from the catalog.
    async fn update_product_stocks(&self, id: i32, quantity: i32) -> Result<(), AppError> {
        if quantity <= 0 {
            return Err(AppError::Validation(format!(
                "Stock update for product {} must be positive, got {}",
                id, quantity
            )));
        }

        let mut table = self.table.write();
        let product = table
            .rows
            .get_mut(&id)
            .ok_or_else(|| AppError::NotFound(format!("Product with id {} not found", id)))?;

        let remaining = product
            .quantity
            .checked_sub(quantity)
            .filter(|remaining| *remaining >= 0)
            .ok_or_else(|| {
                AppError::Conflict(format!(
                    "Only {} units of product {} in stock, {} requested",
                    product.quantity, id, quantity
                ))
            })?;

        product.quantity = remaining;
        if product.quantity == 0 {
            table.rows.remove(&id);
        }
        Ok(())
    }
}
