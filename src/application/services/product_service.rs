//! Product Service
//!
//! Catalog queries, product form handling, and stock adjustment from the
//! session cart.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info};

use crate::application::dto::{ProductValidationError, ProductViewModel};
use crate::domain::{Cart, CartError, Product, ProductRepository};
use crate::shared::error::AppError;

/// Product service trait
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductService: Send + Sync {
    /// All persisted products, in repository order
    async fn get_all_products(&self) -> Result<Vec<Product>, ProductError>;

    /// All products as view models
    async fn get_all_products_view_model(&self) -> Result<Vec<ProductViewModel>, ProductError>;

    /// Find a product by scanning the catalog
    async fn get_product_by_id(&self, id: i32) -> Result<Option<Product>, ProductError>;

    /// Fetch a single product from the repository
    async fn get_product(&self, id: i32) -> Result<Option<Product>, ProductError>;

    /// Bulk fetch from the repository
    async fn get_products(&self) -> Result<Vec<Product>, ProductError>;

    /// Find a product view model by id
    async fn get_product_by_id_view_model(&self, id: i32) -> Result<Option<ProductViewModel>, ProductError>;

    /// Validate a product form. An empty list means the form is valid.
    fn check_product_model_errors(&self, product: &ProductViewModel) -> Vec<ProductValidationError>;

    /// Validate and persist a product form
    async fn save_product(&self, product: &ProductViewModel) -> Result<Product, ProductError>;

    /// Take every cart line's quantity out of the matching product's stock
    async fn update_product_quantities(&self) -> Result<(), ProductError>;

    /// Remove the product from the cart, then from the catalog
    async fn delete_product(&self, id: i32) -> Result<(), ProductError>;
}

/// Product service errors
#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("Product {0} not found")]
    NotFound(i32),

    #[error("Invalid product: {}", join_errors(.0))]
    Validation(Vec<ProductValidationError>),

    #[error(transparent)]
    Cart(#[from] CartError),

    #[error(transparent)]
    Repository(#[from] AppError),
}

fn join_errors(errors: &[ProductValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// ProductService implementation
pub struct ProductServiceImpl<P, C>
where
    P: ProductRepository,
    C: Cart,
{
    product_repo: Arc<P>,
    cart: Arc<C>,
}

impl<P, C> ProductServiceImpl<P, C>
where
    P: ProductRepository,
    C: Cart,
{
    pub fn new(product_repo: Arc<P>, cart: Arc<C>) -> Self {
        Self { product_repo, cart }
    }
}

#[async_trait]
impl<P, C> ProductService for ProductServiceImpl<P, C>
where
    P: ProductRepository + 'static,
    C: Cart + 'static,
{
    async fn get_all_products(&self) -> Result<Vec<Product>, ProductError> {
        let products = self.product_repo.get_all_products().await?;
        debug!(count = products.len(), "Loaded catalog");
        Ok(products)
    }

    async fn get_all_products_view_model(&self) -> Result<Vec<ProductViewModel>, ProductError> {
        let products = self.get_all_products().await?;
        Ok(products.iter().map(ProductViewModel::from).collect())
    }

    async fn get_product_by_id(&self, id: i32) -> Result<Option<Product>, ProductError> {
        let products = self.get_all_products().await?;
        Ok(products.into_iter().find(|p| p.id == id))
    }

    async fn get_product(&self, id: i32) -> Result<Option<Product>, ProductError> {
        Ok(self.product_repo.get_product(id).await?)
    }

    async fn get_products(&self) -> Result<Vec<Product>, ProductError> {
        Ok(self.product_repo.get_products().await?)
    }

    async fn get_product_by_id_view_model(&self, id: i32) -> Result<Option<ProductViewModel>, ProductError> {
        let view_models = self.get_all_products_view_model().await?;
        Ok(view_models.into_iter().find(|p| p.id == id))
    }

    fn check_product_model_errors(&self, product: &ProductViewModel) -> Vec<ProductValidationError> {
        product.to_product().err().unwrap_or_default()
    }

    async fn save_product(&self, product: &ProductViewModel) -> Result<Product, ProductError> {
        let entity = product.to_product().map_err(ProductError::Validation)?;

        let saved = self.product_repo.save_product(&entity).await?;
        info!(product_id = saved.id, name = %saved.name, "Product saved");

        Ok(saved)
    }

    async fn update_product_quantities(&self) -> Result<(), ProductError> {
        for line in self.cart.lines() {
            self.product_repo
                .update_product_stocks(line.product.id, line.quantity)
                .await?;
            debug!(product_id = line.product.id, quantity = line.quantity, "Stock adjusted");
        }
        Ok(())
    }

    async fn delete_product(&self, id: i32) -> Result<(), ProductError> {
        let product = self
            .get_product_by_id(id)
            .await?
            .ok_or(ProductError::NotFound(id))?;

        self.cart.remove_line(&product)?;
        self.product_repo.delete_product(id).await?;
        info!(product_id = id, "Product deleted");

        Ok(())
    }
}
