//! Order Service
//!
//! Checkout: validate the form, persist the order, adjust stock, then empty
//! the cart. Each step runs only if the previous one succeeded and nothing
//! is rolled back on failure.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info};
use validator::Validate;

use crate::application::dto::OrderViewModel;
use crate::domain::{Cart, Order, OrderRepository};
use crate::shared::error::{AppError, FieldError};
use crate::shared::validation::field_errors;

use super::product_service::{ProductError, ProductService};

/// Order service trait
#[async_trait]
pub trait OrderService: Send + Sync {
    /// Get order by ID
    async fn get_order(&self, id: i32) -> Result<Option<Order>, OrderError>;

    /// Get all orders
    async fn get_orders(&self) -> Result<Vec<Order>, OrderError>;

    /// Place an order for the current cart
    async fn save_order(&self, order: &OrderViewModel) -> Result<Order, OrderError>;
}

/// Order service errors
#[derive(Debug, thiserror::Error)]
pub enum OrderError {
    #[error("Invalid order: {}", join_errors(.0))]
    Validation(Vec<FieldError>),

    #[error("Cart is empty")]
    EmptyCart,

    #[error(transparent)]
    Product(#[from] ProductError),

    #[error(transparent)]
    Repository(#[from] AppError),
}

fn join_errors(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// OrderService implementation
pub struct OrderServiceImpl<O, S, C>
where
    O: OrderRepository,
    S: ProductService,
    C: Cart,
{
    order_repo: Arc<O>,
    product_service: Arc<S>,
    cart: Arc<C>,
}

impl<O, S, C> OrderServiceImpl<O, S, C>
where
    O: OrderRepository,
    S: ProductService,
    C: Cart,
{
    pub fn new(order_repo: Arc<O>, product_service: Arc<S>, cart: Arc<C>) -> Self {
        Self {
            order_repo,
            product_service,
            cart,
        }
    }

    /// Take the cart's quantities out of stock, then empty the cart.
    ///
    /// The cart is left untouched when the stock update fails.
    pub async fn update_inventory(&self) -> Result<(), OrderError> {
        self.product_service.update_product_quantities().await?;
        self.cart.clear();
        debug!("Inventory adjusted and cart cleared");
        Ok(())
    }
}

#[async_trait]
impl<O, S, C> OrderService for OrderServiceImpl<O, S, C>
where
    O: OrderRepository + 'static,
    S: ProductService + 'static,
    C: Cart + 'static,
{
    async fn get_order(&self, id: i32) -> Result<Option<Order>, OrderError> {
        Ok(self.order_repo.get_order(id).await?)
    }

    async fn get_orders(&self) -> Result<Vec<Order>, OrderError> {
        Ok(self.order_repo.get_orders().await?)
    }

    async fn save_order(&self, order: &OrderViewModel) -> Result<Order, OrderError> {
        order
            .validate()
            .map_err(|e| OrderError::Validation(field_errors(&e)))?;

        let lines = self.cart.lines();
        if lines.is_empty() {
            return Err(OrderError::EmptyCart);
        }

        let saved = self.order_repo.save(&order.to_order(&lines)).await?;
        info!(order_id = saved.id, lines = saved.lines.len(), "Order saved");

        self.update_inventory().await?;

        Ok(saved)
    }
}
