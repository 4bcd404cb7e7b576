//! Order entity and repository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::error::AppError;

/// A placed order with delivery details and the cart snapshot taken at
/// checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// Repository-assigned identifier (0 until saved)
    pub id: i32,

    /// Customer name
    pub name: String,

    pub address: String,
    pub city: String,
    pub zip: String,
    pub country: String,

    /// When the order was placed
    pub date: DateTime<Utc>,

    /// Lines copied from the cart
    pub lines: Vec<OrderLine>,
}

impl Order {
    /// Total number of units ordered.
    pub fn total_units(&self) -> i64 {
        self.lines.iter().map(|line| i64::from(line.quantity)).sum()
    }
}

impl Default for Order {
    fn default() -> Self {
        Self {
            id: 0,
            name: String::new(),
            address: String::new(),
            city: String::new(),
            zip: String::new(),
            country: String::new(),
            date: Utc::now(),
            lines: Vec::new(),
        }
    }
}

/// One ordered product. Holds no reference back to the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    pub product_id: i32,
    pub product_name: String,
    pub quantity: i32,
}

/// Repository trait for Order data access operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Find an order by id.
    async fn get_order(&self, id: i32) -> Result<Option<Order>, AppError>;

    /// All orders, in repository order.
    async fn get_orders(&self) -> Result<Vec<Order>, AppError>;

    /// Persist an order. Returns the stored order with its id.
    async fn save(&self, order: &Order) -> Result<Order, AppError>;
}
