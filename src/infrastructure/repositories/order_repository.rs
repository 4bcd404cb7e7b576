//! Order Repository Implementation
//!
//! In-memory implementation of the OrderRepository trait.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::domain::{Order, OrderRepository};
use crate::shared::error::AppError;

#[derive(Debug, Default)]
struct OrderTable {
    rows: BTreeMap<i32, Order>,
    last_id: i32,
}

/// In-memory order repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryOrderRepository {
    table: Arc<RwLock<OrderTable>>,
}

impl InMemoryOrderRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.table.read().rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.read().rows.is_empty()
    }
}

#[async_trait]
impl OrderRepository for InMemoryOrderRepository {
    async fn get_order(&self, id: i32) -> Result<Option<Order>, AppError> {
        Ok(self.table.read().rows.get(&id).cloned())
    }

    async fn get_orders(&self) -> Result<Vec<Order>, AppError> {
        Ok(self.table.read().rows.values().cloned().collect())
    }

    async fn save(&self, order: &Order) -> Result<Order, AppError> {
        let mut table = self.table.write();
        let mut order = order.clone();

        if order.id == 0 {
            table.last_id += 1;
            order.id = table.last_id;
        } else if table.rows.contains_key(&order.id) {
            return Err(AppError::Conflict(format!("Order {} already exists", order.id)));
        } else {
            table.last_id = table.last_id.max(order.id);
        }

        table.rows.insert(order.id, order.clone());
        Ok(order)
    }
}
