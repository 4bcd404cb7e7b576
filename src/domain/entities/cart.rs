//! Shopping cart.
//!
//! A cart belongs to one user session. Services receive it through
//! [`Cart`] so the session layer decides how it is stored and shared.

use parking_lot::Mutex;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Product;

/// One (product, quantity) pairing held in a cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub product: Product,
    pub quantity: i32,
}

impl CartLine {
    /// Price of the line (unit price times quantity), `None` on overflow.
    pub fn subtotal(&self) -> Option<Decimal> {
        self.product.price.checked_mul(Decimal::from(self.quantity))
    }
}

/// Cart errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CartError {
    #[error("Product {product_id} is not in the cart")]
    LineNotFound { product_id: i32 },

    #[error("Quantity {quantity} of product {product_id} must be positive")]
    InvalidQuantity { product_id: i32, quantity: i32 },

    #[error("Quantity of product {product_id} is too large")]
    QuantityOverflow { product_id: i32 },
}

/// Cart contract consumed by the product and order services.
#[cfg_attr(test, mockall::automock)]
pub trait Cart: Send + Sync {
    /// Add `quantity` units of `product`, merging with an existing line.
    ///
    /// The quantity must be positive. The cart is left unchanged on error.
    fn add_item(&self, product: Product, quantity: i32) -> Result<(), CartError>;

    /// Remove the line holding `product`.
    fn remove_line(&self, product: &Product) -> Result<(), CartError>;

    /// Empty the cart.
    fn clear(&self);

    /// Lines in insertion order.
    fn lines(&self) -> Vec<CartLine>;

    /// The product of the line with the given product id, if any.
    fn find_product(&self, product_id: i32) -> Option<Product> {
        self.lines()
            .into_iter()
            .find(|line| line.product.id == product_id)
            .map(|line| line.product)
    }

    /// Line at `index` in insertion order.
    fn line(&self, index: usize) -> Option<CartLine> {
        self.lines().into_iter().nth(index)
    }

    /// Sum of all line subtotals, `None` if it does not fit a `Decimal`.
    fn total_value(&self) -> Option<Decimal> {
        total_of(&self.lines())
    }

    /// Average price per unit in the cart; zero when empty.
    fn average_value(&self) -> Option<Decimal> {
        let lines = self.lines();
        let units: i64 = lines.iter().map(|line| i64::from(line.quantity)).sum();
        if units == 0 {
            return Some(Decimal::ZERO);
        }

        total_of(&lines)?.checked_div(Decimal::from(units))
    }

    /// Whether the cart holds no lines.
    fn is_empty(&self) -> bool {
        self.lines().is_empty()
    }
}

fn total_of(lines: &[CartLine]) -> Option<Decimal> {
    lines
        .iter()
        .try_fold(Decimal::ZERO, |total, line| total.checked_add(line.subtotal()?))
}

/// Cart kept in memory for a single session.
#[derive(Debug, Default)]
pub struct SessionCart {
    lines: Mutex<Vec<CartLine>>,
}

impl SessionCart {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Cart for SessionCart {
    fn add_item(&self, product: Product, quantity: i32) -> Result<(), CartError> {
        if quantity <= 0 {
            return Err(CartError::InvalidQuantity {
                product_id: product.id,
                quantity,
            });
        }

        let mut lines = self.lines.lock();
        match lines.iter_mut().find(|line| line.product.id == product.id) {
            Some(line) => {
                line.quantity = line
                    .quantity
                    .checked_add(quantity)
                    .ok_or(CartError::QuantityOverflow {
                        product_id: product.id,
                    })?;
            }
            None => lines.push(CartLine { product, quantity }),
        }
        Ok(())
    }

    fn remove_line(&self, product: &Product) -> Result<(), CartError> {
        let mut lines = self.lines.lock();
        let position = lines
            .iter()
            .position(|line| line.product.id == product.id)
            .ok_or(CartError::LineNotFound {
                product_id: product.id,
            })?;

        lines.remove(position);
        Ok(())
    }

    fn clear(&self) {
        self.lines.lock().clear();
    }

    fn lines(&self) -> Vec<CartLine> {
        self.lines.lock().clone()
    }
}
