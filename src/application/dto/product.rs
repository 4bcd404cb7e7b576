//! Product view model
//!
//! Form-oriented projection of [`Product`]: price and stock travel as text so
//! a rejected form can be shown back to the user exactly as typed.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::Product;

/// Product as displayed and edited in forms.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ProductViewModel {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub details: String,
    pub stock: String,
    pub price: String,
}

/// Reasons a product form is rejected. At most one per field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, thiserror::Error)]
pub enum ProductValidationError {
    #[error("Please enter a name")]
    MissingName,

    #[error("Please enter a price")]
    MissingPrice,

    #[error("The value entered for the price must be a number")]
    PriceNotANumber,

    #[error("The price must not be negative")]
    PriceNegative,

    #[error("Please enter a stock value")]
    MissingStock,

    #[error("The value entered for the stock must be an integer")]
    StockNotAnInteger,

    #[error("The stock must not be negative")]
    StockNegative,
}

impl From<&Product> for ProductViewModel {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            description: product.description.clone(),
            details: product.details.clone(),
            stock: product.quantity.to_string(),
            price: product.price.to_string(),
        }
    }
}

impl ProductViewModel {
    /// Parse the form into a [`Product`], collecting every field error.
    ///
    /// An `Err` always holds at least one error.
    pub fn to_product(&self) -> Result<Product, Vec<ProductValidationError>> {
        let mut errors = Vec::new();

        if self.name.trim().is_empty() {
            errors.push(ProductValidationError::MissingName);
        }

        let price = parse_price(&self.price).map_err(|e| errors.push(e)).ok();
        let quantity = parse_stock(&self.stock).map_err(|e| errors.push(e)).ok();

        match (price, quantity) {
            (Some(price), Some(quantity)) if errors.is_empty() => Ok(Product {
                id: self.id,
                name: self.name.trim().to_string(),
                description: self.description.clone(),
                details: self.details.clone(),
                price,
                quantity,
            }),
            _ => Err(errors),
        }
    }
}

fn parse_price(raw: &str) -> Result<Decimal, ProductValidationError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(ProductValidationError::MissingPrice);
    }

    let price = Decimal::from_str(raw).map_err(|_| ProductValidationError::PriceNotANumber)?;
    if price.is_sign_negative() && !price.is_zero() {
        return Err(ProductValidationError::PriceNegative);
    }
    Ok(price)
}

fn parse_stock(raw: &str) -> Result<i32, ProductValidationError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(ProductValidationError::MissingStock);
    }

    let stock: i32 = raw
        .parse()
        .map_err(|_| ProductValidationError::StockNotAnInteger)?;
    if stock < 0 {
        return Err(ProductValidationError::StockNegative);
    }
    Ok(stock)
}
