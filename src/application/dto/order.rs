//! Order view model

use chrono::{DateTime, Utc};
use serde::Deserialize;
use validator::Validate;

use crate::domain::{CartLine, Order, OrderLine};

/// Checkout form
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct OrderViewModel {
    pub order_id: Option<i32>,

    #[validate(custom(function = "crate::shared::validation::not_blank", message = "Please enter your name"))]
    pub name: String,

    #[validate(custom(function = "crate::shared::validation::not_blank", message = "Please enter an address"))]
    pub address: String,

    #[validate(custom(function = "crate::shared::validation::not_blank", message = "Please enter a city name"))]
    pub city: String,

    #[validate(custom(function = "crate::shared::validation::not_blank", message = "Please enter a zip code"))]
    pub zip: String,

    #[validate(custom(function = "crate::shared::validation::not_blank", message = "Please enter a country name"))]
    pub country: String,

    /// Defaults to the time of mapping
    pub date: Option<DateTime<Utc>>,
}

impl OrderViewModel {
    /// Build the order entity from the form and a snapshot of cart lines.
    pub fn to_order(&self, lines: &[CartLine]) -> Order {
        Order {
            id: self.order_id.unwrap_or_default(),
            name: self.name.trim().to_string(),
            address: self.address.trim().to_string(),
            city: self.city.trim().to_string(),
            zip: self.zip.trim().to_string(),
            country: self.country.trim().to_string(),
            date: self.date.unwrap_or_else(Utc::now),
            lines: lines
                .iter()
                .map(|line| OrderLine {
                    product_id: line.product.id,
                    product_name: line.product.name.clone(),
                    quantity: line.quantity,
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Product;
    use crate::shared::validation::field_errors;
    use pretty_assertions::assert_eq;

    fn valid_form() -> OrderViewModel {
        OrderViewModel {
            order_id: None,
            name: "Ada Lovelace".into(),
            address: "12 St James's Square".into(),
            city: "London".into(),
            zip: "SW1Y 4JH".into(),
            country: "United Kingdom".into(),
            date: None,
        }
    }

    #[test]
    fn test_valid_form_passes() {
        assert!(valid_form().validate().is_ok());
    }

    #[test]
    fn test_blank_fields_are_reported() {
        let form = OrderViewModel {
            city: "  ".into(),
            zip: String::new(),
            ..valid_form()
        };

        let errors = field_errors(&form.validate().unwrap_err());

        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["city", "zip"]);
        assert_eq!(errors[0].message, "Please enter a city name");
    }

    #[test]
    fn test_to_order_snapshots_lines() {
        let lines = vec![CartLine {
            product: Product {
                id: 5,
                name: "NOKIA OEM BL-5J".into(),
                ..Default::default()
            },
            quantity: 2,
        }];

        let order = valid_form().to_order(&lines);

        assert_eq!(order.id, 0);
        assert_eq!(order.name, "Ada Lovelace");
        assert_eq!(
            order.lines,
            vec![OrderLine {
                product_id: 5,
                product_name: "NOKIA OEM BL-5J".into(),
                quantity: 2,
            }]
        );
    }
}
