//! Common Test Utilities
//!
//! Shared helpers and fixtures.

use storefront::application::dto::OrderViewModel;
use storefront::config::{CatalogSettings, LanguageSettings, Settings};
use storefront::startup::Storefront;

/// Settings for a store seeded with the demo catalog
pub fn test_settings() -> Settings {
    Settings {
        language: LanguageSettings::default(),
        catalog: CatalogSettings {
            seed_demo_products: true,
        },
        environment: "test".into(),
    }
}

/// Store with the five demo products (ids 1 to 5)
pub fn test_store() -> Storefront {
    Storefront::build(test_settings())
}

/// A checkout form that passes validation
pub fn checkout_form(name: &str) -> OrderViewModel {
    OrderViewModel {
        order_id: None,
        name: name.to_string(),
        address: "10 Avenue Cheikh Anta Diop".into(),
        city: "Dakar".into(),
        zip: "10700".into(),
        country: "Senegal".into(),
        date: None,
    }
}
