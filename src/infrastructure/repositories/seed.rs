//! Demo catalog

use rust_decimal::Decimal;

use crate::domain::Product;

/// The five demo products loaded into an empty store.
pub fn demo_products() -> Vec<Product> {
    vec![
        demo("Echo Dot", "(2nd Generation) - Black", 9250, 10),
        demo("Anker 3ft / 0.9m Nylon Braided", "Tangle-Free Micro USB Cable", 999, 20),
        demo("JVC HAFX8R Headphone", "Riptidz, In-Ear", 6999, 30),
        demo("VTech CS6114 DECT 6.0", "Cordless Phone", 3250, 40),
        demo("NOKIA OEM BL-5J", "Cell Phone", 89500, 50),
    ]
}

fn demo(name: &str, description: &str, cents: i64, quantity: i32) -> Product {
    Product {
        id: 0,
        name: name.to_string(),
        description: description.to_string(),
        details: String::new(),
        price: Decimal::new(cents, 2),
        quantity,
    }
}
