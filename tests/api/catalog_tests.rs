//! Catalog Tests

use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use storefront::application::dto::{ProductValidationError, ProductViewModel};
use storefront::application::services::{ProductError, ProductService};
use storefront::domain::{Cart, CartError};

use crate::common::test_store;

#[tokio::test]
async fn test_catalog_view_models() {
    let store = test_store();
    let session = store.session();

    let catalog = session.products.get_all_products_view_model().await.unwrap();

    assert_eq!(catalog.len(), 5);
    assert_eq!(catalog[0].name, "Echo Dot");
    assert_eq!(catalog[0].price, "92.50");
    assert_eq!(catalog[0].stock, "10");

    let nokia = session.products.get_product_by_id_view_model(5).await.unwrap().unwrap();
    assert_eq!(nokia.price, "895.00");
}

#[tokio::test]
async fn test_save_product_form() {
    let store = test_store();
    let session = store.session();
    let form = ProductViewModel {
        name: "USB-C Charger".into(),
        description: "65W".into(),
        price: "29.90".into(),
        stock: "12".into(),
        ..Default::default()
    };

    let saved = session.products.save_product(&form).await.unwrap();

    assert_eq!(saved.id, 6);
    let fetched = session.products.get_product(6).await.unwrap().unwrap();
    assert_eq!(fetched.price, Decimal::new(2990, 2));
    assert_eq!(session.products.get_products().await.unwrap().len(), 6);
}

#[tokio::test]
async fn test_invalid_product_form_is_not_saved() {
    let store = test_store();
    let session = store.session();
    let form = ProductViewModel {
        name: "Broken".into(),
        price: "abc".into(),
        stock: "3".into(),
        ..Default::default()
    };

    assert_eq!(
        session.products.check_product_model_errors(&form),
        vec![ProductValidationError::PriceNotANumber]
    );
    assert!(matches!(
        session.products.save_product(&form).await,
        Err(ProductError::Validation(_))
    ));
    assert_eq!(session.products.get_all_products().await.unwrap().len(), 5);
}

#[tokio::test]
async fn test_delete_product_in_cart() {
    let store = test_store();
    let session = store.session();
    let cable = session.products.get_product(2).await.unwrap().unwrap();
    session.cart.add_item(cable, 1).unwrap();

    session.products.delete_product(2).await.unwrap();

    assert!(session.cart.is_empty());
    assert!(session.products.get_product(2).await.unwrap().is_none());
}

#[tokio::test]
async fn test_delete_product_not_in_cart_is_refused() {
    let store = test_store();
    let session = store.session();

    let result = session.products.delete_product(2).await;

    assert!(matches!(
        result,
        Err(ProductError::Cart(CartError::LineNotFound { product_id: 2 }))
    ));
    assert!(session.products.get_product(2).await.unwrap().is_some());
}
