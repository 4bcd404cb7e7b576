//! Checkout Tests

use pretty_assertions::assert_eq;
use storefront::application::services::{OrderError, OrderService, ProductError, ProductService};
use storefront::domain::{Cart, CartError};
use storefront::shared::error::AppError;

use crate::common::{checkout_form, test_store};

/// Placing an order stores it, takes the units out of stock and empties the cart
#[tokio::test]
async fn test_checkout_adjusts_stock_and_clears_cart() {
    let store = test_store();
    let session = store.session();
    let echo_dot = session.products.get_product(1).await.unwrap().unwrap();
    let cable = session.products.get_product(2).await.unwrap().unwrap();
    session.cart.add_item(echo_dot, 2).unwrap();
    session.cart.add_item(cable, 3).unwrap();

    let order = session.orders.save_order(&checkout_form("Awa Ndiaye")).await.unwrap();

    assert_eq!(order.id, 1);
    assert_eq!(order.total_units(), 5);
    assert!(session.cart.is_empty());
    assert_eq!(session.products.get_product(1).await.unwrap().unwrap().quantity, 8);
    assert_eq!(session.products.get_product(2).await.unwrap().unwrap().quantity, 17);

    let stored = session.orders.get_order(order.id).await.unwrap().unwrap();
    assert_eq!(stored.name, "Awa Ndiaye");
    assert_eq!(stored.lines.len(), 2);
}

/// The saved order keeps its lines after the cart is cleared
#[tokio::test]
async fn test_order_is_a_snapshot_of_the_cart() {
    let store = test_store();
    let session = store.session();
    let phone = session.products.get_product(4).await.unwrap().unwrap();
    session.cart.add_item(phone.clone(), 1).unwrap();

    let order = session.orders.save_order(&checkout_form("Moussa Diallo")).await.unwrap();
    session.cart.add_item(phone, 5).unwrap();

    let stored = session.orders.get_order(order.id).await.unwrap().unwrap();
    assert_eq!(stored.lines[0].quantity, 1);
    assert_eq!(stored.lines[0].product_name, "VTech CS6114 DECT 6.0");
}

/// Buying more than the stock fails after the order was stored and leaves the cart intact
#[tokio::test]
async fn test_checkout_oversell_keeps_cart() {
    let store = test_store();
    let session = store.session();
    let echo_dot = session.products.get_product(1).await.unwrap().unwrap();
    session.cart.add_item(echo_dot, 11).unwrap();

    let result = session.orders.save_order(&checkout_form("Fatou Sow")).await;

    assert!(matches!(
        result,
        Err(OrderError::Product(ProductError::Repository(AppError::Conflict(_))))
    ));
    assert_eq!(session.cart.lines().len(), 1);
    // no rollback: the order stays persisted
    assert_eq!(session.orders.get_orders().await.unwrap().len(), 1);
}

/// Checkout with an empty cart is refused before anything is stored
#[tokio::test]
async fn test_checkout_empty_cart() {
    let store = test_store();
    let session = store.session();

    let result = session.orders.save_order(&checkout_form("Ibrahima Fall")).await;

    assert!(matches!(result, Err(OrderError::EmptyCart)));
    assert!(session.orders.get_orders().await.unwrap().is_empty());
}

/// Selling the last units removes the product from the catalog
#[tokio::test]
async fn test_sold_out_product_leaves_catalog() {
    let store = test_store();
    let session = store.session();
    let headphone = session.products.get_product(3).await.unwrap().unwrap();
    session.cart.add_item(headphone.clone(), headphone.quantity).unwrap();

    session.orders.save_order(&checkout_form("Aminata Ba")).await.unwrap();

    assert!(session.products.get_product_by_id(3).await.unwrap().is_none());
    assert_eq!(session.products.get_all_products().await.unwrap().len(), 4);
}

/// Zero or negative quantities never reach checkout, so stock can only go down
#[tokio::test]
async fn test_checkout_cannot_raise_stock() {
    let store = test_store();
    let session = store.session();
    let echo_dot = session.products.get_product(1).await.unwrap().unwrap();

    assert!(matches!(
        session.cart.add_item(echo_dot.clone(), -5),
        Err(CartError::InvalidQuantity { product_id: 1, quantity: -5 })
    ));
    assert!(matches!(
        session.cart.add_item(echo_dot, 0),
        Err(CartError::InvalidQuantity { product_id: 1, quantity: 0 })
    ));

    let result = session.orders.save_order(&checkout_form("Awa Ndiaye")).await;

    assert!(matches!(result, Err(OrderError::EmptyCart)));
    assert_eq!(session.products.get_product(1).await.unwrap().unwrap().quantity, 10);
}
