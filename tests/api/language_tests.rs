//! Language Tests

use axum::http::header;
use axum::response::IntoResponse;
use storefront::application::services::LanguageService;
use storefront::presentation::http::HttpContext;

use crate::common::test_store;

#[test]
fn test_language_switch_sets_cookie_on_response() {
    let store = test_store();
    let language = store.language();
    let mut context = HttpContext::new();

    language.change_ui_language(Some(&mut context), "Wolof");
    let response = (context, ()).into_response();

    let set_cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .unwrap();
    assert!(set_cookie.starts_with(".AspNetCore.Culture="));
    assert!(set_cookie.contains("wo"));
    assert!(set_cookie.contains("Path=/"));
}

#[test]
fn test_language_switch_without_context() {
    let store = test_store();

    store.language().change_ui_language(None, "French");
}
