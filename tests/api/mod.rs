//! Service API Tests

mod catalog_tests;
mod checkout_tests;
mod language_tests;
