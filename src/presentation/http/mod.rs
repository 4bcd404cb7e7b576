//! HTTP Presentation
//!
//! Request context handed to services by the (external) controllers.

mod context;

pub use context::HttpContext;
