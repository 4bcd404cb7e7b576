//! Presentation Layer
//!
//! HTTP-facing types shared with the web front end.

pub mod http;
