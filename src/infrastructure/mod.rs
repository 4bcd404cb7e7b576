//! Infrastructure Layer
//!
//! Implementations of the domain repository traits.

pub mod repositories;
