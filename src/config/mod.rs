//! # Configuration Module
//!
//! This module handles application configuration loading and management.
//! Configuration can be loaded from:
//! - Environment variables (prefixed with APP__)
//! - Configuration files (config/default.toml, config/{environment}.toml)
//! - .env files (via dotenvy)
//!
//! ## Usage
//!
//! ```rust,ignore
//! use storefront::config::Settings;
//!
//! let settings = Settings::load()?;
//! println!("Default culture: {}", settings.language.default_culture);
//! ```

mod settings;

pub use settings::*;
