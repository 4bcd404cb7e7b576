//! # Storefront Library
//!
//! Service layer of a small online store:
//! - Product catalog queries and product form handling
//! - A per-session shopping cart
//! - Checkout with stock adjustment
//! - UI language selection through a culture cookie
//!
//! ## Architecture
//!
//! - **Domain Layer**: Entities, the cart, and repository traits
//! - **Application Layer**: Services and view models
//! - **Infrastructure Layer**: Repository implementations
//! - **Presentation Layer**: The HTTP context handed to services
//!
//! ## Module Structure
//!
//! ```text
//! storefront/
//! +-- config/         Configuration management
//! +-- domain/         Entities, cart, repository traits
//! +-- application/    Services and view models
//! +-- infrastructure/ In-memory repositories, demo catalog
//! +-- presentation/   HTTP request context
//! +-- shared/         Common utilities (errors, validation)
//! ```

// Configuration module
pub mod config;

// Domain layer - Core business logic
pub mod domain;

// Application layer - Business services
pub mod application;

// Infrastructure layer - Repository implementations
pub mod infrastructure;

// Presentation layer - HTTP context
pub mod presentation;

// Shared utilities
pub mod shared;

// Service wiring
pub mod startup;

// Telemetry and observability
pub mod telemetry;
