//! Application Startup
//!
//! Wires repositories and services together. The repositories and the
//! language service are shared by the whole store; each user session gets
//! its own cart and the services bound to it.

use std::sync::Arc;

use crate::application::services::{LanguageServiceImpl, OrderServiceImpl, ProductServiceImpl};
use crate::config::Settings;
use crate::domain::SessionCart;
use crate::infrastructure::repositories::{
    demo_products, InMemoryOrderRepository, InMemoryProductRepository,
};

/// Product service bound to a session cart
pub type SessionProductService = ProductServiceImpl<InMemoryProductRepository, SessionCart>;

/// Order service bound to a session cart
pub type SessionOrderService =
    OrderServiceImpl<InMemoryOrderRepository, SessionProductService, SessionCart>;

/// Services for one user session
pub struct Session {
    pub cart: Arc<SessionCart>,
    pub products: Arc<SessionProductService>,
    pub orders: SessionOrderService,
}

/// Store-wide state
pub struct Storefront {
    product_repo: Arc<InMemoryProductRepository>,
    order_repo: Arc<InMemoryOrderRepository>,
    language: Arc<LanguageServiceImpl>,
    settings: Arc<Settings>,
}

impl Storefront {
    /// Build the store from settings
    pub fn build(settings: Settings) -> Self {
        let product_repo = if settings.catalog.seed_demo_products {
            let repo = InMemoryProductRepository::with_products(demo_products());
            tracing::info!(products = repo.len(), "Demo catalog loaded");
            repo
        } else {
            InMemoryProductRepository::new()
        };

        let language = LanguageServiceImpl::new(settings.language.clone());

        Self {
            product_repo: Arc::new(product_repo),
            order_repo: Arc::new(InMemoryOrderRepository::new()),
            language: Arc::new(language),
            settings: Arc::new(settings),
        }
    }

    /// Open a session with an empty cart
    pub fn session(&self) -> Session {
        let cart = Arc::new(SessionCart::new());
        let products = Arc::new(ProductServiceImpl::new(
            self.product_repo.clone(),
            cart.clone(),
        ));
        let orders = OrderServiceImpl::new(self.order_repo.clone(), products.clone(), cart.clone());

        Session {
            cart,
            products,
            orders,
        }
    }

    pub fn language(&self) -> Arc<LanguageServiceImpl> {
        self.language.clone()
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }
}
