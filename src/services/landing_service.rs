//! Landing Service
//!
//! Loads the data behind the landing page: system health, today's metal
//! rates and the featured products.

use crate::api::types::{HealthStatus, MetalRate, Product};
use crate::api::StorefrontApi;
use crate::services::LoadState;
use tracing::{error, info};

/// Number of products shown in the featured panel
pub const FEATURED_PRODUCT_COUNT: usize = 3;

/// View state of one landing page load
#[derive(Debug, Clone)]
pub struct LandingPage {
    pub state: LoadState,
    pub health: Option<HealthStatus>,
    pub products: Vec<Product>,
    pub rates: Vec<MetalRate>,
}

impl LandingPage {
    /// Fresh page, nothing fetched yet
    pub fn new() -> Self {
        Self {
            state: LoadState::Loading,
            health: None,
            products: Vec::new(),
            rates: Vec::new(),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.state == LoadState::Loading
    }

    /// First products in backend order, at most [`FEATURED_PRODUCT_COUNT`]
    pub fn featured_products(&self) -> &[Product] {
        let end = self.products.len().min(FEATURED_PRODUCT_COUNT);
        &self.products[..end]
    }
}

impl Default for LandingPage {
    fn default() -> Self {
        Self::new()
    }
}

/// Landing service for page loads
pub struct LandingService;

impl LandingService {
    /// Fetch health, products and rates concurrently and wait for all three
    ///
    /// Failures are logged and otherwise swallowed: the page always leaves
    /// `Loading`, keeping whatever did resolve and empty defaults for the rest.
    pub async fn load(api: &dyn StorefrontApi) -> LandingPage {
        info!("LandingService::load");

        let mut page = LandingPage::new();

        let (health, products, rates) = tokio::join!(
            api.health_check(),
            api.get_products(),
            api.get_metal_rates()
        );

        match health {
            Ok(health) => page.health = Some(health),
            Err(e) => error!("Error fetching data: {}", e),
        }
        match products {
            Ok(products) => page.products = products,
            Err(e) => error!("Error fetching data: {}", e),
        }
        match rates {
            Ok(rates) => page.rates = rates,
            Err(e) => error!("Error fetching data: {}", e),
        }

        page.state = LoadState::Ready;
        page
    }
}
