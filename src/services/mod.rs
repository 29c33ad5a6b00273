//! Services Layer
//!
//! Page-load logic shared by the HTTP handlers and the tests. Each service
//! produces a fresh view state per load; nothing is cached between loads.
//!
//! # Architecture
//!
//! ```text
//! Browser --> axum handlers --> Services --> StorefrontApi --> REST backend
//!                  │
//!                  └──> Views (HTML)
//! ```
//!
//! # Services
//!
//! - `LandingService` - Health, rates and featured products
//! - `CustomerService` - Customer list (sample or live)

pub mod customer_service;
pub mod landing_service;

#[cfg(test)]
pub(crate) mod testing;

pub use customer_service::{sample_customers, CustomerPage, CustomerService, LOAD_ERROR_MESSAGE};
pub use landing_service::{LandingPage, LandingService, FEATURED_PRODUCT_COUNT};

/// Loading phase of a page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Ready,
}
