//! Customer Service
//!
//! Loads the rows behind the customer management page, either from the
//! hardcoded sample set or from the backend.

use crate::api::types::{Customer, CustomerType};
use crate::api::StorefrontApi;
use crate::config::CustomerSource;
use tracing::{error, info};

/// Message shown when the live customer fetch fails
pub const LOAD_ERROR_MESSAGE: &str = "Failed to load customers";

/// View state of one customer page load
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CustomerPage {
    #[default]
    Loading,
    Ready(Vec<Customer>),
    Error(String),
}

impl CustomerPage {
    pub fn is_loading(&self) -> bool {
        matches!(self, CustomerPage::Loading)
    }
}

/// Sample rows matching the seeded backend database
pub fn sample_customers() -> Vec<Customer> {
    vec![
        sample(
            1,
            "Rajesh Kumar",
            "+91-9876543210",
            "rajesh.kumar@email.com",
            CustomerType::Premium,
            true,
        ),
        sample(
            2,
            "Priya Sharma",
            "+91-9876543211",
            "priya.sharma@email.com",
            CustomerType::Regular,
            true,
        ),
        sample(
            3,
            "Suresh Reddy",
            "+91-9876543212",
            "suresh.reddy@email.com",
            CustomerType::Regular,
            false,
        ),
    ]
}

fn sample(
    id: i64,
    name: &str,
    phone: &str,
    email: &str,
    customer_type: CustomerType,
    kyc_verified: bool,
) -> Customer {
    Customer {
        id,
        name: name.to_string(),
        phone: phone.to_string(),
        email: Some(email.to_string()),
        customer_type,
        kyc_verified,
        total_purchases: None,
        created_at: None,
    }
}

/// Customer service for page loads
pub struct CustomerService;

impl CustomerService {
    /// Load the customer page from `source`
    ///
    /// `search` only applies to the live source and is passed through as
    /// given; only an empty query is the same as no query.
    pub async fn load(
        api: &dyn StorefrontApi,
        source: CustomerSource,
        search: Option<&str>,
    ) -> CustomerPage {
        info!("CustomerService::load ({:?})", source);

        match source {
            CustomerSource::Sample => CustomerPage::Ready(sample_customers()),
            CustomerSource::Live => Self::load_live(api, search).await,
        }
    }

    async fn load_live(api: &dyn StorefrontApi, search: Option<&str>) -> CustomerPage {
        let search = search.filter(|q| !q.is_empty());

        let result = match search {
            Some(query) => api.search_customers(query).await,
            None => api.get_customers().await,
        };

        match result {
            Ok(customers) => {
                info!("Loaded {} customers", customers.len());
                CustomerPage::Ready(customers)
            }
            Err(e) => {
                error!("Error fetching customers: {}", e);
                CustomerPage::Error(LOAD_ERROR_MESSAGE.to_string())
            }
        }
    }
}
