//! Backend record types
//!
//! Records are decoded as the backend emits them and passed through to the
//! views unchanged.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

// ============================================================================
// Custom Deserializers for Backend Compatibility
// ============================================================================

/// The backend sends `null` for customers that never went through KYC
fn deserialize_null_as_false<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(false))
}

/// `GET /api/health`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub message: String,
    pub database: String,
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
}

/// One row of `GET /api/rates`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetalRate {
    pub id: i64,
    pub metal_type: String,
    pub rate_per_gram: f64,
    pub date: String,
}

/// One row of `GET /api/products`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub metal_type: String,
    pub weight_grams: f64,
    #[serde(default)]
    pub making_charges: Option<f64>,
    #[serde(default)]
    pub current_price: Option<f64>,
    #[serde(default)]
    pub stock_quantity: Option<i64>,
    #[serde(default)]
    pub hallmark_number: Option<String>,
}

/// Customer tier
///
/// Missing, `null` and empty values all mean `Regular`. Tiers the storefront
/// does not know about are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CustomerType {
    #[default]
    Regular,
    Premium,
    Other(String),
}

impl CustomerType {
    pub fn as_str(&self) -> &str {
        match self {
            CustomerType::Regular => "regular",
            CustomerType::Premium => "premium",
            CustomerType::Other(s) => s,
        }
    }

    pub fn is_premium(&self) -> bool {
        matches!(self, CustomerType::Premium)
    }
}

impl From<&str> for CustomerType {
    fn from(s: &str) -> Self {
        match s {
            "" | "regular" => CustomerType::Regular,
            "premium" => CustomerType::Premium,
            other => CustomerType::Other(other.to_string()),
        }
    }
}

impl<'de> Deserialize<'de> for CustomerType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.as_deref().map(CustomerType::from).unwrap_or_default())
    }
}

impl Serialize for CustomerType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

/// One row of `GET /api/customers`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: i64,
    pub name: String,
    pub phone: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub customer_type: CustomerType,
    #[serde(default, deserialize_with = "deserialize_null_as_false")]
    pub kyc_verified: bool,
    #[serde(default)]
    pub total_purchases: Option<f64>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}
