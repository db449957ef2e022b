use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single listing flattened from the upstream search payload.
///
/// Every field is always serialized. Absent upstream data becomes `null`
/// (or an empty list for `amenities`), never a missing key. Values are
/// passed through with whatever JSON type the upstream sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NormalizedListing {
    pub title: Option<Value>,
    pub description: Option<Value>,
    pub price: ListingPrice,
    /// Full location name, e.g. `"Dubai Marina, Dubai"`.
    pub location: Option<Value>,
    /// A number or a label like `"studio"`.
    pub bedrooms: Option<Value>,
    pub bathrooms: Option<Value>,
    pub size_sqft: Option<Value>,
    pub furnished: Option<Value>,
    pub completion_status: Option<Value>,
    pub listed_date: Option<Value>,
    /// `medium` variant of the first listing image.
    pub image_url: Option<Value>,
    pub share_url: Option<Value>,
    pub amenities: Vec<Value>,
    pub agent: AgentContact,
    pub broker: BrokerContact,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListingPrice {
    pub value: Option<Value>,
    pub currency: Option<Value>,
}

/// Listing agent. `email` and `phone` come from the listing's contact
/// options, not from the agent object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AgentContact {
    pub name: Option<Value>,
    pub email: Option<Value>,
    pub phone: Option<Value>,
    pub languages: Option<Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BrokerContact {
    pub name: Option<Value>,
    pub email: Option<Value>,
    pub phone: Option<Value>,
}

/// Aggregated result of a multi-page search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    /// Upstream pagination/summary object from the final page-1 fetch.
    pub meta: Value,
    pub total_listings: usize,
    pub results: Vec<NormalizedListing>,
}

impl SearchResponse {
    #[must_use]
    pub fn new(meta: Value, results: Vec<NormalizedListing>) -> Self {
        Self {
            meta,
            total_listings: results.len(),
            results,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SublocationsResponse {
    pub main_location: String,
    pub sublocations: Vec<String>,
}
