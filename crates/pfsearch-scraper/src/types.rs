//! Upstream response types for the search data endpoint
//! (`/search/_next/data/{build_id}/en/search.json`).
//!
//! ## Observed shape
//!
//! ```text
//! {
//!   "pageProps": {
//!     "searchResult": {
//!       "listings": [ { "property": { ... } }, ... ],
//!       "meta": { "page_count": 12, "total_count": 280, ... }
//!     },
//!     "pageMeta": {
//!       "aggregationLinks": [ { "name": "Dubai Marina", "link": "/en/search?l=50&..." } ]
//!     }
//!   }
//! }
//! ```
//!
//! The endpoint is private and unversioned, so only the fields that are read
//! are modelled and every one of them is optional. Explicit `null` is treated
//! the same as an absent key.
//!
//! ### Listings
//! Entries are wrappers; the payload lives under `property`. Sponsored or
//! placeholder entries arrive with no `property` (or an empty one) and are
//! skipped during normalization.
//!
//! ### Loosely typed scalars
//! `bedrooms` is either a number or a label such as `"studio"`, and
//! `price.value` / `size.value` may be integers or floats. Text fields have
//! been seen as numbers too (`listed_date` as an epoch). Every listing scalar
//! is kept as a raw [`serde_json::Value`] and passed through unchanged.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

/// Top-level response from the search data endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct RawPage {
    #[serde(rename = "pageProps")]
    pub page_props: Option<PageProps>,
}

#[derive(Debug, Default, Deserialize)]
pub struct PageProps {
    #[serde(rename = "searchResult")]
    pub search_result: Option<SearchResult>,
    #[serde(rename = "pageMeta")]
    pub page_meta: Option<PageMeta>,
}

#[derive(Debug, Default, Deserialize)]
pub struct PageMeta {
    #[serde(
        rename = "aggregationLinks",
        default,
        deserialize_with = "null_as_default"
    )]
    pub aggregation_links: Vec<AggregationLink>,
}

/// A narrower sub-area filter offered for the current main location.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AggregationLink {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    /// Absolute or site-relative URL whose `l` query parameter is the
    /// sub-area zone id.
    #[serde(default, deserialize_with = "null_as_default")]
    pub link: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchResult {
    #[serde(default, deserialize_with = "null_as_default")]
    pub listings: Vec<RawListing>,
    pub meta: Option<Value>,
}

/// Listing wrapper. `property` stays untyped until normalization so that
/// empty objects can be recognised and skipped.
#[derive(Debug, Default, Deserialize)]
pub struct RawListing {
    pub property: Option<Map<String, Value>>,
}

/// The listing payload. Scalars are kept as raw JSON and passed through
/// whatever their type; nested objects and lists of the wrong shape are
/// treated as absent, so one odd listing never fails a page.
#[derive(Debug, Default, Deserialize)]
pub struct RawProperty {
    pub title: Option<Value>,
    pub description: Option<Value>,
    #[serde(default, deserialize_with = "object_or_none")]
    pub price: Option<RawPrice>,
    #[serde(default, deserialize_with = "object_or_none")]
    pub location: Option<RawLocation>,
    pub bedrooms: Option<Value>,
    pub bathrooms: Option<Value>,
    #[serde(default, deserialize_with = "object_or_none")]
    pub size: Option<RawSize>,
    pub furnished: Option<Value>,
    pub completion_status: Option<Value>,
    pub listed_date: Option<Value>,
    /// Image renditions; only `medium` of the first entry is read.
    #[serde(default, deserialize_with = "array_or_empty")]
    pub images: Vec<Value>,
    pub share_url: Option<Value>,
    #[serde(default, deserialize_with = "array_or_empty")]
    pub amenity_names: Vec<Value>,
    #[serde(default, deserialize_with = "object_or_none")]
    pub agent: Option<RawAgent>,
    #[serde(default, deserialize_with = "object_or_none")]
    pub broker: Option<RawBroker>,
    /// `{type, value}` entries, e.g. `{"type": "email", "value": "a@x.com"}`.
    #[serde(default, deserialize_with = "array_or_empty")]
    pub contact_options: Vec<Value>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawPrice {
    pub value: Option<Value>,
    pub currency: Option<Value>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawLocation {
    pub full_name: Option<Value>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawSize {
    pub value: Option<Value>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawAgent {
    pub name: Option<Value>,
    pub languages: Option<Value>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawBroker {
    pub name: Option<Value>,
    pub email: Option<Value>,
    pub phone: Option<Value>,
}

impl RawPage {
    /// Aggregation links from `pageProps.pageMeta`, empty when absent.
    #[must_use]
    pub fn aggregation_links(&self) -> &[AggregationLink] {
        self.page_props
            .as_ref()
            .and_then(|p| p.page_meta.as_ref())
            .map(|m| m.aggregation_links.as_slice())
            .unwrap_or_default()
    }

    /// `meta.page_count` of the search result, defaulting to 1 when absent
    /// or not a non-negative integer.
    #[must_use]
    pub fn page_count(&self) -> u64 {
        self.page_props
            .as_ref()
            .and_then(|p| p.search_result.as_ref())
            .and_then(|s| s.meta.as_ref())
            .and_then(|m| m.get("page_count"))
            .and_then(Value::as_u64)
            .unwrap_or(1)
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Deserializes a nested object, yielding `None` for `null` or any
/// non-object value.
fn object_or_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    if !value.is_object() {
        return Ok(None);
    }
    Ok(serde_json::from_value(value).ok())
}

/// Deserializes a JSON array as-is, yielding an empty list for anything else.
fn array_or_empty<'de, D>(deserializer: D) -> Result<Vec<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Array(items) => Ok(items),
        _ => Ok(Vec::new()),
    }
}
