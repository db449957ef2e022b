//! Normalization from raw upstream listings to
//! [`pfsearch_core::NormalizedListing`].

use pfsearch_core::{AgentContact, BrokerContact, ListingPrice, NormalizedListing};
use serde_json::Value;

use crate::error::ScraperError;
use crate::types::{RawPage, RawProperty};

/// Listings and summary metadata extracted from one upstream page.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedPage {
    /// `searchResult.meta`, or an empty object when absent.
    pub meta: Value,
    pub results: Vec<NormalizedListing>,
}

/// Normalizes one page of upstream search data.
///
/// Entries without a `property` object (absent, `null`, or `{}`) are
/// skipped. Order of the remaining entries is preserved. Fields of an
/// unexpected type never fail the page: scalars pass through as-is and
/// malformed nested objects read as absent.
///
/// # Errors
///
/// - [`ScraperError::Schema`] if `pageProps.searchResult` is missing.
/// - [`ScraperError::Deserialize`] if a property object cannot be read into
///   [`RawProperty`] at all.
pub fn normalize_page(page: RawPage) -> Result<NormalizedPage, ScraperError> {
    let search_result = page
        .page_props
        .and_then(|p| p.search_result)
        .ok_or_else(|| ScraperError::Schema {
            context: "missing pageProps.searchResult".to_owned(),
        })?;

    let meta = search_result
        .meta
        .filter(|m| !m.is_null())
        .unwrap_or_else(|| Value::Object(serde_json::Map::new()));

    let total = search_result.listings.len();
    let mut results = Vec::with_capacity(total);

    for (idx, entry) in search_result.listings.into_iter().enumerate() {
        let Some(property) = entry.property.filter(|p| !p.is_empty()) else {
            continue;
        };

        let raw: RawProperty = serde_json::from_value(Value::Object(property)).map_err(|e| {
            ScraperError::Deserialize {
                context: format!("listing {idx} property"),
                source: e,
            }
        })?;

        results.push(normalize_property(raw));
    }

    if results.len() < total {
        tracing::debug!(
            total,
            kept = results.len(),
            "skipped listings without a property object"
        );
    }

    Ok(NormalizedPage { meta, results })
}

/// Flattens a single [`RawProperty`] into a [`NormalizedListing`].
///
/// Never fails: every missing nested object yields `null` sub-fields.
#[must_use]
pub fn normalize_property(property: RawProperty) -> NormalizedListing {
    let (email, phone) = scan_contact_options(&property.contact_options);

    let price = property.price.unwrap_or_default();
    let agent = property.agent.unwrap_or_default();
    let broker = property.broker.unwrap_or_default();

    let image_url = property
        .images
        .first()
        .and_then(|image| image.get("medium"))
        .filter(|medium| !medium.is_null())
        .cloned();

    NormalizedListing {
        title: property.title,
        description: property.description,
        price: ListingPrice {
            value: price.value,
            currency: price.currency,
        },
        location: property.location.and_then(|l| l.full_name),
        bedrooms: property.bedrooms,
        bathrooms: property.bathrooms,
        size_sqft: property.size.and_then(|s| s.value),
        furnished: property.furnished,
        completion_status: property.completion_status,
        listed_date: property.listed_date,
        image_url,
        share_url: property.share_url,
        amenities: property.amenity_names,
        agent: AgentContact {
            name: agent.name,
            email,
            phone,
            languages: agent.languages,
        },
        broker: BrokerContact {
            name: broker.name,
            email: broker.email,
            phone: broker.phone,
        },
    }
}

/// Returns the agent `(email, phone)` from a contact option list.
///
/// The whole list is scanned; when a type repeats, the last value wins.
fn scan_contact_options(options: &[Value]) -> (Option<Value>, Option<Value>) {
    let mut email = None;
    let mut phone = None;

    for option in options {
        let value = option.get("value").filter(|v| !v.is_null()).cloned();
        match option.get("type").and_then(Value::as_str) {
            Some("email") => email = value,
            Some("phone") => phone = value,
            _ => {}
        }
    }

    (email, phone)
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
