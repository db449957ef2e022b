//! Resolution of the upstream's rotating build identifier.
//!
//! The upstream is a Next.js site. Its data API lives under
//! `/_next/data/{buildId}/…`, and `buildId` changes with every deploy. The
//! current value is embedded in the `__NEXT_DATA__` script of any
//! server-rendered page.

use pfsearch_core::BuildIdStrategy;
use regex::Regex;

use crate::client::ListingClient;
use crate::error::ScraperError;

/// Source of the build identifier used to address the data API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildIdProvider {
    /// A previously observed token, used as-is with no network call.
    Static(String),
    /// Scrape the token from the upstream on every call. No caching.
    Scrape,
}

impl From<&BuildIdStrategy> for BuildIdProvider {
    fn from(strategy: &BuildIdStrategy) -> Self {
        match strategy {
            BuildIdStrategy::Static(token) => BuildIdProvider::Static(token.clone()),
            BuildIdStrategy::Scrape => BuildIdProvider::Scrape,
        }
    }
}

impl BuildIdProvider {
    /// Returns the build id to use for the next batch of page requests.
    ///
    /// # Errors
    ///
    /// - [`ScraperError::Http`] if the lookup request fails.
    /// - [`ScraperError::BuildIdUnavailable`] if the page does not embed a
    ///   readable build id.
    pub async fn build_id(&self, client: &ListingClient) -> Result<String, ScraperError> {
        match self {
            BuildIdProvider::Static(token) => Ok(token.clone()),
            BuildIdProvider::Scrape => {
                let html = client.fetch_build_id_page().await?;
                let build_id = extract_build_id(&html)?;
                tracing::debug!(build_id = %build_id, "resolved upstream build id");
                Ok(build_id)
            }
        }
    }
}

/// Extracts `buildId` from the first `__NEXT_DATA__` script in `html`.
///
/// # Errors
///
/// Returns [`ScraperError::BuildIdUnavailable`] if the script tag is missing,
/// its content is not JSON, or `buildId` is absent or not a non-empty string.
pub fn extract_build_id(html: &str) -> Result<String, ScraperError> {
    let pattern =
        Regex::new(r#"(?s)<script id="__NEXT_DATA__" type="application/json">(.*?)</script>"#)
            .expect("valid regex");

    let blob = pattern
        .captures(html)
        .and_then(|cap| cap.get(1))
        .map(|m| m.as_str())
        .ok_or_else(|| ScraperError::BuildIdUnavailable {
            reason: "no __NEXT_DATA__ script in page".to_owned(),
        })?;

    let data: serde_json::Value =
        serde_json::from_str(blob).map_err(|e| ScraperError::BuildIdUnavailable {
            reason: format!("__NEXT_DATA__ is not valid JSON: {e}"),
        })?;

    data.get("buildId")
        .and_then(serde_json::Value::as_str)
        .filter(|id| !id.is_empty())
        .map(str::to_owned)
        .ok_or_else(|| ScraperError::BuildIdUnavailable {
            reason: "__NEXT_DATA__ has no buildId".to_owned(),
        })
}
