//! Zone id discovery.
//!
//! Zone ids are opaque upstream integers. Probing a range of them and reading
//! the breadcrumb title of each rentals page is how the location table is
//! built and re-checked.

use std::ops::RangeInclusive;

use futures::stream::{self, StreamExt};
use serde::Serialize;

use crate::error::ScraperError;
use crate::params::UpstreamParams;
use crate::search::ListingSearch;

const BREADCRUMB_MARKER: &str = r#"{"title":"Properties for rent "#;
const BREADCRUMB_END: &str = r#"","path":""#;

/// A zone id that resolved to a named location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ZoneMatch {
    pub zone_id: u32,
    pub name: String,
}

impl ListingSearch {
    /// Probes every id in `zone_ids` and returns the ones that resolve to a
    /// named location, sorted by id.
    ///
    /// Probes run with at most `concurrency` requests in flight. Individual
    /// probe failures are logged and skipped.
    ///
    /// # Errors
    ///
    /// Returns build-id errors only; the build id is resolved once for the
    /// whole run.
    pub async fn probe_zones(
        &self,
        zone_ids: RangeInclusive<u32>,
        concurrency: usize,
    ) -> Result<Vec<ZoneMatch>, ScraperError> {
        let build_id = self.build_ids.build_id(&self.client).await?;
        let build_id = build_id.as_str();

        let outcomes: Vec<Option<ZoneMatch>> = stream::iter(zone_ids)
            .map(|zone_id| async move {
                let params = UpstreamParams::for_zone_probe(zone_id);
                match self.client.fetch_page_body(1, &params, build_id).await {
                    Ok((_, body)) => {
                        let name = breadcrumb_location(&body);
                        match &name {
                            Some(name) => tracing::info!(zone_id, name = %name, "zone found"),
                            None => tracing::debug!(zone_id, "zone not found"),
                        }
                        name.map(|name| ZoneMatch { zone_id, name })
                    }
                    Err(e) => {
                        tracing::warn!(zone_id, error = %e, "zone probe failed");
                        None
                    }
                }
            })
            .buffer_unordered(concurrency.max(1))
            .collect()
            .await;

        let mut matches: Vec<ZoneMatch> = outcomes.into_iter().flatten().collect();
        matches.sort_by_key(|m| m.zone_id);
        Ok(matches)
    }
}

/// Reads the location name from a rentals page body.
///
/// A real zone renders the breadcrumb marker exactly twice. Unknown ids fall
/// back to a generic page that repeats it more often.
fn breadcrumb_location(body: &str) -> Option<String> {
    if body.matches(BREADCRUMB_MARKER).count() != 2 {
        return None;
    }

    let start = body.find(BREADCRUMB_MARKER)? + BREADCRUMB_MARKER.len();
    let rest = &body[start..];
    let end = rest.find(BREADCRUMB_END)?;
    let title = rest[..end].trim();
    let name = title.strip_prefix("in ").unwrap_or(title).trim();

    (!name.is_empty()).then(|| name.to_owned())
}
