//! Multi-page search orchestration.

use pfsearch_core::{
    AppConfig, LookupTable, SearchFilter, SearchResponse, SublocationsResponse,
};

use crate::build_id::BuildIdProvider;
use crate::client::ListingClient;
use crate::error::ScraperError;
use crate::normalize::normalize_page;
use crate::pacing::PacingPolicy;
use crate::params::UpstreamParams;
use crate::sub_area::resolve_sub_area;

/// Runs filter searches and sub-location lookups against the upstream.
///
/// Holds no per-request state, so one instance can serve concurrent
/// requests; each call makes its own sequence of upstream requests.
pub struct ListingSearch {
    pub(crate) client: ListingClient,
    pub(crate) build_ids: BuildIdProvider,
    pacing: PacingPolicy,
    refresh_build_id: bool,
}

impl ListingSearch {
    #[must_use]
    pub fn new(client: ListingClient, build_ids: BuildIdProvider, pacing: PacingPolicy) -> Self {
        Self {
            client,
            build_ids,
            pacing,
            refresh_build_id: true,
        }
    }

    /// Whether to resolve the build id a second time before the final
    /// page-1 fetch. On by default.
    #[must_use]
    pub fn with_build_id_refresh(mut self, refresh: bool) -> Self {
        self.refresh_build_id = refresh;
        self
    }

    /// Builds a search service from application configuration.
    ///
    /// # Errors
    ///
    /// Propagates [`ListingClient::new`] errors.
    pub fn from_config(config: &AppConfig) -> Result<Self, ScraperError> {
        let client = ListingClient::new(&config.upstream_base_url, config.request_timeout_secs)?;
        Ok(Self::new(
            client,
            BuildIdProvider::from(&config.build_id),
            PacingPolicy::new(config.page_delay_ms, config.max_pages),
        )
        .with_build_id_refresh(config.refresh_build_id))
    }

    /// Searches the upstream for `filter` and returns up to
    /// `max_pages` pages of normalized listings.
    ///
    /// Page 1 is fetched once with the base parameters to discover
    /// aggregation links. If `sub_location` matches one of them its zone id
    /// replaces `l`. Page 1 is then fetched again with the final parameters,
    /// followed by pages 2..=min(`max_pages`, `page_count`) in order.
    ///
    /// **All-or-nothing**: a failure on any page discards everything
    /// fetched so far.
    ///
    /// # Errors
    ///
    /// - [`ScraperError::Validation`] for the first unknown filter value
    ///   (location, then option, then property type).
    /// - Any build-id, transport, status or schema error from the upstream.
    pub async fn scrape(&self, filter: &SearchFilter) -> Result<SearchResponse, ScraperError> {
        let resolved = filter.resolve()?;
        let mut params = UpstreamParams::for_search(&resolved);

        let build_id = self.build_ids.build_id(&self.client).await?;
        let discovery = self.client.fetch_page(1, &params, &build_id).await?;

        if let Some(name) = resolved.sub_location.as_deref() {
            let links = discovery.aggregation_links();
            match resolve_sub_area(name, links, self.client.base_url()) {
                Some(zone_id) => {
                    tracing::info!(sub_location = name, zone_id = %zone_id, "applying sub-location");
                    params.set("l", zone_id);
                }
                None => {
                    tracing::info!(
                        sub_location = name,
                        candidates = links.len(),
                        "sub-location did not match any aggregation link"
                    );
                }
            }
        }

        let build_id = if self.refresh_build_id {
            self.build_ids.build_id(&self.client).await?
        } else {
            build_id
        };

        let first = self.client.fetch_page(1, &params, &build_id).await?;
        let pages = self.pacing.pages_to_fetch(first.page_count());
        let first = normalize_page(first)?;

        let meta = first.meta;
        let mut results = first.results;

        for page in 2..=pages {
            self.pacing.pause().await;
            let raw = self.client.fetch_page(page, &params, &build_id).await?;
            results.extend(normalize_page(raw)?.results);
        }

        tracing::info!(
            location = %filter.main_location,
            pages,
            total = results.len(),
            "search complete"
        );

        Ok(SearchResponse::new(meta, results))
    }

    /// Lists the names of sub-locations the upstream offers for
    /// `main_location`, in upstream order.
    ///
    /// # Errors
    ///
    /// - [`ScraperError::Validation`] if `main_location` is unknown.
    /// - Any build-id, transport, status or schema error from the upstream.
    pub async fn list_sublocations(
        &self,
        main_location: &str,
    ) -> Result<SublocationsResponse, ScraperError> {
        let location_id = LookupTable::Location.resolve(main_location)?;
        let params = UpstreamParams::for_sublocations(location_id);

        let build_id = self.build_ids.build_id(&self.client).await?;
        let page = self.client.fetch_page(1, &params, &build_id).await?;

        let sublocations = page
            .aggregation_links()
            .iter()
            .map(|link| link.name.clone())
            .collect();

        Ok(SublocationsResponse {
            main_location: main_location.to_owned(),
            sublocations,
        })
    }
}
