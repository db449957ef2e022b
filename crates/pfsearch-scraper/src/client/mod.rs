//! HTTP client for the upstream site's private search data API.

mod headers;

use std::time::Duration;

use reqwest::header::HeaderMap;
use reqwest::{Client, Url};

use crate::error::ScraperError;
use crate::params::UpstreamParams;
use crate::types::RawPage;

/// Build-id placeholder the upstream accepts on the lookup request.
const LOOKUP_BUILD_ID: &str = "v";

/// HTTP client for the upstream search data endpoint.
///
/// Holds the base URL and the pre-built header bundles. Every request is a
/// plain GET; nothing is retried.
pub struct ListingClient {
    pub(crate) client: Client,
    base_url: Url,
    page_headers: HeaderMap,
    build_id_headers: HeaderMap,
}

impl ListingClient {
    /// Creates a client for the upstream at `base_url` with the given
    /// request timeout.
    ///
    /// # Errors
    ///
    /// - [`ScraperError::InvalidBaseUrl`] if `base_url` is not an absolute
    ///   http(s) URL with a host.
    /// - [`ScraperError::Http`] if the underlying `reqwest::Client` cannot be
    ///   constructed.
    pub fn new(base_url: &str, timeout_secs: u64) -> Result<Self, ScraperError> {
        let trimmed = base_url.trim_end_matches('/');
        let parsed = Url::parse(trimmed).map_err(|e| ScraperError::InvalidBaseUrl {
            url: base_url.to_owned(),
            reason: e.to_string(),
        })?;
        let host = match (parsed.host_str(), parsed.port()) {
            (Some(host), Some(port)) => format!("{host}:{port}"),
            (Some(host), None) => host.to_owned(),
            (None, _) => {
                return Err(ScraperError::InvalidBaseUrl {
                    url: base_url.to_owned(),
                    reason: "URL has no host".to_owned(),
                })
            }
        };

        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(headers::BROWSER_UA)
            .http1_title_case_headers()
            .build()?;

        Ok(Self {
            client,
            page_headers: headers::page_headers(trimmed)?,
            build_id_headers: headers::build_id_headers(trimmed, &host)?,
            base_url: parsed,
        })
    }

    /// Upstream origin every URL is built from.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Fetches one page of search data for `params` and parses it.
    ///
    /// `page` overrides any `page` entry already present in `params`.
    ///
    /// # Errors
    ///
    /// - [`ScraperError::UnexpectedStatus`] on any non-2xx status.
    /// - [`ScraperError::Http`] on network or TLS failure.
    /// - [`ScraperError::Deserialize`] if the body is not the expected JSON.
    pub async fn fetch_page(
        &self,
        page: u32,
        params: &UpstreamParams,
        build_id: &str,
    ) -> Result<RawPage, ScraperError> {
        let (url, body) = self.fetch_page_body(page, params, build_id).await?;
        serde_json::from_str::<RawPage>(&body).map_err(|e| ScraperError::Deserialize {
            context: format!("search page {page} from {url}"),
            source: e,
        })
    }

    /// Fetches one page of search data and returns the URL and raw body.
    ///
    /// # Errors
    ///
    /// - [`ScraperError::UnexpectedStatus`] on any non-2xx status.
    /// - [`ScraperError::Http`] on network or TLS failure.
    pub(crate) async fn fetch_page_body(
        &self,
        page: u32,
        params: &UpstreamParams,
        build_id: &str,
    ) -> Result<(Url, String), ScraperError> {
        let mut params = params.clone();
        params.set("page", page.to_string());
        let url = self.data_url(build_id, &params)?;

        tracing::debug!(%url, page, "fetching search page");

        let response = self
            .client
            .get(url.clone())
            .headers(self.page_headers.clone())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScraperError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        Ok((url, body))
    }

    /// Fetches the HTML the upstream serves for an unknown build id.
    ///
    /// The status is not checked: the upstream answers this request with an
    /// error page that still embeds the current build id.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::Http`] on network or TLS failure.
    pub(crate) async fn fetch_build_id_page(&self) -> Result<String, ScraperError> {
        let url = self.data_url(LOOKUP_BUILD_ID, &UpstreamParams::for_build_id_lookup())?;

        let response = self
            .client
            .get(url)
            .headers(self.build_id_headers.clone())
            .send()
            .await?;

        tracing::debug!(status = response.status().as_u16(), "build id page fetched");
        Ok(response.text().await?)
    }

    /// Builds `{base}/search/_next/data/{build_id}/en/search.json?{params}`.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::BuildIdUnavailable`] if `build_id` cannot be
    /// used as a single path segment.
    fn data_url(&self, build_id: &str, params: &UpstreamParams) -> Result<Url, ScraperError> {
        if build_id.is_empty() || build_id.contains(['/', '?', '#']) {
            return Err(ScraperError::BuildIdUnavailable {
                reason: format!("\"{build_id}\" is not a usable path segment"),
            });
        }

        let mut url = self.base_url.clone();
        url.set_path(&format!("/search/_next/data/{build_id}/en/search.json"));
        url.set_query(None);
        url.query_pairs_mut().extend_pairs(params.iter());
        Ok(url)
    }
}

#[cfg(test)]
#[path = "../client_test.rs"]
mod tests;
