//! Page pacing for multi-page fetches.
//!
//! Pages of one search are fetched strictly one after another with a fixed
//! pause between them, and only the first `max_pages` pages are read. The
//! upstream starts serving bot-detection pages to clients that page through
//! results faster or deeper than a browser would.

use std::time::Duration;

/// Delay and depth limits applied while paging through a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PacingPolicy {
    /// Pause before every page after the first.
    pub inter_page_delay: Duration,
    /// Upper bound on pages fetched per search, at least 1.
    pub max_pages: u32,
}

impl Default for PacingPolicy {
    fn default() -> Self {
        Self {
            inter_page_delay: Duration::from_millis(300),
            max_pages: 4,
        }
    }
}

impl PacingPolicy {
    #[must_use]
    pub fn new(inter_page_delay_ms: u64, max_pages: u32) -> Self {
        Self {
            inter_page_delay: Duration::from_millis(inter_page_delay_ms),
            max_pages: max_pages.max(1),
        }
    }

    /// No delay; useful in tests against a local mock upstream.
    #[must_use]
    pub fn immediate(max_pages: u32) -> Self {
        Self::new(0, max_pages)
    }

    /// Number of pages to fetch given the upstream's reported `page_count`.
    ///
    /// Page 1 is always fetched, so the result is at least 1.
    #[must_use]
    pub fn pages_to_fetch(&self, page_count: u64) -> u32 {
        let capped = page_count.min(u64::from(self.max_pages));
        u32::try_from(capped).unwrap_or(self.max_pages).max(1)
    }

    /// Sleeps for the inter-page delay, if any.
    pub async fn pause(&self) {
        if !self.inter_page_delay.is_zero() {
            tokio::time::sleep(self.inter_page_delay).await;
        }
    }
}
