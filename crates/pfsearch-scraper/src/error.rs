use pfsearch_core::LookupError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScraperError {
    /// A filter value is not a key of its lookup table.
    #[error("{0}")]
    Validation(#[from] LookupError),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// The upstream payload parsed but lacks a structurally required key.
    #[error("unexpected upstream payload: {context}")]
    Schema { context: String },

    #[error("could not resolve upstream build id: {reason}")]
    BuildIdUnavailable { reason: String },

    #[error("invalid upstream base URL \"{url}\": {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}

impl ScraperError {
    /// Stable machine-readable discriminator for API error bodies.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            ScraperError::Validation(_) => "not_found",
            ScraperError::Http(_) => "upstream_unreachable",
            ScraperError::UnexpectedStatus { .. } => "upstream_http",
            ScraperError::Deserialize { .. } | ScraperError::Schema { .. } => "upstream_schema",
            ScraperError::BuildIdUnavailable { .. } => "build_id_unavailable",
            ScraperError::InvalidBaseUrl { .. } => "internal_error",
        }
    }

    /// `true` when the failure is the caller's fault rather than upstream's.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, ScraperError::Validation(_))
    }
}
