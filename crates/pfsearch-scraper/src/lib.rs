pub mod build_id;
pub mod client;
pub mod error;
pub mod normalize;
pub mod pacing;
pub mod params;
pub mod probe;
pub mod search;
pub mod sub_area;
pub mod types;

pub use build_id::{extract_build_id, BuildIdProvider};
pub use client::ListingClient;
pub use error::ScraperError;
pub use normalize::{normalize_page, normalize_property, NormalizedPage};
pub use pacing::PacingPolicy;
pub use params::UpstreamParams;
pub use probe::ZoneMatch;
pub use search::ListingSearch;
pub use sub_area::resolve_sub_area;
pub use types::{AggregationLink, RawPage};
