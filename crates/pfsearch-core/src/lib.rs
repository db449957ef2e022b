pub mod app_config;
pub mod config;
pub mod filter;
pub mod listing;
pub mod lookup;

use thiserror::Error;

pub use app_config::{AppConfig, BuildIdStrategy, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use filter::{Bedrooms, ResolvedFilter, SearchFilter};
pub use listing::{
    AgentContact, BrokerContact, ListingPrice, NormalizedListing, SearchResponse,
    SublocationsResponse,
};
pub use lookup::{LookupError, LookupTable};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
