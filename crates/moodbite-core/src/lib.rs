pub mod app_config;
pub mod config;
pub mod distance;
pub mod moods;
pub mod place;
pub mod rank;

use thiserror::Error;

pub use app_config::DiscoveryConfig;
pub use config::{load_discovery_config, load_discovery_config_from_env};
pub use distance::haversine_meters;
pub use moods::{mood_by_id, Mood, DISTANCE_OPTIONS_M, MOODS};
pub use place::{Coordinate, Location, Place, SearchOutcome, SearchRequest, TagFilter, TagPair};
pub use rank::rank_by_distance;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid tag spec \"{0}\": expected \"key=value\"")]
    InvalidTagSpec(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for environment variable {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
