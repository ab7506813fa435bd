//! `SurfNotify` - skill-aware surf suitability scoring
//!
//! This library decides how good present conditions at a surf spot are for
//! a particular surfer, and how far away each spot is. It provides the
//! suitability scorer, distance weighting, wind height correction, spot
//! proximity ranking and the store seam used to feed them.

pub mod config;
pub mod error;
pub mod models;
pub mod store;
pub mod surf;

// Re-export core types for public API
pub use config::SurfNotifyConfig;
pub use error::SurfNotifyError;
pub use models::{Coordinate, SkillLevel, SpotConditions, Strictness, SurferProfile, User};
pub use store::{ConditionsStore, InMemoryStore, Snapshot, UserStore};
pub use surf::{
    NearbySpots, ScoringInput, Spot, SpotCatalog, SpotWithDistance, SuitabilityResult,
    all_spots_with_distance, distance_km, distance_score, nearby_spots, score_spot,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, SurfNotifyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
