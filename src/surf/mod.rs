//! Surf module
//!
//! This module provides the surf-suitability core:
//! - Great-circle distance and distance-decay weighting
//! - Wind speed height correction
//! - Skill-aware suitability scoring of environmental readings
//! - Spot catalog and proximity ranking
//! - Candidate shortlisting and batch assessment
//!
//! Everything except catalog loading and assessment is a pure function.

pub mod candidates;
pub mod geo;
pub mod nearby;
pub mod scoring;
pub mod spots;
pub mod wind;

// Re-export commonly used types from submodules
pub use candidates::{
    CandidateQuery, SearchArea, SpotAssessment, SpotCandidate, assess_candidates,
    best_assessment, shortlist_candidates, user_center, user_regions,
};
pub use geo::{distance_km, distance_score};
pub use nearby::{NearbySpots, SpotWithDistance, all_spots_with_distance, nearby_spots};
#[allow(deprecated)]
pub use scoring::{
    ScoringInput, SkillThresholds, SuitabilityResult, score_spot, score_spot_legacy,
};
pub use spots::{Spot, SpotCatalog, SpotType};
pub use wind::{wind_at_2m, wind_at_height, wind_correction_factor};
