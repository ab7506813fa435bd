//! Data models for the `SurfNotify` crate
//!
//! This module contains the plain domain data organized by concern:
//! - Location: geographic coordinates
//! - Conditions: environmental readings for a spot
//! - Surfer: skill, preferences and user records

pub mod conditions;
pub mod location;
pub mod surfer;

// Re-export all public types for convenient access
pub use conditions::SpotConditions;
pub use location::Coordinate;
pub use surfer::{
    LastLocation, LocationConfidence, LocationSource, RiskTolerance, SkillLevel, Strictness,
    SurferProfile, User,
};
