//! Surf spot reference data
//!
//! Spots are static: loaded once into a [`SpotCatalog`] and never mutated.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::path::Path;
use tracing::info;

use crate::error::SurfNotifyError;
use crate::models::Coordinate;

const BUNDLED_SPOTS: &str = include_str!("../../data/spots.json");

/// A surf break
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Spot {
    pub id: String,
    pub name: String,
    #[serde(flatten)]
    pub coordinate: Coordinate,
    /// Compass direction the break faces, degrees (0 = North)
    pub orientation: f64,
    #[serde(rename = "type")]
    pub spot_type: SpotType,
    pub country: String,
    pub county: String,
    pub region: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpotType {
    Beach,
    Reef,
    Harbour,
    Bay,
    Island,
}

/// Immutable, id-indexed collection of spots
#[derive(Debug, Clone, Default)]
pub struct SpotCatalog {
    spots: Vec<Spot>,
}

impl SpotCatalog {
    /// Build a catalog, rejecting duplicate ids and out-of-range geometry
    pub fn new(spots: Vec<Spot>) -> crate::Result<Self> {
        let mut seen = HashSet::new();
        for spot in &spots {
            if !seen.insert(spot.id.as_str()) {
                return Err(SurfNotifyError::catalog(format!(
                    "duplicate spot id '{}'",
                    spot.id
                )));
            }
            spot.coordinate.validate().map_err(|e| {
                SurfNotifyError::catalog(format!("spot '{}': {e}", spot.id))
            })?;
            if !(0.0..360.0).contains(&spot.orientation) {
                return Err(SurfNotifyError::catalog(format!(
                    "spot '{}': orientation {} out of range [0, 360)",
                    spot.id, spot.orientation
                )));
            }
        }
        Ok(Self { spots })
    }

    /// Parse a JSON array of spots
    pub fn from_json(json: &str) -> crate::Result<Self> {
        let spots: Vec<Spot> = serde_json::from_str(json)?;
        Self::new(spots)
    }

    /// Load a JSON array of spots from disk
    pub fn from_path(path: &Path) -> crate::Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let catalog = Self::from_json(&json)?;
        info!("Loaded {} spots from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    /// The catalog shipped with the crate
    pub fn bundled() -> crate::Result<Self> {
        Self::from_json(BUNDLED_SPOTS)
    }

    #[must_use]
    pub fn all(&self) -> &[Spot] {
        &self.spots
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Spot> {
        self.spots.iter().find(|s| s.id == id)
    }

    #[must_use]
    pub fn by_region(&self, region: &str) -> Vec<&Spot> {
        self.spots.iter().filter(|s| s.region == region).collect()
    }

    #[must_use]
    pub fn by_country(&self, country: &str) -> Vec<&Spot> {
        self.spots.iter().filter(|s| s.country == country).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.spots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.spots.is_empty()
    }
}

impl fmt::Display for SpotType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpotType::Beach => write!(f, "beach"),
            SpotType::Reef => write!(f, "reef"),
            SpotType::Harbour => write!(f, "harbour"),
            SpotType::Bay => write!(f, "bay"),
            SpotType::Island => write!(f, "island"),
        }
    }
}
