//! Coordinate model for geographic positions

use serde::{Deserialize, Serialize};

use crate::error::SurfNotifyError;

/// Latitude/longitude pair in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    /// Latitude in decimal degrees
    pub lat: f64,
    /// Longitude in decimal degrees
    pub lon: f64,
}

impl Coordinate {
    /// Create a coordinate without range checks
    #[must_use]
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Check that latitude and longitude are within their valid ranges
    pub fn validate(&self) -> crate::Result<()> {
        if !(-90.0..=90.0).contains(&self.lat) {
            return Err(SurfNotifyError::validation(format!(
                "Latitude {} out of range [-90, 90]",
                self.lat
            )));
        }
        if !(-180.0..=180.0).contains(&self.lon) {
            return Err(SurfNotifyError::validation(format!(
                "Longitude {} out of range [-180, 180]",
                self.lon
            )));
        }
        Ok(())
    }

    /// Format as a coordinates string
    #[must_use]
    pub fn format_coordinates(&self) -> String {
        format!("{:.4}, {:.4}", self.lat, self.lon)
    }
}
