//! Wind speed height correction using a logarithmic wind profile

/// Reference height of most model wind output, metres
pub const REFERENCE_HEIGHT_M: f64 = 10.0;

/// Height the scorer expects wind at, metres
pub const SURFACE_HEIGHT_M: f64 = 2.0;

/// Roughness length over open water, metres
pub const DEFAULT_ROUGHNESS_LENGTH_M: f64 = 0.001;

/// Convert a 10 m wind speed to `target_height` metres.
///
/// `u10 * ln(target / z0) / ln(10 / z0)`. Non-positive input yields 0.
#[must_use]
pub fn wind_at_height(u10: f64, target_height: f64, roughness_length: f64) -> f64 {
    if u10 <= 0.0 {
        return 0.0;
    }
    let ratio = (target_height / roughness_length).ln()
        / (REFERENCE_HEIGHT_M / roughness_length).ln();
    u10 * ratio
}

/// 10 m wind speed brought down to the 2 m scoring height
#[must_use]
pub fn wind_at_2m(u10: f64) -> f64 {
    wind_at_height(u10, SURFACE_HEIGHT_M, DEFAULT_ROUGHNESS_LENGTH_M)
}

/// Multiplier from 10 m to 2 m wind speed (1 when there is no wind)
#[must_use]
pub fn wind_correction_factor(u10: f64) -> f64 {
    if u10 <= 0.0 {
        return 1.0;
    }
    wind_at_2m(u10) / u10
}
