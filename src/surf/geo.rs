//! Great-circle distance and distance-decay weighting

use crate::models::{Coordinate, Strictness};

/// Haversine distance in kilometres on a sphere of radius 6371 km
///
/// NaN in gives NaN out; callers validate ranges.
#[must_use]
pub fn distance_km(a: Coordinate, b: Coordinate) -> f64 {
    haversine::distance(
        haversine::Location {
            latitude: a.lat,
            longitude: a.lon,
        },
        haversine::Location {
            latitude: b.lat,
            longitude: b.lon,
        },
        haversine::Units::Kilometers,
    )
}

/// Relevance weight in `(0, 1]` for a spot `distance_km` away.
///
/// `exp(-k * distance)`, with `k` taken from the strictness. There is no
/// cutoff, so the weight only ever approaches zero.
#[must_use]
pub fn distance_score(distance_km: f64, strictness: Strictness) -> f64 {
    (-strictness.decay_rate() * distance_km).exp()
}
