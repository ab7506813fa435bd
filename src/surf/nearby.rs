//! Spot proximity ranking

use serde::{Deserialize, Serialize};

use crate::models::Coordinate;
use crate::surf::geo::distance_km;
use crate::surf::spots::Spot;

/// Radius used when callers do not pick one, km
pub const DEFAULT_RADIUS_KM: f64 = 20.0;

/// A spot annotated with its distance from a query centre
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpotWithDistance {
    #[serde(flatten)]
    pub spot: Spot,
    pub distance_km: f64,
}

/// Spots split at a radius around a centre, each side nearest first
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NearbySpots {
    pub center: Coordinate,
    pub radius_km: f64,
    pub within: Vec<SpotWithDistance>,
    pub outside: Vec<SpotWithDistance>,
}

/// Every spot with its distance from `center`, nearest first
#[must_use]
pub fn all_spots_with_distance(spots: &[Spot], center: Coordinate) -> Vec<SpotWithDistance> {
    let mut with_distance: Vec<SpotWithDistance> = spots
        .iter()
        .map(|spot| SpotWithDistance {
            distance_km: distance_km(center, spot.coordinate),
            spot: spot.clone(),
        })
        .collect();
    sort_by_distance(&mut with_distance);
    with_distance
}

/// Partition spots at `radius_km` from `center`.
///
/// The boundary is inclusive: a spot exactly `radius_km` away is within.
#[must_use]
pub fn nearby_spots(spots: &[Spot], center: Coordinate, radius_km: f64) -> NearbySpots {
    let (within, outside): (Vec<_>, Vec<_>) = all_spots_with_distance(spots, center)
        .into_iter()
        .partition(|s| s.distance_km <= radius_km);

    NearbySpots {
        center,
        radius_km,
        within,
        outside,
    }
}

fn sort_by_distance(spots: &mut [SpotWithDistance]) {
    spots.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surf::spots::SpotType;

    fn create_test_spot(id: &str, lat: f64, lon: f64) -> Spot {
        Spot {
            id: id.to_string(),
            name: format!("Spot {id}"),
            coordinate: Coordinate::new(lat, lon),
            orientation: 270.0,
            spot_type: SpotType::Beach,
            country: "Ireland".to_string(),
            county: "Sligo".to_string(),
            region: "Connacht".to_string(),
        }
    }

    fn create_test_spots() -> Vec<Spot> {
        vec![
            create_test_spot("far", 54.6, -8.6),
            create_test_spot("near", 54.28, -8.6),
            create_test_spot("middle", 54.4, -8.6),
            create_test_spot("here", 54.27, -8.6),
        ]
    }

    const CENTER: Coordinate = Coordinate::new(54.27, -8.6);

    #[test]
    fn test_all_spots_sorted_nearest_first() {
        let ranked = all_spots_with_distance(&create_test_spots(), CENTER);
        let ids: Vec<&str> = ranked.iter().map(|s| s.spot.id.as_str()).collect();
        assert_eq!(ids, vec!["here", "near", "middle", "far"]);
        assert!(ranked[0].distance_km.abs() < 1e-9);
    }

    #[test]
    fn test_partition_is_exhaustive_and_disjoint() {
        let spots = create_test_spots();
        let result = nearby_spots(&spots, CENTER, DEFAULT_RADIUS_KM);

        assert_eq!(result.within.len() + result.outside.len(), spots.len());
        assert!(result.within.iter().all(|s| s.distance_km <= DEFAULT_RADIUS_KM));
        assert!(result.outside.iter().all(|s| s.distance_km > DEFAULT_RADIUS_KM));
        assert_eq!(result.within.len(), 3);
        assert_eq!(result.outside[0].spot.id, "far");
        assert_eq!(result.center, CENTER);
        assert_eq!(result.radius_km, DEFAULT_RADIUS_KM);
    }

    #[test]
    fn test_radius_boundary_is_inclusive() {
        let spots = create_test_spots();
        let exact = all_spots_with_distance(&spots, CENTER)
            .into_iter()
            .find(|s| s.spot.id == "middle")
            .unwrap()
            .distance_km;

        let result = nearby_spots(&spots, CENTER, exact);
        assert_eq!(result.within.last().unwrap().spot.id, "middle");
        assert!(result.outside.iter().all(|s| s.spot.id != "middle"));
    }

    #[test]
    fn test_empty_catalog() {
        let result = nearby_spots(&[], CENTER, 5.0);
        assert!(result.within.is_empty());
        assert!(result.outside.is_empty());
    }

    #[test]
    fn test_serializes_distance_alongside_spot_fields() {
        let ranked = all_spots_with_distance(&create_test_spots()[1..2], CENTER);
        let value = serde_json::to_value(&ranked[0]).unwrap();
        assert_eq!(value["id"], "near");
        assert_eq!(value["type"], "beach");
        assert!(value["distanceKm"].as_f64().unwrap() > 1.0);
    }
}
