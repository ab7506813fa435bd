//! Candidate shortlisting and batch assessment
//!
//! Bridges proximity ranking and the scorer: pick the spots worth checking
//! for a surfer, fetch their latest readings in one batch, and score each
//! one. Distance weight and suitability are reported side by side; neither
//! filters the other.
//!
//! Surfers with a known position get the spots nearest to it. Surfers
//! without one get the spots of their home and usual regions, with no
//! distance figures.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

use crate::models::{Coordinate, SkillLevel, Strictness, SurferProfile, User};
use crate::store::ConditionsStore;
use crate::surf::geo::distance_score;
use crate::surf::nearby::all_spots_with_distance;
use crate::surf::scoring::{SuitabilityResult, score_spot};
use crate::surf::spots::{Spot, SpotType};

/// Number of spots shortlisted when callers do not pick one
pub const DEFAULT_CANDIDATE_LIMIT: usize = 15;

const NO_CONDITIONS: &str = "No live conditions";

/// Where a shortlist is drawn from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SearchArea {
    /// Nearest spots around a point
    Around(Coordinate),
    /// Spots of these regions in preference order, catalog order within each
    Regions(Vec<String>),
}

impl fmt::Display for SearchArea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchArea::Around(center) => write!(f, "around {}", center.format_coordinates()),
            SearchArea::Regions(regions) => write!(f, "in {}", regions.join(", ")),
        }
    }
}

/// What to shortlist
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateQuery {
    pub area: SearchArea,
    pub strictness: Strictness,
    pub limit: usize,
    pub avoid_reefs: bool,
}

impl CandidateQuery {
    /// Query for a user: around their last location, else in their known
    /// regions, else around `fallback`
    #[must_use]
    pub fn for_user(
        user: &User,
        fallback: Coordinate,
        default_strictness: Strictness,
        limit: usize,
    ) -> Self {
        let regions = user_regions(user);
        let area = if user.last_location.is_none() && !regions.is_empty() {
            SearchArea::Regions(regions)
        } else {
            SearchArea::Around(user_center(user, fallback))
        };

        Self {
            area,
            ..Self::for_profile(&user.profile, fallback, default_strictness, limit)
        }
    }

    #[must_use]
    pub fn for_profile(
        profile: &SurferProfile,
        center: Coordinate,
        default_strictness: Strictness,
        limit: usize,
    ) -> Self {
        Self {
            area: SearchArea::Around(center),
            strictness: profile.strictness_or(default_strictness),
            limit,
            avoid_reefs: profile.avoid_reefs,
        }
    }
}

/// A shortlisted spot with display-rounded distance figures
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpotCandidate {
    pub id: String,
    pub name: String,
    pub region: String,
    #[serde(rename = "type")]
    pub spot_type: SpotType,
    pub orientation: f64,
    /// Rounded to 0.1 km; unknown for region shortlists
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_km: Option<f64>,
    /// Rounded to 0.01
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_score: Option<f64>,
}

impl SpotCandidate {
    fn from_spot(spot: Spot, distance_km: Option<f64>, strictness: Strictness) -> Self {
        Self {
            distance_score: distance_km.map(|km| round_to(distance_score(km, strictness), 100.0)),
            distance_km: distance_km.map(|km| round_to(km, 10.0)),
            id: spot.id,
            name: spot.name,
            region: spot.region,
            spot_type: spot.spot_type,
            orientation: spot.orientation,
        }
    }
}

/// Scored outcome for one candidate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpotAssessment {
    pub spot_id: String,
    pub spot_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_km: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suitability: Option<SuitabilityResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// The user's last known position, else `fallback`
#[must_use]
pub fn user_center(user: &User, fallback: Coordinate) -> Coordinate {
    user.last_location
        .as_ref()
        .map_or(fallback, |loc| loc.coordinate)
}

/// Home region first, then usual regions, blanks and repeats dropped
#[must_use]
pub fn user_regions(user: &User) -> Vec<String> {
    let mut regions: Vec<String> = Vec::new();
    for region in user.home_region.iter().chain(&user.usual_regions) {
        let region = region.trim();
        if !region.is_empty() && !regions.iter().any(|r| r.eq_ignore_ascii_case(region)) {
            regions.push(region.to_string());
        }
    }
    regions
}

/// First `query.limit` spots of the query's area, reefs dropped when the
/// surfer avoids them
#[must_use]
pub fn shortlist_candidates(spots: &[Spot], query: &CandidateQuery) -> Vec<SpotCandidate> {
    let wanted = |spot: &Spot| !(query.avoid_reefs && spot.spot_type == SpotType::Reef);

    let candidates: Vec<SpotCandidate> = match &query.area {
        SearchArea::Around(center) => all_spots_with_distance(spots, *center)
            .into_iter()
            .filter(|s| wanted(&s.spot))
            .take(query.limit)
            .map(|s| SpotCandidate::from_spot(s.spot, Some(s.distance_km), query.strictness))
            .collect(),
        SearchArea::Regions(regions) => regions
            .iter()
            .flat_map(|region| {
                spots
                    .iter()
                    .filter(move |s| s.region.eq_ignore_ascii_case(region))
            })
            .filter(|s| wanted(*s))
            .take(query.limit)
            .map(|s| SpotCandidate::from_spot(s.clone(), None, query.strictness))
            .collect(),
    };

    debug!(
        "Shortlisted {} of {} spots {} ({} strictness)",
        candidates.len(),
        spots.len(),
        query.area,
        query.strictness
    );
    candidates
}

/// Score each candidate against its latest reading, in candidate order
pub fn assess_candidates(
    candidates: &[SpotCandidate],
    store: &dyn ConditionsStore,
    skill: SkillLevel,
) -> crate::Result<Vec<SpotAssessment>> {
    let ids: Vec<&str> = candidates.iter().map(|c| c.id.as_str()).collect();
    let readings = store.latest_for_spots(&ids)?;

    let assessments: Vec<SpotAssessment> = candidates
        .iter()
        .map(|candidate| {
            let reading = readings
                .iter()
                .find(|(id, _)| *id == candidate.id)
                .and_then(|(_, reading)| reading.as_ref());

            let suitability = reading
                .map(|r| score_spot(&r.to_scoring_input(candidate.orientation, skill)));

            SpotAssessment {
                spot_id: candidate.id.clone(),
                spot_name: candidate.name.clone(),
                distance_km: candidate.distance_km,
                distance_score: candidate.distance_score,
                error: suitability.is_none().then(|| NO_CONDITIONS.to_string()),
                suitability,
            }
        })
        .collect();

    debug!(
        "Assessed {} candidates, {} with live conditions",
        assessments.len(),
        assessments.iter().filter(|a| a.suitability.is_some()).count()
    );
    Ok(assessments)
}

/// Highest suitability; ties go to the higher distance score, then to the
/// earlier entry.
#[must_use]
pub fn best_assessment(assessments: &[SpotAssessment]) -> Option<&SpotAssessment> {
    assessments
        .iter()
        .filter_map(|a| a.suitability.as_ref().map(|s| (a, s.score)))
        .fold(None, |best: Option<(&SpotAssessment, f64)>, (a, score)| match best {
            Some((b, best_score))
                if score < best_score
                    || (score == best_score && a.distance_score <= b.distance_score) =>
            {
                Some((b, best_score))
            }
            _ => Some((a, score)),
        })
        .map(|(a, _)| a)
}

fn round_to(value: f64, factor: f64) -> f64 {
    (value * factor).round() / factor
}
