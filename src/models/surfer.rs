//! Surfer profile and user models

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::SurfNotifyError;
use crate::models::Coordinate;

/// Surfer ability, which selects the scoring thresholds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillLevel {
    Beginner,
    #[default]
    Intermediate,
    Advanced,
}

impl SkillLevel {
    /// Lenient conversion: anything unrecognised scores as intermediate
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        label.parse().unwrap_or_default()
    }

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            SkillLevel::Beginner => "beginner",
            SkillLevel::Intermediate => "intermediate",
            SkillLevel::Advanced => "advanced",
        }
    }
}

impl FromStr for SkillLevel {
    type Err = SurfNotifyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "beginner" => Ok(SkillLevel::Beginner),
            "intermediate" => Ok(SkillLevel::Intermediate),
            "advanced" => Ok(SkillLevel::Advanced),
            other => Err(SurfNotifyError::validation(format!(
                "Unknown skill level '{other}'. Must be one of: beginner, intermediate, advanced"
            ))),
        }
    }
}

/// How steeply distance should count against a spot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strictness {
    Harsh,
    #[default]
    Lenient,
}

impl Strictness {
    /// Exponential decay rate per kilometre
    #[must_use]
    pub fn decay_rate(&self) -> f64 {
        match self {
            Strictness::Harsh => 0.06,
            Strictness::Lenient => 0.02,
        }
    }
}

impl FromStr for Strictness {
    type Err = SurfNotifyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "harsh" => Ok(Strictness::Harsh),
            "lenient" => Ok(Strictness::Lenient),
            other => Err(SurfNotifyError::validation(format!(
                "Unknown notify strictness '{other}'. Must be one of: harsh, lenient"
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskTolerance {
    Low,
    #[default]
    Medium,
    High,
}

/// Per-surfer preferences that drive scoring and ranking
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurferProfile {
    pub skill: SkillLevel,
    /// Largest wave height (m) the surfer is comfortable in
    pub max_comfortable_wave: f64,
    pub risk_tolerance: RiskTolerance,
    #[serde(default)]
    pub avoid_reefs: bool,
    /// Unset means the deployment's default strictness applies
    #[serde(default)]
    pub notify_strictness: Option<Strictness>,
}

impl SurferProfile {
    #[must_use]
    pub fn strictness_or(&self, default: Strictness) -> Strictness {
        self.notify_strictness.unwrap_or(default)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationSource {
    Gps,
    Ip,
    Manual,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationConfidence {
    High,
    Low,
}

/// Most recent known position of a user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LastLocation {
    #[serde(flatten)]
    pub coordinate: Coordinate,
    pub source: LocationSource,
    pub confidence: LocationConfidence,
}

/// A surfer as handed over by the user store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub profile: SurferProfile,
    #[serde(default = "default_notifications_enabled")]
    pub notifications_enabled: bool,
    #[serde(default)]
    pub last_location: Option<LastLocation>,
    #[serde(default)]
    pub home_region: Option<String>,
    #[serde(default)]
    pub usual_regions: Vec<String>,
}

fn default_notifications_enabled() -> bool {
    true
}

impl fmt::Display for SkillLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Strictness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strictness::Harsh => write!(f, "harsh"),
            Strictness::Lenient => write!(f, "lenient"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("beginner", SkillLevel::Beginner)]
    #[case("Advanced", SkillLevel::Advanced)]
    #[case(" intermediate ", SkillLevel::Intermediate)]
    fn test_skill_parse(#[case] input: &str, #[case] expected: SkillLevel) {
        assert_eq!(input.parse::<SkillLevel>().unwrap(), expected);
    }

    #[test]
    fn test_skill_parse_rejects_unknown() {
        let err = "pro".parse::<SkillLevel>().unwrap_err();
        assert!(err.to_string().contains("Unknown skill level"));
    }

    #[rstest]
    #[case("pro")]
    #[case("")]
    #[case("expert")]
    fn test_skill_from_label_falls_back_to_intermediate(#[case] label: &str) {
        assert_eq!(SkillLevel::from_label(label), SkillLevel::Intermediate);
    }

    #[rstest]
    #[case("harsh", Strictness::Harsh)]
    #[case(" Lenient", Strictness::Lenient)]
    fn test_strictness_parse(#[case] input: &str, #[case] expected: Strictness) {
        assert_eq!(input.parse::<Strictness>().unwrap(), expected);
        assert!("brutal".parse::<Strictness>().is_err());
    }

    #[test]
    fn test_strictness_decay_rates() {
        assert_eq!(Strictness::Harsh.decay_rate(), 0.06);
        assert_eq!(Strictness::Lenient.decay_rate(), 0.02);
        assert_eq!(Strictness::default(), Strictness::Lenient);
    }

    #[test]
    fn test_user_deserializes_with_defaults() {
        let json = r#"{
            "id": "test-user-1",
            "profile": {
                "skill": "beginner",
                "maxComfortableWave": 1.2,
                "riskTolerance": "low"
            },
            "lastLocation": { "lat": 54.2713, "lon": -8.6017, "source": "gps", "confidence": "high" }
        }"#;

        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.profile.skill, SkillLevel::Beginner);
        assert_eq!(user.profile.notify_strictness, None);
        assert_eq!(user.profile.strictness_or(Strictness::Harsh), Strictness::Harsh);
        assert!(!user.profile.avoid_reefs);
        assert!(user.notifications_enabled);
        let loc = user.last_location.unwrap();
        assert_eq!(loc.coordinate, Coordinate::new(54.2713, -8.6017));
        assert_eq!(loc.source, LocationSource::Gps);
        assert!(user.usual_regions.is_empty());
    }
}
