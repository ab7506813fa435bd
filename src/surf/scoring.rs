//! Surf Suitability Scoring
//!
//! Turns one set of environmental readings into a 0-10 quality score for a
//! given spot orientation and surfer ability, with one human-readable reason
//! per scoring stage:
//!
//! 1. swell exposure (swell direction against the way the break faces)
//! 2. swell power (height x period, banded per ability)
//! 3. wave height (outer and ideal bands per ability)
//! 4. wind quality (offshore/onshore and speed, per ability)
//!
//! Points are summed, clamped to `0..=10`, and then damped at night.
//! Ability re-weights the same physical signal through [`SkillThresholds`].

use serde::{Deserialize, Serialize};

use crate::models::SkillLevel;
use crate::surf::wind::wind_at_2m;

/// Upper bound of the clamped score
pub const MAX_SCORE: f64 = 10.0;

/// Multiplier applied to the final score at night
pub const NIGHT_FACTOR: f64 = 0.05;

/// Longitude assumed by the legacy scorer when callers give none
pub const DEFAULT_LEGACY_LONGITUDE: f64 = -8.5;

/// Swell direction the legacy scorer always assumes
pub const LEGACY_SWELL_DIRECTION: f64 = 270.0;

const DIRECT_EXPOSURE: f64 = 0.7;
const PARTIAL_EXPOSURE: f64 = 0.4;
const OFFSHORE_WINDOW_DEG: f64 = 60.0;
const LIGHT_OFFSHORE_KMH: f64 = 15.0;
const MODERATE_OFFSHORE_KMH: f64 = 25.0;
const LIGHT_ONSHORE_KMH: f64 = 10.0;
const NIGHT_BEFORE_HOUR: u8 = 5;
const NIGHT_AFTER_HOUR: u8 = 22;

/// Readings and context for one scoring call
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoringInput {
    /// Swell height in metres
    pub swell_height: f64,
    /// Swell period in seconds
    pub swell_period: f64,
    /// Direction the swell comes from, degrees (0 = North)
    pub swell_direction: f64,
    /// Wave height in metres
    pub wave_height: f64,
    /// Wave period in seconds
    pub wave_period: f64,
    /// Wind speed at 2 m in km/h
    #[serde(default)]
    pub wind_speed_2m: Option<f64>,
    /// Wind speed at 10 m in km/h, used only when the 2 m value is missing
    #[serde(default)]
    pub wind_speed_10m: Option<f64>,
    /// Direction the wind comes from, degrees
    pub wind_direction: f64,
    /// Direction the break faces, degrees (0 = North)
    pub spot_orientation: f64,
    #[serde(default)]
    pub ability: SkillLevel,
    /// Spot-local hour (0-23)
    #[serde(default)]
    pub local_hour: Option<u8>,
}

impl ScoringInput {
    /// Wind speed used for scoring: 2 m reading, else the 10 m reading
    /// corrected to 2 m, else calm.
    #[must_use]
    pub fn scoring_wind_speed(&self) -> f64 {
        self.wind_speed_2m
            .or_else(|| self.wind_speed_10m.map(wind_at_2m))
            .unwrap_or(0.0)
    }
}

/// Score in `0..=10` plus the reasons behind it, in stage order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuitabilityResult {
    pub score: f64,
    pub reasons: Vec<String>,
}

impl SuitabilityResult {
    /// Short verdict for display
    #[must_use]
    pub fn quality_label(&self) -> &'static str {
        match self.score {
            s if s >= 8.0 => "Excellent",
            s if s >= 6.0 => "Good",
            s if s >= 4.0 => "Fair",
            s if s >= 2.0 => "Poor",
            _ => "Flat or unsurfable",
        }
    }
}

/// One swell-power band: matches `above < power <= up_to`
#[derive(Debug, Clone, Copy)]
pub struct PowerBand {
    pub above: f64,
    pub up_to: Option<f64>,
    pub points: f64,
    pub reason: &'static str,
}

impl PowerBand {
    fn contains(&self, power: f64) -> bool {
        power > self.above && self.up_to.is_none_or(|max| power <= max)
    }
}

/// Wave heights (m) considered surfable and ideal, both inclusive
#[derive(Debug, Clone, Copy)]
pub struct WaveBand {
    pub min: f64,
    pub max: f64,
    pub ideal_min: f64,
    pub ideal_max: f64,
}

/// Points awarded for each wind regime
#[derive(Debug, Clone, Copy)]
pub struct WindPoints {
    pub offshore_light: f64,
    pub offshore_moderate: f64,
    pub offshore_strong: f64,
    pub onshore_light: f64,
    pub onshore_strong: f64,
}

/// Ability-specific scoring table
#[derive(Debug, Clone, Copy)]
pub struct SkillThresholds {
    /// Checked in order; the first match wins
    pub power_bands: &'static [PowerBand],
    pub waves: WaveBand,
    pub wind: WindPoints,
}

const BEGINNER: SkillThresholds = SkillThresholds {
    power_bands: &[
        PowerBand {
            above: 4.0,
            up_to: Some(8.0),
            points: 3.0,
            reason: "Gentle swell energy (perfect for learning)",
        },
        PowerBand {
            above: 2.0,
            up_to: Some(10.0),
            points: 2.0,
            reason: "Moderate swell energy",
        },
        PowerBand {
            above: 10.0,
            up_to: None,
            points: 0.0,
            reason: "Powerful swell (too strong for beginners)",
        },
    ],
    waves: WaveBand {
        min: 0.3,
        max: 1.2,
        ideal_min: 0.5,
        ideal_max: 1.0,
    },
    wind: WindPoints {
        offshore_light: 2.0,
        offshore_moderate: 1.0,
        offshore_strong: 0.0,
        onshore_light: 1.0,
        onshore_strong: -1.0,
    },
};

const INTERMEDIATE: SkillThresholds = SkillThresholds {
    power_bands: &[
        PowerBand {
            above: 12.0,
            up_to: None,
            points: 3.0,
            reason: "Powerful groundswell",
        },
        PowerBand {
            above: 8.0,
            up_to: Some(12.0),
            points: 2.0,
            reason: "Decent swell energy",
        },
        PowerBand {
            above: 4.0,
            up_to: Some(8.0),
            points: 1.0,
            reason: "Weak swell energy",
        },
    ],
    waves: WaveBand {
        min: 0.5,
        max: 2.5,
        ideal_min: 1.0,
        ideal_max: 2.0,
    },
    wind: WindPoints {
        offshore_light: 3.0,
        offshore_moderate: 2.0,
        offshore_strong: 1.0,
        onshore_light: 0.0,
        onshore_strong: -2.0,
    },
};

const ADVANCED: SkillThresholds = SkillThresholds {
    power_bands: &[
        PowerBand {
            above: 15.0,
            up_to: None,
            points: 3.0,
            reason: "Powerful groundswell (excellent)",
        },
        PowerBand {
            above: 8.0,
            up_to: Some(15.0),
            points: 2.0,
            reason: "Decent swell energy",
        },
        PowerBand {
            above: 4.0,
            up_to: Some(8.0),
            points: 1.0,
            reason: "Weak swell energy",
        },
    ],
    waves: WaveBand {
        min: 0.5,
        max: 4.0,
        ideal_min: 1.5,
        ideal_max: 3.0,
    },
    wind: WindPoints {
        offshore_light: 3.0,
        offshore_moderate: 2.0,
        offshore_strong: 1.0,
        onshore_light: 0.0,
        onshore_strong: -3.0,
    },
};

impl SkillThresholds {
    #[must_use]
    pub fn for_skill(skill: SkillLevel) -> &'static SkillThresholds {
        match skill {
            SkillLevel::Beginner => &BEGINNER,
            SkillLevel::Intermediate => &INTERMEDIATE,
            SkillLevel::Advanced => &ADVANCED,
        }
    }
}

/// Score the readings in `input` for a surfer of `input.ability`.
///
/// Pure and deterministic. Out-of-range inputs are not checked and degrade
/// the result rather than failing.
#[must_use]
pub fn score_spot(input: &ScoringInput) -> SuitabilityResult {
    let thresholds = SkillThresholds::for_skill(input.ability);
    let mut reasons = Vec::with_capacity(5);
    let mut score = 0.0;

    score += score_exposure(input.swell_direction, input.spot_orientation, &mut reasons);
    score += score_power(
        input.swell_height * input.swell_period,
        thresholds.power_bands,
        &mut reasons,
    );
    score += score_wave_height(input.wave_height, input.ability, &thresholds.waves, &mut reasons);
    score += score_wind(
        input.wind_direction,
        input.scoring_wind_speed(),
        input.spot_orientation,
        input.ability,
        &thresholds.wind,
        &mut reasons,
    );

    let mut final_score = score.clamp(0.0, MAX_SCORE);

    if input.local_hour.is_some_and(is_night_hour) {
        final_score *= NIGHT_FACTOR;
        reasons.push("Night-time conditions (very limited visibility)".to_string());
    }

    if reasons.is_empty() {
        reasons.push("Conditions need improvement".to_string());
    }

    SuitabilityResult {
        score: final_score,
        reasons,
    }
}

/// Score with orientation guessed from longitude and a fixed westerly swell.
///
/// West of Greenwich the spot is taken to face 270°, otherwise 90°. A
/// missing longitude means [`DEFAULT_LEGACY_LONGITUDE`]. The caller's
/// `swell_direction` and `spot_orientation` are ignored.
#[deprecated(note = "use score_spot with the spot's catalogued orientation")]
#[must_use]
pub fn score_spot_legacy(input: &ScoringInput, spot_lon: Option<f64>) -> SuitabilityResult {
    let spot_lon = spot_lon.unwrap_or(DEFAULT_LEGACY_LONGITUDE);
    let spot_orientation = if spot_lon < 0.0 { 270.0 } else { 90.0 };
    score_spot(&ScoringInput {
        spot_orientation,
        swell_direction: LEGACY_SWELL_DIRECTION,
        ..*input
    })
}

/// Angular distance between two bearings, folded into 0-180°
pub(crate) fn angular_difference(a: f64, b: f64) -> f64 {
    let diff = (a - b).abs();
    diff.min(360.0 - diff)
}

/// 1 when the swell runs straight at the break, 0 when from behind it
#[must_use]
pub fn swell_exposure(swell_direction: f64, spot_orientation: f64) -> f64 {
    (1.0 - angular_difference(swell_direction, spot_orientation) / 180.0).max(0.0)
}

fn is_night_hour(hour: u8) -> bool {
    hour < NIGHT_BEFORE_HOUR || hour > NIGHT_AFTER_HOUR
}

fn score_exposure(swell_direction: f64, spot_orientation: f64, reasons: &mut Vec<String>) -> f64 {
    let exposure = swell_exposure(swell_direction, spot_orientation);
    let (points, reason) = if exposure > DIRECT_EXPOSURE {
        (3.0, "Swell directly hitting the break")
    } else if exposure > PARTIAL_EXPOSURE {
        (2.0, "Partially exposed to swell")
    } else {
        (0.0, "Sheltered from swell")
    };
    reasons.push(reason.to_string());
    points
}

fn score_power(power: f64, bands: &[PowerBand], reasons: &mut Vec<String>) -> f64 {
    match bands.iter().find(|band| band.contains(power)) {
        Some(band) => {
            reasons.push(band.reason.to_string());
            band.points
        }
        None => {
            reasons.push("Very small / weak swell".to_string());
            0.0
        }
    }
}

fn score_wave_height(
    wave_height: f64,
    ability: SkillLevel,
    band: &WaveBand,
    reasons: &mut Vec<String>,
) -> f64 {
    if wave_height >= band.ideal_min && wave_height <= band.ideal_max {
        reasons.push(format!("Ideal wave size for {ability} surfers"));
        3.0
    } else if wave_height >= band.min && wave_height <= band.max {
        reasons.push(format!("Wave size suitable for {ability} ability"));
        2.0
    } else if wave_height > band.max {
        reasons.push(format!("Large surf (challenging for {ability})"));
        -1.0
    } else {
        reasons.push("Small surf".to_string());
        -1.0
    }
}

fn score_wind(
    wind_direction: f64,
    wind_speed: f64,
    spot_orientation: f64,
    ability: SkillLevel,
    points: &WindPoints,
    reasons: &mut Vec<String>,
) -> f64 {
    let offshore_direction = (spot_orientation + 180.0) % 360.0;
    let is_offshore = angular_difference(offshore_direction, wind_direction) < OFFSHORE_WINDOW_DEG;

    if is_offshore {
        if wind_speed < LIGHT_OFFSHORE_KMH {
            reasons.push("Light offshore winds (ideal)".to_string());
            points.offshore_light
        } else if wind_speed < MODERATE_OFFSHORE_KMH {
            reasons.push("Moderate offshore winds".to_string());
            points.offshore_moderate
        } else {
            reasons.push("Strong offshore wind".to_string());
            points.offshore_strong
        }
    } else if wind_speed < LIGHT_ONSHORE_KMH {
        reasons.push("Light onshore winds".to_string());
        points.onshore_light
    } else {
        let note = if ability == SkillLevel::Beginner {
            " - still learnable"
        } else {
            ""
        };
        reasons.push(format!("Strong onshore winds (reduces quality{note})"));
        points.onshore_strong
    }
}
