//! Environmental readings for a single spot

use chrono::{DateTime, NaiveDateTime, Timelike, Utc};
use serde::{Deserialize, Serialize};

use crate::models::SkillLevel;
use crate::surf::scoring::ScoringInput;

const LOCAL_TIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S"];

/// One hourly observation for one spot, as handed over by the conditions store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpotConditions {
    pub spot_id: String,
    /// Observation time (UTC)
    pub timestamp: DateTime<Utc>,
    /// Swell height in metres
    pub swell_height: f64,
    /// Swell period in seconds
    pub swell_period: f64,
    /// Direction the swell arrives from, degrees (0 = North)
    pub swell_direction: f64,
    /// Wave height in metres
    pub wave_height: f64,
    /// Wave period in seconds
    pub wave_period: f64,
    /// Wind speed at 10 m in km/h
    pub wind_speed_10m: f64,
    /// Wind speed at 2 m in km/h, when the source provides it
    #[serde(default)]
    pub wind_speed_2m: Option<f64>,
    /// Direction the wind blows from, degrees (0 = North)
    pub wind_direction: f64,
    /// Spot-local wall clock time, e.g. `2026-01-19T06:00`
    #[serde(default)]
    pub local_time: Option<String>,
    /// Spot-local hour (0-23)
    #[serde(default)]
    pub local_hour: Option<u8>,
}

impl SpotConditions {
    /// Local hour of the reading: the explicit hour, else the hour of `local_time`
    #[must_use]
    pub fn effective_local_hour(&self) -> Option<u8> {
        if self.local_hour.is_some() {
            return self.local_hour;
        }
        let local_time = self.local_time.as_deref()?;
        LOCAL_TIME_FORMATS
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(local_time, fmt).ok())
            .and_then(|t| u8::try_from(t.hour()).ok())
    }

    /// Build scorer input for a spot facing `spot_orientation`
    #[must_use]
    pub fn to_scoring_input(&self, spot_orientation: f64, ability: SkillLevel) -> ScoringInput {
        ScoringInput {
            swell_height: self.swell_height,
            swell_period: self.swell_period,
            swell_direction: self.swell_direction,
            wave_height: self.wave_height,
            wave_period: self.wave_period,
            wind_speed_2m: self.wind_speed_2m,
            wind_speed_10m: Some(self.wind_speed_10m),
            wind_direction: self.wind_direction,
            spot_orientation,
            ability,
            local_hour: self.effective_local_hour(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rstest::rstest;

    fn create_test_conditions() -> SpotConditions {
        SpotConditions {
            spot_id: "strandhill".to_string(),
            timestamp: Utc.with_ymd_and_hms(2026, 1, 19, 10, 0, 0).unwrap(),
            swell_height: 1.4,
            swell_period: 11.0,
            swell_direction: 285.0,
            wave_height: 1.3,
            wave_period: 9.0,
            wind_speed_10m: 18.0,
            wind_speed_2m: Some(13.5),
            wind_direction: 110.0,
            local_time: None,
            local_hour: None,
        }
    }

    #[rstest]
    #[case(Some(7), None, Some(7))]
    #[case(Some(7), Some("2026-01-19T23:00"), Some(7))]
    #[case(None, Some("2026-01-19T06:00"), Some(6))]
    #[case(None, Some("2026-01-19T23:30:00"), Some(23))]
    #[case(None, Some("19/01/2026 06:00"), None)]
    #[case(None, None, None)]
    fn test_effective_local_hour(
        #[case] local_hour: Option<u8>,
        #[case] local_time: Option<&str>,
        #[case] expected: Option<u8>,
    ) {
        let mut conditions = create_test_conditions();
        conditions.local_hour = local_hour;
        conditions.local_time = local_time.map(str::to_string);
        assert_eq!(conditions.effective_local_hour(), expected);
    }

    #[test]
    fn test_to_scoring_input_carries_readings() {
        let mut conditions = create_test_conditions();
        conditions.local_time = Some("2026-01-19T10:00".to_string());

        let input = conditions.to_scoring_input(290.0, SkillLevel::Advanced);

        assert_eq!(input.spot_orientation, 290.0);
        assert_eq!(input.swell_direction, 285.0);
        assert_eq!(input.wind_speed_2m, Some(13.5));
        assert_eq!(input.wind_speed_10m, Some(18.0));
        assert_eq!(input.ability, SkillLevel::Advanced);
        assert_eq!(input.local_hour, Some(10));
    }

    #[test]
    fn test_deserializes_camel_case_json() {
        let json = r#"{
            "spotId": "easkey",
            "timestamp": "2026-01-19T10:00:00Z",
            "swellHeight": 2.0,
            "swellPeriod": 12.0,
            "swellDirection": 300.0,
            "waveHeight": 1.8,
            "wavePeriod": 10.0,
            "windSpeed10m": 20.0,
            "windDirection": 140.0,
            "localHour": 10
        }"#;
        let conditions: SpotConditions = serde_json::from_str(json).unwrap();
        assert_eq!(conditions.spot_id, "easkey");
        assert_eq!(conditions.wind_speed_2m, None);
        assert_eq!(conditions.local_hour, Some(10));
    }
}
