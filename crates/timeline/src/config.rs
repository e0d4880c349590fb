//! Timeline configuration
//!
//! Every field has a default matching the stock page markup, so an empty
//! JSON object (or no config at all) yields a working timeline.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TimelineError};
use crate::year::{Year, YearRange, FIRST_YEAR, LAST_YEAR};

/// Longest accepted playback interval
pub const MAX_INTERVAL_MS: u32 = 60_000;

/// DOM element ids the UI binds to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ElementIds {
    pub slider: String,
    pub label: String,
    pub skip_forward: String,
    pub skip_backward: String,
    pub play_toggle: String,
    pub icon: String,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            slider: "slider".to_string(),
            label: "current-year".to_string(),
            skip_forward: "skip-forward".to_string(),
            skip_backward: "skip-backward".to_string(),
            play_toggle: "animate-control".to_string(),
            icon: "icon-target".to_string(),
        }
    }
}

/// Full timeline configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TimelineConfig {
    pub min_year: Year,
    pub max_year: Year,
    /// Slider granularity and step button increment
    pub step: Year,
    pub initial_year: Year,
    /// Playback cadence in milliseconds
    pub interval_ms: u32,
    pub play_icon: String,
    pub pause_icon: String,
    /// Global JS function called with each new year
    pub render_hook: String,
    pub elements: ElementIds,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            min_year: FIRST_YEAR,
            max_year: LAST_YEAR,
            step: 1,
            initial_year: FIRST_YEAR,
            interval_ms: 500,
            play_icon: "images/play.png".to_string(),
            pause_icon: "images/pause.png".to_string(),
            render_hook: "setData".to_string(),
            elements: ElementIds::default(),
        }
    }
}

impl TimelineConfig {
    /// Parse and validate a JSON config
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let range = self.range()?;
        if self.step < 1 {
            return Err(TimelineError::InvalidStep);
        }
        if !range.aligned(self.step) {
            return Err(TimelineError::StepMisaligned {
                step: self.step,
                min: self.min_year,
                max: self.max_year,
            });
        }
        if self.interval_ms == 0 || self.interval_ms > MAX_INTERVAL_MS {
            return Err(TimelineError::InvalidInterval {
                max: MAX_INTERVAL_MS,
            });
        }
        if !range.contains(self.initial_year) {
            return Err(TimelineError::InitialOutOfRange {
                year: self.initial_year,
                min: self.min_year,
                max: self.max_year,
            });
        }
        Ok(())
    }

    pub fn range(&self) -> Result<YearRange> {
        YearRange::new(self.min_year, self.max_year)
    }

    pub fn interval(&self) -> Duration {
        Duration::from_millis(u64::from(self.interval_ms))
    }

    /// Override the starting year, clamped into the configured range and
    /// rounded onto the step grid
    #[must_use]
    pub fn with_initial_year(mut self, year: Year) -> Self {
        let max = self.max_year.max(self.min_year);
        self.initial_year = YearRange::new(self.min_year, max)
            .map_or(year, |range| range.snap(year, self.step));
        self
    }

    /// Icon asset for the given playing state
    pub fn icon_for(&self, playing: bool) -> &str {
        if playing {
            &self.pause_icon
        } else {
            &self.play_icon
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_page_markup() {
        let config = TimelineConfig::default();
        assert_eq!(config.min_year, 1785);
        assert_eq!(config.max_year, 1867);
        assert_eq!(config.step, 1);
        assert_eq!(config.initial_year, 1785);
        assert_eq!(config.interval(), Duration::from_millis(500));
        assert_eq!(config.elements.slider, "slider");
        assert_eq!(config.elements.label, "current-year");
        assert_eq!(config.elements.play_toggle, "animate-control");
        assert_eq!(config.icon_for(false), "images/play.png");
        assert_eq!(config.icon_for(true), "images/pause.png");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_json_is_default() {
        let config = TimelineConfig::from_json("{}").unwrap();
        assert_eq!(config, TimelineConfig::default());
    }

    #[test]
    fn test_partial_json_overrides() {
        let json = r#"{
            "interval_ms": 250,
            "pause_icon": "img/pause.svg",
            "elements": { "label": "year-label" }
        }"#;
        let config = TimelineConfig::from_json(json).unwrap();
        assert_eq!(config.interval_ms, 250);
        assert_eq!(config.pause_icon, "img/pause.svg");
        assert_eq!(config.elements.label, "year-label");
        assert_eq!(config.elements.slider, "slider");
        assert_eq!(config.max_year, 1867);
    }

    #[test]
    fn test_invalid_configs_rejected() {
        assert!(matches!(
            TimelineConfig::from_json(r#"{"min_year": 1900}"#),
            Err(TimelineError::InvalidRange { min: 1900, max: 1867 })
        ));
        assert!(matches!(
            TimelineConfig::from_json(r#"{"step": 0}"#),
            Err(TimelineError::InvalidStep)
        ));
        assert!(matches!(
            TimelineConfig::from_json(r#"{"interval_ms": 0}"#),
            Err(TimelineError::InvalidInterval { .. })
        ));
        assert!(matches!(
            TimelineConfig::from_json(r#"{"interval_ms": 4000000000}"#),
            Err(TimelineError::InvalidInterval { max: 60_000 })
        ));
        assert!(TimelineConfig::from_json(r#"{"interval_ms": 60000}"#).is_ok());
        assert!(matches!(
            TimelineConfig::from_json(r#"{"min_year": 1800, "max_year": 1812, "step": 5, "initial_year": 1800}"#),
            Err(TimelineError::StepMisaligned { step: 5, min: 1800, max: 1812 })
        ));
        assert!(matches!(
            TimelineConfig::from_json(r#"{"initial_year": 1700}"#),
            Err(TimelineError::InitialOutOfRange { year: 1700, .. })
        ));
        assert!(matches!(
            TimelineConfig::from_json(r#"{"speed": 2}"#),
            Err(TimelineError::Config(_))
        ));
    }

    #[test]
    fn test_with_initial_year_clamps() {
        let config = TimelineConfig::default().with_initial_year(1820);
        assert_eq!(config.initial_year, 1820);

        let config = TimelineConfig::default().with_initial_year(2000);
        assert_eq!(config.initial_year, 1867);

        let config = TimelineConfig::default().with_initial_year(1);
        assert_eq!(config.initial_year, 1785);

        let stepped = TimelineConfig {
            min_year: 1800,
            max_year: 1810,
            step: 5,
            initial_year: 1800,
            ..TimelineConfig::default()
        };
        assert_eq!(stepped.with_initial_year(1804).initial_year, 1805);
    }
}
