//! Runtime settings
//!
//! Raw user input is validated here, so the simulation only ever sees
//! well-formed values.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_FPS, GRID_HEIGHT, GRID_WIDTH};
use crate::error::Error;

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Scheduler tick rate
    pub fps: f32,
    /// RNG seed (random when absent)
    pub seed: Option<u64>,
    /// Sampled playfield size in cells
    pub grid_width: u16,
    pub grid_height: u16,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            fps: DEFAULT_FPS,
            seed: None,
            grid_width: GRID_WIDTH,
            grid_height: GRID_HEIGHT,
        }
    }
}

impl Settings {
    /// Build settings from unvalidated command-line values
    pub fn from_raw(framerate: Option<&str>, seed: Option<u64>) -> Result<Self, Error> {
        let mut settings = Self {
            seed,
            ..Self::default()
        };
        if let Some(raw) = framerate {
            settings.fps = parse_framerate(raw)?;
        }
        settings.validate()?;
        Ok(settings)
    }

    /// Reject values the scheduler or sampler cannot work with
    pub fn validate(&self) -> Result<(), Error> {
        self.frame_duration()?;
        if self.grid_width < 2 || self.grid_height < 2 {
            return Err(Error::InvalidConfiguration {
                option: "grid",
                value: format!("{}x{}", self.grid_width, self.grid_height),
                reason: "needs at least 2 cells per side",
            });
        }
        Ok(())
    }

    /// Wall time between ticks
    pub fn frame_duration(&self) -> Result<Duration, Error> {
        tick_period(self.fps).map_err(|reason| Error::InvalidConfiguration {
            option: "framerate",
            value: self.fps.to_string(),
            reason,
        })
    }

    /// Simulation time passed to each tick
    pub fn tick_dt(&self) -> f32 {
        1.0 / self.fps
    }
}

fn parse_framerate(raw: &str) -> Result<f32, Error> {
    let fps: f32 = raw.trim().parse().map_err(|_| Error::InvalidConfiguration {
        option: "framerate",
        value: raw.to_string(),
        reason: "not a number",
    })?;

    tick_period(fps).map_err(|reason| Error::InvalidConfiguration {
        option: "framerate",
        value: raw.to_string(),
        reason,
    })?;
    Ok(fps)
}

/// Scheduler period for `fps`, which must be a non-zero `Duration`
fn tick_period(fps: f32) -> Result<Duration, &'static str> {
    if !fps.is_finite() || fps <= 0.0 {
        return Err("must be a positive, finite number");
    }
    match Duration::try_from_secs_f32(1.0 / fps) {
        Ok(period) if !period.is_zero() => Ok(period),
        _ => Err("tick period out of range"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::from_raw(None, None).unwrap();
        assert_eq!(settings.fps, 30.0);
        assert_eq!(settings.grid_width, 53);
        assert_eq!(settings.grid_height, 25);
        assert!(settings.seed.is_none());
    }

    #[test]
    fn test_framerate_parses() {
        let settings = Settings::from_raw(Some("60"), Some(7)).unwrap();
        assert_eq!(settings.fps, 60.0);
        assert_eq!(settings.seed, Some(7));
        assert!((settings.tick_dt() - 1.0 / 60.0).abs() < 1e-7);

        let settings = Settings::from_raw(Some(" 12.5 "), None).unwrap();
        assert_eq!(settings.fps, 12.5);
    }

    #[test]
    fn test_non_numeric_framerate_rejected() {
        let err = Settings::from_raw(Some("fast"), None).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidConfiguration {
                option: "framerate",
                reason: "not a number",
                ..
            }
        ));
    }

    #[test]
    fn test_out_of_range_framerate_rejected() {
        for raw in ["0", "-30", "inf", "NaN"] {
            let err = Settings::from_raw(Some(raw), None).unwrap_err();
            assert!(
                matches!(err, Error::InvalidConfiguration { option: "framerate", .. }),
                "{raw} accepted"
            );
        }
    }

    #[test]
    fn test_unschedulable_framerate_rejected() {
        // Periods too long or too short for a Duration
        for raw in ["1e-30", "1e-40", "1e-45", "3e38"] {
            let err = Settings::from_raw(Some(raw), None).unwrap_err();
            assert!(
                matches!(
                    err,
                    Error::InvalidConfiguration {
                        option: "framerate",
                        reason: "tick period out of range",
                        ..
                    }
                ),
                "{raw} accepted"
            );
        }
        assert!(Settings::from_raw(Some("0.01"), None).is_ok());
        assert!(Settings::from_raw(Some("1000"), None).is_ok());
    }

    #[test]
    fn test_loaded_settings_are_validated() {
        let json = r#"{"fps":1e-30,"seed":3,"grid_width":53,"grid_height":25}"#;
        let settings: Settings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.seed, Some(3));
        assert!(settings.validate().is_err());
        assert!(settings.frame_duration().is_err());
    }

    #[test]
    fn test_tiny_grid_rejected() {
        let settings = Settings {
            grid_width: 1,
            ..Settings::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_frame_duration() {
        let settings = Settings::default();
        let ms = settings.frame_duration().unwrap().as_secs_f64() * 1000.0;
        assert!((ms - 33.333).abs() < 0.01);
    }
}
