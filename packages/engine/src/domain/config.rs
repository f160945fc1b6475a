//! Tray configuration.
//!
//! Defaults reproduce the tuned constants of the web dice tray. Any field can
//! be overridden from JSON; missing fields keep their default.

use serde::{Deserialize, Serialize};

use crate::core::{TrayError, Vec3};

/// Settlement hysteresis (speeds are in world units per second)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SettleConfig {
    /// Below this a die starts its sleep countdown
    pub low_threshold: f32,
    /// Above this a die is awake again
    pub high_threshold: f32,
    /// Sustained low speed required before a die counts as settled
    pub sleep_delay_ms: f64,
}

impl Default for SettleConfig {
    fn default() -> Self {
        Self {
            low_threshold: 0.01,
            high_threshold: 0.5,
            sleep_delay_ms: 1000.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    /// Unconditional rendering after the tray is opened
    pub open_render_ms: f64,
    /// Unconditional rendering after the dice are cleared
    pub clear_render_ms: f64,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            open_render_ms: 1000.0,
            clear_render_ms: 100.0,
        }
    }
}

/// Tray box: inner wall faces sit `wall_inset` inside the nominal size
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrayDimensions {
    pub width: f32,
    pub depth: f32,
    pub wall_inset: f32,
    pub floor_y: f32,
    pub roof_y: f32,
}

impl Default for TrayDimensions {
    fn default() -> Self {
        Self {
            width: 10.0,
            depth: 20.0,
            wall_inset: 0.5,
            floor_y: 0.2,
            roof_y: 10.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    pub gravity: Vec3,
    /// Fixed step length per rendered frame
    pub timestep_s: f32,
    pub max_speed: f32,
    /// Contact friction coefficients, applied as `v_t /= 1 + mu * dt`
    pub floor_friction: f32,
    pub wall_friction: f32,
    pub roof_friction: f32,
    /// Normal speed below which a contact stops bouncing
    pub bounce_cutoff: f32,
    /// Per-second decay of spin
    pub angular_damping: f32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: Vec3::new(0.0, -9.81, 0.0),
            timestep_s: 1.0 / 60.0,
            max_speed: 40.0,
            floor_friction: 20.0,
            wall_friction: 10.0,
            roof_friction: 100.0,
            bounce_cutoff: 1.0,
            angular_damping: 2.0,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrayConfig {
    pub settle: SettleConfig,
    pub view: ViewConfig,
    pub dimensions: TrayDimensions,
    pub physics: PhysicsConfig,
    /// Fixed roll seed; a time-derived seed is used when absent
    pub seed: Option<u64>,
}

impl TrayConfig {
    pub fn from_json(json: &str) -> Result<Self, TrayError> {
        let config: TrayConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn validate(&self) -> Result<(), TrayError> {
        let s = &self.settle;
        if !(s.low_threshold >= 0.0 && s.low_threshold < s.high_threshold) {
            return Err(TrayError::InvalidConfig(format!(
                "settle thresholds must satisfy 0 <= low < high (low={}, high={})",
                s.low_threshold, s.high_threshold
            )));
        }
        if s.sleep_delay_ms < 0.0 || self.view.open_render_ms < 0.0 || self.view.clear_render_ms < 0.0 {
            return Err(TrayError::InvalidConfig("delays must be non-negative".to_string()));
        }
        let d = &self.dimensions;
        if d.width <= 2.0 * d.wall_inset || d.depth <= 2.0 * d.wall_inset || d.roof_y <= d.floor_y {
            return Err(TrayError::InvalidConfig(format!(
                "tray has no interior: {}x{} inset {} floor {} roof {}",
                d.width, d.depth, d.wall_inset, d.floor_y, d.roof_y
            )));
        }
        if !(self.physics.timestep_s > 0.0) || !(self.physics.max_speed > 0.0) {
            return Err(TrayError::InvalidConfig(
                "timestep and max speed must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_tuned_constants() {
        let cfg = TrayConfig::default();
        assert_eq!(cfg.settle.low_threshold, 0.01);
        assert_eq!(cfg.settle.high_threshold, 0.5);
        assert_eq!(cfg.settle.sleep_delay_ms, 1000.0);
        assert_eq!(cfg.view.open_render_ms, 1000.0);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn partial_json_keeps_other_defaults() {
        let cfg = TrayConfig::from_json(r#"{"settle":{"sleep_delay_ms":250},"seed":7}"#)
            .expect("config should parse");
        assert_eq!(cfg.settle.sleep_delay_ms, 250.0);
        assert_eq!(cfg.settle.high_threshold, 0.5);
        assert_eq!(cfg.seed, Some(7));
        assert_eq!(cfg.dimensions, TrayDimensions::default());
    }

    #[test]
    fn rejects_inverted_thresholds() {
        let err = TrayConfig::from_json(r#"{"settle":{"low_threshold":1.0,"high_threshold":0.5}}"#)
            .unwrap_err();
        assert!(matches!(err, TrayError::InvalidConfig(_)));
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(matches!(
            TrayConfig::from_json("{not json"),
            Err(TrayError::InvalidConfig(_))
        ));
    }

    #[test]
    fn json_round_trips_through_to_json() {
        let cfg = TrayConfig::default();
        assert_eq!(TrayConfig::from_json(&cfg.to_json()), Ok(cfg));
    }
}
