use serde::{Deserialize, Serialize};

use crate::error::DesktopError;
use crate::geometry::Point;

/// Layer of the dock. Windows stack below it.
pub const DOCK_Z_INDEX: u32 = 100_000;

/// Largest accepted per-window cascade offset, in pixels
pub const MAX_CASCADE_STEP: u32 = 500;

/// Largest accepted distance of the cascade origin from the desktop corner
pub const MAX_CASCADE_ORIGIN: u32 = 10_000;

/// Tunables for the desktop. Every field has a default, so a host page only
/// needs to supply the values it wants to change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DesktopConfig {
    /// Z-index counter value before the first raise
    pub z_index_base: u32,
    /// Position of the first window opened on an empty desktop
    pub cascade_origin: Point,
    /// Per-window diagonal offset for newly opened windows
    pub cascade_step: i32,
    /// Menu bar clock refresh
    pub clock_tick_ms: u32,
    /// Delay between revealed terminal lines
    pub typing_interval_ms: u32,
    /// BCP 47 tag the clock is formatted for
    pub locale: String,
}

impl Default for DesktopConfig {
    fn default() -> Self {
        Self {
            z_index_base: 1000,
            cascade_origin: Point::new(100, 100),
            cascade_step: 30,
            clock_tick_ms: 1000,
            typing_interval_ms: 500,
            locale: "pt-BR".to_string(),
        }
    }
}

impl DesktopConfig {
    pub fn from_json(raw: &str) -> Result<Self, DesktopError> {
        let config: DesktopConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), DesktopError> {
        if self.clock_tick_ms == 0 {
            return Err(DesktopError::InvalidConfig(
                "clock_tick_ms must be greater than zero".to_string(),
            ));
        }
        if self.typing_interval_ms == 0 {
            return Err(DesktopError::InvalidConfig(
                "typing_interval_ms must be greater than zero".to_string(),
            ));
        }
        if self.cascade_step == 0 || self.cascade_step.unsigned_abs() > MAX_CASCADE_STEP {
            return Err(DesktopError::InvalidConfig(format!(
                "cascade_step must be non-zero and within {MAX_CASCADE_STEP}px"
            )));
        }
        if self.cascade_origin.x.unsigned_abs() > MAX_CASCADE_ORIGIN
            || self.cascade_origin.y.unsigned_abs() > MAX_CASCADE_ORIGIN
        {
            return Err(DesktopError::InvalidConfig(format!(
                "cascade_origin must be within {MAX_CASCADE_ORIGIN}px on each axis"
            )));
        }
        if self.z_index_base >= DOCK_Z_INDEX {
            return Err(DesktopError::InvalidConfig(format!(
                "z_index_base must be below the dock layer ({DOCK_Z_INDEX})"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_overrides_defaults() {
        let config = DesktopConfig::from_json(r#"{ "cascade_step": 40, "locale": "en-US" }"#)
            .expect("should parse");
        assert_eq!(config.cascade_step, 40);
        assert_eq!(config.locale, "en-US");
        assert_eq!(config.z_index_base, 1000);
        assert_eq!(config.cascade_origin, Point::new(100, 100));
    }

    #[test]
    fn empty_object_is_the_default() {
        assert_eq!(DesktopConfig::from_json("{}").unwrap(), DesktopConfig::default());
    }

    #[test]
    fn malformed_json_is_invalid_config() {
        let err = DesktopConfig::from_json("{ cascade_step: ").expect_err("must fail");
        assert!(matches!(err, DesktopError::InvalidConfig(_)));
    }

    #[test]
    fn zero_intervals_are_rejected() {
        let err = DesktopConfig::from_json(r#"{ "typing_interval_ms": 0 }"#).expect_err("must fail");
        assert!(err.to_string().contains("typing_interval_ms"));
    }

    #[test]
    fn window_layer_at_or_above_the_dock_is_rejected() {
        for raw in [
            r#"{ "z_index_base": 100000 }"#,
            r#"{ "z_index_base": 500000 }"#,
            r#"{ "z_index_base": 4294967295 }"#,
        ] {
            let err = DesktopConfig::from_json(raw).expect_err("must fail");
            assert!(err.to_string().contains("z_index_base"), "{raw}: {err}");
        }
        assert!(DesktopConfig::from_json(r#"{ "z_index_base": 99999 }"#).is_ok());
    }

    #[test]
    fn oversized_cascade_is_rejected() {
        let err = DesktopConfig::from_json(r#"{ "cascade_step": 2147483647 }"#).expect_err("must fail");
        assert!(err.to_string().contains("cascade_step"));

        let err = DesktopConfig::from_json(r#"{ "cascade_step": -501 }"#).expect_err("must fail");
        assert!(err.to_string().contains("cascade_step"));

        let err = DesktopConfig::from_json(r#"{ "cascade_origin": { "x": 0, "y": -2147483648 } }"#)
            .expect_err("must fail");
        assert!(err.to_string().contains("cascade_origin"));

        assert!(DesktopConfig::from_json(r#"{ "cascade_step": -30, "cascade_origin": { "x": 600, "y": 600 } }"#).is_ok());
    }
}
