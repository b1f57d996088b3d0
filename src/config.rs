use crate::error::{Error, Result};
use crate::mat2::MAX_DISPLAY_DECIMALS;
use crate::transform::Spin;
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// Settings for the spinning viewer. Every field has a default, so `{}` is a
/// valid config.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    pub title: String,
    /// Degrees added to the angle on every tick.
    pub step_degrees: f64,
    pub interval_ms: u64,
    /// Decimal places shown in the matrix text (entries are floored).
    pub matrix_decimals: u32,
    pub window_size: [f32; 2],
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            title: "ppmspin".to_string(),
            step_degrees: 5.0,
            interval_ms: 200,
            matrix_decimals: 2,
            window_size: [800.0, 800.0],
        }
    }
}

pub fn parse_viewer_json(json_text: &str) -> Result<ViewerConfig> {
    let config: ViewerConfig = serde_json::from_str(json_text)?;
    config.validate()?;
    Ok(config)
}

impl ViewerConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        parse_viewer_json(&text)
    }

    /// Loads `path` when given, otherwise returns the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    fn validate(&self) -> Result<()> {
        if !self.step_degrees.is_finite() {
            return Err(Error::invalid_input(format!(
                "step_degrees must be finite, got {}",
                self.step_degrees
            )));
        }
        if self.matrix_decimals > MAX_DISPLAY_DECIMALS {
            return Err(Error::invalid_input(format!(
                "matrix_decimals must be at most {MAX_DISPLAY_DECIMALS}, got {}",
                self.matrix_decimals
            )));
        }
        if self.interval_ms == 0 {
            return Err(Error::invalid_input("interval_ms must be positive"));
        }
        Ok(())
    }

    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    pub fn spin(&self) -> Spin {
        Spin::new(self.step_degrees)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_gives_defaults() {
        let config = parse_viewer_json("{}").expect("empty config should parse");
        assert_eq!(config, ViewerConfig::default());
        assert_eq!(config.interval(), Duration::from_millis(200));
        assert_eq!(config.spin(), Spin::new(5.0));
    }

    #[test]
    fn fields_override_defaults() {
        let sample = r#"
        {
            "title": "lena",
            "step_degrees": -2.5,
            "interval_ms": 16,
            "matrix_decimals": 3,
            "unknown_field": true
        }
        "#;
        let config = parse_viewer_json(sample).expect("sample config should parse");
        assert_eq!(config.title, "lena");
        assert_eq!(config.step_degrees, -2.5);
        assert_eq!(config.interval_ms, 16);
        assert_eq!(config.matrix_decimals, 3);
        assert_eq!(config.window_size, [800.0, 800.0]);
    }

    #[test]
    fn zero_interval_is_rejected() {
        assert!(matches!(
            parse_viewer_json(r#"{ "interval_ms": 0 }"#),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn too_many_matrix_decimals_are_rejected() {
        assert!(parse_viewer_json(r#"{ "matrix_decimals": 15 }"#).is_ok());
        assert!(matches!(
            parse_viewer_json(r#"{ "matrix_decimals": 16 }"#),
            Err(Error::InvalidInput(_))
        ));
        assert!(matches!(
            parse_viewer_json(r#"{ "matrix_decimals": 4294967295 }"#),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn bad_json_is_a_config_error() {
        assert!(matches!(
            parse_viewer_json(r#"{ "step_degrees": "fast" }"#),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn missing_path_falls_back_to_defaults() {
        assert_eq!(
            ViewerConfig::load_or_default(None).unwrap(),
            ViewerConfig::default()
        );
        let missing = std::env::temp_dir().join("ppmspin-missing-config.json");
        assert!(matches!(
            ViewerConfig::load_or_default(Some(missing.as_path())),
            Err(Error::Io(_))
        ));
    }
}
