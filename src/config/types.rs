// Configuration type definitions

use std::time::Duration;

use serde::Deserialize;

/// Timing of the hide debounce and fade-out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// Grace period before a requested hide takes effect
    pub hide_delay_ms: u64,
    /// Duration of the fade-out once hiding starts
    pub fade_ms: u64,
}

impl TimingConfig {
    pub fn hide_delay(&self) -> Duration {
        Duration::from_millis(self.hide_delay_ms)
    }

    pub fn fade(&self) -> Duration {
        Duration::from_millis(self.fade_ms)
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        TimingConfig {
            hide_delay_ms: 30,
            fade_ms: 200,
        }
    }
}

/// Placement constants
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct GeometryConfig {
    /// Room reserved between trigger and surface for the pointer arrow
    pub pointer_clearance: f64,
    /// Trigger offset used when neither options nor attributes give one
    pub default_offset: f64,
    /// Extra vertical shift of the pointer over its border layer in side mode
    pub pointer_correction: f64,
}

impl GeometryConfig {
    /// Cell-based constants for terminal rendering
    pub fn terminal() -> Self {
        GeometryConfig {
            pointer_clearance: 1.0,
            default_offset: 0.0,
            pointer_correction: 0.0,
        }
    }
}

impl Default for GeometryConfig {
    fn default() -> Self {
        GeometryConfig {
            pointer_clearance: 19.0,
            default_offset: 2.0,
            pointer_correction: 3.0,
        }
    }
}

/// Box metrics of the shared surface, used to derive its natural size
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct SurfaceConfig {
    pub border: f64,
    pub padding_x: f64,
    pub padding_y: f64,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        SurfaceConfig {
            border: 1.0,
            padding_x: 1.0,
            padding_y: 0.0,
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub timing: TimingConfig,
    #[serde(default)]
    pub geometry: GeometryConfig,
    #[serde(default)]
    pub surface: SurfaceConfig,
}

impl Config {
    /// Defaults with terminal-cell geometry
    pub fn terminal() -> Self {
        Config {
            geometry: GeometryConfig::terminal(),
            ..Config::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.timing.hide_delay(), Duration::from_millis(30));
        assert_eq!(config.timing.fade(), Duration::from_millis(200));
        assert_eq!(config.geometry.pointer_clearance, 19.0);
        assert_eq!(config.geometry.default_offset, 2.0);
        assert_eq!(config.geometry.pointer_correction, 3.0);
        assert_eq!(config.surface.border, 1.0);
    }

    #[test]
    fn test_terminal_preset_keeps_timing() {
        let config = Config::terminal();
        assert_eq!(config.timing, TimingConfig::default());
        assert_eq!(config.geometry.pointer_clearance, 1.0);
        assert_eq!(config.geometry.default_offset, 0.0);
    }

    // Any subset of timing fields parses, and missing ones keep their defaults
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_missing_fields_use_defaults(
            hide_delay in prop::option::of(0u64..10_000),
            fade in prop::option::of(0u64..10_000),
            include_section in prop::bool::ANY
        ) {
            let mut toml_content = String::new();
            if include_section {
                toml_content.push_str("[timing]\n");
                if let Some(ms) = hide_delay {
                    toml_content.push_str(&format!("hide_delay_ms = {}\n", ms));
                }
                if let Some(ms) = fade {
                    toml_content.push_str(&format!("fade_ms = {}\n", ms));
                }
            }

            let config: Result<Config, _> = toml::from_str(&toml_content);
            prop_assert!(config.is_ok(), "Failed to parse: {}", toml_content);
            let config = config.unwrap();

            let defaults = TimingConfig::default();
            let expected_delay = if include_section { hide_delay.unwrap_or(defaults.hide_delay_ms) } else { defaults.hide_delay_ms };
            let expected_fade = if include_section { fade.unwrap_or(defaults.fade_ms) } else { defaults.fade_ms };
            prop_assert_eq!(config.timing.hide_delay_ms, expected_delay);
            prop_assert_eq!(config.timing.fade_ms, expected_fade);
            prop_assert_eq!(config.geometry, GeometryConfig::default());
        }
    }
}
