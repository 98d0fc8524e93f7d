//! Display configuration.
//!
//! The examples take no arguments. The only knob is the render target, read
//! from `UQ_CHARTS_RENDERER` (`window` or `png`).

use crate::error::{ChartError, ChartResult};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Environment variable selecting the render target.
pub const RENDERER_ENV: &str = "UQ_CHARTS_RENDERER";

/// Where a chart is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderTarget {
    /// Native interactive window (egui_plot).
    #[default]
    Window,
    /// Static PNG handed to the system image viewer (plotters).
    Png,
}

impl FromStr for RenderTarget {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "window" => Ok(RenderTarget::Window),
            "png" => Ok(RenderTarget::Png),
            other => Err(ChartError::Config(format!(
                "unknown render target {other:?} in {RENDERER_ENV} (expected \"window\" or \"png\")"
            ))),
        }
    }
}

impl fmt::Display for RenderTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderTarget::Window => f.write_str("window"),
            RenderTarget::Png => f.write_str("png"),
        }
    }
}

/// Settings for showing a chart
#[derive(Debug, Clone)]
pub struct DisplayConfig {
    pub target: RenderTarget,
    /// Window or image width in pixels.
    pub width: u32,
    /// Window or image height in pixels.
    pub height: u32,
    /// Directory for the PNG handed to the image viewer.
    pub scratch_dir: PathBuf,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            target: RenderTarget::default(),
            width: 1000,
            height: 640,
            scratch_dir: std::env::temp_dir(),
        }
    }
}

impl DisplayConfig {
    /// Default settings with the render target taken from the environment.
    pub fn from_env() -> ChartResult<Self> {
        Self::from_renderer_var(std::env::var(RENDERER_ENV).ok().as_deref())
    }

    fn from_renderer_var(value: Option<&str>) -> ChartResult<Self> {
        let mut config = Self::default();
        if let Some(value) = value.filter(|v| !v.trim().is_empty()) {
            config.target = value.parse()?;
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_variable_keeps_window_target() {
        let config = DisplayConfig::from_renderer_var(None).unwrap();
        assert_eq!(config.target, RenderTarget::Window);
        assert_eq!((config.width, config.height), (1000, 640));

        let blank = DisplayConfig::from_renderer_var(Some("  ")).unwrap();
        assert_eq!(blank.target, RenderTarget::Window);
    }

    #[test]
    fn parses_targets_case_insensitively() {
        assert_eq!("PNG".parse::<RenderTarget>().unwrap(), RenderTarget::Png);
        assert_eq!(" Window ".parse::<RenderTarget>().unwrap(), RenderTarget::Window);
        let config = DisplayConfig::from_renderer_var(Some("png")).unwrap();
        assert_eq!(config.target, RenderTarget::Png);
    }

    #[test]
    fn rejects_unknown_target() {
        let err = DisplayConfig::from_renderer_var(Some("browser")).unwrap_err();
        assert!(matches!(err, ChartError::Config(_)));
        assert!(err.to_string().contains("browser"));
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for target in [RenderTarget::Window, RenderTarget::Png] {
            assert_eq!(target.to_string().parse::<RenderTarget>().unwrap(), target);
        }
    }
}
