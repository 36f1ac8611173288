// File: crates/banner-demo/src/config.rs
// Summary: TOML configuration for the demo: surface, theme, corners and banner style.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use banner_core::{parse_color, BannerStyle, Corner, SurfaceExtent};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Directory the PNGs are written to.
    pub output_dir: PathBuf,
    /// Theme preset name (light, dark, high-contrast).
    pub theme: String,
    pub width: f32,
    pub height: f32,
    /// Fill of the box the banner is drawn over.
    pub content_color: String,
    pub corners: Vec<Corner>,
    /// Number of thickness sweep frames (0 disables the sweep).
    pub sweep_steps: usize,
    pub banner: BannerConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BannerConfig {
    pub text: String,
    pub text_size: f32,
    pub bold: bool,
    pub thickness: f32,
    pub padding: f32,
    /// `None` uses the theme's primary color.
    pub background_color: Option<String>,
    /// `None` uses the theme's on-primary color.
    pub text_color: Option<String>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("target/out"),
            theme: "light".to_string(),
            width: 150.0,
            height: 100.0,
            content_color: "#000000".to_string(),
            corners: Corner::ALL.to_vec(),
            sweep_steps: 5,
            banner: BannerConfig::default(),
        }
    }
}

impl Default for BannerConfig {
    fn default() -> Self {
        Self {
            text: "Kotlin".to_string(),
            text_size: 15.0,
            bold: false,
            thickness: 20.0,
            padding: 16.0,
            background_color: None,
            text_color: None,
        }
    }
}

impl DemoConfig {
    /// Load configuration from `path`, or defaults when none is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config: DemoConfig = toml::from_str(&contents)
            .with_context(|| format!("parsing config {}", path.display()))?;
        Ok(config)
    }

    pub fn extent(&self) -> SurfaceExtent {
        SurfaceExtent::new(self.width, self.height)
    }
}

impl BannerConfig {
    pub fn to_style(&self) -> Result<BannerStyle> {
        if self.text_size <= 0.0 {
            anyhow::bail!("banner.text_size must be positive, got {}", self.text_size);
        }
        let mut style = BannerStyle::new(self.text.clone(), self.text_size)
            .with_bold(self.bold)
            .with_thickness(self.thickness)
            .with_padding(self.padding);
        if let Some(c) = &self.background_color {
            style = style.with_background_color(parse_color(c)?);
        }
        if let Some(c) = &self.text_color {
            style = style.with_text_color(parse_color(c)?);
        }
        Ok(style)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_toml_keeps_defaults() {
        let config: DemoConfig = toml::from_str(
            r##"
            theme = "dark"
            corners = ["bottom-left", "top-right"]

            [banner]
            text = "Rust"
            thickness = 40.0
            background_color = "#ff8800"
            "##,
        )
        .unwrap();
        assert_eq!(config.theme, "dark");
        assert_eq!(config.corners, vec![Corner::BottomLeft, Corner::TopRight]);
        assert_eq!(config.width, 150.0);
        assert_eq!(config.banner.padding, 16.0);

        let style = config.banner.to_style().unwrap();
        assert_eq!(style.text, "Rust");
        assert_eq!(style.thickness, 40.0);
        assert!(!style.bold);
        assert!(style.background_color.is_some());
        assert!(style.text_color.is_none());
    }

    #[test]
    fn rejects_bad_values() {
        let mut banner = BannerConfig::default();
        banner.text_size = 0.0;
        assert!(banner.to_style().is_err());

        let mut banner = BannerConfig::default();
        banner.text_color = Some("white".to_string());
        assert!(banner.to_style().is_err());

        assert!(toml::from_str::<DemoConfig>(r#"corners = ["middle"]"#).is_err());
    }

    #[test]
    fn written_config_reads_back() {
        let mut config = DemoConfig::default();
        config.corners = vec![Corner::BottomRight];
        config.banner.text_color = Some("#ffffff".to_string());
        let text = toml::to_string_pretty(&config).unwrap();
        assert!(text.contains(r#""bottom-right""#), "{text}");

        let back: DemoConfig = toml::from_str(&text).unwrap();
        assert_eq!(back.corners, vec![Corner::BottomRight]);
        assert_eq!(back.banner.text_color.as_deref(), Some("#ffffff"));
        assert_eq!(back.banner.background_color, None);
        assert_eq!(back.sweep_steps, config.sweep_steps);
    }

    #[test]
    fn missing_path_gives_defaults() {
        let config = DemoConfig::load(None).unwrap();
        assert_eq!(config.corners.len(), 4);
        assert_eq!(config.output_dir, PathBuf::from("target/out"));
    }
}
