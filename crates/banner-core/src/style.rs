// File: crates/banner-core/src/style.rs
// Summary: Banner style value object and render options.

use skia_safe as skia;

use crate::geometry::{effective_thickness, Projection};
use crate::theme::Theme;

/// Appearance of a banner. Lengths share the surface's unit (pixels).
#[derive(Clone, Debug, PartialEq)]
pub struct BannerStyle {
    pub text: String,
    /// Must be > 0.
    pub text_size: f32,
    pub bold: bool,
    /// Requested band width; enlarged to fit the text.
    pub thickness: f32,
    /// Distance from the corner to the inner edge of the band.
    pub padding: f32,
    /// `None` falls back to the theme's primary color.
    pub background_color: Option<skia::Color>,
    /// `None` falls back to the theme's on-primary color.
    pub text_color: Option<skia::Color>,
}

impl Default for BannerStyle {
    fn default() -> Self {
        Self {
            text: "Rust".to_string(),
            text_size: 15.0,
            bold: true,
            thickness: 20.0,
            padding: 16.0,
            background_color: None,
            text_color: None,
        }
    }
}

impl BannerStyle {
    pub fn new(text: impl Into<String>, text_size: f32) -> Self {
        Self { text: text.into(), text_size, ..Self::default() }
    }

    pub fn with_bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }

    pub fn with_thickness(mut self, thickness: f32) -> Self {
        self.thickness = thickness;
        self
    }

    pub fn with_padding(mut self, padding: f32) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_background_color(mut self, color: skia::Color) -> Self {
        self.background_color = Some(color);
        self
    }

    pub fn with_text_color(mut self, color: skia::Color) -> Self {
        self.text_color = Some(color);
        self
    }

    pub fn effective_thickness(&self) -> f32 {
        effective_thickness(self.thickness, self.text_size)
    }

    pub fn projected_thickness(&self) -> Projection {
        Projection::of(self.effective_thickness())
    }

    pub fn projected_padding(&self) -> Projection {
        Projection::of(self.padding)
    }

    pub fn resolved_background(&self, theme: &Theme) -> skia::Color {
        self.background_color.unwrap_or(theme.primary)
    }

    pub fn resolved_text_color(&self, theme: &Theme) -> skia::Color {
        self.text_color.unwrap_or(theme.on_primary)
    }
}

pub struct RenderOptions {
    pub theme: Theme,
    /// Skip text drawing; keeps pixel output independent of installed fonts.
    pub draw_text: bool,
    /// Color the surface is cleared to before content is drawn.
    pub clear_color: skia::Color,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            draw_text: true,
            clear_color: skia::Color::TRANSPARENT,
        }
    }
}

impl RenderOptions {
    /// Options for `theme`, clearing the surface to the theme's surface color.
    pub fn themed(theme: Theme) -> Self {
        Self { theme, clear_color: theme.surface, ..Self::default() }
    }
}
