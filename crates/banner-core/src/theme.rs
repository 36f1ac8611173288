// File: crates/banner-core/src/theme.rs
// Summary: Color themes supplying default banner colors, plus hex color parsing.

use skia_safe as skia;

use crate::error::{BannerError, Result};

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    /// Default banner background.
    pub primary: skia::Color,
    /// Default banner text.
    pub on_primary: skia::Color,
    /// Surface cleared behind the content.
    pub surface: skia::Color,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            primary: skia::Color::from_argb(255, 0x67, 0x50, 0xa4),
            on_primary: skia::Color::from_argb(255, 0xff, 0xff, 0xff),
            surface: skia::Color::from_argb(255, 0xff, 0xfb, 0xfe),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            primary: skia::Color::from_argb(255, 0xd0, 0xbc, 0xff),
            on_primary: skia::Color::from_argb(255, 0x38, 0x1e, 0x72),
            surface: skia::Color::from_argb(255, 0x1c, 0x1b, 0x1f),
        }
    }

    pub fn high_contrast() -> Self {
        Self {
            name: "high-contrast",
            primary: skia::Color::from_argb(255, 0xff, 0xff, 0x00),
            on_primary: skia::Color::from_argb(255, 0x00, 0x00, 0x00),
            surface: skia::Color::from_argb(255, 0x00, 0x00, 0x00),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::light()
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark(), Theme::high_contrast()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::light()
}

/// Parse `#RRGGBB` or `#AARRGGBB` (leading `#` optional).
pub fn parse_color(s: &str) -> Result<skia::Color> {
    let hex = s.trim().trim_start_matches('#');
    let invalid = || BannerError::InvalidColor(s.to_string());
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid());
    }
    let v = u32::from_str_radix(hex, 16).map_err(|_| invalid())?;
    match hex.len() {
        6 => Ok(skia::Color::new(0xff00_0000 | v)),
        8 => Ok(skia::Color::new(v)),
        _ => Err(invalid()),
    }
}
