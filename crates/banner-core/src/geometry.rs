// File: crates/banner-core/src/geometry.rs
// Summary: Pure banner geometry: corner placement, 45° projections, band polygon, text anchor.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::BannerError;

/// Slant of the banner in radians, `atan(1)`.
pub const SLANT: f32 = std::f32::consts::FRAC_PI_4;

/// Minimum clearance added to the text size when flooring the band thickness.
pub const MIN_TEXT_CLEARANCE: f32 = 15.0;

/// Corner of the bounding box the banner crosses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Corner {
    pub const ALL: [Corner; 4] = [
        Corner::TopLeft,
        Corner::TopRight,
        Corner::BottomLeft,
        Corner::BottomRight,
    ];

    pub const fn is_top(self) -> bool {
        matches!(self, Corner::TopLeft | Corner::TopRight)
    }

    /// Kebab-case name, matching the serde representation.
    pub const fn name(self) -> &'static str {
        match self {
            Corner::TopLeft => "top-left",
            Corner::TopRight => "top-right",
            Corner::BottomLeft => "bottom-left",
            Corner::BottomRight => "bottom-right",
        }
    }
}

impl fmt::Display for Corner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Corner {
    type Err = BannerError;

    /// Accepts `top-left`, `top_left` and `topleft` spellings, case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .flat_map(char::to_lowercase)
            .collect();
        match key.as_str() {
            "topleft" => Ok(Corner::TopLeft),
            "topright" => Ok(Corner::TopRight),
            "bottomleft" => Ok(Corner::BottomLeft),
            "bottomright" => Ok(Corner::BottomRight),
            _ => Err(BannerError::UnknownCorner(s.to_string())),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Width/height of the area the banner is drawn over.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceExtent {
    pub width: f32,
    pub height: f32,
}

impl SurfaceExtent {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// True when either side is zero, negative or not finite.
    pub fn is_degenerate(&self) -> bool {
        !(self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0)
    }
}

/// A length projected onto the surface edges along the slant.
///
/// `width` divides by `sin(SLANT)` and `height` by `cos(SLANT)`. At 45° the two
/// are equal; both are kept so the edges stay independent of the angle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projection {
    pub width: f32,
    pub height: f32,
}

impl Projection {
    pub fn of(value: f32) -> Self {
        Self {
            width: value / SLANT.sin(),
            height: value / SLANT.cos(),
        }
    }
}

/// Band thickness floored so the text always fits inside it.
#[inline]
pub fn effective_thickness(requested: f32, text_size: f32) -> f32 {
    requested.max(text_size + MIN_TEXT_CLEARANCE)
}

/// Band polygon for `corner`, as four points to be filled with implicit closure.
///
/// Points run from the outer edge point, to the inner edge point, to the inner
/// point on the adjacent edge, to the outer point on the adjacent edge.
/// Coordinates are not clamped to the surface.
pub fn banner_path(
    corner: Corner,
    thickness_width: f32,
    thickness_height: f32,
    padding_width: f32,
    padding_height: f32,
    width: f32,
    height: f32,
) -> [Point; 4] {
    match corner {
        Corner::TopLeft => [
            Point::new(thickness_width + padding_width, 0.0),
            Point::new(padding_width, 0.0),
            Point::new(0.0, padding_height),
            Point::new(0.0, thickness_height + padding_height),
        ],
        Corner::TopRight => [
            Point::new(width - thickness_width - padding_width, 0.0),
            Point::new(width - padding_width, 0.0),
            Point::new(width, padding_height),
            Point::new(width, thickness_height + padding_height),
        ],
        Corner::BottomLeft => [
            Point::new(thickness_width + padding_width, height),
            Point::new(padding_width, height),
            Point::new(0.0, height - padding_height),
            Point::new(0.0, height - thickness_height - padding_height),
        ],
        Corner::BottomRight => [
            Point::new(width - thickness_width - padding_width, height),
            Point::new(width - padding_width, height),
            Point::new(width, height - padding_height),
            Point::new(width, height - thickness_height - padding_height),
        ],
    }
}

/// Text rotation in degrees; always `±SLANT`.
pub fn rotation_degrees(corner: Corner) -> f32 {
    let slant = SLANT.to_degrees();
    match corner {
        Corner::TopLeft => -slant,
        Corner::TopRight => slant,
        Corner::BottomLeft => slant,
        Corner::BottomRight => -slant,
    }
}

/// Baseline anchor for the text, also the rotation pivot.
///
/// The anchor sits on the middle of the band. Bottom corners subtract half the
/// text size instead of adding it because the baseline faces the other way.
pub fn text_anchor(
    corner: Corner,
    text_size: f32,
    padding: f32,
    thickness: f32,
    width: f32,
    height: f32,
) -> Point {
    let half_text = text_size / 2.0;
    let offset = if corner.is_top() {
        padding + thickness / 2.0 + half_text
    } else {
        padding + thickness / 2.0 - half_text
    };
    let dx = offset * SLANT.sin();
    let dy = offset * SLANT.cos();
    match corner {
        Corner::TopLeft => Point::new(dx, dy),
        Corner::TopRight => Point::new(width - dx, dy),
        Corner::BottomLeft => Point::new(dx, height - dy),
        Corner::BottomRight => Point::new(width - dx, height - dy),
    }
}
