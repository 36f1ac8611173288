// File: crates/banner-core/src/lib.rs
// Summary: Core library entry point; exports banner geometry, styling and Skia rendering.

pub mod banner;
pub mod error;
pub mod geometry;
pub mod style;
pub mod text;
pub mod theme;

pub use banner::{solid_content, BannerLayout, SlantedBanner};
pub use error::{BannerError, Result};
pub use geometry::{
    banner_path, effective_thickness, rotation_degrees, text_anchor, Corner, Point, Projection,
    SurfaceExtent, MIN_TEXT_CLEARANCE, SLANT,
};
pub use style::{BannerStyle, RenderOptions};
pub use text::TextShaper;
pub use theme::{parse_color, Theme};

/// Re-exported so callers can write content closures without naming skia-safe themselves.
pub use skia_safe as skia;
