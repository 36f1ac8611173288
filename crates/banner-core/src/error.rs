// File: crates/banner-core/src/error.rs
// Summary: Error type for banner rendering.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BannerError {
    #[error("surface extent {width}x{height} is degenerate")]
    DegenerateExtent { width: f32, height: f32 },

    #[error("failed to create {width}x{height} raster surface")]
    SurfaceCreation { width: i32, height: i32 },

    #[error("failed to read back surface pixels")]
    ReadPixels,

    #[error("encode PNG failed")]
    Encode,

    #[error("unknown corner `{0}`")]
    UnknownCorner(String),

    #[error("invalid color `{0}`, expected #RRGGBB or #AARRGGBB")]
    InvalidColor(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, BannerError>;
