// File: crates/banner-core/src/banner.rs
// Summary: SlantedBanner layout and composite draw, plus headless PNG/RGBA rendering via Skia CPU raster surfaces.

use log::{debug, warn};
use skia_safe as skia;

use crate::error::{BannerError, Result};
use crate::geometry::{banner_path, rotation_degrees, text_anchor, Corner, Point, SurfaceExtent};
use crate::style::{BannerStyle, RenderOptions};
use crate::text::TextShaper;

/// Everything needed to paint one banner: a pure function of style, corner and extent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BannerLayout {
    pub corner: Corner,
    pub polygon: [Point; 4],
    pub anchor: Point,
    pub rotation_degrees: f32,
    pub effective_thickness: f32,
}

impl BannerLayout {
    pub fn compute(style: &BannerStyle, corner: Corner, extent: SurfaceExtent) -> Self {
        let thickness = style.effective_thickness();
        let t = style.projected_thickness();
        let p = style.projected_padding();

        if p.width + t.width > extent.width || p.height + t.height > extent.height {
            warn!(
                "banner at {} overflows {}x{} surface (padding {} + thickness {})",
                corner, extent.width, extent.height, style.padding, thickness
            );
        }

        let polygon = banner_path(corner, t.width, t.height, p.width, p.height, extent.width, extent.height);
        let anchor = text_anchor(corner, style.text_size, style.padding, thickness, extent.width, extent.height);
        let layout = Self {
            corner,
            polygon,
            anchor,
            rotation_degrees: rotation_degrees(corner),
            effective_thickness: thickness,
        };
        debug!("banner layout: {:?}", layout);
        layout
    }

    pub fn to_skia_path(&self) -> skia::Path {
        let mut path = skia::PathBuilder::new();
        path.move_to(self.polygon[0]);
        for &pt in &self.polygon[1..] {
            path.line_to(pt);
        }
        path.close();
        path.detach()
    }
}

impl From<Point> for skia::Point {
    fn from(p: Point) -> Self {
        skia::Point::new(p.x, p.y)
    }
}

/// A slanted ribbon label drawn across one corner of its content.
pub struct SlantedBanner {
    pub style: BannerStyle,
    pub corner: Corner,
    pub options: RenderOptions,
    shaper: TextShaper,
}

impl SlantedBanner {
    pub fn new(style: BannerStyle, corner: Corner) -> Self {
        Self::with_options(style, corner, RenderOptions::default())
    }

    pub fn with_options(style: BannerStyle, corner: Corner, options: RenderOptions) -> Self {
        Self { style, corner, options, shaper: TextShaper::new() }
    }

    pub fn layout(&self, extent: SurfaceExtent) -> BannerLayout {
        BannerLayout::compute(&self.style, self.corner, extent)
    }

    /// Paint `content`, then the banner over it, clipped to `extent`.
    pub fn draw<F>(&self, canvas: &skia::Canvas, extent: SurfaceExtent, content: F) -> Result<()>
    where
        F: FnOnce(&skia::Canvas, SurfaceExtent),
    {
        if extent.is_degenerate() {
            return Err(BannerError::DegenerateExtent { width: extent.width, height: extent.height });
        }
        let layout = self.layout(extent);
        let theme = &self.options.theme;

        canvas.save();
        canvas.clip_rect(skia::Rect::from_wh(extent.width, extent.height), skia::ClipOp::Intersect, true);

        content(canvas, extent);

        let mut fill = skia::Paint::default();
        fill.set_anti_alias(true);
        fill.set_style(skia::paint::Style::Fill);
        fill.set_color(self.style.resolved_background(theme));
        canvas.draw_path(&layout.to_skia_path(), &fill);

        if self.options.draw_text && !self.style.text.is_empty() {
            canvas.save();
            canvas.rotate(layout.rotation_degrees, Some(layout.anchor.into()));
            self.shaper.draw_centered(
                canvas,
                &self.style.text,
                layout.anchor.x,
                layout.anchor.y,
                self.style.text_size,
                self.style.resolved_text_color(theme),
                self.style.bold,
            );
            canvas.restore();
        }

        canvas.restore();
        Ok(())
    }

    /// Render onto a fresh raster surface; returns (pixels, width, height, stride) in RGBA8.
    pub fn render_to_rgba8<F>(&self, extent: SurfaceExtent, content: F) -> Result<(Vec<u8>, i32, i32, usize)>
    where
        F: FnOnce(&skia::Canvas, SurfaceExtent),
    {
        let mut surface = self.raster_surface(extent, content)?;
        let (w, h) = (surface.width(), surface.height());
        let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
        let stride = w as usize * 4;
        let mut pixels = vec![0u8; stride * h as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            return Err(BannerError::ReadPixels);
        }
        Ok((pixels, w, h, stride))
    }

    pub fn render_to_png_bytes<F>(&self, extent: SurfaceExtent, content: F) -> Result<Vec<u8>>
    where
        F: FnOnce(&skia::Canvas, SurfaceExtent),
    {
        let mut surface = self.raster_surface(extent, content)?;
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or(BannerError::Encode)?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render the banner to a PNG at `output_png_path` using a CPU raster surface.
    pub fn render_to_png<F>(
        &self,
        extent: SurfaceExtent,
        output_png_path: impl AsRef<std::path::Path>,
        content: F,
    ) -> Result<()>
    where
        F: FnOnce(&skia::Canvas, SurfaceExtent),
    {
        let bytes = self.render_to_png_bytes(extent, content)?;
        if let Some(parent) = output_png_path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_png_path, bytes)?;
        Ok(())
    }

    fn raster_surface<F>(&self, extent: SurfaceExtent, content: F) -> Result<skia::Surface>
    where
        F: FnOnce(&skia::Canvas, SurfaceExtent),
    {
        if extent.is_degenerate() {
            return Err(BannerError::DegenerateExtent { width: extent.width, height: extent.height });
        }
        let (w, h) = (extent.width.ceil() as i32, extent.height.ceil() as i32);
        let mut surface = skia::surfaces::raster_n32_premul((w, h))
            .ok_or(BannerError::SurfaceCreation { width: w, height: h })?;
        let canvas = surface.canvas();
        canvas.clear(self.options.clear_color);
        self.draw(canvas, extent, content)?;
        Ok(surface)
    }
}

/// Content closure that fills the whole extent with one color.
pub fn solid_content(color: skia::Color) -> impl FnOnce(&skia::Canvas, SurfaceExtent) {
    move |canvas, extent| {
        let mut paint = skia::Paint::default();
        paint.set_color(color);
        canvas.draw_rect(skia::Rect::from_wh(extent.width, extent.height), &paint);
    }
}
