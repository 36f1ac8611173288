// File: crates/banner-demo/src/main.rs
// Summary: Demo renders a slanted banner over a solid box for each configured corner, plus a thickness sweep, to PNGs.

mod config;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use banner_core::{parse_color, solid_content, theme, Corner, RenderOptions, SlantedBanner};
use log::info;

use crate::config::DemoConfig;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Optional config path from CLI
    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let config = DemoConfig::load(config_path.as_deref())?;
    if let Some(p) = &config_path {
        info!("Using config {}", p.display());
    }

    let extent = config.extent();
    let style = config.banner.to_style()?;
    let content = parse_color(&config.content_color).context("content_color")?;
    let theme = theme::find(&config.theme);
    info!(
        "Rendering {:?} on {}x{} with theme {}",
        style.text, extent.width, extent.height, theme.name
    );

    std::fs::create_dir_all(&config.output_dir)
        .with_context(|| format!("creating {}", config.output_dir.display()))?;

    // 1) One banner per corner
    for &corner in &config.corners {
        let banner = SlantedBanner::with_options(style.clone(), corner, options(theme));
        let out = out_name(&config.output_dir, &format!("banner_{corner}"));
        banner.render_to_png(extent, &out, solid_content(content))?;
        info!("Wrote {}", out.display());
    }

    // 2) Thickness sweep, like dragging the slider from 0 to 100
    let corner = config.corners.first().copied().unwrap_or(Corner::TopRight);
    let steps = config.sweep_steps;
    for step in (0..=steps).filter(|_| steps > 0) {
        let thickness = step as f32 / steps as f32 * 100.0;
        let banner = SlantedBanner::with_options(style.clone().with_thickness(thickness), corner, options(theme));
        let layout = banner.layout(extent);
        let out = out_name(&config.output_dir, &format!("sweep_{corner}_{:03}", thickness.round() as u32));
        banner.render_to_png(extent, &out, solid_content(content))?;
        info!(
            "Wrote {} (thickness {:.0} -> {:.1})",
            out.display(),
            thickness,
            layout.effective_thickness
        );
    }

    Ok(())
}

fn options(theme: theme::Theme) -> RenderOptions {
    RenderOptions::themed(theme)
}

/// Produce output file name like <dir>/<stem>.png
fn out_name(dir: &Path, stem: &str) -> PathBuf {
    dir.join(format!("{stem}.png"))
}
