//! Graph rendering trait and shared drawing helpers

use crate::{FontConfig, GraphConfig};
use bikeshare_common::Result;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::path::Path;
use tracing::{debug, info};

/// Trait for charts that draw onto a `plotters` area
pub trait GraphRenderer {
    /// Short name used in logs
    fn name(&self) -> &'static str;

    /// Draw the chart onto `root`, which is already filled with the background
    fn draw<DB: DrawingBackend>(
        &self,
        root: &DrawingArea<DB, Shift>,
        config: &GraphConfig,
    ) -> Result<()>
    where
        DB::ErrorType: 'static;

    /// Render the chart to an SVG document
    fn render_svg(&self, config: &GraphConfig) -> Result<String> {
        let mut svg = String::new();
        {
            let root =
                SVGBackend::with_string(&mut svg, (config.width, config.height)).into_drawing_area();
            root.fill(&parse_color(&config.style.background_color))?;
            self.draw(&root, config)?;
            root.present()?;
        }

        debug!("Rendered {} chart ({} bytes)", self.name(), svg.len());
        Ok(svg)
    }

    /// Render the chart to an SVG file
    fn render_to_file(&self, config: &GraphConfig, path: &Path) -> Result<()> {
        let svg = self.render_svg(config)?;
        std::fs::write(path, svg)?;

        info!("Successfully rendered {} chart to {}", self.name(), path.display());
        Ok(())
    }
}

/// Parse a hex color string (`#RRGGBB`); anything else yields black
pub fn parse_color(color_str: &str) -> RGBColor {
    if let Some(hex) = color_str.strip_prefix('#') {
        if hex.len() == 6 && hex.is_ascii() {
            if let (Ok(r), Ok(g), Ok(b)) = (
                u8::from_str_radix(&hex[0..2], 16),
                u8::from_str_radix(&hex[2..4], 16),
                u8::from_str_radix(&hex[4..6], 16),
            ) {
                return RGBColor(r, g, b);
            }
        }
    }
    RGBColor(0, 0, 0)
}

pub(crate) fn text_style<'a>(font: &'a FontConfig, color: &str) -> TextStyle<'a> {
    (font.family.as_str(), font.size)
        .into_font()
        .color(&parse_color(color))
}

pub(crate) fn to_coord(value: u32) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}

/// Area below the caption, or `root` itself when the caption is empty
pub(crate) fn titled_area<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    title: &str,
    config: &GraphConfig,
) -> Result<DrawingArea<DB, Shift>>
where
    DB::ErrorType: 'static,
{
    if title.is_empty() {
        return Ok(root.clone());
    }

    let style = text_style(&config.style.title_font, &config.style.text_color);
    Ok(root.titled(title, style)?)
}

/// Centered message used in place of a chart with nothing to plot
pub(crate) fn draw_notice<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    config: &GraphConfig,
    message: &str,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    let (width, height) = area.dim_in_pixel();
    let style = text_style(&config.style.label_font, &config.style.text_color)
        .pos(Pos::new(HPos::Center, VPos::Center));

    area.draw(&Text::new(
        message.to_string(),
        (to_coord(width / 2), to_coord(height / 2)),
        style,
    ))?;
    Ok(())
}
