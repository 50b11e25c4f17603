//! SVG and PNG output for traced paths.
//!
//! The renderer consumes a [`PathTrace`] and nothing else: it picks the
//! viewBox from the trace's bounds, strokes a single connected polyline
//! through the points in order, and serializes the result as SVG markup.
//! PNG output rasterizes that same markup through usvg/resvg.

use crate::errors::{RenderError, UnknownFormat};
use crate::path::PathTrace;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;
use svg::Document;
use svg::node::element::Polyline;

/// Supported output file formats.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    Svg,
    Png,
}

impl OutputFormat {
    /// The file extension (and CLI name) for this format.
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Svg => "svg",
            OutputFormat::Png => "png",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for OutputFormat {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "svg" => Ok(OutputFormat::Svg),
            "png" => Ok(OutputFormat::Png),
            other => Err(UnknownFormat(other.to_owned())),
        }
    }
}

/// Builds the SVG document for a traced path.
///
/// The viewBox is the path's bounding box and the curve is stroked as a
/// single black polyline with no fill. Explicit pixel dimensions matching
/// the viewBox are attached so rasterization is deterministic.
pub fn svg_document(trace: &PathTrace) -> Result<Document, RenderError> {
    let bounds = trace.bounds;
    if !bounds.min.is_finite() || !bounds.max.is_finite() {
        return Err(RenderError::NonFiniteBounds);
    }

    // A zero-sized viewBox dimension disables SVG rendering entirely; give
    // degenerate dimensions (turn-only traces, axis-aligned lines) one unit
    // of room instead.
    let view_width = if bounds.width() > 0.0 { bounds.width() } else { 1.0 };
    let view_height = if bounds.height() > 0.0 { bounds.height() } else { 1.0 };

    let points = trace
        .points
        .iter()
        .map(|p| format!("{:.2},{:.2}", p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ");

    let curve = Polyline::new()
        .set("points", points)
        .set("fill", "none")
        .set("stroke", "black")
        .set("stroke-width", 1);

    let document = Document::new()
        .set("width", view_width.ceil())
        .set("height", view_height.ceil())
        .set(
            "viewBox",
            format!(
                "{:.2} {:.2} {:.2} {:.2}",
                bounds.min.x, bounds.min.y, view_width, view_height
            ),
        )
        .add(curve);

    Ok(document)
}

/// Rasterizes SVG markup to PNG bytes.
///
/// Parses with usvg, renders into a white-filled tiny-skia pixmap at 1:1
/// scale, and encodes the pixmap as PNG.
pub fn rasterize(svg: &str) -> Result<Vec<u8>, RenderError> {
    let options = usvg::Options::default();
    let tree = usvg::Tree::from_str(svg, &options)?;

    let size = tree.size();
    let width = (size.width().ceil() as u32).max(1);
    let height = (size.height().ceil() as u32).max(1);

    let mut pixmap = tiny_skia::Pixmap::new(width, height)
        .ok_or(RenderError::PixmapAlloc { width, height })?;
    pixmap.fill(tiny_skia::Color::WHITE);

    resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());

    pixmap
        .encode_png()
        .map_err(|e| RenderError::PngEncode(e.to_string()))
}

/// Writes `trace` to `path` as an SVG file.
pub fn write_svg(trace: &PathTrace, path: impl AsRef<Path>) -> Result<(), RenderError> {
    let document = svg_document(trace)?;
    svg::save(path, &document)?;
    Ok(())
}

/// Writes `trace` to `path` as a PNG file.
pub fn write_png(trace: &PathTrace, path: impl AsRef<Path>) -> Result<(), RenderError> {
    let document = svg_document(trace)?;
    let png = rasterize(&document.to_string())?;
    fs::write(path, png)?;
    Ok(())
}
