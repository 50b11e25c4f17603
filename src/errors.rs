//! Error types for the selection and rendering boundary.
//!
//! The core pipeline (expansion, tracing) is total and has no error types;
//! failures only arise once geometry meets names, files and pixels. All of
//! these are terminal — the computation is deterministic, so retrying the
//! same inputs fails identically.

use thiserror::Error;

/// A curve name that matches no built-in preset.
#[derive(Error, Debug)]
#[error("unknown curve '{0}', expected one of: koch, levic, dragon")]
pub struct UnknownCurve(pub String);

/// An output format name that matches no supported format.
#[derive(Error, Debug)]
#[error("unknown output format '{0}', expected svg or png")]
pub struct UnknownFormat(pub String);

/// Errors that occur while writing SVG or PNG output.
#[derive(Error, Debug)]
pub enum RenderError {
    /// The traced geometry contains NaN or infinite coordinates.
    #[error("path bounds are not finite")]
    NonFiniteBounds,

    /// The generated SVG markup was rejected by the rasterizer.
    #[error("failed to parse generated svg: {0}")]
    Svg(#[from] usvg::Error),

    /// The raster target could not be allocated.
    #[error("failed to allocate a {width}x{height} pixmap")]
    PixmapAlloc { width: u32, height: u32 },

    /// PNG encoding failed.
    #[error("png encoding failed: {0}")]
    PngEncode(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
