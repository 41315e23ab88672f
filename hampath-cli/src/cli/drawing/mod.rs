//! Drawings of a graph with its Hamiltonian path highlighted.
//!
//! Every format starts from the same picture: vertices on a circle, edges in
//! grey, path edges in red, and a title naming the path. SVG is the native
//! form; PNG rasterizes it, and DOT hands the layout to Graphviz instead.

mod dot;
mod raster;
mod svg;

use std::path::Path;

use clap::ValueEnum;
use hampath_core::define_error_codes;
use thiserror::Error;

pub use dot::render_dot;
pub use raster::svg_to_png;
pub use svg::render_svg;

/// Output formats accepted by `render`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum DrawingFormat {
    /// Raster image.
    #[default]
    Png,
    /// Scalable vector document.
    Svg,
    /// Graphviz source.
    Dot,
}

impl DrawingFormat {
    /// File extension written for this format.
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Svg => "svg",
            Self::Dot => "dot",
        }
    }

    /// Format implied by the extension of `path`, if it names one.
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "png" => Some(Self::Png),
            "svg" => Some(Self::Svg),
            "dot" | "gv" => Some(Self::Dot),
            _ => None,
        }
    }
}

/// Errors raised while turning a drawing into image bytes.
#[derive(Debug, Error)]
pub enum DrawingError {
    /// The generated SVG was rejected by the SVG parser.
    #[error("failed to parse generated SVG: {0}")]
    SvgParse(#[source] usvg::Error),
    /// The raster canvas could not be allocated.
    #[error("failed to allocate a {width}x{height} pixmap")]
    PixmapAlloc {
        /// Requested width in pixels.
        width: u32,
        /// Requested height in pixels.
        height: u32,
    },
    /// The rendered pixmap could not be encoded.
    #[error("failed to encode PNG")]
    PngEncode,
}

define_error_codes! {
    /// Stable codes describing [`DrawingError`] variants.
    enum DrawingErrorCode for DrawingError {
        /// The generated SVG was rejected by the SVG parser.
        SvgParse => SvgParse(..) => "DRAWING_SVG_PARSE",
        /// The raster canvas could not be allocated.
        PixmapAlloc => PixmapAlloc { .. } => "DRAWING_PIXMAP_ALLOC",
        /// The rendered pixmap could not be encoded.
        PngEncode => PngEncode => "DRAWING_PNG_ENCODE",
    }
}
