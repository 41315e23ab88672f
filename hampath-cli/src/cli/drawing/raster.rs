//! PNG rasterization of SVG drawings.

use super::DrawingError;

/// Rasterizes `svg` at its intrinsic size and encodes it as PNG.
///
/// System fonts are loaded so vertex labels and the title render as text.
/// Without any installed fonts the shapes still render and the labels are
/// left out.
///
/// # Errors
/// Returns [`DrawingError::SvgParse`] when `svg` is not a valid document,
/// [`DrawingError::PixmapAlloc`] when the canvas is empty or too large, and
/// [`DrawingError::PngEncode`] when encoding fails.
pub fn svg_to_png(svg: &str) -> Result<Vec<u8>, DrawingError> {
    let mut opt = usvg::Options::default();
    opt.fontdb_mut().load_system_fonts();
    opt.font_family = "Arial".to_owned();

    let tree = usvg::Tree::from_str(svg, &opt).map_err(DrawingError::SvgParse)?;
    let size = tree.size().to_int_size();
    let (width, height) = (size.width(), size.height());
    let mut pixmap = tiny_skia::Pixmap::new(width, height)
        .ok_or(DrawingError::PixmapAlloc { width, height })?;
    pixmap.fill(tiny_skia::Color::WHITE);

    resvg::render(&tree, tiny_skia::Transform::identity(), &mut pixmap.as_mut());
    pixmap.encode_png().map_err(|_| DrawingError::PngEncode)
}
