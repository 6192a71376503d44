use std::path::Path;

use crate::config::LayoutConfig;
use crate::error::{RenderError, Result};
use crate::layout::Layout;
use crate::theme::Theme;

/// Emits the shape list as an SVG document: background, one circle per node,
/// then one line per connection. Circles come first so connections paint over
/// them; later connections may occlude earlier ones at intersections.
pub fn render_svg(layout: &Layout, theme: &Theme, config: &LayoutConfig) -> String {
    let mut svg = String::new();
    let width = layout.width;
    let height = layout.height;

    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" viewBox=\"0 0 {width} {height}\">",
    ));
    svg.push_str(&format!(
        "<rect width=\"100%\" height=\"100%\" fill=\"{}\"/>",
        theme.background
    ));

    let radius = config.node_radius();
    for node in &layout.nodes {
        svg.push_str(&format!(
            "<circle cx=\"{:.2}\" cy=\"{:.2}\" r=\"{:.2}\" fill=\"{}\" stroke=\"{}\" stroke-width=\"1\"/>",
            node.anchor.0, node.anchor.1, radius, theme.node_fill, theme.node_outline
        ));
    }

    for edge in &layout.edges {
        svg.push_str(&format!(
            "<line x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\" stroke=\"{}\" stroke-width=\"{}\"/>",
            edge.start.0, edge.start.1, edge.end.0, edge.end.1, theme.line_color, config.line_width
        ));
    }

    svg.push_str("</svg>");
    svg
}

pub fn write_output_svg(svg: &str, output: &Path) -> Result<()> {
    std::fs::write(output, svg).map_err(|err| RenderError::OutputWrite {
        path: output.to_path_buf(),
        source: err.into(),
    })
}

/// Rasterizes the shape list into a pixel canvas and persists it. Encoding
/// and blending belong to usvg/resvg; any failure there is fatal.
#[cfg(feature = "png")]
pub fn write_output_png(svg: &str, output: &Path) -> Result<()> {
    let opt = usvg::Options::default();
    let tree = usvg::Tree::from_str(svg, &opt).map_err(|err| RenderError::OutputWrite {
        path: output.to_path_buf(),
        source: err.into(),
    })?;
    let size = tree.size().to_int_size();
    let mut pixmap = resvg::tiny_skia::Pixmap::new(size.width(), size.height()).ok_or_else(|| {
        RenderError::OutputWrite {
            path: output.to_path_buf(),
            source: anyhow::anyhow!(
                "failed to allocate {}x{} pixmap",
                size.width(),
                size.height()
            ),
        }
    })?;
    resvg::render(
        &tree,
        resvg::tiny_skia::Transform::default(),
        &mut pixmap.as_mut(),
    );
    pixmap
        .save_png(output)
        .map_err(|err| RenderError::OutputWrite {
            path: output.to_path_buf(),
            source: err.into(),
        })
}
