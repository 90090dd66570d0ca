use crate::layout::VennLayout;
use crate::template::{HAlign, VAlign};
use crate::theme::Theme;
use anyhow::Result;
use std::path::Path;

/// Serializes a computed layout to an SVG document string.
///
/// Draw order is fixed: background, ellipses in group order (overlap
/// colors come from alpha blending alone), region labels, group names,
/// then the legend box and its entries. Identical inputs produce a
/// byte-identical string.
pub fn render_svg(layout: &VennLayout, theme: &Theme) -> String {
    let mut svg = String::new();
    let width = layout.width;
    let height = layout.height;

    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width:.0}\" height=\"{height:.0}\" viewBox=\"0 0 {width:.0} {height:.0}\">",
    ));

    svg.push_str(&format!(
        "<rect width=\"100%\" height=\"100%\" fill=\"{}\"/>",
        theme.background
    ));

    for ellipse in &layout.ellipses {
        svg.push_str(&format!(
            "<ellipse cx=\"{:.2}\" cy=\"{:.2}\" rx=\"{:.2}\" ry=\"{:.2}\" fill=\"{}\" transform=\"rotate({:.2} {:.2} {:.2})\"/>",
            ellipse.cx,
            ellipse.cy,
            ellipse.rx,
            ellipse.ry,
            ellipse.color,
            ellipse.rotation,
            ellipse.cx,
            ellipse.cy
        ));
    }

    for label in &layout.region_labels {
        if label.text.is_empty() {
            continue;
        }
        svg.push_str(&text_svg(
            label.x,
            label.y,
            &label.text,
            &theme.text_color,
            layout.font_size,
            theme,
            label.ha,
            label.va,
        ));
    }

    for name in &layout.group_names {
        svg.push_str(&text_svg(
            name.x,
            name.y,
            &name.name,
            &name.color,
            layout.font_size,
            theme,
            name.ha,
            name.va,
        ));
    }

    let legend = &layout.legend;
    svg.push_str(&format!(
        "<rect x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\" rx=\"{:.2}\" ry=\"{:.2}\" fill=\"{}\" fill-opacity=\"{}\" stroke=\"{}\" stroke-width=\"1\"/>",
        legend.x,
        legend.y,
        legend.width,
        legend.height,
        theme.legend_corner_radius,
        theme.legend_corner_radius,
        theme.legend_background,
        theme.legend_opacity,
        theme.legend_border
    ));
    for entry in &legend.entries {
        svg.push_str(&format!(
            "<rect x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\" fill=\"{}\"/>",
            entry.swatch_x, entry.swatch_y, legend.swatch_size, legend.swatch_size, entry.color
        ));
        svg.push_str(&text_svg(
            entry.text_x,
            entry.text_y,
            &entry.name,
            &theme.text_color,
            layout.font_size,
            theme,
            HAlign::Left,
            VAlign::Center,
        ));
    }

    svg.push_str("</svg>");
    svg
}

#[allow(clippy::too_many_arguments)]
fn text_svg(
    x: f32,
    y: f32,
    text: &str,
    color: &str,
    font_size: f32,
    theme: &Theme,
    ha: HAlign,
    va: VAlign,
) -> String {
    let anchor = match ha {
        HAlign::Left => "start",
        HAlign::Center => "middle",
        HAlign::Right => "end",
    };
    let baseline_y = y + baseline_offset(va, font_size);
    format!(
        "<text x=\"{x:.2}\" y=\"{baseline_y:.2}\" text-anchor=\"{anchor}\" font-family=\"{}\" font-size=\"{font_size}\" fill=\"{color}\">{}</text>",
        theme.font_family,
        escape_xml(text)
    )
}

// Labels are single-line, so vertical alignment is a baseline nudge: the
// baseline sits roughly 0.35em below a centered anchor and 0.85em below a
// top-aligned one.
fn baseline_offset(va: VAlign, font_size: f32) -> f32 {
    match va {
        VAlign::Top => font_size * 0.85,
        VAlign::Center => font_size * 0.35,
        VAlign::Bottom => 0.0,
    }
}

pub fn write_output_svg(svg: &str, output: &Path) -> Result<()> {
    std::fs::write(output, svg)?;
    Ok(())
}

#[cfg(feature = "png")]
pub fn write_output_png(svg: &str, output: &Path) -> Result<()> {
    let mut opt = usvg::Options::default();
    // The default font database is empty; without system fonts every
    // <text> element rasterizes to nothing.
    opt.fontdb_mut().load_system_fonts();

    let tree = usvg::Tree::from_str(svg, &opt)?;
    let size = tree.size().to_int_size();
    let mut pixmap = resvg::tiny_skia::Pixmap::new(size.width(), size.height())
        .ok_or_else(|| anyhow::anyhow!("Failed to allocate pixmap"))?;

    let mut pixmap_mut = pixmap.as_mut();
    resvg::render(&tree, resvg::tiny_skia::Transform::default(), &mut pixmap_mut);
    pixmap.save_png(output)?;
    Ok(())
}

/// Writes the SVG to `output`, picking the format from the extension:
/// `.svg` as-is, `.png` rasterized (feature `png`), anything else an
/// error.
pub fn write_artifact(svg: &str, output: &Path) -> Result<()> {
    let extension = output
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
        .unwrap_or_default();
    match extension.as_str() {
        "svg" => write_output_svg(svg, output),
        #[cfg(feature = "png")]
        "png" => write_output_png(svg, output),
        #[cfg(not(feature = "png"))]
        "png" => Err(anyhow::anyhow!(
            "PNG output requires building with the `png` feature"
        )),
        other => Err(anyhow::anyhow!(
            "Unsupported output extension {other:?} (expected svg or png)"
        )),
    }
}

fn escape_xml(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
