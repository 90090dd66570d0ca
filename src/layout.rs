use crate::config::VennConfig;
use crate::error::VennError;
use crate::labels::Labels;
use crate::region::RegionCode;
use crate::template::{HAlign, VAlign, VennTemplate};
use crate::text::text_width;
use crate::theme::Theme;

// Legend box metrics, in pixels.
const LEGEND_SWATCH: f32 = 18.0;
const LEGEND_ROW_GAP: f32 = 6.0;
const LEGEND_PADDING: f32 = 12.0;
const LEGEND_MARGIN: f32 = 10.0;

/// A fully resolved diagram in pixel space (y pointing down), ready for
/// the SVG serializer. `width` covers the diagram square plus the legend
/// box hanging off its right edge.
#[derive(Debug, Clone)]
pub struct VennLayout {
    pub width: f32,
    pub height: f32,
    pub font_size: f32,
    pub ellipses: Vec<EllipseLayout>,
    pub region_labels: Vec<RegionLabelLayout>,
    pub group_names: Vec<GroupNameLayout>,
    pub legend: LegendLayout,
}

#[derive(Debug, Clone)]
pub struct EllipseLayout {
    pub cx: f32,
    pub cy: f32,
    pub rx: f32,
    pub ry: f32,
    /// Degrees in the SVG rotation sense (clockwise, y pointing down).
    pub rotation: f32,
    pub color: String,
}

#[derive(Debug, Clone)]
pub struct RegionLabelLayout {
    pub code: RegionCode,
    pub x: f32,
    pub y: f32,
    pub text: String,
    pub ha: HAlign,
    pub va: VAlign,
}

#[derive(Debug, Clone)]
pub struct GroupNameLayout {
    pub name: String,
    pub x: f32,
    pub y: f32,
    pub color: String,
    pub ha: HAlign,
    pub va: VAlign,
}

#[derive(Debug, Clone)]
pub struct LegendLayout {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub swatch_size: f32,
    pub entries: Vec<LegendEntryLayout>,
}

#[derive(Debug, Clone)]
pub struct LegendEntryLayout {
    pub name: String,
    pub color: String,
    pub swatch_x: f32,
    pub swatch_y: f32,
    pub text_x: f32,
    /// Vertical center of the row; the serializer owns baseline placement.
    pub text_y: f32,
}

/// Resolves labels and group names against a template into pixel space.
///
/// All validation happens before any geometry is produced, so an `Err`
/// means nothing was laid out and nothing will be written. Label codes
/// missing from the map still get an entry with empty text; an empty map
/// lays out an unlabeled diagram.
pub fn compute_venn_layout<S: AsRef<str>>(
    labels: &Labels,
    names: &[S],
    template: &VennTemplate,
    theme: &Theme,
    config: &VennConfig,
) -> Result<VennLayout, VennError> {
    let (diagram_width, height) = validate_canvas(config)?;

    if names.len() != template.groups {
        return Err(VennError::Configuration(format!(
            "template lays out {} groups but {} names were supplied",
            template.groups,
            names.len()
        )));
    }

    let colors = resolve_colors(template.groups, theme, config)?;

    for code in labels.keys() {
        if code.groups() != template.groups {
            return Err(VennError::InvalidInput(format!(
                "label code {code} is {} bits wide; the template lays out {} groups",
                code.groups(),
                template.groups
            )));
        }
    }

    // Template coordinates are y-up in the unit square; pixel space is
    // y-down, so y flips and rotation angles negate.
    let px = |x: f32| x * diagram_width;
    let py = |y: f32| (1.0 - y) * height;

    let ellipses = template
        .ellipses
        .iter()
        .zip(&colors)
        .map(|(spec, color)| EllipseLayout {
            cx: px(spec.cx),
            cy: py(spec.cy),
            rx: spec.width / 2.0 * diagram_width,
            ry: spec.height / 2.0 * height,
            rotation: -spec.angle,
            color: color.clone(),
        })
        .collect();

    let region_labels = template
        .region_anchors
        .iter()
        .map(|(code, anchor)| RegionLabelLayout {
            code: *code,
            x: px(anchor.x),
            y: py(anchor.y),
            text: labels.get(code).cloned().unwrap_or_default(),
            ha: anchor.ha,
            va: anchor.va,
        })
        .collect();

    let group_names = template
        .name_anchors
        .iter()
        .zip(names)
        .zip(&colors)
        .map(|((anchor, name), color)| GroupNameLayout {
            name: name.as_ref().to_string(),
            x: px(anchor.x),
            y: py(anchor.y),
            color: color.clone(),
            ha: anchor.ha,
            va: anchor.va,
        })
        .collect();

    let legend = build_legend(names, &colors, diagram_width, height, config.font_size);
    let width = legend.x + legend.width + LEGEND_MARGIN;

    Ok(VennLayout {
        width,
        height,
        font_size: config.font_size,
        ellipses,
        region_labels,
        group_names,
        legend,
    })
}

// Checks the canvas knobs and yields the diagram's pixel size.
fn validate_canvas(config: &VennConfig) -> Result<(f32, f32), VennError> {
    let checks = [
        ("figure width", config.figsize.0),
        ("figure height", config.figsize.1),
        ("dpi", config.dpi),
        ("font size", config.font_size),
    ];
    for (what, value) in checks {
        if !value.is_finite() || value <= 0.0 {
            return Err(VennError::Configuration(format!(
                "{what} must be positive and finite, got {value}"
            )));
        }
    }

    // Finite knobs can still produce an infinite product.
    let width = config.figsize.0 * config.dpi;
    let height = config.figsize.1 * config.dpi;
    if !width.is_finite() || !height.is_finite() {
        return Err(VennError::Configuration(format!(
            "{} x {} inches at {} dpi overflows the pixel range",
            config.figsize.0, config.figsize.1, config.dpi
        )));
    }
    Ok((width, height))
}

fn resolve_colors(
    groups: usize,
    theme: &Theme,
    config: &VennConfig,
) -> Result<Vec<String>, VennError> {
    if let Some(overrides) = &config.colors {
        if overrides.len() != groups {
            return Err(VennError::Configuration(format!(
                "{} color overrides supplied for {groups} groups",
                overrides.len()
            )));
        }
        return Ok(overrides.clone());
    }
    if theme.palette.is_empty() {
        return Err(VennError::Configuration(
            "theme palette is empty and no color overrides were supplied".to_string(),
        ));
    }
    Ok((0..groups)
        .map(|index| theme.color_for(index).to_string())
        .collect())
}

/// Sizes a swatch-per-group legend box just right of the diagram square,
/// vertically centered. The caller widens the overall canvas to fit it.
fn build_legend<S: AsRef<str>>(
    names: &[S],
    colors: &[String],
    diagram_width: f32,
    height: f32,
    font_size: f32,
) -> LegendLayout {
    let row_height = LEGEND_SWATCH.max(font_size) + LEGEND_ROW_GAP;
    let widest_name = names
        .iter()
        .map(|name| text_width(name.as_ref(), font_size))
        .fold(0.0, f32::max);

    let box_width = LEGEND_PADDING * 2.0 + LEGEND_SWATCH + LEGEND_ROW_GAP + widest_name;
    let box_height = LEGEND_PADDING * 2.0 + row_height * names.len() as f32 - LEGEND_ROW_GAP;
    let x = diagram_width + LEGEND_MARGIN;
    let y = height / 2.0 - box_height / 2.0;

    let entries = names
        .iter()
        .zip(colors)
        .enumerate()
        .map(|(index, (name, color))| {
            let row_y = y + LEGEND_PADDING + index as f32 * row_height;
            LegendEntryLayout {
                name: name.as_ref().to_string(),
                color: color.clone(),
                swatch_x: x + LEGEND_PADDING,
                swatch_y: row_y,
                text_x: x + LEGEND_PADDING + LEGEND_SWATCH + LEGEND_ROW_GAP,
                text_y: row_y + LEGEND_SWATCH / 2.0,
            }
        })
        .collect();

    LegendLayout {
        x,
        y,
        width: box_width,
        height: box_height,
        swatch_size: LEGEND_SWATCH,
        entries,
    }
}
