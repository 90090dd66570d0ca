//! Five-set Venn diagram renderer: partitions caller-supplied groups into
//! overlap regions, formats a statistic per region, and draws the classic
//! five-ellipse figure to SVG or PNG.

pub mod config;
pub mod error;
pub mod labels;
pub mod layout;
pub mod layout_dump;
pub mod region;
pub mod render;
pub mod template;
mod text;
pub mod theme;

pub use config::{Config, VennConfig, load_config};
pub use error::VennError;
pub use labels::{LabelStyle, Labels, compute_labels};
pub use layout::{VennLayout, compute_venn_layout};
pub use region::{RegionCode, partition};
#[cfg(feature = "png")]
pub use render::write_output_png;
pub use render::{render_svg, write_artifact, write_output_svg};
pub use template::{DEFAULT_NAMES, VennTemplate, five_set};
pub use theme::Theme;

use std::collections::HashSet;
use std::hash::Hash;
use std::path::Path;

/// Runs the whole pipeline against the five-set template: computes labels,
/// lays them out, renders SVG, writes the artifact. Returns the SVG string
/// that was written.
///
/// Any validation failure surfaces before the output path is touched.
pub fn render_to_path<T, S>(
    groups: &[HashSet<T>],
    names: &[S],
    style: LabelStyle,
    theme: &Theme,
    config: &VennConfig,
    output: &Path,
) -> anyhow::Result<String>
where
    T: Eq + Hash,
    S: AsRef<str>,
{
    let labels = compute_labels(groups, style)?;
    let layout = compute_venn_layout(&labels, names, five_set(), theme, config)?;
    let svg = render_svg(&layout, theme);
    write_artifact(&svg, output)?;
    Ok(svg)
}
