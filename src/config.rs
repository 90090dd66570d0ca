use crate::theme::Theme;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Canvas sizing knobs: a 13x13 inch figure at 96 dpi with 14 pt labels,
/// pixels being inches times dpi.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VennConfig {
    /// Figure size in inches (width, height).
    pub figsize: (f32, f32),
    pub dpi: f32,
    pub font_size: f32,
    /// Per-group fill overrides. When present the length must match the
    /// template's group count; when absent the theme palette is used.
    pub colors: Option<Vec<String>>,
}

impl Default for VennConfig {
    fn default() -> Self {
        Self {
            figsize: (13.0, 13.0),
            dpi: 96.0,
            font_size: 14.0,
            colors: None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub theme: Theme,
    pub venn: VennConfig,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ThemeVariables {
    font_family: Option<String>,
    text_color: Option<String>,
    background: Option<String>,
    palette: Option<Vec<String>>,
    legend_background: Option<String>,
    legend_border: Option<String>,
    legend_opacity: Option<f32>,
    legend_corner_radius: Option<f32>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct VennConfigFile {
    figsize: Option<(f32, f32)>,
    dpi: Option<f32>,
    font_size: Option<f32>,
    colors: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ConfigFile {
    theme: Option<String>,
    theme_variables: Option<ThemeVariables>,
    venn: Option<VennConfigFile>,
}

/// Loads defaults, overlaid with a JSON config file when a path is given.
///
/// The file selects a base theme by name ("classic" or "dark"), then
/// overrides individual theme variables and venn settings on top of it.
/// Unknown theme names keep the default.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let mut config = Config::default();
    let Some(path) = path else {
        return Ok(config);
    };

    let contents = std::fs::read_to_string(path)?;
    let parsed: ConfigFile = serde_json::from_str(&contents)?;

    if let Some(theme_name) = parsed.theme.as_deref() {
        if theme_name == "dark" {
            config.theme = Theme::dark();
        } else if theme_name == "classic" || theme_name == "default" {
            config.theme = Theme::classic();
        }
    }

    if let Some(vars) = parsed.theme_variables {
        if let Some(v) = vars.font_family {
            config.theme.font_family = v;
        }
        if let Some(v) = vars.text_color {
            config.theme.text_color = v;
        }
        if let Some(v) = vars.background {
            config.theme.background = v;
        }
        if let Some(v) = vars.palette {
            config.theme.palette = v;
        }
        if let Some(v) = vars.legend_background {
            config.theme.legend_background = v;
        }
        if let Some(v) = vars.legend_border {
            config.theme.legend_border = v;
        }
        if let Some(v) = vars.legend_opacity {
            config.theme.legend_opacity = v;
        }
        if let Some(v) = vars.legend_corner_radius {
            config.theme.legend_corner_radius = v;
        }
    }

    if let Some(venn) = parsed.venn {
        if let Some(v) = venn.figsize {
            config.venn.figsize = v;
        }
        if let Some(v) = venn.dpi {
            config.venn.dpi = v;
        }
        if let Some(v) = venn.font_size {
            config.venn.font_size = v;
        }
        if let Some(v) = venn.colors {
            config.venn.colors = Some(v);
        }
    }

    Ok(config)
}
