use serde::{Deserialize, Serialize};

/// Semi-transparent group fills, in group-index order.
const CLASSIC_PALETTE: [&str; 6] = [
    "rgba(92, 192, 98, 0.5)",
    "rgba(90, 155, 212, 0.5)",
    "rgba(246, 236, 86, 0.6)",
    "rgba(241, 90, 96, 0.4)",
    "rgba(255, 117, 0, 0.3)",
    "rgba(82, 82, 190, 0.2)",
];

/// Colors and typography for the diagram. Geometry lives in the template,
/// canvas sizing in [`VennConfig`](crate::config::VennConfig).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theme {
    pub font_family: String,
    pub text_color: String,
    pub background: String,
    /// Group fills, handed out by index and cycled when a template wants
    /// more groups than the palette has entries.
    pub palette: Vec<String>,
    pub legend_background: String,
    pub legend_border: String,
    pub legend_opacity: f32,
    pub legend_corner_radius: f32,
}

impl Theme {
    /// The classic look: black text on white with six translucent fills.
    pub fn classic() -> Self {
        Self {
            font_family: "Helvetica, Arial, sans-serif".to_string(),
            text_color: "#000000".to_string(),
            background: "#FFFFFF".to_string(),
            palette: CLASSIC_PALETTE.iter().map(|c| c.to_string()).collect(),
            legend_background: "#FFFFFF".to_string(),
            legend_border: "#CCCCCC".to_string(),
            legend_opacity: 0.5,
            legend_corner_radius: 6.0,
        }
    }

    /// Light text on a dark canvas; same fills, since they are translucent
    /// enough to read on either background.
    pub fn dark() -> Self {
        Self {
            text_color: "#E8E8E8".to_string(),
            background: "#1E1E1E".to_string(),
            legend_background: "#2A2A2A".to_string(),
            legend_border: "#555555".to_string(),
            ..Self::classic()
        }
    }

    /// The fill for group `index`, cycling through the palette. An empty
    /// palette falls back to the classic fills.
    pub fn color_for(&self, index: usize) -> &str {
        if self.palette.is_empty() {
            return CLASSIC_PALETTE[index % CLASSIC_PALETTE.len()];
        }
        &self.palette[index % self.palette.len()]
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::classic()
    }
}
