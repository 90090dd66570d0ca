use std::collections::BTreeMap;

use once_cell::sync::Lazy;

use crate::region::RegionCode;

/// Horizontal placement of text relative to its anchor point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HAlign {
    Left,
    #[default]
    Center,
    Right,
}

/// Vertical placement of text relative to its anchor point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VAlign {
    Top,
    #[default]
    Center,
    Bottom,
}

/// One group's ellipse in the unit square, y axis pointing up. `width` and
/// `height` are full axis lengths; `angle` is degrees counter-clockwise.
#[derive(Debug, Clone, Copy)]
pub struct EllipseSpec {
    pub cx: f32,
    pub cy: f32,
    pub width: f32,
    pub height: f32,
    pub angle: f32,
}

/// Anchor for one region's label text.
#[derive(Debug, Clone, Copy)]
pub struct TextAnchor {
    pub x: f32,
    pub y: f32,
    pub ha: HAlign,
    pub va: VAlign,
}

/// Anchor for one group's display name, placed against its outer lobe.
#[derive(Debug, Clone, Copy)]
pub struct NameAnchor {
    pub x: f32,
    pub y: f32,
    pub ha: HAlign,
    pub va: VAlign,
}

/// Fixed geometry for one group count: an ellipse per group, a text anchor
/// per region code and a name anchor per group. Templates are pure lookup
/// tables, independent of the data being plotted.
#[derive(Debug, Clone)]
pub struct VennTemplate {
    pub groups: usize,
    pub ellipses: Vec<EllipseSpec>,
    pub region_anchors: BTreeMap<RegionCode, TextAnchor>,
    pub name_anchors: Vec<NameAnchor>,
}

impl VennTemplate {
    pub fn anchor(&self, code: RegionCode) -> Option<&TextAnchor> {
        self.region_anchors.get(&code)
    }
}

/// Fallback display names for the five-set diagram.
pub const DEFAULT_NAMES: [&str; 5] = ["A", "B", "C", "D", "E"];

// Hand-tuned five-set geometry. All five ellipses share the same axis
// lengths and differ only in center and rotation.
const FIVE_ELLIPSES: [(f32, f32, f32, f32, f32); 5] = [
    (0.428, 0.449, 0.87, 0.50, 155.0),
    (0.469, 0.543, 0.87, 0.50, 82.0),
    (0.558, 0.523, 0.87, 0.50, 10.0),
    (0.578, 0.432, 0.87, 0.50, 118.0),
    (0.489, 0.383, 0.87, 0.50, 46.0),
];

// The mask literal doubles as the region code, most significant bit first.
const FIVE_REGION_ANCHORS: [(u32, f32, f32); 31] = [
    (0b00001, 0.27, 0.11),
    (0b00010, 0.72, 0.11),
    (0b00011, 0.55, 0.13),
    (0b00100, 0.91, 0.58),
    (0b00101, 0.78, 0.64),
    (0b00110, 0.84, 0.41),
    (0b00111, 0.76, 0.55),
    (0b01000, 0.51, 0.90),
    (0b01001, 0.39, 0.15),
    (0b01010, 0.42, 0.78),
    (0b01011, 0.50, 0.15),
    (0b01100, 0.67, 0.76),
    (0b01101, 0.70, 0.71),
    (0b01110, 0.51, 0.74),
    (0b01111, 0.64, 0.67),
    (0b10000, 0.10, 0.61),
    (0b10001, 0.20, 0.31),
    (0b10010, 0.76, 0.25),
    (0b10011, 0.65, 0.23),
    (0b10100, 0.18, 0.50),
    (0b10101, 0.21, 0.37),
    (0b10110, 0.81, 0.37),
    (0b10111, 0.74, 0.40),
    (0b11000, 0.27, 0.70),
    (0b11001, 0.34, 0.25),
    (0b11010, 0.33, 0.72),
    (0b11011, 0.51, 0.22),
    (0b11100, 0.25, 0.58),
    (0b11101, 0.28, 0.39),
    (0b11110, 0.36, 0.66),
    (0b11111, 0.51, 0.47),
];

const FIVE_NAME_ANCHORS: [(f32, f32, HAlign, VAlign); 5] = [
    (0.02, 0.72, HAlign::Right, VAlign::Center),
    (0.72, 0.94, HAlign::Center, VAlign::Bottom),
    (0.97, 0.74, HAlign::Left, VAlign::Center),
    (0.88, 0.05, HAlign::Left, VAlign::Center),
    (0.12, 0.05, HAlign::Right, VAlign::Center),
];

static FIVE_SET: Lazy<VennTemplate> = Lazy::new(|| {
    let ellipses = FIVE_ELLIPSES
        .iter()
        .map(|&(cx, cy, width, height, angle)| EllipseSpec {
            cx,
            cy,
            width,
            height,
            angle,
        })
        .collect();
    let region_anchors = FIVE_REGION_ANCHORS
        .iter()
        .map(|&(mask, x, y)| {
            (
                RegionCode::new(mask, 5),
                TextAnchor {
                    x,
                    y,
                    ha: HAlign::Center,
                    va: VAlign::Center,
                },
            )
        })
        .collect();
    let name_anchors = FIVE_NAME_ANCHORS
        .iter()
        .map(|&(x, y, ha, va)| NameAnchor { x, y, ha, va })
        .collect();
    VennTemplate {
        groups: 5,
        ellipses,
        region_anchors,
        name_anchors,
    }
});

/// The five-set template: 5 ellipses, 31 region anchors, 5 name anchors.
pub fn five_set() -> &'static VennTemplate {
    &FIVE_SET
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn five_set_covers_every_region_code() {
        let template = five_set();
        assert_eq!(template.groups, 5);
        assert_eq!(template.ellipses.len(), 5);
        assert_eq!(template.name_anchors.len(), 5);
        assert_eq!(template.region_anchors.len(), 31);
        for code in RegionCode::all(5) {
            assert!(
                template.anchor(code).is_some(),
                "missing anchor for {code}"
            );
        }
    }

    #[test]
    fn anchors_stay_inside_the_unit_square() {
        let template = five_set();
        for (code, anchor) in &template.region_anchors {
            assert!(
                (0.0..=1.0).contains(&anchor.x) && (0.0..=1.0).contains(&anchor.y),
                "anchor for {code} is outside the unit square"
            );
        }
        for anchor in &template.name_anchors {
            assert!((0.0..=1.0).contains(&anchor.x) && (0.0..=1.0).contains(&anchor.y));
        }
    }

    #[test]
    fn center_region_sits_near_the_middle() {
        let template = five_set();
        let center = template.anchor(RegionCode::new(0b11111, 5)).unwrap();
        assert!((center.x - 0.5).abs() < 0.05);
        assert!((center.y - 0.5).abs() < 0.05);
    }

    #[test]
    fn ellipses_share_axis_lengths() {
        let template = five_set();
        for spec in &template.ellipses {
            assert_eq!(spec.width, 0.87);
            assert_eq!(spec.height, 0.50);
        }
    }
}
