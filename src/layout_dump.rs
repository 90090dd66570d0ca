use crate::layout::VennLayout;
use serde::Serialize;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

#[derive(Debug, Serialize)]
pub struct LayoutDump {
    pub width: f32,
    pub height: f32,
    pub font_size: f32,
    pub ellipses: Vec<EllipseDump>,
    pub region_labels: Vec<RegionLabelDump>,
    pub group_names: Vec<GroupNameDump>,
    pub legend: LegendDump,
}

#[derive(Debug, Serialize)]
pub struct EllipseDump {
    pub cx: f32,
    pub cy: f32,
    pub rx: f32,
    pub ry: f32,
    pub rotation: f32,
    pub color: String,
}

#[derive(Debug, Serialize)]
pub struct RegionLabelDump {
    pub code: String,
    pub x: f32,
    pub y: f32,
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct GroupNameDump {
    pub name: String,
    pub x: f32,
    pub y: f32,
    pub color: String,
}

#[derive(Debug, Serialize)]
pub struct LegendDump {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub entries: Vec<LegendEntryDump>,
}

#[derive(Debug, Serialize)]
pub struct LegendEntryDump {
    pub name: String,
    pub color: String,
    pub swatch_x: f32,
    pub swatch_y: f32,
}

impl LayoutDump {
    pub fn from_layout(layout: &VennLayout) -> Self {
        let ellipses = layout
            .ellipses
            .iter()
            .map(|ellipse| EllipseDump {
                cx: ellipse.cx,
                cy: ellipse.cy,
                rx: ellipse.rx,
                ry: ellipse.ry,
                rotation: ellipse.rotation,
                color: ellipse.color.clone(),
            })
            .collect();

        let region_labels = layout
            .region_labels
            .iter()
            .map(|label| RegionLabelDump {
                code: label.code.to_string(),
                x: label.x,
                y: label.y,
                text: label.text.clone(),
            })
            .collect();

        let group_names = layout
            .group_names
            .iter()
            .map(|name| GroupNameDump {
                name: name.name.clone(),
                x: name.x,
                y: name.y,
                color: name.color.clone(),
            })
            .collect();

        let entries = layout
            .legend
            .entries
            .iter()
            .map(|entry| LegendEntryDump {
                name: entry.name.clone(),
                color: entry.color.clone(),
                swatch_x: entry.swatch_x,
                swatch_y: entry.swatch_y,
            })
            .collect();

        LayoutDump {
            width: layout.width,
            height: layout.height,
            font_size: layout.font_size,
            ellipses,
            region_labels,
            group_names,
            legend: LegendDump {
                x: layout.legend.x,
                y: layout.legend.y,
                width: layout.legend.width,
                height: layout.legend.height,
                entries,
            },
        }
    }
}

pub fn write_layout_dump(path: &Path, layout: &VennLayout) -> anyhow::Result<()> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    let dump = LayoutDump::from_layout(layout);
    serde_json::to_writer_pretty(writer, &dump)?;
    Ok(())
}
