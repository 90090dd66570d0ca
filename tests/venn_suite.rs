use std::collections::HashSet;

use vennplot::{
    DEFAULT_NAMES, LabelStyle, Theme, VennConfig, VennError, compute_labels, compute_venn_layout,
    five_set, load_config, render_svg, render_to_path,
};

fn assert_valid_svg(svg: &str, what: &str) {
    assert!(svg.contains("<svg"), "{what}: missing <svg tag");
    assert!(svg.contains("</svg>"), "{what}: missing </svg tag");
}

fn range_groups() -> Vec<HashSet<u32>> {
    (0..5u32).map(|i| (i * 3..i * 3 + 5).collect()).collect()
}

// Item k (1..=31) goes into group i exactly when bit i (most significant
// first) of k's five-bit pattern is set, so every overlap region holds
// exactly one item.
fn bitmask_groups() -> Vec<HashSet<u32>> {
    (0..5u32)
        .map(|i| (1u32..32).filter(|k| k >> (4 - i) & 1 == 1).collect())
        .collect()
}

#[test]
fn counts_for_three_overlapping_ranges() {
    let groups: Vec<HashSet<u32>> = vec![(0..10).collect(), (5..15).collect(), (3..8).collect()];
    let labels = compute_labels(&groups, LabelStyle::NUMBER).unwrap();
    let expected = [
        ("001", "0"),
        ("010", "5"),
        ("011", "0"),
        ("100", "3"),
        ("101", "2"),
        ("110", "2"),
        ("111", "3"),
    ];
    assert_eq!(labels.len(), expected.len());
    for (code, text) in expected {
        let parsed: vennplot::RegionCode = code.parse().unwrap();
        assert_eq!(labels[&parsed], text, "label for region {code}");
    }
}

#[test]
fn five_group_pipeline_labels_every_region() {
    let labels = compute_labels(&bitmask_groups(), LabelStyle::NUMBER).unwrap();
    assert_eq!(labels.len(), 31);
    assert!(labels.values().all(|text| text == "1"));
    // Region k holds exactly item k, so every mask shows up once.
    assert!(labels.keys().map(|code| code.mask()).eq(1u32..=31));

    let layout = compute_venn_layout(
        &labels,
        &DEFAULT_NAMES,
        five_set(),
        &Theme::classic(),
        &VennConfig::default(),
    )
    .unwrap();
    let svg = render_svg(&layout, &Theme::classic());
    assert_valid_svg(&svg, "bitmask groups");
    assert_eq!(svg.matches("<ellipse").count(), 5);
    // 31 region labels + 5 group names + 5 legend entries.
    assert_eq!(svg.matches("<text").count(), 41);
}

#[test]
fn wrong_name_count_fails_before_writing() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("venn.svg");
    let err = render_to_path(
        &range_groups(),
        &["A", "B", "C", "D"],
        LabelStyle::default(),
        &Theme::classic(),
        &VennConfig::default(),
        &out,
    )
    .unwrap_err();
    let err = err.downcast::<VennError>().unwrap();
    assert!(matches!(err, VennError::Configuration(_)));
    assert!(!out.exists(), "artifact must not exist after a failed render");
}

#[test]
fn percent_with_empty_groups_fails_before_writing() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("venn.svg");
    let groups: Vec<HashSet<u32>> = vec![HashSet::new(); 5];
    let err = render_to_path(
        &groups,
        &DEFAULT_NAMES,
        LabelStyle::PERCENT,
        &Theme::classic(),
        &VennConfig::default(),
        &out,
    )
    .unwrap_err();
    let err = err.downcast::<VennError>().unwrap();
    assert!(matches!(err, VennError::DivisionByZero(_)));
    assert!(!out.exists());
}

#[test]
fn svg_artifact_round_trips_through_disk() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("venn.svg");
    let svg = render_to_path(
        &range_groups(),
        &DEFAULT_NAMES,
        LabelStyle::NUMBER.with_percent(),
        &Theme::classic(),
        &VennConfig::default(),
        &out,
    )
    .unwrap();
    assert_valid_svg(&svg, "range groups");
    let written = std::fs::read_to_string(&out).unwrap();
    assert_eq!(written, svg);
}

#[test]
fn rendering_twice_is_byte_identical() {
    let labels = compute_labels(&range_groups(), LabelStyle::NUMBER).unwrap();
    let theme = Theme::classic();
    let config = VennConfig::default();
    let first = render_svg(
        &compute_venn_layout(&labels, &DEFAULT_NAMES, five_set(), &theme, &config).unwrap(),
        &theme,
    );
    let second = render_svg(
        &compute_venn_layout(&labels, &DEFAULT_NAMES, five_set(), &theme, &config).unwrap(),
        &theme,
    );
    assert_eq!(first, second);
}

#[test]
fn unsupported_extension_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("venn.gif");
    let err = render_to_path(
        &range_groups(),
        &DEFAULT_NAMES,
        LabelStyle::default(),
        &Theme::classic(),
        &VennConfig::default(),
        &out,
    )
    .unwrap_err();
    assert!(err.to_string().contains("extension"));
    assert!(!out.exists());
}

#[test]
fn config_file_flows_into_the_render() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("venn.json");
    std::fs::write(
        &config_path,
        r##"{"themeVariables": {"background": "#123456"}, "venn": {"dpi": 48.0}}"##,
    )
    .unwrap();

    let config = load_config(Some(&config_path)).unwrap();
    assert_eq!(config.venn.dpi, 48.0);

    let labels = compute_labels(&range_groups(), LabelStyle::NUMBER).unwrap();
    let layout =
        compute_venn_layout(&labels, &DEFAULT_NAMES, five_set(), &config.theme, &config.venn).unwrap();
    assert_eq!(layout.height, 13.0 * 48.0);

    let svg = render_svg(&layout, &config.theme);
    assert!(svg.contains("#123456"));
}

#[test]
fn layout_dump_parses_back_as_json() {
    let labels = compute_labels(&range_groups(), LabelStyle::NUMBER).unwrap();
    let layout = compute_venn_layout(
        &labels,
        &DEFAULT_NAMES,
        five_set(),
        &Theme::classic(),
        &VennConfig::default(),
    )
    .unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("layout.json");
    vennplot::layout_dump::write_layout_dump(&path, &layout).unwrap();

    let value: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(value["ellipses"].as_array().unwrap().len(), 5);
    assert_eq!(value["region_labels"].as_array().unwrap().len(), 31);
    assert_eq!(value["group_names"].as_array().unwrap().len(), 5);
    assert_eq!(value["region_labels"][30]["code"], "11111");
}
