// File: crates/easel-core/tests/config.rs
// Purpose: Configuration semantics: title callbacks, color tokens, data block tolerances.

use easel_core::color;
use easel_core::{Chart, ChartData, ChartKind, ChartOptions, Dataset, PointStyle, Title};

fn line_config() -> Chart {
    let data = ChartData::new(
        ["Day 1", "Day 2", "Day 3", "Day 4", "Day 5", "Day 6"],
        vec![Dataset::new("Dataset", vec![300.0, 50.0, 100.0])
            .with_background_colors(["rgb(255, 99, 132)", "rgb(54, 162, 235)", "rgb(255, 205, 86)"])
            .with_point_style(PointStyle::Circle)
            .with_point_radius(10.0)
            .with_point_hover_radius(15.0)],
    );
    Chart::new(ChartKind::Line, data).with_options(
        ChartOptions::default().with_title(Title::computed(|ctx| {
            let style = ctx
                .data
                .primary()
                .map(|d| d.point_style)
                .unwrap_or_default();
            format!("Point Style: {}", style)
        })),
    )
}

#[test]
fn computed_title_sees_first_dataset() {
    let chart = line_config();
    assert_eq!(chart.resolved_title().as_deref(), Some("Point Style: circle"));
}

#[test]
fn computed_title_follows_data_changes() {
    // The callback runs at resolve time, not at build time.
    let mut chart = line_config();
    chart.data.datasets[0].point_style = PointStyle::Triangle;
    assert_eq!(chart.resolved_title().as_deref(), Some("Point Style: triangle"));
}

#[test]
fn static_title_resolves_verbatim() {
    let chart = Chart::new(ChartKind::Bar, ChartData::default())
        .with_options(ChartOptions::default().with_title(Title::fixed("IO Performance")));
    assert_eq!(chart.resolved_title().as_deref(), Some("IO Performance"));
}

#[test]
fn hidden_title_resolves_to_none() {
    let chart = Chart::new(ChartKind::Bar, ChartData::default())
        .with_options(ChartOptions::default().with_title(Title::fixed("IO").hidden()));
    assert_eq!(chart.resolved_title(), None);
}

#[test]
fn label_value_mismatch_spans_longer_side() {
    let chart = line_config();
    assert_eq!(chart.data.labels.len(), 6);
    assert_eq!(chart.data.primary().unwrap().values.len(), 3);
    assert_eq!(chart.data.category_count(), 6);
    assert_eq!(chart.data.label_at(5), "Day 6");
    assert_eq!(chart.data.label_at(6), "");
}

#[test]
fn hover_attributes_ride_along() {
    let dataset = Dataset::new("My First Dataset", vec![300.0, 50.0, 100.0])
        .with_hover_offset(4.0);
    assert_eq!(dataset.hover_offset, 4.0);
    assert_eq!(dataset.point_hover_radius, 4.0); // default
}

#[test]
fn color_tokens_parse_as_rgb_triples() {
    let rgb = color::parse("rgb(255, 99, 132)").expect("valid token");
    assert_eq!((rgb.r, rgb.g, rgb.b), (255, 99, 132));

    let hex = color::parse("#ffcd56").expect("valid hex");
    assert_eq!((hex.r, hex.g, hex.b), (0xff, 0xcd, 0x56));

    assert!(color::parse("rgb(300, 0, 0)").is_err());
    assert!(color::parse("rgb(1, 2)").is_err());
    assert!(color::parse("rgb(1, 2, 3, 4)").is_err());
    assert!(color::parse("#12345").is_err());
    assert!(color::parse("chartreuse").is_err());
}

#[test]
fn short_color_lists_cycle() {
    let tokens: Vec<String> = vec!["rgb(1, 2, 3)".into(), "rgb(4, 5, 6)".into()];
    assert_eq!(color::cycle(&tokens, 0), Some("rgb(1, 2, 3)"));
    assert_eq!(color::cycle(&tokens, 3), Some("rgb(4, 5, 6)"));
    assert_eq!(color::cycle(&[], 0), None);
}
