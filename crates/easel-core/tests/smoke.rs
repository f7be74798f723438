// File: crates/easel-core/tests/smoke.rs
// Purpose: Basic end-to-end render smoke test writing a PNG per chart kind.

use easel_core::{Chart, ChartData, ChartKind, Dataset, PointStyle, RenderOptions};

fn sample_data() -> ChartData {
    ChartData::new(
        ["Day 1", "Day 2", "Day 3", "Day 4", "Day 5", "Day 6"],
        vec![Dataset::new("Dataset", vec![300.0, 50.0, 100.0])
            .with_background_colors(["rgb(255, 99, 132)", "rgb(54, 162, 235)", "rgb(255, 205, 86)"])
            .with_point_style(PointStyle::Circle)
            .with_point_radius(10.0)],
    )
}

#[test]
fn render_smoke_png() {
    let chart = Chart::new(ChartKind::Line, sample_data());

    let opts = RenderOptions::default();
    let out = std::path::PathBuf::from("target/test_out/smoke.png");
    std::fs::create_dir_all(out.parent().unwrap()).unwrap();

    chart.render_to_png(&opts, &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    // Also verify in-memory API works
    let bytes = chart.render_to_png_bytes(&opts).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
}

#[test]
fn render_smoke_all_kinds() {
    let opts = RenderOptions::default();
    for kind in [ChartKind::Line, ChartKind::Bar, ChartKind::Pie] {
        let chart = Chart::new(kind, sample_data());
        let bytes = chart.render_to_png_bytes(&opts).expect("render bytes");
        assert!(
            bytes.starts_with(&[137, 80, 78, 71]),
            "{} should render a PNG",
            kind
        );
    }
}

#[test]
fn render_smoke_empty_data() {
    // No datasets at all still renders a blank plot without failing.
    let chart = Chart::new(ChartKind::Pie, ChartData::default());
    let opts = RenderOptions::default();
    let bytes = chart.render_to_png_bytes(&opts).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]));
}
