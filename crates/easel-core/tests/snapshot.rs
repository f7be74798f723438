// File: crates/easel-core/tests/snapshot.rs
// Purpose: Golden snapshot harness with bless flow for each chart kind.
// Behavior:
// - Renders a deterministic small chart to PNG bytes.
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot file.
// - Else, if snapshot exists, compares decoded pixels for exact match.
// - Else, logs a note and returns (skips) without failing to ease first run.

use easel_core::{Chart, ChartData, ChartKind, Dataset, PointStyle, RenderOptions};

fn bless_mode() -> bool {
    std::env::var("UPDATE_SNAPSHOTS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true")).unwrap_or(false)
}

fn write_or_compare(path: &std::path::Path, bytes: &[u8]) {
    let update = bless_mode();
    if update {
        if let Some(parent) = path.parent() { std::fs::create_dir_all(parent).ok(); }
        std::fs::write(path, bytes).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", path.display(), bytes.len());
        return;
    }
    if path.exists() {
        let want = std::fs::read(path).expect("read snapshot");
        // Compare decoded pixel buffers to avoid PNG encoder variance
        let got_img = image::load_from_memory(bytes).expect("decode got").to_rgba8();
        let want_img = image::load_from_memory(&want).expect("decode want").to_rgba8();
        assert_eq!(got_img.as_raw(), want_img.as_raw(), "Pixels differ: {}", path.display());
    } else {
        eprintln!("[snapshot] Missing {}; set UPDATE_SNAPSHOTS=1 to bless.", path.display());
    }
}

fn render_to_bytes(kind: ChartKind) -> Vec<u8> {
    let data = ChartData::new(
        ["Day 1", "Day 2", "Day 3", "Day 4", "Day 5", "Day 6"],
        vec![Dataset::new("Dataset", vec![300.0, 50.0, 100.0])
            .with_background_colors(["rgb(255, 99, 132)", "rgb(54, 162, 235)", "rgb(255, 205, 86)"])
            .with_point_style(PointStyle::Circle)
            .with_point_radius(10.0)],
    );
    let chart = Chart::new(kind, data);

    let mut opts = RenderOptions::default();
    opts.width = 320;
    opts.height = 240;
    opts.draw_labels = false; // avoid text nondeterminism across platforms
    chart.render_to_png_bytes(&opts).expect("render bytes")
}

fn snapshot_path(name: &str) -> std::path::PathBuf {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__").join(name)
}

#[test]
fn golden_line_chart() {
    let bytes = render_to_bytes(ChartKind::Line);
    write_or_compare(&snapshot_path("line_chart.png"), &bytes);
}

#[test]
fn golden_bar_chart() {
    let bytes = render_to_bytes(ChartKind::Bar);
    write_or_compare(&snapshot_path("bar_chart.png"), &bytes);
}

#[test]
fn golden_pie_chart() {
    let bytes = render_to_bytes(ChartKind::Pie);
    write_or_compare(&snapshot_path("pie_chart.png"), &bytes);
}
