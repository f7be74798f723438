use anyhow::Result;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use easel_core::{Chart, ChartData, ChartKind, Dataset, RenderOptions};

fn build_line_chart(n: usize) -> Chart {
    let labels: Vec<String> = (0..n).map(|i| format!("c{i}")).collect();
    let values: Vec<f64> = (0..n)
        .map(|i| (i as f64 * 0.01).sin() * 10.0 + (i as f64 * 0.0001))
        .collect();
    let dataset = Dataset::new("bench", values)
        .with_background_colors(["rgb(255, 99, 132)", "rgb(54, 162, 235)", "rgb(255, 205, 86)"])
        .with_point_radius(2.0);
    Chart::new(ChartKind::Line, ChartData::new(labels, vec![dataset]))
}

fn build_pie_chart(n: usize) -> Chart {
    let labels: Vec<String> = (0..n).map(|i| format!("slice {i}")).collect();
    let values: Vec<f64> = (0..n).map(|i| 1.0 + (i % 7) as f64).collect();
    let dataset = Dataset::new("bench", values)
        .with_background_colors(["rgb(255, 99, 132)", "rgb(54, 162, 235)", "rgb(255, 205, 86)"]);
    Chart::new(ChartKind::Pie, ChartData::new(labels, vec![dataset]))
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_png_bytes");
    for &n in &[1_000usize, 10_000usize] {
        group.bench_function(format!("line_{n}"), |b| {
            let ch = build_line_chart(n);
            let mut opts = RenderOptions::default();
            opts.width = 800;
            opts.height = 500;
            opts.draw_labels = false;
            b.iter(|| -> Result<()> {
                let bytes = ch.render_to_png_bytes(&opts)?;
                black_box(bytes);
                Ok(())
            });
        });
    }
    group.bench_function("pie_64", |b| {
        let ch = build_pie_chart(64);
        let mut opts = RenderOptions::default();
        opts.width = 480;
        opts.height = 480;
        opts.draw_labels = false;
        b.iter(|| -> Result<()> {
            let bytes = ch.render_to_png_bytes(&opts)?;
            black_box(bytes);
            Ok(())
        });
    });
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
