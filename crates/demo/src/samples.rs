// File: crates/demo/src/samples.rs
// Summary: The sample dashboard configurations: one line, one bar, and a pie used twice.

use easel_core::{Chart, ChartData, ChartKind, ChartOptions, Dataset, Easel, PointStyle, Title};

/// Shared data block for the cartesian charts. Six day labels over a
/// three-value dataset; the axis tolerates the extra labels.
fn day_series() -> ChartData {
    ChartData::new(
        ["Day 1", "Day 2", "Day 3", "Day 4", "Day 5", "Day 6"],
        vec![Dataset::new("Dataset", vec![300.0, 50.0, 100.0])
            .with_background_colors([
                "rgb(255, 99, 132)",
                "rgb(54, 162, 235)",
                "rgb(255, 205, 86)",
            ])
            .with_point_style(PointStyle::Circle)
            .with_point_radius(10.0)
            .with_point_hover_radius(15.0)],
    )
}

/// Options shared by the line and bar charts: responsive, with a title the
/// engine computes from the first dataset's point style.
fn point_style_options() -> ChartOptions {
    ChartOptions::default().with_title(Title::computed(|ctx| {
        let style = ctx.data.primary().map(|d| d.point_style).unwrap_or_default();
        format!("Point Style: {}", style)
    }))
}

pub fn point_style_line() -> Chart {
    Chart::new(ChartKind::Line, day_series()).with_options(point_style_options())
}

pub fn io_perf_bar() -> Chart {
    Chart::new(ChartKind::Bar, day_series()).with_options(point_style_options())
}

/// The pie configuration the dashboard shows twice, once per mount.
pub fn first_pie() -> Chart {
    let data = ChartData::new(
        ["Red", "Blue", "Yellow"],
        vec![Dataset::new("My First Dataset", vec![300.0, 50.0, 100.0])
            .with_background_colors([
                "rgb(255, 99, 132)",
                "rgb(54, 162, 235)",
                "rgb(255, 205, 86)",
            ])
            .with_hover_offset(4.0)],
    );
    Chart::new(ChartKind::Pie, data)
}

/// Mount the whole dashboard: the cartesian charts at `width` x `height`,
/// the two pies on square surfaces.
pub fn mount_dashboard(easel: &mut Easel, width: i32, height: i32) -> easel_core::Result<()> {
    easel.add_surface("myPoint1", width, height)?;
    easel.add_surface("ioPerf", width, height)?;
    easel.add_surface("myPie1", 480, 480)?;
    easel.add_surface("myPie2", 480, 480)?;

    easel.register("myPoint1", point_style_line())?;
    easel.register("ioPerf", io_perf_bar())?;
    easel.register("myPie1", first_pie())?;
    easel.register("myPie2", first_pie())?;
    Ok(())
}
