// File: crates/easel-core/src/chart.rs
// Summary: Chart configuration struct and headless PNG rendering using Skia CPU raster surfaces.

use skia_safe as skia;

use crate::color;
use crate::dataset::{ChartData, ChartKind, Dataset, PointStyle};
use crate::error::{ChartError, Result};
use crate::grid;
use crate::options::{ChartOptions, TitleContext};
use crate::text::TextShaper;
use crate::theme::Theme;
use crate::types::{Insets, HEIGHT, WIDTH};

#[derive(Clone)]
pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    /// Draw title, ticks, and legends. Off for pixel-deterministic output.
    pub draw_labels: bool,
    /// Device pixel ratio: physical surface pixels per layout pixel.
    pub dpr: f32,
    pub theme: Theme,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            draw_labels: true,
            dpr: 1.0,
            theme: Theme::light(),
        }
    }
}

impl RenderOptions {
    pub(crate) fn scale(&self) -> f32 {
        if self.dpr.is_finite() && self.dpr > 0.0 {
            self.dpr
        } else {
            1.0
        }
    }

    pub(crate) fn physical(&self, logical: i32) -> i32 {
        ((logical.max(1) as f32) * self.scale()).round() as i32
    }
}

/// A finished chart configuration: kind, data block, options block. Built
/// once and handed to the engine; the engine never mutates it.
#[derive(Clone, Debug)]
pub struct Chart {
    pub kind: ChartKind,
    pub data: ChartData,
    pub options: ChartOptions,
}

impl Chart {
    pub fn new(kind: ChartKind, data: ChartData) -> Self {
        Self {
            kind,
            data,
            options: ChartOptions::default(),
        }
    }

    pub fn with_options(mut self, options: ChartOptions) -> Self {
        self.options = options;
        self
    }

    /// The title string the engine would draw, running a computed title
    /// against this chart. `None` when absent or hidden.
    pub fn resolved_title(&self) -> Option<String> {
        let title = self.options.title.as_ref()?;
        if !title.display {
            return None;
        }
        let ctx = TitleContext {
            kind: self.kind,
            data: &self.data,
        };
        Some(title.text.resolve(&ctx))
    }

    /// Render the chart to a PNG at `output_png_path` using a CPU raster surface.
    pub fn render_to_png(
        &self,
        opts: &RenderOptions,
        output_png_path: impl AsRef<std::path::Path>,
    ) -> Result<()> {
        let data = self.render_to_png_bytes(opts)?;
        if let Some(parent) = output_png_path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_png_path, data)?;
        Ok(())
    }

    /// Render and return the encoded PNG bytes.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let mut surface = new_raster_surface(opts.physical(opts.width), opts.physical(opts.height))?;
        let canvas = surface.canvas();
        canvas.scale((opts.scale(), opts.scale()));
        self.draw(canvas, opts.width, opts.height, opts)?;
        encode_surface_png(&mut surface)
    }

    /// Render and return raw RGBA8 pixels as `(pixels, width, height, stride)`.
    /// Dimensions are physical, i.e. scaled by the device pixel ratio.
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, i32, i32, usize)> {
        let (pw, ph) = (opts.physical(opts.width), opts.physical(opts.height));
        let mut surface = new_raster_surface(pw, ph)?;
        let canvas = surface.canvas();
        canvas.scale((opts.scale(), opts.scale()));
        self.draw(canvas, opts.width, opts.height, opts)?;
        let image = surface.image_snapshot();
        let info = skia::ImageInfo::new(
            (pw, ph),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let stride = pw as usize * 4;
        let mut pixels = vec![0u8; stride * ph as usize];
        if !image.read_pixels(
            &info,
            &mut pixels,
            stride,
            (0, 0),
            skia::image::CachingHint::Disallow,
        ) {
            return Err(ChartError::Surface {
                width: pw,
                height: ph,
            });
        }
        Ok((pixels, pw, ph, stride))
    }

    /// One-pass draw into `canvas`. `width` x `height` is the viewport the
    /// chart lays out in; the mount surface size when responsive.
    pub(crate) fn draw(
        &self,
        canvas: &skia::Canvas,
        width: i32,
        height: i32,
        opts: &RenderOptions,
    ) -> Result<()> {
        let theme = &opts.theme;
        canvas.clear(theme.background);

        tracing::debug!(kind = self.kind.as_str(), width, height, "drawing chart");
        if let Some(primary) = self.data.primary() {
            let labels = self.data.labels.len();
            let values = primary.values.len();
            if labels != values {
                tracing::warn!(labels, values, "label and value counts differ; axis spans the longer");
            }
        }

        let shaper = if opts.draw_labels { Some(TextShaper::new()) } else { None };

        if let Some(s) = shaper.as_ref() {
            if let Some(text) = self.resolved_title() {
                draw_title(canvas, s, &text, width, theme);
            }
        }

        match self.kind {
            ChartKind::Line | ChartKind::Bar => {
                self.draw_cartesian(canvas, width, height, opts, shaper.as_ref())
            }
            ChartKind::Pie => self.draw_pie(canvas, width, height, opts, shaper.as_ref()),
        }
    }

    fn draw_cartesian(
        &self,
        canvas: &skia::Canvas,
        width: i32,
        height: i32,
        opts: &RenderOptions,
        shaper: Option<&TextShaper>,
    ) -> Result<()> {
        let theme = &opts.theme;
        let l = opts.insets.left;
        let t = opts.insets.top;
        let r = (width - opts.insets.right).max(l + 1);
        let b = (height - opts.insets.bottom).max(t + 1);

        let categories = self.data.category_count().max(1);
        let (vmin, vmax) = grid::value_range(
            self.data.datasets.iter().flat_map(|d| d.values.iter().copied()),
        );
        let tick_values = grid::ticks(vmin, vmax, 5);

        let slot = (r - l) as f32 / categories as f32;
        let vspan = (vmax - vmin).max(1e-9);
        let xs: Vec<f32> = (0..categories)
            .map(|i| l as f32 + (i as f32 + 0.5) * slot)
            .collect();
        let ys: Vec<f32> = tick_values
            .iter()
            .map(|&v| b as f32 - ((v - vmin) / vspan) as f32 * (b - t) as f32)
            .collect();

        draw_grid(canvas, l, t, r, b, &xs, &ys, theme);
        draw_axes(canvas, l, t, r, b, theme);

        if let Some(s) = shaper {
            draw_value_ticks(canvas, s, l, &tick_values, &ys, theme);
            draw_category_labels(canvas, s, &self.data, &xs, b, theme);
        }

        let group_count = self.data.datasets.len();
        for (k, dataset) in self.data.datasets.iter().enumerate() {
            if self.kind == ChartKind::Bar {
                draw_bar_series(canvas, l, t, r, b, dataset, categories, (k, group_count), vmin, vmax, theme)?;
            } else {
                draw_line_series(canvas, l, t, r, b, dataset, categories, vmin, vmax, theme)?;
            }
        }
        Ok(())
    }

    fn draw_pie(
        &self,
        canvas: &skia::Canvas,
        width: i32,
        height: i32,
        opts: &RenderOptions,
        shaper: Option<&TextShaper>,
    ) -> Result<()> {
        let theme = &opts.theme;
        let dataset = match self.data.primary() {
            Some(d) => d,
            None => return Ok(()),
        };

        let l = opts.insets.left;
        let mut t = opts.insets.top;
        let r = (width - opts.insets.right).max(l + 1);
        let b = (height - opts.insets.bottom).max(t + 1);

        if let Some(s) = shaper {
            draw_pie_legend(canvas, s, &self.data, dataset, width, t as f32 + 4.0, theme)?;
            t += 24; // legend strip
        }

        let cx = (l + r) as f32 * 0.5;
        let cy = (t + b) as f32 * 0.5;
        let radius = ((r - l).min(b - t) as f32 * 0.5 - 8.0).max(4.0);

        let total: f64 = dataset
            .values
            .iter()
            .copied()
            .filter(|v| v.is_finite() && *v > 0.0)
            .sum();
        if total <= 0.0 {
            // nothing to slice; leave the surface blank
            return Ok(());
        }

        let oval = skia::Rect::from_ltrb(cx - radius, cy - radius, cx + radius, cy + radius);
        let mut fill = skia::Paint::default();
        fill.set_anti_alias(true);
        fill.set_style(skia::paint::Style::Fill);

        // Slices start at 12 o'clock and sweep clockwise in data order.
        let mut start = -90.0f32;
        for (i, &v) in dataset.values.iter().enumerate() {
            if !v.is_finite() || v <= 0.0 {
                continue;
            }
            let sweep = (v / total * 360.0) as f32;
            fill.set_color(color::resolve_at(&dataset.background_colors, i, theme.series)?);
            canvas.draw_arc(oval, start, sweep, true, &fill);
            start += sweep;
        }
        Ok(())
    }
}

// ---- helpers ----------------------------------------------------------------

pub(crate) fn new_raster_surface(width: i32, height: i32) -> Result<skia::Surface> {
    skia::surfaces::raster_n32_premul((width.max(1), height.max(1)))
        .ok_or(ChartError::Surface { width, height })
}

pub(crate) fn encode_surface_png(surface: &mut skia::Surface) -> Result<Vec<u8>> {
    let image = surface.image_snapshot();
    #[allow(deprecated)]
    let data = image
        .encode_to_data(skia::EncodedImageFormat::PNG)
        .ok_or(ChartError::PngEncode)?;
    Ok(data.as_bytes().to_vec())
}

fn draw_grid(
    canvas: &skia::Canvas,
    l: i32,
    t: i32,
    r: i32,
    b: i32,
    xs: &[f32],
    ys: &[f32],
    theme: &Theme,
) {
    let mut paint = skia::Paint::default();
    paint.set_color(theme.grid);
    paint.set_anti_alias(true);
    paint.set_stroke_width(1.0);

    // verticals at category centers
    for &x in xs {
        canvas.draw_line((x, t as f32), (x, b as f32), &paint);
    }
    // horizontals at value ticks
    for &y in ys {
        canvas.draw_line((l as f32, y), (r as f32, y), &paint);
    }
}

fn draw_axes(canvas: &skia::Canvas, l: i32, t: i32, r: i32, b: i32, theme: &Theme) {
    let mut axis_paint = skia::Paint::default();
    axis_paint.set_color(theme.axis_line);
    axis_paint.set_anti_alias(true);
    axis_paint.set_stroke_width(1.5);

    canvas.draw_line((l as f32, b as f32), (r as f32, b as f32), &axis_paint);
    canvas.draw_line((l as f32, t as f32), (l as f32, b as f32), &axis_paint);
}

fn draw_title(canvas: &skia::Canvas, shaper: &TextShaper, text: &str, width: i32, theme: &Theme) {
    if text.is_empty() {
        return;
    }
    shaper.draw_centered(canvas, text, width as f32 * 0.5, 26.0, 16.0, theme.title, false);
}

fn draw_value_ticks(
    canvas: &skia::Canvas,
    shaper: &TextShaper,
    l: i32,
    ticks: &[f64],
    ys: &[f32],
    theme: &Theme,
) {
    for (&v, &y) in ticks.iter().zip(ys) {
        let text = format_tick(v);
        let w = shaper.measure_width(&text, 12.0, true);
        shaper.draw_left(canvas, &text, l as f32 - w - 8.0, y + 4.0, 12.0, theme.tick, true);
    }
}

fn format_tick(v: f64) -> String {
    if v == v.trunc() && v.abs() < 1e15 {
        format!("{}", v as i64)
    } else {
        format!("{:.2}", v)
    }
}

fn draw_category_labels(
    canvas: &skia::Canvas,
    shaper: &TextShaper,
    data: &ChartData,
    xs: &[f32],
    b: i32,
    theme: &Theme,
) {
    for (i, &x) in xs.iter().enumerate() {
        let label = data.label_at(i);
        if label.is_empty() {
            continue;
        }
        shaper.draw_centered(canvas, label, x, b as f32 + 18.0, 12.0, theme.axis_label, false);
    }
}

fn draw_line_series(
    canvas: &skia::Canvas,
    l: i32,
    t: i32,
    r: i32,
    b: i32,
    dataset: &Dataset,
    categories: usize,
    vmin: f64,
    vmax: f64,
    theme: &Theme,
) -> Result<()> {
    if dataset.values.is_empty() {
        return Ok(());
    }

    let slot = (r - l) as f32 / categories.max(1) as f32;
    let cx = |i: usize| -> f32 { l as f32 + (i as f32 + 0.5) * slot };
    let vspan = (vmax - vmin).max(1e-9);
    let sy = |v: f64| -> f32 { b as f32 - ((v - vmin) / vspan) as f32 * (b - t) as f32 };

    // Polyline through the finite points; a non-finite value breaks the line.
    let mut path = skia::Path::new();
    let mut started = false;
    for (i, &v) in dataset.values.iter().enumerate() {
        if !v.is_finite() {
            started = false;
            continue;
        }
        if started {
            path.line_to((cx(i), sy(v)));
        } else {
            path.move_to((cx(i), sy(v)));
            started = true;
        }
    }

    let mut stroke = skia::Paint::default();
    stroke.set_anti_alias(true);
    stroke.set_style(skia::paint::Style::Stroke);
    stroke.set_stroke_width(2.0);
    stroke.set_color(theme.series);
    canvas.draw_path(&path, &stroke);

    let radius = dataset.point_radius.max(0.0);
    if radius > 0.0 {
        let mut fill = skia::Paint::default();
        fill.set_anti_alias(true);
        fill.set_style(skia::paint::Style::Fill);
        for (i, &v) in dataset.values.iter().enumerate() {
            if !v.is_finite() {
                continue;
            }
            fill.set_color(color::resolve_at(&dataset.background_colors, i, theme.series)?);
            draw_marker(canvas, dataset.point_style, cx(i), sy(v), radius, &fill);
        }
    }
    Ok(())
}

fn draw_marker(
    canvas: &skia::Canvas,
    style: PointStyle,
    x: f32,
    y: f32,
    radius: f32,
    fill: &skia::Paint,
) {
    match style {
        PointStyle::Circle => {
            canvas.draw_circle((x, y), radius, fill);
        }
        PointStyle::Rect => {
            let rect = skia::Rect::from_ltrb(x - radius, y - radius, x + radius, y + radius);
            canvas.draw_rect(rect, fill);
        }
        PointStyle::Triangle => {
            let mut path = skia::Path::new();
            path.move_to((x, y - radius));
            path.line_to((x + radius, y + radius));
            path.line_to((x - radius, y + radius));
            path.close();
            canvas.draw_path(&path, fill);
        }
        PointStyle::Cross => {
            let mut stroke = fill.clone();
            stroke.set_style(skia::paint::Style::Stroke);
            stroke.set_stroke_width((radius * 0.4).max(1.0));
            canvas.draw_line((x - radius, y), (x + radius, y), &stroke);
            canvas.draw_line((x, y - radius), (x, y + radius), &stroke);
        }
    }
}

fn draw_bar_series(
    canvas: &skia::Canvas,
    l: i32,
    t: i32,
    r: i32,
    b: i32,
    dataset: &Dataset,
    categories: usize,
    group: (usize, usize),
    vmin: f64,
    vmax: f64,
    theme: &Theme,
) -> Result<()> {
    if dataset.values.is_empty() {
        return Ok(());
    }

    let slot = (r - l) as f32 / categories.max(1) as f32;
    let vspan = (vmax - vmin).max(1e-9);
    let sy = |v: f64| -> f32 { b as f32 - ((v - vmin) / vspan) as f32 * (b - t) as f32 };

    let (k, n) = group;
    // Bars fill 60% of the category slot, split between grouped datasets.
    let band = slot * 0.6;
    let bar_w = band / n.max(1) as f32;
    let zero = sy(0.0f64.clamp(vmin, vmax));

    let mut fill = skia::Paint::default();
    fill.set_anti_alias(true);
    fill.set_style(skia::paint::Style::Fill);

    for (i, &v) in dataset.values.iter().enumerate() {
        if !v.is_finite() {
            continue;
        }
        let center = l as f32 + (i as f32 + 0.5) * slot;
        let x0 = center - band * 0.5 + k as f32 * bar_w;
        let w = (bar_w - 1.0).max(1.0);
        let y = sy(v);
        let (top, bot) = if y <= zero { (y, zero) } else { (zero, y) };
        fill.set_color(color::resolve_at(&dataset.background_colors, i, theme.series)?);
        let rect = skia::Rect::from_ltrb(x0, top, x0 + w, bot.max(top + 1.0));
        canvas.draw_rect(rect, &fill);
    }
    Ok(())
}

fn draw_pie_legend(
    canvas: &skia::Canvas,
    shaper: &TextShaper,
    data: &ChartData,
    dataset: &Dataset,
    width: i32,
    y: f32,
    theme: &Theme,
) -> Result<()> {
    let entries = data.category_count();
    if entries == 0 {
        return Ok(());
    }
    let size = 12.0;
    let swatch = 12.0f32;
    let pad = 6.0f32;
    let gap = 18.0f32;

    let widths: Vec<f32> = (0..entries)
        .map(|i| swatch + pad + shaper.measure_width(data.label_at(i), size, false))
        .collect();
    let total: f32 = widths.iter().sum::<f32>() + gap * (entries - 1) as f32;
    let mut x = (width as f32 - total) * 0.5;

    let mut fill = skia::Paint::default();
    fill.set_anti_alias(true);
    fill.set_style(skia::paint::Style::Fill);

    for (i, w) in widths.iter().enumerate() {
        fill.set_color(color::resolve_at(&dataset.background_colors, i, theme.series)?);
        canvas.draw_rect(skia::Rect::from_xywh(x, y, swatch, swatch), &fill);
        shaper.draw_left(
            canvas,
            data.label_at(i),
            x + swatch + pad,
            y + swatch - 1.0,
            size,
            theme.legend_label,
            false,
        );
        x += w + gap;
    }
    Ok(())
}
