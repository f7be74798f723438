// File: crates/easel-core/src/dataset.rs
// Summary: Chart kinds, datasets, and the data block of a chart configuration.

use std::fmt;

/// The chart kinds the engine knows how to draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChartKind {
    Line,
    Bar,
    Pie,
}

impl ChartKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChartKind::Line => "line",
            ChartKind::Bar => "bar",
            ChartKind::Pie => "pie",
        }
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Marker shape drawn at line-chart data points.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PointStyle {
    #[default]
    Circle,
    Rect,
    Triangle,
    Cross,
}

impl PointStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            PointStyle::Circle => "circle",
            PointStyle::Rect => "rect",
            PointStyle::Triangle => "triangle",
            PointStyle::Cross => "cross",
        }
    }
}

impl fmt::Display for PointStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One named value series plus its presentation attributes.
///
/// Color tokens are carried verbatim (e.g. `rgb(255, 99, 132)`) and resolved
/// at draw time, cycling when the list runs short of the category count.
/// Hover radii and offsets ride along untouched; a still image has no pointer.
#[derive(Clone, Debug, PartialEq)]
pub struct Dataset {
    pub label: String,
    pub values: Vec<f64>,
    pub background_colors: Vec<String>,
    pub point_style: PointStyle,
    pub point_radius: f32,
    pub point_hover_radius: f32,
    pub hover_offset: f32,
}

impl Dataset {
    pub fn new(label: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            label: label.into(),
            values,
            background_colors: Vec::new(),
            point_style: PointStyle::Circle,
            point_radius: 3.0,
            point_hover_radius: 4.0,
            hover_offset: 0.0,
        }
    }

    pub fn with_background_colors<I, S>(mut self, tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.background_colors = tokens.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_point_style(mut self, style: PointStyle) -> Self {
        self.point_style = style;
        self
    }

    pub fn with_point_radius(mut self, radius: f32) -> Self {
        self.point_radius = radius;
        self
    }

    pub fn with_point_hover_radius(mut self, radius: f32) -> Self {
        self.point_hover_radius = radius;
        self
    }

    pub fn with_hover_offset(mut self, offset: f32) -> Self {
        self.hover_offset = offset;
        self
    }
}

/// Category labels plus the datasets plotted against them.
///
/// Labels and values are allowed to disagree in length; the category axis
/// spans whichever is longer and missing labels render empty.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

impl ChartData {
    pub fn new<I, S>(labels: I, datasets: Vec<Dataset>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            labels: labels.into_iter().map(Into::into).collect(),
            datasets,
        }
    }

    /// The first dataset: the one title callbacks consult.
    pub fn primary(&self) -> Option<&Dataset> {
        self.datasets.first()
    }

    /// Number of category slots the axis spans.
    pub fn category_count(&self) -> usize {
        let widest = self.datasets.iter().map(|d| d.values.len()).max().unwrap_or(0);
        self.labels.len().max(widest)
    }

    /// Label for slot `i`, empty once the labels run out.
    pub fn label_at(&self, i: usize) -> &str {
        self.labels.get(i).map(String::as_str).unwrap_or("")
    }
}
