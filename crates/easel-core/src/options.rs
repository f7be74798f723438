// File: crates/easel-core/src/options.rs
// Summary: Per-chart options: responsive sizing and the lazily resolved title.

use std::fmt;
use std::sync::Arc;

use crate::dataset::{ChartData, ChartKind};

/// What a title callback gets to look at when the engine draws the chart.
#[derive(Clone, Copy)]
pub struct TitleContext<'a> {
    pub kind: ChartKind,
    pub data: &'a ChartData,
}

/// Title text, either fixed up front or computed against the chart at draw
/// time. Computed titles see the data as it is when the engine renders, not
/// as it was when the configuration was built.
#[derive(Clone)]
pub enum TitleText {
    Static(String),
    Computed(Arc<dyn Fn(&TitleContext<'_>) -> String + Send + Sync>),
}

impl TitleText {
    pub fn resolve(&self, ctx: &TitleContext<'_>) -> String {
        match self {
            TitleText::Static(s) => s.clone(),
            TitleText::Computed(f) => f(ctx),
        }
    }
}

impl fmt::Debug for TitleText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TitleText::Static(s) => f.debug_tuple("Static").field(s).finish(),
            TitleText::Computed(_) => f.write_str("Computed(..)"),
        }
    }
}

/// The title block. A hidden title keeps its text around; display only
/// controls whether the engine draws it.
#[derive(Clone, Debug)]
pub struct Title {
    pub display: bool,
    pub text: TitleText,
}

impl Title {
    pub fn fixed(text: impl Into<String>) -> Self {
        Self {
            display: true,
            text: TitleText::Static(text.into()),
        }
    }

    pub fn computed<F>(f: F) -> Self
    where
        F: Fn(&TitleContext<'_>) -> String + Send + Sync + 'static,
    {
        Self {
            display: true,
            text: TitleText::Computed(Arc::new(f)),
        }
    }

    pub fn hidden(mut self) -> Self {
        self.display = false;
        self
    }
}

/// The options block of a chart configuration.
#[derive(Clone, Debug)]
pub struct ChartOptions {
    /// Size the chart to its mount surface instead of the default viewport.
    pub responsive: bool,
    pub title: Option<Title>,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            responsive: true,
            title: None,
        }
    }
}

impl ChartOptions {
    pub fn with_title(mut self, title: Title) -> Self {
        self.title = Some(title);
        self
    }

    pub fn with_responsive(mut self, responsive: bool) -> Self {
        self.responsive = responsive;
        self
    }
}
