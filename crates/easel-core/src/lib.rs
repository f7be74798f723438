// File: crates/easel-core/src/lib.rs
// Summary: Core library entry point; exports public API for chart configuration and mounting.

pub mod chart;
pub mod color;
pub mod dataset;
pub mod error;
pub mod grid;
pub mod mount;
pub mod options;
pub mod text;
pub mod theme;
pub mod types;

pub use chart::{Chart, RenderOptions};
pub use dataset::{ChartData, ChartKind, Dataset, PointStyle};
pub use error::{ChartError, Result};
pub use mount::Easel;
pub use options::{ChartOptions, Title, TitleContext, TitleText};
pub use text::TextShaper;
pub use theme::Theme;
