// File: crates/easel-core/src/mount.rs
// Summary: Easel mount host: named raster surfaces, chart registration, PNG export.

use std::path::Path;

use skia_safe as skia;

use crate::chart::{encode_surface_png, new_raster_surface, Chart, RenderOptions};
use crate::error::{ChartError, Result};
use crate::theme::Theme;

/// One drawable mount point and, once registered, the chart living in it.
struct Mount {
    id: String,
    width: i32,
    height: i32,
    surface: skia::Surface,
    chart: Option<Chart>,
}

/// The mount host. An `Easel` owns one named raster surface per mount id
/// plus the chart instance registered into each.
pub struct Easel {
    opts: RenderOptions,
    mounts: Vec<Mount>,
}

impl Easel {
    pub fn new(theme: Theme) -> Self {
        let opts = RenderOptions {
            theme,
            ..RenderOptions::default()
        };
        Self::with_options(opts)
    }

    /// Full control over the render options shared by every mount.
    pub fn with_options(opts: RenderOptions) -> Self {
        Self {
            opts,
            mounts: Vec::new(),
        }
    }

    /// Declare a drawable surface under `id`. Ids are unique; redeclaring one
    /// is an error, the way a page carries one element per id.
    pub fn add_surface(&mut self, id: impl Into<String>, width: i32, height: i32) -> Result<()> {
        let id = id.into();
        if self.find(&id).is_some() {
            return Err(ChartError::MountTaken(id));
        }
        let mut surface =
            new_raster_surface(self.opts.physical(width), self.opts.physical(height))?;
        let canvas = surface.canvas();
        canvas.scale((self.opts.scale(), self.opts.scale()));
        canvas.clear(self.opts.theme.background);
        self.mounts.push(Mount {
            id,
            width,
            height,
            surface,
            chart: None,
        });
        Ok(())
    }

    /// Resolve `id`, draw `chart` into its surface, and keep the instance.
    /// Fails with `MountNotFound` when the id does not resolve. Registering
    /// on an occupied mount replaces the previous chart; a failed draw keeps
    /// the previous registration.
    pub fn register(&mut self, id: &str, chart: Chart) -> Result<()> {
        let opts = self.opts.clone();
        let mount = self
            .mounts
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or_else(|| ChartError::MountNotFound(id.to_string()))?;

        tracing::debug!(id, kind = chart.kind.as_str(), "registering chart");
        let (vw, vh) = if chart.options.responsive {
            (mount.width, mount.height)
        } else {
            // Fixed-size charts lay out at the default viewport, anchored
            // top-left; the mount surface clips the overflow.
            (opts.width, opts.height)
        };
        chart.draw(mount.surface.canvas(), vw, vh, &opts)?;
        mount.chart = Some(chart);
        Ok(())
    }

    /// Mount ids in declaration order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.mounts.iter().map(|m| m.id.as_str())
    }

    /// The chart registered under `id`, if any.
    pub fn chart(&self, id: &str) -> Option<&Chart> {
        self.find(id).and_then(|m| m.chart.as_ref())
    }

    /// Whether a chart has been registered under `id`.
    pub fn is_mounted(&self, id: &str) -> bool {
        self.chart(id).is_some()
    }

    /// Declared size of the mount under `id`.
    pub fn surface_size(&self, id: &str) -> Option<(i32, i32)> {
        self.find(id).map(|m| (m.width, m.height))
    }

    /// Encoded PNG of the surface under `id`. A mount nothing was registered
    /// on encodes as its cleared background.
    pub fn png_bytes(&mut self, id: &str) -> Result<Vec<u8>> {
        let mount = self
            .mounts
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or_else(|| ChartError::MountNotFound(id.to_string()))?;
        encode_surface_png(&mut mount.surface)
    }

    /// Write the surface under `id` as a PNG at `path`.
    pub fn save_png(&mut self, id: &str, path: impl AsRef<Path>) -> Result<()> {
        let data = self.png_bytes(id)?;
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, data)?;
        Ok(())
    }

    fn find(&self, id: &str) -> Option<&Mount> {
        self.mounts.iter().find(|m| m.id == id)
    }
}
