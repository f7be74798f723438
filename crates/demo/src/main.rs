// File: crates/demo/src/main.rs
// Summary: Demo mounts the sample dashboard (line, bar, two pies) and writes one PNG per mount.

mod samples;

use anyhow::{Context, Result};
use clap::Parser;
use easel_core::{theme, Easel, RenderOptions};
use std::path::PathBuf;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "easel-demo", version, about = "Render the sample chart dashboard to PNG files")]
struct Args {
    /// Directory the PNGs are written to
    #[arg(long, default_value = "target/out")]
    out_dir: PathBuf,

    /// Theme preset name (light, dark, solarized-dark)
    #[arg(long, default_value = "light")]
    theme: String,

    /// Mount width for the cartesian charts
    #[arg(long, default_value_t = 1024)]
    width: i32,

    /// Mount height for the cartesian charts
    #[arg(long, default_value_t = 640)]
    height: i32,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();
    let theme = theme::find(&args.theme);
    tracing::info!(theme = theme.name, out_dir = %args.out_dir.display(), "rendering sample dashboard");

    let mut easel = Easel::with_options(RenderOptions {
        theme,
        ..RenderOptions::default()
    });
    samples::mount_dashboard(&mut easel, args.width, args.height)?;

    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("creating {}", args.out_dir.display()))?;

    let ids: Vec<String> = easel.ids().map(str::to_owned).collect();
    for id in ids {
        let out = args.out_dir.join(format!("{}.png", id));
        easel
            .save_png(&id, &out)
            .with_context(|| format!("exporting mount '{}'", id))?;
        tracing::info!(id = %id, path = %out.display(), "wrote png");
    }

    Ok(())
}
