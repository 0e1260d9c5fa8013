// File: crates/demo/src/main.rs
// Summary: `gasline` loads the gas price CSVs, renders the selected charts and writes SVG (and PNG).
// Notes:
// - A chart whose data fails to load is still written, as a visible error scene, and the
//   process exits non-zero once every requested chart has been attempted.

mod charts;
mod cli;
mod config;

use anyhow::{Context, Result};
use charts::{inventory, states, yearly, Rendered};
use chart_core::chart::error_scene;
use chart_core::{load_csv, RenderOptions};
use chart_render_skia::SkiaRenderer;
use clap::Parser;
use cli::{Args, Command};
use config::DemoConfig;
use serde::de::DeserializeOwned;
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();

    let args = Args::parse();
    let mut cfg = DemoConfig::load_or_default(&args.config)?;
    if let Some(dir) = args.data_dir.clone() {
        cfg.paths.data_dir = dir;
    }
    if let Some(dir) = args.out_dir.clone() {
        cfg.paths.out_dir = dir;
    }

    let mut out = Output::new(cfg.paths.out_dir.clone(), args.png);
    match &args.command {
        Command::Yearly { hover } => run_yearly(&cfg, &mut out, hover.as_deref())?,
        Command::States { years, hover } => run_states(&cfg, &mut out, years, hover.as_deref())?,
        Command::Inventory { hover } => run_inventory(&cfg, &mut out, hover.as_deref())?,
        Command::All => {
            run_yearly(&cfg, &mut out, None)?;
            run_states(&cfg, &mut out, &[], None)?;
            run_inventory(&cfg, &mut out, None)?;
        }
    }

    if !out.failures.is_empty() {
        anyhow::bail!("{} chart(s) could not load their data:\n  {}", out.failures.len(), out.failures.join("\n  "));
    }
    Ok(())
}

fn run_yearly(cfg: &DemoConfig, out: &mut Output, hover: Option<&str>) -> Result<()> {
    let opts = cfg.yearly.canvas.render_options();
    if let Some(rows) = out.load(cfg.data_path(&cfg.yearly.file), yearly::NAME, &opts)? {
        out.write(&yearly::render(&cfg.yearly, &rows, hover))?;
    }
    Ok(())
}

fn run_states(cfg: &DemoConfig, out: &mut Output, years: &[i32], hover: Option<&str>) -> Result<()> {
    let opts = cfg.states.canvas.render_options();
    if let Some(rows) = out.load(cfg.data_path(&cfg.states.file), states::NAME, &opts)? {
        for rendered in states::render(&cfg.states, &rows, years, hover) {
            out.write(&rendered)?;
        }
    }
    Ok(())
}

fn run_inventory(cfg: &DemoConfig, out: &mut Output, hover: Option<&str>) -> Result<()> {
    let opts = cfg.inventory.canvas.render_options();
    if let Some(rows) = out.load(cfg.data_path(&cfg.inventory.file), inventory::NAME, &opts)? {
        out.write(&inventory::render(&cfg.inventory, &rows, hover))?;
    }
    Ok(())
}

/// Output directory, PNG switch and the load failures collected so far.
struct Output {
    dir: PathBuf,
    png: bool,
    renderer: SkiaRenderer,
    failures: Vec<String>,
}

impl Output {
    fn new(dir: PathBuf, png: bool) -> Self {
        Self { dir, png, renderer: SkiaRenderer::new(), failures: Vec::new() }
    }

    /// Load `path`; on failure write an error scene under `name` and record the failure.
    fn load<T: DeserializeOwned>(&mut self, path: PathBuf, name: &str, opts: &RenderOptions) -> Result<Option<Vec<T>>> {
        match load_csv::<T>(&path) {
            Ok(rows) => {
                info!(chart = name, rows = rows.len(), path = %path.display(), "loaded data");
                Ok(Some(rows))
            }
            Err(err) => {
                error!(chart = name, %err, "load failed");
                self.write(&Rendered::new(name, error_scene(opts, &err)))?;
                self.failures.push(format!("{name}: {err}"));
                Ok(None)
            }
        }
    }

    fn write(&self, rendered: &Rendered) -> Result<()> {
        let svg = self.dir.join(format!("{}.svg", rendered.name));
        rendered.scene.render_to_svg(&svg).with_context(|| format!("failed to write {}", svg.display()))?;
        info!(path = %svg.display(), nodes = rendered.scene.len(), "wrote chart");
        if self.png {
            let png = svg.with_extension("png");
            self.renderer
                .render_to_png(&rendered.scene, &png)
                .with_context(|| format!("failed to write {}", png.display()))?;
            info!(path = %png.display(), "wrote chart");
        }
        Ok(())
    }
}
