// File: crates/demo/src/config.rs
// Summary: TOML configuration for the demo charts: input/output paths plus per-chart canvas and layout.

use anyhow::{Context, Result};
use chart_core::{Annotation, Frame, Insets, RenderOptions, Theme};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct PathsConfig {
    #[serde(default = "PathsConfig::default_data_dir")]
    pub data_dir: PathBuf,
    #[serde(default = "PathsConfig::default_out_dir")]
    pub out_dir: PathBuf,
}

impl PathsConfig {
    fn default_data_dir() -> PathBuf {
        PathBuf::from("data")
    }
    fn default_out_dir() -> PathBuf {
        PathBuf::from("out")
    }
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self { data_dir: Self::default_data_dir(), out_dir: Self::default_out_dir() }
    }
}

/// Canvas size and margins of one chart.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct CanvasConfig {
    pub width: u32,
    pub height: u32,
    pub padding_inner: f32,
    pub margins: Insets,
}

impl CanvasConfig {
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            frame: Frame::new(self.width, self.height, self.margins),
            theme: Theme::light(),
            padding_inner: self.padding_inner,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct YearlyConfig {
    pub file: String,
    pub canvas: CanvasConfig,
}

impl Default for YearlyConfig {
    fn default() -> Self {
        Self {
            file: "gasprice_year.csv".to_string(),
            canvas: CanvasConfig { width: 800, height: 400, margins: Insets::new(40, 20, 20, 30), padding_inner: 0.1 },
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct StatesConfig {
    pub file: String,
    /// Year shown when no `--year` is given; the latest year in the data otherwise.
    pub default_year: Option<i32>,
    pub canvas: CanvasConfig,
}

impl Default for StatesConfig {
    fn default() -> Self {
        Self {
            file: "gasprice_states.csv".to_string(),
            default_year: None,
            canvas: CanvasConfig { width: 800, height: 500, margins: Insets::new(60, 20, 20, 50), padding_inner: 0.3 },
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct InventoryConfig {
    pub file: String,
    /// Last year of measured data; later years are drawn dashed and faded.
    pub projection_cutoff: Option<i32>,
    pub canvas: CanvasConfig,
    pub annotations: Vec<Annotation>,
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            file: "gasinv_year.csv".to_string(),
            projection_cutoff: Some(2022),
            canvas: CanvasConfig { width: 800, height: 500, margins: Insets::new(80, 50, 50, 80), padding_inner: 0.1 },
            annotations: vec![
                Annotation::new(2008, "Great Recession"),
                Annotation::new(2011, "N.Africa and Middle East crisis"),
                Annotation::new(2020, "Covid-19 Pandemic"),
            ],
        }
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct DemoConfig {
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub yearly: YearlyConfig,
    #[serde(default)]
    pub states: StatesConfig,
    #[serde(default)]
    pub inventory: InventoryConfig,
}

impl DemoConfig {
    /// Read `path`, falling back to defaults when the file does not exist.
    /// A file that exists but cannot be read or parsed is an error.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file; using defaults");
            return Ok(Self::default());
        }
        let contents =
            fs::read_to_string(path).with_context(|| format!("failed to read config {}", path.display()))?;
        let cfg = toml::from_str(&contents).with_context(|| format!("failed to parse config {}", path.display()))?;
        tracing::info!(path = %path.display(), "loaded config");
        Ok(cfg)
    }

    pub fn data_path(&self, file: &str) -> PathBuf {
        self.paths.data_dir.join(file)
    }
}
