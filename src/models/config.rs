use std::path::{Path, PathBuf};

use color_core::extract::{ClusterOrder, ExtractOptions};
use color_core::Mood;
use serde::{Deserialize, Serialize};

use crate::error::CliError;

/// Application configuration loaded from config.yaml
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Palette generation defaults
    #[serde(default)]
    pub palette: PaletteConfig,

    /// Contrast checking defaults
    #[serde(default)]
    pub contrast: ContrastConfig,

    /// Dominant-color extraction defaults
    #[serde(default)]
    pub extract: ExtractConfig,

    /// Fixed RNG seed for reproducible palettes (random when absent)
    #[serde(default)]
    pub seed: Option<u64>,
}

/// Defaults for `generate`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaletteConfig {
    /// Number of swatches
    #[serde(default = "default_count")]
    pub count: usize,

    /// Mood name; unknown names fall back to random palettes
    #[serde(default)]
    pub mood: Option<String>,
}

fn default_count() -> usize {
    5
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            count: default_count(),
            mood: None,
        }
    }
}

impl PaletteConfig {
    /// The configured mood, if it names one.
    pub fn mood(&self) -> Option<Mood> {
        let name = self.mood.as_deref()?;
        match name.parse() {
            Ok(mood) => Some(mood),
            Err(e) => {
                tracing::warn!(%e, "Ignoring configured mood, using random palettes");
                None
            }
        }
    }
}

/// Defaults for `suggest`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContrastConfig {
    /// Target contrast ratio (WCAG AA normal text by default)
    #[serde(default = "default_target_ratio")]
    pub target_ratio: f64,
}

fn default_target_ratio() -> f64 {
    color_core::contrast::AA_NORMAL
}

impl Default for ContrastConfig {
    fn default() -> Self {
        Self {
            target_ratio: default_target_ratio(),
        }
    }
}

/// Defaults for `extract`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractConfig {
    /// Number of clusters
    #[serde(default = "default_clusters")]
    pub clusters: usize,

    #[serde(default = "default_max_dimension")]
    pub max_dimension: usize,

    #[serde(default = "default_sample_step")]
    pub sample_step: usize,

    #[serde(default = "default_alpha_threshold")]
    pub alpha_threshold: u8,

    #[serde(default = "default_max_iterations")]
    pub max_iterations: usize,

    /// Sort clusters by population instead of seeding order
    #[serde(default)]
    pub by_population: bool,
}

fn default_clusters() -> usize {
    5
}

fn default_max_dimension() -> usize {
    ExtractOptions::default().max_dimension
}

fn default_sample_step() -> usize {
    ExtractOptions::default().sample_step
}

fn default_alpha_threshold() -> u8 {
    ExtractOptions::default().alpha_threshold
}

fn default_max_iterations() -> usize {
    ExtractOptions::default().max_iterations
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            clusters: default_clusters(),
            max_dimension: default_max_dimension(),
            sample_step: default_sample_step(),
            alpha_threshold: default_alpha_threshold(),
            max_iterations: default_max_iterations(),
            by_population: false,
        }
    }
}

impl ExtractConfig {
    /// Engine options for these settings.
    pub fn options(&self) -> ExtractOptions {
        let order = if self.by_population {
            ClusterOrder::Population
        } else {
            ClusterOrder::Initialization
        };
        ExtractOptions::new()
            .max_dimension(self.max_dimension)
            .sample_step(self.sample_step)
            .alpha_threshold(self.alpha_threshold)
            .max_iterations(self.max_iterations)
            .order(order)
    }
}

impl AppConfig {
    /// Read and parse a YAML config file.
    pub fn from_file(path: &Path) -> Result<Self, CliError> {
        let content = std::fs::read_to_string(path).map_err(|source| CliError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        serde_yaml::from_str(&content).map_err(|source| CliError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load configuration from `path`, or from `CONFIG_FILE` when no path
    /// is given. Missing or broken files fall back to defaults.
    pub fn load(path: Option<&Path>) -> Self {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => match std::env::var("CONFIG_FILE") {
                Ok(p) => PathBuf::from(p),
                Err(_) => return Self::default(),
            },
        };

        match Self::from_file(&path) {
            Ok(config) => {
                tracing::debug!(path = %path.display(), "Loaded configuration");
                config
            }
            Err(e) => {
                tracing::warn!(%e, "Failed to load config, using defaults");
                Self::default()
            }
        }
    }
}
