use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::bench::OutputFormat;
use crate::clock::ClockKind;

fn default_log_level() -> String {
    "warn".to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BenchConfig {
    #[serde(default)]
    pub clock: ClockKind,
    #[serde(default)]
    pub format: OutputFormat,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            clock: ClockKind::default(),
            format: OutputFormat::default(),
            log_level: default_log_level(),
        }
    }
}

impl BenchConfig {
    /// Applies command-line overrides on top of the file values.
    pub fn with_overrides(mut self, clock: Option<ClockKind>, format: Option<OutputFormat>) -> Self {
        if let Some(clock) = clock {
            self.clock = clock;
        }
        if let Some(format) = format {
            self.format = format;
        }
        self
    }
}

pub struct ConfigLoader {
    base_dir: PathBuf,
}

impl ConfigLoader {
    pub fn new(base_dir: impl AsRef<Path>) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
        }
    }

    pub fn load(&self, file: impl AsRef<Path>) -> Result<BenchConfig> {
        let path = self.base_dir.join(file);
        let data = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: BenchConfig = serde_yaml::from_str(&data)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        Ok(config)
    }
}
