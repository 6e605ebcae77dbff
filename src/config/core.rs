use anyhow::{Context, Result};
use figment::{
    Figment,
    providers::{Env, Format, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::parallel::ExecutionStrategy;
use crate::workload::HashChainWorkload;

// Embed the default config at compile time
const DEFAULT_CONFIG: &str = include_str!("../../default-config.toml");

/// Prefix for environment overrides, e.g. `LINEBENCH_BENCH__WORKERS=8`
pub const ENV_PREFIX: &str = "LINEBENCH_";

/// Repository-level config file name
pub const REPO_CONFIG_FILE: &str = "linebench.toml";

/// Merged configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchConfig {
    pub bench: BenchSection,
    pub workload: HashChainWorkload,
    pub fixture: FixtureSection,
}

/// Input and pool settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchSection {
    /// Input file
    pub file: PathBuf,
    /// Worker pool size (0 = one per logical CPU)
    pub workers: usize,
}

/// Generated input settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixtureSection {
    pub lines: usize,
}

impl BenchConfig {
    /// Load defaults, user config, repo config and environment, in that order.
    pub fn load() -> Result<Self> {
        Self::load_with_custom_config(None)
    }

    /// Like [`BenchConfig::load`], but a custom file replaces the user and
    /// repo config layers.
    pub fn load_with_custom_config(custom_config: Option<&Path>) -> Result<Self> {
        if let Some(path) = custom_config
            && !path.exists()
        {
            anyhow::bail!("Configuration file not found: {}", path.display());
        }

        let config: BenchConfig = Self::figment(custom_config)
            .extract()
            .context("Failed to load configuration")?;
        config.validate()?;
        Ok(config)
    }

    /// Provider stack, lowest priority first
    fn figment(custom_config: Option<&Path>) -> Figment {
        let mut figment = Figment::new().merge(Toml::string(DEFAULT_CONFIG)); // Embedded defaults

        if let Some(custom_path) = custom_config {
            figment = figment.merge(Toml::file(custom_path));
        } else {
            // Standard priority: user config -> repo config
            figment = figment
                .merge(Toml::file(Self::user_config_path()))
                .merge(Toml::file(REPO_CONFIG_FILE));
        }

        // Environment variables always have highest priority
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.bench.file.as_os_str().is_empty() {
            anyhow::bail!("bench.file cannot be empty");
        }

        if self.workload.hash_rounds == 0 && self.workload.float_iterations == 0 {
            anyhow::bail!(
                "workload.hash_rounds and workload.float_iterations cannot both be 0"
            );
        }

        Ok(())
    }

    /// Configured pool size with 0 resolved to the CPU count
    pub fn effective_workers(&self) -> usize {
        if self.bench.workers == 0 {
            ExecutionStrategy::available_workers()
        } else {
            self.bench.workers
        }
    }

    /// Render the merged configuration as TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize configuration")
    }

    fn user_config_path() -> String {
        match std::env::var("HOME") {
            Ok(home) => format!("{}/.config/linebench/config.toml", home),
            Err(_) => "~/.config/linebench/config.toml".to_string(),
        }
    }
}
