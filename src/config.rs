use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::procedures::change;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub limits: LimitsConfig,
    pub change: ChangeConfig,
    pub pascal: PascalConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LimitsConfig {
    /// Largest input a linear-recursive variant may be given.
    /// Each unit of input costs one native stack frame.
    pub max_recursion_depth: u64,
    /// Largest input a naive tree-recursive variant may be given.
    /// Running time grows exponentially past this.
    pub max_tree_input: u64,
    /// Largest amount the naive change-counting recursion may be given.
    pub max_change_amount: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangeConfig {
    /// Number of coin kinds used when --coin-types is not given (0..=6)
    pub coin_types: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PascalConfig {
    /// Rows to build when no row count is given
    pub rows: usize,
    /// Which rows to print
    pub view: PascalView,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum PascalView {
    /// Only the final row
    Last,
    /// Every row of the triangle
    All,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            limits: LimitsConfig {
                max_recursion_depth: 10_000,
                max_tree_input: 30,
                max_change_amount: 500,
            },
            change: ChangeConfig {
                coin_types: change::DEFAULT_COIN_TYPES,
            },
            pascal: PascalConfig {
                rows: 10,
                view: PascalView::Last,
            },
        }
    }
}

/// Returns the default global config path: ~/.recurrences/recurrences.toml
pub fn global_config_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".recurrences")
        .join("recurrences.toml")
}

/// Ensures the global config file exists, creating it with defaults on first launch.
/// Does nothing if the file already exists.
pub fn ensure_global_config(path: &Path) -> Result<()> {
    if path.exists() {
        return Ok(());
    }
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, DEFAULT_GLOBAL_CONFIG)?;
    tracing::info!("created default config at {}", path.display());
    Ok(())
}

const DEFAULT_GLOBAL_CONFIG: &str = r#"# recurrences global configuration
# This file was created automatically. Edit as needed.
# Project-level overrides go in recurrences.toml in the working directory.

[limits]
max_recursion_depth = 10000   # linear recursion: one stack frame per unit of input
max_tree_input = 30           # naive tree recursion: exponential time past this
max_change_amount = 500       # naive change counting: call count grows steeply with the amount

[change]
coin_types = 6                # 1, 5, 10, 25, 50, 100

[pascal]
rows = 10
view = "last"                 # "last" or "all"
"#;

/// Load configuration using figment's layered system:
/// 1. Built-in Rust defaults (AppConfig::default)
/// 2. Global config file (~/.recurrences/recurrences.toml), silently ignored if missing
/// 3. Project config file (<cwd>/recurrences.toml), only merged if Some
/// 4. Environment variables prefixed with RECURRENCES_ (nested with __)
///    e.g. RECURRENCES_LIMITS__MAX_TREE_INPUT=35
pub fn load(global_config: &Path, project_config: Option<&Path>) -> Result<AppConfig> {
    let mut figment = Figment::from(Serialized::defaults(AppConfig::default()))
        .merge(Toml::file(global_config));

    if let Some(proj) = project_config {
        figment = figment.merge(Toml::file(proj));
    }

    let config = figment
        .merge(Env::prefixed("RECURRENCES_").split("__"))
        .extract()?;

    Ok(config)
}
