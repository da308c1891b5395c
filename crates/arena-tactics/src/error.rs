use thiserror::Error;

use arena_bt::BtError;
use arena_core::ConfigError;
use arena_utility::ArbiterError;

/// Why a bot could not be assembled from its configuration.
#[derive(Debug, Error)]
pub enum AssemblyError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("setting `{name}` is out of range: {value}")]
    InvalidSetting { name: &'static str, value: String },

    #[error("failed to parse YAML config: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("failed to parse JSON config: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Arbiter(#[from] ArbiterError),

    #[error(transparent)]
    Tree(#[from] BtError),
}
