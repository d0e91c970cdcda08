use serde::{Deserialize, Serialize};
use shards_rewards::{LockSizes, RewardResult, ShardsError, USER_COUNT};

/// Lock size every user starts with on a fresh form.
pub const DEFAULT_LOCK_SIZE: f64 = 100.0;

/// Total supply a fresh form starts with.
pub const DEFAULT_TOTAL_TOKENS: f64 = 1000.0;

/// A saved set of calculator inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    /// Tokens locked per user, in user order.
    #[serde(default = "default_lock_sizes")]
    pub lock_sizes: LockSizes,
    /// Total token supply the locks are measured against.
    #[serde(default = "default_total_tokens")]
    pub total_tokens: f64,
}

fn default_lock_sizes() -> LockSizes {
    [DEFAULT_LOCK_SIZE; USER_COUNT]
}

fn default_total_tokens() -> f64 {
    DEFAULT_TOTAL_TOKENS
}

impl Default for Scenario {
    fn default() -> Self {
        Self {
            lock_sizes: default_lock_sizes(),
            total_tokens: default_total_tokens(),
        }
    }
}

/// What the form currently displays.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Nothing has been calculated yet.
    Empty,
    Result(RewardResult),
    Error(ShardsError),
}

impl From<shards_rewards::Result<RewardResult>> for Outcome {
    fn from(result: shards_rewards::Result<RewardResult>) -> Self {
        match result {
            Ok(r) => Outcome::Result(r),
            Err(e) => Outcome::Error(e),
        }
    }
}

/// Errors from the form and scenario layer.
#[derive(Debug, thiserror::Error)]
pub enum ScenarioError {
    #[error("unknown field: {0}")]
    UnknownField(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlDe(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),
}

/// Convenience result type for form and scenario operations.
pub type Result<T> = std::result::Result<T, ScenarioError>;
