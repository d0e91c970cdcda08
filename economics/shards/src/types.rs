use serde::{Deserialize, Serialize};

/// Number of users the calculator allocates shards to.
pub const USER_COUNT: usize = 5;

/// Fixed shard emission the formula scales from.
pub const BASE_SHARDS: f64 = 100.0;

/// Tokens locked by each user, in user order.
pub type LockSizes = [f64; USER_COUNT];

/// Reward row for a single user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserReward {
    /// Display label, `"User 1"` through `"User 5"`.
    #[serde(rename = "user")]
    pub label: String,
    /// Tokens this user has locked.
    #[serde(rename = "lockSize")]
    pub lock_size: f64,
    /// Shards allocated to this user. May be zero.
    pub reward: f64,
}

/// A successful allocation across all users.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RewardResult {
    /// One row per user, in input order.
    pub users: Vec<UserReward>,
    /// Sum of all lock sizes.
    pub total_locked_tokens: f64,
    /// Sum of all user rewards.
    pub total_rewards: f64,
}

/// Reasons an input snapshot cannot produce a [`RewardResult`].
#[derive(Debug, Clone, thiserror::Error, PartialEq)]
pub enum ShardsError {
    #[error("Total Tokens must be > 0")]
    InvalidTotalSupply,

    #[error("Lock sizes must be non-negative")]
    NegativeLockSize,

    #[error(
        "Invalid parameters: Total locked tokens ({total_locked}) cannot exceed total supply ({total_supply})"
    )]
    OverAllocation { total_locked: f64, total_supply: f64 },

    #[error("Total Locked Tokens must be > 0")]
    ZeroLocked,
}

/// Convenience result type for calculator operations.
pub type Result<T> = std::result::Result<T, ShardsError>;
