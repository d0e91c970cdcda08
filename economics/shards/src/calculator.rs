use crate::types::*;

/// Compute the shard allocation for five lock sizes against a total supply.
///
/// Checks run in a fixed order and the first failure wins:
/// supply, sign of each lock, over-allocation, then an empty lock set.
/// A NaN supply or lock is deliberately rejected by the first two checks
/// rather than flowing NaN into the rewards.
///
/// Formula per user:
/// reward = BASE_SHARDS * (lock / supply) * sqrt(total_locked / supply) * (1 - max_lock / total_locked)
///
/// The last factor is the decentralization factor. It is zero when a single
/// user holds every locked token, which zeroes every reward.
pub fn compute(lock_sizes: &LockSizes, total_supply: f64) -> Result<RewardResult> {
    // Negated comparisons so NaN is rejected as well.
    if !(total_supply > 0.0) {
        tracing::warn!(total_supply, "rejecting non-positive total supply");
        return Err(ShardsError::InvalidTotalSupply);
    }

    if lock_sizes.iter().any(|size| !(*size >= 0.0)) {
        tracing::warn!(?lock_sizes, "rejecting negative lock size");
        return Err(ShardsError::NegativeLockSize);
    }

    let total_locked: f64 = lock_sizes.iter().fold(0.0, |acc, size| acc + size);

    if total_locked > total_supply {
        tracing::warn!(total_locked, total_supply, "locked tokens exceed supply");
        return Err(ShardsError::OverAllocation {
            total_locked,
            total_supply,
        });
    }

    if total_locked == 0.0 {
        return Err(ShardsError::ZeroLocked);
    }

    let factor = decentralization_factor(lock_sizes, total_locked);
    let participation = (total_locked / total_supply).sqrt();

    let users: Vec<UserReward> = lock_sizes
        .iter()
        .enumerate()
        .map(|(i, &lock_size)| UserReward {
            label: format!("User {}", i + 1),
            lock_size,
            reward: BASE_SHARDS * (lock_size / total_supply) * participation * factor,
        })
        .collect();

    let total_rewards = users.iter().fold(0.0, |acc, u| acc + u.reward);

    tracing::debug!(
        total_locked,
        total_supply,
        decentralization_factor = factor,
        total_rewards,
        "computed shard rewards"
    );

    Ok(RewardResult {
        users,
        total_locked_tokens: total_locked,
        total_rewards,
    })
}

/// `1 - max_lock / total_locked`, in `[0, 1)` for a valid lock set.
pub fn decentralization_factor(lock_sizes: &LockSizes, total_locked: f64) -> f64 {
    let max_lock = lock_sizes.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    1.0 - max_lock / total_locked
}
