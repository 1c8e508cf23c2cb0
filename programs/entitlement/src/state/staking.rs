use anchor_lang::prelude::*;

/// Staking pool configuration and aggregates. Rate/fee/cliff parameters are
/// admin-adjustable via `update_staking_params`.
#[account]
pub struct StakingPool {
    /// Staked/reward token mint.
    pub mint: Pubkey,
    /// Admin authority; also the fee destination owner.
    pub admin: Pubkey,
    /// Reward rate in basis points per full reward interval.
    pub reward_rate: u64,
    /// Reward window length in seconds, counted from each staker's first stake.
    pub reward_interval: i64,
    /// Entry fee in basis points.
    pub staking_fee_bps: u64,
    /// Exit fee in basis points.
    pub unstaking_fee_bps: u64,
    /// Minimum seconds between first stake and unstake.
    pub cliff_time: i64,
    /// Admin kill switch.
    pub enabled: bool,
    /// Sum of net deposits across live records.
    pub total_staked: u64,
    /// Lifetime rewards paid out.
    pub total_claimed_rewards: u64,
    /// Live stake records.
    pub staker_count: u64,
}

impl StakingPool {
    pub const SIZE: usize =
        32 + // mint
        32 + // admin
        8 +  // reward_rate
        8 +  // reward_interval
        8 +  // staking_fee_bps
        8 +  // unstaking_fee_bps
        8 +  // cliff_time
        1 +  // enabled
        8 +  // total_staked
        8 +  // total_claimed_rewards
        8;   // staker_count
}

/// Per-staker record PDA. Created on first stake, closed when `deposited`
/// reaches zero; the account's existence is the active-holder membership test.
#[account]
pub struct StakeRecord {
    pub owner: Pubkey,
    /// Net deposit (entry fees already split off).
    pub deposited: u64,
    /// First-stake timestamp; top-ups do not reset it.
    pub staked_at: i64,
    pub last_claimed_at: i64,
    pub cumulative_earned: u64,
}

impl StakeRecord {
    pub const SIZE: usize =
        32 + // owner
        8 +  // deposited
        8 +  // staked_at
        8 +  // last_claimed_at
        8;   // cumulative_earned
}
