use anchor_lang::prelude::*;
use anchor_spl::token::TokenAccount;

use crate::error::LedgerError;
use crate::state::{StakeRecord, StakingPool};
use crate::utils::accrual;

/// Read-only pending-reward quote; emits 0 when the pool has no surplus or
/// the reward window is settled, never an error.
pub fn emit_staking_quote(ctx: Context<StakingQuote>, owner: Pubkey) -> Result<()> {
    let pool = &ctx.accounts.pool;
    let record = &ctx.accounts.stake_record;
    require_keys_eq!(record.owner, owner, LedgerError::NoScheduleInFlight);

    let now = Clock::get()?.unix_timestamp;
    let pending = accrual::staking_pending(
        record.deposited,
        pool.reward_rate,
        pool.reward_interval,
        record.staked_at,
        record.last_claimed_at,
        now,
        ctx.accounts.vault.amount,
        pool.total_staked,
    )?;

    emit!(PendingReward {
        owner,
        pending,
        deposited: record.deposited,
        cumulative_earned: record.cumulative_earned,
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(owner: Pubkey)]
pub struct StakingQuote<'info> {
    #[account(seeds = [b"staking_pool"], bump)]
    pub pool: Account<'info, StakingPool>,

    #[account(
        seeds = [b"stake_record", pool.key().as_ref(), owner.as_ref()],
        bump
    )]
    pub stake_record: Account<'info, StakeRecord>,

    #[account(
        seeds = [b"staking_vault", pool.key().as_ref()],
        bump,
        constraint = vault.mint == pool.mint @ LedgerError::InvalidTokenMint,
    )]
    pub vault: Account<'info, TokenAccount>,
}

#[event]
pub struct PendingReward {
    pub owner: Pubkey,
    pub pending: u64,
    pub deposited: u64,
    pub cumulative_earned: u64,
}
