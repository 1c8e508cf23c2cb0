use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::error::LedgerError;
use crate::state::{StakeRecord, StakingPool};
use crate::utils::{accrual, transfer};

pub fn claim_rewards(ctx: Context<ClaimRewards>) -> Result<()> {
    let pool_ai = ctx.accounts.pool.to_account_info();
    let pool_bump = ctx.bumps.pool;

    let now = Clock::get()?.unix_timestamp;

    let pool = &mut ctx.accounts.pool;
    require!(pool.enabled, LedgerError::MechanismDisabled);

    let record = &mut ctx.accounts.stake_record;
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
    require!(pending > 0, LedgerError::NothingDue);

    // Settle before paying out.
    record.last_claimed_at = now;
    record.cumulative_earned = record
        .cumulative_earned
        .checked_add(pending)
        .ok_or(LedgerError::MathOverflow)?;
    pool.total_claimed_rewards = pool
        .total_claimed_rewards
        .checked_add(pending)
        .ok_or(LedgerError::MathOverflow)?;

    let signer_seeds: &[&[&[u8]]] = &[&[b"staking_pool", &[pool_bump]]];
    transfer::pay_from_vault(
        &ctx.accounts.token_program,
        &ctx.accounts.vault,
        &ctx.accounts.staker_token_account,
        pool_ai,
        signer_seeds,
        pending,
    )?;

    emit!(RewardTransferred {
        owner: ctx.accounts.staker.key(),
        amount: pending,
        cumulative_earned: record.cumulative_earned,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct ClaimRewards<'info> {
    #[account(mut, seeds = [b"staking_pool"], bump)]
    pub pool: Account<'info, StakingPool>,

    #[account(
        mut,
        seeds = [b"stake_record", pool.key().as_ref(), staker.key().as_ref()],
        bump
    )]
    pub stake_record: Account<'info, StakeRecord>,

    #[account(
        mut,
        seeds = [b"staking_vault", pool.key().as_ref()],
        bump,
        constraint = vault.mint == pool.mint @ LedgerError::InvalidTokenMint,
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(
        mut,
        constraint = staker_token_account.mint == pool.mint @ LedgerError::InvalidTokenMint,
        constraint = staker_token_account.owner == staker.key() @ LedgerError::InvalidTokenAccount,
    )]
    pub staker_token_account: Account<'info, TokenAccount>,

    pub staker: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct RewardTransferred {
    pub owner: Pubkey,
    pub amount: u64,
    pub cumulative_earned: u64,
}
