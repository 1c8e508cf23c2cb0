use anchor_lang::prelude::*;
use anchor_lang::AccountsClose;
use anchor_spl::token::{Token, TokenAccount};

use crate::error::LedgerError;
use crate::state::{StakeRecord, StakingPool};
use crate::utils::{accrual, fees, transfer};

pub fn unstake(ctx: Context<Unstake>, amount: u64) -> Result<()> {
    let pool_ai = ctx.accounts.pool.to_account_info();
    let pool_bump = ctx.bumps.pool;

    require!(amount > 0, LedgerError::InvalidInput);

    let now = Clock::get()?.unix_timestamp;

    let pool = &mut ctx.accounts.pool;
    require!(pool.enabled, LedgerError::MechanismDisabled);

    let record = &mut ctx.accounts.stake_record;
    require!(amount <= record.deposited, LedgerError::InvalidInput);

    let cliff_end = record
        .staked_at
        .checked_add(pool.cliff_time)
        .ok_or(LedgerError::MathOverflow)?;
    require!(now >= cliff_end, LedgerError::CliffNotReached);

    // Settle any pending rewards first (clamped to the vault surplus), so a
    // full exit does not strand them behind a closed record.
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

    let (fee, net) = fees::split_fee(amount, pool.unstaking_fee_bps)?;

    let owed = amount.checked_add(pending).ok_or(LedgerError::MathOverflow)?;
    require!(
        ctx.accounts.vault.amount >= owed,
        LedgerError::InsufficientFunds
    );

    record.deposited = record
        .deposited
        .checked_sub(amount)
        .ok_or(LedgerError::MathOverflow)?;
    record.last_claimed_at = now;
    record.cumulative_earned = record
        .cumulative_earned
        .checked_add(pending)
        .ok_or(LedgerError::MathOverflow)?;
    pool.total_staked = pool
        .total_staked
        .checked_sub(amount)
        .ok_or(LedgerError::MathOverflow)?;
    pool.total_claimed_rewards = pool
        .total_claimed_rewards
        .checked_add(pending)
        .ok_or(LedgerError::MathOverflow)?;

    let closing = record.deposited == 0;
    if closing {
        pool.staker_count = pool.staker_count.saturating_sub(1);
    }

    let payout = net.checked_add(pending).ok_or(LedgerError::MathOverflow)?;
    let signer_seeds: &[&[&[u8]]] = &[&[b"staking_pool", &[pool_bump]]];
    transfer::pay_from_vault(
        &ctx.accounts.token_program,
        &ctx.accounts.vault,
        &ctx.accounts.staker_token_account,
        pool_ai.clone(),
        signer_seeds,
        payout,
    )?;
    transfer::pay_from_vault(
        &ctx.accounts.token_program,
        &ctx.accounts.vault,
        &ctx.accounts.admin_fee_account,
        pool_ai,
        signer_seeds,
        fee,
    )?;

    // A zeroed deposit leaves the active-holder set: close the record back to
    // its owner. A later stake re-creates it from scratch.
    if closing {
        ctx.accounts
            .stake_record
            .close(ctx.accounts.staker.to_account_info())?;
    }

    emit!(Unstaked {
        owner: ctx.accounts.staker.key(),
        gross: amount,
        fee,
        net,
        rewards: pending,
        remaining: if closing { 0 } else { ctx.accounts.stake_record.deposited },
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Unstake<'info> {
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

    #[account(
        mut,
        constraint = admin_fee_account.mint == pool.mint @ LedgerError::InvalidTokenMint,
        constraint = admin_fee_account.owner == pool.admin @ LedgerError::InvalidTokenAccount,
    )]
    pub admin_fee_account: Account<'info, TokenAccount>,

    #[account(mut)]
    pub staker: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct Unstaked {
    pub owner: Pubkey,
    pub gross: u64,
    pub fee: u64,
    pub net: u64,
    pub rewards: u64,
    pub remaining: u64,
}
