use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::error::LedgerError;
use crate::state::{StakeRecord, StakingPool};
use crate::utils::{accrual, fees, transfer};

pub fn stake(ctx: Context<Stake>, amount: u64) -> Result<()> {
    let pool_ai = ctx.accounts.pool.to_account_info();
    let pool_bump = ctx.bumps.pool;

    require!(amount > 0, LedgerError::InvalidInput);

    let pool = &mut ctx.accounts.pool;
    require!(pool.enabled, LedgerError::MechanismDisabled);

    let (fee, net) = fees::split_fee(amount, pool.staking_fee_bps)?;
    require!(net > 0, LedgerError::InvalidInput);

    let now = Clock::get()?.unix_timestamp;
    let record = &mut ctx.accounts.stake_record;

    // A freshly initialized record is all zeros; a record that survived a
    // partial unstake keeps its deposit and window.
    let is_new = record.deposited == 0 && record.staked_at == 0;
    let mut settled: u64 = 0;
    if is_new {
        record.owner = ctx.accounts.staker.key();
        record.staked_at = now;
        record.last_claimed_at = now;
        record.cumulative_earned = 0;
        pool.staker_count = pool
            .staker_count
            .checked_add(1)
            .ok_or(LedgerError::MathOverflow)?;
    } else {
        // Settle what the existing deposit has earned before it grows; the
        // topped-up principal must not accrue for time it was never staked.
        settled = accrual::staking_pending(
            record.deposited,
            pool.reward_rate,
            pool.reward_interval,
            record.staked_at,
            record.last_claimed_at,
            now,
            ctx.accounts.vault.amount,
            pool.total_staked,
        )?;
        record.last_claimed_at = now;
        record.cumulative_earned = record
            .cumulative_earned
            .checked_add(settled)
            .ok_or(LedgerError::MathOverflow)?;
        pool.total_claimed_rewards = pool
            .total_claimed_rewards
            .checked_add(settled)
            .ok_or(LedgerError::MathOverflow)?;
    }
    record.deposited = record
        .deposited
        .checked_add(net)
        .ok_or(LedgerError::MathOverflow)?;
    pool.total_staked = pool
        .total_staked
        .checked_add(net)
        .ok_or(LedgerError::MathOverflow)?;

    // Net goes into custody, fee to the admin; together exactly `amount`.
    transfer::pull_from_signer(
        &ctx.accounts.token_program,
        &ctx.accounts.staker_token_account,
        &ctx.accounts.vault,
        &ctx.accounts.staker,
        net,
    )?;
    transfer::pull_from_signer(
        &ctx.accounts.token_program,
        &ctx.accounts.staker_token_account,
        &ctx.accounts.admin_fee_account,
        &ctx.accounts.staker,
        fee,
    )?;

    if settled > 0 {
        let signer_seeds: &[&[&[u8]]] = &[&[b"staking_pool", &[pool_bump]]];
        transfer::pay_from_vault(
            &ctx.accounts.token_program,
            &ctx.accounts.vault,
            &ctx.accounts.staker_token_account,
            pool_ai,
            signer_seeds,
            settled,
        )?;
    }

    emit!(Staked {
        owner: ctx.accounts.staker.key(),
        gross: amount,
        fee,
        net,
        rewards: settled,
        deposited: ctx.accounts.stake_record.deposited,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Stake<'info> {
    #[account(mut, seeds = [b"staking_pool"], bump)]
    pub pool: Account<'info, StakingPool>,

    #[account(
        init_if_needed,
        payer = staker,
        space = 8 + StakeRecord::SIZE,
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
    pub system_program: Program<'info, System>,
}

#[event]
pub struct Staked {
    pub owner: Pubkey,
    pub gross: u64,
    pub fee: u64,
    pub net: u64,
    pub rewards: u64,
    pub deposited: u64,
}
