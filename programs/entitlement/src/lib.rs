//! Entitlement & accrual ledger: three token-economics mechanisms sharing one
//! abstraction, a per-account entitlement that unlocks over time (vesting),
//! at a rate (staking rewards), or upon proof (merkle airdrop), paid out at
//! most once per unit of entitlement and never beyond the backing vault.
//!
//! Every payout path finalizes ledger state before the outbound token CPI.

use anchor_lang::prelude::*;

pub mod constants;
pub mod error;
pub mod instructions;
pub mod state;
pub mod utils;

use instructions::*;

declare_id!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");

#[program]
pub mod entitlement {
    use super::*;

    // ----- vesting -----

    pub fn initialize_vesting(
        ctx: Context<InitializeVesting>,
        start_ts: i64,
        end_ts: i64,
        cliff_duration: i64,
    ) -> Result<()> {
        instructions::initialize_vesting::initialize_vesting(ctx, start_ts, end_ts, cliff_duration)
    }

    pub fn create_schedule(
        ctx: Context<CreateSchedule>,
        beneficiary: Pubkey,
        amount: u64,
    ) -> Result<()> {
        instructions::create_schedule::create_schedule(ctx, beneficiary, amount)
    }

    pub fn create_schedule_batch(
        ctx: Context<CreateSchedule>,
        beneficiaries: Vec<Pubkey>,
        amounts: Vec<u64>,
    ) -> Result<()> {
        instructions::create_schedule::create_schedule_batch(ctx, beneficiaries, amounts)
    }

    pub fn draw_down(ctx: Context<DrawDown>) -> Result<()> {
        instructions::draw_down::draw_down(ctx)
    }

    pub fn emit_vesting_quote(ctx: Context<VestingQuote>, wallet: Pubkey) -> Result<()> {
        instructions::vesting_quote::emit_vesting_quote(ctx, wallet)
    }

    pub fn emit_vesting_page(ctx: Context<VestingQuote>, offset: u32, limit: u8) -> Result<()> {
        instructions::vesting_quote::emit_vesting_page(ctx, offset, limit)
    }

    pub fn set_vesting_enabled(ctx: Context<ToggleVesting>, enabled: bool) -> Result<()> {
        instructions::toggle::set_vesting_enabled(ctx, enabled)
    }

    pub fn sweep_foreign_vesting(ctx: Context<SweepForeignVesting>) -> Result<()> {
        instructions::sweep_foreign::sweep_foreign_vesting(ctx)
    }

    // ----- staking -----

    pub fn initialize_staking(
        ctx: Context<InitializeStaking>,
        reward_rate: u64,
        reward_interval: i64,
        staking_fee_bps: u64,
        unstaking_fee_bps: u64,
        cliff_time: i64,
    ) -> Result<()> {
        instructions::initialize_staking::initialize_staking(
            ctx,
            reward_rate,
            reward_interval,
            staking_fee_bps,
            unstaking_fee_bps,
            cliff_time,
        )
    }

    pub fn stake(ctx: Context<Stake>, amount: u64) -> Result<()> {
        instructions::stake::stake(ctx, amount)
    }

    pub fn unstake(ctx: Context<Unstake>, amount: u64) -> Result<()> {
        instructions::unstake::unstake(ctx, amount)
    }

    pub fn claim_rewards(ctx: Context<ClaimRewards>) -> Result<()> {
        instructions::claim_rewards::claim_rewards(ctx)
    }

    pub fn emit_staking_quote(ctx: Context<StakingQuote>, owner: Pubkey) -> Result<()> {
        instructions::staking_quote::emit_staking_quote(ctx, owner)
    }

    pub fn update_staking_params(
        ctx: Context<UpdateStakingParams>,
        reward_rate: u64,
        reward_interval: i64,
        staking_fee_bps: u64,
        unstaking_fee_bps: u64,
        cliff_time: i64,
    ) -> Result<()> {
        instructions::update_staking_params::update_staking_params(
            ctx,
            reward_rate,
            reward_interval,
            staking_fee_bps,
            unstaking_fee_bps,
            cliff_time,
        )
    }

    pub fn set_staking_enabled(ctx: Context<ToggleStaking>, enabled: bool) -> Result<()> {
        instructions::toggle::set_staking_enabled(ctx, enabled)
    }

    pub fn sweep_foreign_staking(ctx: Context<SweepForeignStaking>) -> Result<()> {
        instructions::sweep_foreign::sweep_foreign_staking(ctx)
    }

    // ----- airdrop -----

    pub fn initialize_airdrop(ctx: Context<InitializeAirdrop>, root: [u8; 32]) -> Result<()> {
        instructions::initialize_airdrop::initialize_airdrop(ctx, root)
    }

    pub fn claim_airdrop(
        ctx: Context<ClaimAirdrop>,
        index: u64,
        amount: u64,
        wallet: Pubkey,
        proof: Vec<[u8; 32]>,
    ) -> Result<()> {
        instructions::claim_airdrop::claim_airdrop(ctx, index, amount, wallet, proof)
    }

    pub fn set_airdrop_root(ctx: Context<SetAirdropRoot>, root: [u8; 32]) -> Result<()> {
        instructions::set_root::set_airdrop_root(ctx, root)
    }

    pub fn set_airdrop_enabled(ctx: Context<ToggleAirdrop>, enabled: bool) -> Result<()> {
        instructions::toggle::set_airdrop_enabled(ctx, enabled)
    }

    pub fn sweep_foreign_airdrop(ctx: Context<SweepForeignAirdrop>) -> Result<()> {
        instructions::sweep_foreign::sweep_foreign_airdrop(ctx)
    }
}
