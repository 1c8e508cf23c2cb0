use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::error::LedgerError;
use crate::state::AirdropState;

pub fn initialize_airdrop(ctx: Context<InitializeAirdrop>, root: [u8; 32]) -> Result<()> {
    require!(root != [0u8; 32], LedgerError::InvalidInput);

    let mut st = ctx.accounts.state.load_init()?;
    st.mint = ctx.accounts.mint.key();
    st.admin = ctx.accounts.admin.key();
    st.root = root;
    st.total_claimed = 0;
    st.claim_count = 0;
    st.enabled = 1;
    // bitmap starts zeroed with the account

    emit!(AirdropInitialized {
        mint: st.mint,
        admin: st.admin,
        root,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct InitializeAirdrop<'info> {
    #[account(
        init,
        payer = admin,
        space = AirdropState::space(),
        seeds = [b"airdrop_state"],
        bump
    )]
    pub state: AccountLoader<'info, AirdropState>,

    #[account(
        init,
        payer = admin,
        token::mint = mint,
        token::authority = state,
        seeds = [b"airdrop_vault", state.key().as_ref()],
        bump
    )]
    pub vault: Account<'info, TokenAccount>,

    pub mint: Account<'info, Mint>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

#[event]
pub struct AirdropInitialized {
    pub mint: Pubkey,
    pub admin: Pubkey,
    pub root: [u8; 32],
}
