use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::constants::MAX_AIRDROP_INDICES;
use crate::error::LedgerError;
use crate::state::AirdropState;
use crate::utils::transfer;

/// Pays the committed `(wallet, index, amount)` allocation. Permissionless:
/// anyone may submit the proof; funds only ever reach the committed wallet.
pub fn claim_airdrop(
    ctx: Context<ClaimAirdrop>,
    index: u64,
    amount: u64,
    wallet: Pubkey,
    proof: Vec<[u8; 32]>,
) -> Result<()> {
    let state_ai = ctx.accounts.state.to_account_info();
    let state_bump = ctx.bumps.state;

    require!(amount > 0, LedgerError::InvalidInput);
    require!(index < MAX_AIRDROP_INDICES, LedgerError::InvalidInput);
    require_keys_eq!(
        ctx.accounts.recipient_token_account.owner,
        wallet,
        LedgerError::InvalidTokenAccount
    );

    {
        let mut st = ctx.accounts.state.load_mut()?;
        require_keys_eq!(
            ctx.accounts.vault.mint,
            st.mint,
            LedgerError::InvalidTokenMint
        );
        require_keys_eq!(
            ctx.accounts.recipient_token_account.mint,
            st.mint,
            LedgerError::InvalidTokenMint
        );
        require!(st.enabled == 1, LedgerError::MechanismDisabled);
        st.authorize_claim(index, &wallet, amount, &proof)?;

        require!(
            ctx.accounts.vault.amount >= amount,
            LedgerError::InsufficientFunds
        );

        // Bit first, transfer after: a reentrant claim for this index must
        // observe the claimed state.
        st.set_claimed(index);
        st.total_claimed = st
            .total_claimed
            .checked_add(amount)
            .ok_or(LedgerError::MathOverflow)?;
        st.claim_count = st
            .claim_count
            .checked_add(1)
            .ok_or(LedgerError::MathOverflow)?;
    }

    let signer_seeds: &[&[&[u8]]] = &[&[b"airdrop_state", &[state_bump]]];
    transfer::pay_from_vault(
        &ctx.accounts.token_program,
        &ctx.accounts.vault,
        &ctx.accounts.recipient_token_account,
        state_ai,
        signer_seeds,
        amount,
    )?;

    emit!(AirdropClaimed {
        wallet,
        index,
        amount,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct ClaimAirdrop<'info> {
    #[account(mut, seeds = [b"airdrop_state"], bump)]
    pub state: AccountLoader<'info, AirdropState>,

    #[account(
        mut,
        seeds = [b"airdrop_vault", state.key().as_ref()],
        bump
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(mut)]
    pub recipient_token_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct AirdropClaimed {
    pub wallet: Pubkey,
    pub index: u64,
    pub amount: u64,
}
