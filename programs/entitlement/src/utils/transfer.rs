//! Adapters around the SPL token collaborator. Every payout path finalizes
//! ledger state before calling into these, and any CPI failure surfaces as
//! `TransferFailed` so callers see one outcome type.

use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::error::LedgerError;

/// Pull `amount` from a caller-owned account, signed by the caller.
/// Zero amounts are a no-op (empty fee legs skip the CPI).
pub fn pull_from_signer<'info>(
    token_program: &Program<'info, Token>,
    from: &Account<'info, TokenAccount>,
    to: &Account<'info, TokenAccount>,
    authority: &Signer<'info>,
    amount: u64,
) -> Result<()> {
    if amount == 0 {
        return Ok(());
    }
    token::transfer(
        CpiContext::new(
            token_program.to_account_info(),
            Transfer {
                from: from.to_account_info(),
                to: to.to_account_info(),
                authority: authority.to_account_info(),
            },
        ),
        amount,
    )
    .map_err(|_| error!(LedgerError::TransferFailed))
}

/// Pay `amount` out of a vault, signed by the owning config PDA.
pub fn pay_from_vault<'info>(
    token_program: &Program<'info, Token>,
    vault: &Account<'info, TokenAccount>,
    to: &Account<'info, TokenAccount>,
    vault_authority: AccountInfo<'info>,
    signer_seeds: &[&[&[u8]]],
    amount: u64,
) -> Result<()> {
    if amount == 0 {
        return Ok(());
    }
    token::transfer(
        CpiContext::new_with_signer(
            token_program.to_account_info(),
            Transfer {
                from: vault.to_account_info(),
                to: to.to_account_info(),
                authority: vault_authority,
            },
            signer_seeds,
        ),
        amount,
    )
    .map_err(|_| error!(LedgerError::TransferFailed))
}
