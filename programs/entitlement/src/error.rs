use anchor_lang::prelude::*;

/// Error taxonomy shared by all three mechanisms.
#[error_code]
pub enum LedgerError {
    #[msg("Invalid input: zero amount, null account, or out-of-range parameter")]
    InvalidInput,

    #[msg("Beneficiary and amount sequences differ in length")]
    ArrayLengthMismatch,

    #[msg("Empty batch")]
    EmptyBatch,

    #[msg("Batch size too large")]
    BatchTooLarge,

    #[msg("Vesting book is full")]
    BeneficiaryListFull,

    #[msg("A schedule already exists for this beneficiary")]
    DuplicateSchedule,

    #[msg("Airdrop index already claimed")]
    AlreadyClaimed,

    #[msg("Membership proof does not verify against the committed root")]
    InvalidProof,

    #[msg("Cliff not reached")]
    CliffNotReached,

    #[msg("No schedule or stake in flight for this account")]
    NoScheduleInFlight,

    #[msg("Nothing currently due")]
    NothingDue,

    #[msg("Vault balance cannot cover the computed payout")]
    InsufficientFunds,

    #[msg("Token transfer failed")]
    TransferFailed,

    #[msg("Unauthorized: admin signature required")]
    Unauthorized,

    #[msg("Mechanism is disabled")]
    MechanismDisabled,

    #[msg("Cannot sweep the principal/reward token")]
    SweepPrincipalDenied,

    #[msg("Invalid token mint")]
    InvalidTokenMint,

    #[msg("Invalid token account")]
    InvalidTokenAccount,

    #[msg("Math overflow")]
    MathOverflow,

    #[msg("Internal ledger invariant violated")]
    LedgerInvariantViolated,
}
