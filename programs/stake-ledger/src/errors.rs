use anchor_lang::prelude::*;

/// Stake Ledger Error Codes
///
/// Every failure an instruction can signal. Each error aborts the whole
/// transaction; no partial state is ever committed.
#[error_code]
pub enum ErrorCode {
    #[msg("Stake account already initialized")]
    AlreadyInitialized,

    #[msg("Stake account does not exist")]
    RecordNotFound,

    #[msg("Unauthorized")]
    Unauthorized,

    #[msg("Amount must be greater than zero")]
    InvalidAmount,

    #[msg("Unstake amount exceeds staked balance")]
    InsufficientStake,

    #[msg("Insufficient lamports for transfer")]
    InsufficientFunds,

    #[msg("Withdrawal would drop custody below the rent-exempt minimum")]
    RetentionViolation,

    #[msg("Arithmetic overflow")]
    ArithmeticOverflow,

    #[msg("No valid bump seed found for address derivation")]
    DerivationExhausted,
}
