use anchor_lang::prelude::*;

/// Custom error codes for the company vesting program.
///
/// The first two variants keep their historical codes (6000, 6001).
#[error_code]
pub enum VestingError {
    #[msg("Claiming is not available yet")]
    ClaimNotAvailableYet,

    #[msg("Claimable amount is 0")]
    NothingToClaim,

    #[msg("Invalid schedule: require start <= cliff <= end and total amount > 0")]
    InvalidSchedule,

    #[msg("Invalid company name (must be 1..=32 bytes)")]
    InvalidCompanyName,

    #[msg("A vesting plan already exists for this company")]
    DuplicatePlan,

    #[msg("A schedule already exists for this beneficiary")]
    DuplicateSchedule,

    #[msg("Unauthorized: signer does not match the stored authority")]
    Unauthorized,

    #[msg("Arithmetic overflow")]
    ArithmeticOverflow,

    #[msg("Insufficient treasury balance")]
    InsufficientCustodyBalance,

    #[msg("Invalid token mint")]
    InvalidTokenMint,
}
