//! Program-wide constants.

/// Seed prefix for the company vesting PDA: `[VEST_SEED, company_name]`.
pub const VEST_SEED: &[u8] = b"vest";

/// Seed prefix for the employee vesting PDA: `[EMPLOYEE_SEED, beneficiary, vest]`.
pub const EMPLOYEE_SEED: &[u8] = b"employee";

/// Company names double as a PDA seed, so they share the 32-byte seed limit.
pub const MAX_COMPANY_NAME_LEN: usize = 32;
