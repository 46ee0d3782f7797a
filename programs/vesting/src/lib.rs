#![allow(clippy::result_large_err)]

use anchor_lang::prelude::*;

pub mod constants;
pub mod error;
pub mod instructions;
pub mod state;
pub mod utils;

pub use instructions::*;
pub use state::CreateEmployeeArgs;

declare_id!("61EiRiRNSU4ZEhnn8JpC6L9VRHz6oKvD9YzSP6bNZNWp");

#[program]
pub mod company_vesting {
    use super::*;

    /// Registers a company plan and its treasury ATA.
    pub fn create_vest(ctx: Context<CreateVest>, company_name: String) -> Result<()> {
        instructions::create_vest(ctx, company_name)
    }

    /// Adds one beneficiary schedule under an existing plan. Owner only.
    pub fn create_employee(ctx: Context<CreateEmployee>, args: CreateEmployeeArgs) -> Result<()> {
        instructions::create_employee(ctx, args)
    }

    /// Pays out everything unlocked and not yet withdrawn. Beneficiary only.
    pub fn claim_tokens(ctx: Context<ClaimTokens>) -> Result<()> {
        instructions::claim_tokens(ctx)
    }

    /// Emits a `ClaimQuote` for the schedule as of now; never mutates.
    pub fn quote_claim(ctx: Context<QuoteClaim>) -> Result<()> {
        instructions::quote_claim(ctx)
    }
}
