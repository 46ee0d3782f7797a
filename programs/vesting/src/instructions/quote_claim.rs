use anchor_lang::prelude::*;

use crate::constants::{EMPLOYEE_SEED, VEST_SEED};
use crate::state::{Employee, Vest};
use crate::utils::schedule;

/// Read-only preview of a claim at the current clock. Never fails on an
/// early or empty claim; it reports zero instead.
pub fn quote_claim(ctx: Context<QuoteClaim>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let employee = &ctx.accounts.employee;

    let unlocked = employee.unlocked_at(now)?;
    let claimable = schedule::claimable_amount(unlocked, employee.total_withdrawn)?;

    emit!(ClaimQuote {
        vest: ctx.accounts.vest.key(),
        beneficiary: employee.beneficiary,
        timestamp: now,
        cliff_reached: now >= employee.cliff_time,
        unlocked_amount: unlocked,
        total_withdrawn: employee.total_withdrawn,
        claimable,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct QuoteClaim<'info> {
    #[account(
        seeds = [VEST_SEED, vest.company_name.as_bytes()],
        bump = vest.bump,
    )]
    pub vest: Account<'info, Vest>,

    #[account(
        seeds = [EMPLOYEE_SEED, employee.beneficiary.as_ref(), vest.key().as_ref()],
        bump = employee.bump,
        has_one = vest,
    )]
    pub employee: Account<'info, Employee>,
}

#[event]
pub struct ClaimQuote {
    pub vest: Pubkey,
    pub beneficiary: Pubkey,
    pub timestamp: i64,
    pub cliff_reached: bool,
    pub unlocked_amount: u64,
    pub total_withdrawn: u64,
    pub claimable: u64,
}
