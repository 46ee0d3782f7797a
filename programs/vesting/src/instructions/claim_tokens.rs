use anchor_lang::prelude::*;
use anchor_spl::associated_token::AssociatedToken;
use anchor_spl::token_interface::{
    transfer_checked, Mint, TokenAccount, TokenInterface, TransferChecked,
};

use crate::constants::{EMPLOYEE_SEED, VEST_SEED};
use crate::error::VestingError;
use crate::state::{Employee, Vest};

pub fn claim_tokens(ctx: Context<ClaimTokens>) -> Result<()> {
    // Single clock read: the cliff check and the amount must agree.
    let now = Clock::get()?.unix_timestamp;

    let employee = &mut ctx.accounts.employee;
    let unlocked = employee.unlocked_at(now)?;
    msg!(
        "unlocked: {}, withdrawn: {}",
        unlocked,
        employee.total_withdrawn
    );

    // Books the withdrawal; a failed transfer below reverts it with the tx.
    let amount = employee.claim(now)?;
    let total_withdrawn = employee.total_withdrawn;
    msg!("claiming: {}", amount);

    ensure_treasury_covers(ctx.accounts.treasury.amount, amount)?;

    let vest = &ctx.accounts.vest;
    let signer_seeds: &[&[&[u8]]] = &[&[VEST_SEED, vest.company_name.as_bytes(), &[vest.bump]]];
    transfer_checked(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            TransferChecked {
                from: ctx.accounts.treasury.to_account_info(),
                mint: ctx.accounts.mint.to_account_info(),
                to: ctx.accounts.beneficiary_ata.to_account_info(),
                authority: vest.to_account_info(),
            },
            signer_seeds,
        ),
        amount,
        ctx.accounts.mint.decimals,
    )?;

    emit!(TokensClaimed {
        vest: vest.key(),
        beneficiary: ctx.accounts.beneficiary.key(),
        amount,
        total_withdrawn,
        total_amount: ctx.accounts.employee.total_amount,
        timestamp: now,
    });

    Ok(())
}

fn ensure_treasury_covers(balance: u64, amount: u64) -> std::result::Result<(), VestingError> {
    if balance < amount {
        return Err(VestingError::InsufficientCustodyBalance);
    }
    Ok(())
}

#[derive(Accounts)]
pub struct ClaimTokens<'info> {
    #[account(mut)]
    pub beneficiary: Signer<'info>,

    #[account(
        seeds = [VEST_SEED, vest.company_name.as_bytes()],
        bump = vest.bump,
        has_one = mint @ VestingError::InvalidTokenMint,
        has_one = treasury,
    )]
    pub vest: Account<'info, Vest>,

    #[account(
        mut,
        seeds = [EMPLOYEE_SEED, beneficiary.key().as_ref(), vest.key().as_ref()],
        bump = employee.bump,
        has_one = beneficiary @ VestingError::Unauthorized,
        has_one = vest,
    )]
    pub employee: Account<'info, Employee>,

    pub mint: InterfaceAccount<'info, Mint>,

    #[account(mut)]
    pub treasury: InterfaceAccount<'info, TokenAccount>,

    #[account(
        init_if_needed,
        payer = beneficiary,
        associated_token::mint = mint,
        associated_token::authority = beneficiary,
        associated_token::token_program = token_program,
    )]
    pub beneficiary_ata: InterfaceAccount<'info, TokenAccount>,

    pub token_program: Interface<'info, TokenInterface>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

#[event]
pub struct TokensClaimed {
    pub vest: Pubkey,
    pub beneficiary: Pubkey,
    pub amount: u64,
    pub total_withdrawn: u64,
    pub total_amount: u64,
    pub timestamp: i64,
}
