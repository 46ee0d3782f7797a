use anchor_lang::prelude::*;
use anchor_spl::associated_token::AssociatedToken;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

use crate::constants::VEST_SEED;
use crate::state::Vest;

pub fn create_vest(ctx: Context<CreateVest>, company_name: String) -> Result<()> {
    let owner = ctx.accounts.owner.key();
    let mint = ctx.accounts.mint.key();
    let treasury = ctx.accounts.treasury.key();

    // `init_if_needed` hands us the existing account on a repeat call, and
    // `init` rejects it with `DuplicatePlan`.
    let vest = &mut ctx.accounts.vest;
    vest.init(owner, mint, treasury, company_name, ctx.bumps.vest)?;

    emit!(VestCreated {
        vest: vest.key(),
        owner: vest.owner,
        mint: vest.mint,
        treasury: vest.treasury,
        company_name: vest.company_name.clone(),
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(company_name: String)]
pub struct CreateVest<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    #[account(
        init_if_needed,
        payer = owner,
        space = 8 + Vest::SIZE,
        seeds = [VEST_SEED, Vest::name_seed(&company_name)],
        bump
    )]
    pub vest: Account<'info, Vest>,

    #[account(mint::token_program = token_program)]
    pub mint: InterfaceAccount<'info, Mint>,

    #[account(
        init_if_needed,
        payer = owner,
        associated_token::mint = mint,
        associated_token::authority = vest,
        associated_token::token_program = token_program,
    )]
    pub treasury: InterfaceAccount<'info, TokenAccount>,

    pub token_program: Interface<'info, TokenInterface>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

#[event]
pub struct VestCreated {
    pub vest: Pubkey,
    pub owner: Pubkey,
    pub mint: Pubkey,
    pub treasury: Pubkey,
    pub company_name: String,
}
