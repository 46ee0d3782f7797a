use anchor_lang::prelude::*;

use crate::constants::{EMPLOYEE_SEED, VEST_SEED};
use crate::state::{CreateEmployeeArgs, Employee, Vest};

pub fn create_employee(ctx: Context<CreateEmployee>, args: CreateEmployeeArgs) -> Result<()> {
    ctx.accounts.vest.check_owner(&ctx.accounts.owner.key())?;

    let vest_key = ctx.accounts.vest.key();
    let beneficiary = ctx.accounts.beneficiary.key();
    let employee = &mut ctx.accounts.employee;
    employee.init(beneficiary, vest_key, &args, ctx.bumps.employee)?;

    emit!(EmployeeCreated {
        vest: vest_key,
        employee: employee.key(),
        beneficiary: employee.beneficiary,
        start_time: employee.start_time,
        cliff_time: employee.cliff_time,
        end_time: employee.end_time,
        total_amount: employee.total_amount,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct CreateEmployee<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    pub beneficiary: SystemAccount<'info>,

    #[account(
        seeds = [VEST_SEED, vest.company_name.as_bytes()],
        bump = vest.bump,
    )]
    pub vest: Account<'info, Vest>,

    #[account(
        init_if_needed,
        payer = owner,
        space = 8 + Employee::SIZE,
        seeds = [EMPLOYEE_SEED, beneficiary.key().as_ref(), vest.key().as_ref()],
        bump
    )]
    pub employee: Account<'info, Employee>,

    pub system_program: Program<'info, System>,
}

#[event]
pub struct EmployeeCreated {
    pub vest: Pubkey,
    pub employee: Pubkey,
    pub beneficiary: Pubkey,
    pub start_time: i64,
    pub cliff_time: i64,
    pub end_time: i64,
    pub total_amount: u64,
}
