use anchor_lang::prelude::*;

use crate::constants::{MAX_COMPANY_NAME_LEN, VEST_SEED};
use crate::error::VestingError;

/// Company vesting plan PDA, one per company name.
/// Seeds: `[VEST_SEED, company_name]`.
#[account]
pub struct Vest {
    /// Plan administrator; the only key allowed to add employee schedules.
    pub owner: Pubkey,
    /// Token mint distributed by this plan.
    pub mint: Pubkey,
    /// ATA of this PDA for `mint`; holds the unclaimed balance.
    pub treasury: Pubkey,
    /// PDA seed, 1..=32 bytes.
    pub company_name: String,
    pub bump: u8,
}

impl Vest {
    pub const SIZE: usize =
        32 + // owner
        32 + // mint
        32 + // treasury
        4 + MAX_COMPANY_NAME_LEN + // company_name (len prefix + bytes)
        1;   // bump

    /// Name bytes as used in the PDA seed, capped at the seed limit so that
    /// derivation never fails. Names over the cap are rejected by `init`.
    pub fn name_seed(company_name: &str) -> &[u8] {
        let bytes = company_name.as_bytes();
        &bytes[..bytes.len().min(MAX_COMPANY_NAME_LEN)]
    }

    pub fn pda(company_name: &str) -> std::result::Result<(Pubkey, u8), VestingError> {
        validate_company_name(company_name)?;
        Pubkey::try_find_program_address(&[VEST_SEED, company_name.as_bytes()], &crate::ID)
            .ok_or(VestingError::InvalidCompanyName)
    }

    /// Associated token account owned by the plan PDA for `mint`.
    pub fn treasury_address(vest: &Pubkey, mint: &Pubkey, token_program: &Pubkey) -> Pubkey {
        let seeds: &[&[u8]] = &[vest.as_ref(), token_program.as_ref(), mint.as_ref()];
        let (ata, _) = Pubkey::find_program_address(seeds, &anchor_spl::associated_token::ID);
        ata
    }

    /// A freshly allocated account is zeroed, and the owner always signs at
    /// creation, so a non-default owner means the plan already exists.
    pub fn is_initialized(&self) -> bool {
        self.owner != Pubkey::default()
    }

    /// Writes a new plan into a freshly allocated record.
    pub fn init(
        &mut self,
        owner: Pubkey,
        mint: Pubkey,
        treasury: Pubkey,
        company_name: String,
        bump: u8,
    ) -> std::result::Result<(), VestingError> {
        validate_company_name(&company_name)?;
        if self.is_initialized() {
            return Err(VestingError::DuplicatePlan);
        }
        self.owner = owner;
        self.mint = mint;
        self.treasury = treasury;
        self.company_name = company_name;
        self.bump = bump;
        Ok(())
    }

    pub fn check_owner(&self, signer: &Pubkey) -> std::result::Result<(), VestingError> {
        if *signer != self.owner {
            return Err(VestingError::Unauthorized);
        }
        Ok(())
    }
}

pub fn validate_company_name(company_name: &str) -> std::result::Result<(), VestingError> {
    if company_name.is_empty() || company_name.len() > MAX_COMPANY_NAME_LEN {
        return Err(VestingError::InvalidCompanyName);
    }
    Ok(())
}
