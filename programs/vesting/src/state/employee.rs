use anchor_lang::prelude::*;

use crate::constants::EMPLOYEE_SEED;
use crate::error::VestingError;
use crate::utils::schedule;

/// Schedule supplied by the plan owner when adding a beneficiary.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct CreateEmployeeArgs {
    pub start_time: i64,
    pub end_time: i64,
    pub cliff_time: i64,
    pub total_amount: u64,
}

impl CreateEmployeeArgs {
    pub fn validate(&self) -> std::result::Result<(), VestingError> {
        schedule::validate_schedule(
            self.start_time,
            self.cliff_time,
            self.end_time,
            self.total_amount,
        )
    }
}

/// One beneficiary's schedule and withdrawal ledger under a plan.
/// Seeds: `[EMPLOYEE_SEED, beneficiary, vest]`.
#[account]
pub struct Employee {
    pub beneficiary: Pubkey,
    /// Owning plan (relation only).
    pub vest: Pubkey,
    /// Unix seconds; start <= cliff <= end.
    pub start_time: i64,
    pub cliff_time: i64,
    pub end_time: i64,
    /// Entitlement over the whole schedule, in base units.
    pub total_amount: u64,
    /// Cumulative amount paid out. Only grows, never exceeds `total_amount`.
    pub total_withdrawn: u64,
    pub bump: u8,
}

impl Employee {
    pub const SIZE: usize =
        32 + // beneficiary
        32 + // vest
        8 +  // start_time
        8 +  // cliff_time
        8 +  // end_time
        8 +  // total_amount
        8 +  // total_withdrawn
        1;   // bump

    pub fn pda(beneficiary: &Pubkey, vest: &Pubkey) -> (Pubkey, u8) {
        Pubkey::find_program_address(
            &[EMPLOYEE_SEED, beneficiary.as_ref(), vest.as_ref()],
            &crate::ID,
        )
    }

    /// Validated schedules always carry a non-zero total, so a zero total
    /// marks a zeroed, never-written account.
    pub fn is_initialized(&self) -> bool {
        self.total_amount != 0
    }

    /// Writes a validated schedule into a freshly allocated record.
    pub fn init(
        &mut self,
        beneficiary: Pubkey,
        vest: Pubkey,
        args: &CreateEmployeeArgs,
        bump: u8,
    ) -> std::result::Result<(), VestingError> {
        args.validate()?;
        if self.is_initialized() {
            return Err(VestingError::DuplicateSchedule);
        }
        self.beneficiary = beneficiary;
        self.vest = vest;
        self.start_time = args.start_time;
        self.cliff_time = args.cliff_time;
        self.end_time = args.end_time;
        self.total_amount = args.total_amount;
        self.total_withdrawn = 0;
        self.bump = bump;
        Ok(())
    }

    pub fn is_fully_claimed(&self) -> bool {
        self.total_withdrawn == self.total_amount
    }

    pub fn unlocked_at(&self, now: i64) -> std::result::Result<u64, VestingError> {
        schedule::unlocked_amount(
            self.start_time,
            self.cliff_time,
            self.end_time,
            self.total_amount,
            now,
        )
    }

    /// Amount a claim at `now` would pay out. Fails instead of returning 0:
    /// `ClaimNotAvailableYet` before the cliff, `NothingToClaim` afterwards.
    pub fn claimable_at(&self, now: i64) -> std::result::Result<u64, VestingError> {
        if now < self.cliff_time {
            return Err(VestingError::ClaimNotAvailableYet);
        }
        let unlocked = self.unlocked_at(now)?;
        let claimable = schedule::claimable_amount(unlocked, self.total_withdrawn)?;
        if claimable == 0 {
            return Err(VestingError::NothingToClaim);
        }
        Ok(claimable)
    }

    /// Books a payout against the ledger. Leaves the record untouched on error.
    pub fn record_withdrawal(&mut self, amount: u64) -> std::result::Result<(), VestingError> {
        let next = self
            .total_withdrawn
            .checked_add(amount)
            .ok_or(VestingError::ArithmeticOverflow)?;
        if next > self.total_amount {
            return Err(VestingError::ArithmeticOverflow);
        }
        self.total_withdrawn = next;
        Ok(())
    }

    /// Full claim transition for `now`: compute, then book. Returns the
    /// amount the caller must transfer out of the treasury.
    pub fn claim(&mut self, now: i64) -> std::result::Result<u64, VestingError> {
        let claimable = self.claimable_at(now)?;
        self.record_withdrawal(claimable)?;
        Ok(claimable)
    }
}
