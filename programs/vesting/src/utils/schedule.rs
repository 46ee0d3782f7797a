//! Cliff-gated linear vesting math. Every function here is pure; the caller
//! reads the clock once and passes `now` in.
//!
//! - now < cliff                 => 0
//! - now >= end (or start == end) => total
//! - otherwise                   => floor(total * (now - start) / (end - start))
//!
//! The product is formed in u128 before dividing, so any u64 total times any
//! i64 duration fits.

use crate::error::VestingError;

/// Creation-time check for a proposed schedule.
/// Equal start/cliff/end is allowed (vests fully at `end_time`).
pub fn validate_schedule(
    start_time: i64,
    cliff_time: i64,
    end_time: i64,
    total_amount: u64,
) -> Result<(), VestingError> {
    if total_amount == 0 {
        return Err(VestingError::InvalidSchedule);
    }
    if start_time > cliff_time || cliff_time > end_time {
        return Err(VestingError::InvalidSchedule);
    }
    // The duration has to be representable for the accrual math later on.
    end_time
        .checked_sub(start_time)
        .ok_or(VestingError::InvalidSchedule)?;
    Ok(())
}

/// Total amount unlocked as of `now`, not reduced by prior withdrawals.
pub fn unlocked_amount(
    start_time: i64,
    cliff_time: i64,
    end_time: i64,
    total_amount: u64,
    now: i64,
) -> Result<u64, VestingError> {
    if now < cliff_time {
        return Ok(0);
    }
    if now >= end_time || end_time == start_time {
        return Ok(total_amount);
    }

    let elapsed = now
        .checked_sub(start_time)
        .ok_or(VestingError::ArithmeticOverflow)?;
    let duration = end_time
        .checked_sub(start_time)
        .ok_or(VestingError::ArithmeticOverflow)?;
    // Both are non-negative for a validated schedule (start <= cliff <= now < end).
    let elapsed = u128::try_from(elapsed).map_err(|_| VestingError::ArithmeticOverflow)?;
    let duration = u128::try_from(duration).map_err(|_| VestingError::ArithmeticOverflow)?;

    let v = (total_amount as u128)
        .checked_mul(elapsed)
        .ok_or(VestingError::ArithmeticOverflow)?
        .checked_div(duration)
        .ok_or(VestingError::ArithmeticOverflow)?;
    u64::try_from(v).map_err(|_| VestingError::ArithmeticOverflow)
}

/// Unlocked minus already withdrawn. A negative result means the
/// `withdrawn <= unlocked` invariant was broken upstream.
pub fn claimable_amount(unlocked: u64, withdrawn: u64) -> Result<u64, VestingError> {
    unlocked
        .checked_sub(withdrawn)
        .ok_or(VestingError::ArithmeticOverflow)
}

#[cfg(test)]
mod tests {
    use super::*;

    const T: i64 = 1_700_000_000;

    fn unlocked(now: i64) -> u64 {
        unlocked_amount(T, T + 50, T + 100, 10, now).unwrap()
    }

    #[test]
    fn nothing_unlocks_before_cliff() {
        assert_eq!(unlocked(T), 0);
        assert_eq!(unlocked(T + 1), 0);
        assert_eq!(unlocked(T + 49), 0);
    }

    #[test]
    fn cliff_releases_accrued_since_start() {
        // Accrual is measured from start, so the cliff releases the backlog.
        assert_eq!(unlocked(T + 50), 5);
    }

    #[test]
    fn linear_between_cliff_and_end() {
        assert_eq!(unlocked(T + 75), 7);
        assert_eq!(unlocked(T + 99), 9);
    }

    #[test]
    fn full_amount_at_and_after_end() {
        assert_eq!(unlocked(T + 100), 10);
        assert_eq!(unlocked(T + 101), 10);
        assert_eq!(unlocked(i64::MAX), 10);
    }

    #[test]
    fn degenerate_schedule_vests_at_end() {
        assert_eq!(unlocked_amount(T, T, T, 42, T - 1).unwrap(), 0);
        assert_eq!(unlocked_amount(T, T, T, 42, T).unwrap(), 42);
    }

    #[test]
    fn no_overflow_at_extreme_widths() {
        let start = i64::MIN / 2;
        let end = i64::MAX / 2;
        let mid = 0;
        let v = unlocked_amount(start, start, end, u64::MAX, mid).unwrap();
        assert!(v > 0 && v < u64::MAX);
        // Roughly half, within truncation.
        assert!(v >= u64::MAX / 2 - 1 && v <= u64::MAX / 2 + 1);
    }

    #[test]
    fn unlocked_is_monotonic_in_time() {
        let mut prev = 0;
        for now in T - 10..=T + 110 {
            let v = unlocked_amount(T, T + 20, T + 100, 1_000_003, now).unwrap();
            assert!(v >= prev);
            assert!(v <= 1_000_003);
            prev = v;
        }
        assert_eq!(prev, 1_000_003);
    }

    #[test]
    fn validate_accepts_ordered_schedules() {
        assert!(validate_schedule(T, T + 50, T + 100, 10).is_ok());
        assert!(validate_schedule(T, T, T + 100, 10).is_ok());
        assert!(validate_schedule(T, T + 100, T + 100, 10).is_ok());
        assert!(validate_schedule(T, T, T, 1).is_ok());
    }

    #[test]
    fn validate_rejects_bad_schedules() {
        let bad = [
            (T, T + 50, T + 100, 0),
            (T + 1, T, T + 100, 10),
            (T, T + 101, T + 100, 10),
            (T + 100, T + 100, T, 10),
            (i64::MIN, 0, i64::MAX, 10),
        ];
        for (s, c, e, a) in bad {
            assert!(matches!(
                validate_schedule(s, c, e, a),
                Err(VestingError::InvalidSchedule)
            ));
        }
    }

    #[test]
    fn claimable_subtracts_withdrawn() {
        assert_eq!(claimable_amount(7, 0).unwrap(), 7);
        assert_eq!(claimable_amount(10, 7).unwrap(), 3);
        assert_eq!(claimable_amount(10, 10).unwrap(), 0);
        assert!(matches!(
            claimable_amount(5, 6),
            Err(VestingError::ArithmeticOverflow)
        ));
    }
}
