use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::ErrorCode;

/// Points earned by `staked_amount` lamports between two clock readings.
///
/// Formula (integer floor division, remainder truncates):
///   points = staked_amount * elapsed_seconds * POINTS_PER_SOL_PER_DAY
///            / (LAMPORTS_PER_SOL * SECONDS_PER_DAY)
///
/// 1 SOL staked for 1 day earns exactly POINTS_PER_SOL_PER_DAY. The
/// intermediate product is carried in u128 so realistic stakes cannot
/// overflow before the division.
///
/// `to_time < from_time` means the cluster clock ran backwards relative
/// to the stored timestamp; that is rejected rather than minting
/// negative time.
pub fn calculate_points_earned(staked_amount: u64, from_time: i64, to_time: i64) -> Result<u64> {
    require!(to_time >= from_time, ErrorCode::ArithmeticOverflow);

    if staked_amount == 0 || to_time == from_time {
        return Ok(0);
    }

    // i128 difference of two i64s cannot overflow, and the guard above
    // makes it non-negative.
    let elapsed = ((to_time as i128) - (from_time as i128)) as u128;

    let lamport_seconds = (staked_amount as u128)
        .checked_mul(elapsed)
        .ok_or(ErrorCode::ArithmeticOverflow)?;
    let numerator = lamport_seconds
        .checked_mul(POINTS_PER_SOL_PER_DAY as u128)
        .ok_or(ErrorCode::ArithmeticOverflow)?;
    let denominator = (LAMPORTS_PER_SOL as u128) * (SECONDS_PER_DAY as u128);

    let points = numerator
        .checked_div(denominator)
        .ok_or(ErrorCode::ArithmeticOverflow)?;

    #[cfg(feature = "verbose")]
    msg!(
        "Accrual: {} lamports over {}s -> {} points",
        staked_amount,
        elapsed,
        points
    );

    let points = u64::try_from(points).map_err(|_| ErrorCode::ArithmeticOverflow)?;

    Ok(points)
}
