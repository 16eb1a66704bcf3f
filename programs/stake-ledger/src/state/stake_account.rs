use anchor_lang::prelude::*;

use crate::constants::STAKE_ACCOUNT_SEED;
use crate::errors::ErrorCode;
use crate::helpers::math::calculate_points_earned;

/// Per-owner staking record
///
/// Lives at the PDA derived from ["client", owner]. Holds the staked lamports
/// in its own balance, on top of its rent-exempt reserve. Exactly one record
/// exists per owner; it is never closed.
#[account]
pub struct StakeAccount {
    /// The wallet that owns this record; fixed at creation
    pub owner: Pubkey,

    /// Lamports currently staked (excludes the rent-exempt reserve)
    pub staked_amount: u64,

    /// Points settled so far and not yet claimed
    pub total_points: u64,

    /// Unix timestamp of the last settlement; never moves backward
    pub last_update_time: i64,

    /// PDA bump seed
    pub bump: u8,
}

impl StakeAccount {
    /// Account size calculation:
    /// - owner: 32 bytes (Pubkey)
    /// - staked_amount: 8 bytes (u64)
    /// - total_points: 8 bytes (u64)
    /// - last_update_time: 8 bytes (i64)
    /// - bump: 1 byte
    /// Total: 57 bytes (plus the 8-byte discriminator on chain)
    pub const LEN: usize = 32 + 8 + 8 + 8 + 1;

    /// Derive the record address for `owner`.
    ///
    /// Pure function of the owner and the program id: same inputs always
    /// yield the same address, and records of distinct owners cannot collide.
    pub fn find_address(owner: &Pubkey) -> Result<(Pubkey, u8)> {
        let found =
            Pubkey::try_find_program_address(&[STAKE_ACCOUNT_SEED, owner.as_ref()], &crate::ID)
                .ok_or(ErrorCode::DerivationExhausted)?;
        Ok(found)
    }

    /// Fold the points earned since `last_update_time` into `total_points`
    /// and advance the settlement clock to `now`.
    ///
    /// Every state-mutating instruction calls this first, with the record's
    /// pre-mutation `staked_amount`, so points are never lost across
    /// overlapping balance changes. Returns the points earned by this call.
    pub fn settle(&mut self, now: i64) -> Result<u64> {
        let earned = calculate_points_earned(self.staked_amount, self.last_update_time, now)?;
        self.total_points = self
            .total_points
            .checked_add(earned)
            .ok_or(ErrorCode::ArithmeticOverflow)?;
        self.last_update_time = now;
        Ok(earned)
    }

    /// Add freshly deposited lamports to the staked balance.
    pub fn apply_stake(&mut self, amount: u64) -> Result<()> {
        require!(amount > 0, ErrorCode::InvalidAmount);
        self.staked_amount = self
            .staked_amount
            .checked_add(amount)
            .ok_or(ErrorCode::ArithmeticOverflow)?;
        Ok(())
    }

    /// Remove lamports from the staked balance ahead of their withdrawal.
    pub fn apply_unstake(&mut self, amount: u64) -> Result<()> {
        require!(amount > 0, ErrorCode::InvalidAmount);
        require!(amount <= self.staked_amount, ErrorCode::InsufficientStake);
        self.staked_amount -= amount;
        Ok(())
    }

    /// Take the accumulated points and reset the total to zero.
    /// Claiming zero points is a legal no-op.
    pub fn claim(&mut self) -> u64 {
        let claimed = self.total_points;
        self.total_points = 0;
        claimed
    }
}
