use anchor_lang::prelude::*;

// ══════════════════════════════════════════════════════════════════════════════
// LIFECYCLE EVENTS
// ══════════════════════════════════════════════════════════════════════════════

/// Emitted when a stake account is created
#[event]
pub struct AccountCreated {
    pub owner: Pubkey,
    pub stake_account: Pubkey,
    pub timestamp: i64,
}

// ══════════════════════════════════════════════════════════════════════════════
// VALUE MOVEMENT EVENTS
// ══════════════════════════════════════════════════════════════════════════════

/// Emitted when lamports are staked into custody
#[event]
pub struct Staked {
    pub owner: Pubkey,
    pub amount: u64,
    pub staked_amount: u64,
    pub points_settled: u64,
    pub timestamp: i64,
}

/// Emitted when lamports are returned to the owner
#[event]
pub struct Unstaked {
    pub owner: Pubkey,
    pub amount: u64,
    pub staked_amount: u64,
    pub points_settled: u64,
    pub timestamp: i64,
}

// ══════════════════════════════════════════════════════════════════════════════
// POINTS EVENTS
// ══════════════════════════════════════════════════════════════════════════════

/// Emitted when pending points are settled into the running total
#[event]
pub struct PointsSettled {
    pub owner: Pubkey,
    pub points_earned: u64,
    pub total_points: u64,
    pub timestamp: i64,
}

/// Emitted when accumulated points are claimed and the total resets to zero.
/// `points_claimed` is the durable record of the claimed amount.
#[event]
pub struct PointsClaimed {
    pub owner: Pubkey,
    pub points_claimed: u64,
    pub timestamp: i64,
}
