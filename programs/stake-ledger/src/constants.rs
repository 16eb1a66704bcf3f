// ══════════════════════════════════════════════════════════════════════════════
// PDA SEEDS
// ══════════════════════════════════════════════════════════════════════════════

/// Stake account PDA seed, combined with the owner's pubkey.
/// One stake account exists per owner.
pub const STAKE_ACCOUNT_SEED: &[u8] = b"client";

// ══════════════════════════════════════════════════════════════════════════════
// ACCRUAL PARAMETERS
// ══════════════════════════════════════════════════════════════════════════════

/// Points earned per whole SOL staked per full day.
/// 1 SOL held for 24h yields exactly 1,000,000 points.
pub const POINTS_PER_SOL_PER_DAY: u64 = 1_000_000;

/// Seconds in one accrual day
pub const SECONDS_PER_DAY: u64 = 86_400;

/// Lamports per SOL (smallest unit per whole coin)
pub const LAMPORTS_PER_SOL: u64 = 1_000_000_000;
