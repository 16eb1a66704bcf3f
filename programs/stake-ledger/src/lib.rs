use anchor_lang::prelude::*;

pub mod constants;
pub mod contexts;
pub mod errors;
pub mod events;
pub mod helpers;
pub mod state;

mod formal_verification;

use contexts::*;
use errors::ErrorCode;
use events::*;
use helpers::transfer;

declare_id!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");

#[program]
pub mod stake_ledger {
    use super::*;

    // Create the signer's stake record at its derived address
    pub fn create_account(ctx: Context<CreateAccount>) -> Result<()> {
        let stake_account = &mut ctx.accounts.stake_account;
        let clock = Clock::get()?;

        // A populated record means this wallet already created one;
        // init_if_needed leaves fresh accounts zeroed, so a default
        // owner is the only state a new record can be in.
        require!(
            stake_account.owner == Pubkey::default(),
            ErrorCode::AlreadyInitialized
        );

        stake_account.owner = ctx.accounts.payer.key();
        stake_account.staked_amount = 0;
        stake_account.total_points = 0;
        stake_account.last_update_time = clock.unix_timestamp;
        stake_account.bump = ctx.bumps.stake_account;

        emit!(AccountCreated {
            owner: stake_account.owner,
            stake_account: stake_account.key(),
            timestamp: clock.unix_timestamp,
        });

        msg!("Stake account created for {}", stake_account.owner);

        Ok(())
    }

    pub fn stake(ctx: Context<Stake>, amount: u64) -> Result<()> {
        let clock = Clock::get()?;

        // Verify the record is populated
        require!(
            ctx.accounts.stake_account.owner != Pubkey::default(),
            ErrorCode::RecordNotFound
        );

        // Settle at the pre-deposit balance; the new lamports only earn
        // from this timestamp forward
        let points_settled = ctx.accounts.stake_account.settle(clock.unix_timestamp)?;
        ctx.accounts.stake_account.apply_stake(amount)?;

        transfer::deposit_to_custody(
            &ctx.accounts.user.to_account_info(),
            &ctx.accounts.stake_account.to_account_info(),
            &ctx.accounts.system_program.to_account_info(),
            amount,
        )?;

        let stake_account = &ctx.accounts.stake_account;

        emit!(Staked {
            owner: stake_account.owner,
            amount,
            staked_amount: stake_account.staked_amount,
            points_settled,
            timestamp: clock.unix_timestamp,
        });

        msg!(
            "Staked {} lamports (total staked: {})",
            amount,
            stake_account.staked_amount
        );

        Ok(())
    }

    pub fn unstake(ctx: Context<Unstake>, amount: u64) -> Result<()> {
        let clock = Clock::get()?;

        // Verify the record is populated
        require!(
            ctx.accounts.stake_account.owner != Pubkey::default(),
            ErrorCode::RecordNotFound
        );

        // Settle at the pre-withdrawal balance so the full stake earns
        // up to this instant
        let points_settled = ctx.accounts.stake_account.settle(clock.unix_timestamp)?;
        ctx.accounts.stake_account.apply_unstake(amount)?;

        transfer::withdraw_from_custody(
            &ctx.accounts.stake_account.to_account_info(),
            &ctx.accounts.user.to_account_info(),
            amount,
        )?;

        let stake_account = &ctx.accounts.stake_account;

        emit!(Unstaked {
            owner: stake_account.owner,
            amount,
            staked_amount: stake_account.staked_amount,
            points_settled,
            timestamp: clock.unix_timestamp,
        });

        msg!(
            "Unstaked {} lamports (total staked: {})",
            amount,
            stake_account.staked_amount
        );

        Ok(())
    }

    // Settlement-on-query: reading the point total is a real transaction
    // that folds pending accrual into the record first
    pub fn get_points(ctx: Context<GetPoints>) -> Result<()> {
        let clock = Clock::get()?;

        let stake_account = &mut ctx.accounts.stake_account;

        // Verify the record is populated
        require!(
            stake_account.owner != Pubkey::default(),
            ErrorCode::RecordNotFound
        );

        let points_earned = stake_account.settle(clock.unix_timestamp)?;

        emit!(PointsSettled {
            owner: stake_account.owner,
            points_earned,
            total_points: stake_account.total_points,
            timestamp: clock.unix_timestamp,
        });

        msg!(
            "Points: {} earned since last update, {} total",
            points_earned,
            stake_account.total_points
        );

        Ok(())
    }

    // Settle, take the accumulated total, reset it to zero. Claiming with
    // zero points is a legal no-op.
    pub fn claim_points(ctx: Context<ClaimPoints>) -> Result<()> {
        let clock = Clock::get()?;

        let stake_account = &mut ctx.accounts.stake_account;

        // Verify the record is populated
        require!(
            stake_account.owner != Pubkey::default(),
            ErrorCode::RecordNotFound
        );

        stake_account.settle(clock.unix_timestamp)?;
        let points_claimed = stake_account.claim();

        emit!(PointsClaimed {
            owner: stake_account.owner,
            points_claimed,
            timestamp: clock.unix_timestamp,
        });

        msg!("Claimed {} points", points_claimed);

        Ok(())
    }
}
