use anchor_lang::prelude::*;
use anchor_lang::solana_program::program::invoke;
use anchor_lang::solana_program::system_instruction;

use crate::errors::ErrorCode;
use crate::state::StakeAccount;

/// Lamports the custody account must always retain: the rent-exempt
/// minimum for its own record data. User withdrawals may never dip
/// below this floor or the runtime would garbage-collect the record.
pub fn retention_minimum() -> Result<u64> {
    Ok(Rent::get()?.minimum_balance(8 + StakeAccount::LEN))
}

/// Moves `amount` lamports from the owner's wallet into custody via the
/// System Program. The owner signed the transaction, so no PDA signing
/// is involved; an underfunded wallet fails inside the transfer itself.
pub fn deposit_to_custody<'info>(
    from: &AccountInfo<'info>,
    custody: &AccountInfo<'info>,
    system_program: &AccountInfo<'info>,
    amount: u64,
) -> Result<()> {
    invoke(
        &system_instruction::transfer(from.key, custody.key, amount),
        &[
            from.to_account_info(),
            custody.to_account_info(),
            system_program.to_account_info(),
        ],
    )?;

    #[cfg(feature = "verbose")]
    msg!("Custody credit: {} lamports from {}", amount, from.key);

    Ok(())
}

/// Moves `amount` lamports from custody back to the recipient.
///
/// The custody account is program-owned and carries record data, so the
/// System Program cannot debit it; both balances are adjusted directly.
/// The debit must leave at least `retention_minimum` behind.
pub fn withdraw_from_custody<'info>(
    custody: &AccountInfo<'info>,
    recipient: &AccountInfo<'info>,
    amount: u64,
) -> Result<()> {
    let remaining = custody
        .lamports()
        .checked_sub(amount)
        .ok_or(ErrorCode::InsufficientFunds)?;
    require!(
        remaining >= retention_minimum()?,
        ErrorCode::RetentionViolation
    );

    let credited = recipient
        .lamports()
        .checked_add(amount)
        .ok_or(ErrorCode::ArithmeticOverflow)?;

    **custody.try_borrow_mut_lamports()? = remaining;
    **recipient.try_borrow_mut_lamports()? = credited;

    #[cfg(feature = "verbose")]
    msg!("Custody debit: {} lamports out, {} retained", amount, remaining);

    Ok(())
}
