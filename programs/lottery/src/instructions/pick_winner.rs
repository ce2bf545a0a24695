use anchor_lang::prelude::*;

use crate::error::LotteryError;
use crate::events::WinnerPicked;
use crate::state::Lottery;

/// Accounts required for the oracle to pick a lottery winner.
///
/// This ensures that:
/// 1. Only the oracle recorded on the lottery can pick a winner.
/// 2. A winner hasn't already been chosen (checked in the handler).
#[derive(Accounts)]
pub struct PickWinner<'info> {
    pub oracle: Signer<'info>,

    /// The main lottery state account.
    #[account(
        mut,
        has_one = oracle @ LotteryError::Unauthorized,
    )]
    pub lottery: Account<'info, Lottery>,
}

pub fn process_pick_winner(ctx: Context<PickWinner>, winner_index: u32) -> Result<()> {
    let lottery = &mut ctx.accounts.lottery;

    msg!("Ticket num: {}", lottery.count);
    msg!("Winner: {}", winner_index);

    lottery.resolve(winner_index)?;

    msg!("Payout: {}", lottery.payout);
    msg!("Escrow: {}", lottery.escrow);

    emit!(WinnerPicked {
        lottery: lottery.key(),
        winner_index,
        payout: lottery.payout,
        escrow: lottery.escrow,
    });

    Ok(())
}
