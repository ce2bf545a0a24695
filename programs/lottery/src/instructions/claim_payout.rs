use anchor_lang::prelude::*;

use crate::error::LotteryError;
use crate::events::PayoutClaimed;
use crate::state::{Lottery, Ticket};

/// Accounts required for paying out the lottery prize.
///
/// Ensures:
/// 1. The lottery winner has been selected.
/// 2. The ticket is a genuine ticket of this lottery.
/// 3. Lamports go to the ticket's submitter and nobody else.
///
/// Anyone may send the transaction; the recipient is fixed by the ticket.
#[derive(Accounts)]
pub struct ClaimPayout<'info> {
    /// The main lottery state account.
    #[account(
        mut,
        constraint = lottery.is_resolved() @ LotteryError::WinnerNotChosen,
    )]
    pub lottery: Account<'info, Lottery>,

    /// The winning ticket, re-derived from its index and the lottery.
    #[account(
        seeds = [ticket.idx.to_be_bytes().as_ref(), lottery.key().as_ref()],
        bump = ticket.bump,
    )]
    pub ticket: Account<'info, Ticket>,

    /// The account receiving the payout.
    /// CHECK: Only receives lamports and must be the ticket submitter.
    #[account(
        mut,
        address = ticket.submitter @ LotteryError::NotWinner,
    )]
    pub winner: UncheckedAccount<'info>,
}

/// Processes the payout for the winner.
///
/// Steps:
/// 1. Verify the ticket is the winning one and the payout is unclaimed.
/// 2. Transfer the payout to the winner and mark it claimed.
///
/// # Arguments
/// * `ctx` - Context containing `ClaimPayout` accounts
pub fn process_claim_payout(ctx: Context<ClaimPayout>) -> Result<()> {
    let amount = ctx.accounts.lottery.claim_payout(ctx.accounts.ticket.idx)?;

    msg!("Winner: {}", ctx.accounts.winner.key());
    msg!("Payout: {}", amount);

    **ctx
        .accounts
        .lottery
        .to_account_info()
        .try_borrow_mut_lamports()? -= amount;
    **ctx.accounts.winner.try_borrow_mut_lamports()? += amount;

    emit!(PayoutClaimed {
        lottery: ctx.accounts.lottery.key(),
        winner: ctx.accounts.winner.key(),
        amount,
    });

    Ok(())
}
