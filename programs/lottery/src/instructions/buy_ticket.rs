use anchor_lang::prelude::*;
use anchor_lang::system_program;

use crate::error::LotteryError;
use crate::events::TicketPurchased;
use crate::state::{Lottery, Ticket};

/// Accounts required to buy a lottery ticket.
/// Handles:
/// - Ticket account creation at the next index
/// - Payment transfer
#[derive(Accounts)]
pub struct BuyTicket<'info> {
    /// The account paying for the ticket and its rent.
    #[account(mut)]
    pub player: Signer<'info>,

    /// Lottery state account, to read and increment the counter.
    #[account(mut)]
    pub lottery: Account<'info, Lottery>,

    /// Ticket at the next free index. The index comes from the lottery,
    /// never from the caller. Once its rent is paid the player must still
    /// cover the ticket price.
    #[account(
        init,
        payer = player,
        space = 8 + Ticket::INIT_SPACE,
        seeds = [lottery.count.to_be_bytes().as_ref(), lottery.key().as_ref()],
        bump,
        constraint = player.to_account_info().lamports() >= lottery.ticket_price
            @ LotteryError::InsufficientFunds,
    )]
    pub ticket: Account<'info, Ticket>,

    /// System program interface
    pub system_program: Program<'info, System>,
}

/// Buys a lottery ticket for the caller.
///
/// Steps performed:
/// 1. Check the lottery has no winner yet and book the sale.
/// 2. Transfer the ticket price from the player to the lottery.
/// 3. Stamp the ticket with the player and its index.
///
/// # Arguments
/// * `ctx` - Context containing BuyTicket accounts
pub fn process_buy_ticket(ctx: Context<BuyTicket>) -> Result<()> {
    let idx = ctx.accounts.lottery.record_purchase()?;
    let price = ctx.accounts.lottery.ticket_price;

    system_program::transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            system_program::Transfer {
                from: ctx.accounts.player.to_account_info(),
                to: ctx.accounts.lottery.to_account_info(),
            },
        ),
        price,
    )?;

    let ticket = &mut ctx.accounts.ticket;
    ticket.submitter = ctx.accounts.player.key();
    ticket.idx = idx;
    ticket.bump = ctx.bumps.ticket;

    msg!("Ticket num: {}", idx);
    msg!("Submitter: {}", ticket.submitter);

    emit!(TicketPurchased {
        lottery: ctx.accounts.lottery.key(),
        ticket: ticket.key(),
        submitter: ticket.submitter,
        idx,
    });

    Ok(())
}
